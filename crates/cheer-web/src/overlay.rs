//! `CelebrationCanvas`, the exported overlay handle.
//!
//! Owns the engine behind a shared cell. Every browser callback (rAF, resize,
//! delayed preset bursts) holds only a weak reference, so destroying the
//! handle leaves them inert.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use cheer_engine::{Celebration, EngineConfig, ParticleEngine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::platform::WebPlatform;
use crate::timers::PendingTimers;

type Engine = ParticleEngine<WebPlatform>;
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Run `f` against the engine if it is still alive and not already borrowed.
fn with_engine(weak: &Weak<RefCell<Option<Engine>>>, f: impl FnOnce(&mut Engine)) {
    let Some(cell) = weak.upgrade() else {
        return;
    };
    let Ok(mut borrow) = cell.try_borrow_mut() else {
        log::warn!("engine busy; callback dropped");
        return;
    };
    if let Some(engine) = borrow.as_mut() {
        f(engine);
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install console logging at `level` and the panic hook. Only the first
/// call sets the level; repeated calls are harmless.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level);
}

/// Celebration overlay bound to one `<canvas>`.
///
/// The host creates one per visible overlay, triggers effects on it, and
/// calls `destroy()` when the overlay unmounts.
#[wasm_bindgen]
pub struct CelebrationCanvas {
    engine: SharedEngine,
    window: Window,
    /// Pending preset follow-ups and the closures `setTimeout` will call.
    timers: RefCell<PendingTimers<Closure<dyn FnMut()>>>,
}

#[wasm_bindgen]
impl CelebrationCanvas {
    /// Bind to `canvas`. Throws if no 2D context is available or
    /// `config_json` is malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<CelebrationCanvas, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json).map_err(to_js)?,
            None => EngineConfig::default(),
        }
        .with_default_seed(random_seed());
        init_logging(config.log_level());
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;

        let shared: SharedEngine = Rc::new(RefCell::new(None));
        let on_frame = {
            let weak = Rc::downgrade(&shared);
            Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| with_engine(&weak, |e| e.on_frame()))
        };
        let on_resize = {
            let weak = Rc::downgrade(&shared);
            Closure::<dyn FnMut()>::new(move || with_engine(&weak, |e| e.handle_resize()))
        };

        let platform = WebPlatform::new(window.clone(), canvas, on_frame, on_resize);
        let engine = ParticleEngine::new(platform, config).map_err(to_js)?;
        *shared.borrow_mut() = Some(engine);
        log::info!("celebration canvas: initialized");

        Ok(Self {
            engine: shared,
            window,
            timers: RefCell::new(PendingTimers::default()),
        })
    }

    /// Trigger a named effect. Unknown names are logged and ignored.
    pub fn celebrate(&self, effect: &str, x: Option<f32>, y: Option<f32>) {
        with_engine(&Rc::downgrade(&self.engine), |e| e.create_effect(effect, x, y));
    }

    /// Trigger a preset such as `"perfect-score"` or `"badge"` (with `arg`
    /// `"legendary"`). Delayed bursts fire from `setTimeout`.
    pub fn celebrate_preset(
        &self,
        preset: &str,
        arg: Option<String>,
        x: Option<f32>,
        y: Option<f32>,
    ) -> Result<(), JsValue> {
        let celebration = Celebration::from_name(preset, arg.as_deref()).map_err(to_js)?;
        self.timers.borrow_mut().prune_fired();
        for burst in celebration.bursts() {
            let name = burst.effect.name();
            if burst.delay_ms == 0 {
                self.celebrate(name, x, y);
                continue;
            }
            let weak = Rc::downgrade(&self.engine);
            let fired = PendingTimers::<Closure<dyn FnMut()>>::fired_flag();
            let callback = {
                let fired = fired.clone();
                Closure::<dyn FnMut()>::new(move || {
                    fired.set(true);
                    with_engine(&weak, |e| e.create_effect(name, x, y));
                })
            };
            match self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    burst.delay_ms as i32,
                ) {
                Ok(id) => self.timers.borrow_mut().push(id, fired, callback),
                Err(e) => log::error!("setTimeout failed: {:?}", e),
            }
        }
        Ok(())
    }

    /// Stop immediately: drop all particles, pending follow-ups, and the frame loop.
    pub fn clear(&self) {
        self.cancel_timers();
        with_engine(&Rc::downgrade(&self.engine), |e| e.clear());
    }

    /// Full teardown. The handle is inert afterwards.
    pub fn destroy(&self) {
        self.cancel_timers();
        // Take the engine out first so the drop happens with no borrow held.
        let engine = self.engine.borrow_mut().take();
        if let Some(mut engine) = engine {
            engine.destroy();
        }
    }

    /// Live particle count (0 after destroy).
    pub fn particle_count(&self) -> u32 {
        self.engine
            .borrow()
            .as_ref()
            .map(|e| e.particle_count() as u32)
            .unwrap_or(0)
    }
}

impl CelebrationCanvas {
    /// Clear unfired timeouts and release every stored closure.
    fn cancel_timers(&self) {
        let Ok(mut timers) = self.timers.try_borrow_mut() else {
            return;
        };
        for id in timers.take_unfired() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for CelebrationCanvas {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
