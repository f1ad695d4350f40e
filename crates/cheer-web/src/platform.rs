//! Browser [`Platform`]: `requestAnimationFrame` and the window resize event.

use cheer_engine::{FrameHandle, ListenerId, Platform};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;

/// Window-backed platform for one engine instance.
///
/// Both callbacks are created once and kept here, so the resize listener is
/// removed with the exact function object that was registered.
pub struct WebPlatform {
    window: Window,
    canvas: HtmlCanvasElement,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
}

impl WebPlatform {
    pub fn new(
        window: Window,
        canvas: HtmlCanvasElement,
        on_frame: Closure<dyn FnMut(f64)>,
        on_resize: Closure<dyn FnMut()>,
    ) -> Self {
        Self {
            window,
            canvas,
            on_frame,
            on_resize,
        }
    }

    fn dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    }
}

impl Platform for WebPlatform {
    type Surface = CanvasSurface;

    fn acquire_surface(&mut self) -> Option<CanvasSurface> {
        CanvasSurface::from_canvas(self.canvas.clone())
    }

    fn viewport_size(&self) -> (u32, u32) {
        (
            Self::dimension(self.window.inner_width()),
            Self::dimension(self.window.inner_height()),
        )
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::error!("failed to register resize listener: {:?}", e);
        }
        // One listener per platform; the id only has to round-trip.
        ListenerId(1)
    }

    fn remove_resize_listener(&mut self, _id: ListenerId) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::error!("failed to remove resize listener: {:?}", e);
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}
