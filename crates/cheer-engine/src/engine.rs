//! The particle engine: owns the live set, the surface, and the frame loop.
//!
//! Lifecycle: `new` -> Ready -> (burst) Animating -> (last particle gone)
//! Ready ... -> `destroy` -> Destroyed. The loop only runs while particles
//! are live: each `on_frame` re-arms the next frame iff something survived.

use glam::Vec2;

use crate::config::EngineConfig;
use crate::effects::{spawn_burst, EffectDef, EffectKind, Particle, Rng};
use crate::error::{EngineError, Result};
use crate::host::{FrameHandle, ListenerId, Platform};
use crate::renderer::{render_particles, DrawingSurface};

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Bound to a surface, no frame scheduled.
    Ready,
    /// A frame is scheduled and particles are live.
    Animating,
    Destroyed,
}

/// Celebration particle engine bound to one drawing surface.
pub struct ParticleEngine<P: Platform> {
    platform: P,
    surface: P::Surface,
    config: EngineConfig,
    particles: Vec<Particle>,
    rng: Rng,
    pending_frame: Option<FrameHandle>,
    resize_listener: Option<ListenerId>,
    destroyed: bool,
}

impl<P: Platform> ParticleEngine<P> {
    /// Bind to the platform's drawing surface and start tracking the viewport.
    ///
    /// Fails with [`EngineError::ContextUnavailable`] when the platform has no
    /// 2D context, or [`EngineError::InvalidConfig`] for out-of-range settings.
    pub fn new(mut platform: P, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let surface = platform
            .acquire_surface()
            .ok_or(EngineError::ContextUnavailable)?;
        let listener = platform.add_resize_listener();

        let mut engine = Self {
            platform,
            surface,
            rng: Rng::new(config.effective_seed()),
            particles: Vec::with_capacity(config.max_particles.min(1024)),
            config,
            pending_frame: None,
            resize_listener: Some(listener),
            destroyed: false,
        };
        engine.handle_resize();
        let (w, h) = engine.surface.size();
        log::debug!("particle engine ready ({}x{})", w, h);
        Ok(engine)
    }

    pub fn state(&self) -> EngineState {
        if self.destroyed {
            EngineState::Destroyed
        } else if self.pending_frame.is_some() {
            EngineState::Animating
        } else {
            EngineState::Ready
        }
    }

    /// Trigger a named effect. Unknown names are logged and ignored.
    /// A missing coordinate defaults to the surface center on that axis.
    pub fn create_effect(&mut self, name: &str, x: Option<f32>, y: Option<f32>) {
        let kind = match name.parse::<EffectKind>() {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("{}; ignoring", e);
                return;
            }
        };
        let center = self.center();
        let origin = Vec2::new(x.unwrap_or(center.x), y.unwrap_or(center.y));
        self.emit(kind, origin);
    }

    /// Trigger a catalog effect at `origin`, honoring config overrides.
    pub fn emit(&mut self, kind: EffectKind, origin: Vec2) {
        let def = self.config.effect(kind);
        self.emit_def(&def, origin);
    }

    /// Trigger a burst from an arbitrary definition.
    pub fn emit_def(&mut self, def: &EffectDef, origin: Vec2) {
        if self.destroyed {
            log::warn!("emit on destroyed engine ignored");
            return;
        }
        let spawned = spawn_burst(
            &mut self.particles,
            &mut self.rng,
            def,
            origin,
            self.config.max_particles,
        );
        if spawned > 0 {
            self.ensure_running();
        }
    }

    /// One animation tick: simulate every particle, then clear and redraw,
    /// then schedule the next frame only if anything is still live.
    pub fn on_frame(&mut self) {
        if self.destroyed {
            return;
        }
        self.pending_frame = None;

        self.step();
        render_particles(&mut self.surface, &self.particles);

        if self.particles.is_empty() {
            log::debug!("particle engine idle");
        } else {
            self.pending_frame = Some(self.platform.request_frame());
        }
    }

    /// Advance and prune without rendering or rescheduling.
    pub fn step(&mut self) {
        let decay = self.config.alpha_decay;
        let floor = self.surface.height() + self.config.offscreen_margin;
        self.particles.retain_mut(|p| p.advance(decay, floor));
    }

    /// Match the surface to the current viewport size.
    pub fn handle_resize(&mut self) {
        if self.destroyed {
            return;
        }
        let (w, h) = self.platform.viewport_size();
        if self.surface.size() != (w, h) {
            self.surface.resize(w, h);
        }
    }

    /// Drop every particle, stop the loop, and wipe the surface.
    pub fn clear(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_pending();
        self.particles.clear();
        self.surface.clear();
    }

    /// Full teardown. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.clear();
        if let Some(id) = self.resize_listener.take() {
            self.platform.remove_resize_listener(id);
        }
        self.destroyed = true;
        log::debug!("particle engine destroyed");
    }

    /// Handle of the scheduled-but-unfired frame, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn surface(&self) -> &P::Surface {
        &self.surface
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.surface.width() / 2.0, self.surface.height() / 2.0)
    }

    fn ensure_running(&mut self) {
        if self.pending_frame.is_none() {
            log::debug!("particle engine animating");
            self.pending_frame = Some(self.platform.request_frame());
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.platform.cancel_frame(handle);
        }
    }
}

impl<P: Platform> Drop for ParticleEngine<P> {
    fn drop(&mut self) {
        self.destroy();
    }
}
