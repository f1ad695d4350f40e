//! Host platform contract.
//!
//! The engine never touches a window or event loop directly. A host supplies
//! the drawing surface, reports viewport size, owns the resize listener, and
//! schedules per-frame callbacks. When a scheduled frame fires, the host calls
//! [`ParticleEngine::on_frame`](crate::ParticleEngine::on_frame); when the
//! viewport changes it calls
//! [`ParticleEngine::handle_resize`](crate::ParticleEngine::handle_resize).

use crate::renderer::DrawingSurface;

/// Handle to a pending per-frame callback (e.g. a `requestAnimationFrame` id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Handle to a registered viewport resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// Everything the engine needs from the environment it runs in.
pub trait Platform {
    type Surface: DrawingSurface;

    /// Obtain the 2D drawing surface. `None` when no 2D context is available.
    fn acquire_surface(&mut self) -> Option<Self::Surface>;

    /// Current viewport size in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Start delivering viewport resize notifications to this engine.
    fn add_resize_listener(&mut self) -> ListenerId;

    /// Remove exactly the listener registered under `id`.
    fn remove_resize_listener(&mut self, id: ListenerId);

    /// Schedule one callback for the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);
}
