//! Drawing surface contract.
//!
//! The engine paints through this trait only. It mirrors the subset of the
//! HTML Canvas 2D API the particle renderer needs, so a browser canvas
//! (`cheer-web`), the CPU tessellator in [`VectorSurface`](super::vector::VectorSurface),
//! or a future native GPU backend can all host the same effects.

use lyon::path::Path;

use super::vector::VectorColor;

/// A 2D rendering target with a Canvas-style transform stack.
///
/// `save`/`restore` snapshot and restore both the transform and the global
/// alpha. Paths passed to `fill_path` are in the current local frame.
pub trait DrawingSurface {
    /// Backing pixel dimensions `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Update the backing pixel dimensions. Resets the transform stack.
    fn resize(&mut self, width: u32, height: u32);

    /// Wipe the whole surface.
    fn clear(&mut self);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    /// Rotate the local frame clockwise (y-down) by `radians`.
    fn rotate(&mut self, radians: f32);

    /// Opacity multiplier for subsequent fills, in [0, 1].
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill a closed path with a solid color.
    fn fill_path(&mut self, path: &Path, color: VectorColor);

    fn width(&self) -> f32 {
        self.size().0 as f32
    }

    fn height(&self) -> f32 {
        self.size().1 as f32
    }
}
