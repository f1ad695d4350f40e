//! Canvas 2D drawing surface.

use cheer_engine::{DrawingSurface, VectorColor};
use lyon::path::{Path, PathEvent};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`DrawingSurface`] backed by an `<canvas>` element's 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context. `None` if the canvas cannot provide one
    /// (e.g. it already holds a WebGL context).
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Setting either dimension also resets the context state.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        if let Err(e) = self.ctx.translate(x as f64, y as f64) {
            log::debug!("translate failed: {:?}", e);
        }
    }

    fn rotate(&mut self, radians: f32) {
        if let Err(e) = self.ctx.rotate(radians as f64) {
            log::debug!("rotate failed: {:?}", e);
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => ctx.move_to(at.x as f64, at.y as f64),
                PathEvent::Line { to, .. } => ctx.line_to(to.x as f64, to.y as f64),
                PathEvent::Quadratic { ctrl, to, .. } => {
                    ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
                }
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => ctx.bezier_curve_to(
                    ctrl1.x as f64,
                    ctrl1.y as f64,
                    ctrl2.x as f64,
                    ctrl2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathEvent::End { close: true, .. } => ctx.close_path(),
                PathEvent::End { close: false, .. } => {}
            }
        }
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
    }
}
