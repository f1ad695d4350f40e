//! Lyon-based CPU drawing surface.
//!
//! Tessellates filled paths into a flat triangle-list buffer that a GPU
//! backend can upload as-is. Transforms and opacity follow Canvas 2D
//! semantics so the same renderer code drives this surface and a browser
//! canvas.
//!
//! # Usage
//!
//! ```ignore
//! let mut surface = VectorSurface::new(800, 600);
//! surface.save();
//! surface.translate(100.0, 100.0);
//! surface.rotate(std::f32::consts::FRAC_PI_4);
//! surface.set_global_alpha(0.5);
//! surface.fill_path(&shape_path(Shape::Star, 20.0), VectorColor::from_hex(0xFFD700));
//! surface.restore();
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, Vec2};
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    VertexBuffers,
};

use super::traits::DrawingSurface;

/// Per-vertex data for vector/polygon rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self::rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgb()` string for Canvas 2D fill styles. Alpha is left to `globalAlpha`.
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({}, {}, {})", channel(self.r), channel(self.g), channel(self.b))
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon fill tessellation. Bakes the current
/// transform and opacity into each vertex.
struct FillVertexCtor {
    color: VectorColor,
    transform: Affine2,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = self
            .transform
            .transform_point2(Vec2::new(vertex.position().x, vertex.position().y));
        VectorVertex {
            x: p.x,
            y: p.y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Snapshot pushed by `save`.
#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: Affine2,
    alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            alpha: 1.0,
        }
    }
}

/// CPU drawing surface backed by lyon tessellation.
///
/// Cleared each frame and populated by `fill_path` calls.
pub struct VectorSurface {
    width: u32,
    height: u32,
    fill_tess: FillTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    current: DrawState,
    stack: Vec<DrawState>,
    fills: usize,
}

impl VectorSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill_tess: FillTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
            current: DrawState::default(),
            stack: Vec::new(),
            fills: 0,
        }
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Number of paths filled since the last clear.
    pub fn fill_count(&self) -> usize {
        self.fills
    }

    /// Depth of the save/restore stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Tessellated vertices as a typed slice.
    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }
}

impl DrawingSurface for VectorSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.current = DrawState::default();
        self.stack.clear();
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.fills = 0;
    }

    fn save(&mut self) {
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.current = state;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.current.transform = self.current.transform * Affine2::from_translation(Vec2::new(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.current.transform = self.current.transform * Affine2::from_angle(radians);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.current.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let ctor = FillVertexCtor {
            color: color.with_alpha(color.a * self.current.alpha),
            transform: self.current.transform,
        };
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, ctor),
        );

        match result {
            Ok(()) => {
                self.fills += 1;
                self.flush_geometry();
            }
            Err(e) => {
                log::debug!("fill tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}
