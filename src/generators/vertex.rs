//! Interleaved vertex storage shared by every generator.
//!
//! A vertex is six `f32`s laid out as `(x, y, z, r, g, b)`, which is exactly the
//! layout the renderer uploads, so the buffer can be handed over as a flat float
//! slice without repacking.

/// Position + flat colour.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Number of floats per vertex in the flat view.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Per-frame vertex output. Generators clear it before writing.
#[derive(Debug, Default, Clone)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Drop all vertices but keep the allocation for the next frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    #[inline]
    pub fn push(&mut self, position: [f32; 3], color: [f32; 3]) {
        self.vertices.push(Vertex { position, color });
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Flat `(x, y, z, r, g, b)` view; length is always a multiple of six.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}
