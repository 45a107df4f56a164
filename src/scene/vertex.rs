/// One record of the non-indexed vertex stream: position and a
/// vertically flipped texture coordinate, interleaved for upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVertex {
  pub position: [f32; 3],
  pub tex_coord: [f32; 2],
}

impl FlatVertex {
  /// Floats per vertex record.
  pub const STRIDE: usize = 5;
}

/// A triangle-soup vertex buffer: one independent record per triangle
/// corner, in source order, ready for a non-indexed draw call.
#[derive(Debug, Default, PartialEq)]
pub struct FlatVertexBuffer {
  pub vertices: Vec<FlatVertex>,
}

impl FlatVertexBuffer {

  /// The number of vertex records.
  /// return: The record count.
  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  /// Whether the buffer holds no vertices.
  /// return: True when empty.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// The number of triangles the buffer draws.
  /// return: The triangle count.
  pub fn triangle_count(&self) -> usize {
    self.vertices.len() / 3
  }

  /// Flatten to interleaved floats, stride 5, for the upload step.
  /// return: The interleaved attribute data.
  pub fn to_floats(&self) -> Vec<f32> {
    let mut out = Vec::with_capacity(self.vertices.len() * FlatVertex::STRIDE);
    for vertex in &self.vertices {
      out.extend_from_slice(&vertex.position);
      out.extend_from_slice(&vertex.tex_coord);
    }
    out
  }

}
