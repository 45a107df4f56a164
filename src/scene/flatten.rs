use crate::error::ViewerError;
use super::mesh::IndexedMesh;
use super::material::Material;
use super::vertex::{
  FlatVertex,
  FlatVertexBuffer,
};

/// De-index a triangle mesh into a flat, interleaved vertex buffer.
///
/// Every (triangle, corner) pair becomes one independent record; shared
/// vertices are duplicated on purpose, since the renderer draws without
/// an index buffer. Corner order within a triangle and triangle order are
/// preserved. Texture coordinates are vertically flipped (`v' = 1 - v`)
/// to match the sampling convention of the upload step.
///
/// This is a one-shot conversion: the mesh is consumed and dropped here.
/// param mesh: The indexed mesh to de-index.
/// param materials: The object's materials; only the first entry is read.
/// return: The vertex buffer and the diffuse texture name.
pub fn flatten(
  mesh: IndexedMesh,
  materials: &[Material],
) -> Result<(FlatVertexBuffer, String), ViewerError> {
  let material = materials.first().ok_or(ViewerError::NoMaterial)?;
  if materials.len() > 1 {
    log::warn!("{} materials supplied; only the first is used.", materials.len());
  }
  if mesh.triangles.is_empty() {
    log::warn!("Mesh has no triangles; the flattened buffer is empty.");
  }

  let mut vertices = Vec::with_capacity(mesh.triangles.len() * 3);
  for triangle in &mesh.triangles {
    for corner in &triangle.corners {
      let position = mesh
        .positions
        .get(corner.position_index)
        .ok_or(ViewerError::IndexOutOfRange {
          kind: "position",
          index: corner.position_index,
          len: mesh.positions.len(),
        })?;
      let texcoord = mesh
        .texcoords
        .get(corner.texcoord_index)
        .ok_or(ViewerError::IndexOutOfRange {
          kind: "texcoord",
          index: corner.texcoord_index,
          len: mesh.texcoords.len(),
        })?;
      vertices.push(FlatVertex {
        position: position.to_array(),
        tex_coord: [texcoord.x, 1.0 - texcoord.y],
      });
    }
  }

  log::debug!(
    "Flattened {} triangles into {} vertices, texture \"{}\".",
    mesh.triangles.len(),
    vertices.len(),
    material.diffuse_texture_name,
  );
  Ok((
    FlatVertexBuffer { vertices },
    material.diffuse_texture_name.clone(),
  ))
}

#[cfg(test)]
mod tests {
  use glam::{
    Vec2,
    Vec3,
  };

  use super::*;
  use crate::scene::mesh::{
    Corner,
    Triangle,
  };

  fn corner(position_index: usize, texcoord_index: usize) -> Corner {
    Corner { position_index, texcoord_index }
  }

  fn one_triangle_mesh() -> IndexedMesh {
    IndexedMesh {
      positions: vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
      ],
      texcoords: vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
      ],
      triangles: vec![Triangle {
        corners: [corner(0, 0), corner(1, 1), corner(2, 2)],
      }],
    }
  }

  fn one_material() -> Vec<Material> {
    vec![Material {
      name: "default".to_string(),
      diffuse_texture_name: "tex.png".to_string(),
    }]
  }

  #[test]
  fn single_triangle_end_to_end() {
    let (buffer, texture) = flatten(one_triangle_mesh(), &one_material()).unwrap();
    assert_eq!(texture, "tex.png");
    assert_eq!(
      buffer.to_floats(),
      vec![
        0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 1.0, 1.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
      ],
    );
  }

  #[test]
  fn output_length_is_three_per_triangle() {
    let mut mesh = one_triangle_mesh();
    let tri = mesh.triangles[0];
    mesh.triangles = vec![tri; 7];
    let (buffer, _) = flatten(mesh, &one_material()).unwrap();
    assert_eq!(buffer.len(), 21);
    assert_eq!(buffer.triangle_count(), 7);
  }

  #[test]
  fn shared_corners_are_duplicated_in_order() {
    let mut mesh = one_triangle_mesh();
    let tri = mesh.triangles[0];
    mesh.triangles.push(tri);
    let (buffer, _) = flatten(mesh, &one_material()).unwrap();
    assert_eq!(buffer.vertices[0], buffer.vertices[3]);
    assert_eq!(buffer.vertices[2], buffer.vertices[5]);
  }

  #[test]
  fn position_index_one_past_the_end_is_rejected() {
    let mut mesh = one_triangle_mesh();
    mesh.triangles[0].corners[1].position_index = 3;
    match flatten(mesh, &one_material()) {
      Err(ViewerError::IndexOutOfRange { kind: "position", index: 3, len: 3 }) => {},
      other => panic!("expected position IndexOutOfRange, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn texcoord_index_out_of_range_is_rejected() {
    let mut mesh = one_triangle_mesh();
    mesh.triangles[0].corners[2].texcoord_index = 9;
    match flatten(mesh, &one_material()) {
      Err(ViewerError::IndexOutOfRange { kind: "texcoord", index: 9, len: 3 }) => {},
      other => panic!("expected texcoord IndexOutOfRange, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn empty_material_list_is_rejected() {
    match flatten(one_triangle_mesh(), &[]) {
      Err(ViewerError::NoMaterial) => {},
      other => panic!("expected NoMaterial, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn empty_mesh_yields_an_empty_buffer() {
    let mesh = IndexedMesh::default();
    let (buffer, texture) = flatten(mesh, &one_material()).unwrap();
    assert!(buffer.is_empty());
    assert_eq!(texture, "tex.png");
  }
}
