use glam::{
  Vec2,
  Vec3,
};

use crate::asset::{
  resolve_relative,
  AssetReader,
};
use crate::error::ViewerError;
use super::super::material::Material;
use super::super::mesh::{
  Corner,
  IndexedMesh,
  Triangle,
};

/// The OBJ/MTL loader.
///
/// Parses the subset of Wavefront OBJ the viewer needs: positions,
/// texture coordinates and faces, with polygons fan-triangulated, plus
/// `mtllib` material files with `newmtl`/`map_Kd` entries. Normals,
/// groups and smoothing directives are skipped.
pub struct ObjLoader;

impl ObjLoader {

  /// Load an OBJ file and its materials through the given reader.
  /// param reader: The asset reader supplying file contents.
  /// param path: The path of the OBJ file.
  /// return: The indexed mesh and the material list.
  pub fn load(
    reader: &dyn AssetReader,
    path: &str,
  ) -> Result<(IndexedMesh, Vec<Material>), ViewerError> {
    log::debug!("Loading model \"{}\".", path);
    let text = read_text(reader, path)?;

    let mut mesh = IndexedMesh::default();
    let mut materials = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      let mut tokens = line.split_whitespace();
      let keyword = tokens.next().unwrap_or_default();
      match keyword {
        "v" => {
          let x = parse_float(tokens.next(), path, line_no)?;
          let y = parse_float(tokens.next(), path, line_no)?;
          let z = parse_float(tokens.next(), path, line_no)?;
          mesh.positions.push(Vec3::new(x, y, z));
        },
        "vt" => {
          let u = parse_float(tokens.next(), path, line_no)?;
          let v = parse_float(tokens.next(), path, line_no)?;
          mesh.texcoords.push(Vec2::new(u, v));
        },
        "f" => {
          let mut corners = Vec::new();
          for token in tokens {
            corners.push(parse_corner(token, &mesh, path, line_no)?);
          }
          if corners.len() < 3 {
            return Err(parse_error(path, line_no, "face with fewer than 3 corners"));
          }
          // Fan-triangulate arbitrary polygons.
          for k in 1..corners.len() - 1 {
            mesh.triangles.push(Triangle {
              corners: [corners[0], corners[k], corners[k + 1]],
            });
          }
        },
        "mtllib" => {
          let name = tokens
            .next()
            .ok_or_else(|| parse_error(path, line_no, "mtllib without a file name"))?;
          let mtl_path = resolve_relative(path, name);
          materials.extend(Self::load_mtl(reader, &mtl_path)?);
        },
        // Normals, object/group names, smoothing and material selection
        // do not affect the single-texture viewer.
        "vn" | "usemtl" | "g" | "o" | "s" => {},
        other => {
          log::warn!("{}:{}: skipping unknown keyword \"{}\".", path, line_no + 1, other);
        },
      }
    }

    log::debug!(
      "Loaded {} positions, {} texcoords, {} triangles and {} materials from \"{}\".",
      mesh.positions.len(),
      mesh.texcoords.len(),
      mesh.triangles.len(),
      materials.len(),
      path,
    );
    Ok((mesh, materials))
  }

  /// Load an MTL file.
  /// param reader: The asset reader supplying file contents.
  /// param path: The path of the MTL file.
  /// return: The materials, in declaration order.
  fn load_mtl(reader: &dyn AssetReader, path: &str) -> Result<Vec<Material>, ViewerError> {
    log::debug!("Loading materials \"{}\".", path);
    let text = read_text(reader, path)?;

    let mut materials: Vec<Material> = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      let mut tokens = line.split_whitespace();
      let keyword = tokens.next().unwrap_or_default();
      match keyword {
        "newmtl" => {
          let name = tokens
            .next()
            .ok_or_else(|| parse_error(path, line_no, "newmtl without a name"))?;
          materials.push(Material {
            name: name.to_string(),
            ..Material::default()
          });
        },
        "map_Kd" => {
          // Options may precede the file name; the name is the last token.
          let name = tokens
            .last()
            .ok_or_else(|| parse_error(path, line_no, "map_Kd without a file name"))?;
          let material = materials
            .last_mut()
            .ok_or_else(|| parse_error(path, line_no, "map_Kd before newmtl"))?;
          material.diffuse_texture_name = name.to_string();
        },
        _ => {},
      }
    }
    Ok(materials)
  }

}

fn read_text(reader: &dyn AssetReader, path: &str) -> Result<String, ViewerError> {
  let bytes = reader.read(path)?;
  String::from_utf8(bytes).map_err(|_| ViewerError::Parse {
    path: path.to_string(),
    reason: "file is not valid UTF-8".to_string(),
  })
}

fn parse_error(path: &str, line_no: usize, reason: &str) -> ViewerError {
  ViewerError::Parse {
    path: path.to_string(),
    reason: format!("line {}: {}", line_no + 1, reason),
  }
}

fn parse_float(token: Option<&str>, path: &str, line_no: usize) -> Result<f32, ViewerError> {
  let token = token.ok_or_else(|| parse_error(path, line_no, "missing number"))?;
  token
    .parse::<f32>()
    .map_err(|_| parse_error(path, line_no, &format!("\"{}\" is not a number", token)))
}

/// Parse one `f` entry (`v`, `v/vt`, `v/vt/vn` or `v//vn`). The viewer
/// renders textured objects only, so a missing texcoord reference is a
/// parse error. Indices are 1-based; negative values count back from the
/// end of the attribute array seen so far.
fn parse_corner(
  token: &str,
  mesh: &IndexedMesh,
  path: &str,
  line_no: usize,
) -> Result<Corner, ViewerError> {
  let mut parts = token.split('/');
  let position_index = resolve_index(parts.next(), mesh.positions.len(), path, line_no)?;
  let texcoord_index = resolve_index(parts.next(), mesh.texcoords.len(), path, line_no)?;
  Ok(Corner {
    position_index,
    texcoord_index,
  })
}

fn resolve_index(
  part: Option<&str>,
  len: usize,
  path: &str,
  line_no: usize,
) -> Result<usize, ViewerError> {
  let part = part.filter(|p| !p.is_empty()).ok_or_else(|| {
    parse_error(path, line_no, "face corner without position/texcoord indices")
  })?;
  let raw = part
    .parse::<i64>()
    .map_err(|_| parse_error(path, line_no, &format!("\"{}\" is not an index", part)))?;
  if raw > 0 {
    Ok((raw - 1) as usize)
  } else if raw < 0 {
    len
      .checked_sub(raw.unsigned_abs() as usize)
      .ok_or_else(|| parse_error(path, line_no, &format!("relative index {} out of range", raw)))
  } else {
    Err(parse_error(path, line_no, "index 0 is not valid in OBJ"))
  }
}
