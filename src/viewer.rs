use serde::Deserialize;

use crate::asset::{
  resolve_relative,
  AssetReader,
};
use crate::camera::CameraState;
use crate::error::ViewerError;
use crate::math::Mat4;
use crate::scene::{
  flatten,
  FlatVertexBuffer,
  ImageData,
};
use crate::scene::loader::ObjLoader;

fn default_clear_color() -> String {
  "000000".to_string()
}

fn default_viewport() -> u32 {
  800
}

/// The viewer configuration.
///
/// The clear color is packed hex pairs, `"rrggbb"` or `"rrggbbaa"`, as
/// handed over by the embedding application.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerSettings {
  #[serde(default = "default_clear_color")]
  pub clear_color: String,
  #[serde(default = "default_viewport")]
  pub width: u32,
  #[serde(default = "default_viewport")]
  pub height: u32,
}

impl Default for ViewerSettings {
  fn default() -> Self {
    Self {
      clear_color: default_clear_color(),
      width: default_viewport(),
      height: default_viewport(),
    }
  }
}

impl ViewerSettings {

  /// Parse settings from a JSON document.
  /// param text: The JSON text.
  /// return: The settings.
  pub fn from_json(text: &str) -> Result<Self, ViewerError> {
    serde_json::from_str(text).map_err(|err| ViewerError::Parse {
      path: "<settings>".to_string(),
      reason: err.to_string(),
    })
  }

}

/// A single-object viewer: one textured mesh, a fixed tilt and a Y-axis
/// spin driven by rotation commands.
///
/// The viewer owns everything the render driver needs per frame — the
/// flat vertex buffer, the decoded diffuse texture, the clear color and
/// the combined transform — but performs no GPU work itself. Lifecycle
/// is create, then draw/rotate in any order, then drop.
pub struct Viewer {
  clear_color: [f32; 4],
  width: u32,
  height: u32,
  vertex_buffer: FlatVertexBuffer,
  texture: ImageData,
  camera: CameraState,
}

impl Viewer {

  /// Create a viewer for one model.
  ///
  /// Loads and triangulates the OBJ through `reader`, flattens the
  /// indexed mesh into the non-indexed vertex stream, and decodes the
  /// first material's diffuse texture resolved against the model's
  /// directory. The indexed mesh does not outlive this call.
  /// param reader: The asset reader supplying file contents.
  /// param model_path: The path of the OBJ file.
  /// param settings: The viewer configuration.
  /// return: The viewer.
  pub fn new(
    reader: &dyn AssetReader,
    model_path: &str,
    settings: &ViewerSettings,
  ) -> Result<Self, ViewerError> {
    let (mesh, materials) = ObjLoader::load(reader, model_path)?;
    let (vertex_buffer, texture_name) = flatten(mesh, &materials)?;

    let texture_path = resolve_relative(model_path, &texture_name);
    let texture = ImageData::new_with_bytes(&reader.read(&texture_path)?)?;

    let clear_color = parse_clear_color(&settings.clear_color)?;

    log::debug!(
      "A Viewer for \"{}\" [{} x {}] is created.",
      model_path,
      settings.width,
      settings.height,
    );
    Ok(Self {
      clear_color,
      width: settings.width,
      height: settings.height,
      vertex_buffer,
      texture,
      camera: CameraState::new(),
    })
  }

  /// Apply a rotation command.
  /// param delta_degrees: The spin delta, in degrees.
  pub fn rotate(&mut self, delta_degrees: f32) {
    self.camera.advance(delta_degrees);
  }

  /// The combined model-view-projection matrix for one frame.
  /// param width: The viewport width, in pixels.
  /// param height: The viewport height, in pixels.
  /// return: The combined matrix.
  pub fn frame_matrix(&self, width: f32, height: f32) -> Mat4 {
    self.camera.compose_view_projection(width, height)
  }

  /// The flat vertex buffer, unchanged for the viewer's lifetime.
  /// return: The vertex buffer.
  pub fn vertices(&self) -> &FlatVertexBuffer {
    &self.vertex_buffer
  }

  /// The decoded diffuse texture.
  /// return: The texture data.
  pub fn texture(&self) -> &ImageData {
    &self.texture
  }

  /// The background clear color, as RGBA in `[0, 1]`.
  /// return: The clear color.
  pub fn clear_color(&self) -> [f32; 4] {
    self.clear_color
  }

  /// The current spin angle, in degrees.
  /// return: The angle.
  pub fn angle(&self) -> f32 {
    self.camera.angle()
  }

  /// The initial viewport size from the settings.
  /// return: The width and height, in pixels.
  pub fn viewport(&self) -> (u32, u32) {
    (self.width, self.height)
  }

}

impl Drop for Viewer {
  fn drop(&mut self) {
    log::debug!("A Viewer with {} vertices is dropped.", self.vertex_buffer.len());
  }
}

/// Parse a packed hex color, `"rrggbb"` or `"rrggbbaa"`; shorter even
/// prefixes fill channels left to right and alpha defaults to 1.0.
/// param color: The packed hex pairs.
/// return: The RGBA color in `[0, 1]`.
fn parse_clear_color(color: &str) -> Result<[f32; 4], ViewerError> {
  if color.len() % 2 != 0 || color.len() > 8 {
    return Err(ViewerError::InvalidColor(color.to_string()));
  }
  let mut rgba = [0.0, 0.0, 0.0, 1.0];
  for (i, pair) in color.as_bytes().chunks(2).enumerate() {
    let pair = std::str::from_utf8(pair)
      .map_err(|_| ViewerError::InvalidColor(color.to_string()))?;
    let value = u8::from_str_radix(pair, 16)
      .map_err(|_| ViewerError::InvalidColor(color.to_string()))?;
    rgba[i] = value as f32 / 255.0;
  }
  Ok(rgba)
}
