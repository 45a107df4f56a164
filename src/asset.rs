use std::path::Path;

use crate::error::ViewerError;

/// The capability the viewer uses to read model, material and texture
/// files. Injected by the caller; the crate never touches the filesystem
/// behind the caller's back.
pub trait AssetReader {
  /// Read the whole file at `path`.
  /// param path: The file path.
  /// return: The file contents.
  fn read(&self, path: &str) -> Result<Vec<u8>, ViewerError>;
}

/// An asset reader backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskReader;

impl AssetReader for DiskReader {
  fn read(&self, path: &str) -> Result<Vec<u8>, ViewerError> {
    std::fs::read(path).map_err(|source| ViewerError::Io {
      path: path.to_string(),
      source,
    })
  }
}

/// Resolve a material or texture name against the model file's directory.
///
/// MTL and texture names inside an OBJ file are relative to the OBJ file,
/// not to the process working directory.
/// param model_path: The path the model was loaded from.
/// param name: The relative name to resolve.
/// return: The resolved path.
pub fn resolve_relative(model_path: &str, name: &str) -> String {
  match Path::new(model_path).parent() {
    Some(dir) if !dir.as_os_str().is_empty() => {
      dir.join(name).to_string_lossy().into_owned()
    },
    _ => name.to_string(),
  }
}
