use thiserror::Error;

/// The error type of the product-viewer crate.
#[derive(Error, Debug)]
pub enum ViewerError {
  /// A triangle corner references an attribute beyond the supplied arrays.
  #[error("{kind} index {index} is out of range (len {len})")]
  IndexOutOfRange {
    kind: &'static str,
    index: usize,
    len: usize,
  },

  /// The material list handed to the flattener is empty.
  #[error("no material supplied with the mesh")]
  NoMaterial,

  #[error("failed to parse \"{path}\": {reason}")]
  Parse {
    path: String,
    reason: String,
  },

  #[error("failed to read \"{path}\"")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to decode image data")]
  Image(#[from] image::ImageError),

  #[error("invalid color string \"{0}\"")]
  InvalidColor(String),
}
