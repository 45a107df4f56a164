//! 4x4 transform math for the viewer.
//!
//! Matrices are row-vector layout: `m[row][col]`, vectors multiply on the
//! left and transforms compose as `result = a * b`. The camera composes
//! its combined matrix as `model_view * projection` in this convention.

/// Near clip plane distance of the fixed viewer frustum.
pub const NEAR_PLANE: f32 = 1.0;
/// Far clip plane distance of the fixed viewer frustum.
pub const FAR_PLANE: f32 = 20.0;
/// Vertical field of view of the fixed viewer frustum, in degrees.
pub const FOV_Y_DEGREES: f32 = 60.0;

/// A 4x4 homogeneous transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Default for Mat4 {
  fn default() -> Self {
    Self::identity()
  }
}

impl Mat4 {

  /// Create the multiplicative identity.
  /// return: The identity matrix.
  pub fn identity() -> Self {
    let mut m = [[0.0f32; 4]; 4];
    for (i, row) in m.iter_mut().enumerate() {
      row[i] = 1.0;
    }
    Self(m)
  }

  /// Multiply two matrices.
  /// The product is computed into a fresh matrix, so the result may be
  /// written back over either input by the caller.
  /// param a: The left matrix.
  /// param b: The right matrix.
  /// return: The product `a * b`.
  pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut tmp = [[0.0f32; 4]; 4];
    for i in 0..4 {
      for j in 0..4 {
        tmp[i][j] = a.0[i][0] * b.0[0][j]
          + a.0[i][1] * b.0[1][j]
          + a.0[i][2] * b.0[2][j]
          + a.0[i][3] * b.0[3][j];
      }
    }
    Mat4(tmp)
  }

  /// Add a translation expressed in this matrix's own basis.
  /// Only row 3 is touched; this is the in-place shortcut for
  /// `translation(x, y, z) * self` and must stay that way to keep the
  /// numerical behavior of the frame composition.
  /// param x: The translation along the matrix's X basis vector.
  /// param y: The translation along the matrix's Y basis vector.
  /// param z: The translation along the matrix's Z basis vector.
  pub fn translate(&mut self, x: f32, y: f32, z: f32) {
    for c in 0..4 {
      self.0[3][c] += self.0[0][c] * x + self.0[1][c] * y + self.0[2][c] * z;
    }
  }

  /// Rotate this matrix by an axis-angle rotation: `self = rotation * self`.
  /// A zero-length axis leaves the matrix unchanged; this is defined
  /// behavior, not an error.
  /// param angle_degrees: The rotation angle, in degrees.
  /// param x: The X component of the rotation axis.
  /// param y: The Y component of the rotation axis.
  /// param z: The Z component of the rotation axis.
  pub fn rotate(&mut self, angle_degrees: f32, x: f32, y: f32, z: f32) {
    let angle = angle_degrees.to_radians();
    let sin_angle = angle.sin();
    let cos_angle = angle.cos();
    let mag = (x * x + y * y + z * z).sqrt();
    if mag > 0.0 {
      let x = x / mag;
      let y = y / mag;
      let z = z / mag;
      let omc = 1.0 - cos_angle;
      let rotation = Mat4([
        [omc * x * x + cos_angle, omc * x * y - z * sin_angle, omc * z * x + y * sin_angle, 0.0],
        [omc * x * y + z * sin_angle, omc * y * y + cos_angle, omc * y * z - x * sin_angle, 0.0],
        [omc * z * x - y * sin_angle, omc * y * z + x * sin_angle, omc * z * z + cos_angle, 0.0],
        [0.0, 0.0, 0.0, 1.0],
      ]);
      *self = Mat4::multiply(&rotation, self);
    }
  }

  /// Build the symmetric perspective projection of the viewer frustum:
  /// 60 degree vertical field of view, near 1.0, far 20.0, `w' = -z`.
  /// The X scale carries the `height / width` aspect factor; the paired
  /// viewport setup expects exactly this convention.
  /// param width: The viewport width, in pixels.
  /// param height: The viewport height, in pixels.
  /// return: The projection matrix.
  pub fn perspective(width: f32, height: f32) -> Mat4 {
    let delta_y = (FOV_Y_DEGREES.to_radians() / 2.0).tan() * 2.0;
    let delta_z = FAR_PLANE - NEAR_PLANE;
    Mat4([
      [2.0 * NEAR_PLANE / delta_y / width * height, 0.0, 0.0, 0.0],
      [0.0, 2.0 * NEAR_PLANE / delta_y, 0.0, 0.0],
      [0.0, 0.0, -(NEAR_PLANE + FAR_PLANE) / delta_z, -1.0],
      [0.0, 0.0, -2.0 * NEAR_PLANE * FAR_PLANE / delta_z, 0.0],
    ])
  }

  /// Flatten to 16 floats in row order, ready for a uniform upload.
  /// return: The matrix elements.
  pub fn to_array(&self) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for i in 0..4 {
      out[i * 4..i * 4 + 4].copy_from_slice(&self.0[i]);
    }
    out
  }

  /// Compare element-wise within a tolerance.
  /// param other: The matrix to compare against.
  /// param epsilon: The per-element tolerance.
  /// return: Whether every element pair is within the tolerance.
  pub fn abs_diff_eq(&self, other: &Mat4, epsilon: f32) -> bool {
    self
      .0
      .iter()
      .flatten()
      .zip(other.0.iter().flatten())
      .all(|(a, b)| (a - b).abs() <= epsilon)
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  const EPSILON: f32 = 1e-5;

  #[test]
  fn identity_is_multiplicative_identity() {
    let m = Mat4([
      [1.0, 2.0, 3.0, 4.0],
      [5.0, 6.0, 7.0, 8.0],
      [9.0, 10.0, 11.0, 12.0],
      [13.0, 14.0, 15.0, 16.0],
    ]);
    assert!(Mat4::multiply(&m, &Mat4::identity()).abs_diff_eq(&m, EPSILON));
    assert!(Mat4::multiply(&Mat4::identity(), &m).abs_diff_eq(&m, EPSILON));
  }

  #[test]
  fn multiply_result_is_safe_to_alias() {
    let a = Mat4([
      [0.0, 1.0, 0.0, 0.0],
      [-1.0, 0.0, 0.0, 0.0],
      [0.0, 0.0, 1.0, 0.0],
      [2.0, 3.0, 4.0, 1.0],
    ]);
    let expected = Mat4::multiply(&a, &a);
    let mut m = a;
    m = Mat4::multiply(&m, &m);
    assert!(m.abs_diff_eq(&expected, EPSILON));
  }

  #[test]
  fn rotation_round_trip_restores_matrix() {
    let mut m = Mat4::identity();
    m.translate(1.0, -2.0, 3.0);
    let original = m;
    m.rotate(37.5, 0.3, 1.0, -0.2);
    m.rotate(-37.5, 0.3, 1.0, -0.2);
    assert!(m.abs_diff_eq(&original, EPSILON));
  }

  #[test]
  fn zero_axis_rotation_is_a_no_op() {
    let mut m = Mat4::identity();
    m.translate(0.5, 0.5, 0.5);
    let original = m;
    m.rotate(45.0, 0.0, 0.0, 0.0);
    assert_eq!(m, original);
  }

  #[test]
  fn rotation_normalizes_the_axis() {
    let mut a = Mat4::identity();
    a.rotate(90.0, 0.0, 1.0, 0.0);
    let mut b = Mat4::identity();
    b.rotate(90.0, 0.0, 10.0, 0.0);
    assert!(a.abs_diff_eq(&b, EPSILON));
  }

  #[test]
  fn translate_accumulates_in_the_current_basis() {
    let mut m = Mat4::identity();
    m.rotate(90.0, 0.0, 1.0, 0.0);
    m.translate(1.0, 0.0, 0.0);
    // After a 90 degree yaw, row 0 (the X basis image) is [0, 0, 1].
    assert!((m.0[3][0]).abs() <= EPSILON);
    assert!((m.0[3][2] - 1.0).abs() <= EPSILON);
  }

  #[test]
  fn perspective_uses_height_over_width_aspect() {
    let p = Mat4::perspective(800.0, 400.0);
    let y_scale = 2.0 * NEAR_PLANE / ((FOV_Y_DEGREES.to_radians() / 2.0).tan() * 2.0);
    assert!((p.0[0][0] - y_scale * 0.5).abs() <= EPSILON);
    assert!((p.0[1][1] - y_scale).abs() <= EPSILON);
    assert!((p.0[2][3] + 1.0).abs() <= EPSILON);
    assert!((p.0[3][3]).abs() <= EPSILON);
  }

  #[test]
  fn perspective_maps_near_and_far_planes() {
    let p = Mat4::perspective(1.0, 1.0);
    // Row-vector transform of (0, 0, z, 1).
    let project = |z: f32| {
      let clip_z = z * p.0[2][2] + p.0[3][2];
      let clip_w = z * p.0[2][3] + p.0[3][3];
      clip_z / clip_w
    };
    assert!((project(-NEAR_PLANE) + 1.0).abs() <= EPSILON);
    assert!((project(-FAR_PLANE) - 1.0).abs() <= 1e-4);
  }

  #[test]
  fn to_array_is_row_order() {
    let mut m = Mat4::identity();
    m.translate(7.0, 8.0, 9.0);
    let a = m.to_array();
    assert_eq!(&a[12..15], &[7.0, 8.0, 9.0]);
  }
}
