//! Vector and matrix math for building model-view-projection chains
//!
//! Matrices are stored and indexed row-major. `Mat * Mat` is the usual
//! row-by-column product, so transforms compose right to left:
//! `projection * view * model`.

use std::f32::consts::PI;

use crate::error::{Error, Result};

/// Below this, lengths and extents count as degenerate for the checked API
const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::new(0., 0.)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn right() -> Vec3 {
        Vec3::new(1., 0., 0.)
    }

    #[inline]
    pub fn up() -> Vec3 {
        Vec3::new(0., 1., 0.)
    }

    #[inline]
    pub fn fwd() -> Vec3 {
        Vec3::new(0., 0., 1.)
    }

    #[inline]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.)
    }

    #[inline]
    pub fn one() -> Vec3 {
        Vec3::new(1., 1., 1.)
    }

    pub fn from_array(array: [f32; 3]) -> Vec3 {
        Vec3::new(array[0], array[1], array[2])
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Unit vector in the same direction \
    /// A zero-length input produces NaN components; see `try_norm()`
    pub fn norm(self) -> Vec3 {
        self / self.mag()
    }

    pub fn try_norm(self) -> Result<Vec3> {
        let mag = self.mag();

        if !mag.is_finite() || mag < EPSILON {
            return Err(Error::Degenerate("cannot normalize zero-length vector"));
        }

        Ok(self / mag)
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise minimum
    pub fn min(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum
    pub fn max(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Largest of the three components
    pub fn max_component(self) -> f32 {
        self.x.max(self.y.max(self.z))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl std::ops::Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
        )
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl std::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

impl std::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {} )",
            self.x, self.y, self.z,
        )
    }
}

/// 4x4 homogeneous transform, row-major
///
/// The `set_*` methods patch only the cells belonging to their transform
/// and leave every other cell as it was. Call them on a fresh identity, or
/// use the matching factory (`Mat::translation(...)` etc.) which does exactly
/// that.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat {
    m: [f32; 16],
}

impl Default for Mat {
    fn default() -> Mat {
        Mat::identity()
    }
}

impl Mat {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Mat {
        Mat {
            m: [
                m00, m01, m02, m03,
                m10, m11, m12, m13,
                m20, m21, m22, m23,
                m30, m31, m32, m33,
            ],
        }
    }

    pub fn from_rows(m: [f32; 16]) -> Mat {
        Mat { m }
    }

    #[inline]
    pub fn identity() -> Mat {
        Mat::diagonal(1.0)
    }

    /// `value` on the first three diagonal cells, 1 in the corner
    pub fn diagonal(value: f32) -> Mat {
        Mat::new(
            value,   0.0,   0.0, 0.0,
              0.0, value,   0.0, 0.0,
              0.0,   0.0, value, 0.0,
              0.0,   0.0,   0.0, 1.0,
        )
    }

    /// Row-major flat buffer, as uploaded with `transpose = true`
    pub fn data(&self) -> &[f32; 16] {
        &self.m
    }

    pub fn data_mut(&mut self) -> &mut [f32; 16] {
        &mut self.m
    }

    /// Column-major copy for backends that upload without transposing
    pub fn to_cols(&self) -> [f32; 16] {
        *self.transpose().data()
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.m[row * 4 + col]
    }

    pub fn transpose(&self) -> Mat {
        let mut result = *self;

        for row in 0..4 {
            for col in 0..4 {
                result[(row, col)] = self[(col, row)];
            }
        }

        result
    }

    /* Patch-in-place setters */

    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self[(0, 3)] = x;
        self[(1, 3)] = y;
        self[(2, 3)] = z;
    }

    pub fn set_rotation_x(&mut self, rad: f32) {
        let (sin, cos) = rad.sin_cos();

        self[(1, 1)] = cos;
        self[(1, 2)] = -sin;
        self[(2, 1)] = sin;
        self[(2, 2)] = cos;
    }

    pub fn set_rotation_y(&mut self, rad: f32) {
        let (sin, cos) = rad.sin_cos();

        self[(0, 0)] = cos;
        self[(0, 2)] = sin;
        self[(2, 0)] = -sin;
        self[(2, 2)] = cos;
    }

    pub fn set_rotation_z(&mut self, rad: f32) {
        let (sin, cos) = rad.sin_cos();

        self[(0, 0)] = cos;
        self[(0, 1)] = -sin;
        self[(1, 0)] = sin;
        self[(1, 1)] = cos;
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self[(0, 0)] = x;
        self[(1, 1)] = y;
        self[(2, 2)] = z;
    }

    /// Symmetric frustum mapping eye-space z in [-near, -far] to NDC [-1, 1] \
    /// `fov` is the vertical field of view in degrees \
    /// `near == far` divides by zero
    pub fn set_perspective(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        let f = 1.0 / (fov * PI / 180.0 * 0.5).tan();
        let range = far - near;

        self[(0, 0)] = f / aspect;
        self[(1, 1)] = f;
        self[(2, 2)] = -(near + far) / range;
        self[(2, 3)] = -2.0 * near * far / range;
        self[(3, 2)] = -1.0;
        self[(3, 3)] = 0.0;
    }

    /// Box [l, r] x [b, t] x [-near, -far] to NDC
    pub fn set_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self[(0, 0)] = 2.0 / (right - left);
        self[(1, 1)] = 2.0 / (top - bottom);
        self[(2, 2)] = -2.0 / (far - near);
        self[(0, 3)] = -(right + left) / (right - left);
        self[(1, 3)] = -(top + bottom) / (top - bottom);
        self[(2, 3)] = -(far + near) / (far - near);
    }

    /// Look-at view; writes every cell \
    /// Undefined (NaN) when `up` is parallel to the view direction
    /// or `eye == target`
    pub fn set_view(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        let f = -(target - eye).norm();
        let s = up.cross(f).norm();
        let u = f.cross(s);

        self.write_view(eye, s, u, f);
    }

    /// Orbit camera around the origin, +Y up
    pub fn set_orbit_view(&mut self, distance: f32, yaw: f32, pitch: f32) {
        self.set_view(orbit_eye(distance, yaw, pitch), Vec3::zero(), Vec3::up());
    }

    fn write_view(&mut self, eye: Vec3, s: Vec3, u: Vec3, f: Vec3) {
        self[(0, 0)] = s.x;
        self[(0, 1)] = s.y;
        self[(0, 2)] = s.z;
        self[(1, 0)] = u.x;
        self[(1, 1)] = u.y;
        self[(1, 2)] = u.z;
        self[(2, 0)] = f.x;
        self[(2, 1)] = f.y;
        self[(2, 2)] = f.z;

        self[(0, 3)] = -eye.dot(s);
        self[(1, 3)] = -eye.dot(u);
        self[(2, 3)] = -eye.dot(f);

        self[(3, 0)] = 0.0;
        self[(3, 1)] = 0.0;
        self[(3, 2)] = 0.0;
        self[(3, 3)] = 1.0;
    }

    /* Factories */

    pub fn translation(x: f32, y: f32, z: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_translation(x, y, z);
        result
    }

    pub fn translation_vec(translation: Vec3) -> Mat {
        Mat::translation(translation.x, translation.y, translation.z)
    }

    pub fn rotation_x(rad: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_rotation_x(rad);
        result
    }

    pub fn rotation_y(rad: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_rotation_y(rad);
        result
    }

    pub fn rotation_z(rad: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_rotation_z(rad);
        result
    }

    /// X, then Y, then Z applied to the operand (`Rx * Ry * Rz`)
    pub fn rotation(x: f32, y: f32, z: f32) -> Mat {
        Mat::rotation_x(x) * Mat::rotation_y(y) * Mat::rotation_z(z)
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_scale(x, y, z);
        result
    }

    pub fn scale_vec(scale: Vec3) -> Mat {
        Mat::scale(scale.x, scale.y, scale.z)
    }

    pub fn uniform_scale(scale: f32) -> Mat {
        Mat::scale(scale, scale, scale)
    }

    // Input: vertical field of view (degrees), aspect ratio, near and far planes
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_perspective(fov, aspect, near, far);
        result
    }

    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Mat {
        let mut result = Mat::identity();
        result.set_orthographic(left, right, bottom, top, near, far);
        result
    }

    pub fn look_at_view(eye: Vec3, target: Vec3, up: Vec3) -> Mat {
        let mut result = Mat::identity();
        result.set_view(eye, target, up);
        result
    }

    pub fn orbit_view(distance: f32, yaw: f32, pitch: f32) -> Mat {
        let mut result = Mat::identity();
        result.set_orbit_view(distance, yaw, pitch);
        result
    }

    /* Checked factories */

    pub fn try_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Mat> {
        if (far - near).abs() < EPSILON {
            return Err(Error::Degenerate("near and far planes coincide"));
        }

        if aspect.abs() < EPSILON || !aspect.is_finite() {
            return Err(Error::Degenerate("aspect ratio is zero"));
        }

        if fov <= 0.0 || fov >= 180.0 {
            return Err(Error::Degenerate("field of view outside (0, 180)"));
        }

        Ok(Mat::perspective(fov, aspect, near, far))
    }

    pub fn try_orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Mat> {
        if (right - left).abs() < EPSILON {
            return Err(Error::Degenerate("orthographic box has zero width"));
        }

        if (top - bottom).abs() < EPSILON {
            return Err(Error::Degenerate("orthographic box has zero height"));
        }

        if (far - near).abs() < EPSILON {
            return Err(Error::Degenerate("near and far planes coincide"));
        }

        Ok(Mat::orthographic(left, right, bottom, top, near, far))
    }

    pub fn try_look_at_view(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat> {
        let f = -(target - eye).try_norm()?;
        let s = up.cross(f).try_norm().map_err(
            |_| Error::Degenerate("up vector is parallel to view direction")
        )?;
        let u = f.cross(s);

        let mut result = Mat::identity();
        result.write_view(eye, s, u, f);

        Ok(result)
    }

    /* Application */

    /// Full homogeneous transform of a point, divided by the resulting w
    pub fn transform_point_projective(&self, point: Vec3) -> Vec3 {
        let w = self[(3, 0)] * point.x
            + self[(3, 1)] * point.y
            + self[(3, 2)] * point.z
            + self[(3, 3)];

        (*self * point) / w
    }

    /// Transform a direction (w = 0, translation ignored)
    pub fn transform_vector(&self, vec: Vec3) -> Vec3 {
        Vec3::new(
            self[(0, 0)] * vec.x + self[(0, 1)] * vec.y + self[(0, 2)] * vec.z,
            self[(1, 0)] * vec.x + self[(1, 1)] * vec.y + self[(1, 2)] * vec.z,
            self[(2, 0)] * vec.x + self[(2, 1)] * vec.y + self[(2, 2)] * vec.z,
        )
    }

    /// Upper 3x3 only; translation and projective row reset to identity
    pub fn rotation_part(&self) -> Mat {
        Mat::new(
            self[(0, 0)], self[(0, 1)], self[(0, 2)], 0.0,
            self[(1, 0)], self[(1, 1)], self[(1, 2)], 0.0,
            self[(2, 0)], self[(2, 1)], self[(2, 2)], 0.0,
                     0.0,          0.0,          0.0, 1.0,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|cell| cell.is_finite())
    }
}

/// Eye position of an orbit camera looking at the origin
pub fn orbit_eye(distance: f32, yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    )
}

impl std::ops::Index<(usize, usize)> for Mat {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[row * 4 + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.m[row * 4 + col]
    }
}

impl std::ops::Mul for Mat {
    type Output = Mat;

    // Naive matrix multiply
    fn mul(self, other: Mat) -> Mat {
        let mut result = [0.0; 16];

        for row in 0..4 {
            for col in 0..4 {
                result[row * 4 + col] = (0..4)
                    .map(|k| self[(row, k)] * other[(k, col)])
                    .sum();
            }
        }

        Mat::from_rows(result)
    }
}

/// Point transform: w is taken as 1 and the translation column is added
impl std::ops::Mul<Vec3> for Mat {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        self.transform_vector(vec)
            + Vec3::new(self[(0, 3)], self[(1, 3)], self[(2, 3)])
    }
}

impl std::fmt::Display for Mat {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "[ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]\n\
            [ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]",
            self.m[0], self.m[1], self.m[2], self.m[3],
            self.m[4], self.m[5], self.m[6], self.m[7],
            self.m[8], self.m[9], self.m[10], self.m[11],
            self.m[12], self.m[13], self.m[14], self.m[15],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const TOLERANCE: f32 = 0.0001;

    fn approx(a: Vec3, b: Vec3) -> bool {
        let error = (a - b).mag();
        eprintln!("Error: {} ({} vs {})", error, a, b);
        error < TOLERANCE
    }

    fn random_vec() -> Vec3 {
        Vec3::new(
            rand::random::<f32>() * 20. - 10.,
            rand::random::<f32>() * 20. - 10.,
            rand::random::<f32>() * 20. - 10.,
        )
    }

    #[test]
    fn norm_vec() {
        // Baseline
        let error = (Vec3::up().norm().mag() - Vec3::up().mag()).abs();
        assert!(error < TOLERANCE);

        for _ in 0..100 {
            let vec = random_vec();

            if vec.mag() > TOLERANCE {
                let error = (vec.norm().mag() - 1.).abs();
                assert!(error < TOLERANCE, "{} normalized to length error {}", vec, error);
            }
        }
    }

    #[test]
    fn norm_zero_vec() {
        let norm = Vec3::zero().norm();
        assert!(norm.x.is_nan() && norm.y.is_nan() && norm.z.is_nan());

        assert!(Vec3::zero().try_norm().is_err());
        assert!(Vec3::new(0., 3., 4.).try_norm().unwrap() == Vec3::new(0., 0.6, 0.8));
    }

    #[test]
    fn cross_vec() {
        assert!(Vec3::right().cross(Vec3::up()) == Vec3::fwd());

        for _ in 0..100 {
            let (a, b) = (random_vec(), random_vec());
            assert!(approx(a.cross(b), -(b.cross(a))));
        }
    }

    #[test]
    fn min_max_vec() {
        let a = Vec3::new(1., -2., 3.);
        let b = Vec3::new(-1., 5., 3.);

        assert!(a.min(b) == Vec3::new(-1., -2., 3.));
        assert!(a.max(b) == Vec3::new(1., 5., 3.));
        assert!(a.max_component() == 3.);
    }

    #[test]
    fn vec_assign_ops() {
        let mut vec = Vec3::one();
        vec += Vec3::up();
        vec *= 2.;
        vec -= Vec3::new(1., 1., 1.);
        vec /= 2.;

        assert!(vec == Vec3::new(0.5, 1.5, 0.5));
        assert!(vec.dot(Vec3::new(2., 2., 2.)) == 5.);
    }

    #[test]
    fn diagonal_mat() {
        let mat = Mat::diagonal(3.);

        assert!(mat.at(0, 0) == 3. && mat.at(1, 1) == 3. && mat.at(2, 2) == 3.);
        assert!(mat.at(3, 3) == 1.);
        assert!(Mat::default() == Mat::identity());
    }

    #[test]
    fn mul_mat() {
        let translation = Mat::translation(1.0, 2.0, 3.0);

        assert!(Mat::identity() * Mat::identity() == Mat::identity());
        assert!(translation * Mat::identity() == translation);
        assert!(Mat::identity() * translation == translation);

        let composed = Mat::translation(1., 0., 0.) * Mat::scale(2., 2., 2.);
        assert!(composed * Vec3::one() == Vec3::new(3., 2., 2.));
    }

    #[test]
    fn mul_vec() {
        let vec = Vec3::new(9., -4., 0.);
        let scale = Mat::scale(-1., 3., 2.);

        assert!(Mat::identity() * vec == vec);
        assert!(scale * vec == Vec3::new(-9., -12., 0.));

        let mat = Mat::new(
            1., 1., 1., 0.,
            0., 1., 0., 0.,
            0., 0., 0., 0.,
            0., 0., 0., 0.,
        );

        assert!(mat * vec == Vec3::new(5., -4., 0.,));
    }

    #[test]
    fn translate_origin() {
        let mut mat = Mat::identity();
        mat.set_translation(4., -2., 7.);

        assert!(mat * Vec3::zero() == Vec3::new(4., -2., 7.));
        assert!(mat.transform_vector(Vec3::up()) == Vec3::up());
    }

    #[test]
    fn rotate_y_quarter() {
        let mut mat = Mat::identity();
        mat.set_rotation_y(FRAC_PI_2);

        assert!(approx(mat * Vec3::right(), Vec3::new(0., 0., -1.)));
    }

    #[test]
    fn rotate_x_z_quarter() {
        assert!(approx(Mat::rotation_x(FRAC_PI_2) * Vec3::up(), Vec3::fwd()));
        assert!(approx(Mat::rotation_z(FRAC_PI_2) * Vec3::right(), Vec3::up()));
    }

    #[test]
    fn setters_patch_in_place() {
        let mut mat = Mat::identity();
        mat.set_translation(1., 2., 3.);
        mat.set_rotation_y(FRAC_PI_2);

        // Translation column survives the rotation
        assert!(mat.at(0, 3) == 1. && mat.at(1, 3) == 2. && mat.at(2, 3) == 3.);

        let mut mat = Mat::identity();
        mat.set_scale(2., 3., 4.);
        mat.set_rotation_x(0.);

        // Rotation X only touches (1..2, 1..2)
        assert!(mat.at(0, 0) == 2.);
        assert!(mat.at(1, 1) == 1.);
        assert!(mat.at(2, 2) == 1.);
    }

    #[test]
    fn perspective_depth_range() {
        let (near, far) = (0.1, 100.);
        let mat = Mat::perspective(45., 1., near, far);

        let at_near = mat.transform_point_projective(Vec3::new(0., 0., -near));
        let at_far = mat.transform_point_projective(Vec3::new(0., 0., -far));

        eprintln!("near -> {}, far -> {}", at_near, at_far);
        assert!((at_near.z + 1.).abs() < 0.001);
        assert!((at_far.z - 1.).abs() < 0.001);
        assert!(mat.at(3, 2) == -1.);
    }

    #[test]
    fn perspective_degenerate() {
        let mat = Mat::perspective(45., 1., 1., 1.);
        assert!(!mat.is_finite());

        assert!(Mat::try_perspective(45., 1., 1., 1.).is_err());
        assert!(Mat::try_perspective(45., 0., 0.1, 1.).is_err());
        assert!(Mat::try_perspective(45., 1., 0.1, 1.).is_ok());
    }

    #[test]
    fn orthographic_box() {
        let mat = Mat::orthographic(-2., 2., -1., 1., 0.5, 10.);

        assert!(approx(mat * Vec3::new(-2., -1., -0.5), Vec3::new(-1., -1., -1.)));
        assert!(approx(mat * Vec3::new(2., 1., -10.), Vec3::new(1., 1., 1.)));

        assert!(Mat::try_orthographic(1., 1., -1., 1., 0.1, 1.).is_err());
        assert!(Mat::try_orthographic(-1., 1., 1., 1., 0.1, 1.).is_err());
    }

    #[test]
    fn view_maps_eye_to_origin() {
        for _ in 0..50 {
            let eye = random_vec();
            let target = random_vec();

            if (target - eye).mag() < 0.1 {
                continue;
            }

            let view = Mat::look_at_view(eye, target, Vec3::up());

            if !view.is_finite() {
                continue;
            }

            assert!(approx(view * eye, Vec3::zero()));
        }
    }

    #[test]
    fn view_looks_down_negative_z() {
        let eye = Vec3::new(3., 1., -2.);
        let target = Vec3::new(0., 1., 0.);
        let view = Mat::look_at_view(eye, target, Vec3::up());

        let dist = (target - eye).mag();
        assert!(approx(view * target, Vec3::new(0., 0., -dist)));
    }

    #[test]
    fn view_degenerate() {
        let eye = Vec3::new(0., 5., 0.);

        assert!(!Mat::look_at_view(eye, Vec3::zero(), Vec3::up()).is_finite());
        assert!(Mat::try_look_at_view(eye, Vec3::zero(), Vec3::up()).is_err());
        assert!(Mat::try_look_at_view(eye, eye, Vec3::fwd()).is_err());
        assert!(Mat::try_look_at_view(eye, Vec3::zero(), Vec3::fwd()).is_ok());
    }

    #[test]
    fn orbit_view_zero_angles() {
        let eye = orbit_eye(3., 0., 0.);
        assert!(approx(eye, Vec3::new(0., 0., 3.)));

        let orbit = Mat::orbit_view(3., 0., 0.);
        let look = Mat::look_at_view(eye, Vec3::zero(), Vec3::up());

        assert!(orbit == look);
        assert!(approx(orbit * Vec3::zero(), Vec3::new(0., 0., -3.)));
    }

    #[test]
    fn rotation_part_drops_translation() {
        let view = Mat::look_at_view(
            Vec3::new(1., 2., 3.),
            Vec3::zero(),
            Vec3::up(),
        );

        let rotation = view.rotation_part();
        assert!(rotation * Vec3::zero() == Vec3::zero());
        assert!(rotation.at(3, 3) == 1.);
        assert!(approx(rotation.transform_vector(Vec3::up()), view.transform_vector(Vec3::up())));
    }

    #[test]
    fn transpose_and_cols() {
        let mat = Mat::translation(1., 2., 3.);
        let cols = mat.to_cols();

        assert!(cols[12] == 1. && cols[13] == 2. && cols[14] == 3.);
        assert!(mat.transpose().transpose() == mat);
        assert!(mat.data()[3] == 1.);
    }
}
