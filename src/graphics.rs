use crate::alg;

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Color {
        Color {
            r,
            g,
            b,
        }
    }

    #[inline]
    pub fn black() -> Color {
        Color::new(0., 0., 0.)
    }

    #[inline]
    pub fn white() -> Color {
        Color::new(1., 1., 1.)
    }

    #[inline]
    pub fn red() -> Color {
        Color::new(1., 0., 0.)
    }

    /// RGBA with opaque alpha, as passed to a clear call
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

impl From<alg::Vec3> for Color {
    fn from(vec: alg::Vec3) -> Color {
        Color::new(vec.x, vec.y, vec.z)
    }
}

impl From<Color> for alg::Vec3 {
    fn from(color: Color) -> alg::Vec3 {
        alg::Vec3::new(color.r, color.g, color.b)
    }
}

/// Animated clear color for time `t` in seconds \
/// Each channel is a sine remapped to [0, 1] with its own rate and phase
pub fn clear_color(t: f64) -> Color {
    let channel = |rate: f64, phase: f64| ((rate * t + phase).sin() + 1.0) * 0.5;

    Color::new(
        channel(2.0, 0.0) as f32,
        channel(1.5, 2.0) as f32,
        channel(1.8, 4.0) as f32,
    )
}
