//! Point light for the Blinn-Phong and shadow-mapping scenes

use crate::alg;
use crate::graphics;
use crate::error::Result;

/// Maps clip-space [-1, 1] to texture space [0, 1] on every axis
pub fn shadow_bias() -> alg::Mat {
    alg::Mat::new(
        0.5, 0.0, 0.0, 0.5,
        0.0, 0.5, 0.0, 0.5,
        0.0, 0.0, 0.5, 0.5,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// World space
    pub position: alg::Vec3,
    /// Per-channel intensities
    pub intensity_ambient: alg::Vec3,
    pub intensity_diffuse: alg::Vec3,
    pub diffuse_color: graphics::Color,
    pub specular_color: graphics::Color,
}

impl Default for Light {
    fn default() -> Light {
        Light {
            position: alg::Vec3::new(2.0, 2.0, 2.0),
            intensity_ambient: alg::Vec3::one() * 0.1,
            intensity_diffuse: alg::Vec3::one(),
            diffuse_color: graphics::Color::red(),
            specular_color: graphics::Color::white(),
        }
    }
}

impl Light {
    pub fn new(position: alg::Vec3) -> Light {
        Light {
            position,
            .. Light::default()
        }
    }

    /// Light position as the shaders expect it (camera space)
    pub fn position_in_view(&self, view: &alg::Mat) -> alg::Vec3 {
        *view * self.position
    }

    /// View from the light towards the origin \
    /// Falls back to +Z up when the light sits on the Y axis
    pub fn shadow_view(&self) -> Result<alg::Mat> {
        let origin = alg::Vec3::zero();

        alg::Mat::try_look_at_view(self.position, origin, alg::Vec3::up())
            .or_else(|_| {
                alg::Mat::try_look_at_view(self.position, origin, alg::Vec3::fwd())
            })
    }

    /// World to shadow-map texture space: `bias * projection * light view`
    pub fn shadow_matrix(&self, projection: &alg::Mat) -> Result<alg::Mat> {
        Ok(shadow_bias() * *projection * self.shadow_view()?)
    }
}
