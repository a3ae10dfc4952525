//! Perspective projection and orbit camera state
//!
//! The demos disagree on yaw direction and on how accumulated angles are
//! limited. Each convention is kept as a named `OrbitConfig` preset.

use std::f32::consts::PI;

use fnv::FnvHashMap;
use lazy_static::lazy_static;

use crate::alg;
use crate::error::{Error, Result};

pub const DEFAULT_FOV: f32 = 45.0;
pub const DEFAULT_NEAR: f32 = 0.01;
pub const DEFAULT_FAR: f32 = 100.0;

/// Radians per pixel of mouse drag
pub const DEFAULT_ROTATE_SPEED: f32 = 0.01;
/// Distance units per pixel of vertical drag
pub const DEFAULT_ZOOM_SPEED: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees
    pub fov:    f32,
    pub aspect: f32,
    pub near:   f32,
    pub far:    f32,
}

impl Default for Projection {
    fn default() -> Projection {
        Projection {
            fov:    DEFAULT_FOV,
            aspect: 800.0 / 600.0,
            near:   DEFAULT_NEAR,
            far:    DEFAULT_FAR,
        }
    }
}

impl Projection {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Projection {
        Projection { fov, aspect, near, far }
    }

    pub fn matrix(&self) -> alg::Mat {
        alg::Mat::perspective(self.fov, self.aspect, self.near, self.far)
    }

    pub fn try_matrix(&self) -> Result<alg::Mat> {
        alg::Mat::try_perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Update the aspect ratio from a framebuffer size \
    /// Zero sizes (minimized window) leave the projection untouched
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.aspect = width as f32 / height as f32;
    }
}

/// How accumulated yaw/pitch are kept in range after a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleLimit {
    Clamp(f32, f32),
    /// Remainder with the sign of the dividend (C `fmod`)
    Wrap(f32),
    Free,
}

impl AngleLimit {
    pub fn apply(self, angle: f32) -> f32 {
        match self {
            AngleLimit::Clamp(min, max) => angle.max(min).min(max),
            AngleLimit::Wrap(period) => angle % period,
            AngleLimit::Free => angle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    /// +1 or -1, multiplied into horizontal drag
    pub yaw_sign:         f32,
    pub rotate_speed:     f32,
    pub zoom_speed:       f32,
    pub angle_limit:      AngleLimit,
    pub distance_range:   Option<(f32, f32)>,
    pub initial_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> OrbitConfig {
        OrbitConfig {
            yaw_sign:         1.0,
            rotate_speed:     DEFAULT_ROTATE_SPEED,
            zoom_speed:       DEFAULT_ZOOM_SPEED,
            angle_limit:      AngleLimit::Free,
            distance_range:   None,
            initial_distance: 1.0,
        }
    }
}

lazy_static! {
    static ref PRESETS: FnvHashMap<&'static str, OrbitConfig> = {
        let wrap = AngleLimit::Wrap(2.0 * PI);
        let near_far = Some((DEFAULT_NEAR, DEFAULT_FAR));

        let mut presets = FnvHashMap::default();

        // Indexed mesh viewer: clamped angles and distance
        presets.insert("mesh", OrbitConfig {
            angle_limit: AngleLimit::Clamp(-3.1416, 3.1416),
            distance_range: near_far,
            .. OrbitConfig::default()
        });

        presets.insert("lighting", OrbitConfig {
            yaw_sign: -1.0,
            angle_limit: wrap,
            .. OrbitConfig::default()
        });

        presets.insert("textured", OrbitConfig {
            yaw_sign: -1.0,
            angle_limit: wrap,
            distance_range: near_far,
            .. OrbitConfig::default()
        });

        // Rotation only
        presets.insert("skybox", OrbitConfig {
            angle_limit: wrap,
            zoom_speed: 0.0,
            initial_distance: 2.0,
            .. OrbitConfig::default()
        });

        presets.insert("shadow", OrbitConfig {
            yaw_sign: -1.0,
            angle_limit: wrap,
            .. OrbitConfig::default()
        });

        // Fixed camera
        presets.insert("tessellation", OrbitConfig {
            rotate_speed: 0.0,
            zoom_speed: 0.0,
            initial_distance: 2.0,
            .. OrbitConfig::default()
        });

        presets
    };
}

impl OrbitConfig {
    pub fn preset(name: &str) -> Result<OrbitConfig> {
        PRESETS.get(name)
            .copied()
            .ok_or_else(|| Error::Config(format!("unknown camera preset \"{}\"", name)))
    }

    pub fn preset_names() -> Vec<&'static str> {
        let mut names: Vec<_> = PRESETS.keys().copied().collect();
        names.sort();
        names
    }
}

/// Camera on a sphere around the origin, +Y up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw:      f32,
    pub pitch:    f32,
    pub config:   OrbitConfig,
}

impl Default for OrbitCamera {
    fn default() -> OrbitCamera {
        OrbitCamera::new(OrbitConfig::default())
    }
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> OrbitCamera {
        OrbitCamera {
            distance: config.initial_distance,
            yaw: 0.0,
            pitch: 0.0,
            config,
        }
    }

    pub fn eye(&self) -> alg::Vec3 {
        alg::orbit_eye(self.distance, self.yaw, self.pitch)
    }

    /// Undefined (NaN) at the poles and at zero distance
    pub fn view(&self) -> alg::Mat {
        alg::Mat::orbit_view(self.distance, self.yaw, self.pitch)
    }

    pub fn try_view(&self) -> Result<alg::Mat> {
        alg::Mat::try_look_at_view(self.eye(), alg::Vec3::zero(), alg::Vec3::up())
    }

    /// View without translation, for drawing a skybox around the camera
    pub fn skybox_view(&self) -> alg::Mat {
        self.view().rotation_part()
    }

    /// Apply a mouse drag in pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        let limit = self.config.angle_limit;

        self.yaw += self.config.yaw_sign * dx * self.config.rotate_speed;
        self.pitch += dy * self.config.rotate_speed;

        self.pitch = limit.apply(self.pitch);
        self.yaw = limit.apply(self.yaw);
    }

    /// Apply a vertical zoom drag in pixels
    pub fn zoom(&mut self, dy: f32) {
        self.distance += dy * self.config.zoom_speed;

        if let Some((min, max)) = self.config.distance_range {
            self.distance = self.distance.max(min).min(max);
        }
    }
}
