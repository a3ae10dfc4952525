//! INI settings for the viewer
//!
//! Every key is optional. Missing keys fall back to the defaults below;
//! present keys must parse.

use std::path::Path;
use std::str::FromStr;

use ini::Ini;
use log::info;

use crate::camera;
use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_PRESET: &str = "mesh";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,

    /// Name of an `OrbitConfig` preset
    pub preset: String,
    /// Overrides the preset's initial distance when set
    pub distance: Option<f32>,
    pub yaw: f32,
    pub pitch: f32,

    pub fov: f32,
    pub near: f32,
    pub far: f32,

    /// Use the checked matrix constructors
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            preset: DEFAULT_PRESET.to_string(),
            distance: None,
            yaw: 0.0,
            pitch: 0.0,
            fov: camera::DEFAULT_FOV,
            near: camera::DEFAULT_NEAR,
            far: camera::DEFAULT_FAR,
            strict: false,
        }
    }
}

impl FromStr for Settings {
    type Err = Error;

    fn from_str(text: &str) -> Result<Settings> {
        let ini = Ini::load_from_str(text)
            .map_err(|err| Error::Config(err.to_string()))?;

        Settings::from_ini(&ini)
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();

        let ini = Ini::load_from_file(path).map_err(|err| match err {
            ini::Error::Io(err) => Error::Io(err),
            err => Error::Config(format!(
                "\"{}\": {}",
                path.display(),
                err,
            )),
        })?;

        let settings = Settings::from_ini(&ini)?;
        info!("Loaded settings from \"{}\"", path.display());

        Ok(settings)
    }

    fn from_ini(ini: &Ini) -> Result<Settings> {
        let defaults = Settings::default();

        let preset = ini.get_from(Some("camera"), "preset")
            .map(str::to_string)
            .unwrap_or(defaults.preset);

        // Fail early on an unknown preset
        camera::OrbitConfig::preset(&preset)?;

        let settings = Settings {
            width: load_setting(ini, "window", "width", defaults.width)?,
            height: load_setting(ini, "window", "height", defaults.height)?,

            preset,
            distance: match ini.get_from(Some("camera"), "distance") {
                Some(value) => Some(parse_setting("camera", "distance", value)?),
                None => None,
            },
            yaw: load_setting(ini, "camera", "yaw", defaults.yaw)?,
            pitch: load_setting(ini, "camera", "pitch", defaults.pitch)?,

            fov: load_setting(ini, "projection", "fov", defaults.fov)?,
            near: load_setting(ini, "projection", "near", defaults.near)?,
            far: load_setting(ini, "projection", "far", defaults.far)?,

            strict: load_setting(ini, "math", "strict", defaults.strict)?,
        };

        if settings.width == 0 || settings.height == 0 {
            return Err(Error::Config(format!(
                "window size {}x{} has a zero dimension",
                settings.width,
                settings.height,
            )));
        }

        Ok(settings)
    }

    pub fn orbit_camera(&self) -> Result<camera::OrbitCamera> {
        let config = camera::OrbitConfig::preset(&self.preset)?;
        let mut camera = camera::OrbitCamera::new(config);

        if let Some(distance) = self.distance {
            camera.distance = distance;
        }

        camera.yaw = self.yaw;
        camera.pitch = self.pitch;

        Ok(camera)
    }

    pub fn projection(&self) -> camera::Projection {
        camera::Projection::new(
            self.fov,
            self.width as f32 / self.height as f32,
            self.near,
            self.far,
        )
    }
}

fn load_setting<T>(ini: &Ini, section: &str, setting: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match ini.get_from(Some(section), setting) {
        Some(value) => parse_setting(section, setting, value),
        None => Ok(default),
    }
}

fn parse_setting<T>(section: &str, setting: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|err| Error::Config(format!(
        "setting \"{}\" in section \"{}\": \"{}\" ({})",
        setting,
        section,
        value,
        err,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_is_default() {
        let settings: Settings = "".parse().unwrap();
        assert!(settings == Settings::default());
    }

    #[test]
    fn full_file() {
        let text = "\
[window]
width = 1024
height = 512
[camera]
preset = skybox
distance = 3.5
yaw = 0.25
[projection]
fov = 60
near = 0.1
far = 50
[math]
strict = true
";

        let settings: Settings = text.parse().unwrap();

        assert!(settings.width == 1024 && settings.height == 512);
        assert!(settings.preset == "skybox");
        assert!(settings.distance == Some(3.5));
        assert!(settings.yaw == 0.25 && settings.pitch == 0.);
        assert!(settings.fov == 60. && settings.near == 0.1 && settings.far == 50.);
        assert!(settings.strict);

        let projection = settings.projection();
        assert!(projection.aspect == 2.);

        let camera = settings.orbit_camera().unwrap();
        assert!(camera.distance == 3.5);
        assert!(camera.config.zoom_speed == 0.);
    }

    #[test]
    fn preset_distance_when_missing() {
        let settings: Settings = "[camera]\npreset = tessellation\n".parse().unwrap();
        let camera = settings.orbit_camera().unwrap();

        assert!(camera.distance == 2.);
    }

    #[test]
    fn bad_values() {
        assert!("[window]\nwidth = wide\n".parse::<Settings>().is_err());
        assert!("[window]\nheight = 0\n".parse::<Settings>().is_err());
        assert!("[math]\nstrict = maybe\n".parse::<Settings>().is_err());
        assert!("[projection]\nfov = -\n".parse::<Settings>().is_err());
    }

    #[test]
    fn unknown_preset() {
        let result = "[camera]\npreset = fisheye\n".parse::<Settings>();

        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("fisheye")),
            _ => panic!("expected config error"),
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[projection]\nfar = 10.0").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.far == 10.);
        assert!(settings.near == camera::DEFAULT_NEAR);
    }

    #[test]
    fn load_missing_file() {
        match Settings::load("does/not/exist.ini") {
            Err(Error::Io(_)) => (),
            other => panic!("expected i/o error, got {:?}", other.is_ok()),
        }
    }
}
