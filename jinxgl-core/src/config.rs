//! Runtime configuration.
//!
//! The configuration is a JSON document. Every field has a default, so an empty object `{}` is a
//! valid configuration. Unknown fields are rejected to catch typos early.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the directory under the platform config dir that holds `config.json`.
pub const APP_DIR: &str = "jinxgl";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Multisample count. `0` disables multisampling.
    pub samples: u8,
    pub vsync: bool,
    /// Requested OpenGL core profile version as `[major, minor]`.
    pub gl_version: [u8; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "JiNXGL".to_string(),
            width: 640,
            height: 480,
            fullscreen: false,
            samples: 4,
            vsync: true,
            gl_version: [3, 2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub yaw_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            fov: 67.0,
            near: 0.1,
            far: 100.0,
            speed: 3.0,
            yaw_speed: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub clear_color: [f32; 4],
    /// Directory that shaders and textures are loaded from.
    pub resource_dir: PathBuf,
    /// GL log file, truncated on every start. `null` logs to stderr only.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            resource_dir: PathBuf::from("resources"),
            log_file: Some(PathBuf::from("gl.log")),
        }
    }
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid configuration: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration at `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        Self::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
    }

    /// The file [`Config::load_or_default`] reads: `path` if given, otherwise the per-user
    /// config file when it exists.
    pub fn locate(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_path().filter(|path| path.is_file()),
        }
    }

    /// Loads `path` if given. Otherwise tries the per-user config file and falls back to the
    /// defaults when it does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, String> {
        match Self::locate(path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                window.width, window.height
            ));
        }
        let [major, minor] = window.gl_version;
        if (major, minor) < (3, 2) {
            return Err(format!(
                "OpenGL {major}.{minor} is too old, at least 3.2 core is required"
            ));
        }

        let camera = &self.camera;
        if !(camera.fov > 0.0 && camera.fov < 180.0) {
            return Err(format!("Field of view must be in (0, 180), got {}", camera.fov));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(format!(
                "Clip planes must satisfy 0 < near < far, got near {} and far {}",
                camera.near, camera.far
            ));
        }
        Ok(())
    }

    /// Path of a resource file inside [`Config::resource_dir`].
    pub fn resource_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resource_dir.join(name)
    }
}

/// `<config dir>/jinxgl/config.json`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window.title, "JiNXGL");
        assert_eq!(config.camera.position, [0.0, 0.0, 3.0]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config =
            Config::from_json(r#"{ "window": { "width": 800, "height": 600 }, "log_file": null }"#)
                .unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.samples, 4);
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_json(r#"{ "window": { "widht": 800 } }"#).unwrap_err();
        assert!(err.contains("widht"), "{err}");
    }

    #[test]
    fn validation() {
        let mut config = Config::default();
        config.window.height = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.window.gl_version = [2, 1];
        assert!(config.validate().is_err());
        config.window.gl_version = [4, 1];
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.camera.near = 200.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.camera.fov = 0.0;
        assert!(config.validate().is_err());
        config.camera.fov = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = Path::new("definitely/not/here/config.json");
        let err = Config::load_or_default(Some(path)).unwrap_err();
        assert!(err.contains("definitely/not/here"), "{err}");
    }

    #[test]
    fn explicit_path_is_located_even_when_missing() {
        let path = Path::new("definitely/not/here/config.json");
        assert_eq!(Config::locate(Some(path)).as_deref(), Some(path));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("jinxgl-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "resource_dir": "assets", "camera": { "fov": 90.0 } }"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.camera.fov, 90.0);
        assert_eq!(
            config.resource_path("cube/vert.glsl"),
            Path::new("assets").join("cube/vert.glsl")
        );
    }
}
