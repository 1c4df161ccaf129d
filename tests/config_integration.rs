//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use kobe::config::AppConfig;
use kobe::Camera;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("KOBE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("KOBE_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_float() {
    std::env::set_var("KOBE_CAMERA__FOV", "60.0");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("KOBE_CAMERA__FOV");
    assert_eq!(config.camera.fov, 60.0);
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("KOBE_WINDOW__TITLE");
    std::env::remove_var("KOBE_CAMERA__FOV");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let loaded = AppConfig::load_from(cwd.join("config")).unwrap();
    if cwd.join("config/user.toml").exists() {
        return;
    }
    let defaults = AppConfig::default();
    assert_eq!(loaded.window.width, defaults.window.width);
    assert_eq!(loaded.camera.position, defaults.camera.position);
    assert_eq!(loaded.camera.pitch_limit, defaults.camera.pitch_limit);
    assert_eq!(loaded.demo.frames, defaults.demo.frames);
    assert_eq!(loaded.debug.log_level, defaults.debug.log_level);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    std::env::remove_var("KOBE_WINDOW__TITLE");

    let dir = std::env::temp_dir().join(format!("kobe_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[window]\ntitle = \"Base\"\nwidth = 640\nheight = 480\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"Mine\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.window.title, "Mine");
    assert_eq!(config.window.width, 640);
    assert_eq!(config.camera.fov, 45.0);
}

#[test]
#[serial]
fn test_loaded_config_builds_camera() {
    let config = AppConfig::load().unwrap();
    let camera = Camera::from_config(&config.camera).unwrap();
    assert!(camera.view().is_ok());
    assert!(camera.perspective(config.aspect_ratio()).is_ok());
    assert!(camera.orthographic(config.window.width, config.window.height).is_ok());
}
