//! Kobe - camera and transform demo
//!
//! Builds a camera from configuration, logs its matrices, turns it towards a
//! target orientation and maps the window corners back into world space.

use kobe::{AppConfig, AppError, Camera};
use kobe_math::math::quaternion;
use kobe_math::{to_degrees, Quaternion, Vector3};
use std::f32::consts::PI;

/// Rotation between two orientations along the shorter arc, in radians
fn turn_angle(from: Quaternion, to: Quaternion) -> f32 {
    let half = quaternion::angle(from, to);
    2.0 * half.min(PI - half)
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let window = &config.window;
    let mut camera = Camera::from_config(&config.camera)?;
    log::info!(
        "Camera at {:?} facing {:?} (yaw {}, pitch {})",
        camera.position,
        camera.forward(),
        camera.yaw(),
        camera.pitch()
    );

    let view = camera.view()?;
    let projection = camera.perspective(config.aspect_ratio())?;
    log::debug!("View: {:?}", view.to_cols_array_2d());
    log::debug!("Projection: {:?}", projection.to_cols_array_2d());

    // Where the world origin lands on screen
    let clip = projection * view * Vector3::ZERO.extend(1.0);
    if clip.w > 0.0 {
        let ndc = clip.xyz() / clip.w;
        let pixel = camera.viewport(window.width, window.height).transform_point(ndc);
        log::info!("World origin projects to pixel ({:.1}, {:.1})", pixel.x, pixel.y);
    } else {
        log::info!("World origin is behind the camera");
    }

    let start = camera.orientation();
    let target = Camera::orientation_for(config.demo.target_yaw, config.demo.target_pitch);
    log::info!(
        "Turning {:.1} degrees over {} frames",
        to_degrees(turn_angle(start, target)),
        config.demo.frames
    );

    let frames = config.demo.frames.max(1);
    for frame in 0..=frames {
        let t = frame as f32 / frames as f32;
        let q = Camera::interpolate_orientation(start, target, t)?;
        camera.set_orientation(q)?;
        log::info!(
            "Frame {}: yaw {:.2}, pitch {:.2}, forward {:?}",
            frame,
            camera.yaw(),
            camera.pitch(),
            camera.forward()
        );
    }

    let corners = [
        (0.0, 0.0),
        (window.width as f32, 0.0),
        (0.0, window.height as f32),
        (window.width as f32, window.height as f32),
    ];
    for (x, y) in corners {
        let world = camera.screen_to_world(x, y, window.width, window.height)?;
        log::info!("Pixel ({}, {}) -> {:?}", x, y, world);
    }

    Ok(())
}

fn main() {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting {}", config.window.title);
    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
