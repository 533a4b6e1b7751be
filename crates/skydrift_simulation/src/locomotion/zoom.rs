//! Camera zoom: шаг по скроллу + демпфированный радиус

use bevy::prelude::*;

use crate::components::{Character, FrameInput, LocomotionConfig, ZoomState};
use crate::math::{clamp_delta, damp_factor};

/// Ниже этого значения скролл считаем шумом
pub const ZOOM_INPUT_EPSILON: f32 = 0.1;

/// Защитный clamp дельты скролла от хоста
const MAX_ZOOM_DELTA: f32 = 10.0;

/// Один тик зума (чистая логика)
pub fn drive_zoom(zoom: &mut ZoomState, config: &LocomotionConfig, zoom_delta: Vec2, dt: f32) {
    let delta = if zoom_delta.y.is_finite() {
        zoom_delta.y.clamp(-MAX_ZOOM_DELTA, MAX_ZOOM_DELTA)
    } else {
        0.0
    };

    if delta.abs() > ZOOM_INPUT_EPSILON {
        zoom.target_radius = (zoom.target_radius - delta.signum() * config.zoom_sensitivity)
            .clamp(config.min_zoom_radius, config.max_zoom_radius);
    }

    // Демпфированное схождение current → target при любом dt
    let t = damp_factor(config.zoom_smoothing, dt);
    zoom.current_radius += (zoom.target_radius - zoom.current_radius) * t;
}

/// Система: зум (значение для camera rig — ZoomState::current_radius)
pub fn update_zoom(
    mut query: Query<(&mut ZoomState, &FrameInput, &LocomotionConfig), With<Character>>,
    time: Res<Time<Fixed>>,
) {
    let dt = clamp_delta(time.delta_secs());

    for (mut zoom, input, config) in query.iter_mut() {
        drive_zoom(&mut zoom, config, input.zoom_delta, dt);
    }
}
