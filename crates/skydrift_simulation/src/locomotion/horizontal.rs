//! Горизонтальная интеграция: camera-relative разгон/торможение,
//! доворот facing, применение смещения

use bevy::prelude::*;

use crate::components::{CameraYaw, Character, FrameInput, KinematicState, LocomotionConfig};
use crate::math::{clamp_delta, damp_factor, move_towards};

/// Dead-zone стика: ниже — считаем, что ввода нет
pub const INPUT_DEAD_ZONE: f32 = 0.1;

/// Один тик горизонтальной скорости (чистая логика)
///
/// Возвращает целевой heading (радианы, yaw вокруг Y), если ввод выше
/// dead-zone; facing доворачивается системой отдельно. Нулевой вектор
/// никогда не нормализуется — dead-zone отсечёт его раньше.
pub fn steer(
    kin: &mut KinematicState,
    config: &LocomotionConfig,
    move_axis: Vec2,
    camera_yaw: f32,
    dt: f32,
) -> Option<f32> {
    // Защитный clamp осей: хост мог прислать что угодно
    let axis = move_axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));

    if axis.length() >= INPUT_DEAD_ZONE {
        // Ввод повёрнут на yaw камеры: (0,1) = "от камеры вперёд"
        let heading = camera_yaw + (-axis.x).atan2(axis.y);
        let direction = Vec2::new(-heading.sin(), -heading.cos());
        let target = direction * config.move_speed;
        kin.horizontal_velocity =
            move_towards(kin.horizontal_velocity, target, config.acceleration * dt);
        Some(heading)
    } else {
        kin.horizontal_velocity =
            move_towards(kin.horizontal_velocity, Vec2::ZERO, config.deceleration * dt);
        None
    }
}

/// Полная горизонтальная подсистема за тик: скорость + доворот + смещение
pub fn integrate(
    transform: &mut Transform,
    kin: &mut KinematicState,
    config: &LocomotionConfig,
    move_axis: Vec2,
    camera_yaw: f32,
    dt: f32,
) {
    if let Some(heading) = steer(kin, config, move_axis, camera_yaw, dt) {
        // Плавный frame-rate-независимый доворот к heading
        let target_rotation = Quat::from_rotation_y(heading);
        let t = damp_factor(config.rotation_speed, dt);
        transform.rotation = transform.rotation.slerp(target_rotation, t);
    }

    let displacement = kin.horizontal_velocity * dt;
    transform.translation.x += displacement.x;
    transform.translation.z += displacement.y;
}

/// Система: разгон/торможение + доворот + горизонтальное смещение
pub fn integrate_horizontal(
    mut query: Query<
        (&mut Transform, &mut KinematicState, &FrameInput, &CameraYaw, &LocomotionConfig),
        With<Character>,
    >,
    time: Res<Time<Fixed>>,
) {
    let dt = clamp_delta(time.delta_secs());

    for (mut transform, mut kin, input, camera_yaw, config) in query.iter_mut() {
        integrate(&mut transform, &mut kin, config, input.move_axis, camera_yaw.0, dt);
    }
}
