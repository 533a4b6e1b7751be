//! Вертикальная интеграция: прыжок с переменной высотой, выбор источника
//! гравитации, вертикальное смещение

use bevy::prelude::*;

use crate::components::{Character, FrameInput, HoverState, JumpState, KinematicState, LocomotionConfig};
use crate::locomotion::events::JumpStarted;
use crate::locomotion::ground::WorldGround;
use crate::logger;
use crate::math::clamp_delta;

/// Один тик jump-логики (чистая часть)
///
/// Порядок как в state machine прыжка:
/// 1. press на земле → импульс + окно удержания;
/// 2. кнопка удержана и окно не истекло → тикаем окно;
/// 3. иначе, пока ещё поднимаемся → доп. замедление jump_cancel_rate
///    (короткий прыжок при раннем отпускании).
///
/// Возвращает true, если прыжок начался в этом тике.
pub fn drive_jump(
    kin: &mut KinematicState,
    jump: &mut JumpState,
    config: &LocomotionConfig,
    jump_pressed: bool,
    jump_held: bool,
    dt: f32,
) -> bool {
    let mut started = false;

    if jump_pressed && kin.grounded {
        kin.vertical_velocity = config.jump_impulse;
        jump.hold_timer = config.jump_button_hold_time;
        started = true;
    }

    if jump_held && jump.hold_timer > 0.0 {
        jump.hold_timer = (jump.hold_timer - dt).max(0.0);
    } else if kin.vertical_velocity > 0.0 {
        kin.vertical_velocity -= config.jump_cancel_rate * dt;
    }

    started
}

/// Один тик гравитации (чистая часть)
///
/// Снапшот скорости до гравитации — по нему ground-сенсор следующего тика
/// классифицирует силу удара.
pub fn fall(kin: &mut KinematicState, config: &LocomotionConfig, hovering: bool, dt: f32) {
    kin.last_vertical_pre_gravity = kin.vertical_velocity;
    let gravity = if hovering { config.hover_gravity } else { config.gravity };
    kin.vertical_velocity += gravity * dt;
}

/// Система: прыжок
pub fn handle_jump(
    mut query: Query<
        (Entity, &mut KinematicState, &mut JumpState, &FrameInput, &LocomotionConfig),
        With<Character>,
    >,
    time: Res<Time<Fixed>>,
    mut jump_events: EventWriter<JumpStarted>,
) {
    let dt = clamp_delta(time.delta_secs());

    for (entity, mut kin, mut jump, input, config) in query.iter_mut() {
        if drive_jump(&mut kin, &mut jump, config, input.jump_pressed, input.jump_held, dt) {
            logger::log(&format!("Locomotion: {:?} jump ({} m/s)", entity, config.jump_impulse));
            jump_events.write(JumpStarted { entity, impulse: config.jump_impulse });
        }
    }
}

/// Полная вертикальная подсистема за тик: гравитация + смещение
///
/// Смещение вниз останавливается на поверхности опоры — прилипание
/// ground-сенсора, а не collision solver.
pub fn fall_step(
    transform: &mut Transform,
    kin: &mut KinematicState,
    config: &LocomotionConfig,
    hovering: bool,
    surface_height: Option<f32>,
    dt: f32,
) {
    fall(kin, config, hovering, dt);

    let mut new_y = transform.translation.y + kin.vertical_velocity * dt;
    if kin.vertical_velocity < 0.0 {
        if let Some(surface) = surface_height {
            if new_y < surface {
                new_y = surface;
            }
        }
    }
    transform.translation.y = new_y;
}

/// Система: гравитация + вертикальное смещение (последняя в цепочке тика)
///
/// Источник гравитации выбирается по hover-состоянию ЭТОГО тика
/// (hover-система уже отработала).
pub fn apply_gravity(
    mut query: Query<
        (&mut Transform, &mut KinematicState, &HoverState, &LocomotionConfig),
        With<Character>,
    >,
    ground: Res<WorldGround>,
    time: Res<Time<Fixed>>,
) {
    let dt = clamp_delta(time.delta_secs());

    for (mut transform, mut kin, hover, config) in query.iter_mut() {
        let surface = ground.height_below(transform.translation);
        fall_step(&mut transform, &mut kin, config, hover.is_active(), surface, dt);
    }
}
