//! Hover controller: удержание до порога, "подхват" в воздухе,
//! расход стамины и принудительный выход

use bevy::prelude::*;

use crate::components::{Character, FrameInput, HoverState, KinematicState, LocomotionConfig, Stamina};
use crate::locomotion::events::{HoverStarted, HoverStopReason, HoverStopped};
use crate::logger;
use crate::math::clamp_delta;

/// Переход hover-машины за тик
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Started,
    Stopped(HoverStopReason),
}

/// Один тик hover state machine (чистая логика)
///
/// Idle → Charging: кнопка удержана в воздухе при ненулевой стамине.
/// Charging → Active: накопленное удержание достигло порога; в момент
/// активации вертикальная скорость обнуляется ("подхват").
/// Charging/Active → Idle: кнопка отпущена, персонаж на земле или
/// стамина иссякла; выход из Active отдаёт причину наружу.
pub fn drive_hover(
    hover: &mut HoverState,
    kin: &mut KinematicState,
    stamina: &mut Stamina,
    config: &LocomotionConfig,
    hover_held: bool,
    dt: f32,
) -> Option<HoverTransition> {
    let mut transition = None;

    let eligible = hover_held && !kin.grounded && !stamina.is_empty();
    if eligible {
        match *hover {
            HoverState::Idle | HoverState::Charging { .. } => {
                let held = match *hover {
                    HoverState::Charging { held } => held + dt,
                    _ => dt,
                };
                if held >= config.hover_hold_threshold {
                    *hover = HoverState::Active;
                    kin.vertical_velocity = 0.0;
                    transition = Some(HoverTransition::Started);
                } else {
                    *hover = HoverState::Charging { held };
                }
            }
            HoverState::Active => {}
        }
    } else {
        if hover.is_active() {
            let reason = if kin.grounded {
                HoverStopReason::Grounded
            } else {
                HoverStopReason::Released
            };
            transition = Some(HoverTransition::Stopped(reason));
        }
        *hover = HoverState::Idle;
    }

    // Активный полёт ест стамину; пустой запас выталкивает из Active
    // в том же тике — инвариант "Active ⇒ stamina > 0" на входе в тик
    if hover.is_active() && stamina.deplete(dt) {
        *hover = HoverState::Idle;
        transition = Some(HoverTransition::Stopped(HoverStopReason::Exhausted));
    }

    transition
}

/// Система: hover-машина (до выбора источника гравитации)
pub fn update_hover(
    mut query: Query<
        (Entity, &mut HoverState, &mut KinematicState, &mut Stamina, &FrameInput, &LocomotionConfig),
        With<Character>,
    >,
    time: Res<Time<Fixed>>,
    mut started_events: EventWriter<HoverStarted>,
    mut stopped_events: EventWriter<HoverStopped>,
) {
    let dt = clamp_delta(time.delta_secs());

    for (entity, mut hover, mut kin, mut stamina, input, config) in query.iter_mut() {
        match drive_hover(&mut hover, &mut kin, &mut stamina, config, input.hover_held, dt) {
            Some(HoverTransition::Started) => {
                logger::log(&format!("Locomotion: {:?} hover started", entity));
                started_events.write(HoverStarted { entity });
            }
            Some(HoverTransition::Stopped(reason)) => {
                logger::log(&format!("Locomotion: {:?} hover stopped ({:?})", entity, reason));
                stopped_events.write(HoverStopped { entity, reason });
            }
            None => {}
        }
    }
}
