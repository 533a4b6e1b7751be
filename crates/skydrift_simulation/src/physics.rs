//! Rapier-интеграция kinematic персонажа
//!
//! Архитектура:
//! - Rapier для коллизий (RigidBody::KinematicPositionBased)
//! - Custom velocity integration (не используем Rapier forces):
//!   скорости интегрирует locomotion-цепочка, сюда они только зеркалятся
//!
//! Headless-симуляция работает и без RapierPhysicsPlugin — компоненты
//! тела тогда просто пассивные данные.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{
    CameraYaw, Character, ConfigError, FrameInput, HoverState, JumpState, KinematicState,
    LocomotionConfig, Stamina, ZoomState,
};

/// Collision group персонажей
pub const GROUP_CHARACTER: Group = Group::GROUP_1;
/// Collision group статичного мира
pub const GROUP_WORLD: Group = Group::GROUP_2;

/// Группы коллайдера персонажа: сталкиваемся с миром и друг с другом
pub fn character_collision_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_CHARACTER, GROUP_WORLD | GROUP_CHARACTER)
}

/// Система: зеркалим составную скорость контроллера в Rapier
pub fn sync_velocity_to_rapier(
    mut query: Query<(&KinematicState, &mut Velocity), With<Character>>,
) {
    for (kin, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = kin.velocity3();
    }
}

/// Spawn helper: персонаж с полным набором компонентов
///
/// Валидирует конфиг (fail fast — молчаливое некорректное движение хуже
/// ранней ошибки) и создаёт entity:
/// - Transform
/// - состояние контроллера (kinematics, jump, hover, stamina, zoom, input)
/// - Rapier: kinematic body + capsule collider + collision groups
pub fn spawn_character(
    commands: &mut Commands,
    position: Vec3,
    config: LocomotionConfig,
) -> Result<Entity, ConfigError> {
    config.validate()?;

    let stamina = Stamina::new(
        config.stamina_max,
        config.stamina_recover_rate,
        config.stamina_deplete_rate,
    );
    let zoom = ZoomState::new(config.initial_zoom_radius);

    let entity = commands
        .spawn((
            // Bevy transform
            Transform::from_translation(position),
            // Состояние контроллера
            Character,
            config,
            KinematicState::default(),
            JumpState::default(),
            HoverState::default(),
            stamina,
            zoom,
            FrameInput::default(),
            CameraYaw::default(),
            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4), // Высота 1.0m (0.5 + 0.5), радиус 0.4m
            Velocity::default(),
            character_collision_groups(),
        ))
        .id();

    Ok(entity)
}
