//! Ground sensor: probe опоры, landing edge, прилипание к склону,
//! восстановление стамины на земле

use bevy::prelude::*;

use crate::components::{Character, KinematicState, LocomotionConfig, Stamina};
use crate::locomotion::events::Landed;
use crate::logger;
use crate::math::clamp_delta;

/// Скорость прилипания к опоре (m/s)
///
/// Небольшая отрицательная константа вместо нуля держит персонажа
/// прижатым на склонах и ступеньках.
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Источник геометрии опоры под персонажем
///
/// Seam для хоста: terrain, heightmap, физический мир — что угодно,
/// что умеет ответить "какая высота walkable-поверхности подо мной".
/// В тестах подменяется тривиальным фейком.
pub trait GroundSource: Send + Sync + 'static {
    /// Высота поверхности под точкой, если опора вообще есть
    fn height_below(&self, position: Vec3) -> Option<f32>;
}

/// Resource-обёртка над активным [`GroundSource`]
#[derive(Resource)]
pub struct WorldGround(Box<dyn GroundSource>);

impl WorldGround {
    pub fn new(source: impl GroundSource) -> Self {
        Self(Box::new(source))
    }

    pub fn height_below(&self, position: Vec3) -> Option<f32> {
        self.0.height_below(position)
    }
}

impl Default for WorldGround {
    /// Бесконечная плоскость y = 0 — дефолт headless-симуляции
    fn default() -> Self {
        Self::new(FlatGround { height: 0.0 })
    }
}

impl GroundSource for WorldGround {
    fn height_below(&self, position: Vec3) -> Option<f32> {
        self.0.height_below(position)
    }
}

/// Бесконечная горизонтальная плоскость
pub struct FlatGround {
    pub height: f32,
}

impl GroundSource for FlatGround {
    fn height_below(&self, _position: Vec3) -> Option<f32> {
        Some(self.height)
    }
}

/// Результат landing edge: данные для события [`Landed`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    pub impact_velocity: f32,
    pub hard: bool,
}

/// Один тик ground-сенсора для одного персонажа (чистая логика)
///
/// Пересчитывает grounded, ловит false→true edge, прижимает к склону
/// и восстанавливает стамину, пока персонаж стоит на опоре.
pub fn sense(
    kin: &mut KinematicState,
    stamina: &mut Stamina,
    config: &LocomotionConfig,
    surface_height: Option<f32>,
    position_y: f32,
    dt: f32,
) -> Option<Touchdown> {
    let was_grounded = kin.grounded;
    kin.grounded = match surface_height {
        Some(height) => position_y - height <= config.ground_probe_distance,
        // Нет опоры под ногами — просто не grounded, это не ошибка
        None => false,
    };

    let touchdown = if kin.grounded && !was_grounded {
        Some(Touchdown {
            impact_velocity: kin.last_vertical_pre_gravity,
            hard: kin.last_vertical_pre_gravity < config.fall_shake_threshold,
        })
    } else {
        None
    };

    if kin.grounded && kin.vertical_velocity < 0.0 {
        kin.vertical_velocity = GROUND_STICK_VELOCITY;
        stamina.regenerate(dt);
    }

    touchdown
}

/// Система: ground check (первая в цепочке тика)
///
/// Остальные подсистемы читают grounded этого же тика.
pub fn detect_ground(
    mut query: Query<
        (Entity, &Transform, &mut KinematicState, &mut Stamina, &LocomotionConfig),
        With<Character>,
    >,
    ground: Res<WorldGround>,
    time: Res<Time<Fixed>>,
    mut landed_events: EventWriter<Landed>,
) {
    let dt = clamp_delta(time.delta_secs());

    for (entity, transform, mut kin, mut stamina, config) in query.iter_mut() {
        let surface = ground.height_below(transform.translation);
        if let Some(touchdown) = sense(&mut kin, &mut stamina, config, surface, transform.translation.y, dt)
        {
            if touchdown.hard {
                logger::log(&format!(
                    "Locomotion: {:?} hard landing at {:.1} m/s",
                    entity, touchdown.impact_velocity
                ));
            }
            landed_events.write(Landed {
                entity,
                impact_velocity: touchdown.impact_velocity,
                hard: touchdown.hard,
            });
        }
    }
}
