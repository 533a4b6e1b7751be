//! Locomotion controller: пять подсистем над одним состоянием персонажа
//!
//! Порядок внутри тика фиксированный и является механизмом корректности
//! (единственный писатель на каждое поле состояния):
//! 1. ground check — grounded этого тика для всех остальных
//! 2. горизонтальная интеграция (разгон/торможение, facing, смещение)
//! 3. прыжок (импульс, окно удержания, cancel)
//! 4. hover-машина — ДО выбора источника гравитации, лага в кадр нет
//! 5. zoom
//! 6. гравитация + вертикальное смещение
//!
//! Все системы — в FixedUpdate, до rapier backend sync.

use bevy::prelude::*;

pub mod events;
pub mod ground;
pub mod horizontal;
pub mod hover;
pub mod vertical;
pub mod zoom;

// Re-export основных типов
pub use events::{HoverStarted, HoverStopReason, HoverStopped, JumpStarted, Landed};
pub use ground::{FlatGround, GroundSource, Touchdown, WorldGround, GROUND_STICK_VELOCITY};
pub use horizontal::INPUT_DEAD_ZONE;
pub use hover::HoverTransition;

use crate::components::{
    FrameInput, HoverState, JumpState, KinematicState, LocomotionConfig, Stamina, ZoomState,
};
use crate::math::clamp_delta;

/// Мутабельный срез состояния одного персонажа на один тик
pub struct CharacterFrame<'a> {
    pub transform: &'a mut Transform,
    pub kinematics: &'a mut KinematicState,
    pub jump: &'a mut JumpState,
    pub hover: &'a mut HoverState,
    pub stamina: &'a mut Stamina,
    pub zoom: &'a mut ZoomState,
}

/// События одного тика [`advance`] (fire-and-forget, без Entity)
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepEvents {
    pub jump_started: bool,
    pub landed: Option<Touchdown>,
    pub hover: Option<HoverTransition>,
}

/// Полный тик контроллера без ECS-шедулера
///
/// Та же цепочка подсистем, что и в [`LocomotionPlugin`], но как чистая
/// функция: любой host loop (real-time, fixed-step, тестовый harness)
/// может гонять персонажа сам. dt произвольный, внутри будет clamp.
pub fn advance(
    frame: &mut CharacterFrame<'_>,
    config: &LocomotionConfig,
    input: &FrameInput,
    camera_yaw: f32,
    ground: &dyn GroundSource,
    dt: f32,
) -> StepEvents {
    let dt = clamp_delta(dt);
    let mut events = StepEvents::default();

    // 1. Ground check
    let surface = ground.height_below(frame.transform.translation);
    events.landed = ground::sense(
        frame.kinematics,
        frame.stamina,
        config,
        surface,
        frame.transform.translation.y,
        dt,
    );

    // 2. Горизонтальная интеграция
    horizontal::integrate(
        frame.transform,
        frame.kinematics,
        config,
        input.move_axis,
        camera_yaw,
        dt,
    );

    // 3. Прыжок
    events.jump_started = vertical::drive_jump(
        frame.kinematics,
        frame.jump,
        config,
        input.jump_pressed,
        input.jump_held,
        dt,
    );

    // 4. Hover-машина (до выбора источника гравитации)
    events.hover = hover::drive_hover(
        frame.hover,
        frame.kinematics,
        frame.stamina,
        config,
        input.hover_held,
        dt,
    );

    // 5. Zoom
    zoom::drive_zoom(frame.zoom, config, input.zoom_delta, dt);

    // 6. Гравитация + вертикальное смещение
    let surface = ground.height_below(frame.transform.translation);
    vertical::fall_step(
        frame.transform,
        frame.kinematics,
        config,
        frame.hover.is_active(),
        surface,
        dt,
    );

    events
}

/// Locomotion Plugin
///
/// Регистрирует juice-события, дефолтный ground source (плоскость y=0,
/// хост может заменить своим [`WorldGround`]) и цепочку систем тика.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        // Регистрация событий
        app.add_event::<JumpStarted>()
            .add_event::<Landed>()
            .add_event::<HoverStarted>()
            .add_event::<HoverStopped>();

        app.init_resource::<WorldGround>();

        // Наши системы запускаются ДО rapier physics step
        app.add_systems(
            FixedUpdate,
            (
                ground::detect_ground,
                horizontal::integrate_horizontal,
                vertical::handle_jump,
                hover::update_hover,
                zoom::update_zoom,
                vertical::apply_gravity,
                crate::physics::sync_velocity_to_rapier,
            )
                .chain() // Последовательное выполнение
                .before(PhysicsSet::SyncBackend),
        );
    }
}
