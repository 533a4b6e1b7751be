//! SKYDRIFT Locomotion Core
//!
//! Покадровый контроллер движения игрового персонажа на Bevy 0.16:
//! ground check, разгон/торможение в плоскости, прыжок с переменной высотой,
//! hover (полёт на стамине) и сглаженный camera zoom.
//!
//! Архитектура:
//! - ECS = сам контроллер (state machine, численная интеграция)
//! - Хост (рендер, ввод, camera rig, звук) — внешние collaborators:
//!   пишут [`FrameInput`]/[`CameraYaw`], читают Transform/[`ZoomState`]
//!   и слушают juice-события ([`JumpStarted`], [`Landed`], [`HoverStarted`],
//!   [`HoverStopped`])

use bevy::prelude::*;

// Публичные модули
pub mod components;
pub mod locomotion;
pub mod logger;
pub mod math;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use locomotion::{
    advance, CharacterFrame, FlatGround, GroundSource, HoverStarted, HoverStopReason,
    HoverStopped, HoverTransition, JumpStarted, Landed, LocomotionPlugin, StepEvents, Touchdown,
    WorldGround,
};
pub use physics::spawn_character;

/// Создаёт minimal Bevy App для headless симуляции
///
/// MinimalPlugins + fixed timestep 60Hz + console logger.
/// [`LocomotionPlugin`] добавляет сам вызывающий (как и ground source,
/// если плоскости y=0 по умолчанию недостаточно).
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}
