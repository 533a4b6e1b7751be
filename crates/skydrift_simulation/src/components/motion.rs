//! Кинематическое состояние персонажа: скорости, grounded, jump-таймер

use bevy::prelude::*;

/// Персонаж под управлением locomotion-контроллера
///
/// Автоматически добавляет всё состояние контроллера через Required
/// Components; хосту достаточно `commands.spawn((Transform::…, Character))`.
/// Для спавна с кастомным конфигом и rapier-телом — см.
/// [`crate::physics::spawn_character`].
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    crate::components::LocomotionConfig,
    KinematicState,
    JumpState,
    crate::components::HoverState,
    crate::components::Stamina,
    crate::components::ZoomState,
    crate::components::FrameInput,
    crate::components::CameraYaw
)]
pub struct Character;

/// Скорости и контакт с землёй
///
/// Инварианты:
/// - horizontal_velocity пишет только горизонтальная интеграция,
///   vertical_velocity — только вертикальная (jump/hover-catch/gravity/stick);
/// - grounded пересчитывается ground-сенсором ровно один раз за тик,
///   до любой velocity-логики.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicState {
    /// Скорость в плоскости земли: x → мировой X, y → мировой Z (m/s)
    pub horizontal_velocity: Vec2,
    /// Вертикальная скорость (m/s, вверх положительная)
    pub vertical_velocity: f32,
    /// Снапшот vertical_velocity до применения гравитации
    /// (классификация силы удара при приземлении)
    pub last_vertical_pre_gravity: f32,
    /// Контакт с опорой в этом тике
    pub grounded: bool,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            horizontal_velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            last_vertical_pre_gravity: 0.0,
            grounded: false,
        }
    }
}

impl KinematicState {
    /// Текущая горизонтальная скорость (m/s)
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity.length()
    }

    /// Полная скорость для rapier/хоста: (x, вертикаль, z)
    pub fn velocity3(&self) -> Vec3 {
        Vec3::new(self.horizontal_velocity.x, self.vertical_velocity, self.horizontal_velocity.y)
    }
}

/// Окно переменной высоты прыжка
///
/// hold_timer ≥ 0; тикает вниз от `jump_button_hold_time`, пока кнопка
/// удержана. Имеет смысл только при vertical_velocity > 0.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct JumpState {
    pub hold_timer: f32,
}
