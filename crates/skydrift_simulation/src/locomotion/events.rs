//! Juice-события контроллера
//!
//! Fire-and-forget уведомления для косметики/звука хоста (squash & stretch,
//! camera shake, FMOD-хуки). Состояние симуляции от них не зависит.

use bevy::prelude::*;

/// Прыжок начался (хук: stretch + звук прыжка)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct JumpStarted {
    pub entity: Entity,
    /// Стартовая вертикальная скорость (m/s)
    pub impulse: f32,
}

/// Персонаж коснулся земли (хук: squash; при hard — camera shake/тяжёлый звук)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Landed {
    pub entity: Entity,
    /// Вертикальная скорость на подлёте (m/s, отрицательная)
    pub impact_velocity: f32,
    /// Падение быстрее fall_shake_threshold
    pub hard: bool,
}

/// Hover активировался: "подхват" в воздухе (хук: punch-rotation + звук)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HoverStarted {
    pub entity: Entity,
}

/// Hover закончился
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HoverStopped {
    pub entity: Entity,
    pub reason: HoverStopReason,
}

/// Почему полёт прекратился — косметике важно, чем именно он кончился
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum HoverStopReason {
    /// Кнопка отпущена
    Released,
    /// Персонаж коснулся земли
    Grounded,
    /// Стамина иссякла (принудительный выход)
    Exhausted,
}
