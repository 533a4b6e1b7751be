//! Hover state machine (полёт на стамине)

use bevy::prelude::*;

/// Состояния hover'а
///
/// Порог удержания отделяет "нажал и планирую" от случайного тапа
/// (тап по той же кнопке гасит подъём прыжка, а не включает полёт).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub enum HoverState {
    /// Кнопка не удержана либо персонаж не в воздухе
    Idle,

    /// Кнопка удержана в воздухе, копим время до порога активации
    Charging {
        /// Сколько уже удерживаем (s)
        held: f32,
    },

    /// Полёт: ослабленная гравитация, стамина тает
    ///
    /// Инвариант: Active ⇒ stamina.current > 0 на входе в каждый тик.
    Active,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::Idle
    }
}

impl HoverState {
    pub fn is_active(&self) -> bool {
        matches!(self, HoverState::Active)
    }
}
