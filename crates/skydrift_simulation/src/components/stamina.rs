//! Выносливость hover-полёта

use bevy::prelude::*;

/// Стамина персонажа
///
/// Инвариант: 0.0 ≤ current ≤ max.
/// Расход — только в активном hover'е, восстановление — только на земле.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    /// Восстановление на земле (units/s)
    pub recover_rate: f32,
    /// Расход в hover'е (units/s)
    pub deplete_rate: f32,
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(100.0, 40.0, 25.0)
    }
}

impl Stamina {
    /// Полный запас при спавне
    pub fn new(max: f32, recover_rate: f32, deplete_rate: f32) -> Self {
        Self { current: max, max, recover_rate, deplete_rate }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Восстановление к max, с clamp сверху
    pub fn regenerate(&mut self, delta_time: f32) {
        self.current = (self.current + self.recover_rate * delta_time).min(self.max);
    }

    /// Расход за кадр, с clamp в 0. Возвращает true, если запас иссяк.
    pub fn deplete(&mut self, delta_time: f32) -> bool {
        self.current = (self.current - self.deplete_rate * delta_time).max(0.0);
        self.is_empty()
    }
}
