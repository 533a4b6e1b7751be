//! Tuning-параметры персонажа
//!
//! Один неизменяемый набор на персонажа, задаётся при спавне.
//! Никакого runtime-reload: плохой конфиг — это ошибка инициализации,
//! а не то, что чинится по кадрам.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Параметры движения, прыжка, hover'а и зума
///
/// Default — каноничный набор (тот же, что у прототипа персонажа).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct LocomotionConfig {
    /// Максимальная горизонтальная скорость (m/s)
    pub move_speed: f32,
    /// Разгон к целевой скорости (m/s²)
    pub acceleration: f32,
    /// Торможение к нулю без ввода (m/s²)
    pub deceleration: f32,
    /// Скорость доворота facing к направлению движения (1/s)
    pub rotation_speed: f32,
    /// Гравитация (m/s², отрицательная)
    pub gravity: f32,
    /// Дистанция ground probe вниз от позиции (m)
    pub ground_probe_distance: f32,

    /// Начальный импульс прыжка (m/s)
    pub jump_impulse: f32,
    /// Доп. замедление подъёма после отпускания кнопки (m/s²)
    pub jump_cancel_rate: f32,
    /// Окно удержания кнопки для максимальной высоты (s)
    pub jump_button_hold_time: f32,

    /// Гравитация в hover-режиме (m/s², отрицательная и слабее gravity)
    pub hover_gravity: f32,
    /// Сколько нужно держать кнопку до активации hover'а (s)
    pub hover_hold_threshold: f32,
    /// Максимум стамины
    pub stamina_max: f32,
    /// Расход стамины в hover'е (units/s)
    pub stamina_deplete_rate: f32,
    /// Восстановление стамины на земле (units/s)
    pub stamina_recover_rate: f32,

    /// Порог скорости падения для "жёсткого" приземления (m/s, отрицательный)
    pub fall_shake_threshold: f32,

    /// Минимальный радиус камеры (m)
    pub min_zoom_radius: f32,
    /// Максимальный радиус камеры (m)
    pub max_zoom_radius: f32,
    /// Шаг радиуса на одно деление скролла (m)
    pub zoom_sensitivity: f32,
    /// Скорость демпфирования current → target радиуса (1/s)
    pub zoom_smoothing: f32,
    /// Стартовый радиус камеры (m), внутри [min, max]
    pub initial_zoom_radius: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            acceleration: 50.0,
            deceleration: 40.0,
            rotation_speed: 15.0,
            gravity: -25.0,
            ground_probe_distance: 0.3,

            jump_impulse: 12.0,
            jump_cancel_rate: 40.0,
            jump_button_hold_time: 0.25,

            hover_gravity: -3.0,
            hover_hold_threshold: 0.25,
            stamina_max: 100.0,
            stamina_deplete_rate: 25.0,
            stamina_recover_rate: 40.0,

            fall_shake_threshold: -15.0,

            min_zoom_radius: 3.0,
            max_zoom_radius: 12.0,
            zoom_sensitivity: 1.5,
            zoom_smoothing: 5.0,
            initial_zoom_radius: 8.0,
        }
    }
}

/// Ошибка конфигурации персонажа (fail fast при спавне)
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Поле обязано быть конечным числом
    NotFinite { field: &'static str },
    /// Поле обязано быть строго положительным
    NotPositive { field: &'static str, value: f32 },
    /// Поле не может быть отрицательным
    Negative { field: &'static str, value: f32 },
    /// Гравитация должна тянуть вниз
    GravityNotDownward { field: &'static str, value: f32 },
    /// hover_gravity обязана быть слабее обычной гравитации
    HoverGravityTooStrong { hover_gravity: f32, gravity: f32 },
    /// min_zoom_radius < max_zoom_radius нарушено
    ZoomBoundsInverted { min: f32, max: f32 },
    /// Стартовый радиус вне [min, max]
    ZoomRadiusOutOfBounds { radius: f32, min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field } => {
                write!(f, "locomotion config: `{}` must be finite", field)
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "locomotion config: `{}` must be > 0 (got {})", field, value)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "locomotion config: `{}` must be >= 0 (got {})", field, value)
            }
            ConfigError::GravityNotDownward { field, value } => {
                write!(f, "locomotion config: `{}` must be < 0 (got {})", field, value)
            }
            ConfigError::HoverGravityTooStrong { hover_gravity, gravity } => {
                write!(
                    f,
                    "locomotion config: `hover_gravity` ({}) must be weaker than `gravity` ({})",
                    hover_gravity, gravity
                )
            }
            ConfigError::ZoomBoundsInverted { min, max } => {
                write!(f, "locomotion config: zoom bounds inverted (min {} >= max {})", min, max)
            }
            ConfigError::ZoomRadiusOutOfBounds { radius, min, max } => {
                write!(
                    f,
                    "locomotion config: `initial_zoom_radius` ({}) outside [{}, {}]",
                    radius, min, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl LocomotionConfig {
    /// Проверяет конфиг перед использованием.
    ///
    /// Вызывается из [`crate::physics::spawn_character`]; молчаливое
    /// некорректное движение хуже ранней ошибки.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("rotation_speed", self.rotation_speed),
            ("gravity", self.gravity),
            ("ground_probe_distance", self.ground_probe_distance),
            ("jump_impulse", self.jump_impulse),
            ("jump_cancel_rate", self.jump_cancel_rate),
            ("jump_button_hold_time", self.jump_button_hold_time),
            ("hover_gravity", self.hover_gravity),
            ("hover_hold_threshold", self.hover_hold_threshold),
            ("stamina_max", self.stamina_max),
            ("stamina_deplete_rate", self.stamina_deplete_rate),
            ("stamina_recover_rate", self.stamina_recover_rate),
            ("fall_shake_threshold", self.fall_shake_threshold),
            ("min_zoom_radius", self.min_zoom_radius),
            ("max_zoom_radius", self.max_zoom_radius),
            ("zoom_sensitivity", self.zoom_sensitivity),
            ("zoom_smoothing", self.zoom_smoothing),
            ("initial_zoom_radius", self.initial_zoom_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }

        for (field, value) in [
            ("move_speed", self.move_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("rotation_speed", self.rotation_speed),
            ("ground_probe_distance", self.ground_probe_distance),
            ("jump_impulse", self.jump_impulse),
            ("stamina_max", self.stamina_max),
            ("min_zoom_radius", self.min_zoom_radius),
            ("zoom_sensitivity", self.zoom_sensitivity),
            ("zoom_smoothing", self.zoom_smoothing),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("jump_cancel_rate", self.jump_cancel_rate),
            ("jump_button_hold_time", self.jump_button_hold_time),
            ("hover_hold_threshold", self.hover_hold_threshold),
            ("stamina_deplete_rate", self.stamina_deplete_rate),
            ("stamina_recover_rate", self.stamina_recover_rate),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.gravity >= 0.0 {
            return Err(ConfigError::GravityNotDownward { field: "gravity", value: self.gravity });
        }
        if self.hover_gravity >= 0.0 {
            return Err(ConfigError::GravityNotDownward {
                field: "hover_gravity",
                value: self.hover_gravity,
            });
        }
        if self.hover_gravity <= self.gravity {
            return Err(ConfigError::HoverGravityTooStrong {
                hover_gravity: self.hover_gravity,
                gravity: self.gravity,
            });
        }

        if self.min_zoom_radius >= self.max_zoom_radius {
            return Err(ConfigError::ZoomBoundsInverted {
                min: self.min_zoom_radius,
                max: self.max_zoom_radius,
            });
        }
        if self.initial_zoom_radius < self.min_zoom_radius
            || self.initial_zoom_radius > self.max_zoom_radius
        {
            return Err(ConfigError::ZoomRadiusOutOfBounds {
                radius: self.initial_zoom_radius,
                min: self.min_zoom_radius,
                max: self.max_zoom_radius,
            });
        }

        Ok(())
    }
}
