//! Численные helpers интеграции: шаг к цели без overshoot, экспоненциальное
//! демпфирование, защита от экстремальных frame delta.

use bevy::prelude::*;

/// Верхняя граница frame delta (секунды).
///
/// Спайк после паузы не должен протуннелировать персонажа сквозь землю
/// и не должен перескочить окно jump-cancel.
pub const MAX_FRAME_DELTA: f32 = 0.5;

/// Приводит внешний frame delta к рабочему диапазону [0, MAX_FRAME_DELTA].
/// NaN/inf считаем нулевым кадром.
pub fn clamp_delta(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DELTA)
    } else {
        0.0
    }
}

/// Шаг от `current` к `target` не длиннее `max_step` (без overshoot).
pub fn move_towards(current: Vec2, target: Vec2, max_step: f32) -> Vec2 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_step || distance < 1e-6 {
        target
    } else {
        current + to_target * (max_step / distance)
    }
}

/// Frame-rate-независимый коэффициент экспоненциального демпфирования.
///
/// `x += (target - x) * damp_factor(rate, dt)` сходится к target монотонно
/// при любом dt ≥ 0; на малых dt ведёт себя как `rate * dt`.
pub fn damp_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}
