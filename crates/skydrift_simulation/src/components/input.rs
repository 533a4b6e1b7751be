//! Покадровый ввод и camera-yaw от хоста
//!
//! Контроллер не опрашивает устройства сам: хост (или headless-тест)
//! заполняет эти компоненты перед тиком симуляции.

use bevy::prelude::*;

/// Снимок ввода на текущий кадр
///
/// Для headless тестов — mock input через этот компонент.
/// Для игры — заполняется из input-системы хоста.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct FrameInput {
    /// Направление движения, каждая ось ∈ [-1, 1]
    pub move_axis: Vec2,
    /// Кнопка прыжка нажата именно в этом кадре (edge)
    pub jump_pressed: bool,
    /// Кнопка прыжка удержана
    pub jump_held: bool,
    /// Кнопка hover удержана
    pub hover_held: bool,
    /// Дельта скролла; используется только ось y
    pub zoom_delta: Vec2,
}

/// Yaw камеры (радианы) — провайдер подменяется в тестах независимо от ввода
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CameraYaw(pub f32);
