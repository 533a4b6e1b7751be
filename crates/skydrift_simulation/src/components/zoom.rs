//! Camera zoom state

use bevy::prelude::*;

/// Радиус орбитальной камеры
///
/// target_radius ∈ [min, max] конфига; current_radius — демпфированный
/// follower, его и читает camera rig хоста.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ZoomState {
    pub target_radius: f32,
    pub current_radius: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(8.0)
    }
}

impl ZoomState {
    pub fn new(radius: f32) -> Self {
        Self { target_radius: radius, current_radius: radius }
    }
}
