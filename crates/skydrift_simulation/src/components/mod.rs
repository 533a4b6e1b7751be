//! ECS Components персонажа
//!
//! Организация по доменам:
//! - config: неизменяемые tuning-параметры (LocomotionConfig)
//! - motion: кинематическое состояние (Character, KinematicState, JumpState)
//! - stamina: выносливость hover'а (Stamina)
//! - hover: state machine полёта (HoverState)
//! - zoom: радиус камеры (ZoomState)
//! - input: покадровый ввод от хоста (FrameInput, CameraYaw)

pub mod config;
pub mod hover;
pub mod input;
pub mod motion;
pub mod stamina;
pub mod zoom;

// Re-exports для удобного импорта
pub use config::*;
pub use hover::*;
pub use input::*;
pub use motion::*;
pub use stamina::*;
pub use zoom::*;
