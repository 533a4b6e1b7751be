//! Locomotion integration test
//!
//! Скриптованные сценарии через полный plugin: бег, прыжок с приземлением,
//! hover-цикл, принудительный выход по стамине, zoom.
//!
//! Проверяем:
//! - Последовательность juice-событий
//! - Инварианты stamina/hover на каждом тике
//! - Нет паники/крашей

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skydrift_simulation::*;

const TICK_SECONDS: f64 = 1.0 / 60.0;

/// Собранные juice-события (коллектор вместо внешней косметики/звука)
#[derive(Resource, Default)]
struct JuiceLog {
    jumps: Vec<JumpStarted>,
    landings: Vec<Landed>,
    hover_started: Vec<HoverStarted>,
    hover_stopped: Vec<HoverStopped>,
}

impl JuiceLog {
    fn clear(&mut self) {
        self.jumps.clear();
        self.landings.clear();
        self.hover_started.clear();
        self.hover_stopped.clear();
    }
}

fn record_juice(
    mut log: ResMut<JuiceLog>,
    mut jumps: EventReader<JumpStarted>,
    mut landings: EventReader<Landed>,
    mut hover_started: EventReader<HoverStarted>,
    mut hover_stopped: EventReader<HoverStopped>,
) {
    log.jumps.extend(jumps.read().copied());
    log.landings.extend(landings.read().copied());
    log.hover_started.extend(hover_started.read().copied());
    log.hover_stopped.extend(hover_stopped.read().copied());
}

/// Helper: headless App с locomotion plugin и ручным продвижением времени
fn create_locomotion_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins(LocomotionPlugin);
    // Каждый app.update() — ровно один 60Hz тик
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        TICK_SECONDS,
    )));
    app.init_resource::<JuiceLog>();
    app.add_systems(FixedUpdate, record_juice);
    app
}

/// Helper: спавним персонажа и применяем команды
fn spawn(app: &mut App, position: Vec3, config: LocomotionConfig) -> Entity {
    let entity = spawn_character(&mut app.world_mut().commands(), position, config)
        .expect("test config must be valid");
    app.world_mut().flush();
    entity
}

fn run_tick(app: &mut App, character: Entity, input: FrameInput) {
    *app.world_mut().get_mut::<FrameInput>(character).expect("FrameInput present") = input;
    app.update();
    check_invariants(app, character);
}

fn run_ticks(app: &mut App, character: Entity, input: FrameInput, ticks: usize) {
    for _ in 0..ticks {
        run_tick(app, character, input);
    }
}

/// Инварианты, которые обязаны держаться на каждом тике
fn check_invariants(app: &mut App, character: Entity) {
    let world = app.world();
    let stamina = world.get::<Stamina>(character).expect("stamina");
    let hover = world.get::<HoverState>(character).expect("hover state");
    let kin = world.get::<KinematicState>(character).expect("kinematics");

    assert!(
        stamina.current >= 0.0 && stamina.current <= stamina.max,
        "stamina out of bounds: {}",
        stamina.current
    );
    if hover.is_active() {
        assert!(stamina.current > 0.0, "active hover with empty stamina");
    }
    assert!(kin.horizontal_speed().is_finite());
    assert!(kin.vertical_velocity.is_finite());
}

fn kinematics(app: &App, character: Entity) -> KinematicState {
    *app.world().get::<KinematicState>(character).expect("kinematics")
}

fn clear_log(app: &mut App) {
    app.world_mut().resource_mut::<JuiceLog>().clear();
}

#[test]
fn test_idle_character_settles_grounded() {
    let mut app = create_locomotion_app();
    let character = spawn(&mut app, Vec3::ZERO, LocomotionConfig::default());

    run_ticks(&mut app, character, FrameInput::default(), 30);

    let kin = kinematics(&app, character);
    assert!(kin.grounded);
    assert_eq!(kin.horizontal_velocity, Vec2::ZERO);

    // На опоре стоим, сквозь плоскость не проваливаемся
    let y = app.world().get::<Transform>(character).unwrap().translation.y;
    assert_eq!(y, 0.0);

    let stamina = app.world().get::<Stamina>(character).unwrap();
    assert_eq!(stamina.current, stamina.max);
}

#[test]
fn test_run_accelerates_to_move_speed() {
    let mut app = create_locomotion_app();
    let character = spawn(&mut app, Vec3::ZERO, LocomotionConfig::default());
    run_ticks(&mut app, character, FrameInput::default(), 10);

    let forward = FrameInput { move_axis: Vec2::new(0.0, 1.0), ..Default::default() };
    run_ticks(&mut app, character, forward, 120);

    let kin = kinematics(&app, character);
    let config = LocomotionConfig::default();
    assert!((kin.horizontal_speed() - config.move_speed).abs() < 1e-2);

    // Камера с yaw=0: бег уносит в -Z
    let translation = app.world().get::<Transform>(character).unwrap().translation;
    assert!(translation.z < -5.0, "translation = {:?}", translation);
    assert!(translation.x.abs() < 1e-3);
}

#[test]
fn test_jump_rise_and_landing_cycle() {
    let mut app = create_locomotion_app();
    let character = spawn(&mut app, Vec3::ZERO, LocomotionConfig::default());
    run_ticks(&mut app, character, FrameInput::default(), 10);
    clear_log(&mut app);

    // Прыжок с полным удержанием окна
    run_tick(
        &mut app,
        character,
        FrameInput { jump_pressed: true, jump_held: true, ..Default::default() },
    );
    let kin = kinematics(&app, character);
    assert!(kin.vertical_velocity > 11.0, "impulse applied: {}", kin.vertical_velocity);

    let held = FrameInput { jump_held: true, ..Default::default() };
    run_ticks(&mut app, character, held, 19);

    // Событие прыжка с точным импульсом
    {
        let log = app.world().resource::<JuiceLog>();
        assert_eq!(log.jumps.len(), 1);
        assert_eq!(log.jumps[0].impulse, LocomotionConfig::default().jump_impulse);
        assert_eq!(log.jumps[0].entity, character);
    }

    // Отпускаем и ждём приземления
    let mut landed_tick = None;
    for tick in 0..300 {
        run_tick(&mut app, character, FrameInput::default());
        if kinematics(&app, character).grounded {
            landed_tick = Some(tick);
            break;
        }
    }
    assert!(landed_tick.is_some(), "character never landed");
    run_ticks(&mut app, character, FrameInput::default(), 2);

    let log = app.world().resource::<JuiceLog>();
    assert_eq!(log.landings.len(), 1);
    let landing = log.landings[0];
    assert!(landing.impact_velocity < 0.0);
    // Обычный прыжок — не жёсткое падение
    assert!(!landing.hard, "impact {}", landing.impact_velocity);

    let y = app.world().get::<Transform>(character).unwrap().translation.y;
    assert_eq!(y, 0.0);
}

#[test]
fn test_short_tap_jump_is_lower_than_full_hold() {
    let config = LocomotionConfig::default();

    // Полное удержание окна
    let mut app = create_locomotion_app();
    let character = spawn(&mut app, Vec3::ZERO, config);
    run_ticks(&mut app, character, FrameInput::default(), 10);
    run_tick(
        &mut app,
        character,
        FrameInput { jump_pressed: true, jump_held: true, ..Default::default() },
    );
    let held = FrameInput { jump_held: true, ..Default::default() };
    let mut apex_full: f32 = 0.0;
    for _ in 0..120 {
        run_tick(&mut app, character, held);
        let y = app.world().get::<Transform>(character).unwrap().translation.y;
        apex_full = apex_full.max(y);
    }

    // Тап: отпустили сразу
    let mut app = create_locomotion_app();
    let character = spawn(&mut app, Vec3::ZERO, config);
    run_ticks(&mut app, character, FrameInput::default(), 10);
    run_tick(
        &mut app,
        character,
        FrameInput { jump_pressed: true, jump_held: true, ..Default::default() },
    );
    let mut apex_tap: f32 = 0.0;
    for _ in 0..120 {
        run_tick(&mut app, character, FrameInput::default());
        let y = app.world().get::<Transform>(character).unwrap().translation.y;
        apex_tap = apex_tap.max(y);
    }

    assert!(
        apex_tap < apex_full * 0.75,
        "variable height broken: tap {} vs full {}",
        apex_tap,
        apex_full
    );
}

#[test]
fn test_hard_landing_from_high_drop() {
    let mut app = create_locomotion_app();
    let config = LocomotionConfig::default();
    let character = spawn(&mut app, Vec3::new(0.0, 12.0, 0.0), config);

    for _ in 0..300 {
        run_tick(&mut app, character, FrameInput::default());
        if kinematics(&app, character).grounded {
            break;
        }
    }
    run_ticks(&mut app, character, FrameInput::default(), 2);

    let log = app.world().resource::<JuiceLog>();
    assert_eq!(log.landings.len(), 1);
    let landing = log.landings[0];
    assert!(landing.hard, "drop from 12m must be hard (impact {})", landing.impact_velocity);
    assert!(landing.impact_velocity < config.fall_shake_threshold);
}

#[test]
fn test_hover_cycle_catch_drain_release() {
    let mut app = create_locomotion_app();
    let character = spawn(&mut app, Vec3::ZERO, LocomotionConfig::default());
    run_ticks(&mut app, character, FrameInput::default(), 10);
    clear_log(&mut app);

    // В воздух с полным прыжком
    run_tick(
        &mut app,
        character,
        FrameInput { jump_pressed: true, jump_held: true, ..Default::default() },
    );
    run_ticks(&mut app, character, FrameInput { jump_held: true, ..Default::default() }, 19);

    // Держим hover: заряд → активация ("подхват")
    // 60 тиков: заряд (~15) + активный полёт; медленное снижение hover'а
    // не успевает довести до земли
    let hover_input = FrameInput { hover_held: true, ..Default::default() };
    let mut activation_tick = None;
    for tick in 0..60 {
        run_tick(&mut app, character, hover_input);
        let hovering = app.world().get::<HoverState>(character).unwrap().is_active();
        if hovering && activation_tick.is_none() {
            activation_tick = Some(tick);
            // Подхват: вертикальная скорость погашена (остался один тик hover-гравитации)
            let kin = kinematics(&app, character);
            assert!(kin.vertical_velocity.abs() < 0.1, "catch failed: {}", kin.vertical_velocity);
        }
    }
    let activation_tick = activation_tick.expect("hover never activated");
    // Порог удержания ~15 тиков — мгновенной активации быть не должно
    assert!(activation_tick >= 14, "activated too early: tick {}", activation_tick);

    let stamina_after_hover = app.world().get::<Stamina>(character).unwrap().current;
    assert!(stamina_after_hover < 100.0);
    assert!(stamina_after_hover > 0.0);

    {
        let log = app.world().resource::<JuiceLog>();
        assert_eq!(log.hover_started.len(), 1);
        assert!(log.hover_stopped.is_empty());
    }

    // Отпустили кнопку → стоп с причиной Released, дальше падение до земли
    let mut grounded = false;
    for _ in 0..600 {
        run_tick(&mut app, character, FrameInput::default());
        if kinematics(&app, character).grounded {
            grounded = true;
            break;
        }
    }
    assert!(grounded, "character never returned to ground");
    run_ticks(&mut app, character, FrameInput::default(), 2);

    {
        let log = app.world().resource::<JuiceLog>();
        assert_eq!(log.hover_stopped.len(), 1);
        assert_eq!(log.hover_stopped[0].reason, HoverStopReason::Released);
        assert_eq!(log.landings.len(), 1);
    }

    // На земле стамина восстанавливается до максимума
    run_ticks(&mut app, character, FrameInput::default(), 300);
    let stamina = app.world().get::<Stamina>(character).unwrap();
    assert_eq!(stamina.current, stamina.max);
}

#[test]
fn test_exhaustion_forces_hover_stop() {
    let mut app = create_locomotion_app();
    // Крошечный запас: хватит меньше чем на полсекунды полёта
    let config = LocomotionConfig { stamina_max: 10.0, ..Default::default() };
    let character = spawn(&mut app, Vec3::ZERO, config);
    run_ticks(&mut app, character, FrameInput::default(), 10);
    clear_log(&mut app);

    run_tick(
        &mut app,
        character,
        FrameInput {
            jump_pressed: true,
            jump_held: true,
            hover_held: true,
            ..Default::default()
        },
    );
    let air_input = FrameInput { jump_held: true, hover_held: true, ..Default::default() };
    run_ticks(&mut app, character, air_input, 19);

    // Держим hover до полного истощения и приземления
    let hover_input = FrameInput { hover_held: true, ..Default::default() };
    run_ticks(&mut app, character, hover_input, 300);

    let log = app.world().resource::<JuiceLog>();
    assert_eq!(log.hover_started.len(), 1);
    assert!(!log.hover_stopped.is_empty());
    assert_eq!(log.hover_stopped[0].reason, HoverStopReason::Exhausted);

    let stamina = app.world().get::<Stamina>(character).unwrap();
    // После принудительного выхода персонаж упал и уже регенерирует на земле
    let hover = app.world().get::<HoverState>(character).unwrap();
    assert!(!hover.is_active());
    assert!(stamina.current >= 0.0);
    assert!(kinematics(&app, character).grounded);
}

#[test]
fn test_zoom_step_and_convergence() {
    let mut app = create_locomotion_app();
    let config = LocomotionConfig::default();
    let character = spawn(&mut app, Vec3::ZERO, config);
    run_ticks(&mut app, character, FrameInput::default(), 5);

    // Один щелчок скролла вверх
    run_tick(
        &mut app,
        character,
        FrameInput { zoom_delta: Vec2::new(0.0, 1.0), ..Default::default() },
    );
    let zoom = *app.world().get::<ZoomState>(character).unwrap();
    let expected_target = config.initial_zoom_radius - config.zoom_sensitivity;
    assert_eq!(zoom.target_radius, expected_target);

    // Без ввода current монотонно сходится к target и не покидает границы
    let mut last_radius = zoom.current_radius;
    for _ in 0..240 {
        run_tick(&mut app, character, FrameInput::default());
        let zoom = app.world().get::<ZoomState>(character).unwrap();
        assert!(zoom.current_radius <= last_radius + 1e-6);
        assert!(zoom.current_radius >= config.min_zoom_radius);
        assert!(zoom.current_radius <= config.max_zoom_radius);
        last_radius = zoom.current_radius;
    }
    assert!((last_radius - expected_target).abs() < 1e-2);
}

#[test]
fn test_invalid_config_fails_fast() {
    let mut app = create_locomotion_app();
    let config = LocomotionConfig { move_speed: -1.0, ..Default::default() };

    let result = spawn_character(&mut app.world_mut().commands(), Vec3::ZERO, config);
    assert!(matches!(result, Err(ConfigError::NotPositive { field: "move_speed", .. })));
}
