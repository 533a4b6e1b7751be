//! Headless прогон SKYDRIFT locomotion
//!
//! Скриптованный ввод (бег → прыжок → hover → zoom) без рендера;
//! удобно для профилирования и ручной проверки тюнинга.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skydrift_simulation::{
    create_headless_app, spawn_character, FrameInput, KinematicState, LocomotionConfig,
    LocomotionPlugin, Stamina, ZoomState,
};

const TICK_SECONDS: f64 = 1.0 / 60.0;

fn main() {
    println!("Starting SKYDRIFT headless locomotion run (600 ticks @ 60Hz)");

    let mut app = create_headless_app();
    app.add_plugins(LocomotionPlugin);
    // Каждый app.update() продвигает время ровно на один тик
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        TICK_SECONDS,
    )));

    let character = spawn_character(
        &mut app.world_mut().commands(),
        Vec3::ZERO,
        LocomotionConfig::default(),
    )
    .expect("default locomotion config is valid");
    app.world_mut().flush();

    for tick in 0..600u32 {
        {
            let mut input = app
                .world_mut()
                .get_mut::<FrameInput>(character)
                .expect("character has FrameInput");
            *input = FrameInput {
                // Бежим вперёд всю дорогу
                move_axis: Vec2::new(0.0, 1.0),
                jump_pressed: tick == 120,
                jump_held: (120..135).contains(&tick),
                hover_held: (140..350).contains(&tick),
                zoom_delta: if (400..403).contains(&tick) {
                    Vec2::new(0.0, 1.0)
                } else {
                    Vec2::ZERO
                },
            };
        }

        app.update();

        if tick % 60 == 0 {
            let world = app.world();
            let transform = world.get::<Transform>(character).expect("character transform");
            let kin = world.get::<KinematicState>(character).expect("character kinematics");
            let stamina = world.get::<Stamina>(character).expect("character stamina");
            let zoom = world.get::<ZoomState>(character).expect("character zoom");
            println!(
                "Tick {:4}: pos ({:6.2}, {:5.2}, {:7.2})  grounded={}  stamina={:5.1}  zoom={:.2}",
                tick,
                transform.translation.x,
                transform.translation.y,
                transform.translation.z,
                kin.grounded,
                stamina.current,
                zoom.current_radius,
            );
        }
    }

    println!("Simulation complete!");
}
