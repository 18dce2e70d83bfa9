//! Headless steering demonstration.
//!
//! Run with: cargo run --example steer_demo

use snake_sim::{LeanParams, Pose, SnakeConfig, SnakeWorld, SteeringParams};

fn main() {
    println!("=== Snake Pilot - Headless Steering Demo ===\n");

    let mut sim = SnakeWorld::new();
    let classic = SnakeConfig::classic();

    // Snake 0: analog steering with a rolling camera.
    sim.spawn_snake(0, Pose::default(), SteeringParams::default());
    sim.attach_rig(0, LeanParams::default());

    // Snake 1: classic button steering with a lagging camera.
    sim.spawn_snake(1, Pose::new(20.0, 0.0, 0.0, 0.0), classic.steering());
    sim.attach_rig(1, classic.lean);

    // Snake 2: no camera rig at all.
    sim.spawn_snake(2, Pose::new(-20.0, 0.0, 0.0, 0.0), SteeringParams::default());

    println!("Running 4 seconds at 60 Hz...\n");
    for frame in 0..240 {
        // Weave left then right every second.
        let left_phase = (frame / 60) % 2 == 0;
        sim.set_axis_input(0, if left_phase { 0.8 } else { 0.0 }, if left_phase { 0.0 } else { 0.8 });
        sim.set_button_input(1, left_phase, !left_phase);
        sim.set_axis_input(2, 0.5, 0.0);

        sim.step(1.0 / 60.0);

        if (frame + 1) % 60 == 0 {
            println!("--- Tick {} (t={:.1}s) ---", sim.current_tick(), sim.current_time());
            for snake in sim.snapshot().snakes {
                let lean = snake
                    .lean
                    .map(|l| format!("{:+.3}", l))
                    .unwrap_or_else(|| "none".to_string());
                println!(
                    "    Snake {}: pos=({:.1}, {:.1}) yaw={:+.2} turn={:+.1} lean={}",
                    snake.id, snake.x, snake.z, snake.yaw, snake.turn, lean
                );
            }
        }
    }

    println!("\n=== Final State (JSON) ===\n");
    match sim.snapshot().to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("failed to serialize snapshot: {}", err),
    }
}
