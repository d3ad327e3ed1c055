//! Headless physics demo
//!
//! Runs a short scripted round (players chasing, jumping, landing on a
//! platform and bumping into each other) and logs what happened. Pass a JSON
//! config path as the first argument to override the world constants.
//!
//! `RUST_LOG=debug cargo run` for per-event output.

use arcade_physics::consts::SIM_DT;
use arcade_physics::math::random_range;
use arcade_physics::sim::{
    Body, HasBox, Rect, check_collision, get_collision_normal, resolve_collision, separate_aabb,
    sweep_aabb,
};
use arcade_physics::{PhysicsConfig, PhysicsEngine, VectorPool};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const PLAYER_SIZE: f64 = 40.0;
const PLAYER_SPEED: f64 = 300.0;
const JUMP_POWER: f64 = 500.0;
const DEMO_TICKS: u32 = 600;
const DEMO_SEED: u64 = 0x7a6;

fn main() {
    env_logger::init();
    log::info!("Arcade physics demo starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => PhysicsConfig::load_or_default(path),
        None => PhysicsConfig::default(),
    };
    let ground = config.world_height - PLAYER_SIZE;
    let engine = PhysicsEngine::new(config);
    let mut pool = VectorPool::new();
    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);

    let mut players: Vec<Body> = (0..3)
        .map(|i| {
            let x = 300.0 + 500.0 * f64::from(i);
            Body::new(x, 100.0, PLAYER_SIZE, PLAYER_SIZE).with_gravity(true)
        })
        .collect();
    let platforms = [
        Rect::new(700.0, 800.0, 300.0, 20.0),
        Rect::new(1200.0, 600.0, 200.0, 20.0),
    ];

    let mut bumps = 0u32;
    let mut landings = 0u32;

    for tick in 0..DEMO_TICKS {
        let dt = engine.config().clamp_dt(SIM_DT);
        let target_x = players[0].center().x;

        for player in &mut players {
            // Everyone chases the first player; the leader wanders
            let dx = target_x - player.center().x;
            let push = if dx.abs() > 1.0 {
                dx.signum() * PLAYER_SPEED
            } else {
                random_range(&mut rng, -PLAYER_SPEED, PLAYER_SPEED)
            };
            player.push(push, 0.0);

            if player.is_grounded && random_range(&mut rng, 0.0, 1.0) < 0.02 {
                player.vy = -JUMP_POWER;
                player.is_grounded = false;
            }

            engine.apply_physics(player, dt);
            engine.keep_in_bounds(player);

            player.is_grounded = player.y >= ground;
            if player.is_grounded {
                player.vy = 0.0;
            }

            for platform in &platforms {
                if check_collision(&*player, platform) && player.vy > 0.0 && player.y < platform.y {
                    player.y = platform.y - player.height;
                    player.vy = 0.0;
                    player.is_grounded = true;
                    landings += 1;
                    log::debug!("tick {tick}: landed on platform at y={}", platform.y);
                }
            }
        }

        for i in 0..players.len() {
            let (head, tail) = players.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if check_collision(&*a, &*b) {
                    resolve_collision(a, b);
                    bumps += 1;
                }
            }
        }
    }

    log::info!("{DEMO_TICKS} ticks: {landings} platform landings, {bumps} player bumps");
    for (i, p) in players.iter().enumerate() {
        log::info!("player {i} at ({:.1}, {:.1}) grounded={}", p.x, p.y, p.is_grounded);
    }

    // A projectile fast enough to skip the wall between ticks
    let projectile = Body::new(0.0, 500.0, 8.0, 8.0).with_velocity(2400.0, 0.0);
    let wall = Rect::new(150.0, 400.0, 4.0, 300.0);
    match sweep_aabb(&mut pool, &projectile, &wall, engine.config().max_dt) {
        Some(hit) => {
            log::info!("projectile hits wall after {:.4}s, normal {}", hit.time, hit.normal);
            hit.release(&mut pool);
        }
        None => log::warn!("projectile sweep missed the wall"),
    }

    // Overlapping crates pushed apart along their contact normal
    let mut crate_a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let mut crate_b = Rect::new(40.0, 10.0, 50.0, 50.0);
    let normal = get_collision_normal(&mut pool, &crate_a, &crate_b);
    let separation = separate_aabb(&mut crate_a, &mut crate_b, &normal);
    log::info!("crates separated by {separation:.1} along {normal}");
    pool.release(normal);

    log::info!(
        "vector pool: {} free, {} constructed",
        pool.len(),
        pool.constructed()
    );
}
