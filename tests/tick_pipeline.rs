//! Full tick pipeline: integrate, detect, resolve, sweep.

use arcade_physics::consts::SIM_DT;
use arcade_physics::sim::{
    Body, Circle, HasKinematics, Rect, check_circle_rect_collision, check_collision, overlap,
    resolve_collision, sweep_aabb,
};
use arcade_physics::{PhysicsConfig, PhysicsEngine, VectorPool};

fn resolve_all(bodies: &mut [Body]) -> usize {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if check_collision(&*a, &*b) {
                resolve_collision(a, b);
                resolved += 1;
            }
        }
    }
    resolved
}

#[test]
fn falling_body_rests_on_world_floor() {
    let engine = PhysicsEngine::default();
    let mut body = Body::new(500.0, 0.0, 40.0, 40.0).with_gravity(true);

    for _ in 0..600 {
        engine.apply_physics(&mut body, SIM_DT);
        engine.keep_in_bounds(&mut body);
    }

    assert_eq!(body.y, engine.config().world_height - 40.0);
    assert_eq!(body.x, 500.0);
}

#[test]
fn colliding_players_end_up_apart() {
    let engine = PhysicsEngine::default();
    let mut players = vec![
        Body::new(100.0, 500.0, 40.0, 40.0).with_velocity(300.0, 0.0),
        Body::new(160.0, 500.0, 40.0, 40.0).with_velocity(-300.0, 0.0),
    ];

    let mut total = 0;
    for _ in 0..30 {
        for p in players.iter_mut() {
            engine.apply_physics(p, SIM_DT);
            engine.keep_in_bounds(p);
        }
        total += resolve_all(&mut players);
    }

    assert!(total > 0, "players should have met");
    // Separated down to at most rounding noise
    let (overlap_x, _) = overlap(&players[0], &players[1]);
    assert!(overlap_x < 1e-9, "still overlapping by {overlap_x}");
    assert!(players[0].x < players[1].x, "resolution keeps their order");
}

#[test]
fn sweep_predicts_what_integration_would_skip() {
    let config = PhysicsConfig {
        friction: 1.0,
        ..Default::default()
    };
    let engine = PhysicsEngine::new(config);
    let mut pool = VectorPool::new();

    let mut bullet = Body::new(0.0, 100.0, 6.0, 6.0).with_velocity(3000.0, 0.0);
    let wall = Rect::new(120.0, 50.0, 3.0, 100.0);
    let dt = engine.config().max_dt;

    let hit = sweep_aabb(&mut pool, &bullet, &wall, dt).expect("sweep should see the wall");
    assert!(hit.will_collide);
    assert!(hit.time > 0.0 && hit.time < dt);
    hit.release(&mut pool);

    engine.apply_physics(&mut bullet, dt);
    assert!(bullet.x > wall.x + wall.width);
    assert!(!check_collision(&bullet, &wall));
    assert_eq!(bullet.velocity().x, 3000.0);
}

#[test]
fn pool_stays_bounded_over_many_ticks() {
    let mut pool = VectorPool::new();
    let mover = Body::new(0.0, 0.0, 10.0, 10.0).with_velocity(50.0, 50.0);
    let target = Rect::new(3.0, 3.0, 10.0, 10.0);

    for _ in 0..1000 {
        if let Some(hit) = sweep_aabb(&mut pool, &mover, &target, SIM_DT) {
            hit.release(&mut pool);
        }
    }

    // Steady state reached within the first tick
    assert!(pool.constructed() <= 4);
    assert_eq!(pool.len(), pool.constructed());
}

#[test]
fn pickup_circle_against_player_box() {
    let player = Body::new(200.0, 200.0, 40.0, 40.0);
    let near = Circle::new(250.0, 220.0, 15.0);
    let far = Circle::new(300.0, 220.0, 15.0);
    assert!(check_circle_rect_collision(&near, &player));
    assert!(!check_circle_rect_collision(&far, &player));
}
