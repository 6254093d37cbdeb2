use balloon_defense::actions::{place_tower, start_wave};
use balloon_defense::agents::projectile_agent;
use balloon_defense::state::*;
use balloon_defense::{GameConfig, GameEvent, TickStatus, Vec2, tick};

fn make_world() -> World {
    World::new(GameConfig::default()).expect("default config is valid")
}

fn spec(health: i32) -> BalloonSpec {
    BalloonSpec {
        health,
        speed: 1.0,
        bounty: health as u32,
    }
}

/// Push an active balloon at `position`, keeping ids ascending.
fn add_balloon(world: &mut World, health: i32, position: Vec2) -> EntityId {
    let id = world.next_id(EntityType::Balloon);
    let mut balloon = Balloon::spawn(id, &spec(health), &world.path, 15.0);
    balloon.position = position;
    world.balloons.push(balloon);
    id
}

/// Balloon sitting on the final path point; it leaks on its next step.
fn add_balloon_at_end(world: &mut World) -> EntityId {
    let end = world.path.end();
    let last = world.path.last_index();
    let id = add_balloon(world, 1, end);
    let balloon = world.balloon_mut(id).unwrap();
    balloon.segment = last;
    id
}

fn tower_at(position: Vec2) -> Tower {
    Tower {
        id: EntityId(999),
        position,
        radius: 15.0,
        range: 120.0,
        fire_rate: 60,
        cooldown: 0,
        damage: 1,
    }
}

fn count_game_over(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count()
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn balloon_moves_by_speed_along_segment() {
    let world = make_world();
    let mut balloon = Balloon::spawn(EntityId(1), &spec(1), &world.path, 15.0);
    assert_eq!(balloon.position, Vec2::new(-15.0, 300.0));

    assert_eq!(balloon.advance(&world.path), BalloonStep::Moved);
    assert_eq!(balloon.position, Vec2::new(-14.0, 300.0));
    assert_eq!(balloon.distance_traveled, 1.0);
}

#[test]
fn balloon_snaps_onto_corner() {
    let world = make_world();
    let mut balloon = Balloon::spawn(EntityId(1), &spec(1), &world.path, 15.0);
    balloon.position = Vec2::new(399.5, 300.0);

    assert_eq!(balloon.advance(&world.path), BalloonStep::ReachedPoint(1));
    assert_eq!(balloon.position, Vec2::new(400.0, 300.0));
    assert_eq!(balloon.segment, 1);

    // Next step heads down the second segment
    assert_eq!(balloon.advance(&world.path), BalloonStep::Moved);
    assert_eq!(balloon.position, Vec2::new(400.0, 301.0));
}

#[test]
fn balloon_leaks_from_final_point_once() {
    let world = make_world();
    let mut balloon = Balloon::spawn(EntityId(1), &spec(3), &world.path, 15.0);
    balloon.position = world.path.end();
    balloon.segment = world.path.last_index();

    assert_eq!(balloon.advance(&world.path), BalloonStep::Leaked);
    assert_eq!(balloon.state, BalloonState::Leaked);
    assert_eq!(balloon.health, 0);
    assert_eq!(balloon.advance(&world.path), BalloonStep::Idle);
}

// ── leaks and game over ───────────────────────────────────────────────────────

#[test]
fn leak_costs_one_life() {
    let mut world = make_world();
    add_balloon_at_end(&mut world);

    assert_eq!(tick(&mut world), TickStatus::Running);
    assert_eq!(world.game.lives, 19);
    assert_eq!(world.game.balloons_leaked, 1);
    assert!(world.balloons.is_empty());
    assert!(
        world
            .pending_events()
            .contains(&GameEvent::LivesChanged { lives: 19 })
    );
}

#[test]
fn last_life_ends_the_game() {
    let mut world = make_world();
    world.game.lives = 1;
    start_wave(&mut world).unwrap();

    let mut status = TickStatus::Running;
    for _ in 0..2000 {
        status = tick(&mut world);
        if status == TickStatus::GameOver {
            break;
        }
    }

    assert_eq!(status, TickStatus::GameOver);
    assert_eq!(world.game.lives, 0);
    assert_eq!(world.status(), GameStatus::GameOver);
    assert_eq!(count_game_over(&world.drain_events()), 1);
}

#[test]
fn simultaneous_leaks_never_go_below_zero() {
    let mut world = make_world();
    world.game.lives = 1;
    add_balloon_at_end(&mut world);
    add_balloon_at_end(&mut world);

    assert_eq!(tick(&mut world), TickStatus::GameOver);
    assert_eq!(world.game.lives, 0);
    assert_eq!(world.game.balloons_leaked, 2);
    assert_eq!(count_game_over(world.pending_events()), 1);
}

#[test]
fn ticks_after_game_over_change_nothing() {
    let mut world = make_world();
    world.game.lives = 1;
    start_wave(&mut world).unwrap();
    place_tower(&mut world, 200.0, 200.0).unwrap();
    add_balloon_at_end(&mut world);
    add_balloon(&mut world, 5, Vec2::new(100.0, 300.0));

    assert_eq!(tick(&mut world), TickStatus::GameOver);
    world.drain_events();

    let balloons = world.balloons.clone();
    let projectiles = world.projectiles.clone();
    let game = world.game.clone();
    let ticks = world.tick_count;

    for _ in 0..100 {
        assert_eq!(tick(&mut world), TickStatus::GameOver);
    }

    assert_eq!(world.balloons, balloons);
    assert_eq!(world.projectiles, projectiles);
    assert_eq!(world.game, game);
    assert_eq!(world.tick_count, ticks);
    assert!(world.pending_events().is_empty());
}

// ── damage ────────────────────────────────────────────────────────────────────

#[test]
fn damage_only_ever_lowers_health() {
    let mut balloon = Balloon::spawn(EntityId(1), &spec(3), &make_world().path, 15.0);

    assert_eq!(
        balloon.apply_damage(1),
        DamageOutcome::Damaged { remaining: 2 }
    );
    assert_eq!(balloon.tier(), BalloonTier::Blue);
    assert_eq!(balloon.apply_damage(5), DamageOutcome::Popped { bounty: 3 });
    assert_eq!(balloon.state, BalloonState::Popped);

    let health = balloon.health;
    assert_eq!(balloon.apply_damage(1), DamageOutcome::Ignored);
    assert_eq!(balloon.health, health);
}

#[test]
fn tiers_follow_health() {
    let mut balloon = Balloon::spawn(EntityId(1), &spec(4), &make_world().path, 15.0);
    assert_eq!(balloon.tier(), BalloonTier::Yellow);
    balloon.health = 3;
    assert_eq!(balloon.tier(), BalloonTier::Green);
    balloon.health = 2;
    assert_eq!(balloon.tier(), BalloonTier::Blue);
    balloon.health = 1;
    assert_eq!(balloon.tier(), BalloonTier::Red);
}

// ── targeting ─────────────────────────────────────────────────────────────────

#[test]
fn target_is_furthest_along_path() {
    let mut world = make_world();
    let behind = add_balloon(&mut world, 1, Vec2::new(150.0, 300.0));
    let ahead = add_balloon(&mut world, 1, Vec2::new(250.0, 300.0));
    world.balloon_mut(behind).unwrap().distance_traveled = 165.0;
    world.balloon_mut(ahead).unwrap().distance_traveled = 265.0;

    let tower = tower_at(Vec2::new(200.0, 360.0));
    assert_eq!(tower.select_target(&world.balloons).map(|b| b.id), Some(ahead));
}

#[test]
fn equal_progress_picks_first_spawned() {
    let mut world = make_world();
    let first = add_balloon(&mut world, 1, Vec2::new(190.0, 300.0));
    let second = add_balloon(&mut world, 1, Vec2::new(210.0, 300.0));
    world.balloon_mut(first).unwrap().distance_traveled = 200.0;
    world.balloon_mut(second).unwrap().distance_traveled = 200.0;

    let tower = tower_at(Vec2::new(200.0, 360.0));
    assert_eq!(tower.select_target(&world.balloons).map(|b| b.id), Some(first));
}

#[test]
fn out_of_range_and_inactive_balloons_are_ignored() {
    let mut world = make_world();
    add_balloon(&mut world, 1, Vec2::new(600.0, 100.0));
    let popped = add_balloon(&mut world, 1, Vec2::new(200.0, 300.0));
    world.balloon_mut(popped).unwrap().apply_damage(1);

    let tower = tower_at(Vec2::new(200.0, 360.0));
    assert!(tower.select_target(&world.balloons).is_none());
}

#[test]
fn idle_tower_never_fires() {
    let mut world = make_world();
    place_tower(&mut world, 100.0, 100.0).unwrap();
    add_balloon(&mut world, 1, Vec2::new(700.0, 500.0));
    world.balloons[0].speed = 0.0;

    for _ in 0..300 {
        tick(&mut world);
        assert!(world.projectiles.is_empty());
        assert_eq!(world.towers[0].cooldown, 0);
    }
}

#[test]
fn tower_fires_then_waits_for_cooldown() {
    let mut world = make_world();
    place_tower(&mut world, 200.0, 100.0).unwrap();
    let id = add_balloon(&mut world, 100, Vec2::new(200.0, 150.0));
    world.balloon_mut(id).unwrap().speed = 0.0;

    tick(&mut world);
    assert_eq!(world.towers[0].cooldown, 60);
    let fired = world.tick_count;

    let mut shots = 1;
    for _ in 0..120 {
        let before = world.towers[0].cooldown;
        tick(&mut world);
        let after = world.towers[0].cooldown;
        assert!(after <= 60);
        if after > before {
            shots += 1;
        }
    }

    // One shot per 60 ticks
    assert_eq!(shots, 3);
    assert_eq!(world.tick_count - fired, 120);
}

// ── projectiles ───────────────────────────────────────────────────────────────

fn projectile_on(world: &mut World, target: EntityId, position: Vec2) -> Projectile {
    Projectile {
        id: world.next_id(EntityType::Projectile),
        position,
        velocity: Vec2::ZERO,
        damage: 1,
        radius: 3.0,
        target_id: target,
    }
}

#[test]
fn hit_pops_balloon_and_pays_bounty() {
    let mut world = make_world();
    let id = add_balloon(&mut world, 1, Vec2::new(200.0, 200.0));
    let projectile = projectile_on(&mut world, id, Vec2::new(210.0, 200.0));
    world.projectiles.push(projectile);

    projectile_agent::run(&mut world);

    assert!(world.projectiles.is_empty());
    assert_eq!(world.balloons[0].state, BalloonState::Popped);
    assert_eq!(world.game.money, 101);
    assert_eq!(world.game.balloons_popped, 1);
    assert!(
        world
            .pending_events()
            .contains(&GameEvent::BalloonPopped { id, bounty: 1 })
    );
}

#[test]
fn projectile_never_hits_a_bystander() {
    let mut world = make_world();
    let target = add_balloon(&mut world, 1, Vec2::new(600.0, 100.0));
    let bystander = add_balloon(&mut world, 1, Vec2::new(200.0, 200.0));
    let projectile = projectile_on(&mut world, target, Vec2::new(200.0, 200.0));
    world.projectiles.push(projectile);

    projectile_agent::run(&mut world);

    assert_eq!(world.projectiles.len(), 1);
    assert_eq!(world.balloon(bystander).unwrap().health, 1);
}

#[test]
fn projectile_with_removed_target_keeps_flying() {
    let mut world = make_world();
    let target = add_balloon(&mut world, 1, Vec2::new(200.0, 200.0));
    let mut projectile = projectile_on(&mut world, target, Vec2::new(200.0, 200.0));
    projectile.velocity = Vec2::new(6.0, 0.0);
    world.projectiles.push(projectile);
    world.balloons.clear();

    projectile_agent::run(&mut world);
    assert_eq!(world.projectiles.len(), 1);
    assert_eq!(world.projectiles[0].position, Vec2::new(206.0, 200.0));

    for _ in 0..200 {
        projectile_agent::run(&mut world);
    }
    assert!(world.projectiles.is_empty());
    assert_eq!(world.game.money, 100);
}

#[test]
fn projectile_misses_balloon_that_turns_a_corner() {
    let mut world = make_world();
    let target = add_balloon(&mut world, 1, Vec2::new(395.0, 300.0));
    let id = world.next_id(EntityType::Projectile);
    let munition = world.munition();
    let projectile = Projectile::aimed_at(
        id,
        Vec2::new(700.0, 300.0),
        world.balloon(target).unwrap(),
        1,
        munition,
    );
    assert_eq!(projectile.velocity, Vec2::new(-6.0, 0.0));
    world.projectiles.push(projectile);

    for _ in 0..150 {
        tick(&mut world);
    }

    // Heading down the second segment while the shot flew along the first
    let balloon = world.balloon(target).unwrap();
    assert_eq!(balloon.segment, 1);
    assert!(balloon.position.y > 400.0);
    assert_eq!(balloon.health, 1);
    assert!(world.projectiles.is_empty());
    assert_eq!(world.game.money, 100);
    assert_eq!(world.game.balloons_popped, 0);
}

#[test]
fn projectile_ignores_popped_target() {
    let world = make_world();
    let mut balloon = Balloon::spawn(EntityId(1), &spec(1), &world.path, 15.0);
    let projectile = Projectile::aimed_at(
        EntityId(2),
        balloon.position,
        &balloon,
        1,
        Munition {
            speed: 6.0,
            radius: 3.0,
        },
    );

    assert!(projectile.resolve_hit(Some(&balloon)));
    balloon.apply_damage(1);
    assert!(!projectile.resolve_hit(Some(&balloon)));
    assert!(!projectile.resolve_hit(None));
}

#[test]
fn defended_wave_pops_balloons() {
    let mut world = make_world();
    start_wave(&mut world).unwrap();
    place_tower(&mut world, 200.0, 360.0).unwrap();
    let money_after_build = world.game.money;

    let mut ticks = 0;
    while world.wave.wave_active && ticks < 5000 {
        tick(&mut world);
        ticks += 1;
    }

    let popped = world.game.balloons_popped;
    assert!(!world.wave.wave_active);
    assert!(popped > 0);
    assert_eq!(popped + world.game.balloons_leaked, 15);
    assert_eq!(world.game.money, money_after_build + popped);
    assert_eq!(world.game.lives, 20 - world.game.balloons_leaked);
}
