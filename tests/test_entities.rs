use side_shooter::config::GameConfig;
use side_shooter::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(EnemyKind::Angler1, EnemyKind::Angler1);
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::Over);
    assert_ne!(Outcome::Win, Outcome::Lose);

    let p = Projectile::new(1.0, 2.0);
    assert_eq!(p.clone(), p);
}

#[test]
fn rect_clamps_negative_size() {
    let r = Rect::new(5.0, 5.0, -3.0, -1.0);
    assert_eq!(r.width, 0.0);
    assert_eq!(r.height, 0.0);
}

#[test]
fn degenerate_rect_overlaps_only_when_strictly_inside() {
    let point = Rect::new(5.0, 5.0, 0.0, 0.0);
    let big = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(point.intersects(&big));
    assert!(!point.intersects(&point));
}

#[test]
fn bounds_follow_entity_geometry() {
    let player = Player::new();
    assert_eq!(player.bounds(), Rect::new(20.0, 100.0, 120.0, 190.0));

    let projectile = Projectile::new(100.0, 130.0);
    assert_eq!(projectile.bounds(), Rect::new(100.0, 130.0, 10.0, 3.0));
}

#[test]
fn game_state_takes_tunables_from_config() {
    let config = GameConfig {
        width: 800.0,
        height: 600.0,
        starting_ammo: 5,
        winning_score: 3,
        ..GameConfig::default()
    };
    let s = GameState::new(&config);
    assert_eq!(s.width, 800.0);
    assert_eq!(s.height, 600.0);
    assert_eq!(s.ammo, 5);
    assert_eq!(s.winning_score, 3);
    assert_eq!(s.time_limit, 15_000.0);
    assert!(!s.is_over());
}

#[test]
fn outcome_compares_score_strictly() {
    let mut s = GameState::new(&GameConfig::default());
    s.score = 10;
    assert_eq!(s.outcome(), Outcome::Lose);
    s.score = 11;
    assert_eq!(s.outcome(), Outcome::Win);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::new(&GameConfig::default());
    let mut cloned = original.clone();

    cloned.player.y = 99.0;
    cloned.score = 999;
    cloned.player.projectiles.push(Projectile::new(0.0, 0.0));

    assert_eq!(original.player.y, 100.0);
    assert_eq!(original.score, 0);
    assert!(original.player.projectiles.is_empty());
}
