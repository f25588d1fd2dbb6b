use armada::{Bearing, Coordinate, Fleet, Game, GameStats, Ship, ShipId, ShipKind, ShotOutcome};

fn ship(kind: ShipKind, bearing: Bearing, row: i32, col: i32) -> Ship {
    Ship::new(kind, bearing, Coordinate::new(row, col)).unwrap()
}

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_barge_sunk_by_one_shot() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 0, 0)));
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 5, 5)));
    let mut game = Game::new(fleet);
    assert_eq!(game.remaining_ships(), 2);

    let sunk = game.fire(c(0, 0)).map(|s| s.category());
    assert_eq!(sunk, Some("Barca"));
    assert_eq!(game.hits(), 1);
    assert_eq!(game.sunk_ships(), 1);
    assert_eq!(game.remaining_ships(), 1);
}

#[test]
fn test_caravel_floats_until_second_hit() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Caravel, Bearing::East, 2, 2)));
    let mut game = Game::new(&mut fleet);

    assert!(game.fire(c(2, 2)).is_none());
    assert!(game.fleet().ships()[0].still_floating());
    assert!(game.fire(c(2, 3)).is_some());
    assert!(!game.fleet().ships()[0].still_floating());
    assert_eq!(game.remaining_ships(), 0);
    drop(game);
    // the borrowed fleet keeps the damage
    assert!(fleet.floating_ships().is_empty());
}

#[test]
fn test_outcomes() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Caravel, Bearing::North, 4, 4)));
    let mut game = Game::new(fleet);

    assert_eq!(game.resolve(c(0, 0)), ShotOutcome::Miss);
    assert_eq!(game.resolve(c(4, 4)), ShotOutcome::Hit(ShipId(0)));
    assert_eq!(game.resolve(c(4, 4)), ShotOutcome::Repeated);
    assert_eq!(game.resolve(c(-1, 3)), ShotOutcome::Invalid);
    assert_eq!(game.resolve(c(5, 4)), ShotOutcome::Sunk(ShipId(0)));
    assert_eq!(game.shots(), &[c(0, 0), c(4, 4), c(5, 4)]);
}

#[test]
fn test_shot_bound_is_inclusive() {
    let mut game = Game::new(Fleet::new());
    assert!(game.fire(c(10, 10)).is_none());
    assert_eq!(game.invalid_shots(), 0);
    assert_eq!(game.shots(), &[c(10, 10)]);

    assert!(game.fire(c(11, 0)).is_none());
    assert!(game.fire(c(0, 11)).is_none());
    assert!(game.fire(c(0, -1)).is_none());
    assert_eq!(game.invalid_shots(), 3);
    assert_eq!(game.shots().len(), 1);
}

#[test]
fn test_repeated_shot_changes_nothing_else() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 3, 3)));
    let mut game = Game::new(fleet);
    assert!(game.fire(c(3, 3)).is_some());
    let before = game.stats();
    assert!(game.fire(c(3, 3)).is_none());
    let after = game.stats();
    assert_eq!(after.repeated_shots, before.repeated_shots + 1);
    assert_eq!(after.hits, before.hits);
    assert_eq!(after.sunk_ships, before.sunk_ships);
    assert_eq!(game.shots().len(), 1);
}

#[test]
fn test_stats_snapshot() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Carrack, Bearing::South, 0, 0)));
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 9, 9)));
    let mut game = Game::new(fleet);
    for (r, col) in [(0, 0), (1, 0), (2, 0), (9, 9), (9, 9), (12, 1), (5, 5)] {
        game.fire(c(r, col));
    }
    assert_eq!(
        game.stats(),
        GameStats {
            hits: 4,
            invalid_shots: 1,
            repeated_shots: 1,
            sunk_ships: 2,
            remaining_ships: 0,
        }
    );
}

#[test]
fn test_render_boards() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Caravel, Bearing::East, 0, 0)));
    let mut game = Game::new(fleet);
    game.fire(c(9, 9));
    game.fire(c(10, 10));

    let shots = game.render_shots();
    let rows: Vec<&str> = shots.lines().collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[9], ".........X");
    assert_eq!(shots.matches('X').count(), 1);

    let map = game.render_fleet();
    assert_eq!(map.lines().next(), Some("##........"));
    assert_eq!(map.matches('#').count(), 2);
}

#[test]
fn test_into_fleet_returns_damage() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Frigate, Bearing::East, 1, 1)));
    let mut game = Game::new(fleet);
    game.fire(c(1, 2));
    let fleet = game.into_fleet();
    let hit: Vec<_> = fleet.ships()[0]
        .positions()
        .iter()
        .filter(|p| p.is_hit())
        .map(|p| p.coord())
        .collect();
    assert_eq!(hit, vec![c(1, 2)]);
}
