use armada::{Coordinate, Fleet, Game, BOARD_SIZE, STANDARD_FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_fleet(seed: u64) -> Fleet {
    let mut rng = SmallRng::seed_from_u64(seed);
    Fleet::random(&mut rng, &STANDARD_FLEET).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ship_at_matches_occupies(seed in any::<u64>(), row in -2..12i32, col in -2..12i32) {
        let fleet = random_fleet(seed);
        let coord = Coordinate::new(row, col);
        let owner = fleet.ships().iter().find(|s| s.occupies(coord));
        prop_assert_eq!(fleet.ship_at(coord), owner);
    }

    #[test]
    fn repeated_fire_is_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut game = Game::new(random_fleet(seed));
        let coord = Coordinate::new(row, col);
        game.fire(coord);
        let before = game.stats();
        prop_assert!(game.fire(coord).is_none());
        let after = game.stats();
        prop_assert_eq!(after.repeated_shots, before.repeated_shots + 1);
        prop_assert_eq!(after.hits, before.hits);
        prop_assert_eq!(after.sunk_ships, before.sunk_ships);
        prop_assert_eq!(after.remaining_ships, before.remaining_ships);
    }

    #[test]
    fn counters_never_decrease(
        seed in any::<u64>(),
        shots in prop::collection::vec((-1..12i32, -1..12i32), 0..150),
    ) {
        let mut game = Game::new(random_fleet(seed));
        let mut prev = game.stats();
        for (r, c) in shots {
            game.fire(Coordinate::new(r, c));
            let now = game.stats();
            prop_assert!(now.hits >= prev.hits);
            prop_assert!(now.invalid_shots >= prev.invalid_shots);
            prop_assert!(now.repeated_shots >= prev.repeated_shots);
            prop_assert!(now.sunk_ships >= prev.sunk_ships);
            prop_assert_eq!(now.sunk_ships + now.remaining_ships, STANDARD_FLEET.len());
            prev = now;
        }
        let mut seen = game.shots().to_vec();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), game.shots().len());
    }

    #[test]
    fn firing_everywhere_sinks_everything(seed in any::<u64>()) {
        let mut game = Game::new(random_fleet(seed));
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                game.fire(Coordinate::new(r, c));
            }
        }
        prop_assert_eq!(game.remaining_ships(), 0);
        prop_assert_eq!(game.sunk_ships(), STANDARD_FLEET.len());
        prop_assert_eq!(game.hits(), armada::STANDARD_FLEET_CELLS);
    }
}
