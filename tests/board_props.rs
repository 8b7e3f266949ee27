use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{
    is_valid_placement, ship_coordinates, AttackResult, Coord, EngineError, Gameboard,
    Orientation, Ship, BOARD_SIZE, STANDARD_FLEET,
};

fn orientation(horizontal: bool) -> Orientation {
    if horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

fn random_board(seed: u64) -> Gameboard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Gameboard::new();
    board.auto_place_fleet(&STANDARD_FLEET, &mut rng).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * 3);
    for _ in 0..shots {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        let _ = board.receive_attack(x, y);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_exactly_its_coordinates(
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
        length in 1usize..=5,
        horizontal in any::<bool>(),
    ) {
        let orient = orientation(horizontal);
        let mut board = Gameboard::new();
        let valid = is_valid_placement(&board.occupied(), length, Coord::new(x, y), orient);
        match board.place_ship(Ship::with_length(length), x, y, orient) {
            Ok(id) => {
                prop_assert!(valid);
                let expected = ship_coordinates(length, Coord::new(x, y), orient);
                let marked: Vec<Coord> = board.occupied().iter().collect();
                prop_assert_eq!(marked.len(), length);
                for cell in &expected {
                    prop_assert_eq!(board.ship_id_at(cell.x, cell.y), Some(id));
                }
                for cell in marked {
                    prop_assert!(expected.contains(&cell));
                }
            }
            Err(e) => {
                prop_assert!(!valid);
                prop_assert!(matches!(e, EngineError::InvalidPlacement(_)));
                prop_assert_eq!(board, Gameboard::new());
            }
        }
    }

    #[test]
    fn overlapping_placement_never_mutates(seed in any::<u64>(), pick in 0usize..17, horizontal in any::<bool>()) {
        let mut board = random_board(seed);
        let before = board.clone();
        let cells: Vec<Coord> = board.occupied().iter().collect();
        let start = cells[pick % cells.len()];
        let result = board.place_ship(Ship::with_length(2), start.x, start.y, orientation(horizontal));
        prop_assert!(matches!(result, Err(EngineError::InvalidPlacement(_))));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn second_attack_on_a_cell_fails(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Gameboard::new();
        board.auto_place_fleet(&STANDARD_FLEET, &mut rng).unwrap();

        let occupied = board.occupied().contains(Coord::new(x, y));
        let first = board.receive_attack(x, y).unwrap();
        prop_assert_eq!(first == AttackResult::Hit, occupied);

        let after_first = board.clone();
        prop_assert_eq!(board.receive_attack(x, y), Err(EngineError::DuplicateAttack(Coord::new(x, y))));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn ship_sinks_after_length_distinct_hits(length in 1usize..=BOARD_SIZE, shots in 0usize..=BOARD_SIZE) {
        let mut board = Gameboard::new();
        board.place_ship(Ship::with_length(length), 0, 4, Orientation::Horizontal).unwrap();
        let shots = shots.min(length);
        for x in 0..shots {
            prop_assert_eq!(board.receive_attack(x, 4).unwrap(), AttackResult::Hit);
        }
        let ship = board.ship(0).unwrap();
        prop_assert_eq!(ship.hits(), shots);
        prop_assert_eq!(ship.is_sunk(), shots == length);
        prop_assert_eq!(board.all_ships_sunk(), shots == length);
    }

    #[test]
    fn attack_bookkeeping_is_consistent(seed in any::<u64>()) {
        let board = random_board(seed);
        let hits = board.hits();
        let misses: Vec<Coord> = board.missed_shots().to_vec();
        prop_assert_eq!(hits.len() + misses.len(), board.all_attacks().len());
        for miss in misses {
            prop_assert!(board.all_attacks().contains(miss));
            prop_assert!(!board.occupied().contains(miss));
        }
        for hit in hits.iter() {
            prop_assert!(board.occupied().contains(hit));
        }
        let total_hits: usize = board.ships().iter().map(|s| s.hits()).sum();
        prop_assert_eq!(total_hits, hits.len());
    }
}
