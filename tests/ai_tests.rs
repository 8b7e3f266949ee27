use salvo::{AttackResult, Coord, HuntDestroy, Mode, Orientation, BB};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

fn targets(ai: &HuntDestroy) -> Vec<Coord> {
    ai.potential_targets().collect()
}

/// Fire at `target` and report the outcome to the AI.
fn shoot(ai: &mut HuntDestroy, previous: &mut BB, target: Coord, result: AttackResult, sunk: bool) {
    previous.insert(target);
    ai.record_result(target, result, sunk, previous);
}

#[test]
fn test_starts_hunting() {
    let ai = HuntDestroy::seeded(1);
    assert_eq!(ai.mode(), Mode::Hunt);
    assert_eq!(ai.last_hit(), None);
    assert_eq!(ai.ship_orientation(), None);
    assert!(targets(&ai).is_empty());
}

#[test]
fn test_hunt_uses_checkerboard() {
    let mut ai = HuntDestroy::seeded(99);
    let mut previous = BB::new();
    for _ in 0..20 {
        let target = ai.next_target(&previous).unwrap();
        assert!(target.is_odd_parity(), "{} is not on the hunting colour", target);
        assert!(!previous.contains(target));
        shoot(&mut ai, &mut previous, target, AttackResult::Miss, false);
    }
    assert_eq!(ai.mode(), Mode::Hunt);
}

#[test]
fn test_first_hit_queues_all_neighbours() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    shoot(&mut ai, &mut previous, c(5, 5), AttackResult::Hit, false);

    assert_eq!(ai.mode(), Mode::Destroy);
    assert_eq!(ai.last_hit(), Some(c(5, 5)));
    assert_eq!(ai.ship_orientation(), None);
    assert_eq!(targets(&ai), vec![c(4, 5), c(6, 5), c(5, 4), c(5, 6)]);
}

#[test]
fn test_neighbours_are_filtered() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    previous.insert(c(0, 1));
    shoot(&mut ai, &mut previous, c(0, 0), AttackResult::Hit, false);
    assert_eq!(targets(&ai), vec![c(1, 0)]);
}

#[test]
fn test_second_hit_fixes_orientation() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    shoot(&mut ai, &mut previous, c(5, 5), AttackResult::Hit, false);
    shoot(&mut ai, &mut previous, c(6, 5), AttackResult::Hit, false);

    assert_eq!(ai.ship_orientation(), Some(Orientation::Horizontal));
    assert_eq!(ai.last_hit(), Some(c(6, 5)));
    let queued = targets(&ai);
    assert_eq!(queued, vec![c(4, 5), c(7, 5)]);
    assert!(!queued.contains(&c(5, 4)));
    assert!(!queued.contains(&c(5, 6)));

    assert_eq!(ai.next_target(&previous), Some(c(4, 5)));
}

#[test]
fn test_vertical_orientation() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    shoot(&mut ai, &mut previous, c(3, 3), AttackResult::Hit, false);
    // left, right probes miss
    shoot(&mut ai, &mut previous, c(2, 3), AttackResult::Miss, false);
    shoot(&mut ai, &mut previous, c(4, 3), AttackResult::Miss, false);
    assert_eq!(ai.mode(), Mode::Destroy);
    assert_eq!(ai.next_target(&previous), Some(c(3, 2)));
    shoot(&mut ai, &mut previous, c(3, 2), AttackResult::Hit, false);

    assert_eq!(ai.ship_orientation(), Some(Orientation::Vertical));
    assert_eq!(targets(&ai), vec![c(3, 1), c(3, 4)]);
}

#[test]
fn test_sinking_returns_to_hunt() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    shoot(&mut ai, &mut previous, c(5, 5), AttackResult::Hit, false);
    shoot(&mut ai, &mut previous, c(6, 5), AttackResult::Hit, true);

    assert_eq!(ai.mode(), Mode::Hunt);
    assert_eq!(ai.last_hit(), None);
    assert_eq!(ai.ship_orientation(), None);
    assert!(targets(&ai).is_empty());
}

#[test]
fn test_miss_keeps_destroying() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    shoot(&mut ai, &mut previous, c(5, 5), AttackResult::Hit, false);
    let first = ai.next_target(&previous).unwrap();
    assert_eq!(first, c(4, 5));
    shoot(&mut ai, &mut previous, first, AttackResult::Miss, false);

    assert_eq!(ai.mode(), Mode::Destroy);
    assert_eq!(ai.last_hit(), Some(c(5, 5)));
    assert_eq!(ai.next_target(&previous), Some(c(6, 5)));
}

#[test]
fn test_boxed_in_hit_falls_back_to_hunt() {
    let mut ai = HuntDestroy::seeded(4);
    let mut previous = BB::new();
    previous.insert(c(1, 0));
    previous.insert(c(0, 1));
    shoot(&mut ai, &mut previous, c(0, 0), AttackResult::Hit, false);
    assert_eq!(ai.mode(), Mode::Destroy);
    assert!(targets(&ai).is_empty());

    let target = ai.next_target(&previous).unwrap();
    assert!(!previous.contains(target));
    assert_eq!(ai.mode(), Mode::Hunt);
    assert_eq!(ai.last_hit(), None);
}

#[test]
fn test_blocked_axis_widens_search() {
    let mut ai = HuntDestroy::seeded(1);
    let mut previous = BB::new();
    previous.insert(c(4, 5));
    previous.insert(c(7, 5));
    shoot(&mut ai, &mut previous, c(5, 5), AttackResult::Hit, false);
    shoot(&mut ai, &mut previous, c(6, 5), AttackResult::Hit, false);
    assert_eq!(ai.ship_orientation(), Some(Orientation::Horizontal));
    assert!(targets(&ai).is_empty());

    assert_eq!(ai.next_target(&previous), Some(c(6, 4)));
    assert_eq!(ai.mode(), Mode::Destroy);
    assert_eq!(ai.ship_orientation(), None);
}

#[test]
fn test_full_board_has_no_target() {
    let mut ai = HuntDestroy::seeded(1);
    let previous = !BB::new();
    assert!(previous.is_full());
    assert_eq!(ai.next_target(&previous), None);
}

#[test]
fn test_hunt_falls_back_to_first_open_cell() {
    let mut ai = HuntDestroy::seeded(8);
    // every odd cell taken, leaving only the other colour
    let previous: BB = (0..10)
        .flat_map(|y| (0..10).map(move |x| c(x, y)))
        .filter(|cell| cell.is_odd_parity())
        .collect();
    assert_eq!(ai.next_target(&previous), Some(c(0, 0)));
}
