use salvo::{Coord, BB};

#[test]
fn test_insert_contains_remove() {
    let mut bb = BB::new();
    assert!(bb.is_empty());

    assert!(bb.insert(Coord::new(3, 7)));
    assert!(!bb.insert(Coord::new(3, 7)));
    assert!(bb.contains(Coord::new(3, 7)));
    assert!(!bb.contains(Coord::new(7, 3)));
    assert_eq!(bb.len(), 1);

    assert!(bb.remove(Coord::new(3, 7)));
    assert!(!bb.remove(Coord::new(3, 7)));
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds_is_never_a_member() {
    let mut bb = BB::new();
    assert!(!bb.insert(Coord::new(10, 0)));
    assert!(!bb.insert(Coord::new(0, 10)));
    assert!(!bb.contains(Coord::new(10, 0)));
    assert!(bb.is_empty());
    assert_eq!(BB::index(Coord::new(10, 0)), None);
}

#[test]
fn test_packing_is_row_major_and_collision_free() {
    let mut keys = Vec::new();
    for y in 0..10 {
        for x in 0..10 {
            keys.push(BB::index(Coord::new(x, y)).unwrap());
        }
    }
    assert_eq!(keys, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_iter_and_first_vacant() {
    let bb: BB = [Coord::new(1, 0), Coord::new(0, 0), Coord::new(9, 9)]
        .into_iter()
        .collect();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(9, 9)]);
    assert_eq!(bb.first_vacant(), Some(Coord::new(2, 0)));
}

#[test]
fn test_set_operations() {
    let a: BB = [Coord::new(0, 0), Coord::new(1, 1)].into_iter().collect();
    let b: BB = [Coord::new(1, 1), Coord::new(2, 2)].into_iter().collect();
    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    assert_eq!((a | b).len(), 3);

    let full = !BB::new();
    assert!(full.is_full());
    assert_eq!(full.len(), 100);
    assert_eq!(full.first_vacant(), None);
    assert_eq!((!a).len(), 98);
}
