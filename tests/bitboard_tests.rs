use armada::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_insert_and_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(!bb.contains(Coordinate::new(1, 1)));
    assert_eq!(bb.insert(Coordinate::new(1, 1)), Ok(true));
    assert_eq!(bb.insert(Coordinate::new(1, 1)), Ok(false));
    assert!(bb.contains(Coordinate::new(1, 1)));
    assert!(!bb.contains(Coordinate::new(1, 2)));
}

#[test]
fn test_off_grid() {
    let mut bb = BitBoard::<u128, 11>::new();
    assert_eq!(
        bb.insert(Coordinate::new(11, 0)),
        Err(BitBoardError::OutOfBounds { row: 11, col: 0 })
    );
    assert!(bb.insert(Coordinate::new(-1, 0)).is_err());
    assert!(!bb.contains(Coordinate::new(-1, 0)));
    assert!(!bb.contains(Coordinate::new(i32::MAX, i32::MIN)));
    assert_eq!(bb.insert(Coordinate::new(10, 10)), Ok(true));
}

#[test]
fn test_from_coords_drops_off_grid() {
    let bb = BitBoard::<u16, 4>::from_coords([
        Coordinate::new(3, 3),
        Coordinate::new(0, 1),
        Coordinate::new(9, 9),
    ]);
    assert!(bb.contains(Coordinate::new(3, 3)));
    assert!(bb.contains(Coordinate::new(0, 1)));
    assert!(!bb.contains(Coordinate::new(9, 9)));
    assert_eq!(bb, BitBoard::<u16, 4>::from_coords([Coordinate::new(0, 1), Coordinate::new(3, 3)]));
}
