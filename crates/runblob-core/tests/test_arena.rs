use runblob_core::arena::FixedArena;
use runblob_core::error::RunblobError;

#[test]
fn test_push_within_capacity_keeps_buffer() {
    let mut arena = FixedArena::<u32>::with_capacity(1000);
    arena.push(0).unwrap();
    let base = arena.as_slice().as_ptr();

    for i in 1..1000 {
        arena.push(i).unwrap();
    }
    assert_eq!(arena.as_slice().as_ptr(), base);
    assert!(arena.is_full());
}

#[test]
fn test_push_past_capacity_is_refused() {
    let mut arena = FixedArena::<u32>::with_capacity(2);
    arena.push(1).unwrap();
    arena.push(2).unwrap();
    let err = arena.push(3).unwrap_err();

    assert!(matches!(err, RunblobError::CapacityExhausted { capacity: 2 }));
    assert_eq!(arena.used(), 2);
}

#[test]
fn test_clear_keeps_buffer() {
    let mut arena = FixedArena::<u32>::with_capacity(16);
    arena.push(7).unwrap();
    let base = arena.as_slice().as_ptr();

    arena.clear();
    assert!(arena.is_empty());
    arena.push(8).unwrap();
    assert_eq!(arena.as_slice().as_ptr(), base);
    assert_eq!(arena.capacity(), 16);
}

#[test]
fn test_clone_reserves_full_capacity() {
    let original = FixedArena::<u32>::with_capacity(1000);
    let mut copy = original.clone();
    assert_eq!(copy.capacity(), 1000);
    assert!(copy.is_empty());

    copy.push(0).unwrap();
    let base = copy.as_slice().as_ptr();
    for i in 1..1000 {
        copy.push(i).unwrap();
    }
    assert_eq!(copy.as_slice().as_ptr(), base);
}

#[test]
fn test_clone_copies_entries() {
    let mut original = FixedArena::<u32>::with_capacity(8);
    for i in 0..3 {
        original.push(i * 10).unwrap();
    }
    let mut copy = original.clone();

    assert_eq!(copy.as_slice(), &[0, 10, 20]);
    let base = copy.as_slice().as_ptr();
    for i in 3..8 {
        copy.push(i).unwrap();
    }
    assert_eq!(copy.as_slice().as_ptr(), base);
    assert_eq!(original.used(), 3);
}
