//! Integration tests for handle copy and move contracts.
//!
//! The forwarding surface is identical for every policy, so those checks are
//! written once against `Handle<P>`; the moved-from checks are per policy.

use ds_handle::prelude::*;

// ============================================================================
// Shared Surface
// ============================================================================

fn check_maintains_extrema<P: MovePolicy>() {
    let mut ns: Handle<P> = Handle::new();
    ns.add_value(10);
    assert_eq!((ns.get_min(), ns.get_max()), (10, 10), "{}", P::NAME);

    let mut greater = ns.clone();
    greater.add_value(15).add_value(17).add_value(13);
    assert_eq!((greater.get_min(), greater.get_max()), (10, 17), "{}", P::NAME);

    let mut lesser = ns.clone();
    lesser.add_value(5).add_value(3).add_value(7);
    assert_eq!((lesser.get_min(), lesser.get_max()), (3, 10), "{}", P::NAME);
}

fn check_list_construction<P: MovePolicy>() {
    let ns1: Handle<P> = Handle::from([11, 3, 7]);
    assert_eq!(ns1.size(), 3);
    assert_eq!(ns1.get_min(), 3);
    assert_eq!(ns1.get_max(), 11);
    assert_eq!(ns1.amplitude(), 8);

    let ns2: Handle<P> = Handle::from_series(Series::from([27, 20, 33, 23]));
    assert_eq!(ns2.size(), 4);
    assert_eq!(ns2.get_min(), 20);
    assert_eq!(ns2.get_max(), 33);
}

fn check_factory<P: MovePolicy>() {
    let ns: Handle<P> = Handle::make_random(4);
    assert_eq!(ns.size(), 4);
    let ns: Handle<P> = Handle::make_random_by(FillStrategy::Overwrite, 7);
    assert_eq!(ns.size(), 7);
}

fn check_add_operators<P: MovePolicy>() {
    let ns1: Handle<P> = Handle::make_random(2);
    let mut ns2: Handle<P> = Handle::make_random(3);
    let mut ns3 = &ns1 + &ns2;
    assert_eq!(ns1.size(), 2);
    assert_eq!(ns2.size(), 3);
    assert_eq!(ns3.size(), 3);

    ns2.add_value(10);
    assert_eq!(ns2.size(), 4);
    ns3.accumulate(&ns1).accumulate(&ns2);
    assert_eq!(ns1.size(), 2);
    assert_eq!(ns2.size(), 4);
    assert_eq!(ns3.size(), 4);

    let mut exact: Handle<P> = Handle::from([27, 20, 33, 23]);
    exact += &Handle::from([11, 3, 7]);
    assert_eq!(
        exact.as_series().map(Series::as_slice),
        Some(&[38, 23, 40, 23][..])
    );
}

fn check_amplitude_ordering<P: MovePolicy>() {
    let ns1: Handle<P> = Handle::from([6, 3, 9]);
    let ns2: Handle<P> = Handle::from([24, 21, 22]);
    assert_eq!(ns1.amplitude(), 6);
    assert_eq!(ns2.amplitude(), 3);
    assert!(ns2.lt_amplitude(&ns1));
}

fn check_copy_independence<P: MovePolicy>() {
    let original: Handle<P> = Handle::from([11, 3, 7]);

    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy.add_value(100).add_value(-100);
    assert_eq!(original.size(), 3);
    assert_eq!(original.get_min(), 3);
    assert_eq!(original.get_max(), 11);

    let mut other: Handle<P> = Handle::from([27, 20, 33, 23]);
    other.clone_from(&original);
    assert_eq!(other.size(), 3);
    assert_eq!(other.get_min(), 3);
    assert_eq!(other.get_max(), 11);
    other.add_value(0);
    assert_eq!(original.size(), 3);
}

fn check_move_construct_target<P: MovePolicy>() {
    let mut ns: Handle<P> = Handle::from([11, 3, 7]);
    let moved = Handle::take_from(&mut ns);
    assert_eq!(moved.size(), 3);
    assert_eq!(moved.get_min(), 3);
    assert_eq!(moved.get_max(), 11);
}

fn check_move_assign_target<P: MovePolicy>() {
    let mut ns: Handle<P> = Handle::from([11, 3, 7]);
    let mut other: Handle<P> = Handle::from([27, 20, 33, 23]);
    other.assign_from(&mut ns);
    assert_eq!(other.size(), 3);
    assert_eq!(other.get_min(), 3);
    assert_eq!(other.get_max(), 11);
}

fn check_repeated_copies_and_moves<P: MovePolicy>() {
    let mut a: Handle<P> = Handle::from([1, 2, 3]);
    let mut b: Handle<P> = Handle::new();
    for round in 0..5 {
        b.assign_from(&mut a);
        a.clone_from(&b);
        a = Handle::take_from(&mut b);
        b.assign_from(&mut a);
        a.add_value(round);
        let _ = (a.size(), a.get_min(), a.get_max(), a.amplitude());
        let _ = (b.size(), b.get_min(), b.get_max(), b.amplitude());
        let _ = &a + &b;
    }
}

fn check_shared_surface<P: MovePolicy>() {
    check_maintains_extrema::<P>();
    check_list_construction::<P>();
    check_factory::<P>();
    check_add_operators::<P>();
    check_amplitude_ordering::<P>();
    check_copy_independence::<P>();
    check_move_construct_target::<P>();
    check_move_assign_target::<P>();
    check_repeated_copies_and_moves::<P>();
}

#[test]
fn swap_shared_surface() {
    check_shared_surface::<Swap>();
}

#[test]
fn transfer_shared_surface() {
    check_shared_surface::<Transfer>();
}

#[test]
fn nullable_shared_surface() {
    check_shared_surface::<Nullable>();
}

// ============================================================================
// Moved-From State
// ============================================================================

#[test]
fn swap_move_assign_leaves_previous_target_content() {
    let mut ns = SwapHandle::from([11, 3, 7]);
    let mut other = SwapHandle::from([27, 20, 33, 23]);
    other.assign_from(&mut ns);

    assert!(ns.owns_series());
    assert_eq!(ns.size(), 4);
    assert_eq!(ns.get_min(), 20);
    assert_eq!(ns.get_max(), 33);
}

#[test]
fn swap_move_construct_leaves_empty_series() {
    let mut ns = SwapHandle::from([11, 3, 7]);
    let _moved = SwapHandle::take_from(&mut ns);

    assert!(ns.owns_series());
    assert_eq!(ns.size(), 0);
    ns.add_value(1);
    assert_eq!(ns.size(), 1);
}

#[test]
fn swap_never_owns_nothing() {
    let mut a: SwapHandle = SwapHandle::new();
    let mut b = SwapHandle::from([1]);
    for _ in 0..4 {
        a.assign_from(&mut b);
        assert!(a.owns_series() && b.owns_series());
        b = SwapHandle::take_from(&mut a);
        assert!(a.owns_series() && b.owns_series());
    }
}

fn check_null_after_move<P: MovePolicy>(mut ns: Handle<P>) {
    assert!(!ns.owns_series(), "{}", P::NAME);
    assert_eq!(ns.size(), 0);
    assert_eq!(ns.get_min(), i32::MAX);
    assert_eq!(ns.get_max(), i32::MIN);

    let copy = ns.clone();
    assert!(!copy.owns_series());

    let mut sink: Handle<P> = Handle::from([1, 2]);
    sink.accumulate(&ns);
    assert_eq!(sink.size(), 2);

    ns.add_value(5);
    assert_eq!(ns.size(), 1);
    assert_eq!(ns.get_min(), 5);
    assert_eq!(ns.get_max(), 5);
}

fn moved_from_by_assign<P: MovePolicy>() -> Handle<P> {
    let mut ns: Handle<P> = Handle::from([11, 3, 7]);
    let mut other: Handle<P> = Handle::from([27, 20, 33, 23]);
    other.assign_from(&mut ns);
    ns
}

fn moved_from_by_construct<P: MovePolicy>() -> Handle<P> {
    let mut ns: Handle<P> = Handle::from([11, 3, 7]);
    let _moved = Handle::take_from(&mut ns);
    ns
}

#[test]
fn transfer_moved_from_owns_nothing() {
    check_null_after_move(moved_from_by_assign::<Transfer>());
    check_null_after_move(moved_from_by_construct::<Transfer>());
}

#[test]
fn nullable_moved_from_owns_nothing() {
    check_null_after_move(moved_from_by_assign::<Nullable>());
    check_null_after_move(moved_from_by_construct::<Nullable>());
}

#[test]
fn transfer_default_and_moved_from_differ() {
    let fresh: TransferHandle = TransferHandle::new();
    let moved = moved_from_by_construct::<Transfer>();
    assert!(fresh.owns_series());
    assert!(!moved.owns_series());
    assert_eq!(fresh.size(), moved.size());
    assert_ne!(fresh, moved);
}

#[test]
fn nullable_default_and_moved_from_coincide() {
    let fresh: NullableHandle = NullableHandle::new();
    let moved = moved_from_by_construct::<Nullable>();
    assert_eq!(fresh, moved);
}

#[test]
fn nullable_default_then_add() {
    let mut ns: NullableHandle = NullableHandle::new();
    assert_eq!(ns.size(), 0);
    ns.add_value(10);
    assert_eq!(ns.size(), 1);
    assert_eq!(ns.get_min(), 10);
    assert_eq!(ns.get_max(), 10);
}

#[test]
fn reset_after_move_is_deterministic() {
    let mut ns = NullableHandle::from([11, 3, 7]);
    let mut other = NullableHandle::from([27, 20, 33, 23]);
    other.assign_from(&mut ns);
    assert_eq!(ns.size(), 0);
    ns.reset();
    assert_eq!(ns.size(), 0);

    let mut ns = TransferHandle::from([1]);
    let _moved = TransferHandle::take_from(&mut ns);
    ns.reset();
    assert!(ns.owns_series());
}
