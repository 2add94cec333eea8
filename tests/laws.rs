use wrapped::{wrap, Optional};

fn samples() -> [Optional<i32>; 3] {
    [wrap(Some(1)), wrap(Some(-7)), wrap(None)]
}

fn increment(n: i32) -> i32 {
    n + 1
}

fn double(n: i32) -> i32 {
    n * 2
}

fn halve(n: i32) -> Optional<i32> {
    wrap((n % 2 == 0).then_some(n / 2))
}

fn positive(n: i32) -> Optional<i32> {
    wrap((n > 0).then_some(n))
}

#[test]
fn map_preserves_identity() {
    for x in samples() {
        assert_eq!(x.map(|v| v), x);
    }
}

#[test]
fn map_preserves_composition() {
    for x in samples() {
        assert_eq!(x.map(|v| increment(double(v))), x.map(double).map(increment));
    }
}

#[test]
fn wrap_is_a_left_identity_for_flat_map() {
    for v in [-4, 0, 3, 10] {
        assert_eq!(wrap(Some(v)).flat_map(halve), halve(v));
    }
}

#[test]
fn wrap_is_a_right_identity_for_flat_map() {
    for x in samples() {
        assert_eq!(x.flat_map(|v| wrap(Some(v))), x);
    }
}

#[test]
fn flat_map_is_associative() {
    for x in [wrap(Some(8)), wrap(Some(-8)), wrap(Some(3)), wrap(None)] {
        assert_eq!(
            x.flat_map(halve).flat_map(positive),
            x.flat_map(|v| halve(v).flat_map(positive))
        );
    }
}

#[test]
fn wrapped_values_round_trip() {
    for v in [i32::MIN, 0, 1, i32::MAX] {
        let just = wrap(Some(v));
        assert!(just.is_present());
        assert_eq!(just.unwrap(), Ok(v));
    }
}
