use super::*;
use pretty_assertions::assert_eq;

#[test]
fn bounded_contains_both_ends() {
    let arity = Arity::bounded(2, 4);
    assert!(!arity.contains(1));
    assert!(arity.contains(2));
    assert!(arity.contains(3));
    assert!(arity.contains(4));
    assert!(!arity.contains(5));
}

#[test]
fn unbounded_contains_everything_above_min() {
    let arity = Arity::at_least(1);
    assert!(!arity.contains(0));
    assert!(arity.contains(1));
    assert!(arity.contains(1_000));
    assert!(arity.is_unbounded());
    assert_eq!(arity.max_bounded(), None);
}

#[test]
fn exact_is_a_single_point() {
    let arity = Arity::exact(3);
    assert_eq!(arity.min, 3);
    assert_eq!(arity.max_bounded(), Some(3));
    assert!(arity.contains(3));
    assert!(!arity.contains(2));
}

#[test]
fn display_forms() {
    assert_eq!(Arity::exact(0).to_string(), "0");
    assert_eq!(Arity::bounded(2, 4).to_string(), "2..=4");
    assert_eq!(Arity::at_least(1).to_string(), "1..");
}
