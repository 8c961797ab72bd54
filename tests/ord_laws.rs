//! Property-based tests for first-class order laws.
//!
//! Tests the following laws using proptest:
//!
//! ## Order Laws
//! - Reflexivity: compare(a, a) == Equal
//! - Antisymmetry: compare(a, b) == compare(b, a).reverse()
//! - Transitivity: if a <= b and b <= c then a <= c
//!
//! ## Derived Combinators
//! - Dual: reversed.compare(a, b) == compare(b, a)
//! - Double dual: reversed.reversed == original
//! - Clamp: the clamped value always lies within the range
//! - Min/Max: min(a, b) <= max(a, b)
//!
//! ## Semigroup Laws
//! - Associativity of lexicographic combination
//! - Associativity of the Ordering instance

#![cfg(feature = "order")]

use kleisli::order::Order;
use kleisli::typeclass::Semigroup;
use proptest::prelude::*;
use std::cmp::Ordering;

proptest! {
    #[test]
    fn prop_reflexivity(a in any::<i32>()) {
        let numeric: Order<i32> = Order::natural();
        let copy = a;
        // Distinct references, so the check exercises the comparison itself.
        prop_assert_eq!(numeric.compare(&a, &copy), Ordering::Equal);
    }

    #[test]
    fn prop_antisymmetry(a in any::<i32>(), b in any::<i32>()) {
        let numeric: Order<i32> = Order::natural();
        prop_assert_eq!(numeric.compare(&a, &b), numeric.compare(&b, &a).reverse());
    }

    #[test]
    fn prop_transitivity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let numeric: Order<i32> = Order::natural();
        if numeric.less_than_or_equal(&a, &b) && numeric.less_than_or_equal(&b, &c) {
            prop_assert!(numeric.less_than_or_equal(&a, &c));
        }
    }

    #[test]
    fn prop_dual(a in any::<i32>(), b in any::<i32>()) {
        let numeric: Order<i32> = Order::natural();
        let reversed = numeric.clone().reversed();
        prop_assert_eq!(reversed.compare(&a, &b), numeric.compare(&b, &a));
    }

    #[test]
    fn prop_double_dual_restores_the_order(a in any::<i32>(), b in any::<i32>()) {
        let numeric: Order<i32> = Order::natural();
        let twice = numeric.clone().reversed().reversed();
        prop_assert_eq!(twice.compare(&a, &b), numeric.compare(&a, &b));
    }

    #[test]
    fn prop_clamp_stays_in_range(
        value in any::<i32>(),
        bounds in any::<(i32, i32)>().prop_map(|(x, y)| (x.min(y), x.max(y))),
    ) {
        let numeric: Order<i32> = Order::natural();
        let (low, high) = bounds;
        let clamped = numeric.clamp(value, low, high);
        prop_assert!(numeric.between(&clamped, &low, &high));
    }

    #[test]
    fn prop_min_not_greater_than_max(a in any::<i32>(), b in any::<i32>()) {
        let numeric: Order<i32> = Order::natural();
        let minimum = numeric.min(a, b);
        let maximum = numeric.max(a, b);
        prop_assert!(numeric.less_than_or_equal(&minimum, &maximum));
    }

    #[test]
    fn prop_contramap_consistency(a in any::<(i32, i32)>(), b in any::<(i32, i32)>()) {
        let by_first: Order<(i32, i32)> = Order::<i32>::natural().contramap(|pair: &(i32, i32)| pair.0);
        let numeric: Order<i32> = Order::natural();
        prop_assert_eq!(by_first.compare(&a, &b), numeric.compare(&a.0, &b.0));
    }

    #[test]
    fn prop_combine_associativity(a in any::<(i32, i32, i32)>(), b in any::<(i32, i32, i32)>()) {
        let first: Order<(i32, i32, i32)> = Order::<i32>::natural().contramap(|t: &(i32, i32, i32)| t.0);
        let second: Order<(i32, i32, i32)> = Order::<i32>::natural().contramap(|t: &(i32, i32, i32)| t.1);
        let third: Order<(i32, i32, i32)> = Order::<i32>::natural().contramap(|t: &(i32, i32, i32)| t.2);

        let left = first.clone().combine(second.clone()).combine(third.clone());
        let right = first.combine(second.combine(third));

        prop_assert_eq!(left.compare(&a, &b), right.compare(&a, &b));
    }

    #[test]
    fn prop_ordering_semigroup_associativity(
        x in prop::sample::select(vec![Ordering::Less, Ordering::Equal, Ordering::Greater]),
        y in prop::sample::select(vec![Ordering::Less, Ordering::Equal, Ordering::Greater]),
        z in prop::sample::select(vec![Ordering::Less, Ordering::Equal, Ordering::Greater]),
    ) {
        prop_assert_eq!(x.combine(y).combine(z), x.combine(y.combine(z)));
    }
}
