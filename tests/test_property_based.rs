//! Property-based tests for `Gamma`'s exact rational comparison and
//! `CanonicalEdge`'s ordering invariant (§8 invariant 1, §3 "Gamma").

use mmc::core::gamma::Gamma;
use mmc::core::types::CanonicalEdge;
use proptest::prelude::*;

fn small_cost_sum() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn small_num_edges() -> impl Strategy<Value = u64> {
    1u64..1_000u64
}

proptest! {
    /// Gamma's cross-multiplied `<` must agree with plain `f64` division
    /// for inputs far from the overflow boundary.
    #[test]
    fn prop_gamma_ordering_matches_float_division(
        a_sum in small_cost_sum(), a_den in small_num_edges(),
        b_sum in small_cost_sum(), b_den in small_num_edges(),
    ) {
        let a = Gamma::new(a_sum, a_den);
        let b = Gamma::new(b_sum, b_den);
        let expected = (a_sum as f64 / a_den as f64) < (b_sum as f64 / b_den as f64);
        prop_assert_eq!(a < b, expected);
    }

    /// Gamma equality must agree with cross-reduced fraction equality.
    #[test]
    fn prop_gamma_equality_is_reflexive(sum in small_cost_sum(), den in small_num_edges()) {
        let g = Gamma::new(sum, den);
        prop_assert_eq!(g, g);
    }

    /// `apply` is zero exactly at `gamma` and matches the sign of `w - gamma`.
    #[test]
    fn prop_apply_sign_matches_w_minus_gamma(
        sum in small_cost_sum(), den in small_num_edges(), w in -1000i32..1000i32,
    ) {
        let gamma = Gamma::new(sum, den);
        let applied = gamma.apply(w);
        let diff = (w as f64) - gamma.as_f64();
        if diff.abs() > 1e-9 {
            prop_assert_eq!(applied > 0, diff > 0.0);
        }
    }

    /// Canonicalizing an edge is symmetric in its two endpoints.
    #[test]
    fn prop_canonical_edge_is_symmetric(a in 0u32..10_000, b in 0u32..10_000) {
        prop_assume!(a != b);
        prop_assert_eq!(CanonicalEdge::new(a, b), CanonicalEdge::new(b, a));
    }

    /// Canonicalizing an edge always orders its endpoints ascending.
    #[test]
    fn prop_canonical_edge_orders_ascending(a in 0u32..10_000, b in 0u32..10_000) {
        prop_assume!(a != b);
        let e = CanonicalEdge::new(a, b);
        prop_assert!(e.lo < e.hi);
    }
}
