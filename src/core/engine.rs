/*!
# MMC Engine

The outer γ-iteration (§4.5), grounded in
`original_source/src/MinimumMeanCycleCalculator.cpp::find_mmc`. Seeds γ from
a heuristically cheap cycle, then repeatedly asks the T-join solver for a
minimum ∅-join under the current γ's reweighting transform; each non-empty
join yields a (weakly) cheaper cycle and a strictly smaller γ, until the
join comes back empty or γ stops moving.

This crate's one deliberate divergence from its C++ ancestor: γ here is the
exact rational [`Gamma`](crate::core::gamma::Gamma), not `double`, so
termination is tested by exact equality rather than `delta_gamma > 1e-3`
(see SPEC_FULL.md §4.5 and DESIGN.md).
*/

use crate::core::cycle::find_any_cycle;
use crate::core::error::{MmcError, Result};
use crate::core::gamma::Gamma;
use crate::core::tjoin::minimum_zero_join;
use crate::core::types::{CanonicalEdge, EdgeWeight, Graph};

/// The minimum mean cycle found, and the exact γ equal to its mean weight.
#[derive(Debug, Clone)]
pub struct MinimumMeanCycle {
    pub cycle: Vec<(CanonicalEdge, EdgeWeight)>,
    pub gamma: Gamma,
}

/// Finds the minimum mean cycle in `graph`, or `None` if `graph` is acyclic
/// (§4.5 "Seeding").
pub fn find_minimum_mean_cycle(graph: &Graph) -> Result<Option<MinimumMeanCycle>> {
    let all_edges: Vec<(CanonicalEdge, EdgeWeight)> = graph.edges().collect();
    let Some(seed_cycle) = find_any_cycle(&all_edges, |e| graph.edge_weight(e.lo, e.hi)) else {
        return Ok(None);
    };

    let mut gamma = Gamma::from_cycle(seed_cycle.iter().map(|e| graph.edge_weight(e.lo, e.hi)))
        .expect("a cycle returned by find_any_cycle is never empty");
    let mut cycle = seed_cycle;

    loop {
        tracing::debug!(gamma = gamma.as_f64(), cycle_len = cycle.len(), "iterating T-join solver");
        let join = minimum_zero_join(graph, &gamma)?;
        if join.is_empty() {
            tracing::info!(gamma = gamma.as_f64(), "zero-join empty, gamma is optimal");
            break;
        }

        let join_with_weights: Vec<(CanonicalEdge, EdgeWeight)> = join
            .iter()
            .map(|&e| (e, graph.edge_weight(e.lo, e.hi)))
            .collect();
        let next_gamma = Gamma::from_cycle(join_with_weights.iter().map(|&(_, w)| w))
            .ok_or_else(|| MmcError::internal("non-empty zero-join produced an empty Gamma"))?;

        debug_assert!(
            next_gamma <= gamma,
            "gamma must decrease monotonically across iterations (§4.5 invariant)"
        );

        let next_cycle = find_any_cycle(&join_with_weights, |e| graph.edge_weight(e.lo, e.hi))
            .ok_or_else(|| {
                MmcError::internal("a non-empty zero-join must decompose into at least one cycle")
            })?;

        let gamma_is_stable = next_gamma == gamma;
        gamma = next_gamma;
        cycle = next_cycle
            .into_iter()
            .map(|e| (e, graph.edge_weight(e.lo, e.hi)))
            .collect();

        if gamma_is_stable {
            tracing::info!(gamma = gamma.as_f64(), "gamma stopped decreasing, optimal reached");
            break;
        }
    }

    Ok(Some(MinimumMeanCycle { cycle, gamma }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: usize, edges: &[(u32, u32, i32)]) -> Graph {
        let mut g = Graph::new(n);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    #[test]
    fn acyclic_graph_has_no_mmc() {
        let g = build(3, &[(0, 1, 1), (1, 2, 1)]);
        assert!(find_minimum_mean_cycle(&g).unwrap().is_none());
    }

    #[test]
    fn triangle_mean_is_one() {
        let g = build(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        let mmc = find_minimum_mean_cycle(&g).unwrap().unwrap();
        assert_eq!(mmc.cycle.len(), 3);
        assert_eq!(mmc.gamma, Gamma::new(3, 3));
    }

    #[test]
    fn cheap_cycle_beats_the_expensive_bridge() {
        let g = build(5, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 10), (3, 4, 10)]);
        let mmc = find_minimum_mean_cycle(&g).unwrap().unwrap();
        assert_eq!(mmc.gamma, Gamma::new(3, 3));
        assert_eq!(mmc.cycle.len(), 3);
    }

    #[test]
    fn negative_four_cycle_has_mean_minus_one() {
        let g = build(4, &[(0, 1, -1), (1, 2, -1), (2, 3, -1), (3, 0, -1), (0, 2, 5)]);
        let mmc = find_minimum_mean_cycle(&g).unwrap().unwrap();
        assert_eq!(mmc.gamma, Gamma::new(-1, 1));
        assert_eq!(mmc.cycle.len(), 4);
    }

    #[test]
    fn mixed_sign_refinement_finds_the_diagonal_triangle() {
        let g = build(
            4,
            &[(0, 1, 3), (1, 2, 3), (2, 3, 3), (3, 0, 3), (0, 2, -5), (1, 3, -5)],
        );
        let mmc = find_minimum_mean_cycle(&g).unwrap().unwrap();
        assert_eq!(mmc.gamma, Gamma::new(1, 3));
        assert_eq!(mmc.cycle.len(), 3);
    }

    #[test]
    fn running_twice_is_deterministic() {
        let g = build(
            6,
            &[(0, 1, 2), (1, 2, 2), (2, 0, 2), (3, 4, 2), (4, 5, 2), (5, 3, 2)],
        );
        let first = find_minimum_mean_cycle(&g).unwrap().unwrap();
        let second = find_minimum_mean_cycle(&g).unwrap().unwrap();
        assert_eq!(first.gamma, second.gamma);
        assert_eq!(first.cycle.len(), second.cycle.len());
    }
}
