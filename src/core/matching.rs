/*!
# Minimum-Weight Perfect Matching (exact, subset DP)

§4.4's external contract, solved in-house rather than vendored: given `k`
vertices `0..k` and a cost for every pair `(i, j)`, find a perfect matching
minimizing total cost.

`original_source/src/TJoinCalculator.cpp` hands this off to an external
Blossom-algorithm library (`blossomv::PerfectMatching`) because its `|T|`
can be large enough that a general-graph matching algorithm matters. This
crate has no such dependency available (SPEC_FULL.md, §4.4) and instead
solves it exactly via the classic Held–Karp subset DP: `dp[mask]` is the
minimum cost to perfectly match the members of `mask` (a bitmask over the
`k` inputs), recursing on the lowest unset... rather, lowest *set* bit,
paired against every other set bit. This is `O(k^2 * 2^k)`, exponential,
but exact and correct for arbitrary (non-bipartite) edge costs — appropriate
given the small `|T|` this crate's T-join reduction produces in practice.
*/

use crate::core::error::{MmcError, Result};

/// An edge of the auxiliary matching graph: `(i, j, cost)` with `i < j`.
#[derive(Debug, Clone, Copy)]
pub struct MatchingEdge {
    pub i: usize,
    pub j: usize,
    pub cost: i64,
}

const UNREACHABLE: i64 = i64::MAX / 4;

/// Upper bound on `k` this solver will attempt. The Held–Karp DP is
/// `O(k^2 * 2^k)` in both time and the `dp`/`choice` table sizes below;
/// past this ceiling it would rather fail fast than allocate `2^k` entries.
/// The T-join reduction's `|T|` is the number of odd-negative-degree nodes
/// in a single γ-iteration, which is small in practice (SPEC_FULL.md §4.4),
/// but nothing upstream enforces that, so this guard is the backstop.
const MAX_VERTICES: usize = 24;

/// Solves minimum-weight perfect matching on the complete graph over `0..k`
/// whose edges are given in `edges` (missing pairs are treated as absent,
/// i.e. infinitely expensive, letting disconnected auxiliary graphs surface
/// as `MatchingInfeasible` rather than panicking).
///
/// Returns, for each vertex, the index of its matched partner.
pub fn minimum_weight_perfect_matching(k: usize, edges: &[MatchingEdge]) -> Result<Vec<usize>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    if k % 2 != 0 {
        return Err(MmcError::matching_infeasible(format!(
            "odd vertex count {} admits no perfect matching",
            k
        )));
    }
    if k > MAX_VERTICES {
        return Err(MmcError::unsupported(format!(
            "auxiliary matching graph has {} vertices, exceeding the subset-DP ceiling of {}",
            k, MAX_VERTICES
        )));
    }

    let mut cost = vec![vec![UNREACHABLE; k]; k];
    for e in edges {
        cost[e.i][e.j] = e.cost;
        cost[e.j][e.i] = e.cost;
    }

    let full_mask: usize = (1usize << k) - 1;
    // dp[mask] = minimum cost to perfectly match the vertices set in `mask`.
    // Only even-popcount masks are ever populated; others stay UNREACHABLE.
    let mut dp = vec![UNREACHABLE; 1 << k];
    let mut choice = vec![usize::MAX; 1 << k]; // partner chosen for the lowest set bit of mask
    dp[0] = 0;

    for mask in 1..=full_mask {
        if mask.count_ones() % 2 != 0 {
            continue;
        }
        let lowest = mask.trailing_zeros() as usize;
        let rest = mask & !(1 << lowest);
        let mut bit = rest;
        while bit != 0 {
            let j = bit.trailing_zeros() as usize;
            bit &= bit - 1;
            let sub_mask = mask & !(1 << lowest) & !(1 << j);
            if dp[sub_mask] == UNREACHABLE || cost[lowest][j] == UNREACHABLE {
                continue;
            }
            let candidate = dp[sub_mask] + cost[lowest][j];
            if candidate < dp[mask] {
                dp[mask] = candidate;
                choice[mask] = j;
            }
        }
    }

    if dp[full_mask] >= UNREACHABLE {
        return Err(MmcError::matching_infeasible(
            "auxiliary graph has no perfect matching (disconnected components of odd size)"
                .to_string(),
        ));
    }

    let mut partner = vec![usize::MAX; k];
    let mut mask = full_mask;
    while mask != 0 {
        let lowest = mask.trailing_zeros() as usize;
        let j = choice[mask];
        debug_assert_ne!(j, usize::MAX, "matching DP reached an unreachable state");
        partner[lowest] = j;
        partner[j] = lowest;
        mask &= !(1 << lowest) & !(1 << j);
    }
    Ok(partner)
}
