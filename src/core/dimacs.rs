/*!
# DIMACS Edge Format I/O

Reads and writes the DIMACS edge format (§6): a header line `p edge N M`
followed by `M` lines `e u v w` with 1-based node ids, `c`-prefixed comment
lines skipped anywhere in the stream. Node ids are converted to 0-based on
read and back to 1-based on write.

Parallel edges are handled per the Driver's chosen policy (§6, §7): either
rejected outright (`MmcError::Unsupported`) or collapsed to the cheapest
weight, with the displaced duplicate reported back to the caller as a
candidate 2-cycle.
*/

use crate::core::error::{MmcError, Result};
use crate::core::types::{CanonicalEdge, EdgeWeight, Graph, NodeId};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// How the reader should treat a second edge between the same two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallelEdgePolicy {
    /// Fail with `MmcError::Unsupported` as soon as a duplicate pair is seen.
    Reject,
    /// Keep the cheaper of the two weights and remember the pair as a 2-cycle candidate.
    CollapseToCheapest,
}

/// A parallel pair collapsed during reading, kept for the Driver's "cheapest
/// parallel 2-cycle" boundary behavior (§8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsedParallelEdge {
    pub edge: CanonicalEdge,
    pub weights: (EdgeWeight, EdgeWeight),
}

/// Result of reading a DIMACS stream: the graph plus any parallel edges collapsed along the way.
#[derive(Debug)]
pub struct DimacsInput {
    pub graph: Graph,
    pub collapsed_parallel_edges: Vec<CollapsedParallelEdge>,
}

fn is_comment(line: &str) -> bool {
    line.starts_with('c')
}

/// Reads the first non-comment, non-blank line. Blank lines are tolerated
/// defensively even though the format does not call for them; comment lines
/// are skipped exactly as `read_next_non_comment_line` does in the reference
/// implementation.
///
/// `lines` must already be paired with the absolute 1-based physical line
/// number of each entry (via `.enumerate()` over the whole stream) so that
/// repeated calls — one for the header, one per edge — keep reporting
/// physical line numbers instead of restarting the count each time (§7).
fn next_non_comment_line(
    lines: &mut impl Iterator<Item = (usize, std::io::Result<String>)>,
) -> Result<Option<(usize, String)>> {
    for (idx, line) in lines.by_ref() {
        let line = line?;
        if line.trim().is_empty() || is_comment(&line) {
            continue;
        }
        return Ok(Some((idx + 1, line)));
    }
    Ok(None)
}

fn from_dimacs_id(line: usize, token: &str) -> Result<NodeId> {
    let raw: i64 = token
        .parse()
        .map_err(|_| MmcError::input_format_at(line, format!("expected integer node id, got '{}'", token)))?;
    if raw <= 0 {
        return Err(MmcError::input_format_at(
            line,
            format!("non-positive DIMACS node id {} can not be converted", raw),
        ));
    }
    Ok((raw - 1) as NodeId)
}

fn to_dimacs_id(node: NodeId) -> u64 {
    node as u64 + 1
}

/// Reads a DIMACS edge-format graph from any `Read` source.
pub fn read_dimacs<R: Read>(input: R, policy: ParallelEdgePolicy) -> Result<DimacsInput> {
    let reader = BufReader::new(input);
    let mut lines = reader.lines().enumerate();

    let (header_line, header) = next_non_comment_line(&mut lines)?
        .ok_or_else(|| MmcError::input_format("unexpected end of DIMACS stream: missing header"))?;

    let header_tokens: Vec<&str> = header.split_whitespace().collect();
    if header_tokens.len() != 4 || header_tokens[0] != "p" || header_tokens[1] != "edge" {
        return Err(MmcError::input_format_at(
            header_line,
            format!("expected 'p edge N M', got '{}'", header),
        ));
    }
    let num_nodes: usize = header_tokens[2]
        .parse()
        .map_err(|_| MmcError::input_format_at(header_line, "N in header is not a valid integer"))?;
    let num_edges: usize = header_tokens[3]
        .parse()
        .map_err(|_| MmcError::input_format_at(header_line, "M in header is not a valid integer"))?;

    let mut graph = Graph::new(num_nodes);
    let mut collapsed = Vec::new();

    for _ in 0..num_edges {
        let (line_no, line) =
            next_non_comment_line(&mut lines)?.ok_or_else(|| {
                MmcError::input_format("unexpected end of DIMACS stream: missing edge line")
            })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 4 || tokens[0] != "e" {
            return Err(MmcError::input_format_at(
                line_no,
                format!("expected 'e u v w', got '{}'", line),
            ));
        }
        let u = from_dimacs_id(line_no, tokens[1])?;
        let v = from_dimacs_id(line_no, tokens[2])?;
        let w: EdgeWeight = tokens[3]
            .parse()
            .map_err(|_| MmcError::input_format_at(line_no, format!("invalid edge weight '{}'", tokens[3])))?;
        if u as usize >= num_nodes || v as usize >= num_nodes {
            return Err(MmcError::input_format_at(
                line_no,
                format!("edge endpoint out of range for N = {}", num_nodes),
            ));
        }
        if u == v {
            return Err(MmcError::input_format_at(line_no, "self-loops are not allowed"));
        }

        if graph.edge_exists(u, v) {
            match policy {
                ParallelEdgePolicy::Reject => {
                    return Err(MmcError::unsupported(format!(
                        "parallel edge between {} and {} at line {}",
                        tokens[1], tokens[2], line_no
                    )));
                }
                ParallelEdgePolicy::CollapseToCheapest => {
                    let existing = graph.edge_weight(u, v);
                    collapsed.push(CollapsedParallelEdge {
                        edge: CanonicalEdge::new(u, v),
                        weights: (existing, w),
                    });
                    if w < existing {
                        graph.add_edge(u, v, w)?;
                    }
                }
            }
        } else {
            graph.add_edge(u, v, w)?;
        }
    }

    Ok(DimacsInput {
        graph,
        collapsed_parallel_edges: collapsed,
    })
}

/// Writes the MMC result in DIMACS edge format: `p edge N K` followed by `K`
/// lines `e u v w` (1-based ids, original weights). `cycle` is empty for an
/// acyclic graph, producing `p edge N 0` with no edge lines.
pub fn write_dimacs<W: Write>(
    output: W,
    num_nodes: usize,
    cycle: &[(CanonicalEdge, EdgeWeight)],
) -> Result<()> {
    let mut writer = BufWriter::new(output);
    writeln!(writer, "p edge {} {}", num_nodes, cycle.len())?;
    for (edge, weight) in cycle {
        writeln!(
            writer,
            "e {} {} {}",
            to_dimacs_id(edge.lo),
            to_dimacs_id(edge.hi),
            weight
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_triangle() {
        let input = "c a comment\np edge 3 3\ne 1 2 1\ne 2 3 1\ne 1 3 1\n";
        let parsed = read_dimacs(input.as_bytes(), ParallelEdgePolicy::Reject).unwrap();
        assert_eq!(parsed.graph.num_nodes(), 3);
        assert_eq!(parsed.graph.num_edges(), 3);
        assert!(parsed.graph.edge_exists(0, 1));
        assert_eq!(parsed.graph.edge_weight(0, 1), 1);
        assert!(parsed.collapsed_parallel_edges.is_empty());
    }

    #[test]
    fn rejects_self_loop() {
        let input = "p edge 2 1\ne 1 1 4\n";
        let err = read_dimacs(input.as_bytes(), ParallelEdgePolicy::Reject).unwrap_err();
        assert!(matches!(err, MmcError::InputFormat { .. }));
    }

    #[test]
    fn rejects_non_positive_id() {
        let input = "p edge 2 1\ne 0 1 4\n";
        let err = read_dimacs(input.as_bytes(), ParallelEdgePolicy::Reject).unwrap_err();
        assert!(matches!(err, MmcError::InputFormat { .. }));
    }

    #[test]
    fn strict_mode_rejects_parallel_edges() {
        let input = "p edge 2 2\ne 1 2 3\ne 1 2 9\n";
        let err = read_dimacs(input.as_bytes(), ParallelEdgePolicy::Reject).unwrap_err();
        assert!(matches!(err, MmcError::Unsupported(_)));
    }

    #[test]
    fn collapses_parallel_edges_to_cheapest() {
        let input = "p edge 2 2\ne 1 2 9\ne 1 2 3\n";
        let parsed = read_dimacs(input.as_bytes(), ParallelEdgePolicy::CollapseToCheapest).unwrap();
        assert_eq!(parsed.graph.edge_weight(0, 1), 3);
        assert_eq!(parsed.collapsed_parallel_edges.len(), 1);
        assert_eq!(parsed.collapsed_parallel_edges[0].weights, (9, 3));
    }

    #[test]
    fn writes_acyclic_result() {
        let mut buf = Vec::new();
        write_dimacs(&mut buf, 3, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "p edge 3 0\n");
    }

    #[test]
    fn writes_cycle_with_one_based_ids() {
        let mut buf = Vec::new();
        let cycle = vec![
            (CanonicalEdge::new(0, 1), 1),
            (CanonicalEdge::new(1, 2), 1),
            (CanonicalEdge::new(0, 2), 1),
        ];
        write_dimacs(&mut buf, 3, &cycle).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "p edge 3 3\ne 1 2 1\ne 2 3 1\ne 1 3 1\n");
    }

    #[test]
    fn round_trips_triangle_as_a_multiset() {
        // §8: the round-trip invariant is multiset equality of canonicalized
        // edges, not line order — `graph.edges()` always yields ascending
        // (lo,hi) order, which need not match the input's edge-line order.
        let input = "p edge 3 3\ne 1 2 1\ne 2 3 1\ne 1 3 1\n";
        let parsed = read_dimacs(input.as_bytes(), ParallelEdgePolicy::Reject).unwrap();
        let edges: Vec<_> = parsed.graph.edges().collect();
        let mut buf = Vec::new();
        write_dimacs(&mut buf, parsed.graph.num_nodes(), &edges).unwrap();

        let reparsed = read_dimacs(buf.as_slice(), ParallelEdgePolicy::Reject).unwrap();
        let mut original: Vec<_> = parsed.graph.edges().map(|(e, w)| (e.lo, e.hi, w)).collect();
        let mut written: Vec<_> = reparsed.graph.edges().map(|(e, w)| (e.lo, e.hi, w)).collect();
        original.sort();
        written.sort();
        assert_eq!(original, written);
        assert_eq!(reparsed.graph.num_nodes(), parsed.graph.num_nodes());
    }
}
