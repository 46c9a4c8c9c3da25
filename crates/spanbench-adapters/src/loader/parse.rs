//! Parsing and normalization of edge-list text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spanbench_common::types::{VertexId, Weight, canonical};
use spanbench_common::utils::error::{Error, Result};
use spanbench_common::utils::hash::FxHashMap;
use spanbench_core::WeightedGraph;

use super::{GraphFormat, LoadReport, LoaderConfig};

/// Upper bound (exclusive) of weights drawn for edges without one.
pub const RANDOM_WEIGHT_MAX: Weight = 100.0;

/// Parses `text` in the given dialect and normalizes it into a graph.
///
/// Normalization compacts labels to `0..n` in first-appearance order,
/// draws missing weights uniformly from `[0, 100)`, flattens negative
/// weights to their absolute value, drops self-loops, merges or keeps
/// duplicate pairs per `config`, and finally projects onto the largest
/// connected component.
///
/// # Errors
///
/// Returns [`Error::Parse`] for labels or weights that do not parse, for
/// non-finite weights, and for Matrix Market labels below 1.
pub fn parse_graph(
    text: &str,
    format: GraphFormat,
    config: &LoaderConfig,
) -> Result<(WeightedGraph, LoadReport)> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut report = LoadReport::default();
    let mut labels: FxHashMap<i64, VertexId> = FxHashMap::default();
    let mut edges: Vec<(VertexId, VertexId, Weight)> = Vec::new();
    let mut pairs: FxHashMap<(VertexId, VertexId), usize> = FxHashMap::default();
    let mut header_pending = format.has_header();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || format.is_comment(line) {
            continue;
        }
        report.lines_read += 1;
        if header_pending {
            header_pending = false;
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let a = parse_label(a, format, line_no)?;
        let b = parse_label(b, format, line_no)?;

        let mut weight = match tokens.next() {
            Some(token) => parse_weight(token, line_no)?,
            None => {
                report.random_weights += 1;
                rng.gen_range(0.0..RANDOM_WEIGHT_MAX)
            }
        };
        if weight < 0.0 {
            report.negative_weights += 1;
            weight = -weight;
        }

        let u = intern(&mut labels, a);
        let v = intern(&mut labels, b);
        if u == v {
            report.self_loops += 1;
            tracing::debug!(line = line_no, label = a, "self-loop dropped");
            continue;
        }

        if !config.keep_parallel_edges {
            let pair = canonical(u, v);
            if let Some(&existing) = pairs.get(&pair) {
                edges[existing].2 = weight;
                report.duplicate_edges += 1;
                continue;
            }
            pairs.insert(pair, edges.len());
        }
        edges.push((u, v, weight));
    }

    if report.negative_weights > 0 {
        tracing::warn!(
            count = report.negative_weights,
            "negative weights flattened to their absolute value"
        );
    }

    let graph = WeightedGraph::from_edges(labels.len(), edges)?;
    report.raw_vertices = graph.vertex_count();
    report.raw_edges = graph.edge_count();

    let components = graph.connected_components();
    report.components = components.len();
    if components.len() <= 1 || !config.largest_component_only {
        return Ok((graph, report));
    }

    let mut largest = &components[0];
    for component in &components[1..] {
        if component.len() > largest.len() {
            largest = component;
        }
    }
    tracing::warn!(
        components = components.len(),
        kept = largest.len(),
        of = graph.vertex_count(),
        "graph is not connected; keeping the largest component"
    );

    let projected = graph.induced_subgraph(largest);
    report.dropped_vertices = graph.vertex_count() - projected.vertex_count();
    Ok((projected, report))
}

/// Maps a raw label to its compact id, assigning the next id on first use.
fn intern(labels: &mut FxHashMap<i64, VertexId>, label: i64) -> VertexId {
    let next = labels.len();
    *labels.entry(label).or_insert(next)
}

fn parse_label(token: &str, format: GraphFormat, line: usize) -> Result<i64> {
    let label: i64 = token
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid vertex label '{token}'")))?;
    if format.is_one_indexed() {
        if label < 1 {
            return Err(Error::parse(
                line,
                format!("vertex label {label} is not 1-indexed"),
            ));
        }
        return Ok(label - 1);
    }
    Ok(label)
}

fn parse_weight(token: &str, line: usize) -> Result<Weight> {
    let weight: Weight = token
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid weight '{token}'")))?;
    if !weight.is_finite() {
        return Err(Error::parse(line, format!("weight '{token}' is not finite")));
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> LoaderConfig {
        LoaderConfig::default().with_seed(7)
    }

    fn parse(text: &str, format: GraphFormat) -> (WeightedGraph, LoadReport) {
        parse_graph(text, format, &seeded()).unwrap()
    }

    #[test]
    fn test_edge_list_with_comments() {
        let text = "# a comment\n% another\n\n10 20 1.5\n20 30 2.5\n";
        let (graph, report) = parse(text, GraphFormat::EdgeList);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.weight(0, 1), Some(1.5));
        assert_eq!(graph.weight(1, 2), Some(2.5));
        assert_eq!(report.lines_read, 2);
        assert_eq!(report.components, 1);
    }

    #[test]
    fn test_labels_compacted_in_first_appearance_order() {
        let (graph, _) = parse("7 3 1\n3 100 2\n", GraphFormat::EdgeList);
        // 7 -> 0, 3 -> 1, 100 -> 2
        assert_eq!(graph.weight(0, 1), Some(1.0));
        assert_eq!(graph.weight(1, 2), Some(2.0));
    }

    #[test]
    fn test_matrix_market_skips_header_and_shifts_labels() {
        let text = "%%MatrixMarket matrix coordinate real symmetric\n% comment\n3 3 2\n1 2 4.0\n2 3 5.0\n";
        let (graph, report) = parse(text, GraphFormat::MatrixMarket);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(0, 1), Some(4.0));
        assert_eq!(report.lines_read, 3);
    }

    #[test]
    fn test_matrix_market_hash_line_is_not_a_comment() {
        let text = "% comment\n# 2 2 1\n1 2 4.0\n";
        let (graph, report) = parse(text, GraphFormat::MatrixMarket);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.weight(0, 1), Some(4.0));
        assert_eq!(report.lines_read, 2);

        let err = parse_graph("2 2 1\n# note\n", GraphFormat::MatrixMarket, &seeded())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_matrix_market_rejects_zero_label() {
        let err = parse_graph("2 2 1\n0 1 1.0\n", GraphFormat::MatrixMarket, &seeded())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_missing_weights_are_random_in_range() {
        let (graph, report) = parse("0 1\n1 2\n2 3\n", GraphFormat::EdgeList);

        assert_eq!(report.random_weights, 3);
        for edge in graph.edges() {
            assert!((0.0..RANDOM_WEIGHT_MAX).contains(&edge.weight));
        }
    }

    #[test]
    fn test_random_weights_follow_seed() {
        let text = "0 1\n1 2\n";
        let (a, _) = parse(text, GraphFormat::EdgeList);
        let (b, _) = parse(text, GraphFormat::EdgeList);
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_weights_flattened() {
        let (graph, report) = parse("0 1 -3.5\n1 2 2\n", GraphFormat::EdgeList);
        assert_eq!(graph.weight(0, 1), Some(3.5));
        assert_eq!(report.negative_weights, 1);
    }

    #[test]
    fn test_self_loops_dropped() {
        let (graph, report) = parse("0 0 1\n0 1 2\n", GraphFormat::EdgeList);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(report.self_loops, 1);
    }

    #[test]
    fn test_duplicates_take_last_weight() {
        let (graph, report) = parse("0 1 5\n1 0 2\n1 2 1\n", GraphFormat::EdgeList);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(0, 1), Some(2.0));
        assert_eq!(graph.edges()[0].endpoints(), (0, 1));
        assert_eq!(report.duplicate_edges, 1);
    }

    #[test]
    fn test_parallel_edges_kept_on_request() {
        let config = seeded().with_parallel_edges(true);
        let (graph, report) =
            parse_graph("0 1 5\n1 0 2\n", GraphFormat::EdgeList, &config).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(report.duplicate_edges, 0);
    }

    #[test]
    fn test_largest_component_kept() {
        let text = "0 1 1\n5 6 1\n6 7 1\n7 5 1\n";
        let (graph, report) = parse(text, GraphFormat::EdgeList);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_connected());
        assert_eq!(report.components, 2);
        assert_eq!(report.dropped_vertices, 2);
        assert_eq!(report.raw_vertices, 5);
    }

    #[test]
    fn test_projection_can_be_disabled() {
        let config = seeded().with_largest_component_only(false);
        let (graph, report) =
            parse_graph("0 1 1\n2 3 1\n", GraphFormat::EdgeList, &config).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(report.components, 2);
        assert_eq!(report.dropped_vertices, 0);
    }

    #[test]
    fn test_short_lines_ignored() {
        let (graph, _) = parse("42\n0 1 1\n", GraphFormat::EdgeList);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_bad_tokens_report_line() {
        let err = parse_graph("0 1 1\n0 x 1\n", GraphFormat::EdgeList, &seeded()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = parse_graph("0 1 abc\n", GraphFormat::EdgeList, &seeded()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_graph("0 1 inf\n", GraphFormat::EdgeList, &seeded()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        let (graph, report) = parse("# nothing here\n", GraphFormat::EdgeList);
        assert!(graph.is_empty());
        assert_eq!(report.components, 0);
    }
}
