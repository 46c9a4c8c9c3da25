//! Property tests shared by all algorithms.
//!
//! Weights are small integers so every cost comparison is exact.

use proptest::prelude::*;
use proptest::sample::Index;
use spanbench_core::{
    AlgorithmKind, KargerConfig, WeightedGraph, boruvka, karger, kruskal, prim, reverse_delete,
    validate_spanning_tree,
};

/// A random connected graph together with the weight of the random
/// spanning tree used to guarantee connectivity.
fn connected_graph() -> impl Strategy<Value = (WeightedGraph, f64)> {
    (2_usize..12)
        .prop_flat_map(|n| {
            let tree = proptest::collection::vec((any::<Index>(), 0_u32..20), n - 1);
            let extra = proptest::collection::vec((0..n, 0..n, 0_u32..20), 0..2 * n);
            (Just(n), tree, extra)
        })
        .prop_map(|(n, tree, extra)| {
            let mut graph = WeightedGraph::new(n);
            let mut tree_cost = 0.0;
            for (i, (parent, weight)) in tree.into_iter().enumerate() {
                let child = i + 1;
                let weight = f64::from(weight);
                graph.add_edge(parent.index(child), child, weight).unwrap();
                tree_cost += weight;
            }
            for (u, v, weight) in extra {
                if u != v {
                    graph.add_edge(u, v, f64::from(weight)).unwrap();
                }
            }
            (graph, tree_cost)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn spanning_tree_algorithms_agree((graph, _) in connected_graph()) {
        let n = graph.vertex_count();
        let reference = kruskal(&graph);
        prop_assert!(reference.is_valid);

        for result in [prim(&graph), boruvka(&graph), reverse_delete(&graph)] {
            prop_assert!(result.is_valid);
            prop_assert_eq!(result.edges.len(), n - 1);
            prop_assert_eq!(result.total_cost, reference.total_cost);
        }
        prop_assert_eq!(reference.edges.len(), n - 1);
    }

    #[test]
    fn minimum_is_below_any_spanning_tree((graph, tree_cost) in connected_graph()) {
        prop_assert!(kruskal(&graph).total_cost <= tree_cost);
    }

    #[test]
    fn results_are_trees_per_validator((graph, _) in connected_graph()) {
        for result in [kruskal(&graph), prim(&graph), boruvka(&graph), reverse_delete(&graph)] {
            let check = validate_spanning_tree(&graph, &result.edges);
            prop_assert!(check.is_valid);
            prop_assert_eq!(check.total_cost, result.total_cost);
        }
    }

    #[test]
    fn karger_cut_is_sound((graph, _) in connected_graph(), seed in any::<u64>()) {
        let result = karger(&graph, &KargerConfig::default().with_seed(seed));
        prop_assert!(result.is_valid);

        // Drop every pair named by the cut; both sides are connected through
        // contracted edges, so exactly two components must remain.
        let cut_pairs: Vec<(usize, usize)> = result
            .edges
            .iter()
            .map(|&(u, v)| if u < v { (u, v) } else { (v, u) })
            .collect();
        let remaining = WeightedGraph::from_edges(
            graph.vertex_count(),
            graph
                .edges()
                .iter()
                .filter(|e| !cut_pairs.contains(&e.endpoints()))
                .map(|e| (e.u, e.v, e.weight)),
        )
        .unwrap();
        let components = remaining.connected_components();
        prop_assert_eq!(components.len(), 2);

        let mut side = vec![0_usize; graph.vertex_count()];
        for &v in &components[1] {
            side[v] = 1;
        }
        let crossing: f64 = graph
            .edges()
            .iter()
            .filter(|e| side[e.u] != side[e.v])
            .map(|e| e.weight)
            .sum();
        let crossing_count = graph.edges().iter().filter(|e| side[e.u] != side[e.v]).count();

        prop_assert_eq!(result.total_cost, crossing);
        prop_assert_eq!(result.edges.len(), crossing_count);
        for &(u, v) in &result.edges {
            prop_assert_ne!(side[u], side[v]);
        }
    }

    #[test]
    fn karger_is_deterministic_per_seed((graph, _) in connected_graph(), seed in any::<u64>()) {
        let config = KargerConfig::default().with_restarts(3).with_seed(seed);
        let a = karger(&graph, &config);
        let b = karger(&graph, &config);
        prop_assert!(a.same_outcome(&b));
    }

    #[test]
    fn algorithms_leave_input_untouched((graph, _) in connected_graph()) {
        let before = graph.clone();
        for kind in AlgorithmKind::ALL {
            let _ = kind.run(&graph, &KargerConfig::default().with_seed(1));
            prop_assert_eq!(&graph, &before);
        }
    }

    #[test]
    fn validator_is_idempotent((graph, _) in connected_graph()) {
        let edges = prim(&graph).edges;
        prop_assert_eq!(
            validate_spanning_tree(&graph, &edges),
            validate_spanning_tree(&graph, &edges)
        );
    }
}
