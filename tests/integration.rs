//! End-to-end runs through the public API: topology -> graphs bound to both
//! cost policies -> engine -> path reconstruction -> comparison.

use approx::assert_relative_eq;
use gridpath::analysis::summary::CostChange;
use gridpath::search::path::path_weight;
use gridpath::{
    CostPolicy, GridConfig, GridError, GridSession, NodeId, Selection, build_from_edges,
    build_random, reconstruct, shortest_paths, shortest_paths_with,
};

const EDGES: [(usize, usize, f64); 4] = [(0, 1, 4.0), (1, 2, 1.0), (0, 2, 10.0), (2, 3, 2.0)];

fn random_config(num_nodes: usize, density: f64) -> GridConfig {
    GridConfig {
        num_nodes,
        density,
        ..GridConfig::default()
    }
}

#[test]
fn four_node_grid_standard_costs() {
    let graph = build_from_edges(4, &EDGES, None, CostPolicy::Identity, Some(1)).unwrap();
    let result = shortest_paths(&graph, NodeId(0)).unwrap();

    assert_eq!(0.0, result.distance(NodeId(0)));
    assert_eq!(4.0, result.distance(NodeId(1)));
    assert_eq!(5.0, result.distance(NodeId(2)));
    assert_eq!(7.0, result.distance(NodeId(3)));
    assert_eq!(
        vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)],
        reconstruct(result.predecessors(), NodeId(0), NodeId(3))
    );
}

#[test]
fn four_node_grid_power_aware_costs() {
    let powers = [1.0, 2.0, 1.0, 1.0];
    let graph = build_from_edges(4, &EDGES, Some(&powers), CostPolicy::PowerWeighted, None).unwrap();

    let edge = graph.edge_between(NodeId(0), NodeId(1)).unwrap();
    assert_relative_eq!(2.0, edge.weight());

    let result = shortest_paths(&graph, NodeId(0)).unwrap();
    assert_relative_eq!(2.0, result.distance(NodeId(1)));
}

#[test]
fn strong_endpoints_quarter_the_cost() {
    let graph =
        build_from_edges(2, &[(0, 1, 10.0)], Some(&[2.0, 2.0]), CostPolicy::PowerWeighted, None)
            .unwrap();
    assert_relative_eq!(2.5, graph.edges()[0].weight());
}

#[test]
fn invalid_mutations_are_rejected() {
    let mut graph = build_from_edges(2, &[], None, CostPolicy::Identity, Some(3)).unwrap();

    assert!(matches!(
        graph.add_edge(NodeId(0), NodeId(1), 0.0),
        Err(GridError::InvalidWeight(_))
    ));
    assert!(matches!(
        graph.add_edge(NodeId(0), NodeId(2), 1.0),
        Err(GridError::UnknownNode(NodeId(2)))
    ));
    assert_eq!(0, graph.edge_count());
}

#[test]
fn every_reachable_path_matches_its_distance() {
    for seed in 0..5 {
        for policy in [CostPolicy::Identity, CostPolicy::PowerWeighted] {
            let graph = build_random(&random_config(14, 0.3), policy, Some(seed)).unwrap();
            let source = NodeId(seed as usize % 14);
            let result = shortest_paths(&graph, source).unwrap();

            let mut reachable = 0;
            for (node, distance) in result.distances().iter() {
                assert!(distance >= 0.0);
                let path = result.path_to(node);
                if distance.is_finite() {
                    reachable += 1;
                    assert_eq!(Some(&source), path.first());
                    assert_eq!(Some(&node), path.last());
                    assert_eq!(Some(distance), path_weight(&graph, &path));
                } else {
                    assert!(path.is_empty());
                }
            }
            assert_eq!(reachable, result.trace().len());
            assert_eq!(source, result.trace().steps()[0].visited());
        }
    }
}

#[test]
fn heap_selection_is_an_equivalent_result() {
    let graph = build_random(&random_config(20, 0.2), CostPolicy::Identity, Some(17)).unwrap();
    for source in graph.node_ids() {
        let scan = shortest_paths_with(&graph, source, Selection::Scan).unwrap();
        let heap = shortest_paths_with(&graph, source, Selection::Heap).unwrap();
        assert_eq!(scan.distances(), heap.distances());
        assert_eq!(scan.trace(), heap.trace());
    }
}

#[test]
fn strong_grid_is_never_costlier() {
    // powers >= 1 everywhere: power-aware weights never exceed standard ones
    let config = GridConfig {
        num_nodes: 12,
        density: 0.4,
        power_range: 1.0..=2.0,
        seed: Some(5),
        ..GridConfig::default()
    };
    let session = GridSession::new(config).unwrap();

    for (std_edge, pow_edge) in session
        .standard()
        .edges()
        .iter()
        .zip(session.power_aware().edges())
    {
        assert_eq!(std_edge.base_cost(), pow_edge.base_cost());
        assert!(pow_edge.weight() <= std_edge.weight());
    }

    let comparison = session.compare(NodeId(0)).unwrap();
    for row in comparison.rows() {
        assert_ne!(CostChange::Costlier, row.change());
        if row.standard_cost().is_finite() {
            assert!(row.power_cost() <= row.standard_cost());
        }
    }
}

#[test]
fn session_mutation_keeps_topologies_aligned() {
    let mut session = GridSession::new(GridConfig {
        seed: Some(12),
        ..random_config(6, 0.5)
    })
    .unwrap();

    session.add_node(NodeId(6)).unwrap();
    session.add_edge(NodeId(0), NodeId(6), 2.0).unwrap();
    assert_eq!(session.standard().topology(), session.power_aware().topology());

    let comparison = session.compare(NodeId(6)).unwrap();
    assert_eq!(vec![NodeId(6)], comparison.standard().path_to(NodeId(6)));
    assert!(comparison.standard().distance(NodeId(0)) <= 2.0);
}

#[test]
fn destination_outside_the_grid_is_unknown() {
    let session = GridSession::from_edges(
        GridConfig {
            seed: Some(2),
            ..random_config(4, 0.5)
        },
        &EDGES,
        None,
    )
    .unwrap();
    let comparison = session.compare(NodeId(0)).unwrap();

    let route = comparison.power_aware().route_to(NodeId(3)).unwrap();
    assert!(route.is_reachable());
    assert_eq!(Some(&NodeId(3)), route.path.last());

    assert!(matches!(
        comparison.standard().route_to(NodeId(40)),
        Err(GridError::UnknownNode(NodeId(40)))
    ));
    assert!(matches!(
        session.standard().node_by_id(NodeId(40)),
        Err(GridError::UnknownNode(NodeId(40)))
    ));
}

#[test]
fn oversized_power_range_is_a_config_error() {
    let config = GridConfig {
        power_range: 50.0..=60.0,
        seed: Some(1),
        ..random_config(8, 0.5)
    };
    assert!(matches!(config.validate(), Err(GridError::Config(_))));
    assert!(matches!(GridSession::new(config), Err(GridError::Config(_))));
}
