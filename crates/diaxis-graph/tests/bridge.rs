use std::collections::BTreeSet;

use diaxis_core::models::symptom::{SymptomEdge, SymptomId};
use diaxis_graph::bridge::DiagnosisCluster;
use diaxis_graph::graph::SymptomGraph;
use uuid::Uuid;

fn sid(id: &str) -> SymptomId {
    SymptomId::new(id)
}

fn edge(a: &str, b: &str, weight: f64) -> SymptomEdge {
    SymptomEdge {
        a: sid(a),
        b: sid(b),
        weight,
        reference: format!("lit-{a}-{b}"),
    }
}

fn set(names: &[&str]) -> BTreeSet<SymptomId> {
    names.iter().map(|n| sid(n)).collect()
}

fn cluster(symptoms: &[&str], accepted: bool) -> DiagnosisCluster {
    DiagnosisCluster {
        diagnosis: Uuid::from_u128(symptoms.len() as u128 + u128::from(accepted) * 1000),
        symptoms: set(symptoms),
        accepted,
    }
}

fn fixture_graph() -> SymptomGraph {
    SymptomGraph::load(
        &[
            sid("sadness"),
            sid("insomnia"),
            sid("irritability"),
            sid("concentration"),
            sid("hyperactivity"),
        ],
        &[
            edge("irritability", "sadness", 0.7),
            edge("concentration", "sadness", 0.6),
            edge("concentration", "hyperactivity", 0.8),
        ],
    )
    .expect("fixture graph")
}

#[test]
fn symptom_linking_two_clusters_is_a_bridge() {
    let graph = fixture_graph();
    let confirmed = set(&[
        "sadness",
        "insomnia",
        "irritability",
        "concentration",
        "hyperactivity",
    ]);
    let clusters = vec![
        cluster(&["sadness", "insomnia"], true),
        cluster(&["hyperactivity"], false),
    ];

    let bridges = graph.find_bridge_symptoms(&confirmed, &clusters);
    assert_eq!(bridges, set(&["concentration"]));
}

#[test]
fn single_cluster_neighborhood_is_not_a_bridge() {
    let graph = fixture_graph();
    let confirmed = set(&["sadness", "irritability"]);
    let clusters = vec![cluster(&["sadness"], true)];

    let bridges = graph.find_bridge_symptoms(&confirmed, &clusters);
    assert!(bridges.is_empty());
}

#[test]
fn symptom_claimed_by_an_accepted_cluster_is_never_a_bridge() {
    let graph = fixture_graph();
    let confirmed = set(&["sadness", "concentration", "hyperactivity"]);
    // concentration itself is claimed by an accepted diagnosis
    let clusters = vec![
        cluster(&["concentration", "sadness"], true),
        cluster(&["hyperactivity"], false),
    ];

    let bridges = graph.find_bridge_symptoms(&confirmed, &clusters);
    assert!(bridges.is_empty());
}

#[test]
fn isolated_symptom_is_not_a_bridge() {
    let graph = fixture_graph();
    let confirmed = set(&["insomnia"]);
    let clusters = vec![
        cluster(&["sadness"], true),
        cluster(&["hyperactivity"], false),
    ];

    let bridges = graph.find_bridge_symptoms(&confirmed, &clusters);
    assert!(bridges.is_empty());
}

#[test]
fn zero_confirmed_symptoms_is_a_valid_empty_query() {
    let graph = fixture_graph();
    let bridges = graph.find_bridge_symptoms(&BTreeSet::new(), &[]);
    assert!(bridges.is_empty());
}
