use std::collections::{BTreeMap, BTreeSet};

use diaxis_core::models::symptom::{SymptomEdge, SymptomId};

use crate::error::GraphError;

/// Immutable symptom association network.
///
/// Nodes are interned to indices at load time; adjacency stores each
/// undirected edge in both directions. There is no mutating API, so one
/// loaded graph can be shared behind an `Arc` by every session.
#[derive(Debug)]
pub struct SymptomGraph {
    ids: Vec<SymptomId>,
    index: BTreeMap<SymptomId, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl SymptomGraph {
    /// Build the graph from the declared symptom set and literature edges.
    ///
    /// An edge endpoint outside the declared set, a weight outside (0, 1],
    /// a self-loop, or a duplicate pair is a load-time error; there is no
    /// partially loaded graph.
    pub fn load(symptoms: &[SymptomId], edges: &[SymptomEdge]) -> Result<Self, GraphError> {
        let mut ids = Vec::with_capacity(symptoms.len());
        let mut index = BTreeMap::new();
        for id in symptoms {
            if index.insert(id.clone(), ids.len()).is_some() {
                return Err(GraphError::DuplicateSymptom(id.clone()));
            }
            ids.push(id.clone());
        }

        let mut adjacency = vec![Vec::new(); ids.len()];
        let mut seen: BTreeSet<(usize, usize)> = BTreeSet::new();
        for edge in edges {
            let resolve = |id: &SymptomId| {
                index.get(id).copied().ok_or_else(|| GraphError::UnknownSymptom {
                    symptom: id.clone(),
                    reference: edge.reference.clone(),
                })
            };
            let a = resolve(&edge.a)?;
            let b = resolve(&edge.b)?;
            if a == b {
                return Err(GraphError::SelfLoop(edge.a.clone()));
            }
            if !(edge.weight > 0.0 && edge.weight <= 1.0) {
                return Err(GraphError::InvalidWeight {
                    a: edge.a.clone(),
                    b: edge.b.clone(),
                    weight: edge.weight,
                });
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(GraphError::DuplicateEdge {
                    a: edge.a.clone(),
                    b: edge.b.clone(),
                });
            }
            adjacency[a].push((b, edge.weight));
            adjacency[b].push((a, edge.weight));
        }

        Ok(Self {
            ids,
            index,
            adjacency,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &SymptomId) -> bool {
        self.index.contains_key(id)
    }

    /// Neighbors of a symptom with their association weights. Symptoms not
    /// in the graph have none.
    pub fn neighbors<'a>(
        &'a self,
        id: &SymptomId,
    ) -> impl Iterator<Item = (&'a SymptomId, f64)> + 'a {
        self.index
            .get(id)
            .into_iter()
            .flat_map(move |&node| {
                self.adjacency[node]
                    .iter()
                    .map(move |&(other, weight)| (&self.ids[other], weight))
            })
    }

    pub(crate) fn index_of(&self, id: &SymptomId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_at(&self, node: usize) -> &SymptomId {
        &self.ids[node]
    }

    pub(crate) fn adjacency_at(&self, node: usize) -> &[(usize, f64)] {
        &self.adjacency[node]
    }
}
