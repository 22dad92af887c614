use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use diaxis_core::models::symptom::SymptomId;

use crate::graph::SymptomGraph;

/// The criterion symptoms claimed by one active diagnosis candidate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisCluster {
    pub diagnosis: Uuid,
    pub symptoms: BTreeSet<SymptomId>,
    pub accepted: bool,
}

impl SymptomGraph {
    /// Confirmed symptoms that no accepted diagnosis claims, whose graph
    /// neighbors span two or more diagnosis clusters.
    ///
    /// A symptom with no neighbors, or whose neighbors all fall inside one
    /// cluster, is not a bridge. Zero confirmed symptoms is a valid query
    /// with an empty answer.
    pub fn find_bridge_symptoms(
        &self,
        confirmed: &BTreeSet<SymptomId>,
        clusters: &[DiagnosisCluster],
    ) -> BTreeSet<SymptomId> {
        let mut bridges = BTreeSet::new();
        for symptom in confirmed {
            let claimed = clusters
                .iter()
                .any(|c| c.accepted && c.symptoms.contains(symptom));
            if claimed {
                continue;
            }

            let mut touched: BTreeSet<Uuid> = BTreeSet::new();
            for (neighbor, _) in self.neighbors(symptom) {
                for cluster in clusters {
                    if cluster.symptoms.contains(neighbor) {
                        touched.insert(cluster.diagnosis);
                    }
                }
            }
            if touched.len() >= 2 {
                bridges.insert(symptom.clone());
            }
        }
        bridges
    }
}
