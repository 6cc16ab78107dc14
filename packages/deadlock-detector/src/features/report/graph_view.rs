use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LabelConfig;
use crate::features::safety_analysis::domain::{units, Snapshot};

/// Legend printed above the graph view
pub const GRAPH_LEGEND: &str = "P → R = request, R → P = allocation.";

/// One labelled edge with its unit count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub units: u64,
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} (x{})", self.from, self.to, self.units)
    }
}

/// Edges touching one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEdges {
    pub process: String,
    /// resource → process, one per resource with allocation > 0
    pub allocated: Vec<GraphEdge>,
    /// process → resource, one per resource with request > 0
    pub requested: Vec<GraphEdge>,
}

/// Descriptive resource-allocation graph derived from the matrices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub legend: String,
    pub processes: Vec<ProcessEdges>,
}

impl GraphView {
    pub fn build(snapshot: &Snapshot, labels: &LabelConfig) -> Self {
        let processes = (0..snapshot.process_count)
            .map(|i| {
                let process = labels.process(i);
                let mut allocated = Vec::new();
                let mut requested = Vec::new();

                for j in 0..snapshot.resource_count {
                    let held = cell(&snapshot.allocation, i, j);
                    if held > 0 {
                        allocated.push(GraphEdge {
                            from: labels.resource(j),
                            to: process.clone(),
                            units: held,
                        });
                    }
                    let wanted = cell(&snapshot.request, i, j);
                    if wanted > 0 {
                        requested.push(GraphEdge {
                            from: process.clone(),
                            to: labels.resource(j),
                            units: wanted,
                        });
                    }
                }

                ProcessEdges {
                    process,
                    allocated,
                    requested,
                }
            })
            .collect();

        Self {
            legend: GRAPH_LEGEND.to_string(),
            processes,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.processes
            .iter()
            .map(|p| p.allocated.len() + p.requested.len())
            .sum()
    }
}

fn cell(matrix: &[Vec<i64>], i: usize, j: usize) -> u64 {
    matrix
        .get(i)
        .and_then(|row| row.get(j))
        .map(|&v| units(v))
        .unwrap_or(0)
}
