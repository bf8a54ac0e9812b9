use crate::Count;
use crate::Probability;
use crate::chain::Simulation;
use anyhow::Context;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Final run artifact: seed, rule, and per-square occupancy ranked by
/// landing count. Serialized as JSON alongside the history table.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub moves: Count,
    pub seed: u64,
    pub rule: String,
    pub snapshots: usize,
    pub squares: Vec<Occupancy>,
}

#[derive(Debug, Serialize)]
pub struct Occupancy {
    pub square: usize,
    pub name: &'static str,
    pub landings: Count,
    pub frequency: Probability,
}

impl Summary {
    pub fn new(simulation: &Simulation, seed: u64) -> Self {
        let total = simulation.landings().total().max(1) as Probability;
        let mut squares = simulation
            .landings()
            .iter()
            .map(|(square, landings)| Occupancy {
                square: square.index(),
                name: square.name(),
                landings,
                frequency: landings as Probability / total,
            })
            .collect::<Vec<_>>();
        squares.sort_by(|a, b| b.landings.cmp(&a.landings).then(a.square.cmp(&b.square)));
        Self {
            moves: simulation.moves(),
            seed,
            rule: simulation.rule().to_string(),
            snapshots: simulation.history().len(),
            squares,
        }
    }
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create summary {}", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .with_context(|| format!("write summary {}", path.display()))
    }
}
