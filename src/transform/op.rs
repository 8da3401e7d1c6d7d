//! Named transform ops and a small sequential pipeline with stage timings.
use super::{blur, grayscale, negative};
use crate::image::PixelGrid;

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// A transform selected by name, e.g. from a JSON config.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Negative,
    Grayscale,
    Blur {
        #[serde(default = "default_passes")]
        passes: usize,
    },
}

fn default_passes() -> usize {
    1
}

impl Op {
    /// Apply the op, producing a new grid of the same dimensions.
    ///
    /// `Blur { passes }` re-applies the single-pass blur `passes` times,
    /// each pass reading the previous pass's output.
    pub fn apply(self, grid: &PixelGrid) -> PixelGrid {
        match self {
            Op::Negative => negative(grid),
            Op::Grayscale => grayscale(grid),
            Op::Blur { passes } => {
                let mut out = grid.clone();
                for _ in 0..passes {
                    out = blur(&out);
                }
                out
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Negative => write!(f, "negative"),
            Op::Grayscale => write!(f, "grayscale"),
            Op::Blur { passes } => write!(f, "blur x{passes}"),
        }
    }
}

/// Wall-clock cost of one pipeline stage.
#[derive(Clone, Debug, Serialize)]
pub struct StageTiming {
    pub op: String,
    pub elapsed_ms: f64,
}

/// Output grid plus per-stage timings.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineResult {
    #[serde(skip)]
    pub grid: PixelGrid,
    pub stages: Vec<StageTiming>,
    pub elapsed_ms: f64,
}

/// Run the ops in order, each stage consuming the previous stage's output.
pub fn run_pipeline(grid: PixelGrid, ops: &[Op]) -> PipelineResult {
    let start = Instant::now();
    let mut stages = Vec::with_capacity(ops.len());
    let mut grid = grid;
    for op in ops {
        let stage_start = Instant::now();
        grid = op.apply(&grid);
        let elapsed_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
        debug!("pipeline stage {op}: {elapsed_ms:.3} ms");
        stages.push(StageTiming {
            op: op.to_string(),
            elapsed_ms,
        });
    }
    PipelineResult {
        grid,
        stages,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}
