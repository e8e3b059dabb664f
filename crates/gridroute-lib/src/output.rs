use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::grid::Cell;
use crate::routing::RoutePlan;
use crate::search::SearchAlgorithm;

/// Line terminating a path listing in the basic format.
pub const PATH_SENTINEL: &str = ".";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One `row col` line per cell followed by the `.` sentinel.
    Basic,
    /// Header line plus numbered cells.
    PlainText,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Weight of the cell entered on this step; `None` for the start cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_cost: Option<u8>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: SearchAlgorithm,
    pub hops: usize,
    pub cost: u64,
    pub start: Cell,
    pub end: Cell,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary, annotating entry costs from `weights`.
    pub fn from_plan(plan: &RoutePlan, weights: impl Fn(Cell) -> Option<u8>) -> Self {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &cell)| RouteStep {
                index,
                row: cell.row,
                col: cell.col,
                entry_cost: if index == 0 { None } else { weights(cell) },
            })
            .collect();

        Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            cost: plan.cost,
            start: plan.start,
            end: plan.end,
            steps,
        }
    }

    /// Render the summary using the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::Basic => self.render_basic(),
            RouteRenderMode::PlainText => self.render_plain(),
        }
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        for step in &self.steps {
            let _ = writeln!(buffer, "{} {}", step.row, step.col);
        }
        buffer.push_str(PATH_SENTINEL);
        buffer.push('\n');
        buffer
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path from {} to {} ({} hops, cost {}, algorithm: {}):",
            self.start, self.end, self.hops, self.cost, self.algorithm
        );
        for step in &self.steps {
            match step.entry_cost {
                Some(cost) => {
                    let _ = writeln!(
                        buffer,
                        "{:>4}. ({}, {}) +{}",
                        step.index, step.row, step.col, cost
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>4}. ({}, {})", step.index, step.row, step.col);
                }
            }
        }
        buffer
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
