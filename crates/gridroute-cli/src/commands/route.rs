//! Route command handler for computing paths across a weighted grid.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use gridroute_lib::{plan_route, read_problem, Error as RouteError, RouteSummary, SearchAlgorithm};

use crate::output::{write_summary, OutputFormat};

/// Diagnostic printed for malformed input or out-of-range coordinates.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Diagnostic printed when the end cell cannot be reached from the start.
pub const UNREACHABLE_MESSAGE: &str = "End cell is unreachable";

/// Search algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Bucket-queue search (Dial's algorithm).
    #[default]
    Dial,
    /// Binary-heap Dijkstra search.
    Dijkstra,
}

impl From<AlgorithmArg> for SearchAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dial => SearchAlgorithm::Dial,
            AlgorithmArg::Dijkstra => SearchAlgorithm::Dijkstra,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Problem file; `None` or `-` reads standard input.
    pub input: Option<PathBuf>,
    /// Algorithm to use when searching.
    pub algorithm: AlgorithmArg,
    /// Output format for the resulting path.
    pub format: OutputFormat,
}

impl RouteCommandArgs {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| path.as_os_str() != "-")
    }
}

/// Handle the route command.
///
/// Reads the problem from `args.input` (or `stdin`), plans the route and
/// writes it to `out` in the selected format.
pub fn handle_route_command<R: Read, W: Write>(
    args: &RouteCommandArgs,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let problem = match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open problem file {}", path.display()))?;
            read_problem(BufReader::new(file))
                .with_context(|| format!("failed to read problem from {}", path.display()))?
        }
        None => read_problem(stdin).context("failed to read problem from standard input")?,
    };

    tracing::debug!(
        rows = problem.grid.rows(),
        cols = problem.grid.cols(),
        passable = problem.grid.passable_count(),
        "loaded problem"
    );

    let request = problem.request(args.algorithm.into());
    let plan = plan_route(&problem.grid, &request)?;
    tracing::info!(
        hops = plan.hop_count(),
        cost = plan.cost,
        settled = plan.settled,
        "route planned"
    );

    let summary = RouteSummary::from_plan(&plan, |cell| problem.grid.weight_at(cell));
    write_summary(out, &summary, args.format).context("failed to write route")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Map a command failure to the single diagnostic line written to stderr.
pub fn diagnostic_for(error: &anyhow::Error) -> String {
    let route_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<RouteError>());

    match route_error {
        Some(RouteError::Unreachable { .. }) => UNREACHABLE_MESSAGE.to_string(),
        Some(inner) if inner.is_invalid_input() => INVALID_INPUT_MESSAGE.to_string(),
        _ => format!("{error:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, args: &RouteCommandArgs) -> Result<String> {
        let mut out = Vec::new();
        handle_route_command(args, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn ring_grid_routes_around_centre() {
        let output = run(
            "3 3\n1 1 1\n1 0 1\n1 1 1\n0 0 2 2\n",
            &RouteCommandArgs::default(),
        )
        .unwrap();
        assert_eq!(output, "0 0\n1 0\n2 0\n2 1\n2 2\n.\n");
    }

    #[test]
    fn dijkstra_argument_maps_to_library_algorithm() {
        assert_eq!(
            SearchAlgorithm::from(AlgorithmArg::Dijkstra),
            SearchAlgorithm::Dijkstra
        );
        assert_eq!(SearchAlgorithm::from(AlgorithmArg::Dial), SearchAlgorithm::Dial);
    }

    #[test]
    fn unreachable_maps_to_fixed_diagnostic() {
        let error = run("1 3 1 0 1 0 0 0 2", &RouteCommandArgs::default()).unwrap_err();
        assert_eq!(diagnostic_for(&error), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn malformed_input_maps_to_invalid_input() {
        let error = run("2 2 1 1", &RouteCommandArgs::default()).unwrap_err();
        assert_eq!(diagnostic_for(&error), INVALID_INPUT_MESSAGE);

        let error = run("2 2 1 1 1 1 0 0 2 0", &RouteCommandArgs::default()).unwrap_err();
        assert_eq!(diagnostic_for(&error), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn non_utf8_input_maps_to_invalid_input() {
        let mut out = Vec::new();
        let stdin: &[u8] = &[0x31, 0x20, 0xff];
        let error =
            handle_route_command(&RouteCommandArgs::default(), stdin, &mut out).unwrap_err();
        assert_eq!(diagnostic_for(&error), INVALID_INPUT_MESSAGE);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file_reports_io_context() {
        let args = RouteCommandArgs {
            input: Some(PathBuf::from("/nonexistent/gridroute/problem.txt")),
            ..RouteCommandArgs::default()
        };
        let error = run("", &args).unwrap_err();
        assert!(diagnostic_for(&error).starts_with("failed to open problem file"));
    }

    #[test]
    fn dash_reads_standard_input() {
        let args = RouteCommandArgs {
            input: Some(PathBuf::from("-")),
            ..RouteCommandArgs::default()
        };
        assert_eq!(run("1 1 5 0 0 0 0", &args).unwrap(), "0 0\n.\n");
    }
}
