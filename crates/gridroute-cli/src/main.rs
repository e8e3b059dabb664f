use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridroute_cli::commands::route::{
    diagnostic_for, handle_route_command, AlgorithmArg, RouteCommandArgs,
};
use gridroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cheapest path across a weighted grid using a bucket queue"
)]
struct Cli {
    /// Read the problem from this file instead of standard input ("-" for stdin).
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Search algorithm to run.
    #[arg(long, short = 'a', value_enum, default_value_t = AlgorithmArg::Dial)]
    algorithm: AlgorithmArg,

    /// Output format for the path.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Basic)]
    format: OutputFormat,
}

impl Cli {
    fn route_args(&self) -> RouteCommandArgs {
        RouteCommandArgs {
            input: self.input.clone(),
            algorithm: self.algorithm,
            format: self.format,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("route command failed: {error:?}");
            eprintln!("{}", diagnostic_for(&error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    handle_route_command(&cli.route_args(), stdin, &mut stdout)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
