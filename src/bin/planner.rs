use clap::{Parser, ValueEnum};
use courier::delivery::{
    compare_strategies_with_options, plan_all_with_options, AgentPlan, PlanReport, SolveOptions,
};
use courier::search::{search_engines::DEFAULT_MAX_DEPTH, HeuristicName, SearchEngineName, Verbosity};
use courier::Grid;
use itertools::Itertools;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// One line per agent, followed by its route.
    Text,
    /// A single JSON document with every report.
    Json,
}

#[derive(Parser)]
#[command(version)]
/// Route every agent of a delivery world to its nearest destination.
struct Cli {
    #[arg(help = "The world description file")]
    world: PathBuf,
    #[arg(
        help = "The search strategy to use (BFS, DFS, UCS, IDS, GREEDY, ASTAR)",
        short = 's',
        long = "strategy",
        id = "STRATEGY",
        value_parser = SearchEngineName::from_name,
        default_value = "UCS"
    )]
    strategy: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic used by GREEDY and ASTAR",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Manhattan
    )]
    heuristic: HeuristicName,
    #[arg(
        help = "The deepest limit IDS tries",
        long = "max-depth",
        id = "MAX_DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH
    )]
    max_depth: usize,
    #[arg(
        help = "Also run every strategy from the first agent to the first destination",
        long = "compare"
    )]
    compare: bool,
    #[arg(
        value_enum,
        help = "The output format",
        short = 'f',
        long = "format",
        id = "FORMAT",
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.verbosity.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from_path(&cli.world)?;
    info!(
        width = grid.width(),
        height = grid.height(),
        agents = grid.agents().len(),
        destinations = grid.destinations().len(),
        "world loaded"
    );

    let options = SolveOptions {
        max_depth: cli.max_depth,
        heuristic: cli.heuristic,
    };
    let plans = plan_all_with_options(&grid, cli.strategy, &options)?;
    let comparison = if cli.compare {
        compare_strategies_with_options(&grid, &options)?
    } else {
        vec![]
    };

    match cli.format {
        OutputFormat::Text => print_text(&grid, &plans, &comparison),
        OutputFormat::Json => {
            let document = serde_json::json!({
                "world": {
                    "width": grid.width(),
                    "height": grid.height(),
                    "stores": grid.stores(),
                    "destinations": grid.destinations(),
                    "agents": grid.agents(),
                    "tunnels": grid.tunnels(),
                },
                "strategy": cli.strategy,
                "plans": plans,
                "comparison": comparison,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}

fn print_text(grid: &Grid, plans: &[AgentPlan], comparison: &[PlanReport]) {
    println!("Grid: {}x{}", grid.width(), grid.height());
    println!("Stores: {}", grid.stores().iter().join(" "));
    println!("Destinations: {}", grid.destinations().iter().join(" "));
    println!("Agents: {}", grid.agents().iter().join(" "));
    println!(
        "Tunnels: {}",
        grid.tunnels()
            .iter()
            .map(|(a, b)| format!("{}<->{}", a, b))
            .join(" ")
    );

    for plan in plans {
        println!("Agent {} -> {} : {}", plan.agent.id, plan.goal, plan.report);
        if plan.report.is_success() {
            println!("  route: {}", plan.report.route.iter().join(" -> "));
        }
    }

    if !comparison.is_empty() {
        println!("Strategy comparison:");
        for report in comparison {
            println!("  {:<6} : {}", report.strategy, report);
        }
    }
}
