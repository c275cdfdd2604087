use clap::Parser;
use courier::search::{validate, DeliveryOperator, DeliveryProblem, Plan};
use courier::{Cost, Grid, Position};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version)]
/// Replay a plan on a delivery world and report its cost.
struct Cli {
    #[arg(help = "The world description file")]
    world: PathBuf,
    #[arg(help = "Start x coordinate")]
    start_x: i32,
    #[arg(help = "Start y coordinate")]
    start_y: i32,
    #[arg(help = "Goal x coordinate")]
    goal_x: i32,
    #[arg(help = "Goal y coordinate")]
    goal_y: i32,
    #[arg(help = "Comma separated operators, e.g. right,down,tunnel")]
    plan: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(cost) => {
            println!("Plan is valid, cost: {}", cost);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Plan is invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Cost, Box<dyn std::error::Error>> {
    let grid = Grid::from_path(&cli.world)?;
    let start = Position::new(cli.start_x, cli.start_y);
    let goal = Position::new(cli.goal_x, cli.goal_y);
    let problem = DeliveryProblem::new(&grid, start, goal)?;
    let plan: Plan<DeliveryOperator> = Plan::from_text(&cli.plan)?;
    Ok(validate(&plan, &problem)?)
}
