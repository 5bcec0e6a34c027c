use anyhow::Result;

use gameday_league::cli::Command;
use gameday_league::{
    handle_day, handle_init, handle_match, handle_queue, handle_results, handle_schedule, handle_standings, handle_stats,
    handle_team, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init { reset } => handle_init(*reset),
        Command::Team { action } => handle_team(action),
        Command::Day { action } => handle_day(action),
        Command::Schedule { game_day } => handle_schedule(game_day),
        Command::Stats { game_day } => handle_stats(game_day.as_deref()),
        Command::Match { action } => handle_match(action),
        Command::Standings { game_day, json } => handle_standings(game_day.as_deref(), *json),
        Command::Results { action } => handle_results(action.as_ref()),
        Command::Queue { action } => handle_queue(action),
    }
}
