pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod report;
pub mod scheduling;
pub mod services;
pub mod standings;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::Parser;
use cli::Cli;
use log::info;
use uuid::Uuid;

use crate::cli::{Command, DayCommand, MatchCommand, QueueCommand, ResultsCommand, TeamCommand};
use crate::config::settings::AppConfig;
use crate::database::DbPool;
use crate::domain::validation::parse_id;
use crate::services::{GameDayService, MatchService, QueueService, SchedulingService, StandingsService, TeamService};
use crate::standings::Scope;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Opens the configured database, creating the schema on first use.
fn connect(config: &AppConfig) -> Result<DbPool> {
    let pool = database::create_pool(&config.database_path)
        .with_context(|| format!("Failed to open database at {}", config.database_path))?;
    let conn = database::get_connection(&pool)?;
    database::setup::initialize_database(&conn).context("Failed to initialize schema")?;
    Ok(pool)
}

fn load_config() -> Result<AppConfig> {
    AppConfig::from_env().context("Invalid configuration")
}

pub fn handle_init(reset: bool) -> Result<()> {
    let config = load_config()?;
    let pool = database::create_pool(&config.database_path)?;
    let conn = database::get_connection(&pool)?;

    if reset {
        database::setup::reset_database(&conn).context("Failed to reset database")?;
        info!("Database {} reset", config.database_path);
    } else {
        database::setup::initialize_database(&conn).context("Failed to initialize schema")?;
        info!("Database {} ready", config.database_path);
    }
    Ok(())
}

pub fn handle_team(action: &TeamCommand) -> Result<()> {
    let config = load_config()?;
    let service = TeamService::new(connect(&config)?);

    match action {
        TeamCommand::Add {
            name,
            primary,
            secondary,
        } => {
            let team = service.create_team(name, primary, secondary)?;
            report::print_teams(std::slice::from_ref(&team));
        }
        TeamCommand::List => report::print_teams(&service.list_teams()?),
        TeamCommand::Show { id } => report::print_team_totals(&service.get_team(parse_id("team id", id)?)?),
        TeamCommand::Delete { id } => {
            let id = parse_id("team id", id)?;
            service.delete_team(id)?;
            println!("Deleted team {id}");
        }
    }
    Ok(())
}

pub fn handle_day(action: &DayCommand) -> Result<()> {
    let config = load_config()?;
    let pool = connect(&config)?;
    let service = GameDayService::new(pool.clone(), config);

    match action {
        DayCommand::Start { duration } => {
            let game_day = service.start_game_day(*duration)?;
            report::print_game_days(std::slice::from_ref(&game_day));
        }
        DayCommand::Create {
            date,
            description,
            duration,
        } => {
            let date = parse_date(date)?;
            let game_day = service.create_game_day(date, description.as_deref(), *duration)?;
            report::print_game_days(std::slice::from_ref(&game_day));
        }
        DayCommand::Close { id } => {
            let game_day = service.close_game_day(parse_id("game day id", id)?)?;
            let teams = TeamService::new(pool).list_teams()?;
            report::print_game_day_detail(&service.get_game_day(game_day.id)?, &teams);
            if let Some(snapshot) = service.final_standings(game_day.id)? {
                report::print_standings(&snapshot.standings);
            }
        }
        DayCommand::List => report::print_game_days(&service.list_game_days()?),
        DayCommand::Open => match service.open_game_day()? {
            Some(game_day) => {
                let teams = TeamService::new(pool).list_teams()?;
                report::print_game_day_detail(&service.get_game_day(game_day.id)?, &teams);
            }
            None => println!("No game day is open"),
        },
        DayCommand::Show { id } => {
            let detail = service.get_game_day(parse_id("game day id", id)?)?;
            let teams = TeamService::new(pool).list_teams()?;
            report::print_game_day_detail(&detail, &teams);
        }
        DayCommand::Champion { id } => {
            let id = parse_id("game day id", id)?;
            match service.champion_for_game_day(id)? {
                Some(team_id) => {
                    let team = TeamService::new(pool).get_team(team_id)?;
                    println!("Champion: {}", team.name);
                }
                None => println!("No champion: no points yet or the top is tied"),
            }
        }
        DayCommand::Delete { id } => {
            let id = parse_id("game day id", id)?;
            service.delete_game_day(id)?;
            println!("Deleted game day {id}");
        }
    }
    Ok(())
}

pub fn handle_schedule(game_day: &str) -> Result<()> {
    let config = load_config()?;
    let pool = connect(&config)?;
    let game_day_id = parse_id("game day id", game_day)?;

    let summary = SchedulingService::new(pool.clone(), config)
        .schedule_matches(game_day_id)
        .with_context(|| format!("Failed to schedule game day {game_day_id}"))?;
    let teams = TeamService::new(pool).list_teams()?;
    report::print_schedule_summary(&summary, &teams);
    Ok(())
}

pub fn handle_stats(game_day: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let pool = connect(&config)?;
    let game_day_id = game_day.map(|id| parse_id("game day id", id)).transpose()?;

    let stats = SchedulingService::new(pool, config).stats(game_day_id)?;
    report::print_stats(&stats);
    Ok(())
}

pub fn handle_match(action: &MatchCommand) -> Result<()> {
    let config = load_config()?;
    let pool = connect(&config)?;
    let service = MatchService::new(pool.clone());

    let updated = match action {
        MatchCommand::Add {
            game_day,
            team1,
            team2,
        } => service.create_match(
            parse_id("game day id", game_day)?,
            parse_id("team1 id", team1)?,
            parse_id("team2 id", team2)?,
        )?,
        MatchCommand::Start { id } => service.start_match(parse_id("match id", id)?)?,
        MatchCommand::Goals {
            id,
            goals_team1,
            goals_team2,
        } => service.update_goals(parse_id("match id", id)?, *goals_team1, *goals_team2)?,
        MatchCommand::Finish {
            id,
            goals_team1,
            goals_team2,
        } => service.finish_match(parse_id("match id", id)?, *goals_team1, *goals_team2)?,
        MatchCommand::Replace {
            id,
            team_out,
            team_in,
        } => service.replace_team(
            parse_id("match id", id)?,
            parse_id("outgoing team id", team_out)?,
            parse_id("incoming team id", team_in)?,
        )?,
        MatchCommand::Show { id } => service.get_match(parse_id("match id", id)?)?,
        MatchCommand::Delete { id } => {
            let id = parse_id("match id", id)?;
            service.delete_match(id)?;
            println!("Deleted match {id}");
            return Ok(());
        }
        MatchCommand::List { game_day } => {
            let game_day_id = game_day
                .as_deref()
                .map(|id| parse_id("game day id", id))
                .transpose()?;
            let matches = service.list_matches(game_day_id)?;
            let teams = TeamService::new(pool).list_teams()?;
            report::print_matches(&matches, &teams, None);
            return Ok(());
        }
    };

    let teams = TeamService::new(pool).list_teams()?;
    report::print_matches(std::slice::from_ref(&updated), &teams, None);
    Ok(())
}

pub fn handle_standings(game_day: Option<&str>, json: bool) -> Result<()> {
    let config = load_config()?;
    let service = StandingsService::new(connect(&config)?);

    let scope = match game_day {
        Some(id) => Scope::GameDay(parse_id("game day id", id)?),
        None => Scope::All,
    };
    let standings = service.standings(scope)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        report::print_standings(&standings);
    }
    Ok(())
}

pub fn handle_results(action: Option<&ResultsCommand>) -> Result<()> {
    let config = load_config()?;
    let service = StandingsService::new(connect(&config)?);

    match action {
        None => report::print_results(&service.results()?),
        Some(ResultsCommand::Set {
            team,
            points,
            goals_scored,
            goals_conceded,
        }) => {
            let team = service.set_team_totals(parse_id("team id", team)?, *points, *goals_scored, *goals_conceded)?;
            println!(
                "{}: {} pts, {} scored, {} conceded",
                team.name, team.points, team.goals_scored, team.goals_conceded
            );
        }
        Some(ResultsCommand::Reset) => {
            let count = service.reset_all()?;
            println!("Reset totals of {count} teams");
        }
    }
    Ok(())
}

pub fn handle_queue(action: &QueueCommand) -> Result<()> {
    let config = load_config()?;
    let pool = connect(&config)?;
    let service = QueueService::new(pool.clone());

    let queue = match action {
        QueueCommand::Show { game_day } => service.get_queue(parse_id("game day id", game_day)?)?,
        QueueCommand::Add { game_day, teams } => {
            service.add_teams(parse_id("game day id", game_day)?, &parse_ids("team id", teams)?)?
        }
        QueueCommand::Remove { game_day, team } => {
            service.remove_team(parse_id("game day id", game_day)?, parse_id("team id", team)?)?
        }
        QueueCommand::Order { game_day, teams } => {
            service.set_order(parse_id("game day id", game_day)?, &parse_ids("team id", teams)?)?
        }
        QueueCommand::Clear { game_day } => service.clear(parse_id("game day id", game_day)?)?,
    };

    let teams = TeamService::new(pool).list_teams()?;
    report::print_queue(&queue, &teams);
    Ok(())
}

fn parse_ids(field: &'static str, values: &[String]) -> Result<Vec<Uuid>> {
    let ids = values
        .iter()
        .map(|value| parse_id(field, value))
        .collect::<errors::Result<Vec<_>>>()?;
    Ok(ids)
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or RFC 3339.
fn parse_date(value: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").with_context(|| format!("Invalid date: {value}"))?;
    date.and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date: {value}"))
}
