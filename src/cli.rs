use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "game-day league manager")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create the database schema
    Init {
        /// Drop all existing data first
        #[arg(long)]
        reset: bool,
    },
    /// Manage teams
    Team {
        #[clap(subcommand)]
        action: TeamCommand,
    },
    /// Manage game days
    Day {
        #[clap(subcommand)]
        action: DayCommand,
    },
    /// Generate the balanced bracket for an open game day
    Schedule {
        /// Game day id
        game_day: String,
    },
    /// Show how many matches fit in the time window
    Stats {
        /// Count matches already on this game day
        #[arg(long)]
        game_day: Option<String>,
    },
    /// Manage matches
    Match {
        #[clap(subcommand)]
        action: MatchCommand,
    },
    /// Show the league table
    Standings {
        /// Limit the table to one game day
        #[arg(long)]
        game_day: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or correct cumulative team totals
    Results {
        #[clap(subcommand)]
        action: Option<ResultsCommand>,
    },
    /// Line up teams by hand for the next matches
    Queue {
        #[clap(subcommand)]
        action: QueueCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum TeamCommand {
    /// Register a team
    Add {
        name: String,
        #[arg(long, default_value = "#000000")]
        primary: String,
        #[arg(long, default_value = "#FFFFFF")]
        secondary: String,
    },
    /// List teams
    List,
    /// Show a team with its cumulative totals
    Show { id: String },
    /// Delete a team and its matches
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum DayCommand {
    /// Open a new game day dated now
    Start {
        /// Match length in minutes (1-120)
        #[arg(short, long)]
        duration: Option<u32>,
    },
    /// Record a closed game day for a past date
    Create {
        /// Date as YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(long)]
        date: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        duration: Option<u32>,
    },
    /// Close a game day and crown its champion
    Close { id: String },
    /// List game days, newest first
    List,
    /// Show the open game day
    Open,
    /// Show a game day with its matches
    Show { id: String },
    /// Show the leader of a game day's table
    Champion { id: String },
    /// Delete a game day and its matches
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum MatchCommand {
    /// Add a single match to an open game day
    Add {
        game_day: String,
        team1: String,
        team2: String,
    },
    /// Kick off a scheduled match
    Start { id: String },
    /// Update the live score
    Goals {
        id: String,
        goals_team1: u32,
        goals_team2: u32,
    },
    /// Final whistle: store the score and credit both teams
    Finish {
        id: String,
        goals_team1: u32,
        goals_team2: u32,
    },
    /// Create the next match from a finished one, swapping one team
    Replace {
        id: String,
        #[arg(long = "out")]
        team_out: String,
        #[arg(long = "in")]
        team_in: String,
    },
    /// Show a single match
    Show { id: String },
    /// Delete a match
    Delete { id: String },
    /// List matches
    List {
        #[arg(long)]
        game_day: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum ResultsCommand {
    /// Overwrite a team's cumulative totals
    Set {
        team: String,
        #[arg(long)]
        points: u32,
        #[arg(long)]
        goals_scored: u32,
        #[arg(long)]
        goals_conceded: u32,
    },
    /// Zero every team's totals
    Reset,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum QueueCommand {
    /// Show the queue of a game day
    Show { game_day: String },
    /// Append teams, skipping those already queued
    Add {
        game_day: String,
        #[arg(required = true, num_args = 1..)]
        teams: Vec<String>,
    },
    /// Take a team out of the queue
    Remove { game_day: String, team: String },
    /// Replace the queue with the given order; no teams clears it
    Order {
        game_day: String,
        #[arg(num_args = 0..)]
        teams: Vec<String>,
    },
    /// Empty the queue
    Clear { game_day: String },
}
