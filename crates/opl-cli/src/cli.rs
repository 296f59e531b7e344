use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "opl",
    about = "Overdrive Progression Ledger — player stats and session history",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Store document; created on first write.
    #[arg(long, global = true, default_value = "overdrive.json")]
    pub data: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a player's progression (creates a guest record on first use)
    Stats(StatsArgs),
    /// Record a completed play session and credit its rewards
    Session(SessionArgs),
    /// Register a new player profile
    Signup(SignupArgs),
    /// List the retained session history
    Log(LogArgs),
    /// Show the current standings
    Leaderboard(LeaderboardArgs),
    /// Start the progression HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct StatsArgs {
    pub player_id: String,
}

#[derive(Args)]
pub struct SessionArgs {
    pub player_id: String,

    /// Session category label (street_race, delivery, free_roam, ...)
    #[arg(long, default_value = "free_roam")]
    pub session_type: String,

    #[arg(long, default_value = "0")]
    pub score: f64,

    #[arg(long, default_value = "0")]
    pub duration_secs: f64,

    #[arg(long, default_value = "0")]
    pub money: f64,

    #[arg(long, default_value = "0")]
    pub reputation: f64,
}

#[derive(Args)]
pub struct SignupArgs {
    pub username: String,
    pub email: String,

    /// Caller-assigned id; minted when omitted.
    #[arg(long)]
    pub player_id: Option<String>,
}

#[derive(Args)]
pub struct LogArgs {
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

#[derive(Args)]
pub struct LeaderboardArgs {}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:8420")]
    pub bind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stats() {
        let cli = Cli::try_parse_from(["opl", "stats", "p1"]).unwrap();
        if let Command::Stats(args) = cli.command {
            assert_eq!(args.player_id, "p1");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_session_with_rewards() {
        let cli = Cli::try_parse_from([
            "opl", "session", "p1", "--session-type", "street_race", "--score", "1500",
            "--money", "200", "--reputation", "30",
        ])
        .unwrap();
        if let Command::Session(args) = cli.command {
            assert_eq!(args.session_type, "street_race");
            assert_eq!(args.score, 1500.0);
            assert_eq!(args.money, 200.0);
            assert_eq!(args.reputation, 30.0);
            assert_eq!(args.duration_secs, 0.0);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_signup_minted_id() {
        let cli =
            Cli::try_parse_from(["opl", "signup", "Nova", "nova@example.com"]).unwrap();
        if let Command::Signup(args) = cli.command {
            assert_eq!(args.username, "Nova");
            assert!(args.player_id.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_log_limit() {
        let cli = Cli::try_parse_from(["opl", "log", "-n", "5"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert_eq!(args.limit, 5);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_leaderboard() {
        let cli = Cli::try_parse_from(["opl", "leaderboard"]).unwrap();
        assert!(matches!(cli.command, Command::Leaderboard(_)));
    }

    #[test]
    fn parse_serve_bind() {
        let cli = Cli::try_parse_from(["opl", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, "0.0.0.0:8080");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_data_path() {
        let cli = Cli::try_parse_from(["opl", "--data", "/tmp/x.json", "leaderboard"]).unwrap();
        assert_eq!(cli.data, "/tmp/x.json");
    }

    #[test]
    fn data_path_defaults() {
        let cli = Cli::try_parse_from(["opl", "leaderboard"]).unwrap();
        assert_eq!(cli.data, "overdrive.json");
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["opl", "--format", "json", "leaderboard"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
