use std::sync::Arc;

use colored::Colorize;

use opl_ledger::{PlayerRecord, ProgressionService, SessionInput};
use opl_server::{ProgressionServer, ServerConfig, GUEST_EMAIL, GUEST_USERNAME};
use opl_store::FileKeyValueStore;
use opl_types::PlayerId;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(&cli.data, args).await,
        Command::Stats(args) => cmd_stats(&open_service(&cli.data)?, args, &cli.format),
        Command::Session(args) => cmd_session(&open_service(&cli.data)?, args, &cli.format),
        Command::Signup(args) => cmd_signup(&open_service(&cli.data)?, args, &cli.format),
        Command::Log(args) => cmd_log(&open_service(&cli.data)?, args, &cli.format),
        Command::Leaderboard(_) => cmd_leaderboard(&open_service(&cli.data)?, &cli.format),
    }
}

fn open_service(data: &str) -> anyhow::Result<ProgressionService> {
    let store = FileKeyValueStore::open(data)?;
    Ok(ProgressionService::new(Arc::new(store)))
}

fn cmd_stats(
    service: &ProgressionService,
    args: StatsArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let id = PlayerId::new(args.player_id)?;
    let player = service.player_stats(&id, GUEST_USERNAME, GUEST_EMAIL)?;
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&player)?);
        return Ok(());
    }
    print_player(&player);
    Ok(())
}

fn cmd_session(
    service: &ProgressionService,
    args: SessionArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let input = SessionInput {
        player_id: PlayerId::new(args.player_id)?,
        session_type: args.session_type,
        score: args.score,
        duration_secs: args.duration_secs,
        money_earned: args.money,
        reputation_gained: args.reputation,
    };
    let outcome = service.complete_session(input)?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&outcome.session)?);
        return Ok(());
    }

    println!(
        "{} Session {} recorded ({})",
        "✓".green().bold(),
        outcome.session.id.short_id().yellow(),
        outcome.session.session_type
    );
    match outcome.player {
        Some(player) => print_player(&player),
        None => println!(
            "  {} no record for {}; session kept, rewards not credited",
            "!".yellow().bold(),
            outcome.session.player_id.to_string().bold()
        ),
    }
    Ok(())
}

fn cmd_signup(
    service: &ProgressionService,
    args: SignupArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let id = match args.player_id {
        Some(raw) => PlayerId::new(raw)?,
        None => PlayerId::generate(),
    };
    let player = service.signup(id, &args.username, &args.email)?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&player)?);
        return Ok(());
    }

    println!(
        "{} Registered {} ({})",
        "✓".green().bold(),
        player.username.bold(),
        player.id.to_string().cyan()
    );
    Ok(())
}

fn cmd_log(
    service: &ProgressionService,
    args: LogArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let sessions = service.session_history()?;
    let skip = sessions.len().saturating_sub(args.limit);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&sessions[skip..])?);
        return Ok(());
    }

    if sessions.is_empty() {
        println!("No sessions recorded.");
        return Ok(());
    }
    for session in &sessions[skip..] {
        println!(
            "{} {} {}  score {}  ${}  rep {}  {}s",
            session.id.short_id().yellow(),
            session.player_id.to_string().bold(),
            session.session_type.cyan(),
            session.score,
            session.money_earned,
            session.reputation_gained,
            session.duration_secs,
        );
    }
    Ok(())
}

fn cmd_leaderboard(service: &ProgressionService, format: &OutputFormat) -> anyhow::Result<()> {
    let board = service.leaderboard();

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("{}", "Overdrive City standings (sample data)".bold());
    for entry in &board {
        println!(
            "  {} {}  score {}  level {}  rep {}",
            format!("#{}", entry.rank).yellow().bold(),
            entry.username.bold(),
            entry.total_score,
            entry.level,
            entry.reputation,
        );
    }
    Ok(())
}

async fn cmd_serve(data: &str, args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind.parse()?,
        data_path: Some(data.into()),
    };
    ProgressionServer::new(config).serve().await?;
    Ok(())
}

fn print_player(player: &PlayerRecord) {
    println!("{} ({})", player.username.bold(), player.id.to_string().cyan());
    println!(
        "  Level {}  score {}  {} missions",
        player.level.to_string().yellow().bold(),
        player.total_score,
        player.missions_completed,
    );
    println!(
        "  ${}  rep {}  {} vehicles",
        player.money.to_string().green(),
        player.reputation,
        player.vehicles,
    );
    println!("  Playing since {}", player.created_at.format("%Y-%m-%d"));
}
