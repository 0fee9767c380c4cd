use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_LOAD: i32 = 2;
const EXIT_NOT_FOUND: i32 = 3;
const EXIT_BROWSER: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the leaderboard sorted by points (default if no subcommand)
    Board,
    /// Look up one participant's standing by profile URL
    Rank {
        /// Skills Boost profile URL, exactly as it appears in the roster
        profile: String,
    },
    /// Resolve a free-text query (names, facilitators, the program itself)
    Search {
        /// Query text; omit to list everyone
        query: Option<String>,
    },
    /// Open a participant's profile in browser by their rank number
    Open {
        /// Rank of the participant to open (1-based, as shown on the board)
        rank: usize,
    },
    /// Write a starter config file with all defaults spelled out
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "arcade-board")]
#[command(about = "Google Cloud Arcade cohort leaderboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/arcade-board/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the roster CSV (overrides the config)
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Board);
    let start_time = Instant::now();

    let mut log_builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    }
    log_builder.init();

    let config_path = cli.config.map(PathBuf::from);

    // Init writes a fresh config, so it must work before anything is loaded
    // or validated.
    if let Commands::Init = command {
        if let Err(e) = arcade_board::config::write_starter_config(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let mut config = match arcade_board::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Some(roster_path) = cli.roster {
        config.roster.path = roster_path;
    }

    // Validate config at startup
    if let Err(errors) = arcade_board::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Roster: {}", config.roster.path.display());
        eprintln!("Points per game: {}", config.scoring.points_per_game);
    }

    // Load the roster snapshot every command works from
    let store = arcade_board::roster::SnapshotStore::from_config(&config);
    let snapshot = match store.snapshot() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Roster error: {}", e);
            std::process::exit(EXIT_LOAD);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} participants", snapshot.participants().len());
    }

    // Route based on subcommand
    match command {
        Commands::Board => {
            let board = arcade_board::ranking::leaderboard(&snapshot);

            if cli.json {
                let payload = arcade_board::output::leaderboard_json(&board);
                println!("{}", arcade_board::output::render_json(&payload));
            } else {
                let use_colors = arcade_board::output::should_use_colors();
                println!(
                    "{}",
                    arcade_board::output::format_leaderboard(&board, use_colors)
                );
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} participants in {:?}",
                    board.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Rank { profile } => match arcade_board::ranking::rank_of(&snapshot, &profile) {
            Ok(standing) => {
                if cli.json {
                    let payload = arcade_board::output::standing_json(&standing);
                    println!("{}", arcade_board::output::render_json(&payload));
                } else {
                    let use_colors = arcade_board::output::should_use_colors();
                    println!(
                        "{}",
                        arcade_board::output::format_standing(&standing, use_colors)
                    );
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(EXIT_NOT_FOUND);
            }
        },
        Commands::Search { query } => {
            let query = query.unwrap_or_default();
            let resolver = arcade_board::search::Resolver::from_config(&config);
            let outcome = resolver.resolve(&query, &snapshot);

            if cli.json {
                // The JSON payload echoes the query the way it was matched,
                // lowercased.
                let payload = arcade_board::output::outcome_json(&query.to_lowercase(), &outcome);
                println!("{}", arcade_board::output::render_json(&payload));
            } else {
                let use_colors = arcade_board::output::should_use_colors();
                println!(
                    "{}",
                    arcade_board::output::format_outcome(&outcome, use_colors)
                );
            }
        }
        Commands::Open { rank } => {
            let board = arcade_board::ranking::leaderboard(&snapshot);

            // Validate rank bounds (1-based)
            if rank < 1 || rank > board.len() {
                eprintln!("Invalid rank {}. Must be between 1 and {}.", rank, board.len());
                std::process::exit(EXIT_NOT_FOUND);
            }

            let participant = board[rank - 1];
            if participant.profile.is_empty() {
                eprintln!("{} has no profile URL on file.", participant.name);
                std::process::exit(EXIT_NOT_FOUND);
            }

            if let Err(e) = arcade_board::browser::open_url(&participant.profile) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_BROWSER);
            }

            println!(
                "Opening {}'s profile in browser: {}",
                participant.name, participant.profile
            );
        }
        // Handled before config load
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
