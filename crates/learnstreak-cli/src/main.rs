use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "learnstreak", version, about = "Daily learning streak tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive progress board driven by commands on stdin
    Session(commands::session::SessionArgs),
    /// Freeze allowance for a timeframe label
    Allowance {
        /// Timeframe label (week, month, year; anything else uses the fallback)
        timeframe: String,
    },
    /// Print the 7-day strip
    Week {
        /// First day of the strip (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<String>,
    },
    /// Print the display strings for a date
    Format {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    // RUST_LOG=debug shows guard rejections; logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session(args) => commands::session::run(args),
        Commands::Allowance { timeframe } => commands::calendar::allowance(&timeframe),
        Commands::Week { start } => commands::calendar::week(start.as_deref()),
        Commands::Format { date } => commands::calendar::format(date.as_deref()),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "learnstreak", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
