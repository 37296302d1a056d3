use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use budget_planner::cli::Shell;
use budget_planner::config::{LedgerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Interactive in-memory expense tracker",
    long_about = "Budget Planner keeps a list of expenses in memory, totals them \
                  per category and redraws the table after every change. \
                  Nothing is saved when the session ends."
)]
struct Cli {
    /// Maximum number of expenses (overrides the settings file)
    #[arg(long, env = "BUDGET_PLANNER_MAX_RECORDS")]
    max_records: Option<usize>,

    /// Maximum number of category totals (overrides the settings file)
    #[arg(long, env = "BUDGET_PLANNER_MAX_CATEGORIES", conflicts_with = "unbounded_categories")]
    max_categories: Option<usize>,

    /// Keep a total for every category, however many there are
    #[arg(long)]
    unbounded_categories: bool,

    /// Currency symbol used when rendering amounts
    #[arg(long)]
    currency: Option<String>,

    /// Write the effective settings to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Show the settings file location and effective limits, then exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)
        .with_context(|| format!("loading {}", paths.settings_file().display()))?;

    if let Some(max) = cli.max_records {
        settings.max_records = max;
    }
    if let Some(max) = cli.max_categories {
        settings.max_categories = Some(max);
    }
    if cli.unbounded_categories {
        settings.max_categories = None;
    }
    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }
    settings.validate()?;
    debug!(?settings, "effective settings");

    if cli.save_settings {
        settings.save(&paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
    }

    if cli.show_config {
        println!("Budget Planner Configuration");
        println!("============================");
        println!("Settings file:   {}", paths.settings_file().display());
        println!("Max expenses:    {}", settings.max_records);
        match settings.max_categories {
            Some(max) => println!("Max categories:  {}", max),
            None => println!("Max categories:  unlimited"),
        }
        match settings.max_field_chars {
            Some(max) => println!("Max field chars: {}", max),
            None => println!("Max field chars: unlimited"),
        }
        println!("Currency symbol: {}", settings.currency_symbol);
        println!("Favorite:        {}", settings.favorite_category);
        return Ok(());
    }

    let mut shell = Shell::new(&settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
