use bodyfat_core::store::init_workbook;
use bodyfat_core::style::Palette;
use bodyfat_core::*;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bodyfat")]
#[command(about = "Jackson/Pollock 7-site body fat percent calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect measurements and calculate body fat (default)
    Run {
        /// Keep everything in memory instead of writing to the workbook
        #[arg(long)]
        dry_run: bool,
    },

    /// Create the workbook and its measurements and results tables
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        bodyfat_core::logging::init_with_level("debug");
    } else {
        bodyfat_core::logging::init();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(data_dir) = cli.data_dir {
        config.store.data_dir = data_dir;
    }
    if cli.no_color {
        config.display.color = false;
    }

    match cli.command {
        Some(Commands::Run { dry_run }) => cmd_run(&config, dry_run),
        Some(Commands::Init) => cmd_init(&config),
        None => {
            // Default to "run" command
            cmd_run(&config, false)
        }
    }
}

fn cmd_run(config: &Config, dry_run: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut collector = Collector::new(
        stdin.lock(),
        io::stdout(),
        Palette::new(config.display.color),
    );
    let today = || chrono::Local::now().date_naive();

    let completed = if dry_run {
        let store = MemoryWorkbook::with_tables([
            config.store.measurements_table.as_str(),
            config.store.results_table.as_str(),
        ]);
        let mut client = PersistenceClient::new(store, &config.store);
        let completed = run_session(&mut collector, &mut client, today)?;
        println!("\n[Dry run - nothing was written to the workbook]");
        completed
    } else {
        let store = CsvWorkbook::open(config.store.workbook_dir())?;
        let mut client = PersistenceClient::new(store, &config.store);
        run_session(&mut collector, &mut client, today)?
    };

    tracing::info!("Session finished after {} calculations", completed);
    Ok(())
}

fn cmd_init(config: &Config) -> Result<()> {
    let workbook = init_workbook(&config.store)?;

    println!("✓ Workbook ready at {}", workbook.dir().display());
    for table in [&config.store.measurements_table, &config.store.results_table] {
        println!("  {}", workbook.table_path(table).display());
    }

    Ok(())
}
