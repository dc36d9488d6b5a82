mod app;
mod domain;
mod import;
mod input;
mod logging;
mod notifications;
mod persistence;
mod selector;
mod store;
mod ticker;
mod timer;
mod ui;

use anyhow::{bail, Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{group_tasks, status_badge, TaskDraft};
use persistence::{
    ensure_dir, init_local_data_dir, load_config, resolve_data_dir, save_config, AppConfig,
    FileKvStore, CONFIG_FILE,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use selector::{SpinOutcome, ThreadRandom};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use store::TaskStore;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "roulette")]
#[command(about = "Spin for a task that fits the time you have, then beat the countdown", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .roulette directory, then ~/.roulette
    #[arg(long, global = true, env = "ROULETTE_DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .roulette directory in the current directory
    Init,
    /// Add a task
    Add {
        #[arg(short, long)]
        name: String,
        /// Minutes (decimals are floored)
        #[arg(short, long)]
        duration: String,
        #[arg(short, long)]
        location: String,
        #[arg(short, long)]
        group: Option<String>,
    },
    /// List tasks grouped by group
    List {
        /// Leave out completed tasks
        #[arg(long)]
        hide_done: bool,
    },
    /// Mark a task done (ID may be a unique prefix)
    Done { id: String },
    /// Delete a task (ID may be a unique prefix)
    Delete { id: String },
    /// Delete every task
    Wipe {
        /// Required; there is no undo
        #[arg(long)]
        yes: bool,
    },
    /// Import tasks from a CSV file (name,duration,location[,group])
    Import { file: PathBuf },
    /// Pick a random task that fits the given minutes
    Spin {
        minutes: String,
        #[arg(short, long)]
        location: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_tui(cli.dir.as_deref());
    };

    logging::init_stderr();

    if let Commands::Init = command {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let data_dir = init_local_data_dir(&cwd)?;
        save_config(data_dir.join(CONFIG_FILE), &AppConfig::default())?;
        println!("Initialized roulette directory: {}", data_dir.display());
        println!();
        println!("Roulette will now use this local directory for task storage.");
        println!("Run 'roulette' to start spinning.");
        return Ok(());
    }

    let data_dir = resolve_data_dir(cli.dir.as_deref())?;
    let mut store = open_store(&data_dir)?;

    match command {
        Commands::Init => Ok(()),
        Commands::Add {
            name,
            duration,
            location,
            group,
        } => {
            let draft = TaskDraft::new(name, duration, location, group.unwrap_or_default());
            let task = store.add(&draft)?;
            println!("Task added ✅ {} {}", task.short_id(), task.name);
            Ok(())
        }
        Commands::List { hide_done } => {
            if store.is_empty() {
                println!("No tasks yet. Add one with 'roulette add' or 'roulette import'.");
                return Ok(());
            }
            for (label, tasks) in group_tasks(store.list(hide_done)) {
                println!("{} ({})", label, tasks.len());
                for task in tasks {
                    println!(
                        "  {}  {}  ⏱ {} min  📍 {}  [{}]",
                        task.short_id(),
                        task.name,
                        task.duration,
                        task.location,
                        status_badge(task)
                    );
                }
            }
            Ok(())
        }
        Commands::Done { id } => {
            let id = resolve_task_id(&store, &id)?;
            if store.mark_done(id)? {
                println!("Done ✅");
            } else {
                println!("Already done.");
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let id = resolve_task_id(&store, &id)?;
            if let Some(task) = store.delete(id)? {
                println!("Deleted {}", task.name);
            }
            Ok(())
        }
        Commands::Wipe { yes } => {
            if !yes {
                bail!("Refusing to delete all tasks without --yes");
            }
            let removed = store.wipe_all(true)?;
            println!("Deleted {} task(s).", removed);
            Ok(())
        }
        Commands::Import { file } => {
            let summary = import::import_file(&mut store, &file)?;
            println!("{}", summary.message());
            Ok(())
        }
        Commands::Spin { minutes, location } => {
            let outcome = selector::spin(
                store.tasks(),
                selector::parse_minutes(&minutes),
                location.as_deref(),
                &mut ThreadRandom,
            );
            match outcome {
                SpinOutcome::Picked(task) => {
                    println!("🎯 {}", task.name);
                    println!("  ⏱ {} min  📍 {}", task.duration, task.location);
                    if let Some(group) = &task.group {
                        println!("  🧩 {}", group);
                    }
                    println!("  id: {}", task.short_id());
                }
                other => {
                    if let Some(message) = other.message() {
                        println!("{}", message);
                    }
                }
            }
            Ok(())
        }
    }
}

fn open_store(data_dir: &Path) -> Result<TaskStore> {
    ensure_dir(data_dir)?;
    Ok(TaskStore::open(Box::new(FileKvStore::new(data_dir))))
}

/// Resolve a full id or a unique prefix of one
fn resolve_task_id(store: &TaskStore, raw: &str) -> Result<Uuid> {
    let matches = store.find_by_prefix(raw);
    match matches.as_slice() {
        [task] => Ok(task.id),
        [] => bail!("No task matches '{}'", raw),
        _ => bail!("'{}' matches {} tasks; use a longer prefix", raw, matches.len()),
    }
}

fn run_tui(dir: Option<&Path>) -> Result<()> {
    let data_dir = resolve_data_dir(dir)?;
    ensure_dir(&data_dir)?;
    logging::init_file(&data_dir)?;
    info!(data_dir = %data_dir.display(), "starting roulette");

    // Show which directory we're using
    eprintln!("Using roulette directory: {}", data_dir.display());

    let config = load_config(data_dir.join(CONFIG_FILE)).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        AppConfig::default()
    });
    let store = open_store(&data_dir)?;
    let mut app = AppState::new(store, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
