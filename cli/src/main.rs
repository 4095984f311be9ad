mod tui;

use anyhow::Result;
use clap::Parser;
use taskpad_core::{AddOutcome, StoreHandle};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "An in-memory to-do list for the terminal", long_about = None)]
struct Cli {
    /// Task titles to preload into the list before the UI opens
    tasks: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = StoreHandle::new();

    for title in &cli.tasks {
        if store.add_task(title) == AddOutcome::DuplicateTitle {
            eprintln!("Warning: skipping duplicate task '{}'", title);
        }
    }

    tui::run(store)
}
