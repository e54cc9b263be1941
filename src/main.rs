//! Binary entry point that glues the SQLite-backed repository to the command
//! loop: resolve where the database lives, make sure the schema exists, and
//! read commands until the user exits.
use train_departures::{run, Repository, StorageConfig};

/// Initialize persistence and hand control to the interactive loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// an unwritable home directory) to the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let config = StorageConfig::from_home()?;
    let repo = Repository::open(config)?;
    run(&repo)
}
