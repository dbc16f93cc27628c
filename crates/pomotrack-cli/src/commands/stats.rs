use clap::Subcommand;
use pomotrack_core::storage::{load_stats, update_stats, FileStatsStore};
use pomotrack_core::SessionEvent;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current snapshot
    Show,
    /// Record a completed session (pomodoro or break)
    Record {
        /// Event type: pomodoro | break
        event: String,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show => {
            let store = FileStatsStore::open()?;
            let stats = load_stats(&store);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Record { event } => {
            // Reject bad event names before touching the store.
            let event: SessionEvent = event.parse()?;
            let store = FileStatsStore::open()?;
            let update = update_stats(&store, event)?;
            println!("{}", serde_json::to_string_pretty(&update)?);
        }
    }
    Ok(())
}
