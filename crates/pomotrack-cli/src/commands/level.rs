use pomotrack_core::storage::{load_stats, FileStatsStore};
use pomotrack_core::{level_for, next_level_for};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStatsStore::open()?;
    let stats = load_stats(&store);

    let level = level_for(stats.total_points);
    println!("{} {} ({} points)", level.icon, level.title, stats.total_points);

    if let Some((next, remaining)) = next_level_for(stats.total_points) {
        println!("{remaining} points to {}", next.title);
    }
    Ok(())
}
