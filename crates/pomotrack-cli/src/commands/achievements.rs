use clap::Subcommand;
use pomotrack_core::storage::{load_stats, FileStatsStore};
use pomotrack_core::{progress_for, ACHIEVEMENTS};

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// All achievements with progress
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStatsStore::open()?;
    let stats = load_stats(&store);

    match action {
        AchievementsAction::List { json } => {
            if json {
                let rows: Vec<_> = ACHIEVEMENTS
                    .iter()
                    .map(|def| {
                        let progress = progress_for(&stats, def);
                        serde_json::json!({
                            "id": def.id,
                            "title": def.title,
                            "description": def.description,
                            "icon": def.icon,
                            "completed": stats.completed_achievements.contains(&def.id),
                            "current": progress.current,
                            "requirement": progress.requirement,
                            "ratio": progress.ratio,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for def in &ACHIEVEMENTS {
                    let progress = progress_for(&stats, def);
                    let mark = if stats.completed_achievements.contains(&def.id) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    println!(
                        "{mark} {} {} ({}/{}) - {}",
                        def.icon, def.title, progress.current, progress.requirement, def.description
                    );
                }
            }
        }
    }
    Ok(())
}
