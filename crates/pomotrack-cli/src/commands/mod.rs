pub mod achievements;
pub mod level;
pub mod stats;
