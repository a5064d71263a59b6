pub mod dungeon;
pub mod health;

pub use dungeon::solve_dungeon;
pub use health::health_check;
