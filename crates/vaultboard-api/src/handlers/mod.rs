pub mod builders;
pub mod leaderboard;
pub mod vaults;

pub use builders::list_builders;
pub use leaderboard::{
    builders_board, challenge_board, export_challenge_board, migrations_board, vaults_board,
};
pub use vaults::list_vaults;
