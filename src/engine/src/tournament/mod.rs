pub mod result;
pub mod setup;
pub mod tournament;

pub use result::{Stage, TournamentResult};
pub use setup::{TournamentSetup, GROUP_COUNT, GROUP_SIZE};
pub use tournament::simulate_tournament;
