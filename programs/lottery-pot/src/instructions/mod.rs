pub mod admin;
pub mod commit_randomness;
pub mod create_pot;
pub mod determine_winner;
pub mod participant_withdraw;
pub mod participate;
pub mod views;
pub mod winner_withdraw;

pub use admin::*;
pub use commit_randomness::*;
pub use create_pot::*;
pub use determine_winner::*;
pub use participant_withdraw::*;
pub use participate::*;
pub use views::*;
pub use winner_withdraw::*;
