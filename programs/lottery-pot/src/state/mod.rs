pub mod lottery_pot;
pub mod pot_factory;

pub use lottery_pot::*;
pub use pot_factory::*;
