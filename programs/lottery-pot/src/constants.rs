pub const FACTORY_SEED: &[u8] = b"pot_factory";
pub const POT_SEED: &[u8] = b"lottery_pot";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Pot names double as a PDA seed for standalone pots, so they are capped at
/// the maximum seed length.
pub const MAX_NAME_LEN: usize = 32;

/// Distinct participants a single pot can track.
pub const MAX_PARTICIPANTS: usize = 64;

/// Pot addresses returned by one `get_lottery_pots` page. Bounded so a page
/// fits in the 1024 bytes of instruction return data.
pub const MAX_POTS_PER_PAGE: usize = 31;

/// Slots a committed randomness account has to be revealed in before anyone
/// may commit a replacement.
pub const RANDOMNESS_REVEAL_WINDOW_SLOTS: u64 = 150;
