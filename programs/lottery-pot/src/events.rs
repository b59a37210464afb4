use anchor_lang::prelude::*;

// --- FACTORY ---
#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct PotCreated {
    pub pot: Pubkey,
    pub administrative_owner: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub close_time: i64,
    /// Lamports the creator staked as its first participation, `0` if none.
    pub creator_stake: u64,
}

/// Emitted for both pot and factory circuit breakers.
#[event]
pub struct EnabledToggled {
    pub target: Pubkey,
    pub enabled: bool,
}

// --- POT LIFECYCLE ---
#[event]
pub struct ParticipantJoined {
    pub pot: Pubkey,
    pub participant: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RandomnessCommitted {
    pub pot: Pubkey,
    pub randomness_account: Pubkey,
}

#[event]
pub struct WinnerDetermined {
    pub pot: Pubkey,
    pub winner: Pubkey,
}

// --- PAYOUTS ---
#[event]
pub struct PrizeWithdrawn {
    pub pot: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct StakeWithdrawn {
    pub pot: Pubkey,
    pub participant: Pubkey,
    pub amount: u64,
}
