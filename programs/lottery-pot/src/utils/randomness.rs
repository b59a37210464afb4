use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::LotteryPotError;

/// Entropy consumed by a pot draw.
pub trait RandomnessSource {
    /// Returns a value in `[0, bound)`.
    fn draw(&self, bound: u128) -> Result<u128>;
}

/// A value revealed by a Switchboard on-demand randomness account.
pub struct RevealedRandomness {
    value: [u8; 32],
}

impl RevealedRandomness {
    pub fn new(value: [u8; 32]) -> Self {
        Self { value }
    }

    /// Reads the revealed value, failing until the oracle has revealed it.
    pub fn reveal(randomness_account: &AccountInfo, clock: &Clock) -> Result<Self> {
        let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
            .map_err(|_| LotteryPotError::IncorrectRandomnessAccount)?;
        let value = randomness_data
            .get_value(clock)
            .map_err(|_| LotteryPotError::RandomnessNotResolved)?;

        msg!("Randomness result: {}", value[0]);
        Ok(Self::new(value))
    }
}

impl RandomnessSource for RevealedRandomness {
    fn draw(&self, bound: u128) -> Result<u128> {
        require!(bound > 0, LotteryPotError::NoParticipants);

        let mut word = [0u8; 16];
        word.copy_from_slice(&self.value[..16]);
        Ok(u128::from_le_bytes(word) % bound)
    }
}

/// Slot a randomness account was seeded in.
pub fn seed_slot(randomness_account: &AccountInfo) -> Result<u64> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| LotteryPotError::IncorrectRandomnessAccount)?;
    Ok(randomness_data.seed_slot)
}
