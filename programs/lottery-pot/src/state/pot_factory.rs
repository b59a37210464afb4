use anchor_lang::prelude::*;

use crate::constants::{MAX_POTS_PER_PAGE, POT_SEED};
use crate::error::LotteryPotError;
use crate::state::LotteryPot;

/// Registry of the pots a factory created. The factory is recorded as the
/// administrative owner of each of them.
///
/// Pots live at `[POT_SEED, factory, index]`, so the registry only keeps a
/// counter and derives the addresses on demand.
#[account]
#[derive(InitSpace, Debug)]
pub struct PotFactory {
    pub bump: u8,

    /// Wallet that initialized the factory.
    pub authority: Pubkey,

    /// Circuit breaker gating pot creation.
    pub enabled: bool,

    /// Pots created so far. Indices are never reused.
    pub pot_count: u64,
}

/// Address of the pot a factory created at `index`.
pub fn pot_address(factory: &Pubkey, index: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[POT_SEED, factory.as_ref(), index.to_le_bytes().as_ref()],
        &crate::ID,
    )
    .0
}

impl PotFactory {
    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            authority,
            enabled: true,
            pot_count: 0,
        }
    }

    /// Index the next created pot will occupy, also used in its PDA seeds.
    pub fn next_pot_index(&self) -> u64 {
        self.pot_count
    }

    /// Up to `MAX_POTS_PER_PAGE` pot addresses in creation order, starting at
    /// `start_index`. Empty past the last pot.
    pub fn lottery_pots(&self, factory: &Pubkey, start_index: u64) -> Vec<Pubkey> {
        let end = start_index
            .saturating_add(MAX_POTS_PER_PAGE as u64)
            .min(self.pot_count);
        (start_index..end)
            .map(|index| pot_address(factory, index))
            .collect()
    }

    /// Claims the next index for a new pot and returns it.
    pub fn register_pot(&mut self) -> Result<u64> {
        require!(self.enabled, LotteryPotError::FactoryDisabled);

        let index = self.pot_count;
        self.pot_count = index
            .checked_add(1)
            .ok_or(LotteryPotError::MathOverflow)?;
        Ok(index)
    }

    /// Checks that `caller` may flip the circuit breaker of `pot` through the
    /// factory at `factory`.
    pub fn authorize_pot_toggle(
        &self,
        factory: &Pubkey,
        caller: Pubkey,
        pot: &LotteryPot,
    ) -> Result<()> {
        require_keys_eq!(caller, self.authority, LotteryPotError::NotAuthorized);
        require_keys_eq!(
            pot.administrative_owner,
            *factory,
            LotteryPotError::PotNotRegistered
        );
        Ok(())
    }

    pub fn toggle_enabled(&mut self, caller: Pubkey) -> Result<bool> {
        require_keys_eq!(caller, self.authority, LotteryPotError::NotAuthorized);
        self.enabled = !self.enabled;
        Ok(self.enabled)
    }
}
