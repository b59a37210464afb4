#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use state::PotType;

declare_id!("5FQBX9RXMN72bFNMD7f7QruYaZhAfhAhNGeweYUQNs14");

#[program]
pub mod lottery_pot {
    use super::*;

    // --- FACTORY ---

    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        process_initialize_factory(ctx)
    }

    pub fn create_lottery_pot(
        ctx: Context<CreateLotteryPot>,
        name: String,
        duration: i64,
        min_stake: u64,
        pot_type: PotType,
        creator_stake: u64,
    ) -> Result<()> {
        process_create_lottery_pot(ctx, name, duration, min_stake, pot_type, creator_stake)
    }

    pub fn get_lottery_pots(ctx: Context<GetLotteryPots>, start_index: u64) -> Result<Vec<Pubkey>> {
        process_get_lottery_pots(ctx, start_index)
    }

    pub fn toggle_lottery_pot_enabled(ctx: Context<ToggleLotteryPotEnabled>) -> Result<()> {
        process_toggle_lottery_pot_enabled(ctx)
    }

    pub fn toggle_factory_enabled(ctx: Context<ToggleFactoryEnabled>) -> Result<()> {
        process_toggle_factory_enabled(ctx)
    }

    // --- POT ---

    pub fn initialize_pot(
        ctx: Context<InitializePot>,
        name: String,
        close_time: i64,
        min_stake: u64,
        pot_type: PotType,
        creator_stake: u64,
    ) -> Result<()> {
        process_initialize_pot(ctx, name, close_time, min_stake, pot_type, creator_stake)
    }

    pub fn participate(ctx: Context<Participate>, amount: u64) -> Result<()> {
        let beneficiary = ctx.accounts.payer.key();
        process_participate(ctx, beneficiary, amount)
    }

    /// Stake paid by the signer but credited to `beneficiary`.
    pub fn participate_for(
        ctx: Context<Participate>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        process_participate(ctx, beneficiary, amount)
    }

    pub fn my_stake(ctx: Context<MyStake>) -> Result<u64> {
        process_my_stake(ctx)
    }

    pub fn toggle_pot_enabled(ctx: Context<TogglePotEnabled>) -> Result<()> {
        process_toggle_pot_enabled(ctx)
    }

    // --- SETTLEMENT ---

    pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
        process_commit_randomness(ctx)
    }

    pub fn determine_winner(ctx: Context<DetermineWinner>) -> Result<()> {
        process_determine_winner(ctx)
    }

    pub fn winner_withdraw(ctx: Context<WinnerWithdraw>) -> Result<()> {
        process_winner_withdraw(ctx)
    }

    pub fn participant_withdraw(ctx: Context<ParticipantWithdraw>) -> Result<()> {
        process_participant_withdraw(ctx)
    }
}
