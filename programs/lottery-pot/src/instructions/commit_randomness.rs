use anchor_lang::prelude::*;

use crate::error::LotteryPotError;
use crate::events::RandomnessCommitted;
use crate::state::LotteryPot;
use crate::utils::randomness;

/// Accounts required to commit a randomness account for a pot draw.
///
/// Ensures:
/// 1. The pot is closed for participation and not yet resolved.
/// 2. No randomness account was committed before.
/// 3. The randomness account was seeded in the previous slot, so its value
///    is not known yet.
#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    /// The account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery_pot = &mut ctx.accounts.lottery_pot;
    let randomness_account = ctx.accounts.randomness_account_data.key();

    lottery_pot.commit_randomness(randomness_account, clock.unix_timestamp, clock.slot)?;

    let seed_slot = randomness::seed_slot(&ctx.accounts.randomness_account_data)?;
    if seed_slot != clock.slot.saturating_sub(1) {
        msg!("Current slot: {}", clock.slot);
        msg!("Seed slot: {}", seed_slot);
        return err!(LotteryPotError::RandomnessAlreadyRevealed);
    }

    msg!("Pot {} committed to {}", lottery_pot.key(), randomness_account);
    emit!(RandomnessCommitted {
        pot: lottery_pot.key(),
        randomness_account,
    });
    Ok(())
}
