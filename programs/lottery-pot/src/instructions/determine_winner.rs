use anchor_lang::prelude::*;

use crate::error::LotteryPotError;
use crate::events::WinnerDetermined;
use crate::state::LotteryPot;
use crate::utils::randomness::RevealedRandomness;

/// Accounts required to draw a pot winner. Anyone may call it once the pot
/// has closed.
///
/// Ensures:
/// 1. The pot is past its close time, open and has participants.
/// 2. The randomness account is the one committed for this pot.
/// 3. The committed randomness has been revealed.
#[derive(Accounts)]
pub struct DetermineWinner<'info> {
    /// Account paying for any transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_determine_winner(ctx: Context<DetermineWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery_pot = &mut ctx.accounts.lottery_pot;

    lottery_pot.ensure_resolvable(clock.unix_timestamp)?;
    require!(
        lottery_pot.randomness_account != Pubkey::default(),
        LotteryPotError::RandomnessNotCommitted
    );
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        lottery_pot.randomness_account,
        LotteryPotError::IncorrectRandomnessAccount
    );

    let source = RevealedRandomness::reveal(&ctx.accounts.randomness_account_data, &clock)?;
    let winner = lottery_pot.determine_winner(clock.unix_timestamp, &source)?;

    msg!("Participants: {}", lottery_pot.live_participants());
    msg!("Winner: {}", winner);
    emit!(WinnerDetermined {
        pot: lottery_pot.key(),
        winner,
    });
    Ok(())
}
