use anchor_lang::prelude::*;

use crate::events::PrizeWithdrawn;
use crate::state::LotteryPot;
use crate::utils::ledger;

/// Accounts required for the winner to collect the pool.
#[derive(Accounts)]
pub struct WinnerWithdraw<'info> {
    /// The drawn winner, receiving the lamports.
    #[account(mut)]
    pub winner: Signer<'info>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,
}

/// Pays the whole live pool to the winner. The pot is marked as paid before
/// any lamport moves.
pub fn process_winner_withdraw(ctx: Context<WinnerWithdraw>) -> Result<()> {
    let winner = ctx.accounts.winner.key();
    let prize = ctx.accounts.lottery_pot.winner_withdraw(winner)?;

    ledger::pay_out(
        &ctx.accounts.lottery_pot.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        prize,
    )?;

    msg!("Prize withdrawn: {} lamports", prize);
    emit!(PrizeWithdrawn {
        pot: ctx.accounts.lottery_pot.key(),
        winner,
        amount: prize,
    });
    Ok(())
}
