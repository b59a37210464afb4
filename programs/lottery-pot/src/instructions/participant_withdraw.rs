use anchor_lang::prelude::*;

use crate::events::StakeWithdrawn;
use crate::state::LotteryPot;
use crate::utils::ledger;

/// Accounts required for a participant to take its stake back from a
/// disabled pot.
#[derive(Accounts)]
pub struct ParticipantWithdraw<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,
}

pub fn process_participant_withdraw(ctx: Context<ParticipantWithdraw>) -> Result<()> {
    let participant = ctx.accounts.participant.key();
    let refund = ctx.accounts.lottery_pot.participant_withdraw(participant)?;

    ledger::pay_out(
        &ctx.accounts.lottery_pot.to_account_info(),
        &ctx.accounts.participant.to_account_info(),
        refund,
    )?;

    msg!("Refunded {} lamports to {}", refund, participant);
    emit!(StakeWithdrawn {
        pot: ctx.accounts.lottery_pot.key(),
        participant,
        amount: refund,
    });
    Ok(())
}
