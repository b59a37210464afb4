use anchor_lang::prelude::*;

use crate::events::ParticipantJoined;
use crate::state::LotteryPot;
use crate::utils::ledger;

/// Accounts required to stake into a pot.
/// The payer funds the stake; the credited participant may be someone else.
#[derive(Accounts)]
pub struct Participate<'info> {
    /// The account paying for the stake.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,

    pub system_program: Program<'info, System>,
}

/// Stakes `amount` lamports into the pot and credits them to `beneficiary`.
///
/// Both the self-stake and the on-behalf-of stake go through here.
pub fn process_participate(
    ctx: Context<Participate>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    let newly_enrolled =
        ctx.accounts
            .lottery_pot
            .participate(beneficiary, amount, clock.unix_timestamp)?;
    ledger::deposit(
        &ctx.accounts.system_program,
        &ctx.accounts.payer,
        ctx.accounts.lottery_pot.to_account_info(),
        amount,
    )?;

    let lottery_pot = &ctx.accounts.lottery_pot;
    msg!(
        "{} staked {} (new participant: {}), pot total {}",
        beneficiary,
        amount,
        newly_enrolled,
        lottery_pot.total_stake
    );
    emit!(ParticipantJoined {
        pot: lottery_pot.key(),
        participant: beneficiary,
        amount,
    });
    Ok(())
}
