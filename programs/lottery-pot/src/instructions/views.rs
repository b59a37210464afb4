use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::state::{LotteryPot, PotFactory};

#[derive(Accounts)]
pub struct GetLotteryPots<'info> {
    #[account(
        seeds = [FACTORY_SEED, factory.authority.as_ref()],
        bump = factory.bump,
    )]
    pub factory: Account<'info, PotFactory>,
}

#[derive(Accounts)]
pub struct MyStake<'info> {
    pub participant: Signer<'info>,

    pub lottery_pot: Account<'info, LotteryPot>,
}

/// Returns one page of the pots the factory created, in creation order,
/// starting at `start_index`.
pub fn process_get_lottery_pots(ctx: Context<GetLotteryPots>, start_index: u64) -> Result<Vec<Pubkey>> {
    let factory = &ctx.accounts.factory;
    Ok(factory.lottery_pots(&factory.key(), start_index))
}

pub fn process_my_stake(ctx: Context<MyStake>) -> Result<u64> {
    Ok(ctx
        .accounts
        .lottery_pot
        .stake_of(&ctx.accounts.participant.key()))
}
