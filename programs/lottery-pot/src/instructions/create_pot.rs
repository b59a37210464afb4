use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, FACTORY_SEED, POT_SEED};
use crate::error::LotteryPotError;
use crate::events::PotCreated;
use crate::state::{LotteryPot, PotConfig, PotFactory, PotType};
use crate::utils::ledger;

/// Accounts required to open a standalone pot. The signer becomes both the
/// creator and the administrative owner.
#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializePot<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = DISCRIMINATOR_SIZE + LotteryPot::INIT_SPACE,
        seeds = [POT_SEED, owner.key().as_ref(), name.as_bytes()],
        bump
    )]
    pub lottery_pot: Box<Account<'info, LotteryPot>>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to open a pot through a factory.
///
/// The pot address is derived from the factory and the index the pot will
/// take in the factory registry.
#[derive(Accounts)]
pub struct CreateLotteryPot<'info> {
    /// The wallet creating the pot and paying for the account.
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED, factory.authority.as_ref()],
        bump = factory.bump,
    )]
    pub factory: Box<Account<'info, PotFactory>>,

    #[account(
        init,
        payer = creator,
        space = DISCRIMINATOR_SIZE + LotteryPot::INIT_SPACE,
        seeds = [POT_SEED, factory.key().as_ref(), factory.next_pot_index().to_le_bytes().as_ref()],
        bump
    )]
    pub lottery_pot: Box<Account<'info, LotteryPot>>,

    pub system_program: Program<'info, System>,
}

/// Opens a standalone pot closing at the absolute `close_time`.
///
/// # Arguments
/// * `ctx` - Context holding the InitializePot accounts
/// * `name` - Display name, also part of the pot address
/// * `close_time` - UNIX timestamp closing participation
/// * `min_stake` - Minimum first stake in lamports
/// * `pot_type` - Winner-weighting policy
/// * `creator_stake` - Lamports the owner stakes right away, `0` for none
pub fn process_initialize_pot(
    ctx: Context<InitializePot>,
    name: String,
    close_time: i64,
    min_stake: u64,
    pot_type: PotType,
    creator_stake: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let pot = LotteryPot::new(
        PotConfig {
            name,
            pot_type,
            min_stake,
            close_time,
            administrative_owner: owner,
            creator: owner,
        },
        clock.unix_timestamp,
        ctx.bumps.lottery_pot,
    )?;
    ctx.accounts.lottery_pot.set_inner(pot);

    open_with_creator_stake(
        &ctx.accounts.system_program,
        &ctx.accounts.owner,
        &mut ctx.accounts.lottery_pot,
        creator_stake,
        clock.unix_timestamp,
    )
}

/// Opens a pot owned by the factory, closing `duration` seconds from now.
///
/// Steps performed:
/// 1. Claim the next pot index in the factory (fails while the factory is disabled).
/// 2. Initialize the pot with the factory as administrative owner.
/// 3. Stake `creator_stake` on behalf of the creator, if nonzero.
pub fn process_create_lottery_pot(
    ctx: Context<CreateLotteryPot>,
    name: String,
    duration: i64,
    min_stake: u64,
    pot_type: PotType,
    creator_stake: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    require!(duration > 0, LotteryPotError::InvalidCloseTime);
    let close_time = clock
        .unix_timestamp
        .checked_add(duration)
        .ok_or(LotteryPotError::MathOverflow)?;

    let factory_key = ctx.accounts.factory.key();
    let pot_key = ctx.accounts.lottery_pot.key();
    let pot_index = ctx.accounts.factory.register_pot()?;

    let pot = LotteryPot::new(
        PotConfig {
            name,
            pot_type,
            min_stake,
            close_time,
            administrative_owner: factory_key,
            creator: ctx.accounts.creator.key(),
        },
        clock.unix_timestamp,
        ctx.bumps.lottery_pot,
    )?;
    ctx.accounts.lottery_pot.set_inner(pot);

    msg!(
        "Factory {} registered pot #{}: {}",
        factory_key,
        pot_index,
        pot_key
    );

    open_with_creator_stake(
        &ctx.accounts.system_program,
        &ctx.accounts.creator,
        &mut ctx.accounts.lottery_pot,
        creator_stake,
        clock.unix_timestamp,
    )
}

fn open_with_creator_stake<'info>(
    system_program: &Program<'info, System>,
    creator: &Signer<'info>,
    lottery_pot: &mut Account<'info, LotteryPot>,
    creator_stake: u64,
    now: i64,
) -> Result<()> {
    lottery_pot.seed_creator_stake(creator_stake, now)?;
    if creator_stake > 0 {
        ledger::deposit(
            system_program,
            creator,
            lottery_pot.to_account_info(),
            creator_stake,
        )?;
    }

    msg!(
        "Pot {} open until {}, min stake {}",
        lottery_pot.name,
        lottery_pot.close_time,
        lottery_pot.min_stake
    );
    emit!(PotCreated {
        pot: lottery_pot.key(),
        administrative_owner: lottery_pot.administrative_owner,
        creator: creator.key(),
        name: lottery_pot.name.clone(),
        close_time: lottery_pot.close_time,
        creator_stake,
    });
    Ok(())
}
