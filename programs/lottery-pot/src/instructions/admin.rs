use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, FACTORY_SEED};
use crate::events::{EnabledToggled, FactoryInitialized};
use crate::state::{LotteryPot, PotFactory};

/// Accounts required to initialize a pot factory.
/// The signer becomes the factory authority.
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + PotFactory::INIT_SPACE,
        seeds = [FACTORY_SEED, payer.key().as_ref()],
        bump
    )]
    pub factory: Box<Account<'info, PotFactory>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to flip the factory circuit breaker.
#[derive(Accounts)]
pub struct ToggleFactoryEnabled<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED, factory.authority.as_ref()],
        bump = factory.bump,
    )]
    pub factory: Account<'info, PotFactory>,
}

/// Accounts required for a factory authority to flip the circuit breaker of
/// a pot the factory created.
#[derive(Accounts)]
pub struct ToggleLotteryPotEnabled<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [FACTORY_SEED, factory.authority.as_ref()],
        bump = factory.bump,
    )]
    pub factory: Account<'info, PotFactory>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,
}

/// Accounts required to flip the circuit breaker of a standalone pot.
#[derive(Accounts)]
pub struct TogglePotEnabled<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub lottery_pot: Account<'info, LotteryPot>,
}

pub fn process_initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
    let authority = ctx.accounts.payer.key();
    ctx.accounts
        .factory
        .set_inner(PotFactory::new(authority, ctx.bumps.factory));

    msg!("Factory initialized for {}", authority);
    emit!(FactoryInitialized {
        factory: ctx.accounts.factory.key(),
        authority,
    });
    Ok(())
}

pub fn process_toggle_factory_enabled(ctx: Context<ToggleFactoryEnabled>) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    let enabled = factory.toggle_enabled(ctx.accounts.authority.key())?;

    msg!("Factory enabled: {}", enabled);
    emit!(EnabledToggled {
        target: factory.key(),
        enabled,
    });
    Ok(())
}

/// The pot checks the factory account as its administrative owner, so the
/// external signer only has to be the factory authority.
pub fn process_toggle_lottery_pot_enabled(ctx: Context<ToggleLotteryPotEnabled>) -> Result<()> {
    let factory = &ctx.accounts.factory;
    let lottery_pot = &mut ctx.accounts.lottery_pot;

    factory.authorize_pot_toggle(&factory.key(), ctx.accounts.authority.key(), lottery_pot)?;
    let enabled = lottery_pot.toggle_enabled(factory.key())?;

    msg!("Pot {} enabled: {}", lottery_pot.key(), enabled);
    emit!(EnabledToggled {
        target: lottery_pot.key(),
        enabled,
    });
    Ok(())
}

pub fn process_toggle_pot_enabled(ctx: Context<TogglePotEnabled>) -> Result<()> {
    let lottery_pot = &mut ctx.accounts.lottery_pot;
    let enabled = lottery_pot.toggle_enabled(ctx.accounts.authority.key())?;

    msg!("Pot {} enabled: {}", lottery_pot.key(), enabled);
    emit!(EnabledToggled {
        target: lottery_pot.key(),
        enabled,
    });
    Ok(())
}
