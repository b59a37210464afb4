use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::LotteryPotError;

/// Moves `amount` lamports from a signing wallet into a pot account.
pub fn deposit<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: from.to_account_info(),
                to,
            },
        ),
        amount,
    )
}

/// Moves `amount` lamports out of a program-owned pot account. Bookkeeping
/// must already mark the funds as spent.
pub fn pay_out(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let remaining = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LotteryPotError::MathOverflow)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryPotError::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;

    Ok(())
}
