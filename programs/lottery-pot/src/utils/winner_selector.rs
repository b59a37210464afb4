//! Weighted linear-scan draw over a pot's stakes.
//!
//! Each participant with a nonzero stake owns a half-open slice of
//! `[0, total_weight)` sized by its weight, laid out in entry order. The
//! participant whose slice contains the draw wins, so the result is a pure
//! function of the entries, the pot type and the draw.

use anchor_lang::prelude::*;

use crate::error::LotteryPotError;
use crate::state::{PotType, StakeEntry};
use crate::utils::randomness::RandomnessSource;

pub fn weight_of(entry: &StakeEntry, pot_type: PotType) -> u128 {
    if entry.amount == 0 {
        return 0;
    }
    match pot_type {
        PotType::EqualShare => 1,
        PotType::FairShare => entry.amount as u128,
    }
}

pub fn total_weight(entries: &[StakeEntry], pot_type: PotType) -> u128 {
    entries.iter().map(|entry| weight_of(entry, pot_type)).sum()
}

/// Returns the participant whose slice contains `draw`, or `None` when
/// `draw` is past the total weight.
pub fn select_winner(entries: &[StakeEntry], pot_type: PotType, draw: u128) -> Option<Pubkey> {
    let mut upper = 0u128;
    for entry in entries {
        let weight = weight_of(entry, pot_type);
        if weight == 0 {
            continue;
        }
        upper += weight;
        if draw < upper {
            return Some(entry.participant);
        }
    }
    None
}

pub fn resolve<R: RandomnessSource>(
    entries: &[StakeEntry],
    pot_type: PotType,
    source: &R,
) -> Result<Pubkey> {
    let total = total_weight(entries, pot_type);
    require!(total > 0, LotteryPotError::NoParticipants);

    let draw = source.draw(total)?;
    msg!("Draw {} out of {}", draw, total);

    select_winner(entries, pot_type, draw).ok_or(error!(LotteryPotError::NoParticipants))
}
