use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::LotteryPotError;
use crate::state::{LotteryPot, PotConfig, PotType};
use crate::utils::randomness::RandomnessSource;

pub const NOW: i64 = 1_700_000_000;
pub const CLOSE_TIME: i64 = NOW + 100;
pub const SLOT: u64 = 250_000_000;

/// Randomness source returning a preset draw, reduced into the bound.
pub struct FixedDraw(pub u128);

impl RandomnessSource for FixedDraw {
    fn draw(&self, bound: u128) -> Result<u128> {
        require!(bound > 0, LotteryPotError::NoParticipants);
        Ok(self.0 % bound)
    }
}

/// A standalone pot closing at `CLOSE_TIME`, with its owner.
pub fn open_pot(pot_type: PotType, min_stake: u64) -> (LotteryPot, Pubkey) {
    let owner = Pubkey::new_unique();
    let pot = LotteryPot::new(
        PotConfig {
            name: "test".to_string(),
            pot_type,
            min_stake,
            close_time: CLOSE_TIME,
            administrative_owner: owner,
            creator: owner,
        },
        NOW,
        255,
    )
    .unwrap();
    (pot, owner)
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: LotteryPotError) {
    match result.expect_err("call should have been rejected") {
        Error::AnchorError(err) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "unexpected error {}",
            err.error_name
        ),
        Error::ProgramError(err) => panic!("unexpected program error: {err:?}"),
    }
}
