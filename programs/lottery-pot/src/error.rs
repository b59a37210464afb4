use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryPotError {
    // --- authorization ---
    #[msg("Caller is not allowed to perform this action")]
    NotAuthorized,
    #[msg("Only the winner can withdraw the prize")]
    NotWinner,

    // --- lifecycle ---
    #[msg("Pot has already been resolved")]
    PotAlreadyResolved,
    #[msg("Pot has not been resolved yet")]
    NotResolved,
    #[msg("Pot cannot be resolved before its close time")]
    NotYetClosable,
    #[msg("Participation closed at the pot's close time")]
    ParticipationClosed,
    #[msg("Factory is disabled")]
    FactoryDisabled,
    #[msg("Pot is disabled")]
    PotDisabled,
    #[msg("Pot is still enabled, refunds are only possible once it is disabled")]
    PotStillEnabled,
    #[msg("Pot has no participants")]
    NoParticipants,

    // --- accounting ---
    #[msg("Stake is below the pot's minimum stake")]
    InsufficientStake,
    #[msg("No stake to withdraw")]
    NoStakeToWithdraw,
    #[msg("Funds were already withdrawn")]
    AlreadyWithdrawn,
    #[msg("Pot has reached its participant limit")]
    PotFull,
    #[msg("Stake cannot be credited to the default public key")]
    InvalidBeneficiary,
    #[msg("Pot was not created by this factory")]
    PotNotRegistered,
    #[msg("Calculation overflowed")]
    MathOverflow,

    // --- configuration ---
    #[msg("Minimum stake must be greater than zero")]
    InvalidMinStake,
    #[msg("Close time must be in the future")]
    InvalidCloseTime,
    #[msg("Pot name must be between 1 and 32 bytes")]
    InvalidName,

    // --- randomness ---
    #[msg("No randomness account has been committed for this pot")]
    RandomnessNotCommitted,
    #[msg("A randomness account is already committed for this pot")]
    RandomnessAlreadyCommitted,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
}
