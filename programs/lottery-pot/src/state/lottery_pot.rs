use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_PARTICIPANTS, RANDOMNESS_REVEAL_WINDOW_SLOTS};
use crate::error::LotteryPotError;
use crate::utils::randomness::RandomnessSource;
use crate::utils::winner_selector;

/// Winner-weighting policy of a pot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum PotType {
    /// Every participant has the same chance, whatever they staked.
    EqualShare,
    /// Chances are proportional to the amount staked.
    FairShare,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum PotState {
    Open,
    Resolved,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct StakeEntry {
    pub participant: Pubkey,
    /// Accumulated lamports. Zeroed when the participant is refunded.
    pub amount: u64,
}

/// Creation parameters shared by standalone and factory-created pots.
pub struct PotConfig {
    pub name: String,
    pub pot_type: PotType,
    pub min_stake: u64,
    pub close_time: i64,
    pub administrative_owner: Pubkey,
    pub creator: Pubkey,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct LotteryPot {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    #[max_len(MAX_NAME_LEN)]
    pub name: String,

    pub pot_type: PotType,

    /// Minimum lamports for a participant's first entry.
    pub min_stake: u64,

    /// UNIX timestamp closing participation and allowing resolution.
    pub close_time: i64,

    /// The only key allowed to flip `enabled`. For factory pots this is the
    /// factory account, not the wallet that created the pot.
    pub administrative_owner: Pubkey,

    /// Wallet that created the pot. Informational only.
    pub creator: Pubkey,

    /// Circuit breaker. While `false` nobody can join and enrolled
    /// participants may take their stake back.
    pub enabled: bool,

    pub state: PotState,

    /// Stakes in insertion order, one entry per distinct participant.
    #[max_len(MAX_PARTICIPANTS)]
    pub entries: Vec<StakeEntry>,

    /// Every lamport ever staked. Never decremented.
    pub total_stake: u64,

    /// Lamports handed back through refunds.
    pub refunded_stake: u64,

    /// Distinct participants ever enrolled.
    pub total_participants: u64,

    pub winner: Option<Pubkey>,

    pub prize_withdrawn: bool,

    /// Switchboard randomness account committed for the draw,
    /// `Pubkey::default()` until one is committed.
    pub randomness_account: Pubkey,

    /// Slot the randomness account was committed in.
    pub randomness_commit_slot: u64,
}

impl LotteryPot {
    pub fn new(config: PotConfig, now: i64, bump: u8) -> Result<Self> {
        require!(
            !config.name.is_empty() && config.name.len() <= MAX_NAME_LEN,
            LotteryPotError::InvalidName
        );
        require!(config.min_stake > 0, LotteryPotError::InvalidMinStake);
        require!(config.close_time > now, LotteryPotError::InvalidCloseTime);

        Ok(Self {
            bump,
            name: config.name,
            pot_type: config.pot_type,
            min_stake: config.min_stake,
            close_time: config.close_time,
            administrative_owner: config.administrative_owner,
            creator: config.creator,
            enabled: true,
            state: PotState::Open,
            entries: Vec::new(),
            total_stake: 0,
            refunded_stake: 0,
            total_participants: 0,
            winner: None,
            prize_withdrawn: false,
            randomness_account: Pubkey::default(),
            randomness_commit_slot: 0,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state == PotState::Open
    }

    pub fn stake_of(&self, participant: &Pubkey) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.participant == *participant)
            .map_or(0, |entry| entry.amount)
    }

    /// Lamports still owed by the pot: everything staked minus refunds.
    pub fn live_stake(&self) -> Result<u64> {
        self.total_stake
            .checked_sub(self.refunded_stake)
            .ok_or(error!(LotteryPotError::MathOverflow))
    }

    pub fn live_participants(&self) -> usize {
        self.entries.iter().filter(|entry| entry.amount > 0).count()
    }

    /// Credits `amount` to `participant`.
    ///
    /// A participant holding no stake must bring at least `min_stake`; top-ups
    /// only need to be nonzero. Returns `true` when the participant was not
    /// known to the pot before.
    pub fn participate(&mut self, participant: Pubkey, amount: u64, now: i64) -> Result<bool> {
        require_keys_neq!(
            participant,
            Pubkey::default(),
            LotteryPotError::InvalidBeneficiary
        );
        require!(self.enabled, LotteryPotError::PotDisabled);
        require!(self.is_open(), LotteryPotError::PotAlreadyResolved);
        require!(now < self.close_time, LotteryPotError::ParticipationClosed);

        let position = self
            .entries
            .iter()
            .position(|entry| entry.participant == participant);
        let current = position.map_or(0, |index| self.entries[index].amount);
        let required = if current == 0 { self.min_stake } else { 1 };
        require!(amount >= required, LotteryPotError::InsufficientStake);

        let updated = current
            .checked_add(amount)
            .ok_or(LotteryPotError::MathOverflow)?;
        let total_stake = self
            .total_stake
            .checked_add(amount)
            .ok_or(LotteryPotError::MathOverflow)?;

        let newly_enrolled = match position {
            Some(index) => {
                self.entries[index].amount = updated;
                false
            }
            None => {
                require!(
                    self.entries.len() < MAX_PARTICIPANTS,
                    LotteryPotError::PotFull
                );
                self.entries.push(StakeEntry {
                    participant,
                    amount: updated,
                });
                self.total_participants += 1;
                true
            }
        };
        self.total_stake = total_stake;

        Ok(newly_enrolled)
    }

    /// Stakes `creator_stake` for the creator of a freshly opened pot. A zero
    /// stake leaves the pot empty.
    pub fn seed_creator_stake(&mut self, creator_stake: u64, now: i64) -> Result<()> {
        if creator_stake > 0 {
            self.participate(self.creator, creator_stake, now)?;
        }
        Ok(())
    }

    /// Checks every lifecycle precondition of a draw.
    pub fn ensure_resolvable(&self, now: i64) -> Result<()> {
        require!(self.is_open(), LotteryPotError::PotAlreadyResolved);
        require!(now >= self.close_time, LotteryPotError::NotYetClosable);
        require!(self.live_participants() > 0, LotteryPotError::NoParticipants);
        Ok(())
    }

    /// Binds the pot to the randomness account its draw will read.
    ///
    /// A committed account can only be replaced once
    /// `RANDOMNESS_REVEAL_WINDOW_SLOTS` have passed without the pot being
    /// resolved, so an account that is never revealed cannot block the draw.
    pub fn commit_randomness(&mut self, randomness_account: Pubkey, now: i64, slot: u64) -> Result<()> {
        self.ensure_resolvable(now)?;
        require!(
            randomness_account != Pubkey::default(),
            LotteryPotError::IncorrectRandomnessAccount
        );
        if self.randomness_account != Pubkey::default() {
            let replaceable_at = self
                .randomness_commit_slot
                .saturating_add(RANDOMNESS_REVEAL_WINDOW_SLOTS);
            require!(
                slot >= replaceable_at,
                LotteryPotError::RandomnessAlreadyCommitted
            );
        }

        self.randomness_account = randomness_account;
        self.randomness_commit_slot = slot;
        Ok(())
    }

    pub fn determine_winner<R: RandomnessSource>(&mut self, now: i64, source: &R) -> Result<Pubkey> {
        self.ensure_resolvable(now)?;

        let winner = winner_selector::resolve(&self.entries, self.pot_type, source)?;
        self.winner = Some(winner);
        self.state = PotState::Resolved;

        Ok(winner)
    }

    /// Marks the prize as paid and returns the lamports owed to the winner.
    /// The caller moves the funds afterwards.
    pub fn winner_withdraw(&mut self, caller: Pubkey) -> Result<u64> {
        require!(!self.is_open(), LotteryPotError::NotResolved);
        let winner = self.winner.ok_or(LotteryPotError::NotResolved)?;
        require_keys_eq!(caller, winner, LotteryPotError::NotWinner);
        require!(!self.prize_withdrawn, LotteryPotError::AlreadyWithdrawn);

        let prize = self.live_stake()?;
        self.prize_withdrawn = true;

        Ok(prize)
    }

    /// Emergency exit while the circuit breaker is tripped. Zeroes the
    /// caller's stake and returns the lamports to hand back.
    pub fn participant_withdraw(&mut self, caller: Pubkey) -> Result<u64> {
        require!(!self.enabled, LotteryPotError::PotStillEnabled);
        // Once drawn, the whole pool belongs to the winner.
        require!(self.is_open(), LotteryPotError::PotAlreadyResolved);

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.participant == caller && entry.amount > 0)
            .ok_or(LotteryPotError::NoStakeToWithdraw)?;
        let amount = entry.amount;
        let refunded_stake = self
            .refunded_stake
            .checked_add(amount)
            .ok_or(LotteryPotError::MathOverflow)?;

        entry.amount = 0;
        self.refunded_stake = refunded_stake;

        Ok(amount)
    }

    /// Flips the circuit breaker and returns the new value.
    pub fn toggle_enabled(&mut self, caller: Pubkey) -> Result<bool> {
        require_keys_eq!(
            caller,
            self.administrative_owner,
            LotteryPotError::NotAuthorized
        );
        self.enabled = !self.enabled;
        Ok(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_error, open_pot, FixedDraw, CLOSE_TIME, NOW, SLOT};

    const ONE_UNIT: u64 = 1_000_000_000_000_000_000;

    #[test]
    fn new_pot_starts_open_and_enabled() {
        let (pot, owner) = open_pot(PotType::EqualShare, 100);

        assert!(pot.enabled);
        assert!(pot.is_open());
        assert_eq!(pot.administrative_owner, owner);
        assert_eq!(pot.total_participants, 0);
        assert_eq!(pot.total_stake, 0);
        assert_eq!(pot.winner, None);
    }

    #[test]
    fn new_pot_rejects_bad_configuration() {
        let owner = Pubkey::new_unique();
        let config = |name: &str, min_stake: u64, close_time: i64| PotConfig {
            name: name.to_string(),
            pot_type: PotType::FairShare,
            min_stake,
            close_time,
            administrative_owner: owner,
            creator: owner,
        };

        assert_error(
            LotteryPot::new(config("pot", 0, CLOSE_TIME), NOW, 255),
            LotteryPotError::InvalidMinStake,
        );
        assert_error(
            LotteryPot::new(config("pot", 1, NOW), NOW, 255),
            LotteryPotError::InvalidCloseTime,
        );
        assert_error(
            LotteryPot::new(config("", 1, CLOSE_TIME), NOW, 255),
            LotteryPotError::InvalidName,
        );
        assert_error(
            LotteryPot::new(config("x".repeat(MAX_NAME_LEN + 1).as_str(), 1, CLOSE_TIME), NOW, 255),
            LotteryPotError::InvalidName,
        );
    }

    #[test]
    fn first_stake_must_reach_min_stake() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 1_000);
        let alice = Pubkey::new_unique();

        assert_error(
            pot.participate(alice, 999, NOW),
            LotteryPotError::InsufficientStake,
        );
        assert_eq!(pot.total_participants, 0);
        assert!(pot.entries.is_empty());

        assert!(pot.participate(alice, 1_000, NOW).unwrap());
        assert_eq!(pot.stake_of(&alice), 1_000);
    }

    #[test]
    fn returning_participant_can_top_up_below_min_stake() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 1_000);
        let alice = Pubkey::new_unique();

        pot.participate(alice, 1_500, NOW).unwrap();
        assert!(!pot.participate(alice, 10, NOW).unwrap());

        assert_eq!(pot.stake_of(&alice), 1_510);
        assert_eq!(pot.total_stake, 1_510);
        assert_eq!(pot.total_participants, 1);
        assert_error(pot.participate(alice, 0, NOW), LotteryPotError::InsufficientStake);
    }

    #[test]
    fn total_stake_matches_sum_of_stakes() {
        let (mut pot, _) = open_pot(PotType::FairShare, 100);
        let participants: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();

        for (i, participant) in participants.iter().enumerate() {
            pot.participate(*participant, 100 + i as u64 * 7, NOW).unwrap();
        }
        pot.participate(participants[2], 3, NOW).unwrap();

        let sum: u64 = pot.entries.iter().map(|entry| entry.amount).sum();
        assert_eq!(pot.total_stake, sum);
        assert_eq!(pot.live_stake().unwrap(), sum);
        assert_eq!(pot.total_participants, 5);
    }

    #[test]
    fn disabled_pot_rejects_participation_without_side_effects() {
        let (mut pot, owner) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();
        pot.toggle_enabled(owner).unwrap();

        assert_error(pot.participate(alice, 50, NOW), LotteryPotError::PotDisabled);
        assert_error(
            pot.participate(Pubkey::new_unique(), 100, NOW),
            LotteryPotError::PotDisabled,
        );
        assert_eq!(pot.stake_of(&alice), 100);
        assert_eq!(pot.total_stake, 100);
        assert_eq!(pot.entries.len(), 1);
    }

    #[test]
    fn participation_closes_at_close_time() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);

        assert_error(
            pot.participate(Pubkey::new_unique(), 100, CLOSE_TIME),
            LotteryPotError::ParticipationClosed,
        );
    }

    #[test]
    fn pot_rejects_participants_beyond_capacity() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 1);
        for _ in 0..MAX_PARTICIPANTS {
            pot.participate(Pubkey::new_unique(), 1, NOW).unwrap();
        }

        assert_error(
            pot.participate(Pubkey::new_unique(), 1, NOW),
            LotteryPotError::PotFull,
        );
        assert_eq!(pot.total_participants, MAX_PARTICIPANTS as u64);
    }

    #[test]
    fn account_space_fits_a_full_pot() {
        let owner = Pubkey::new_unique();
        let mut pot = LotteryPot::new(
            PotConfig {
                name: "x".repeat(MAX_NAME_LEN),
                pot_type: PotType::FairShare,
                min_stake: 1,
                close_time: CLOSE_TIME,
                administrative_owner: owner,
                creator: owner,
            },
            NOW,
            255,
        )
        .unwrap();
        for _ in 0..MAX_PARTICIPANTS {
            pot.participate(Pubkey::new_unique(), u64::MAX / 128, NOW).unwrap();
        }
        pot.determine_winner(CLOSE_TIME, &FixedDraw(0)).unwrap();

        assert_eq!(pot.try_to_vec().unwrap().len(), LotteryPot::INIT_SPACE);
    }

    #[test]
    fn only_administrative_owner_toggles() {
        let (mut pot, owner) = open_pot(PotType::EqualShare, 100);

        assert_error(
            pot.toggle_enabled(Pubkey::new_unique()),
            LotteryPotError::NotAuthorized,
        );
        assert!(pot.enabled);

        assert!(!pot.toggle_enabled(owner).unwrap());
        assert!(pot.toggle_enabled(owner).unwrap());
    }

    #[test]
    fn winner_cannot_be_drawn_before_close_time() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);
        pot.participate(Pubkey::new_unique(), 100, NOW).unwrap();

        assert_error(
            pot.determine_winner(CLOSE_TIME - 1, &FixedDraw(0)),
            LotteryPotError::NotYetClosable,
        );
        assert!(pot.is_open());
    }

    #[test]
    fn empty_pot_cannot_be_resolved() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);

        assert_error(
            pot.determine_winner(CLOSE_TIME, &FixedDraw(0)),
            LotteryPotError::NoParticipants,
        );
    }

    #[test]
    fn resolution_runs_exactly_once() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();
        pot.participate(bob, 100, NOW).unwrap();

        let winner = pot.determine_winner(CLOSE_TIME, &FixedDraw(1)).unwrap();
        assert_eq!(winner, bob);
        assert_eq!(pot.state, PotState::Resolved);

        assert_error(
            pot.determine_winner(CLOSE_TIME + 10, &FixedDraw(0)),
            LotteryPotError::PotAlreadyResolved,
        );
        assert_eq!(pot.winner, Some(bob));
        assert_error(
            pot.participate(Pubkey::new_unique(), 100, NOW),
            LotteryPotError::PotAlreadyResolved,
        );
    }

    #[test]
    fn fair_share_pot_pays_the_whole_pool_once() {
        let (mut pot, _) = open_pot(PotType::FairShare, ONE_UNIT);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        pot.participate(alice, ONE_UNIT, NOW).unwrap();
        pot.participate(bob, ONE_UNIT + ONE_UNIT / 2, NOW).unwrap();
        assert_eq!(pot.total_stake, 2_500_000_000_000_000_000);
        assert_eq!(pot.total_participants, 2);

        let winner = pot
            .determine_winner(CLOSE_TIME, &FixedDraw(ONE_UNIT as u128))
            .unwrap();
        assert_eq!(winner, bob);

        assert_error(pot.winner_withdraw(alice), LotteryPotError::NotWinner);
        assert_eq!(pot.winner_withdraw(bob).unwrap(), 2_500_000_000_000_000_000);
        assert_error(pot.winner_withdraw(bob), LotteryPotError::AlreadyWithdrawn);
    }

    #[test]
    fn fair_share_draw_below_first_stake_picks_first_participant() {
        let (mut pot, _) = open_pot(PotType::FairShare, ONE_UNIT);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        pot.participate(alice, ONE_UNIT, NOW).unwrap();
        pot.participate(bob, ONE_UNIT + ONE_UNIT / 2, NOW).unwrap();

        let winner = pot
            .determine_winner(CLOSE_TIME, &FixedDraw(ONE_UNIT as u128 - 1))
            .unwrap();
        assert_eq!(winner, alice);
    }

    #[test]
    fn winner_withdraw_requires_resolution() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();

        assert_error(pot.winner_withdraw(alice), LotteryPotError::NotResolved);
    }

    #[test]
    fn refund_requires_tripped_circuit_breaker() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();

        assert_error(
            pot.participant_withdraw(alice),
            LotteryPotError::PotStillEnabled,
        );
        assert_eq!(pot.stake_of(&alice), 100);
    }

    #[test]
    fn refund_succeeds_once_per_participant() {
        let (mut pot, owner) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        pot.participate(alice, 150, NOW).unwrap();
        pot.participate(bob, 200, NOW).unwrap();
        pot.toggle_enabled(owner).unwrap();

        assert_eq!(pot.participant_withdraw(alice).unwrap(), 150);
        assert_error(
            pot.participant_withdraw(alice),
            LotteryPotError::NoStakeToWithdraw,
        );
        assert_error(
            pot.participant_withdraw(Pubkey::new_unique()),
            LotteryPotError::NoStakeToWithdraw,
        );

        assert_eq!(pot.stake_of(&alice), 0);
        assert_eq!(pot.stake_of(&bob), 200);
        assert_eq!(pot.total_stake, 350);
        assert_eq!(pot.live_stake().unwrap(), 200);
    }

    #[test]
    fn refunded_participant_rejoins_as_newcomer() {
        let (mut pot, owner) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();
        pot.toggle_enabled(owner).unwrap();
        pot.participant_withdraw(alice).unwrap();
        pot.toggle_enabled(owner).unwrap();

        assert_error(pot.participate(alice, 99, NOW), LotteryPotError::InsufficientStake);
        assert!(!pot.participate(alice, 100, NOW).unwrap());
        assert_eq!(pot.total_participants, 1);
        assert_eq!(pot.stake_of(&alice), 100);
    }

    #[test]
    fn prize_excludes_refunded_stakes() {
        let (mut pot, owner) = open_pot(PotType::FairShare, 100);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();
        pot.participate(bob, 300, NOW).unwrap();
        pot.toggle_enabled(owner).unwrap();
        pot.participant_withdraw(alice).unwrap();

        // Refunded entries carry no weight, whatever the draw.
        let winner = pot.determine_winner(CLOSE_TIME, &FixedDraw(0)).unwrap();
        assert_eq!(winner, bob);
        assert_eq!(pot.winner_withdraw(bob).unwrap(), 300);
    }

    #[test]
    fn nobody_refunds_after_resolution() {
        let (mut pot, owner) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();
        pot.participate(bob, 100, NOW).unwrap();
        let winner = pot.determine_winner(CLOSE_TIME, &FixedDraw(0)).unwrap();
        pot.toggle_enabled(owner).unwrap();

        assert_error(
            pot.participant_withdraw(winner),
            LotteryPotError::PotAlreadyResolved,
        );
        assert_error(
            pot.participant_withdraw(bob),
            LotteryPotError::PotAlreadyResolved,
        );
        // The breaker does not lock the winner out.
        assert_eq!(pot.winner_withdraw(winner).unwrap(), 200);
    }

    #[test]
    fn randomness_commit_needs_a_resolvable_pot() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);

        assert_error(
            pot.commit_randomness(Pubkey::new_unique(), CLOSE_TIME, SLOT),
            LotteryPotError::NoParticipants,
        );

        pot.participate(Pubkey::new_unique(), 100, NOW).unwrap();
        assert_error(
            pot.commit_randomness(Pubkey::new_unique(), CLOSE_TIME - 1, SLOT),
            LotteryPotError::NotYetClosable,
        );
        assert_eq!(pot.randomness_account, Pubkey::default());
    }

    #[test]
    fn committed_randomness_is_locked_during_reveal_window() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);
        pot.participate(Pubkey::new_unique(), 100, NOW).unwrap();
        let randomness = Pubkey::new_unique();

        pot.commit_randomness(randomness, CLOSE_TIME, SLOT).unwrap();
        assert_eq!(pot.randomness_account, randomness);
        assert_eq!(pot.randomness_commit_slot, SLOT);

        assert_error(
            pot.commit_randomness(
                Pubkey::new_unique(),
                CLOSE_TIME,
                SLOT + RANDOMNESS_REVEAL_WINDOW_SLOTS - 1,
            ),
            LotteryPotError::RandomnessAlreadyCommitted,
        );
        assert_eq!(pot.randomness_account, randomness);
    }

    #[test]
    fn unrevealed_randomness_is_replaced_after_reveal_window() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);
        let alice = Pubkey::new_unique();
        pot.participate(alice, 100, NOW).unwrap();
        let abandoned = Pubkey::new_unique();
        let replacement = Pubkey::new_unique();

        pot.commit_randomness(abandoned, CLOSE_TIME, SLOT).unwrap();
        pot.commit_randomness(
            replacement,
            CLOSE_TIME + 1_000_000,
            SLOT + RANDOMNESS_REVEAL_WINDOW_SLOTS,
        )
        .unwrap();
        assert_eq!(pot.randomness_account, replacement);

        assert_eq!(
            pot.determine_winner(CLOSE_TIME + 1_000_000, &FixedDraw(0)).unwrap(),
            alice
        );
        assert_error(
            pot.commit_randomness(
                Pubkey::new_unique(),
                CLOSE_TIME + 1_000_000,
                SLOT + 2 * RANDOMNESS_REVEAL_WINDOW_SLOTS,
            ),
            LotteryPotError::PotAlreadyResolved,
        );
    }

    #[test]
    fn stake_cannot_be_credited_to_the_default_key() {
        let (mut pot, _) = open_pot(PotType::EqualShare, 100);

        assert_error(
            pot.participate(Pubkey::default(), 100, NOW),
            LotteryPotError::InvalidBeneficiary,
        );
        assert!(pot.entries.is_empty());
        assert_eq!(pot.total_stake, 0);
    }

    #[test]
    fn creator_stake_seeds_the_pot() {
        let (mut pot, owner) = open_pot(PotType::FairShare, 100);

        assert_error(pot.seed_creator_stake(99, NOW), LotteryPotError::InsufficientStake);
        pot.seed_creator_stake(250, NOW).unwrap();

        assert_eq!(pot.stake_of(&owner), 250);
        assert_eq!(pot.total_participants, 1);
        assert_eq!(pot.total_stake, 250);
    }

    #[test]
    fn zero_creator_stake_leaves_pot_empty() {
        let (mut pot, _) = open_pot(PotType::FairShare, 100);

        pot.seed_creator_stake(0, NOW).unwrap();

        assert!(pot.entries.is_empty());
        assert_eq!(pot.total_participants, 0);
    }
}
