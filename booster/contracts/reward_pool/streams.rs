use booster_helpers::{
    ensure,
    math::{casted_mul, casted_u128, MathError},
    types::WrappedU256,
};
use ink::primitives::AccountId;
use primitive_types::U256;
use traits::StakingRewardsError;

pub const SCALING_FACTOR: u128 = u128::MAX;

/// One reward stream. Index 0 of a pool's stream list is the primary reward,
/// further entries are extra rewards keyed by token.
#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct RewardStream {
    pub token: AccountId,
    /// Payout per millisecond while the window is open.
    pub reward_rate: u128,
    /// Cumulative reward per staked unit, scaled by `SCALING_FACTOR`.
    pub reward_per_token_stored: WrappedU256,
    /// Timestamp of the last accumulator advance.
    pub last_update_time: u64,
    /// Timestamp at which the current window closes.
    pub period_finish: u64,
}

impl RewardStream {
    pub fn new(token: AccountId, now: u64) -> Self {
        RewardStream {
            token,
            reward_rate: 0,
            reward_per_token_stored: WrappedU256::ZERO,
            last_update_time: now,
            period_finish: now,
        }
    }

    /// The accumulator never advances past the end of the reward window.
    pub fn last_time_reward_applicable(&self, now: u64) -> u64 {
        core::cmp::min(now, self.period_finish)
    }

    /// Advances the accumulator to `min(now, period_finish)`.
    ///
    /// With nothing staked the elapsed interval distributes nothing, but the
    /// window keeps running: rewards skipped this way stay in the pool's
    /// balance and are never redistributed.
    pub fn accrue(&mut self, total_supply: u128, now: u64) -> Result<(), MathError> {
        let upto = self.last_time_reward_applicable(now);
        if upto <= self.last_update_time {
            return Ok(());
        }
        let delta = reward_per_token_delta(
            self.reward_rate,
            total_supply,
            self.last_update_time,
            upto,
        )?;
        self.reward_per_token_stored = self.reward_per_token_stored.0.saturating_add(delta).into();
        self.last_update_time = upto;
        Ok(())
    }

    /// Opens a fresh window of `duration` milliseconds covering `amount` new
    /// rewards plus whatever remains undistributed of the current window.
    /// `available` is the pool's balance of the stream's token and caps the
    /// promised payout.
    ///
    /// Callers must `accrue` first.
    pub fn notify(
        &mut self,
        amount: u128,
        available: u128,
        duration: u64,
        now: u64,
    ) -> Result<(), StakingRewardsError> {
        let leftover = match self.period_finish.checked_sub(now) {
            Some(remaining) => (remaining as u128)
                .checked_mul(self.reward_rate)
                .ok_or(MathError::MulOverflow(1))?,
            None => 0,
        };
        let rate = amount
            .checked_add(leftover)
            .ok_or(MathError::AddOverflow(1))?
            .checked_div(duration as u128)
            .ok_or(MathError::DivByZero(1))?;
        let max_rate = available
            .checked_div(duration as u128)
            .ok_or(MathError::DivByZero(2))?;
        ensure!(rate <= max_rate, StakingRewardsError::RewardTooHigh);
        self.reward_rate = rate;
        self.last_update_time = now;
        self.period_finish = now.checked_add(duration).ok_or(MathError::AddOverflow(2))?;
        Ok(())
    }
}

/// Reward per staked unit accrued over [`from`, `to`] at `reward_rate`,
/// scaled by `SCALING_FACTOR`.
pub fn reward_per_token_delta(
    reward_rate: u128,
    total_supply: u128,
    from: u64,
    to: u64,
) -> Result<U256, MathError> {
    if total_supply == 0 || from >= to {
        return Ok(U256::zero());
    }
    let time_delta = to.checked_sub(from).ok_or(MathError::SubUnderflow(1))?;
    casted_mul(reward_rate, time_delta as u128)
        .checked_mul(U256::from(SCALING_FACTOR))
        .ok_or(MathError::MulOverflow(2))?
        .checked_div(U256::from(total_supply))
        .ok_or(MathError::DivByZero(3))
}

/// The formula is:
/// reward_per_token * stake / SCALING_FACTOR
pub fn rewards_earned(stake: u128, reward_per_token: U256) -> Result<u128, MathError> {
    let value = reward_per_token
        .checked_mul(U256::from(stake))
        .ok_or(MathError::MulOverflow(3))?
        .checked_div(U256::from(SCALING_FACTOR))
        .ok_or(MathError::DivByZero(4))?;
    casted_u128(value, 1)
}
