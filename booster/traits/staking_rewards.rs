use booster_helpers::{math::MathError, types::WrappedU256};
use ink::{prelude::vec::Vec, primitives::AccountId};
use psp22::PSP22Error;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum StakingRewardsError {
    PSP22Error(PSP22Error),
    ArithmeticError(MathError),
    /// Caller is not allowed to perform the operation.
    Unauthorized,
    /// A stream for this reward token already exists.
    DuplicateRewardToken,
    /// The stream list has reached its upper bound.
    TooManyRewardTokens,
    /// No stream is registered for this reward token.
    UnknownRewardToken,
    /// The deposit token cannot double as a reward token.
    InvalidRewardToken,
    /// Account's staked balance is smaller than the requested amount.
    InsufficientStake,
    /// The reward window length must be non-zero.
    ZeroRewardDuration,
    /// The notified amount would promise more than the pool holds.
    RewardTooHigh,
    /// The deposit token or stash has already been bound.
    AlreadyBound,
    /// Reward payout failed for the given token.
    TokenTransferFailed(AccountId, PSP22Error),
}

impl From<PSP22Error> for StakingRewardsError {
    fn from(e: PSP22Error) -> Self {
        StakingRewardsError::PSP22Error(e)
    }
}

impl From<MathError> for StakingRewardsError {
    fn from(e: MathError) -> Self {
        StakingRewardsError::ArithmeticError(e)
    }
}

/// Snapshot of a single reward stream.
///
/// Useful for display purposes.
#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct RewardStreamView {
    /// Token paid out by the stream.
    pub token: AccountId,
    /// Payout rate per millisecond, in the token's smallest unit.
    pub reward_rate: u128,
    /// Cumulative reward-per-token accumulator, scaled by the pool's scaling factor.
    pub reward_per_token_stored: WrappedU256,
    /// Timestamp of the last accumulator advance.
    pub last_update_time: u64,
    /// Timestamp at which the current reward window closes.
    pub period_finish: u64,
}

#[ink::trait_definition]
pub trait StakingRewards {
    /// Returns the total staked balance across all accounts.
    #[ink(message)]
    fn total_supply(&self) -> u128;

    /// Returns the staked balance of `account`.
    #[ink(message)]
    fn balance_of(&self, account: AccountId) -> u128;

    /// Returns the tokens of all reward streams, the primary stream first.
    #[ink(message)]
    fn reward_tokens(&self) -> Vec<AccountId>;

    /// Returns the reward window length, in milliseconds.
    #[ink(message)]
    fn reward_duration(&self) -> u64;

    /// Returns the rewards `account` could claim right now, one entry per stream.
    #[ink(message)]
    fn earned(&self, account: AccountId) -> Result<Vec<u128>, StakingRewardsError>;

    /// Returns the stream registered for `token`, if any.
    #[ink(message)]
    fn view_stream(&self, token: AccountId) -> Option<RewardStreamView>;

    /// Returns the bound deposit token, if already set.
    #[ink(message)]
    fn deposit_token(&self) -> Option<AccountId>;

    /// Returns the bound stash, if any.
    #[ink(message)]
    fn stash(&self) -> Option<AccountId>;

    /// Returns the account allowed to administer this pool.
    #[ink(message)]
    fn operator(&self) -> AccountId;

    /// Credits `amount` of stake to `account`.
    ///
    /// NOTE: Callable only by the bound deposit token, which mirrors the change 1:1.
    #[ink(message)]
    fn stake(&mut self, account: AccountId, amount: u128) -> Result<(), StakingRewardsError>;

    /// Removes `amount` of stake from `account`.
    ///
    /// NOTE: Callable only by the bound deposit token.
    #[ink(message)]
    fn unstake(&mut self, account: AccountId, amount: u128) -> Result<(), StakingRewardsError>;

    /// Moves `amount` of stake between accounts, settling rewards of both sides first.
    ///
    /// NOTE: Callable only by the bound deposit token.
    #[ink(message)]
    fn move_stake(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: u128,
    ) -> Result<(), StakingRewardsError>;

    /// Claims all streams for the caller. Returns the paid amounts, one entry per stream.
    #[ink(message)]
    fn get_reward(&mut self) -> Result<Vec<u128>, StakingRewardsError>;

    /// Claims all streams on behalf of `account`. Rewards always go to `account`,
    /// so triggering a payout for someone else only does them a favor.
    #[ink(message)]
    fn get_reward_for(&mut self, account: AccountId) -> Result<Vec<u128>, StakingRewardsError>;

    /// Claims only the selected streams for the caller.
    ///
    /// Arguments:
    /// `streams` - vector of stream indices to be claimed.
    ///
    /// NOTE: Should one of the extra reward tokens misbehave during transfer,
    ///       claim the remaining streams by filtering its index out.
    #[ink(message)]
    fn claim(&mut self, streams: Vec<u8>) -> Result<Vec<u128>, StakingRewardsError>;

    /// Starts (or tops up) the reward window of `token`'s stream with `amount`,
    /// pulled from the caller. Whatever remains of the current window is folded
    /// into the new rate.
    ///
    /// NOTE: Callable by the operator for any stream and by the stash for extra streams.
    #[ink(message)]
    fn notify_reward_amount(
        &mut self,
        token: AccountId,
        amount: u128,
    ) -> Result<(), StakingRewardsError>;

    /// Registers an extra reward stream for `token`.
    ///
    /// NOTE: Callable only by the operator.
    #[ink(message)]
    fn add_reward_stream(&mut self, token: AccountId) -> Result<(), StakingRewardsError>;

    /// Binds the deposit token. Write-once, operator only.
    #[ink(message)]
    fn set_deposit_token(&mut self, token: AccountId) -> Result<(), StakingRewardsError>;

    /// Binds the stash. Write-once, operator only.
    #[ink(message)]
    fn set_stash(&mut self, stash: AccountId) -> Result<(), StakingRewardsError>;
}
