use booster_helpers::math::MathError;
use ink::primitives::AccountId;
use psp22::PSP22Error;

use crate::{
    DepositTokenError, Ownable2StepError, RewardStashError, StakingRewardsError, VoterProxyError,
};

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum RegistryError {
    PSP22Error(PSP22Error),
    ArithmeticError(MathError),
    Ownable2StepError(Ownable2StepError),
    RewardPool(StakingRewardsError),
    DepositToken(DepositTokenError),
    Proxy(VoterProxyError),
    Stash(RewardStashError),
    /// Caller does not hold the role required for the operation.
    Unauthorized,
    /// The registry no longer accepts pools or deposits.
    SystemShutdown,
    /// No pool is registered under this id.
    PoolNotFound,
    /// The pool no longer accepts deposits.
    PoolShutdown,
    /// A live pool for this (lp token, gauge) pair already exists.
    DuplicatePool,
    /// The gauge stakes a different lp token.
    LpTokenMismatch,
    /// The pool was created without a stash, so it cannot take extra rewards.
    StashRequired,
    /// Amount must be non-zero.
    ZeroAmount,
    /// The reward window length must be non-zero.
    ZeroRewardDuration,
    /// Fee shares exceed 100% in total.
    InvalidFeeConfig,
    /// Cross-contract instantiation of a pool component failed.
    InstantiationFailed,
}

impl From<PSP22Error> for RegistryError {
    fn from(e: PSP22Error) -> Self {
        RegistryError::PSP22Error(e)
    }
}

impl From<MathError> for RegistryError {
    fn from(e: MathError) -> Self {
        RegistryError::ArithmeticError(e)
    }
}

impl From<Ownable2StepError> for RegistryError {
    fn from(e: Ownable2StepError) -> Self {
        RegistryError::Ownable2StepError(e)
    }
}

impl From<StakingRewardsError> for RegistryError {
    fn from(e: StakingRewardsError) -> Self {
        RegistryError::RewardPool(e)
    }
}

impl From<DepositTokenError> for RegistryError {
    fn from(e: DepositTokenError) -> Self {
        RegistryError::DepositToken(e)
    }
}

impl From<VoterProxyError> for RegistryError {
    fn from(e: VoterProxyError) -> Self {
        RegistryError::Proxy(e)
    }
}

impl From<RewardStashError> for RegistryError {
    fn from(e: RewardStashError) -> Self {
        RegistryError::Stash(e)
    }
}

/// Record of one registered pool.
#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct PoolInfo {
    /// The staked lp token.
    pub lp_token: AccountId,
    /// External gauge the lp tokens are forwarded to.
    pub gauge: AccountId,
    /// Reward distribution pool streaming this pool's rewards.
    pub reward_pool: AccountId,
    /// Transferable receipt minted 1:1 against deposits.
    pub deposit_token: AccountId,
    /// Router for extra reward tokens, when the pool was created with one.
    pub stash: Option<AccountId>,
    /// Once set, the pool accepts no further deposits.
    pub shutdown: bool,
}

#[ink::trait_definition]
pub trait Registry {
    /// Registers a new pool for `lp_token` staked through `gauge` and
    /// instantiates its reward pool, deposit token and (for `stash_version > 0`)
    /// stash. Returns the new pool id.
    ///
    /// NOTE: Callable only by the pool manager.
    #[ink(message)]
    fn add_pool(
        &mut self,
        lp_token: AccountId,
        gauge: AccountId,
        stash_version: u8,
    ) -> Result<u64, RegistryError>;

    /// Deposits `amount` of the pool's lp token for the caller and mints the
    /// same amount of deposit tokens to them. With `stake` the lp tokens are
    /// forwarded to the gauge through the voter proxy, otherwise they stay in
    /// registry custody.
    #[ink(message)]
    fn deposit(&mut self, pool_id: u64, amount: u128, stake: bool) -> Result<(), RegistryError>;

    /// Burns `amount` of the caller's deposit tokens and returns the same
    /// amount of lp tokens, unstaking from the gauge when registry custody
    /// does not cover it. Works after shutdown.
    #[ink(message)]
    fn withdraw(&mut self, pool_id: u64, amount: u128) -> Result<(), RegistryError>;

    /// Harvests the pool's gauge rewards, applies the fee split to the primary
    /// reward and streams the remainder (and any extra tokens, via the stash)
    /// through the reward pool. Open to anyone; the caller earns the caller
    /// incentive. Returns the net primary amount streamed.
    #[ink(message)]
    fn earmark_rewards(&mut self, pool_id: u64) -> Result<u128, RegistryError>;

    /// Claims all of the caller's accrued rewards from the pool's reward pool.
    #[ink(message)]
    fn get_reward(&mut self, pool_id: u64) -> Result<(), RegistryError>;

    /// Registers an extra reward stream for the pool.
    ///
    /// NOTE: Callable only by the pool manager; the pool must have a stash.
    #[ink(message)]
    fn add_extra_reward(&mut self, pool_id: u64, token: AccountId) -> Result<(), RegistryError>;

    /// Closes the pool for deposits and pulls the entire staked position out
    /// of the gauge into registry custody, so exits never depend on the gauge
    /// again.
    ///
    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn shutdown_pool(&mut self, pool_id: u64) -> Result<(), RegistryError>;

    /// Stops pool registration and deposits globally. Withdrawals, claims and
    /// harvests continue to work.
    ///
    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn shutdown_system(&mut self) -> Result<(), RegistryError>;

    /// Replaces the harvest fee split. Shares are in basis points and must not
    /// exceed 100% in total.
    ///
    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn set_fees(
        &mut self,
        platform_fee: u32,
        caller_incentive: u32,
        locker_incentive: u32,
    ) -> Result<(), RegistryError>;

    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn set_pool_manager(&mut self, pool_manager: AccountId) -> Result<(), RegistryError>;

    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn set_treasury(&mut self, treasury: AccountId) -> Result<(), RegistryError>;

    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn set_locker(&mut self, locker: AccountId) -> Result<(), RegistryError>;

    /// Returns the number of pools ever registered. Ids are never reused.
    #[ink(message)]
    fn pool_length(&self) -> u64;

    /// Returns the pool record under `pool_id`.
    #[ink(message)]
    fn pool_info(&self, pool_id: u64) -> Option<PoolInfo>;

    /// Returns (platform fee, caller incentive, locker incentive), in basis points.
    #[ink(message)]
    fn fees(&self) -> (u32, u32, u32);

    #[ink(message)]
    fn is_shutdown(&self) -> bool;

    #[ink(message)]
    fn pool_manager(&self) -> AccountId;

    #[ink(message)]
    fn treasury(&self) -> AccountId;

    #[ink(message)]
    fn locker(&self) -> AccountId;

    #[ink(message)]
    fn voter_proxy(&self) -> AccountId;

    #[ink(message)]
    fn reward_token(&self) -> AccountId;

    /// Returns `account`'s staked balance in the pool.
    #[ink(message)]
    fn balance_of(&self, pool_id: u64, account: AccountId) -> Result<u128, RegistryError>;

    /// Returns `account`'s claimable primary reward in the pool.
    #[ink(message)]
    fn earned(&self, pool_id: u64, account: AccountId) -> Result<u128, RegistryError>;
}
