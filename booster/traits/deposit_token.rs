use ink::primitives::AccountId;
use psp22::PSP22Error;

use crate::StakingRewardsError;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum DepositTokenError {
    PSP22Error(PSP22Error),
    RewardPool(StakingRewardsError),
    /// Caller is not the minter.
    Unauthorized,
}

impl From<PSP22Error> for DepositTokenError {
    fn from(e: PSP22Error) -> Self {
        DepositTokenError::PSP22Error(e)
    }
}

impl From<StakingRewardsError> for DepositTokenError {
    fn from(e: StakingRewardsError) -> Self {
        DepositTokenError::RewardPool(e)
    }
}

/// Receipt token interface on top of PSP22.
///
/// Every balance change, transfers included, settles the affected accounts in
/// the reward pool first, so holding the receipt and earning the rewards are
/// the same thing.
#[ink::trait_definition]
pub trait DepositToken {
    /// Mints `value` to `to` and credits the same stake in the reward pool.
    ///
    /// NOTE: Callable only by the minter (the registry).
    #[ink(message)]
    fn mint(&mut self, to: AccountId, value: u128) -> Result<(), DepositTokenError>;

    /// Burns `value` from `from` and removes the same stake from the reward pool.
    ///
    /// NOTE: Callable only by the minter (the registry).
    #[ink(message)]
    fn burn(&mut self, from: AccountId, value: u128) -> Result<(), DepositTokenError>;

    /// Returns the reward pool mirroring this token's balances.
    #[ink(message)]
    fn reward_pool(&self) -> AccountId;

    /// Returns the only account allowed to mint and burn.
    #[ink(message)]
    fn minter(&self) -> AccountId;
}
