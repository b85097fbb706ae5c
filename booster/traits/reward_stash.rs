use ink::{prelude::vec::Vec, primitives::AccountId};
use psp22::PSP22Error;

use crate::StakingRewardsError;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum RewardStashError {
    PSP22Error(PSP22Error),
    RewardPool(StakingRewardsError),
    /// Caller is not the operator.
    Unauthorized,
}

impl From<PSP22Error> for RewardStashError {
    fn from(e: PSP22Error) -> Self {
        RewardStashError::PSP22Error(e)
    }
}

impl From<StakingRewardsError> for RewardStashError {
    fn from(e: StakingRewardsError) -> Self {
        RewardStashError::RewardPool(e)
    }
}

/// Per-pool buffer for extra reward tokens claimed from the gauge.
///
/// Tokens sit here until their stream exists in the reward pool; a sweep after
/// late registration recovers everything received in the meantime.
#[ink::trait_definition]
pub trait RewardStash {
    #[ink(message)]
    fn operator(&self) -> AccountId;

    #[ink(message)]
    fn reward_pool(&self) -> AccountId;

    /// Pushes the stash's balance of every registered extra reward token into
    /// its stream in the reward pool. Returns the routed (token, amount) pairs.
    ///
    /// NOTE: Callable only by the operator.
    #[ink(message)]
    fn process_extras(&mut self) -> Result<Vec<(AccountId, u128)>, RewardStashError>;
}
