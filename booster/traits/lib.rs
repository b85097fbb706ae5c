#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod deposit_token;
mod gauge;
mod ownable_2_step;
mod registry;
mod reward_stash;
mod staking_rewards;
mod voter_proxy;

pub type Balance = <ink::env::DefaultEnvironment as ink::env::Environment>::Balance;

pub use booster_helpers::math::MathError;
pub use deposit_token::{DepositToken, DepositTokenError};
pub use gauge::Gauge;
pub use ownable_2_step::{Ownable2Step, Ownable2StepData, Ownable2StepError, Ownable2StepResult};
pub use registry::{PoolInfo, Registry, RegistryError};
pub use reward_stash::{RewardStash, RewardStashError};
pub use staking_rewards::{RewardStreamView, StakingRewards, StakingRewardsError};
pub use voter_proxy::{VoterProxy, VoterProxyError};
