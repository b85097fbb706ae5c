use ink::{prelude::vec::Vec, primitives::AccountId};
use psp22::PSP22Error;

// Interface of the external gauges lp tokens are staked into. Deposits pull
// the lp token from the caller (an allowance must be in place), withdrawals
// and claims pay out to the caller. The first entry of `reward_tokens` is the
// gauge's primary reward.
#[ink::trait_definition]
pub trait Gauge {
    #[ink(message)]
    fn lp_token(&self) -> AccountId;

    #[ink(message)]
    fn reward_tokens(&self) -> Vec<AccountId>;

    #[ink(message)]
    fn deposit(&mut self, amount: u128) -> Result<(), PSP22Error>;

    #[ink(message)]
    fn withdraw(&mut self, amount: u128) -> Result<(), PSP22Error>;

    /// Pays out all pending rewards to the caller. Returns the paid amounts,
    /// one entry per `reward_tokens` element.
    #[ink(message)]
    fn claim_rewards(&mut self) -> Vec<u128>;
}
