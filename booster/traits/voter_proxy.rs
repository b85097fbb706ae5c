use booster_helpers::math::MathError;
use ink::{prelude::vec::Vec, primitives::AccountId};
use psp22::PSP22Error;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum VoterProxyError {
    PSP22Error(PSP22Error),
    ArithmeticError(MathError),
    /// Caller is not the operator (or, for operator changes, the owner).
    Unauthorized,
}

impl From<PSP22Error> for VoterProxyError {
    fn from(e: PSP22Error) -> Self {
        VoterProxyError::PSP22Error(e)
    }
}

impl From<MathError> for VoterProxyError {
    fn from(e: MathError) -> Self {
        VoterProxyError::ArithmeticError(e)
    }
}

/// Sole custodian of gauge positions.
///
/// Gauges credit staking balances to the depositing account, so everything
/// staked through this system is staked by this contract. Nothing but the
/// operator (the registry) can move those funds.
#[ink::trait_definition]
pub trait VoterProxy {
    #[ink(message)]
    fn owner(&self) -> AccountId;

    #[ink(message)]
    fn operator(&self) -> AccountId;

    /// Returns the proxy's staked balance in `gauge`.
    #[ink(message)]
    fn staked_balance(&self, gauge: AccountId) -> u128;

    /// Hands the proxy over to a new operator.
    ///
    /// NOTE: Callable only by the owner.
    #[ink(message)]
    fn set_operator(&mut self, operator: AccountId) -> Result<(), VoterProxyError>;

    /// Stakes `amount` of `lp_token` held by this proxy into `gauge`.
    ///
    /// NOTE: Callable only by the operator.
    #[ink(message)]
    fn deposit(
        &mut self,
        gauge: AccountId,
        lp_token: AccountId,
        amount: u128,
    ) -> Result<(), VoterProxyError>;

    /// Unstakes `amount` from `gauge` and forwards the lp tokens to `to`.
    ///
    /// NOTE: Callable only by the operator.
    #[ink(message)]
    fn withdraw(
        &mut self,
        gauge: AccountId,
        lp_token: AccountId,
        amount: u128,
        to: AccountId,
    ) -> Result<(), VoterProxyError>;

    /// Unstakes the whole position from `gauge`, tolerating gauge failure, and
    /// forwards whatever lp tokens the proxy holds to `to`. Returns the amount
    /// forwarded.
    ///
    /// NOTE: Callable only by the operator.
    #[ink(message)]
    fn withdraw_all(
        &mut self,
        gauge: AccountId,
        lp_token: AccountId,
        to: AccountId,
    ) -> Result<u128, VoterProxyError>;

    /// Claims `gauge`'s pending rewards. The primary token goes to the
    /// operator, every other claimed token to `extras_to` (or the operator
    /// when unset). Returns the forwarded (token, amount) pairs.
    ///
    /// NOTE: Callable only by the operator.
    #[ink(message)]
    fn claim_rewards(
        &mut self,
        gauge: AccountId,
        primary_token: AccountId,
        extras_to: Option<AccountId>,
    ) -> Result<Vec<(AccountId, u128)>, VoterProxyError>;
}
