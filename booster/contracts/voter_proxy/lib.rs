#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
pub mod voter_proxy {
    use booster_helpers::{ensure, math::MathError};
    use ink::{
        codegen::{EmitEvent, TraitCallBuilder},
        contract_ref,
        prelude::{vec, vec::Vec},
        reflect::ContractEventBase,
        storage::Mapping,
    };
    use psp22::PSP22;
    use traits::{Gauge, VoterProxy, VoterProxyError};

    pub type Event = <VoterProxyContract as ContractEventBase>::Type;
    pub type TokenRef = contract_ref!(PSP22);
    pub type GaugeRef = contract_ref!(Gauge);

    #[ink(event)]
    pub struct OperatorChanged {
        #[ink(topic)]
        operator: AccountId,
    }

    #[ink(event)]
    pub struct GaugeDeposited {
        #[ink(topic)]
        gauge: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct GaugeWithdrawn {
        #[ink(topic)]
        gauge: AccountId,
        amount: u128,
    }

    #[ink(storage)]
    pub struct VoterProxyContract {
        owner: AccountId,
        /// The registry. Everything staked through the system moves only on
        /// its instruction.
        operator: AccountId,
        /// Lp amount this proxy has staked, per gauge.
        staked: Mapping<AccountId, u128>,
    }

    impl VoterProxyContract {
        #[ink(constructor)]
        pub fn new() -> Self {
            let caller = Self::env().caller();
            VoterProxyContract {
                owner: caller,
                operator: caller,
                staked: Mapping::default(),
            }
        }

        fn ensure_owner(&self) -> Result<(), VoterProxyError> {
            ensure!(
                self.env().caller() == self.owner,
                VoterProxyError::Unauthorized
            );
            Ok(())
        }

        fn ensure_operator(&self) -> Result<(), VoterProxyError> {
            ensure!(
                self.env().caller() == self.operator,
                VoterProxyError::Unauthorized
            );
            Ok(())
        }

        fn emit_event<EE: EmitEvent<Self>>(emitter: EE, event: Event) {
            emitter.emit_event(event);
        }
    }

    impl VoterProxy for VoterProxyContract {
        #[ink(message)]
        fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        fn operator(&self) -> AccountId {
            self.operator
        }

        #[ink(message)]
        fn staked_balance(&self, gauge: AccountId) -> u128 {
            self.staked.get(gauge).unwrap_or(0)
        }

        #[ink(message)]
        fn set_operator(&mut self, operator: AccountId) -> Result<(), VoterProxyError> {
            self.ensure_owner()?;
            self.operator = operator;
            Self::emit_event(self.env(), Event::OperatorChanged(OperatorChanged { operator }));
            Ok(())
        }

        #[ink(message)]
        fn deposit(
            &mut self,
            gauge: AccountId,
            lp_token: AccountId,
            amount: u128,
        ) -> Result<(), VoterProxyError> {
            self.ensure_operator()?;
            if amount == 0 {
                return Ok(());
            }
            let mut lp: TokenRef = lp_token.into();
            lp.approve(gauge, amount)?;
            let mut gauge_ref: GaugeRef = gauge.into();
            gauge_ref.deposit(amount)?;
            let staked = self
                .staked
                .get(gauge)
                .unwrap_or(0)
                .checked_add(amount)
                .ok_or(MathError::AddOverflow(21))?;
            self.staked.insert(gauge, &staked);
            Self::emit_event(
                self.env(),
                Event::GaugeDeposited(GaugeDeposited { gauge, amount }),
            );
            Ok(())
        }

        #[ink(message)]
        fn withdraw(
            &mut self,
            gauge: AccountId,
            lp_token: AccountId,
            amount: u128,
            to: AccountId,
        ) -> Result<(), VoterProxyError> {
            self.ensure_operator()?;
            if amount == 0 {
                return Ok(());
            }
            let staked = self
                .staked
                .get(gauge)
                .unwrap_or(0)
                .checked_sub(amount)
                .ok_or(MathError::SubUnderflow(21))?;
            let mut gauge_ref: GaugeRef = gauge.into();
            gauge_ref.withdraw(amount)?;
            self.staked.insert(gauge, &staked);
            let mut lp: TokenRef = lp_token.into();
            lp.transfer(to, amount, vec![])?;
            Self::emit_event(
                self.env(),
                Event::GaugeWithdrawn(GaugeWithdrawn { gauge, amount }),
            );
            Ok(())
        }

        #[ink(message)]
        fn withdraw_all(
            &mut self,
            gauge: AccountId,
            lp_token: AccountId,
            to: AccountId,
        ) -> Result<u128, VoterProxyError> {
            self.ensure_operator()?;
            let staked = self.staked.get(gauge).unwrap_or(0);
            if staked > 0 {
                // A bricked gauge must not lock the lp tokens the proxy
                // already holds, so a failed unstake is logged and skipped.
                // The stake record is cleared only once the gauge actually
                // released the position; after a failure `withdraw` can still
                // pull it out when the gauge recovers.
                let mut gauge_ref: GaugeRef = gauge.into();
                match gauge_ref.call_mut().withdraw(staked).try_invoke() {
                    Err(ink_env_err) => {
                        ink::env::debug_println!("ink env error: {:?}", ink_env_err);
                    }
                    Ok(Err(ink_lang_err)) => {
                        ink::env::debug_println!("ink lang error: {:?}", ink_lang_err);
                    }
                    Ok(Ok(Err(gauge_err))) => {
                        ink::env::debug_println!("gauge error: {:?}", gauge_err);
                    }
                    Ok(Ok(Ok(()))) => {
                        self.staked.remove(gauge);
                    }
                }
            } else {
                self.staked.remove(gauge);
            }
            let mut lp: TokenRef = lp_token.into();
            let amount = lp.balance_of(self.env().account_id());
            if amount > 0 {
                lp.transfer(to, amount, vec![])?;
            }
            Self::emit_event(
                self.env(),
                Event::GaugeWithdrawn(GaugeWithdrawn { gauge, amount }),
            );
            Ok(amount)
        }

        #[ink(message)]
        fn claim_rewards(
            &mut self,
            gauge: AccountId,
            primary_token: AccountId,
            extras_to: Option<AccountId>,
        ) -> Result<Vec<(AccountId, u128)>, VoterProxyError> {
            self.ensure_operator()?;
            let mut gauge_ref: GaugeRef = gauge.into();
            let tokens = gauge_ref.reward_tokens();
            gauge_ref.claim_rewards();
            let this = self.env().account_id();
            let mut forwarded = Vec::with_capacity(tokens.len());
            for token in tokens {
                // Forward the full balance, not just the claimed amount, so
                // rewards stranded by an earlier failed run are recovered.
                let mut token_ref: TokenRef = token.into();
                let amount = token_ref.balance_of(this);
                if amount == 0 {
                    continue;
                }
                let recipient = if token == primary_token {
                    self.operator
                } else {
                    extras_to.unwrap_or(self.operator)
                };
                token_ref.transfer(recipient, amount, vec![])?;
                forwarded.push((token, amount));
            }
            Ok(forwarded)
        }
    }

}
