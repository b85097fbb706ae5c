#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
pub mod reward_stash {
    use booster_helpers::ensure;
    use ink::{
        codegen::EmitEvent,
        contract_ref,
        prelude::vec::Vec,
        reflect::ContractEventBase,
    };
    use psp22::PSP22;
    use traits::{RewardStash, RewardStashError, StakingRewards};

    pub type Event = <RewardStashContract as ContractEventBase>::Type;
    pub type TokenRef = contract_ref!(PSP22);
    pub type PoolRef = contract_ref!(StakingRewards);

    #[ink(event)]
    pub struct ExtraRewardRouted {
        #[ink(topic)]
        token: AccountId,
        amount: u128,
    }

    #[ink(storage)]
    pub struct RewardStashContract {
        /// The registry. The only account allowed to trigger a sweep.
        operator: AccountId,
        /// Pool whose extra streams this stash feeds.
        reward_pool: AccountId,
    }

    impl RewardStashContract {
        #[ink(constructor)]
        pub fn new(reward_pool: AccountId) -> Self {
            RewardStashContract {
                operator: Self::env().caller(),
                reward_pool,
            }
        }

        fn emit_event<EE: EmitEvent<Self>>(emitter: EE, event: Event) {
            emitter.emit_event(event);
        }
    }

    impl RewardStash for RewardStashContract {
        #[ink(message)]
        fn operator(&self) -> AccountId {
            self.operator
        }

        #[ink(message)]
        fn reward_pool(&self) -> AccountId {
            self.reward_pool
        }

        #[ink(message)]
        fn process_extras(&mut self) -> Result<Vec<(AccountId, u128)>, RewardStashError> {
            ensure!(
                self.env().caller() == self.operator,
                RewardStashError::Unauthorized
            );
            let mut pool: PoolRef = self.reward_pool.into();
            let tokens = pool.reward_tokens();
            let this = self.env().account_id();
            let mut routed = Vec::new();
            // Index 0 is the primary reward. It is notified by the registry
            // directly and never passes through the stash.
            for token in tokens.into_iter().skip(1) {
                let mut token_ref: TokenRef = token.into();
                let amount = token_ref.balance_of(this);
                if amount == 0 {
                    continue;
                }
                token_ref.approve(self.reward_pool, amount)?;
                pool.notify_reward_amount(token, amount)?;
                Self::emit_event(
                    self.env(),
                    Event::ExtraRewardRouted(ExtraRewardRouted { token, amount }),
                );
                routed.push((token, amount));
            }
            Ok(routed)
        }
    }

}
