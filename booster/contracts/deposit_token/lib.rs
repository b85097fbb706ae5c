#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
pub mod deposit_token {
    use booster_helpers::ensure;
    use ink::{
        contract_ref,
        prelude::{format, string::String, vec::Vec},
    };
    use psp22::{PSP22Data, PSP22Error, PSP22Event, PSP22Metadata, PSP22};
    use traits::{DepositToken, DepositTokenError, StakingRewards, StakingRewardsError};

    pub type PoolRef = contract_ref!(StakingRewards);

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: u128,
    }

    #[ink(storage)]
    pub struct DepositTokenContract {
        data: PSP22Data,
        /// The registry. Only account allowed to mint and burn.
        minter: AccountId,
        /// Stake ledger settled on every balance change of this token.
        reward_pool: AccountId,
        name: Option<String>,
        symbol: Option<String>,
        decimals: u8,
    }

    impl DepositTokenContract {
        #[ink(constructor)]
        pub fn new(
            reward_pool: AccountId,
            name: Option<String>,
            symbol: Option<String>,
            decimals: u8,
        ) -> Self {
            DepositTokenContract {
                data: PSP22Data::default(),
                minter: Self::env().caller(),
                reward_pool,
                name,
                symbol,
                decimals,
            }
        }

        fn emit_events(&self, events: Vec<PSP22Event>) {
            for event in events {
                match event {
                    PSP22Event::Transfer { from, to, value } => {
                        self.env().emit_event(Transfer { from, to, value })
                    }
                    PSP22Event::Approval {
                        owner,
                        spender,
                        amount,
                    } => self.env().emit_event(Approval {
                        owner,
                        spender,
                        amount,
                    }),
                }
            }
        }

        fn ensure_minter(&self) -> Result<(), DepositTokenError> {
            ensure!(
                self.env().caller() == self.minter,
                DepositTokenError::Unauthorized
            );
            Ok(())
        }

        // Mirrors a balance movement in the reward pool. The pool settles
        // both accounts before their stakes change, so rewards accrued up to
        // this point stay with the sender.
        fn sync_stake_move(
            &self,
            from: AccountId,
            to: AccountId,
            value: u128,
        ) -> Result<(), PSP22Error> {
            if value == 0 || from == to {
                return Ok(());
            }
            let mut pool: PoolRef = self.reward_pool.into();
            pool.move_stake(from, to, value).map_err(ledger_error)
        }
    }

    fn ledger_error(err: StakingRewardsError) -> PSP22Error {
        PSP22Error::Custom(format!("reward pool: {err:?}"))
    }

    impl DepositToken for DepositTokenContract {
        #[ink(message)]
        fn mint(&mut self, to: AccountId, value: u128) -> Result<(), DepositTokenError> {
            self.ensure_minter()?;
            let events = self.data.mint(to, value)?;
            self.emit_events(events);
            if value > 0 {
                let mut pool: PoolRef = self.reward_pool.into();
                pool.stake(to, value)?;
            }
            Ok(())
        }

        #[ink(message)]
        fn burn(&mut self, from: AccountId, value: u128) -> Result<(), DepositTokenError> {
            self.ensure_minter()?;
            let events = self.data.burn(from, value)?;
            self.emit_events(events);
            if value > 0 {
                let mut pool: PoolRef = self.reward_pool.into();
                pool.unstake(from, value)?;
            }
            Ok(())
        }

        #[ink(message)]
        fn reward_pool(&self) -> AccountId {
            self.reward_pool
        }

        #[ink(message)]
        fn minter(&self) -> AccountId {
            self.minter
        }
    }

    impl PSP22 for DepositTokenContract {
        #[ink(message)]
        fn total_supply(&self) -> u128 {
            self.data.total_supply()
        }

        #[ink(message)]
        fn balance_of(&self, owner: AccountId) -> u128 {
            self.data.balance_of(owner)
        }

        #[ink(message)]
        fn allowance(&self, owner: AccountId, spender: AccountId) -> u128 {
            self.data.allowance(owner, spender)
        }

        #[ink(message)]
        fn transfer(
            &mut self,
            to: AccountId,
            value: u128,
            _data: Vec<u8>,
        ) -> Result<(), PSP22Error> {
            let caller = self.env().caller();
            let events = self.data.transfer(caller, to, value)?;
            self.emit_events(events);
            self.sync_stake_move(caller, to, value)
        }

        #[ink(message)]
        fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: u128,
            _data: Vec<u8>,
        ) -> Result<(), PSP22Error> {
            let events = self
                .data
                .transfer_from(self.env().caller(), from, to, value)?;
            self.emit_events(events);
            self.sync_stake_move(from, to, value)
        }

        #[ink(message)]
        fn approve(&mut self, spender: AccountId, value: u128) -> Result<(), PSP22Error> {
            let events = self.data.approve(self.env().caller(), spender, value)?;
            self.emit_events(events);
            Ok(())
        }

        #[ink(message)]
        fn increase_allowance(
            &mut self,
            spender: AccountId,
            delta_value: u128,
        ) -> Result<(), PSP22Error> {
            let events = self
                .data
                .increase_allowance(self.env().caller(), spender, delta_value)?;
            self.emit_events(events);
            Ok(())
        }

        #[ink(message)]
        fn decrease_allowance(
            &mut self,
            spender: AccountId,
            delta_value: u128,
        ) -> Result<(), PSP22Error> {
            let events = self
                .data
                .decrease_allowance(self.env().caller(), spender, delta_value)?;
            self.emit_events(events);
            Ok(())
        }
    }

    impl PSP22Metadata for DepositTokenContract {
        #[ink(message)]
        fn token_name(&self) -> Option<String> {
            self.name.clone()
        }

        #[ink(message)]
        fn token_symbol(&self) -> Option<String> {
            self.symbol.clone()
        }

        #[ink(message)]
        fn token_decimals(&self) -> u8 {
            self.decimals
        }
    }

}
