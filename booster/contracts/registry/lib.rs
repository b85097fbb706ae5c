#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod fees;

#[ink::contract]
pub mod registry {
    use crate::fees::FeeSchedule;
    use booster_helpers::{ensure, math::MathError};
    use deposit_token_contract::deposit_token::DepositTokenContractRef;
    use ink::{
        codegen::EmitEvent,
        contract_ref,
        env::hash::Blake2x256,
        prelude::{string::String, vec},
        storage::Mapping,
        ToAccountId,
    };
    use psp22::PSP22;
    use reward_pool_contract::reward_pool::RewardPoolContractRef;
    use reward_stash_contract::reward_stash::RewardStashContractRef;
    use traits::{
        DepositToken, Gauge, Ownable2Step, Ownable2StepData, Ownable2StepResult, PoolInfo,
        Registry, RegistryError, RewardStash, StakingRewards, VoterProxy,
    };

    pub type TokenRef = contract_ref!(PSP22);
    pub type GaugeRef = contract_ref!(Gauge);
    pub type PoolRef = contract_ref!(StakingRewards);
    pub type ReceiptRef = contract_ref!(DepositToken);
    pub type ProxyRef = contract_ref!(VoterProxy);
    pub type StashRef = contract_ref!(RewardStash);

    #[ink(event)]
    pub struct PoolAdded {
        #[ink(topic)]
        lp_token: AccountId,
        #[ink(topic)]
        gauge: AccountId,
        reward_pool: AccountId,
        deposit_token: AccountId,
        pool_id: u64,
    }

    #[ink(event)]
    pub struct Deposited {
        #[ink(topic)]
        account: AccountId,
        pool_id: u64,
        amount: u128,
    }

    #[ink(event)]
    pub struct Withdrawn {
        #[ink(topic)]
        account: AccountId,
        pool_id: u64,
        amount: u128,
    }

    #[ink(event)]
    pub struct RewardsEarmarked {
        #[ink(topic)]
        caller: AccountId,
        pool_id: u64,
        gross: u128,
        net: u128,
    }

    #[ink(event)]
    pub struct ExtraRewardAdded {
        #[ink(topic)]
        token: AccountId,
        pool_id: u64,
    }

    #[ink(event)]
    pub struct PoolShutdown {
        pool_id: u64,
        recovered: u128,
    }

    #[ink(event)]
    pub struct SystemShutdown {}

    #[ink(event)]
    pub struct FeesUpdated {
        platform_fee: u32,
        caller_incentive: u32,
        locker_incentive: u32,
    }

    #[ink(event)]
    pub struct PoolManagerChanged {
        #[ink(topic)]
        pool_manager: AccountId,
    }

    #[ink(event)]
    pub struct TreasuryChanged {
        #[ink(topic)]
        treasury: AccountId,
    }

    #[ink(event)]
    pub struct LockerChanged {
        #[ink(topic)]
        locker: AccountId,
    }

    #[ink(event)]
    pub struct TransferOwnershipInitiated {
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(event)]
    pub struct TransferOwnershipAccepted {
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(storage)]
    pub struct RegistryContract {
        ownable: Ownable2StepData,
        /// Account allowed to register pools and extra rewards.
        pool_manager: AccountId,
        /// Receiver of the platform fee share.
        treasury: AccountId,
        /// Receiver of the locker incentive share.
        locker: AccountId,
        /// Sole gauge custodian. This registry must be its operator.
        voter_proxy: AccountId,
        /// Primary reward token paid by every gauge.
        reward_token: AccountId,
        /// Streaming window handed to every instantiated reward pool, in
        /// milliseconds.
        reward_duration: u64,
        fees: FeeSchedule,
        pools: Mapping<u64, PoolInfo>,
        pool_count: u64,
        /// Live (lp token, gauge) pairs. Cleared on pool shutdown so the pair
        /// can be registered again under a fresh id.
        registered: Mapping<(AccountId, AccountId), u64>,
        /// Lp tokens held by the registry itself rather than the gauge, per
        /// pool. Fed by unstaked deposits and pool shutdowns.
        idle: Mapping<u64, u128>,
        reward_pool_code_hash: Hash,
        deposit_token_code_hash: Hash,
        stash_code_hash: Hash,
        is_shutdown: bool,
    }

    impl RegistryContract {
        #[ink(constructor)]
        pub fn new(
            voter_proxy: AccountId,
            reward_token: AccountId,
            reward_duration: u64,
            reward_pool_code_hash: Hash,
            deposit_token_code_hash: Hash,
            stash_code_hash: Hash,
        ) -> Result<Self, RegistryError> {
            if reward_duration == 0 {
                return Err(RegistryError::ZeroRewardDuration);
            }
            let caller = Self::env().caller();
            Ok(RegistryContract {
                ownable: Ownable2StepData::new(caller),
                pool_manager: caller,
                treasury: caller,
                locker: caller,
                voter_proxy,
                reward_token,
                reward_duration,
                fees: FeeSchedule::zero(),
                pools: Mapping::default(),
                pool_count: 0,
                registered: Mapping::default(),
                idle: Mapping::default(),
                reward_pool_code_hash,
                deposit_token_code_hash,
                stash_code_hash,
                is_shutdown: false,
            })
        }

        fn ensure_pool_manager(&self) -> Result<(), RegistryError> {
            ensure!(
                self.env().caller() == self.pool_manager,
                RegistryError::Unauthorized
            );
            Ok(())
        }

        fn _instantiate_reward_pool(&self, salt_bytes: &[u8]) -> Result<AccountId, RegistryError> {
            let pool = match RewardPoolContractRef::new(self.reward_token, self.reward_duration)
                .endowment(0)
                .code_hash(self.reward_pool_code_hash)
                .salt_bytes(&salt_bytes)
                .try_instantiate()
            {
                Ok(Ok(Ok(res))) => Ok(res),
                _ => Err(RegistryError::InstantiationFailed),
            }?;
            Ok(pool.to_account_id())
        }

        fn _instantiate_deposit_token(
            &self,
            salt_bytes: &[u8],
            reward_pool: AccountId,
        ) -> Result<AccountId, RegistryError> {
            let token = match DepositTokenContractRef::new(
                reward_pool,
                Some(String::from("Booster Deposit Token")),
                Some(String::from("bLPT")),
                12,
            )
            .endowment(0)
            .code_hash(self.deposit_token_code_hash)
            .salt_bytes(&salt_bytes)
            .try_instantiate()
            {
                Ok(Ok(res)) => Ok(res),
                _ => Err(RegistryError::InstantiationFailed),
            }?;
            Ok(token.to_account_id())
        }

        fn _instantiate_stash(
            &self,
            salt_bytes: &[u8],
            reward_pool: AccountId,
        ) -> Result<AccountId, RegistryError> {
            let stash = match RewardStashContractRef::new(reward_pool)
                .endowment(0)
                .code_hash(self.stash_code_hash)
                .salt_bytes(&salt_bytes)
                .try_instantiate()
            {
                Ok(Ok(res)) => Ok(res),
                _ => Err(RegistryError::InstantiationFailed),
            }?;
            Ok(stash.to_account_id())
        }
    }

    impl Registry for RegistryContract {
        #[ink(message)]
        fn add_pool(
            &mut self,
            lp_token: AccountId,
            gauge: AccountId,
            stash_version: u8,
        ) -> Result<u64, RegistryError> {
            self.ensure_pool_manager()?;
            ensure!(!self.is_shutdown, RegistryError::SystemShutdown);
            ensure!(
                self.registered.get((lp_token, gauge)).is_none(),
                RegistryError::DuplicatePool
            );
            let gauge_ref: GaugeRef = gauge.into();
            ensure!(
                gauge_ref.lp_token() == lp_token,
                RegistryError::LpTokenMismatch
            );

            let pool_id = self.pool_count;
            let salt = self
                .env()
                .hash_encoded::<Blake2x256, _>(&(pool_id, lp_token, gauge));
            let reward_pool = self._instantiate_reward_pool(salt.as_ref())?;
            let deposit_token = self._instantiate_deposit_token(salt.as_ref(), reward_pool)?;
            let stash = if stash_version > 0 {
                Some(self._instantiate_stash(salt.as_ref(), reward_pool)?)
            } else {
                None
            };

            let mut pool_ref: PoolRef = reward_pool.into();
            pool_ref.set_deposit_token(deposit_token)?;
            if let Some(stash) = stash {
                pool_ref.set_stash(stash)?;
            }

            let info = PoolInfo {
                lp_token,
                gauge,
                reward_pool,
                deposit_token,
                stash,
                shutdown: false,
            };
            self.pools.insert(pool_id, &info);
            self.registered.insert((lp_token, gauge), &pool_id);
            self.pool_count = pool_id
                .checked_add(1)
                .ok_or(MathError::AddOverflow(31))?;
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                PoolAdded {
                    lp_token,
                    gauge,
                    reward_pool,
                    deposit_token,
                    pool_id,
                },
            );
            Ok(pool_id)
        }

        #[ink(message)]
        fn deposit(
            &mut self,
            pool_id: u64,
            amount: u128,
            stake: bool,
        ) -> Result<(), RegistryError> {
            ensure!(amount > 0, RegistryError::ZeroAmount);
            ensure!(!self.is_shutdown, RegistryError::SystemShutdown);
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            ensure!(!pool.shutdown, RegistryError::PoolShutdown);

            let caller = self.env().caller();
            let mut lp: TokenRef = pool.lp_token.into();
            if stake {
                lp.transfer_from(caller, self.voter_proxy, amount, vec![])?;
                let mut proxy: ProxyRef = self.voter_proxy.into();
                proxy.deposit(pool.gauge, pool.lp_token, amount)?;
            } else {
                lp.transfer_from(caller, self.env().account_id(), amount, vec![])?;
                let idle = self
                    .idle
                    .get(pool_id)
                    .unwrap_or(0)
                    .checked_add(amount)
                    .ok_or(MathError::AddOverflow(32))?;
                self.idle.insert(pool_id, &idle);
            }

            // The mint hook raises the caller's stake in the reward pool, so
            // accrual starts in the same transaction the lp tokens arrive.
            let mut receipt: ReceiptRef = pool.deposit_token.into();
            receipt.mint(caller, amount)?;

            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                Deposited {
                    account: caller,
                    pool_id,
                    amount,
                },
            );
            Ok(())
        }

        #[ink(message)]
        fn withdraw(&mut self, pool_id: u64, amount: u128) -> Result<(), RegistryError> {
            ensure!(amount > 0, RegistryError::ZeroAmount);
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;

            let caller = self.env().caller();
            let mut receipt: ReceiptRef = pool.deposit_token.into();
            receipt.burn(caller, amount)?;

            // Registry custody is drained first; only the remainder touches
            // the gauge. After a pool shutdown custody covers everything, so
            // exits keep working with the gauge out of the picture.
            let idle = self.idle.get(pool_id).unwrap_or(0);
            let from_idle = amount.min(idle);
            if from_idle > 0 {
                let remaining = idle
                    .checked_sub(from_idle)
                    .ok_or(MathError::SubUnderflow(31))?;
                self.idle.insert(pool_id, &remaining);
                let mut lp: TokenRef = pool.lp_token.into();
                lp.transfer(caller, from_idle, vec![])?;
            }
            let from_gauge = amount
                .checked_sub(from_idle)
                .ok_or(MathError::SubUnderflow(32))?;
            if from_gauge > 0 {
                let mut proxy: ProxyRef = self.voter_proxy.into();
                proxy.withdraw(pool.gauge, pool.lp_token, from_gauge, caller)?;
            }

            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                Withdrawn {
                    account: caller,
                    pool_id,
                    amount,
                },
            );
            Ok(())
        }

        #[ink(message)]
        fn earmark_rewards(&mut self, pool_id: u64) -> Result<u128, RegistryError> {
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            let caller = self.env().caller();

            let mut proxy: ProxyRef = self.voter_proxy.into();
            proxy.claim_rewards(pool.gauge, self.reward_token, pool.stash)?;

            let mut reward: TokenRef = self.reward_token.into();
            let gross = reward.balance_of(self.env().account_id());
            let split = self.fees.split(gross)?;
            if split.platform > 0 {
                reward.transfer(self.treasury, split.platform, vec![])?;
            }
            if split.caller > 0 {
                reward.transfer(caller, split.caller, vec![])?;
            }
            if split.locker > 0 {
                reward.transfer(self.locker, split.locker, vec![])?;
            }
            if split.net > 0 {
                reward.approve(pool.reward_pool, split.net)?;
                let mut pool_ref: PoolRef = pool.reward_pool.into();
                pool_ref.notify_reward_amount(self.reward_token, split.net)?;
            }
            if let Some(stash) = pool.stash {
                let mut stash_ref: StashRef = stash.into();
                stash_ref.process_extras()?;
            }

            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                RewardsEarmarked {
                    caller,
                    pool_id,
                    gross,
                    net: split.net,
                },
            );
            Ok(split.net)
        }

        #[ink(message)]
        fn get_reward(&mut self, pool_id: u64) -> Result<(), RegistryError> {
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            let mut pool_ref: PoolRef = pool.reward_pool.into();
            pool_ref.get_reward_for(self.env().caller())?;
            Ok(())
        }

        #[ink(message)]
        fn add_extra_reward(
            &mut self,
            pool_id: u64,
            token: AccountId,
        ) -> Result<(), RegistryError> {
            self.ensure_pool_manager()?;
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            ensure!(pool.stash.is_some(), RegistryError::StashRequired);
            let mut pool_ref: PoolRef = pool.reward_pool.into();
            pool_ref.add_reward_stream(token)?;
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                ExtraRewardAdded { token, pool_id },
            );
            Ok(())
        }

        #[ink(message)]
        fn shutdown_pool(&mut self, pool_id: u64) -> Result<(), RegistryError> {
            self.ensure_owner()?;
            let mut pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            ensure!(!pool.shutdown, RegistryError::PoolShutdown);

            let mut proxy: ProxyRef = self.voter_proxy.into();
            let recovered =
                proxy.withdraw_all(pool.gauge, pool.lp_token, self.env().account_id())?;
            if recovered > 0 {
                let idle = self
                    .idle
                    .get(pool_id)
                    .unwrap_or(0)
                    .checked_add(recovered)
                    .ok_or(MathError::AddOverflow(33))?;
                self.idle.insert(pool_id, &idle);
            }

            pool.shutdown = true;
            self.pools.insert(pool_id, &pool);
            self.registered.remove((pool.lp_token, pool.gauge));
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                PoolShutdown { pool_id, recovered },
            );
            Ok(())
        }

        #[ink(message)]
        fn shutdown_system(&mut self) -> Result<(), RegistryError> {
            self.ensure_owner()?;
            self.is_shutdown = true;
            EmitEvent::<RegistryContract>::emit_event(self.env(), SystemShutdown {});
            Ok(())
        }

        #[ink(message)]
        fn set_fees(
            &mut self,
            platform_fee: u32,
            caller_incentive: u32,
            locker_incentive: u32,
        ) -> Result<(), RegistryError> {
            self.ensure_owner()?;
            self.fees = FeeSchedule::new(platform_fee, caller_incentive, locker_incentive)
                .ok_or(RegistryError::InvalidFeeConfig)?;
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                FeesUpdated {
                    platform_fee,
                    caller_incentive,
                    locker_incentive,
                },
            );
            Ok(())
        }

        #[ink(message)]
        fn set_pool_manager(&mut self, pool_manager: AccountId) -> Result<(), RegistryError> {
            self.ensure_owner()?;
            self.pool_manager = pool_manager;
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                PoolManagerChanged { pool_manager },
            );
            Ok(())
        }

        #[ink(message)]
        fn set_treasury(&mut self, treasury: AccountId) -> Result<(), RegistryError> {
            self.ensure_owner()?;
            self.treasury = treasury;
            EmitEvent::<RegistryContract>::emit_event(self.env(), TreasuryChanged { treasury });
            Ok(())
        }

        #[ink(message)]
        fn set_locker(&mut self, locker: AccountId) -> Result<(), RegistryError> {
            self.ensure_owner()?;
            self.locker = locker;
            EmitEvent::<RegistryContract>::emit_event(self.env(), LockerChanged { locker });
            Ok(())
        }

        #[ink(message)]
        fn pool_length(&self) -> u64 {
            self.pool_count
        }

        #[ink(message)]
        fn pool_info(&self, pool_id: u64) -> Option<PoolInfo> {
            self.pools.get(pool_id)
        }

        #[ink(message)]
        fn fees(&self) -> (u32, u32, u32) {
            (
                self.fees.platform_fee,
                self.fees.caller_incentive,
                self.fees.locker_incentive,
            )
        }

        #[ink(message)]
        fn is_shutdown(&self) -> bool {
            self.is_shutdown
        }

        #[ink(message)]
        fn pool_manager(&self) -> AccountId {
            self.pool_manager
        }

        #[ink(message)]
        fn treasury(&self) -> AccountId {
            self.treasury
        }

        #[ink(message)]
        fn locker(&self) -> AccountId {
            self.locker
        }

        #[ink(message)]
        fn voter_proxy(&self) -> AccountId {
            self.voter_proxy
        }

        #[ink(message)]
        fn reward_token(&self) -> AccountId {
            self.reward_token
        }

        #[ink(message)]
        fn balance_of(&self, pool_id: u64, account: AccountId) -> Result<u128, RegistryError> {
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            let pool_ref: PoolRef = pool.reward_pool.into();
            Ok(pool_ref.balance_of(account))
        }

        #[ink(message)]
        fn earned(&self, pool_id: u64, account: AccountId) -> Result<u128, RegistryError> {
            let pool = self.pools.get(pool_id).ok_or(RegistryError::PoolNotFound)?;
            let pool_ref: PoolRef = pool.reward_pool.into();
            let earned = pool_ref.earned(account)?;
            Ok(earned.first().copied().unwrap_or(0))
        }
    }

    impl Ownable2Step for RegistryContract {
        #[ink(message)]
        fn get_owner(&self) -> Ownable2StepResult<AccountId> {
            self.ownable.get_owner()
        }

        #[ink(message)]
        fn get_pending_owner(&self) -> Ownable2StepResult<AccountId> {
            self.ownable.get_pending_owner()
        }

        #[ink(message)]
        fn transfer_ownership(&mut self, new_owner: AccountId) -> Ownable2StepResult<()> {
            self.ownable
                .transfer_ownership(self.env().caller(), new_owner)?;
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                TransferOwnershipInitiated { new_owner },
            );
            Ok(())
        }

        #[ink(message)]
        fn accept_ownership(&mut self) -> Ownable2StepResult<()> {
            let new_owner = self.env().caller();
            self.ownable.accept_ownership(new_owner)?;
            EmitEvent::<RegistryContract>::emit_event(
                self.env(),
                TransferOwnershipAccepted { new_owner },
            );
            Ok(())
        }

        #[ink(message)]
        fn ensure_owner(&self) -> Ownable2StepResult<()> {
            self.ownable.ensure_owner(self.env().caller())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use booster_helpers::constants::rewards::WEEK;
        use ink::env::{test::*, DefaultEnvironment};
        use traits::Ownable2StepError;

        fn accounts() -> DefaultAccounts<DefaultEnvironment> {
            default_accounts::<DefaultEnvironment>()
        }

        fn set_sender(account: AccountId) {
            set_caller::<DefaultEnvironment>(account);
        }

        fn hash(byte: u8) -> Hash {
            Hash::from([byte; 32])
        }

        fn new_registry() -> RegistryContract {
            RegistryContract::new(
                AccountId::from([0x10u8; 32]),
                AccountId::from([0x20u8; 32]),
                WEEK,
                hash(0x01),
                hash(0x02),
                hash(0x03),
            )
            .unwrap()
        }

        #[ink::test]
        fn zero_reward_duration_is_rejected() {
            // Every instantiated pool inherits this window, so a zero value
            // would leave all of them unable to open a reward period.
            assert_eq!(
                RegistryContract::new(
                    AccountId::from([0x10u8; 32]),
                    AccountId::from([0x20u8; 32]),
                    0,
                    hash(0x01),
                    hash(0x02),
                    hash(0x03),
                )
                .err(),
                Some(RegistryError::ZeroRewardDuration)
            );
        }

        #[ink::test]
        fn instantiator_holds_every_role() {
            let acc = accounts();
            set_sender(acc.alice);
            let registry = new_registry();
            assert_eq!(registry.get_owner(), Ok(acc.alice));
            assert_eq!(registry.pool_manager(), acc.alice);
            assert_eq!(registry.treasury(), acc.alice);
            assert_eq!(registry.locker(), acc.alice);
            assert_eq!(Registry::voter_proxy(&registry), AccountId::from([0x10u8; 32]));
            assert_eq!(Registry::reward_token(&registry), AccountId::from([0x20u8; 32]));
            assert_eq!(registry.pool_length(), 0);
            assert_eq!(Registry::fees(&registry), (0, 0, 0));
            assert!(!Registry::is_shutdown(&registry));
        }

        #[ink::test]
        fn add_pool_requires_pool_manager() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            set_sender(acc.bob);
            assert_eq!(
                registry.add_pool(acc.django, acc.eve, 0),
                Err(RegistryError::Unauthorized)
            );
        }

        #[ink::test]
        fn system_shutdown_blocks_new_pools_and_deposits() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            set_sender(acc.bob);
            assert_eq!(
                registry.shutdown_system(),
                Err(RegistryError::Ownable2StepError(
                    Ownable2StepError::CallerNotOwner(acc.bob)
                ))
            );

            set_sender(acc.alice);
            registry.shutdown_system().unwrap();
            assert!(Registry::is_shutdown(&registry));

            assert_eq!(
                registry.add_pool(acc.django, acc.eve, 0),
                Err(RegistryError::SystemShutdown)
            );
            assert_eq!(
                registry.deposit(0, 100, true),
                Err(RegistryError::SystemShutdown)
            );
        }

        #[ink::test]
        fn deposit_and_withdraw_validate_inputs() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            assert_eq!(registry.deposit(0, 0, true), Err(RegistryError::ZeroAmount));
            assert_eq!(
                registry.deposit(0, 100, true),
                Err(RegistryError::PoolNotFound)
            );
            assert_eq!(registry.withdraw(0, 0), Err(RegistryError::ZeroAmount));
            assert_eq!(registry.withdraw(0, 100), Err(RegistryError::PoolNotFound));
        }

        #[ink::test]
        fn pool_lookups_fail_for_unknown_ids() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            assert_eq!(registry.earmark_rewards(7), Err(RegistryError::PoolNotFound));
            assert_eq!(registry.get_reward(7), Err(RegistryError::PoolNotFound));
            assert_eq!(registry.shutdown_pool(7), Err(RegistryError::PoolNotFound));
            assert_eq!(
                registry.add_extra_reward(7, acc.django),
                Err(RegistryError::PoolNotFound)
            );
            assert_eq!(registry.pool_info(7), None);
            assert_eq!(
                registry.balance_of(7, acc.bob),
                Err(RegistryError::PoolNotFound)
            );
            assert_eq!(
                Registry::earned(&registry, 7, acc.bob),
                Err(RegistryError::PoolNotFound)
            );
        }

        #[ink::test]
        fn fee_schedule_is_owner_gated_and_validated() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            set_sender(acc.bob);
            assert_eq!(
                registry.set_fees(100, 100, 100),
                Err(RegistryError::Ownable2StepError(
                    Ownable2StepError::CallerNotOwner(acc.bob)
                ))
            );

            set_sender(acc.alice);
            assert_eq!(
                registry.set_fees(9_000, 1_000, 1),
                Err(RegistryError::InvalidFeeConfig)
            );
            registry.set_fees(1_700, 100, 1_000).unwrap();
            assert_eq!(Registry::fees(&registry), (1_700, 100, 1_000));
        }

        #[ink::test]
        fn role_setters_are_owner_gated() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            registry.set_pool_manager(acc.bob).unwrap();
            registry.set_treasury(acc.charlie).unwrap();
            registry.set_locker(acc.django).unwrap();
            assert_eq!(registry.pool_manager(), acc.bob);
            assert_eq!(registry.treasury(), acc.charlie);
            assert_eq!(registry.locker(), acc.django);

            set_sender(acc.bob);
            assert_eq!(
                registry.set_treasury(acc.bob),
                Err(RegistryError::Ownable2StepError(
                    Ownable2StepError::CallerNotOwner(acc.bob)
                ))
            );
        }

        #[ink::test]
        fn ownership_handover_is_two_step() {
            let acc = accounts();
            set_sender(acc.alice);
            let mut registry = new_registry();

            registry.transfer_ownership(acc.bob).unwrap();
            assert_eq!(registry.get_owner(), Ok(acc.alice));
            assert_eq!(registry.get_pending_owner(), Ok(acc.bob));

            set_sender(acc.charlie);
            assert_eq!(
                registry.accept_ownership(),
                Err(Ownable2StepError::CallerNotPendingOwner(acc.charlie))
            );

            set_sender(acc.bob);
            registry.accept_ownership().unwrap();
            assert_eq!(registry.get_owner(), Ok(acc.bob));

            // The previous owner lost every owner-gated entry point.
            set_sender(acc.alice);
            assert_eq!(
                registry.shutdown_system(),
                Err(RegistryError::Ownable2StepError(
                    Ownable2StepError::CallerNotOwner(acc.alice)
                ))
            );
        }
    }
}
