#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod streams;

#[ink::contract]
pub mod reward_pool {
    use crate::streams::{self, RewardStream};
    use booster_helpers::{
        constants::rewards::MAX_REWARD_STREAMS, ensure, math::MathError, types::WrappedU256,
    };
    use ink::{
        codegen::EmitEvent,
        contract_ref,
        prelude::{vec, vec::Vec},
        reflect::ContractEventBase,
        storage::Mapping,
    };
    use psp22::PSP22;
    use traits::{RewardStreamView, StakingRewards, StakingRewardsError};

    pub type Event = <RewardPoolContract as ContractEventBase>::Type;
    pub type TokenRef = contract_ref!(PSP22);

    #[ink(event)]
    pub struct Staked {
        #[ink(topic)]
        account: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct Unstaked {
        #[ink(topic)]
        account: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct StakeMoved {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct RewardPaid {
        #[ink(topic)]
        account: AccountId,
        #[ink(topic)]
        token: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct RewardAdded {
        #[ink(topic)]
        token: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct StreamAdded {
        #[ink(topic)]
        token: AccountId,
    }

    #[ink(storage)]
    pub struct RewardPoolContract {
        /// The registry administering this pool.
        operator: AccountId,
        /// Receipt token driving every balance change. Bound once, right after instantiation.
        deposit_token: Option<AccountId>,
        /// Router for extra reward tokens, when the pool has one.
        stash: Option<AccountId>,
        /// Window length applied by every reward notification, in milliseconds.
        reward_duration: u64,
        /// Stream records; index 0 is the primary reward.
        streams: Vec<RewardStream>,
        /// Staked balance per account, mirrored 1:1 by the deposit token.
        balances: Mapping<AccountId, u128>,
        /// Sum of all staked balances.
        total_supply: u128,
        /// Accumulator snapshot per account at its last settlement, parallel to `streams`.
        user_reward_per_token_paid: Mapping<AccountId, Vec<WrappedU256>>,
        /// Settled, unclaimed rewards per account, parallel to `streams`.
        user_rewards: Mapping<AccountId, Vec<u128>>,
    }

    impl RewardPoolContract {
        #[ink(constructor)]
        pub fn new(
            reward_token: AccountId,
            reward_duration: u64,
        ) -> Result<Self, StakingRewardsError> {
            if reward_duration == 0 {
                return Err(StakingRewardsError::ZeroRewardDuration);
            }
            let now = Self::env().block_timestamp();
            Ok(RewardPoolContract {
                operator: Self::env().caller(),
                deposit_token: None,
                stash: None,
                reward_duration,
                streams: vec![RewardStream::new(reward_token, now)],
                balances: Mapping::default(),
                total_supply: 0,
                user_reward_per_token_paid: Mapping::default(),
                user_rewards: Mapping::default(),
            })
        }

        fn update_pool(&mut self) -> Result<(), StakingRewardsError> {
            let now = self.env().block_timestamp();
            for stream in self.streams.iter_mut() {
                stream.accrue(self.total_supply, now)?;
            }
            Ok(())
        }

        // Guarantee: after update_account(acc) the account's paid and rewards
        // vectors exist, hold one entry per stream, and every paid entry
        // equals its stream's current accumulator.
        fn update_account(&mut self, account: AccountId) -> Result<(), StakingRewardsError> {
            let stake = self.balances.get(account).unwrap_or(0);
            let n = self.streams.len();
            let mut paid = self
                .user_reward_per_token_paid
                .take(account)
                .unwrap_or_default();
            let mut rewards = self.user_rewards.take(account).unwrap_or_default();
            // Streams registered since the last settlement start their
            // accumulators at zero, so zero-padding settles them exactly.
            paid.resize(n, WrappedU256::ZERO);
            rewards.resize(n, 0);
            for (idx, stream) in self.streams.iter().enumerate() {
                let delta = stream.reward_per_token_stored.0.saturating_sub(paid[idx].0);
                let earned = streams::rewards_earned(stake, delta)?;
                rewards[idx] = rewards[idx].saturating_add(earned);
                paid[idx] = stream.reward_per_token_stored;
            }
            self.user_reward_per_token_paid.insert(account, &paid);
            self.user_rewards.insert(account, &rewards);
            Ok(())
        }

        fn checkpoint(&mut self, account: AccountId) -> Result<(), StakingRewardsError> {
            self.update_pool()?;
            self.update_account(account)
        }

        fn ensure_deposit_token(&self) -> Result<(), StakingRewardsError> {
            ensure!(
                Some(self.env().caller()) == self.deposit_token,
                StakingRewardsError::Unauthorized
            );
            Ok(())
        }

        fn ensure_operator(&self) -> Result<(), StakingRewardsError> {
            ensure!(
                self.env().caller() == self.operator,
                StakingRewardsError::Unauthorized
            );
            Ok(())
        }

        fn stream_index(&self, token: AccountId) -> Option<usize> {
            self.streams.iter().position(|s| s.token == token)
        }

        // Settles `account` and zeroes the claimable entries of the selected
        // streams. Transfers happen after this, never before.
        fn settle_and_zero(
            &mut self,
            account: AccountId,
            indices: &[u8],
        ) -> Result<Vec<u128>, StakingRewardsError> {
            self.checkpoint(account)?;
            let mut rewards = self.user_rewards.take(account).unwrap_or_default();
            let mut amounts = vec![0u128; self.streams.len()];
            for &raw_idx in indices {
                let idx = raw_idx as usize;
                if idx >= rewards.len() {
                    continue;
                }
                // Taking drains the slot, so a repeated index adds zero
                // instead of clobbering the amount captured first.
                let taken = core::mem::take(&mut rewards[idx]);
                amounts[idx] = amounts[idx]
                    .checked_add(taken)
                    .ok_or(MathError::AddOverflow(14))?;
            }
            if rewards.iter().all(|r| *r == 0) {
                self.user_rewards.remove(account);
            } else {
                self.user_rewards.insert(account, &rewards);
            }
            Ok(amounts)
        }

        fn pay_out(
            &mut self,
            account: AccountId,
            amounts: &[u128],
        ) -> Result<(), StakingRewardsError> {
            for (idx, &amount) in amounts.iter().enumerate() {
                if amount > 0 {
                    let token = self.streams[idx].token;
                    let mut token_ref: TokenRef = token.into();
                    token_ref
                        .transfer(account, amount, vec![])
                        .map_err(|e| StakingRewardsError::TokenTransferFailed(token, e))?;
                    Self::emit_event(
                        self.env(),
                        Event::RewardPaid(RewardPaid {
                            account,
                            token,
                            amount,
                        }),
                    );
                }
            }
            Ok(())
        }

        fn claim_for(
            &mut self,
            account: AccountId,
            indices: &[u8],
        ) -> Result<Vec<u128>, StakingRewardsError> {
            let amounts = self.settle_and_zero(account, indices)?;
            self.pay_out(account, &amounts)?;
            Ok(amounts)
        }

        fn all_stream_indices(&self) -> Vec<u8> {
            (0..self.streams.len() as u8).collect()
        }

        fn emit_event<EE: EmitEvent<Self>>(emitter: EE, event: Event) {
            emitter.emit_event(event);
        }
    }

    impl StakingRewards for RewardPoolContract {
        #[ink(message)]
        fn total_supply(&self) -> u128 {
            self.total_supply
        }

        #[ink(message)]
        fn balance_of(&self, account: AccountId) -> u128 {
            self.balances.get(account).unwrap_or(0)
        }

        #[ink(message)]
        fn reward_tokens(&self) -> Vec<AccountId> {
            self.streams.iter().map(|s| s.token).collect()
        }

        #[ink(message)]
        fn reward_duration(&self) -> u64 {
            self.reward_duration
        }

        #[ink(message)]
        fn earned(&self, account: AccountId) -> Result<Vec<u128>, StakingRewardsError> {
            let now = self.env().block_timestamp();
            let stake = self.balances.get(account).unwrap_or(0);
            let paid = self
                .user_reward_per_token_paid
                .get(account)
                .unwrap_or_default();
            let settled = self.user_rewards.get(account).unwrap_or_default();
            let mut out = Vec::with_capacity(self.streams.len());
            for (idx, stream) in self.streams.iter().enumerate() {
                let pending = streams::reward_per_token_delta(
                    stream.reward_rate,
                    self.total_supply,
                    stream.last_update_time,
                    stream.last_time_reward_applicable(now),
                )?;
                let stored = stream.reward_per_token_stored.0.saturating_add(pending);
                let paid_idx = paid.get(idx).copied().unwrap_or(WrappedU256::ZERO);
                let accrued = streams::rewards_earned(stake, stored.saturating_sub(paid_idx.0))?;
                out.push(settled.get(idx).copied().unwrap_or(0).saturating_add(accrued));
            }
            Ok(out)
        }

        #[ink(message)]
        fn view_stream(&self, token: AccountId) -> Option<RewardStreamView> {
            self.stream_index(token).map(|idx| {
                let stream = &self.streams[idx];
                RewardStreamView {
                    token: stream.token,
                    reward_rate: stream.reward_rate,
                    reward_per_token_stored: stream.reward_per_token_stored,
                    last_update_time: stream.last_update_time,
                    period_finish: stream.period_finish,
                }
            })
        }

        #[ink(message)]
        fn deposit_token(&self) -> Option<AccountId> {
            self.deposit_token
        }

        #[ink(message)]
        fn stash(&self) -> Option<AccountId> {
            self.stash
        }

        #[ink(message)]
        fn operator(&self) -> AccountId {
            self.operator
        }

        #[ink(message)]
        fn stake(&mut self, account: AccountId, amount: u128) -> Result<(), StakingRewardsError> {
            self.ensure_deposit_token()?;
            if amount == 0 {
                return Ok(());
            }
            self.checkpoint(account)?;
            let balance = self.balances.get(account).unwrap_or(0);
            let new_balance = balance
                .checked_add(amount)
                .ok_or(MathError::AddOverflow(11))?;
            self.balances.insert(account, &new_balance);
            self.total_supply = self
                .total_supply
                .checked_add(amount)
                .ok_or(MathError::AddOverflow(12))?;
            Self::emit_event(self.env(), Event::Staked(Staked { account, amount }));
            Ok(())
        }

        #[ink(message)]
        fn unstake(&mut self, account: AccountId, amount: u128) -> Result<(), StakingRewardsError> {
            self.ensure_deposit_token()?;
            if amount == 0 {
                return Ok(());
            }
            self.checkpoint(account)?;
            let balance = self.balances.get(account).unwrap_or(0);
            let new_balance = balance
                .checked_sub(amount)
                .ok_or(StakingRewardsError::InsufficientStake)?;
            self.balances.insert(account, &new_balance);
            self.total_supply = self
                .total_supply
                .checked_sub(amount)
                .ok_or(MathError::SubUnderflow(11))?;
            Self::emit_event(self.env(), Event::Unstaked(Unstaked { account, amount }));
            Ok(())
        }

        #[ink(message)]
        fn move_stake(
            &mut self,
            from: AccountId,
            to: AccountId,
            amount: u128,
        ) -> Result<(), StakingRewardsError> {
            self.ensure_deposit_token()?;
            if amount == 0 || from == to {
                return Ok(());
            }
            self.update_pool()?;
            self.update_account(from)?;
            self.update_account(to)?;
            let from_balance = self.balances.get(from).unwrap_or(0);
            let new_from = from_balance
                .checked_sub(amount)
                .ok_or(StakingRewardsError::InsufficientStake)?;
            self.balances.insert(from, &new_from);
            let to_balance = self.balances.get(to).unwrap_or(0);
            let new_to = to_balance
                .checked_add(amount)
                .ok_or(MathError::AddOverflow(13))?;
            self.balances.insert(to, &new_to);
            Self::emit_event(self.env(), Event::StakeMoved(StakeMoved { from, to, amount }));
            Ok(())
        }

        #[ink(message)]
        fn get_reward(&mut self) -> Result<Vec<u128>, StakingRewardsError> {
            let account = self.env().caller();
            let indices = self.all_stream_indices();
            self.claim_for(account, &indices)
        }

        #[ink(message)]
        fn get_reward_for(
            &mut self,
            account: AccountId,
        ) -> Result<Vec<u128>, StakingRewardsError> {
            let indices = self.all_stream_indices();
            self.claim_for(account, &indices)
        }

        #[ink(message)]
        fn claim(&mut self, streams: Vec<u8>) -> Result<Vec<u128>, StakingRewardsError> {
            let account = self.env().caller();
            self.claim_for(account, &streams)
        }

        #[ink(message)]
        fn notify_reward_amount(
            &mut self,
            token: AccountId,
            amount: u128,
        ) -> Result<(), StakingRewardsError> {
            let caller = self.env().caller();
            let idx = self
                .stream_index(token)
                .ok_or(StakingRewardsError::UnknownRewardToken)?;
            let from_stash = idx > 0 && Some(caller) == self.stash;
            ensure!(
                caller == self.operator || from_stash,
                StakingRewardsError::Unauthorized
            );
            self.update_pool()?;
            let mut token_ref: TokenRef = token.into();
            if amount > 0 {
                token_ref.transfer_from(caller, self.env().account_id(), amount, vec![])?;
            }
            let available = token_ref.balance_of(self.env().account_id());
            let now = self.env().block_timestamp();
            let duration = self.reward_duration;
            self.streams[idx].notify(amount, available, duration, now)?;
            Self::emit_event(self.env(), Event::RewardAdded(RewardAdded { token, amount }));
            Ok(())
        }

        #[ink(message)]
        fn add_reward_stream(&mut self, token: AccountId) -> Result<(), StakingRewardsError> {
            self.ensure_operator()?;
            ensure!(
                self.deposit_token != Some(token),
                StakingRewardsError::InvalidRewardToken
            );
            ensure!(
                self.stream_index(token).is_none(),
                StakingRewardsError::DuplicateRewardToken
            );
            ensure!(
                (self.streams.len() as u32) < MAX_REWARD_STREAMS,
                StakingRewardsError::TooManyRewardTokens
            );
            let now = self.env().block_timestamp();
            self.streams.push(RewardStream::new(token, now));
            Self::emit_event(self.env(), Event::StreamAdded(StreamAdded { token }));
            Ok(())
        }

        #[ink(message)]
        fn set_deposit_token(&mut self, token: AccountId) -> Result<(), StakingRewardsError> {
            self.ensure_operator()?;
            ensure!(
                self.deposit_token.is_none(),
                StakingRewardsError::AlreadyBound
            );
            ensure!(
                self.stream_index(token).is_none(),
                StakingRewardsError::InvalidRewardToken
            );
            self.deposit_token = Some(token);
            Ok(())
        }

        #[ink(message)]
        fn set_stash(&mut self, stash: AccountId) -> Result<(), StakingRewardsError> {
            self.ensure_operator()?;
            ensure!(self.stash.is_none(), StakingRewardsError::AlreadyBound);
            self.stash = Some(stash);
            Ok(())
        }
    }

}
