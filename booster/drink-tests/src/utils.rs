use anyhow::{anyhow, Result};
use drink::{
    runtime::MinimalRuntime,
    session::{ContractBundle, Session, NO_ARGS, NO_ENDOWMENT, NO_SALT},
    AccountId32,
};
use ink_primitives::{AccountId, MessageResult};
use std::path::PathBuf;

pub const LPT: &str = "LPT";
pub const CRV: &str = "CRV";
pub const EXT: &str = "EXT";

pub const BOB: drink::AccountId32 = AccountId32::new([1u8; 32]);
pub const ALICE: drink::AccountId32 = AccountId32::new([2u8; 32]);
pub const CHARLIE: drink::AccountId32 = AccountId32::new([3u8; 32]);
pub const DAVE: drink::AccountId32 = AccountId32::new([4u8; 32]);

pub const TREASURY: AccountId32 = AccountId32::new([42u8; 32]);
pub const LOCKER: AccountId32 = AccountId32::new([43u8; 32]);

pub const TOKEN: u128 = 10u128.pow(18);

pub fn as_ink_account(account: &AccountId32) -> AccountId {
    AsRef::<[u8; 32]>::as_ref(account).clone().into()
}

pub fn as_account_id32(account: AccountId) -> AccountId32 {
    AccountId32::new(*AsRef::<[u8; 32]>::as_ref(&account))
}

pub fn alice() -> ink_primitives::AccountId {
    as_ink_account(&ALICE)
}

pub fn bob() -> ink_primitives::AccountId {
    as_ink_account(&BOB)
}

pub fn charlie() -> ink_primitives::AccountId {
    as_ink_account(&CHARLIE)
}

pub fn dave() -> ink_primitives::AccountId {
    as_ink_account(&DAVE)
}

pub fn treasury() -> ink_primitives::AccountId {
    as_ink_account(&TREASURY)
}

pub fn locker() -> ink_primitives::AccountId {
    as_ink_account(&LOCKER)
}

/// Renders an account the way the transcoder expects it in call arguments.
pub fn account_arg(account: AccountId) -> String {
    as_account_id32(account).to_string()
}

pub fn list_arg<T: ToString>(values: &[T]) -> String {
    let rendered: Vec<String> = values.iter().map(T::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

pub fn get_timestamp(session: &mut Session<MinimalRuntime>) -> u64 {
    session.sandbox().get_timestamp()
}

pub fn set_timestamp(session: &mut Session<MinimalRuntime>, timestamp: u64) {
    session.sandbox().set_timestamp(timestamp);
}

pub fn seed_account(session: &mut Session<MinimalRuntime>, account: AccountId32) -> Result<()> {
    session
        .sandbox()
        .mint_into(account, 1_000_000 * TOKEN)
        .map_err(|err| anyhow!("mint_into failed: {err:?}"))?;
    Ok(())
}

/// Loads the `.contract` bundle of a workspace contract. The artifacts come
/// from `cargo contract build --release` run in each contract's crate.
pub fn bundle(name: &str) -> ContractBundle {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/ink")
        .join(name)
        .join(format!("{name}.contract"));
    ContractBundle::load(&path).unwrap_or_else(|err| {
        panic!(
            "Missing bundle {}, build the contracts first: {:?}",
            path.display(),
            err
        )
    })
}

pub fn handle_ink_error<R>(res: MessageResult<R>) -> R {
    match res {
        Err(ink_lang_err) => panic!("InkLangError: {:?}", ink_lang_err),
        Ok(r) => r,
    }
}

/// Executes `message` on `contract` as `caller` and decodes the return value.
pub fn call_message<T: scale::Decode>(
    session: &mut Session<MinimalRuntime>,
    contract: AccountId,
    message: &str,
    args: &[String],
    caller: AccountId32,
) -> T {
    let _ = session.set_actor(caller);
    handle_ink_error(
        session
            .call_with_address(as_account_id32(contract), message, args, NO_ENDOWMENT)
            .unwrap(),
    )
}

/// Reads `message` on `contract` without switching the actor.
pub fn query<T: scale::Decode>(
    session: &mut Session<MinimalRuntime>,
    contract: AccountId,
    message: &str,
    args: &[String],
) -> T {
    handle_ink_error(
        session
            .call_with_address(as_account_id32(contract), message, args, NO_ENDOWMENT)
            .unwrap(),
    )
}

pub mod psp22 {
    use super::*;
    use ::psp22::PSP22Error;

    /// Deploys a test token with `supply` minted to `caller`.
    pub fn setup(
        session: &mut Session<MinimalRuntime>,
        name: &str,
        supply: u128,
        caller: AccountId32,
    ) -> AccountId {
        let _ = session.set_actor(caller);
        let address = session
            .deploy_bundle(
                bundle("psp22_contract"),
                "new",
                &[
                    supply.to_string(),
                    format!("Some(\"{name}\")"),
                    format!("Some(\"{name}\")"),
                    "12".to_string(),
                ],
                NO_SALT,
                NO_ENDOWMENT,
            )
            .unwrap();
        as_ink_account(&address)
    }

    pub fn transfer(
        session: &mut Session<MinimalRuntime>,
        token: AccountId,
        to: AccountId,
        amount: u128,
        caller: AccountId32,
    ) -> Result<(), PSP22Error> {
        call_message(
            session,
            token,
            "PSP22::transfer",
            &[account_arg(to), amount.to_string(), "[]".to_string()],
            caller,
        )
    }

    /// Increases allowance of given token to given spender by given amount.
    pub fn increase_allowance(
        session: &mut Session<MinimalRuntime>,
        token: AccountId,
        spender: AccountId,
        amount: u128,
        caller: AccountId32,
    ) -> Result<(), PSP22Error> {
        call_message(
            session,
            token,
            "PSP22::increase_allowance",
            &[account_arg(spender), amount.to_string()],
            caller,
        )
    }

    pub fn balance_of(
        session: &mut Session<MinimalRuntime>,
        token: AccountId,
        account: AccountId,
    ) -> u128 {
        query(
            session,
            token,
            "PSP22::balance_of",
            &[account_arg(account)],
        )
    }
}

pub mod gauge {
    use super::*;

    pub fn setup(
        session: &mut Session<MinimalRuntime>,
        lp_token: AccountId,
        reward_tokens: Vec<AccountId>,
        caller: AccountId32,
    ) -> AccountId {
        let _ = session.set_actor(caller);
        let rendered: Vec<String> = reward_tokens.iter().map(|t| account_arg(*t)).collect();
        let address = session
            .deploy_bundle(
                bundle("mock_gauge_contract"),
                "new",
                &[
                    account_arg(lp_token),
                    format!("[{}]", rendered.join(", ")),
                ],
                NO_SALT,
                NO_ENDOWMENT,
            )
            .unwrap();
        as_ink_account(&address)
    }

    /// Programs the amounts the next claim pays out to `account`.
    pub fn set_pending_rewards(
        session: &mut Session<MinimalRuntime>,
        gauge: AccountId,
        account: AccountId,
        amounts: Vec<u128>,
        caller: AccountId32,
    ) {
        call_message::<()>(
            session,
            gauge,
            "set_pending_rewards",
            &[account_arg(account), list_arg(&amounts)],
            caller,
        )
    }

    pub fn set_frozen(
        session: &mut Session<MinimalRuntime>,
        gauge: AccountId,
        frozen: bool,
        caller: AccountId32,
    ) {
        call_message::<()>(session, gauge, "set_frozen", &[frozen.to_string()], caller)
    }

    pub fn deposit_of(
        session: &mut Session<MinimalRuntime>,
        gauge: AccountId,
        account: AccountId,
    ) -> u128 {
        query(session, gauge, "deposit_of", &[account_arg(account)])
    }
}

pub mod voter_proxy {
    use super::*;
    use traits::VoterProxyError;

    pub fn setup(session: &mut Session<MinimalRuntime>, caller: AccountId32) -> AccountId {
        let _ = session.set_actor(caller);
        let address = session
            .deploy_bundle(
                bundle("voter_proxy_contract"),
                "new",
                NO_ARGS,
                NO_SALT,
                NO_ENDOWMENT,
            )
            .unwrap();
        as_ink_account(&address)
    }

    pub fn set_operator(
        session: &mut Session<MinimalRuntime>,
        proxy: AccountId,
        operator: AccountId,
        caller: AccountId32,
    ) -> Result<(), VoterProxyError> {
        call_message(
            session,
            proxy,
            "VoterProxy::set_operator",
            &[account_arg(operator)],
            caller,
        )
    }

    pub fn staked_balance(
        session: &mut Session<MinimalRuntime>,
        proxy: AccountId,
        gauge: AccountId,
    ) -> u128 {
        query(
            session,
            proxy,
            "VoterProxy::staked_balance",
            &[account_arg(gauge)],
        )
    }
}

pub mod registry {
    use super::*;
    use booster_helpers::constants::rewards::WEEK;
    use traits::{PoolInfo, RegistryError};

    /// Uploads the pool component codes and deploys a registry wired to
    /// `voter_proxy`, streaming `reward_token` over week-long windows.
    pub fn setup(
        session: &mut Session<MinimalRuntime>,
        voter_proxy: AccountId,
        reward_token: AccountId,
        caller: AccountId32,
    ) -> AccountId {
        let _ = session.set_actor(caller);
        let pool_hash = session.upload_bundle(bundle("reward_pool_contract")).unwrap();
        let receipt_hash = session
            .upload_bundle(bundle("deposit_token_contract"))
            .unwrap();
        let stash_hash = session
            .upload_bundle(bundle("reward_stash_contract"))
            .unwrap();
        let address = session
            .deploy_bundle(
                bundle("registry_contract"),
                "new",
                &[
                    account_arg(voter_proxy),
                    account_arg(reward_token),
                    WEEK.to_string(),
                    format!("{pool_hash:?}"),
                    format!("{receipt_hash:?}"),
                    format!("{stash_hash:?}"),
                ],
                NO_SALT,
                NO_ENDOWMENT,
            )
            .unwrap();
        as_ink_account(&address)
    }

    pub fn add_pool(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        lp_token: AccountId,
        gauge: AccountId,
        stash_version: u8,
        caller: AccountId32,
    ) -> Result<u64, RegistryError> {
        call_message(
            session,
            registry,
            "Registry::add_pool",
            &[
                account_arg(lp_token),
                account_arg(gauge),
                stash_version.to_string(),
            ],
            caller,
        )
    }

    pub fn deposit(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        amount: u128,
        stake: bool,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::deposit",
            &[pool_id.to_string(), amount.to_string(), stake.to_string()],
            caller,
        )
    }

    pub fn withdraw(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        amount: u128,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::withdraw",
            &[pool_id.to_string(), amount.to_string()],
            caller,
        )
    }

    pub fn earmark_rewards(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        caller: AccountId32,
    ) -> Result<u128, RegistryError> {
        call_message(
            session,
            registry,
            "Registry::earmark_rewards",
            &[pool_id.to_string()],
            caller,
        )
    }

    pub fn get_reward(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::get_reward",
            &[pool_id.to_string()],
            caller,
        )
    }

    pub fn add_extra_reward(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        token: AccountId,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::add_extra_reward",
            &[pool_id.to_string(), account_arg(token)],
            caller,
        )
    }

    pub fn shutdown_pool(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::shutdown_pool",
            &[pool_id.to_string()],
            caller,
        )
    }

    pub fn shutdown_system(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::shutdown_system",
            NO_ARGS,
            caller,
        )
    }

    pub fn set_fees(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        platform_fee: u32,
        caller_incentive: u32,
        locker_incentive: u32,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::set_fees",
            &[
                platform_fee.to_string(),
                caller_incentive.to_string(),
                locker_incentive.to_string(),
            ],
            caller,
        )
    }

    pub fn set_treasury(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        account: AccountId,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::set_treasury",
            &[account_arg(account)],
            caller,
        )
    }

    pub fn set_locker(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        account: AccountId,
        caller: AccountId32,
    ) -> Result<(), RegistryError> {
        call_message(
            session,
            registry,
            "Registry::set_locker",
            &[account_arg(account)],
            caller,
        )
    }

    pub fn pool_info(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
    ) -> Option<PoolInfo> {
        query(
            session,
            registry,
            "Registry::pool_info",
            &[pool_id.to_string()],
        )
    }

    pub fn balance_of(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        account: AccountId,
    ) -> Result<u128, RegistryError> {
        query(
            session,
            registry,
            "Registry::balance_of",
            &[pool_id.to_string(), account_arg(account)],
        )
    }

    pub fn earned(
        session: &mut Session<MinimalRuntime>,
        registry: AccountId,
        pool_id: u64,
        account: AccountId,
    ) -> Result<u128, RegistryError> {
        query(
            session,
            registry,
            "Registry::earned",
            &[pool_id.to_string(), account_arg(account)],
        )
    }

    pub fn is_shutdown(session: &mut Session<MinimalRuntime>, registry: AccountId) -> bool {
        query(
            session,
            registry,
            "Registry::is_shutdown",
            NO_ARGS,
        )
    }
}

pub mod reward_pool {
    use super::*;
    use traits::StakingRewardsError;

    /// Per-stream claimable amounts straight from the pool.
    pub fn earned(
        session: &mut Session<MinimalRuntime>,
        pool: AccountId,
        account: AccountId,
    ) -> Result<Vec<u128>, StakingRewardsError> {
        query(
            session,
            pool,
            "StakingRewards::earned",
            &[account_arg(account)],
        )
    }

    pub fn claim(
        session: &mut Session<MinimalRuntime>,
        pool: AccountId,
        streams: Vec<u8>,
        caller: AccountId32,
    ) -> Result<Vec<u128>, StakingRewardsError> {
        call_message(
            session,
            pool,
            "StakingRewards::claim",
            &[list_arg(&streams)],
            caller,
        )
    }
}
