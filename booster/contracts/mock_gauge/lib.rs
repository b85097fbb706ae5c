#![cfg_attr(not(feature = "std"), no_std, no_main)]

// Test double for the external gauges. Deposits pull the lp token, claims pay
// whatever rewards were programmed in through `set_pending_rewards`.
#[ink::contract]
mod mock_gauge {
    use ink::{
        contract_ref,
        prelude::{string::String, vec, vec::Vec},
        storage::Mapping,
    };
    use psp22::{PSP22, PSP22Error};
    use traits::Gauge;

    pub type TokenRef = contract_ref!(PSP22);

    #[ink(storage)]
    pub struct MockGaugeContract {
        lp_token: AccountId,
        reward_tokens: Vec<AccountId>,
        deposits: Mapping<AccountId, u128>,
        /// Amounts the next claim pays out, parallel to `reward_tokens`.
        pending: Mapping<AccountId, Vec<u128>>,
        /// While set, deposits and withdrawals fail like on a killed gauge.
        frozen: bool,
    }

    impl MockGaugeContract {
        #[ink(constructor)]
        pub fn new(lp_token: AccountId, reward_tokens: Vec<AccountId>) -> Self {
            Self {
                lp_token,
                reward_tokens,
                deposits: Mapping::default(),
                pending: Mapping::default(),
                frozen: false,
            }
        }

        #[ink(message)]
        pub fn set_pending_rewards(&mut self, account: AccountId, amounts: Vec<u128>) {
            self.pending.insert(account, &amounts);
        }

        #[ink(message)]
        pub fn set_frozen(&mut self, frozen: bool) {
            self.frozen = frozen;
        }

        #[ink(message)]
        pub fn deposit_of(&self, account: AccountId) -> u128 {
            self.deposits.get(account).unwrap_or(0)
        }

        fn ensure_live(&self) -> Result<(), PSP22Error> {
            if self.frozen {
                return Err(PSP22Error::Custom(String::from("gauge: frozen")));
            }
            Ok(())
        }
    }

    impl Gauge for MockGaugeContract {
        #[ink(message)]
        fn lp_token(&self) -> AccountId {
            self.lp_token
        }

        #[ink(message)]
        fn reward_tokens(&self) -> Vec<AccountId> {
            self.reward_tokens.clone()
        }

        #[ink(message)]
        fn deposit(&mut self, amount: u128) -> Result<(), PSP22Error> {
            self.ensure_live()?;
            let caller = self.env().caller();
            let mut lp: TokenRef = self.lp_token.into();
            lp.transfer_from(caller, self.env().account_id(), amount, vec![])?;
            let balance = self.deposits.get(caller).unwrap_or(0).saturating_add(amount);
            self.deposits.insert(caller, &balance);
            Ok(())
        }

        #[ink(message)]
        fn withdraw(&mut self, amount: u128) -> Result<(), PSP22Error> {
            self.ensure_live()?;
            let caller = self.env().caller();
            let balance = self
                .deposits
                .get(caller)
                .unwrap_or(0)
                .checked_sub(amount)
                .ok_or(PSP22Error::InsufficientBalance)?;
            self.deposits.insert(caller, &balance);
            let mut lp: TokenRef = self.lp_token.into();
            lp.transfer(caller, amount, vec![])
        }

        #[ink(message)]
        fn claim_rewards(&mut self) -> Vec<u128> {
            let caller = self.env().caller();
            let mut amounts = self.pending.take(caller).unwrap_or_default();
            amounts.resize(self.reward_tokens.len(), 0);
            let mut paid = Vec::with_capacity(amounts.len());
            for (token, amount) in self.reward_tokens.iter().zip(amounts) {
                if amount == 0 {
                    paid.push(0);
                    continue;
                }
                let mut token_ref: TokenRef = (*token).into();
                match token_ref.transfer(caller, amount, vec![]) {
                    Ok(()) => paid.push(amount),
                    Err(_) => paid.push(0),
                }
            }
            paid
        }
    }

}
