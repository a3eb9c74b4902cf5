use crate::errors::*;
use near_contract_standards::fungible_token::events::{FtMint, FtTransfer};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::json_types::U128;
use near_sdk::{env, log, require, AccountId, Balance, IntoStorageKey};

/// Token operations the farm relies on. Every failure panics, which reverts
/// the whole call together with any farm state change made before it.
pub trait TokenLedger {
    fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
        memo: Option<&str>,
    );

    /// Lets `spender_id` move up to `amount` of `owner_id`'s tokens.
    /// Replaces any previous allowance.
    fn approve(&mut self, owner_id: &AccountId, spender_id: &AccountId, amount: Balance);

    fn transfer_from(
        &mut self,
        spender_id: &AccountId,
        owner_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
        memo: Option<&str>,
    );

    fn balance_of(&self, account_id: &AccountId) -> Balance;

    fn allowance(&self, owner_id: &AccountId, spender_id: &AccountId) -> Balance;

    fn total_supply(&self) -> Balance;
}

/// The reward token. The farm pays rewards in it and farmers stake it.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct RewardToken {
    accounts: LookupMap<AccountId, Balance>,
    allowances: LookupMap<(AccountId, AccountId), Balance>,
    total_supply: Balance,
}

impl RewardToken {
    pub fn new<S: IntoStorageKey>(accounts_prefix: S, allowances_prefix: S) -> Self {
        Self {
            accounts: LookupMap::new(accounts_prefix),
            allowances: LookupMap::new(allowances_prefix),
            total_supply: 0,
        }
    }

    /// Creates `amount` new tokens for `account_id`. Only used once, when the
    /// contract is initialized.
    pub(crate) fn mint(&mut self, account_id: &AccountId, amount: Balance, memo: &str) {
        self.internal_deposit(account_id, amount);
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str(ERR_TOTAL_SUPPLY_OVERFLOW));
        FtMint {
            owner_id: account_id,
            amount: &U128(amount),
            memo: Some(memo),
        }
        .emit();
    }

    fn internal_deposit(&mut self, account_id: &AccountId, amount: Balance) {
        let balance = self.balance_of(account_id);
        if let Some(new_balance) = balance.checked_add(amount) {
            self.accounts.insert(account_id, &new_balance);
        } else {
            env::panic_str(ERR_BALANCE_OVERFLOW);
        }
    }

    fn internal_withdraw(&mut self, account_id: &AccountId, amount: Balance) {
        let balance = self.balance_of(account_id);
        if let Some(new_balance) = balance.checked_sub(amount) {
            self.accounts.insert(account_id, &new_balance);
        } else {
            env::panic_str(ERR_NO_ENOUGH_BALANCE);
        }
    }
}

impl TokenLedger for RewardToken {
    fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
        memo: Option<&str>,
    ) {
        require!(sender_id != receiver_id, ERR_SELF_TRANSFER);
        require!(amount > 0, ERR_NON_POSITIVE_TRANSFER_AMOUNT);

        self.internal_withdraw(sender_id, amount);
        self.internal_deposit(receiver_id, amount);

        FtTransfer {
            old_owner_id: sender_id,
            new_owner_id: receiver_id,
            amount: &U128(amount),
            memo,
        }
        .emit();
    }

    fn approve(&mut self, owner_id: &AccountId, spender_id: &AccountId, amount: Balance) {
        require!(owner_id != spender_id, ERR_SELF_APPROVE);

        let key = (owner_id.clone(), spender_id.clone());
        if amount == 0 {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(&key, &amount);
        }
        log!("{} allowed {} to spend {}", owner_id, spender_id, amount);
    }

    fn transfer_from(
        &mut self,
        spender_id: &AccountId,
        owner_id: &AccountId,
        receiver_id: &AccountId,
        amount: Balance,
        memo: Option<&str>,
    ) {
        let allowance = self.allowance(owner_id, spender_id);
        require!(allowance >= amount, ERR_NO_ENOUGH_ALLOWANCE);

        let key = (owner_id.clone(), spender_id.clone());
        let remaining = allowance - amount;
        if remaining == 0 {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(&key, &remaining);
        }
        self.transfer(owner_id, receiver_id, amount, memo);
    }

    fn balance_of(&self, account_id: &AccountId) -> Balance {
        self.accounts.get(account_id).unwrap_or_default()
    }

    fn allowance(&self, owner_id: &AccountId, spender_id: &AccountId) -> Balance {
        self.allowances
            .get(&(owner_id.clone(), spender_id.clone()))
            .unwrap_or_default()
    }

    fn total_supply(&self) -> Balance {
        self.total_supply
    }
}
