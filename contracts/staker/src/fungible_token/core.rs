use crate::*;
use near_sdk::assert_one_yocto;

/// -- Reward token change methods

#[near_bindgen]
impl StakerContract {
    #[payable]
    pub fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>) {
        assert_one_yocto();
        let sender_id = env::predecessor_account_id();
        self.token
            .transfer(&sender_id, &receiver_id, amount.into(), memo.as_deref());
    }

    /// Allows `spender_id` to move up to `amount` of the predecessor's tokens.
    /// Farmers approve the farm account before calling `deposit`.
    #[payable]
    pub fn ft_approve(&mut self, spender_id: AccountId, amount: U128) {
        assert_one_yocto();
        let owner_id = env::predecessor_account_id();
        self.token.approve(&owner_id, &spender_id, amount.into());
    }

    #[payable]
    pub fn ft_transfer_from(
        &mut self,
        owner_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
        memo: Option<String>,
    ) {
        assert_one_yocto();
        let spender_id = env::predecessor_account_id();
        self.token.transfer_from(
            &spender_id,
            &owner_id,
            &receiver_id,
            amount.into(),
            memo.as_deref(),
        );
    }
}

/// -- Reward token view methods

#[near_bindgen]
impl StakerContract {
    pub fn ft_total_supply(&self) -> U128 {
        self.token.total_supply().into()
    }

    pub fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        self.token.balance_of(&account_id).into()
    }

    pub fn ft_allowance(&self, owner_id: AccountId, spender_id: AccountId) -> U128 {
        self.token.allowance(&owner_id, &spender_id).into()
    }
}
