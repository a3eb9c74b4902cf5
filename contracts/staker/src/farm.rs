use crate::*;

/// -- Farm change methods

#[near_bindgen]
impl StakerContract {
    /// Stakes `amount` reward tokens of the predecessor. The farm account must
    /// have been approved to move them (`ft_approve`). Reward earned by an
    /// existing stake is paid out in the same call.
    ///
    /// Returns the reward paid.
    pub fn deposit(&mut self, amount: U128) -> U128 {
        let account_id = env::predecessor_account_id();
        self.internal_deposit(&account_id, amount.into()).into()
    }

    /// Unstakes `amount` and sends it back together with the pending reward.
    ///
    /// Returns the reward paid.
    pub fn withdraw(&mut self, amount: U128) -> U128 {
        let account_id = env::predecessor_account_id();
        self.internal_withdraw(&account_id, amount.into()).into()
    }

    /// Withdraws the entire stake of the predecessor.
    pub fn withdraw_all(&mut self) -> U128 {
        let account_id = env::predecessor_account_id();
        let user = self.internal_get_user(&account_id);
        self.internal_withdraw(&account_id, user.amount).into()
    }

    /// Pays out the pending reward without touching the stake.
    pub fn harvest(&mut self) -> U128 {
        let account_id = env::predecessor_account_id();
        self.internal_harvest(&account_id).into()
    }

    /// Brings the reward accumulator up to the current block. Anybody can
    /// call it; it never changes what farmers are owed.
    pub fn settle(&mut self) -> bool {
        self.internal_settle(get_block_height())
    }
}
