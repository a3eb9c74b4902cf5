use crate::events::Event;
use crate::*;

impl StakerContract {
    /********************/
    /* Internal methods */
    /********************/

    /// Brings the reward accumulator up to `block`.
    pub(crate) fn internal_settle(&mut self, block: BlockHeight) -> bool {
        let settled = self.farm.settle(block);
        if settled {
            Event::Settle {
                last_reward_block: self.farm.last_reward_block,
                acc_reward_per_share: self.farm.acc_reward_per_share.to_string(),
            }
            .emit();
        }
        settled
    }

    pub(crate) fn internal_deposit(&mut self, account_id: &AccountId, amount: Balance) -> Balance {
        let block = get_block_height();
        self.internal_settle(block);

        let mut user = self.internal_get_user(account_id);
        let reward = self
            .farm
            .deposit(&mut user, amount, block)
            .unwrap_or_else(|e| env::panic_str(e.as_str()));
        self.internal_save_user(account_id, &user);

        let farm_id = env::current_account_id();
        self.token
            .transfer_from(&farm_id, account_id, &farm_id, amount, Some("deposit"));
        self.internal_pay_reward(account_id, reward, 0);

        Event::Deposit {
            account_id: account_id.clone(),
            amount: U128(amount),
            reward: U128(reward),
            new_staked_balance: U128(user.amount),
        }
        .emit();
        self.log_farm_totals();

        reward
    }

    pub(crate) fn internal_withdraw(&mut self, account_id: &AccountId, amount: Balance) -> Balance {
        let block = get_block_height();
        self.internal_settle(block);

        let mut user = self.internal_get_user(account_id);
        let reward = self
            .farm
            .withdraw(&mut user, amount, block)
            .unwrap_or_else(|e| env::panic_str(e.as_str()));
        self.internal_save_user(account_id, &user);

        // principal and reward leave the farm as one transfer
        self.internal_pay_reward(account_id, reward, amount);

        Event::Withdraw {
            account_id: account_id.clone(),
            amount: U128(amount),
            reward: U128(reward),
            new_staked_balance: U128(user.amount),
        }
        .emit();
        self.log_farm_totals();

        reward
    }

    pub(crate) fn internal_harvest(&mut self, account_id: &AccountId) -> Balance {
        let block = get_block_height();
        self.internal_settle(block);

        let mut user = self.internal_get_user(account_id);
        let reward = self.farm.harvest(&mut user, block);
        self.internal_save_user(account_id, &user);
        self.internal_pay_reward(account_id, reward, 0);

        if reward > 0 {
            Event::Harvest {
                account_id: account_id.clone(),
                reward: U128(reward),
            }
            .emit();
        }

        reward
    }

    /// Sends `reward` plus `principal` from the farm to the farmer. The
    /// reward part must be covered by the pool, i.e. by the farm balance that
    /// does not back anybody's stake.
    fn internal_pay_reward(&mut self, account_id: &AccountId, reward: Balance, principal: Balance) {
        require!(
            self.internal_reward_pool_balance().saturating_sub(principal) >= reward,
            ERR_INSUFFICIENT_POOL_FUNDS
        );
        let amount = reward + principal;
        if amount > 0 {
            let memo = if principal > 0 { "withdraw" } else { "reward" };
            self.token
                .transfer(&env::current_account_id(), account_id, amount, Some(memo));
        }
    }

    /// Farm token balance minus the staked principal it holds.
    pub(crate) fn internal_reward_pool_balance(&self) -> Balance {
        self.token
            .balance_of(&env::current_account_id())
            .saturating_sub(self.farm.tokens_staked)
    }

    /// Inner method to get the given farmer or an empty record.
    pub(crate) fn internal_get_user(&self, account_id: &AccountId) -> UserInfo {
        self.users.get(account_id).unwrap_or_default()
    }

    /// Inner method to save the given farmer. Farmers without stake are dropped.
    pub(crate) fn internal_save_user(&mut self, account_id: &AccountId, user: &UserInfo) {
        if user.amount == 0 {
            self.users.remove(account_id);
        } else {
            self.users.insert(account_id, user);
        }
    }

    fn log_farm_totals(&self) {
        log!(
            "Farm total staked balance is {}. Total number of farmers {}",
            self.farm.tokens_staked,
            self.farm.num_farmers
        );
    }
}
