use crate::*;

/// The human readable global farm state
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct FarmInfoView {
    /// Total amount staked by all farmers.
    pub tokens_staked: U128,
    /// Number of farmers with a positive stake.
    pub num_farmers: u64,
    pub start_block: BlockHeight,
    pub end_block: BlockHeight,
    /// Block up to which rewards have been accounted for.
    pub last_reward_block: BlockHeight,
    /// Accumulated reward per staked unit, scaled by 10^12, as a decimal string.
    pub acc_reward_per_share: String,
    pub reward_per_block: U128,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct UserInfoView {
    pub amount: U128,
    /// Reward already accounted to the stake, as a decimal string.
    pub reward_debt: String,
}

/// Farmer summary for listings
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct FarmerView {
    pub account_id: AccountId,
    pub amount: U128,
    pub pending_reward: U128,
}

/// public view functions
#[near_bindgen]
impl StakerContract {
    pub fn farm_info(&self) -> FarmInfoView {
        FarmInfoView {
            tokens_staked: self.farm.tokens_staked.into(),
            num_farmers: self.farm.num_farmers,
            start_block: self.farm.start_block,
            end_block: self.farm.end_block,
            last_reward_block: self.farm.last_reward_block,
            acc_reward_per_share: self.farm.acc_reward_per_share.to_string(),
            reward_per_block: self.farm.reward_per_block.into(),
        }
    }

    /// Returns the stake and reward debt of the given account. Accounts that
    /// never staked, or fully withdrew, report zeros.
    pub fn user_info(&self, account_id: AccountId) -> UserInfoView {
        let user = self.internal_get_user(&account_id);
        UserInfoView {
            amount: user.amount.into(),
            reward_debt: user.reward_debt.to_string(),
        }
    }

    /// Reward the account would receive if it withdrew in the current block.
    pub fn pending_reward(&self, account_id: AccountId) -> U128 {
        let user = self.internal_get_user(&account_id);
        self.farm
            .pending_reward(&user, get_block_height())
            .into()
    }

    /// Tokens left for rewards, excluding staked principal.
    pub fn reward_pool_balance(&self) -> U128 {
        self.internal_reward_pool_balance().into()
    }

    pub fn get_owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }

    /// Returns the number of accounts that have positive stake in the farm.
    pub fn get_number_of_farmers(&self) -> u64 {
        self.users.len()
    }

    /// Returns the list of farmers
    pub fn get_farmers(&self, from_index: u64, limit: u64) -> Vec<FarmerView> {
        let block = get_block_height();
        self.users
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .map(|(account_id, user)| FarmerView {
                pending_reward: self.farm.pending_reward(&user, block).into(),
                amount: user.amount.into(),
                account_id,
            })
            .collect()
    }
}
