use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::UnorderedMap,
    env,
    json_types::U128,
    log, near_bindgen, require,
    serde::{Deserialize, Serialize},
    AccountId, Balance, BlockHeight, PanicOnDefault,
};

mod errors;
mod events;
mod farm;
mod fungible_token;
mod internal;
mod ledger;
mod metadata;
mod types;
mod utils;
mod view;

use crate::errors::*;
use crate::fungible_token::*;
use crate::ledger::*;
use crate::types::*;
use crate::utils::*;
pub use crate::metadata::*;
pub use crate::view::*;

/// A farm that streams `reward_per_block` reward tokens to the accounts
/// staking the same token, pro rata to their stake, between `start_block`
/// (inclusive) and `end_block` (exclusive).
///
/// The contract also hosts the reward token. Staked principal and the reward
/// pool are both held by the contract's own account.
#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct StakerContract {
    /// The account that received the initial token supply.
    pub owner_id: AccountId,
    /// Global reward accounting.
    pub farm: FarmInfo,
    /// Farmers with a positive stake.
    pub users: UnorderedMap<AccountId, UserInfo>,
    /// The reward token ledger.
    token: RewardToken,
}

#[near_bindgen]
impl StakerContract {
    /// Initializes the reward token and the farm.
    ///
    /// `total_supply` tokens are minted to `owner_id`, then `farm_supply` of
    /// them are moved to the contract account to fund the reward pool.
    /// The farm parameters cannot be changed afterwards.
    #[init]
    pub fn new(
        owner_id: AccountId,
        total_supply: U128,
        farm_supply: U128,
        reward_per_block: U128,
        start_block: BlockHeight,
        end_block: BlockHeight,
    ) -> Self {
        require!(!env::state_exists(), ERR_ALREADY_INITIALZED);
        require!(start_block < end_block, ERR_BAD_FARM_WINDOW);
        require!(
            farm_supply.0 <= total_supply.0,
            ERR_FARM_SUPPLY_EXCEEDS_TOTAL
        );
        let farm_id = env::current_account_id();
        require!(owner_id != farm_id, ERR_OWNER_IS_FARM);

        let mut token = RewardToken::new(StorageKey::TokenAccounts, StorageKey::TokenAllowances);
        token.mint(&owner_id, total_supply.0, "initial supply");
        if farm_supply.0 > 0 {
            token.transfer(&owner_id, &farm_id, farm_supply.0, Some("farm supply"));
        }

        let farm = FarmInfo::new(reward_per_block.0, start_block, end_block, get_block_height());
        log!(
            "Farm emits {} per block from block {} to block {}, pool {}",
            farm.reward_per_block,
            farm.start_block,
            farm.end_block,
            farm_supply.0
        );

        Self {
            owner_id,
            farm,
            users: UnorderedMap::new(StorageKey::Users),
            token,
        }
    }

    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
