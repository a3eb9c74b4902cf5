use crate::*;
use near_sdk::{env, near_bindgen, BlockHeight, BorshStorageKey};

#[cfg(not(feature = "test"))]
pub fn get_block_height() -> BlockHeight {
    env::block_height()
}

/// With the `test` feature the block height can be pinned through
/// `set_block_height`, so sandbox tests can move the farm window freely.
#[cfg(feature = "test")]
pub fn get_block_height() -> BlockHeight {
    let test_block_height_key: &[u8] = "_test_block_".as_bytes();
    let raw_block_option = env::storage_read(test_block_height_key);

    if let Some(raw_block) = raw_block_option {
        BlockHeight::try_from_slice(&raw_block).unwrap_or_else(|_| env::block_height())
    } else {
        env::block_height()
    }
}

/// Block height helper methods only available for testing
#[near_bindgen]
impl StakerContract {
    #[cfg(feature = "test")]
    pub fn set_block_height(&mut self, block_height: BlockHeight) {
        let test_block_height_key: &[u8] = "_test_block_".as_bytes();
        env::storage_write(
            test_block_height_key,
            &block_height.try_to_vec().unwrap_or_default(),
        );
    }

    #[cfg(feature = "test")]
    pub fn read_block_height(&self) -> BlockHeight {
        get_block_height()
    }
}

#[derive(BorshStorageKey, BorshSerialize)]
pub(crate) enum StorageKey {
    Users,
    TokenAccounts,
    TokenAllowances,
}
