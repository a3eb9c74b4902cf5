use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::Balance;
use std::io;
use uint::construct_uint;

/// The reward accumulator is kept as reward per share multiplied by this factor,
/// so floor division loses at most one scaled unit per settlement.
pub const ACC_REWARD_PER_SHARE_SCALE: Balance = 1_000_000_000_000;

/// One whole reward token (18 decimals).
#[cfg(all(test, not(target_arch = "wasm32")))]
pub const ONE_TOKEN: Balance = 1_000_000_000_000_000_000;

/// The amount of yocto NEAR that must be attached to token transfer calls.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub const ONE_YOCTO: Balance = 1;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl BorshSerialize for U256 {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        BorshSerialize::serialize(&self.0, writer)
    }
}

impl BorshDeserialize for U256 {
    fn deserialize(buf: &mut &[u8]) -> io::Result<Self> {
        Ok(U256(<[u64; 4]>::deserialize(buf)?))
    }
}

/// `value * numerator / denominator` in 256-bit space, rounded down.
pub fn mul_div(value: Balance, numerator: U256, denominator: Balance) -> U256 {
    U256::from(value) * numerator / U256::from(denominator)
}
