pub const ERR_ALREADY_INITIALZED: &str = "Already initialized";
pub const ERR_BAD_FARM_WINDOW: &str = "Farm start block must be less than end block";
pub const ERR_FARM_SUPPLY_EXCEEDS_TOTAL: &str = "Farm supply cannot exceed total token supply";
pub const ERR_OWNER_IS_FARM: &str = "Owner cannot be the farm account";

pub const ERR_NON_POSITIVE_DEPOSIT_AMOUNT: &str = "Deposit amount should be positive";
pub const ERR_NON_POSITIVE_WITHDRAWAL_AMOUNT: &str = "Withdrawal amount should be positive";
pub const ERR_NO_ENOUGH_STAKED_BALANCE: &str = "Not enough staked balance to withdraw";
pub const ERR_FARM_ENDED: &str = "Farm has ended, deposits are closed";
pub const ERR_INSUFFICIENT_POOL_FUNDS: &str = "Not enough tokens in the reward pool";

pub const ERR_NON_POSITIVE_TRANSFER_AMOUNT: &str = "The amount should be a positive number";
pub const ERR_SELF_TRANSFER: &str = "Sender and receiver should be different";
pub const ERR_NO_ENOUGH_BALANCE: &str = "The account doesn't have enough balance";
pub const ERR_NO_ENOUGH_ALLOWANCE: &str = "The spender doesn't have enough allowance";
pub const ERR_SELF_APPROVE: &str = "Owner and spender should be different";
pub const ERR_BALANCE_OVERFLOW: &str = "Balance overflow";
pub const ERR_TOTAL_SUPPLY_OVERFLOW: &str = "Total supply overflow";
