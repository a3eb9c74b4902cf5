//! Reward accounting for the farm.
//!
//! The farm emits `reward_per_block` tokens for every block in
//! `[start_block, end_block)` and splits them among farmers pro rata to their
//! stake. Instead of walking every farmer on each block, a global accumulator
//! `acc_reward_per_share` records how much reward one unit of stake has earned
//! since the farm was created, and every farmer remembers the part of it that
//! was already paid out (`reward_debt`).
//!
//! Nothing in here touches the blockchain environment: the caller supplies the
//! block height and performs the token transfers the ledger asks for.

use crate::errors::*;
use crate::types::*;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::{Balance, BlockHeight};
use std::cmp::{max, min};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Zero-amount deposit.
    ZeroDeposit,
    /// Zero-amount withdrawal.
    ZeroWithdrawal,
    /// Withdrawal larger than the farmer's stake.
    InsufficientStake,
    /// Deposit at or after `end_block`.
    WindowClosed,
}

impl LedgerError {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerError::ZeroDeposit => ERR_NON_POSITIVE_DEPOSIT_AMOUNT,
            LedgerError::ZeroWithdrawal => ERR_NON_POSITIVE_WITHDRAWAL_AMOUNT,
            LedgerError::InsufficientStake => ERR_NO_ENOUGH_STAKED_BALANCE,
            LedgerError::WindowClosed => ERR_FARM_ENDED,
        }
    }
}

/// Global farm state.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct FarmInfo {
    /// Sum of all farmers' staked amounts.
    pub tokens_staked: Balance,
    /// Number of farmers with a positive stake.
    pub num_farmers: u64,
    /// First block that earns rewards.
    pub start_block: BlockHeight,
    /// First block that no longer earns rewards.
    pub end_block: BlockHeight,
    /// Block up to which `acc_reward_per_share` is accounted for.
    pub last_reward_block: BlockHeight,
    /// Reward per staked unit, scaled by `ACC_REWARD_PER_SHARE_SCALE`.
    pub acc_reward_per_share: U256,
    pub reward_per_block: Balance,
}

/// Per farmer state.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq)]
pub struct UserInfo {
    /// Staked principal.
    pub amount: Balance,
    /// `amount * acc_reward_per_share / SCALE` at the last time the farmer was
    /// settled. Kept wide: a dust stake alone in the farm pushes the accumulator
    /// high enough that a large stake's debt no longer fits a `Balance`.
    pub reward_debt: U256,
}

impl FarmInfo {
    /// A farm created at `current_block`. Rewards start accruing at
    /// `start_block`; `settle` clamps every interval to the farm window.
    pub fn new(
        reward_per_block: Balance,
        start_block: BlockHeight,
        end_block: BlockHeight,
        current_block: BlockHeight,
    ) -> Self {
        Self {
            tokens_staked: 0,
            num_farmers: 0,
            start_block,
            end_block,
            last_reward_block: current_block,
            acc_reward_per_share: U256::zero(),
            reward_per_block,
        }
    }

    /// Brings the accumulator up to `current_block`, charging the reward of
    /// the elapsed blocks to the stake that existed during them.
    ///
    /// Blocks at or before `last_reward_block` are already accounted for, so
    /// calling it again with the same (or an older) height changes nothing.
    /// Returns whether the state changed.
    pub fn settle(&mut self, current_block: BlockHeight) -> bool {
        if current_block <= self.last_reward_block || current_block <= self.start_block {
            return false;
        }
        let to = min(current_block, self.end_block);
        if to <= self.last_reward_block {
            return false;
        }

        if self.tokens_staked > 0 {
            let from = max(self.last_reward_block, self.start_block);
            let elapsed = to.saturating_sub(from);
            let reward = U256::from(elapsed) * U256::from(self.reward_per_block);
            self.acc_reward_per_share +=
                reward * U256::from(ACC_REWARD_PER_SHARE_SCALE) / U256::from(self.tokens_staked);
        }
        self.last_reward_block = to;
        true
    }

    /// Reward the farmer could collect at `current_block`. Settles a copy of
    /// the farm, so the result is exactly what `settle` followed by a payout
    /// would produce.
    pub fn pending_reward(&self, user: &UserInfo, current_block: BlockHeight) -> Balance {
        let mut farm = self.clone();
        farm.settle(current_block);
        farm.unpaid_reward(user)
    }

    /// Stakes `amount` for the farmer. Returns the reward earned by the
    /// farmer's previous stake, which the caller has to pay out.
    pub fn deposit(
        &mut self,
        user: &mut UserInfo,
        amount: Balance,
        current_block: BlockHeight,
    ) -> Result<Balance, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroDeposit);
        }
        if current_block >= self.end_block {
            return Err(LedgerError::WindowClosed);
        }

        self.settle(current_block);
        let reward = self.unpaid_reward(user);

        if user.amount == 0 {
            self.num_farmers += 1;
        }
        user.amount += amount;
        self.tokens_staked += amount;
        user.reward_debt = self.accumulated_reward(user.amount);

        Ok(reward)
    }

    /// Unstakes `amount` for the farmer. Returns the reward earned so far,
    /// which the caller pays out together with the principal.
    pub fn withdraw(
        &mut self,
        user: &mut UserInfo,
        amount: Balance,
        current_block: BlockHeight,
    ) -> Result<Balance, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroWithdrawal);
        }
        if amount > user.amount {
            return Err(LedgerError::InsufficientStake);
        }

        self.settle(current_block);
        let reward = self.unpaid_reward(user);

        user.amount -= amount;
        self.tokens_staked -= amount;
        if user.amount == 0 {
            self.num_farmers -= 1;
        }
        user.reward_debt = self.accumulated_reward(user.amount);

        Ok(reward)
    }

    /// Realizes the farmer's reward without changing the stake.
    pub fn harvest(&mut self, user: &mut UserInfo, current_block: BlockHeight) -> Balance {
        self.settle(current_block);
        let reward = self.unpaid_reward(user);
        user.reward_debt = self.accumulated_reward(user.amount);
        reward
    }

    /// Reward earned by `amount` stake since the farm was created.
    fn accumulated_reward(&self, amount: Balance) -> U256 {
        mul_div(amount, self.acc_reward_per_share, ACC_REWARD_PER_SHARE_SCALE)
    }

    /// Only the difference is narrowed to a `Balance`; it is bounded by the
    /// emission charged to the farmer since the last settlement.
    fn unpaid_reward(&self, user: &UserInfo) -> Balance {
        if user.amount == 0 {
            return 0;
        }
        let unpaid = self
            .accumulated_reward(user.amount)
            .saturating_sub(user.reward_debt);
        min(unpaid, U256::from(Balance::MAX)).as_u128()
    }
}
