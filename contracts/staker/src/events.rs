use near_sdk::{json_types::U128, log, serde::Serialize, serde_json::json, AccountId, BlockHeight};

pub(crate) fn emit_event<T: ?Sized + Serialize>(data: &T) {
    let result = json!(data);
    let event_json = json!({
        "standard": "staker",
        "version": "1.0.0",
        "event": result["event"],
        "data": [result["data"]]
    })
    .to_string();
    log!("EVENT_JSON:{}", event_json);
}

#[derive(Serialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Settle {
        last_reward_block: BlockHeight,
        acc_reward_per_share: String,
    },
    Deposit {
        account_id: AccountId,
        amount: U128,
        reward: U128,
        new_staked_balance: U128,
    },
    Withdraw {
        account_id: AccountId,
        amount: U128,
        reward: U128,
        new_staked_balance: U128,
    },
    Harvest {
        account_id: AccountId,
        reward: U128,
    },
}

impl Event {
    pub fn emit(&self) {
        emit_event(&self);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use near_sdk::serde_json::{self, Value};
    use near_sdk::{test_utils, AccountId};

    fn alice() -> AccountId {
        AccountId::new_unchecked("alice".to_string())
    }

    fn logged_event() -> Value {
        let logs = test_utils::get_logs();
        let raw = logs[0].strip_prefix("EVENT_JSON:").unwrap();
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn settle() {
        Event::Settle {
            last_reward_block: 130,
            acc_reward_per_share: "100000000000000".to_string(),
        }
        .emit();
        assert_eq!(
            logged_event(),
            json!({
                "standard": "staker",
                "version": "1.0.0",
                "event": "settle",
                "data": [{"last_reward_block": 130, "acc_reward_per_share": "100000000000000"}]
            })
        );
    }

    #[test]
    fn deposit() {
        Event::Deposit {
            account_id: alice(),
            amount: U128(100),
            reward: U128(0),
            new_staked_balance: U128(100),
        }
        .emit();
        assert_eq!(
            logged_event(),
            json!({
                "standard": "staker",
                "version": "1.0.0",
                "event": "deposit",
                "data": [{"account_id": "alice", "amount": "100", "reward": "0", "new_staked_balance": "100"}]
            })
        );
    }

    #[test]
    fn withdraw() {
        Event::Withdraw {
            account_id: alice(),
            amount: U128(40),
            reward: U128(25),
            new_staked_balance: U128(60),
        }
        .emit();
        assert_eq!(
            logged_event(),
            json!({
                "standard": "staker",
                "version": "1.0.0",
                "event": "withdraw",
                "data": [{"account_id": "alice", "amount": "40", "reward": "25", "new_staked_balance": "60"}]
            })
        );
    }

    #[test]
    fn harvest() {
        Event::Harvest {
            account_id: alice(),
            reward: U128(7),
        }
        .emit();
        assert_eq!(
            logged_event(),
            json!({
                "standard": "staker",
                "version": "1.0.0",
                "event": "harvest",
                "data": [{"account_id": "alice", "reward": "7"}]
            })
        );
    }
}
