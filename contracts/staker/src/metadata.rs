use crate::*;
use near_sdk::near_bindgen;

/// Contract source metadata following the
/// [NEP-330 standard](https://github.com/near/NEPs/blob/master/neps/nep-0330.md),
/// so the deployed code can be matched with its source version.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractSourceMetadata {
    pub version: String,
    pub link: Option<String>,
}

pub trait ContractSourceMetadataTrait {
    fn contract_source_metadata(&self) -> ContractSourceMetadata;
}

#[near_bindgen]
impl ContractSourceMetadataTrait for StakerContract {
    fn contract_source_metadata(&self) -> ContractSourceMetadata {
        ContractSourceMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            link: option_env!("CARGO_PKG_REPOSITORY")
                .filter(|link| !link.is_empty())
                .map(String::from),
        }
    }
}
