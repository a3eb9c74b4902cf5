use crate::*;
use near_contract_standards::fungible_token::metadata::{
    FungibleTokenMetadata, FungibleTokenMetadataProvider, FT_METADATA_SPEC,
};

#[near_bindgen]
impl FungibleTokenMetadataProvider for StakerContract {
    fn ft_metadata(&self) -> FungibleTokenMetadata {
        FungibleTokenMetadata {
            spec: FT_METADATA_SPEC.to_string(),
            name: String::from("Reward Token"),
            symbol: String::from("RWD"),
            icon: None,
            reference: None,
            reference_hash: None,
            decimals: 18,
        }
    }
}
