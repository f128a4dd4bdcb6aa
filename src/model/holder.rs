use serde::Deserialize;
use serde::Serialize;

use super::address::Address;

/// One entry from the holder source's ranked holder list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolder {
    pub address: Address,
    pub display_name: Option<String>,
    pub percent_of_supply: f64,
}
