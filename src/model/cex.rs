use serde::Deserialize;
use serde::Serialize;

use super::address::Address;
use crate::constants;

/// A known centralized-exchange wallet.
///
/// A whale edge that touches one of these is flow to or from an exchange,
/// not evidence of a coordinated wallet group, so reports label them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cex {
    pub name: CexName,
    pub address: Address,
}

impl Cex {
    pub fn new(
        name: CexName,
        address: Address,
    ) -> Self {
        Self {
            name,
            address,
        }
    }

    pub fn get_exchange_name(address: &Address) -> Option<CexName> {
        match address.as_str() {
            constants::COINBASE_HW_1 => Some(CexName::CoinbaseHotWallet1),
            constants::COINBASE_HW_2 => Some(CexName::CoinbaseHotWallet2),
            constants::COINBASE_CW_1 => Some(CexName::CoinbaseColdWallet1),
            constants::OKX_HW_1 => Some(CexName::OkxHotWallet1),
            constants::OKX_MAIN => Some(CexName::Okx),
            constants::MEXC_1 => Some(CexName::Mexc1),
            constants::KRAKEN_MAIN => Some(CexName::Kraken),
            constants::BINANCE_1 => Some(CexName::Binance1),
            constants::BINANCE_2 => Some(CexName::Binance2),
            constants::BYBIT_HW => Some(CexName::BybitHotWallet),
            constants::KUCOIN_1 => Some(CexName::KuCoin1),
            constants::GATE_IO_1 => Some(CexName::Gateio1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CexName {
    #[serde(rename = "coinbase_hw1")]
    CoinbaseHotWallet1,
    #[serde(rename = "coinbase_hw2")]
    CoinbaseHotWallet2,
    #[serde(rename = "coinbase_cw1")]
    CoinbaseColdWallet1,
    #[serde(rename = "okx_hw1")]
    OkxHotWallet1,
    #[serde(rename = "okx")]
    Okx,
    #[serde(rename = "mexc_1")]
    Mexc1,
    #[serde(rename = "kraken")]
    Kraken,
    #[serde(rename = "binance_1")]
    Binance1,
    #[serde(rename = "binance_2")]
    Binance2,
    #[serde(rename = "bybit_hw")]
    BybitHotWallet,
    #[serde(rename = "kucoin_1")]
    KuCoin1,
    #[serde(rename = "gateio_1")]
    Gateio1,
}

impl CexName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CexName::CoinbaseHotWallet1 => "coinbase_hw1",
            CexName::CoinbaseHotWallet2 => "coinbase_hw2",
            CexName::CoinbaseColdWallet1 => "coinbase_cw1",
            CexName::OkxHotWallet1 => "okx_hw1",
            CexName::Okx => "okx",
            CexName::Mexc1 => "mexc_1",
            CexName::Kraken => "kraken",
            CexName::Binance1 => "binance_1",
            CexName::Binance2 => "binance_2",
            CexName::BybitHotWallet => "bybit_hw",
            CexName::KuCoin1 => "kucoin_1",
            CexName::Gateio1 => "gateio_1",
        }
    }
}

impl std::fmt::Display for CexName {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
