use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde::ser::SerializeStruct;

use super::address::Address;

/// Which query produced a transfer record relative to the analyzed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    In,
    Out,
}

impl FlowDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowDirection::In => "in",
            FlowDirection::Out => "out",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw record as returned by the ledger transfer source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransfer {
    pub from_address: String,
    pub to_address: String,
    /// Integer amount in the smallest unit (lamports for SOL).
    pub amount: u64,
    pub token_decimals: u8,
    /// Unix seconds.
    pub block_time: i64,
}

/// One page of raw transfer records.
#[derive(Debug, Clone, Default)]
pub struct TransferPage {
    pub transfers: Vec<RawTransfer>,
}

/// A raw record shaped into decimal units, with the query direction attached.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: f64,
    pub block_time: i64,
    pub direction: FlowDirection,
}

impl NormalizedTransfer {
    pub fn key(&self) -> TransactionKey {
        TransactionKey {
            from: self.from.clone(),
            to: self.to.clone(),
            block_time: self.block_time,
        }
    }

    /// The address on the far side of the transfer from the analyzed one.
    pub fn counterparty(&self) -> &Address {
        match self.direction {
            FlowDirection::In => &self.from,
            FlowDirection::Out => &self.to,
        }
    }

    pub fn into_edge(self) -> TransferEdge {
        TransferEdge {
            to: self.to,
            amount: self.amount,
            block_time: self.block_time,
            direction: self.direction,
        }
    }
}

/// Dedup key for a physical transfer discovered via multiple traversal paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionKey {
    pub from: Address,
    pub to: Address,
    pub block_time: i64,
}

/// Directed transfer edge stored under its origin address in the graph.
///
/// `block_time` (unix seconds) is authoritative; the UTC rendering emitted
/// during serialization is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEdge {
    pub to: Address,
    pub amount: f64,
    pub block_time: i64,
    pub direction: FlowDirection,
}

impl TransferEdge {
    pub fn block_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.block_time, 0)
    }
}

impl Serialize for TransferEdge {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("TransferEdge", 5)?;
        state.serialize_field("to", &self.to)?;
        state.serialize_field("amount", &self.amount)?;
        state.serialize_field("block_time", &self.block_time)?;
        let rendered = self.block_time_utc().map(|t| t.to_rfc3339());
        state.serialize_field("block_time_utc", &rendered)?;
        state.serialize_field("direction", &self.direction)?;
        state.end()
    }
}
