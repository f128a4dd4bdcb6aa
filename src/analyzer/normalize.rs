use crate::error::LedgerError;
use crate::model::Address;
use crate::model::FlowDirection;
use crate::model::NormalizedTransfer;
use crate::model::RawTransfer;

/// Shape a raw ledger record into decimal units.
///
/// Pure: the same record and direction always produce the same result. The
/// direction comes from the query that produced the record, never from the
/// record itself. Empty endpoint addresses are the malformed-response case;
/// the caller logs and skips them.
pub fn normalize(
    record: &RawTransfer,
    direction: FlowDirection,
) -> Result<NormalizedTransfer, LedgerError> {
    if record.from_address.is_empty() || record.to_address.is_empty() {
        return Err(LedgerError::MalformedResponse(format!(
            "transfer record at block_time {} has an empty endpoint address",
            record.block_time
        )));
    }

    let amount = record.amount as f64 / 10f64.powi(record.token_decimals as i32);

    Ok(NormalizedTransfer {
        from: Address::new(record.from_address.clone()),
        to: Address::new(record.to_address.clone()),
        amount,
        block_time: record.block_time,
        direction,
    })
}
