use chrono::DateTime;
use chrono::Utc;

use crate::constants::LAMPORTS_PER_SOL;

/// Convert SOL to lamports
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL as f64) as u64
}

/// Render unix seconds as an RFC 3339 UTC string for logs and reports.
/// Out-of-range timestamps render as the raw integer.
pub fn format_block_time(block_time: i64) -> String {
    match DateTime::<Utc>::from_timestamp(block_time, 0) {
        Some(time) => time.to_rfc3339(),
        None => block_time.to_string(),
    }
}
