/// ======================= Ledger API =======================
/// Default base URL for the ledger transfer/holder API. This is a public API
/// endpoint, not a secret; the credential comes from config or environment.
pub const DEFAULT_LEDGER_API_URL: &str = "https://pro-api.solscan.io/v2.0";

/// Request header carrying the API credential.
pub const LEDGER_API_KEY_HEADER: &str = "token";

/// Environment variable consulted when the config omits the API key.
pub const API_KEY_ENV: &str = "MURAQIB_API_KEY";

/// ======================= Native token =======================
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const SOL_DECIMALS: u8 = 9;

/// ======================= CEX wallets =======================
pub const COINBASE_HW_1: &str = "FpwQQhQQoEaVu3WU2qZMfF1hx48YyfwsLoRgXG83E99Q";
pub const COINBASE_HW_2: &str = "GJRs4FwHtemZ5ZE9x3FNvJ8TMwitKTh21yxdRPqn7npE";
pub const COINBASE_CW_1: &str = "CKy3KzEMSL1PQV6Wppggoqi2nGA7teE4L7JipEK89yqj";

pub const OKX_HW_1: &str = "is6MTRHEgyFLNTfYcuV4QBWLjrZBfmhVNYR6ccgr8KV";
pub const OKX_MAIN: &str = "5VCwKtCXgCJ6kit5FybXjvriW3xELsFDhYrPSqtJNmcD";

pub const MEXC_1: &str = "ASTyfSima4LLAdDgoFGkgqoKowG1LZFDr9fAQrg7iaJZ";

pub const KRAKEN_MAIN: &str = "FWznbcNXWQuHTawe9RxvQ2LdCENssh12dsznf4RiouN5";

pub const BINANCE_1: &str = "2ojv9BAiHUrvsm9gxDe7fJSzbNZSJcxZvf8dqmWGHG8S";
pub const BINANCE_2: &str = "5tzFkiKscXHK5ZXCGbXZxdw7gTjjD1mBwuoFbhUvuAi9";

pub const BYBIT_HW: &str = "AC5RDfQFmDS1deWZos921JfqscXdByf8BKHs5ACWjtW2";

pub const KUCOIN_1: &str = "57vSaRTqN9iXaemgh4AoDsZ63mcaoshfMK8NP3Z5QNbs";

pub const GATE_IO_1: &str = "u6PJ8DtQuPFnfmwHbGFULQ4u4EgjDiyYKjVEsynXq2w";
