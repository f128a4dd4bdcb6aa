pub mod address;
pub mod cex;
pub mod graph;
pub mod holder;
pub mod report;
pub mod transfer;

pub use address::Address;
pub use graph::TransferGraph;
pub use holder::TokenHolder;
pub use report::AnalysisReport;
pub use transfer::FlowDirection;
pub use transfer::NormalizedTransfer;
pub use transfer::RawTransfer;
pub use transfer::TransactionKey;
pub use transfer::TransferEdge;
pub use transfer::TransferPage;
