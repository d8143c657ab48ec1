pub mod classify;
pub mod compiler;
pub mod report;
pub mod scanner;

pub use classify::{classify, Severity};
pub use report::{Record, Reporter, Sink};
pub use scanner::{Driver, Reassembler};
