mod delimiter;
mod driver;
mod reassembler;
mod scope;

pub use delimiter::{delimiter_delta, find_true_closer};
pub use driver::Driver;
pub use reassembler::{Reassembler, DEFAULT_WRAP_COLUMN};
pub use scope::{open_scope, Scope, ScopeKind};
