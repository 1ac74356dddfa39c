//! Terminal I/O: frame output and session setup.

pub mod output;
mod session;

pub use output::present;
pub use session::TerminalSession;
