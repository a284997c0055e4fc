#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

pub mod nfa;
pub mod table;

pub use nfa::{NfaBuilder, NFA};
pub use table::Table;
