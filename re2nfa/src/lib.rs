#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod compiler;
mod thompson;

pub mod concat;
pub mod postfix;

pub use automata;
pub use compiler::*;
