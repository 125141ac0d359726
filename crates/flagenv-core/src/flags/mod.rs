//! Minimal flag registry: the host side of environment binding.
//!
//! `FlagSource` is the contract the binder depends on; `FlagSet` is the
//! in-crate implementation used by the CLI and the tests.

mod set;
mod value;

pub use set::{Flag, FlagSet, FlagSource};
pub use value::{parse_bool, parse_int, BoolValue, FlagValue, IntValue, StringValue};
