//! Environment variable overrides for registered flags.
//!
//! A flag `listen-urls` under prefix `APP` is read from `APP_LISTEN_URLS`
//! unless it was already set on the command line.

mod bind;
mod lookup;

pub use bind::{
    env_var_name, set_flags_from_env, set_flags_from_process_env, unused_env_vars, BindReport,
    Binding,
};
pub use lookup::{EnvLookup, ProcessEnv};
