//! Subcommand implementations.

mod check_env;
mod env_names;
mod resolve;
mod show;
mod urls;

pub use check_env::run_check_env;
pub use env_names::run_env_names;
pub use resolve::{load_manifest, resolve};
pub use show::run_show;
pub use urls::run_urls;
