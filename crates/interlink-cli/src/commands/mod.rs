//! Command implementations.

pub mod config;
pub mod expand;
pub mod export;
pub mod lca;

pub use self::config::execute_config;
pub use self::expand::execute_expand;
pub use self::export::execute_export;
pub use self::lca::execute_lca;
