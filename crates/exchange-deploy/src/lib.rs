pub mod cli;
pub mod config;
pub mod constants;
pub mod deploy;
pub mod logging;

pub use deploy::deploy_exchange;
