pub mod defaults;
pub mod filter_config;

pub use filter_config::FilterConfig;
