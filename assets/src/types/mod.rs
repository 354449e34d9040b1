mod config;
mod environment;
mod error;

pub use config::AssetsConfig;
pub use environment::Environment;
pub use error::{AssetError, AssetResult};
