pub mod config;
pub mod error;

pub use config::{AppConfig, DemoConfig, GeneralConfig, MarqueeConfig, UiConfig};
pub use error::{Error, Result};
