pub mod config;
pub mod error;
pub mod markup;

pub use config::{AppConfig, LogLevel, LoggingConfig};
pub use error::{MarkupError, MarkupErrorKind};
pub use markup::{MarkupChild, MarkupNode};
