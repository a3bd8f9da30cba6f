pub mod config;
pub mod environment;
pub mod error;
pub mod files;
pub mod headers;
pub mod hooks;

pub use config::*;
pub use environment::*;
pub use error::*;
pub use files::*;
pub use headers::*;
pub use hooks::*;
