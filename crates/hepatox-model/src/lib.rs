pub mod assess;
pub mod config;
pub mod error;
pub mod types;

pub use assess::*;
pub use config::*;
pub use error::ModelError;
pub use hepatox_core::*;
pub use types::*;
