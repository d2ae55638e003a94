pub mod config;
pub mod error;
pub mod user;

pub use config::*;
pub use error::*;
pub use user::*;
