pub mod common;
pub mod error;
pub mod format;
pub mod query;
pub mod upload;
pub mod user;

pub use common::*;
pub use error::*;
pub use query::*;
pub use upload::*;
pub use user::*;
