mod error;
mod model;
pub mod profile;
pub mod source;

pub use error::*;
pub use model::*;
