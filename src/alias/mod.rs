mod error;
mod model;
mod store;

pub use error::*;
pub use model::*;
pub use store::*;
