pub mod models;
pub mod store;
pub mod validation;
pub mod errors;

pub use models::*;
pub use store::*;
pub use validation::*;
pub use errors::*;
