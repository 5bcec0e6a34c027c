pub mod models;
pub mod timer;
pub mod validation;

pub use models::*;
