mod error;
pub use error::Error;

pub mod engine;
pub use engine::{Engine, EngineType};

pub mod schema;
pub use schema::Project;

/// A Result type alias that uses rowgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
