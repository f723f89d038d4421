pub mod decl;
pub use decl::{Declaration, Source};

mod error;
pub use error::{EntityKind, Error};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses Modelkit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
