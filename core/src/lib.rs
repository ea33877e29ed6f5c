pub mod option;
pub mod iter;
pub mod error;

pub mod app;

pub use error::EmptyValueAccess;
pub use option::Option;
