mod error;
mod handler;
mod namespace;
mod route;
mod table;

pub use error::*;
pub use namespace::*;
pub use route::*;
pub use table::*;
