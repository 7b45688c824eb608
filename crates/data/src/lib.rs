//! Loading of card catalogs, deck lists and rules configuration.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
