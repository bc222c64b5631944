pub mod fixture;

#[allow(unused_imports)]
pub use fixture::{Fixture, table_cells};
