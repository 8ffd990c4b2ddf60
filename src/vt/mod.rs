//! Value Types

mod array;
mod value;

pub use array::*;
pub use value::*;
