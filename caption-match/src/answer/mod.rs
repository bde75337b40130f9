//! Interactive answer collection.

mod collect;
mod source;
mod validation;

pub use collect::*;
pub use source::*;
pub use validation::*;
