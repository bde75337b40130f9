//! Caption dataset loading.

mod caption_dataset;
mod record;

pub use caption_dataset::*;
pub use record::*;
