mod cache;
mod dataset;
mod enriched;
mod error;
mod raw;

pub use cache::DatasetCache;
pub use dataset::{load_dataset, Dataset};
pub use enriched::{write_enriched_comments, EnrichedCsvRow};
pub use error::StoreError;
pub use raw::{read_raw_comments, write_raw_comments};
