pub mod dataset;
pub mod tabular;

pub use dataset::{DatasetStore, JsonDirStore, MemStore, StoreError, load_or_compute};
pub use tabular::{read_csv, write_csv};
