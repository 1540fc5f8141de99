pub mod records;

pub use records::{demo_records, RecordStore, StoreError};
