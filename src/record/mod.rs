mod record;

pub use record::{Record, RecordError};
