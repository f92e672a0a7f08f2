//! Quiz-result use cases

pub mod get_records;
pub mod save_result;

pub use get_records::{GetRecordsCommand, GetRecordsResponse, GetRecordsUseCase, RecordView};
pub use save_result::{SaveResultCommand, SaveResultResponse, SaveResultUseCase};
