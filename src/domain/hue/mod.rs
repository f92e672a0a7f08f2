pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub mod testing;

pub use entities::{HueRecord, HueResultSubmission};
pub use errors::HueError;
pub use ports::{HueRecordRepository, ResultGenerator};
pub use services::HueService;
pub use value_objects::{HueChoices, HueResult, HueRgb, RecordRange};
