#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{JsonFileSource, JsonStrSource, parse_records};
pub use repository::{
    InMemorySource, OptionRecord, QuestionRecord, QuestionSource, StorageError, records_into_bank,
};
