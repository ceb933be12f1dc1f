//! Ingest boundary: turns delimited files into row mappings.
//!
//! The matching core only ever sees [`leadqa_model::Dataset`] values; file
//! bytes stop here.

mod csv_table;

pub use csv_table::read_dataset;
