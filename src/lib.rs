pub mod config;
pub mod error;
pub mod extractor;
pub mod google;
pub mod startup;
pub mod sync;
