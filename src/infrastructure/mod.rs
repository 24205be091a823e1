//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod samples;

pub use config::Config;
pub use repository::{FileSystemRepository, TagRepository};
pub use samples::SampleSource;
