//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use repository::{collect_files, FileSystemRepository, ProjectRepository};
