//! Frostt: streaming summaries for sparse coordinate tensor files.
//!
//! FROSTT tensors are stored as whitespace-delimited coordinate lists
//! (`.tns`, optionally gzip-compressed): each data line holds the 1-based
//! indices of one non-zero entry followed by its value, and lines starting
//! with `#` are comments. This crate derives the summary statistics a
//! dataset page needs (order, non-zero count, dimension sizes, density)
//! in a single forward pass over the file.
//!
//! # Quick Start
//!
//! ```no_run
//! use frostt::{collect_stats, StatOverrides};
//! use std::path::Path;
//!
//! let stats = collect_stats(
//!     Some(Path::new("chicago-crime.tns.gz")),
//!     StatOverrides::default(),
//! ).unwrap();
//! println!("{}-order tensor, {} non-zeros", stats.order, stats.nonzeros);
//! ```
//!
//! # Modules
//!
//! - [`reader`]: lazy line-oriented reader for `.tns` / `.tns.gz` files
//! - [`stats`]: the statistics accumulator and its override configuration
//! - [`error`]: error types shared by both

pub mod error;
pub mod reader;
pub mod stats;

pub use error::{FrosttError, Result};
pub use reader::{Record, TnsReader};
pub use stats::{collect_stats, StatOverrides, StatsAccumulator, TensorStats};
