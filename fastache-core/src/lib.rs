//! fastache core library: the host data model and data-file loading.
//!
//! - [`value`]: [`Value`], the read-only data a template is rendered against
//! - [`data`]: load JSON / YAML data files into a [`Value`]
//! - [`error`]: [`DataError`]

pub mod data;
pub mod error;
pub mod value;

pub use data::{load_data, parse_data, DataFormat};
pub use error::DataError;
pub use value::Value;
