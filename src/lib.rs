//! Convert German bank CSV exports into YNAB4 import files.
//!
//! ```rust,ignore
//! use ynabify::{AccountType, ConverterBuilder};
//!
//! let written = ConverterBuilder::new()
//!     .filename("1234567890.csv")
//!     .account_type(AccountType::Girokonto)
//!     .skip_lines(6)
//!     .convert_file()?;
//! ```

mod builder;
mod types;

pub mod errors;
pub mod reader;
pub mod transform;
pub mod writer;

pub use builder::ConverterBuilder;
pub use errors::{ConvertError, ConvertResult};
pub use transform::prelude::*;
pub use types::{AccountType, YnabRow};
