pub mod client;
pub mod engine;
pub mod prefix;

pub use crate::domain::model::{LookupResult, Prefix, Projection};
pub use crate::domain::ports::{ConfigProvider, PrefixLookup};
pub use crate::utils::error::Result;
