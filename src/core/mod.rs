pub mod markitdown;
pub mod native;
pub mod worker;

pub use crate::domain::model::{Backend, BatchSummary};
pub use crate::domain::ports::{ConfigProvider, Converter};
pub use crate::utils::error::Result;
