pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::markitdown::MarkitdownConverter;
pub use core::native::NativeConverter;
pub use core::worker::WorkerEngine;
pub use domain::model::{Backend, BatchSummary};
pub use utils::error::{MdpipeError, Result};
