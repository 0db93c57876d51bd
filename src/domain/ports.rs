use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait ConfigProvider: Send + Sync {
    fn python_command(&self) -> &str;
    fn auto_install(&self) -> bool;
    fn suppress_warnings(&self) -> bool;
}

/// Turns a file into markdown text. Implementations report failures as
/// `ConversionError` so the message always names the offending path.
#[async_trait]
pub trait Converter: Send + Sync {
    async fn convert(&self, path: &Path) -> Result<String>;
}
