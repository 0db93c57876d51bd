use crate::core::Converter;
use crate::utils::error::{MdpipeError, Result};
use async_trait::async_trait;
use std::path::Path;

/// In-process backend delegating to the markdownify crate. Format detection
/// and parsing are entirely the library's responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConverter;

impl NativeConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Converter for NativeConverter {
    async fn convert(&self, path: &Path) -> Result<String> {
        let display = path.display().to_string();
        let owned = path.to_path_buf();

        // markdownify is blocking; keep it off the runtime worker threads.
        // Its boxed error is not Send, so collapse it to a message first.
        let outcome = tokio::task::spawn_blocking(move || {
            markdownify::convert(&owned, None).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| MdpipeError::ConversionError {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        outcome.map_err(|reason| MdpipeError::ConversionError {
            path: display,
            reason,
        })
    }
}
