use crate::core::{BatchSummary, Converter};
use crate::utils::error::Result;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Delimiter written after every converted blob so a downstream reader can
/// split the combined stream.
pub const SENTINEL: u8 = 0;

pub struct WorkerEngine<C: Converter> {
    converter: C,
}

impl<C: Converter> WorkerEngine<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Drive the conversion loop: one trimmed path per input line, one output
    /// unit per line (blob + sentinel on success, error report on failure).
    ///
    /// Conversions run strictly one at a time, in input order. A failed
    /// conversion is logged and counted; only I/O errors on the output
    /// stream itself abort the batch.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> Result<BatchSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut summary = BatchSummary::default();

        while let Some(line) = lines.next_line().await? {
            let path = line.trim();

            match self.converter.convert(Path::new(path)).await {
                Ok(markdown) => {
                    output.write_all(markdown.as_bytes()).await?;
                    output.write_all(&[SENTINEL]).await?;
                    // flush per item so callers can consume records as they arrive
                    output.flush().await?;
                    summary.converted += 1;
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MdpipeError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::io::BufReader;

    struct MockConverter {
        outputs: HashMap<String, String>,
    }

    impl MockConverter {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                outputs: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Converter for MockConverter {
        async fn convert(&self, path: &Path) -> Result<String> {
            let key = path.to_string_lossy().to_string();
            self.outputs
                .get(&key)
                .cloned()
                .ok_or(MdpipeError::ConversionError {
                    path: key,
                    reason: "unsupported".to_string(),
                })
        }
    }

    fn split_records(output: &[u8]) -> Vec<String> {
        output
            .split(|b| *b == SENTINEL)
            .map(|chunk| String::from_utf8(chunk.to_vec()).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_blobs_in_input_order_with_sentinels() {
        let converter = MockConverter::new(&[("a.docx", "text-a"), ("b.pdf", "text-b")]);
        let engine = WorkerEngine::new(converter);

        let mut output = Vec::new();
        let summary = engine
            .run(BufReader::new(&b"a.docx\nb.pdf\n"[..]), &mut output)
            .await
            .unwrap();

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 0);

        let records = split_records(&output);
        assert_eq!(records, vec!["text-a", "text-b", ""]);
    }

    #[tokio::test]
    async fn test_failure_continues_and_is_counted() {
        let converter = MockConverter::new(&[("a.docx", "text-a"), ("b.pdf", "text-b")]);
        let engine = WorkerEngine::new(converter);

        let mut output = Vec::new();
        let summary = engine
            .run(BufReader::new(&b"a.docx\nbad.xyz\nb.pdf\n"[..]), &mut output)
            .await
            .unwrap();

        // bad.xyz is reported, not emitted; the batch keeps going
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 1);

        let records = split_records(&output);
        assert_eq!(records, vec!["text-a", "text-b", ""]);
    }

    #[tokio::test]
    async fn test_lines_are_trimmed() {
        let converter = MockConverter::new(&[("a.docx", "text-a")]);
        let engine = WorkerEngine::new(converter);

        let mut output = Vec::new();
        let summary = engine
            .run(BufReader::new(&b"  a.docx \t\n"[..]), &mut output)
            .await
            .unwrap();

        assert_eq!(summary.converted, 1);
        assert_eq!(split_records(&output), vec!["text-a", ""]);
    }

    #[tokio::test]
    async fn test_empty_input_produces_nothing() {
        let engine = WorkerEngine::new(MockConverter::new(&[]));

        let mut output = Vec::new();
        let summary = engine.run(BufReader::new(&b""[..]), &mut output).await.unwrap();

        assert_eq!(summary, BatchSummary::default());
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_blank_line_is_attempted_and_reported() {
        let engine = WorkerEngine::new(MockConverter::new(&[]));

        let mut output = Vec::new();
        let summary = engine.run(BufReader::new(&b"\n"[..]), &mut output).await.unwrap();

        assert_eq!(summary.converted, 0);
        assert_eq!(summary.failed, 1);
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_missing_trailing_newline_still_processed() {
        let converter = MockConverter::new(&[("a.docx", "text-a")]);
        let engine = WorkerEngine::new(converter);

        let mut output = Vec::new();
        let summary = engine
            .run(BufReader::new(&b"a.docx"[..]), &mut output)
            .await
            .unwrap();

        assert_eq!(summary.converted, 1);
    }
}
