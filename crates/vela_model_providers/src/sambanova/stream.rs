//! SSE decoding for streamed responses.
//!
//! The API streams `data: {json}` lines terminated by a `data: [DONE]`
//! sentinel. Decoding is line-buffered and tolerant: a line that fails to
//! parse is dropped and the stream continues, while a transport-level read
//! failure terminates the stream with an error.

use super::types::{ChatChunk, CompletionChunk};
use async_stream::stream;
use futures_util::{Stream, StreamExt, pin_mut};
use vela_models::llm::{FragmentStream, GenerationError};

/// Pulls the next text fragment out of one decoded SSE payload.
pub(crate) type FragmentExtractor = fn(&str) -> Result<Option<String>, serde_json::Error>;

/// Extracts `choices[0].text` from a `/completions` chunk.
pub(crate) fn completion_fragment(data: &str) -> Result<Option<String>, serde_json::Error> {
    let chunk: CompletionChunk = serde_json::from_str(data)?;
    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.text)
        .filter(|text| !text.is_empty()))
}

/// Extracts `choices[0].delta.content` from a `/chat/completions` chunk.
pub(crate) fn chat_fragment(data: &str) -> Result<Option<String>, serde_json::Error> {
    let chunk: ChatChunk = serde_json::from_str(data)?;
    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta)
        .and_then(|delta| delta.content)
        .filter(|text| !text.is_empty()))
}

enum LineOutcome {
    Fragment(String),
    Done,
    Skip,
}

fn decode_line(raw: &[u8], extract: FragmentExtractor) -> LineOutcome {
    let Ok(text) = core::str::from_utf8(raw) else {
        return LineOutcome::Skip;
    };
    let text = text.trim_end_matches(['\r', '\n']);
    if text.is_empty() {
        return LineOutcome::Skip;
    }

    let data = text.strip_prefix("data: ").unwrap_or(text);
    if data.trim() == "[DONE]" {
        return LineOutcome::Done;
    }

    match extract(data) {
        Ok(Some(fragment)) => LineOutcome::Fragment(fragment),
        Ok(None) => LineOutcome::Skip,
        Err(err) => {
            // Drop-and-continue: malformed chunks never fail the stream.
            tracing::debug!(error = %err, "dropping undecodable stream line");
            LineOutcome::Skip
        }
    }
}

/// Converts a byte stream into a fragment stream by line-buffered SSE decoding.
///
/// Fragments are yielded in arrival order. The `data: [DONE]` sentinel ends
/// the stream cleanly; a read error from the underlying transport yields one
/// [`GenerationError::Http`] and ends it.
pub(crate) fn decode_sse<S, B, E>(byte_stream: S, extract: FragmentExtractor) -> FragmentStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: core::fmt::Display + Send + 'static,
{
    let out = stream! {
        pin_mut!(byte_stream);
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(next) = byte_stream.next().await {
            let bytes = match next {
                Ok(bytes) => bytes,
                Err(err) => {
                    yield Err(GenerationError::Http(err.to_string()));
                    return;
                }
            };

            buffer.extend_from_slice(bytes.as_ref());
            while let Some(end) = buffer.iter().position(|&byte| byte == b'\n') {
                let line: Vec<u8> = buffer.drain(..=end).collect();
                match decode_line(&line, extract) {
                    LineOutcome::Fragment(fragment) => yield Ok(fragment),
                    LineOutcome::Done => return,
                    LineOutcome::Skip => {}
                }
            }
        }

        // The final line may arrive without a trailing newline.
        if let LineOutcome::Fragment(fragment) = decode_line(&buffer, extract) {
            yield Ok(fragment);
        }
    };

    Box::pin(out)
}
