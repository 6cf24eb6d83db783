//! Static catalog of SambaNova model identifiers.

// Hardcoded for now: SambaNova has no model-listing endpoint stable enough
// to discover against at startup.
const MODELS: &[&str] = &[
    "Meta-Llama-3.2-1B-Instruct",
    "Meta-Llama-3.2-3B-Instruct",
    "Meta-Llama-3.1-8B-Instruct",
    "Meta-Llama-3.1-8B-Instruct-8k",
    "Meta-Llama-3.1-70B-Instruct",
    "Meta-Llama-3.1-70B-Instruct-8k",
    "Meta-Llama-3.1-405B-Instruct",
    "Meta-Llama-3.1-405B-Instruct-8k",
    "DeepSeek-R1-Distill-Llama-70B",
    "Llama-3.1-Tulu-3-405B",
    "Meta-Llama-3.3-70B-Instruct",
    "Meta-Llama-Guard-3-8B",
    "Llama-3.2-90B-Vision-Instruct",
    "Llama-3.2-11B-Vision-Instruct",
    "Qwen2.5-72B-Instruct",
    "Qwen2.5-Coder-32B-Instruct",
    "QwQ-32B-Preview",
];

/// Returns the ordered list of remote model identifiers this provider exposes.
///
/// Constant across calls; each identifier is registered twice (chat and
/// completion mode) by [`register_models`](super::register_models).
#[must_use]
pub fn catalog() -> &'static [&'static str] {
    MODELS
}
