//! Prompt constants for the LLM client.

/// Extracts technical skills from README content. `{readme}` is substituted
/// with the raw README text.
pub const SKILL_EXTRACTION_PROMPT: &str = "\
You are a resume analyzer. Given this README content, extract a list of \
technical skills or technologies used in the project. Return one skill per \
line with no other text.

README:
{readme}";
