// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to scoring prompts so scores stay comparable
/// across calls.
pub const SCORING_INSTRUCTION: &str = "\
    Scores are integers from 0 to 100. \
    Calibrate conservatively: 90+ means an exceptional match, 50 means \
    plausible with real gaps, below 30 means a poor match. \
    Never return a score outside 0-100.";
