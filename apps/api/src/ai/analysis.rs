//! Resume analysis — scores an uploaded resume and extracts skills.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::{RESUME_ANALYSIS_SYSTEM, RESUME_ANALYSIS_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Resume text beyond this is cut before prompting.
const MAX_RESUME_CHARS: usize = 12_000;

/// Structured output of resume analysis. Persisted verbatim as the
/// resume row's `analysis` JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub overall_score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub detected_skills: Vec<String>,
}

/// Analyzes extracted resume text with the LLM.
pub async fn analyze_resume(text: &str, llm: &LlmClient) -> Result<ResumeAnalysis, AppError> {
    let prompt = RESUME_ANALYSIS_TEMPLATE.replace("{resume_text}", truncate_chars(text, MAX_RESUME_CHARS));
    llm.call_json::<ResumeAnalysis>(&prompt, RESUME_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))
}

/// Cuts at a char boundary so multi-byte text never splits mid-character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
