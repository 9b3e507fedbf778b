// All LLM prompt constants for the AI module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume analysis — enforces JSON-only output.
pub const RESUME_ANALYSIS_SYSTEM: &str =
    "You are an expert resume reviewer and career coach. \
    Analyze a resume and return structured feedback. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
pub const RESUME_ANALYSIS_TEMPLATE: &str = r#"Analyze the following resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_score": 72,
  "strengths": ["Clear quantified impact in most recent role"],
  "weaknesses": ["No summary section", "Skills list is unfocused"],
  "suggestions": ["Lead each bullet with a measurable outcome"],
  "detected_skills": ["Rust", "PostgreSQL", "Kubernetes"]
}

Rules:
- overall_score is an integer 0-100 judging overall resume quality for a
  professional job search: clarity, evidence of impact, and focus.
- strengths / weaknesses / suggestions each contain 2-5 short, concrete
  items written directly to the candidate.
- detected_skills lists every technical skill, tool, and framework that
  appears in the resume, deduplicated, in the resume's own spelling.

RESUME:
{resume_text}"#;

/// System prompt for job match scoring.
pub const MATCH_SYSTEM: &str = "You are an expert recruiter assessing candidate-job fit. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Single-job match prompt template.
/// Replace: {profile_json}, {skills_json}, {job_json}
pub const MATCH_TEMPLATE: &str = r#"Assess how well this candidate matches the job below.

CANDIDATE PROFILE (may be null if the candidate has not filled it in):
{profile_json}

CANDIDATE SKILLS (detected from their latest resume; may be empty):
{skills_json}

JOB:
{job_json}

Return a JSON object with this EXACT schema:
{
  "match_score": 68,
  "matching_strengths": ["Strong Rust background matches core requirement"],
  "gaps": ["No Kubernetes experience mentioned"],
  "verdict": "One-sentence overall assessment"
}

Base the assessment only on the information provided."#;

/// Batch annotation prompt template — scores several search results in one
/// call. Replace: {profile_json}, {jobs_json}
pub const BATCH_MATCH_TEMPLATE: &str = r#"Score how well each job below matches this candidate.

CANDIDATE PROFILE (may be null):
{profile_json}

JOBS (array of {id, title, company, description}):
{jobs_json}

Return a JSON object with this EXACT schema:
{
  "scores": [
    {"job_id": "the exact id from the input", "match_score": 74}
  ]
}

Rules:
- Include every input job exactly once, keyed by its exact id.
- Judge only from the provided profile and job text."#;

/// System prompt for career recommendations.
pub const RECOMMENDATIONS_SYSTEM: &str =
    "You are an experienced career coach giving practical, specific advice. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Career recommendations prompt template.
/// Replace: {profile_json}, {analysis_json}, {saved_jobs_json}
pub const RECOMMENDATIONS_TEMPLATE: &str = r#"Generate career recommendations for this candidate.

PROFILE (career objectives; may be null):
{profile_json}

LATEST RESUME ANALYSIS (may be null if no resume uploaded):
{analysis_json}

RECENTLY SAVED JOBS (titles and companies; may be empty):
{saved_jobs_json}

Return a JSON object with this EXACT schema:
{
  "summary": "Two or three sentences describing the candidate's situation and direction",
  "recommended_roles": [
    {"title": "Senior Backend Engineer", "reason": "Why this role fits"}
  ],
  "skill_gaps": ["Skills worth developing for the target direction"],
  "next_steps": ["Concrete actions for the next 30 days"]
}

Rules:
- recommended_roles: 3-5 roles, each with a one-sentence reason grounded in
  the provided data.
- skill_gaps: 2-5 items; prefer gaps between the resume and the saved jobs.
- next_steps: 3-5 specific, actionable items, not generic advice.
- If profile and analysis are both null, recommend based on the saved jobs
  alone; if everything is empty, say so in the summary and keep lists short."#;
