//! Prompt construction for the instruction-dataset generation request.
//! Pure formatting: the same page text always yields the same prompt.

/// Fixed domain label stamped into every generated record.
pub const CATEGORY: &str = "رمز ارز";

/// Minimum number of samples the model is asked to produce per page.
const SAMPLES_PER_PAGE: usize = 10;

/// Build the generation prompt for one page of source text.
pub fn build_prompt(page_content: &str) -> String {
    format!(
        r#"From the page text below, extract at least {samples} high-quality samples for a Persian instruction-tuning dataset in the cryptocurrency domain.
Each sample must be a JSON object with exactly this structure:

{{
  "instruction": "[the instruction or question, in Persian]",
  "input": "[optional input text — leave empty if not needed]",
  "output": "[a complete, precise answer to the instruction]",
  "category": "{category}"
}}

Page text:
{content}

The instructions should be varied, realistic and practical, covering question answering, summarization, analysis, classification and content generation.
Answers must be comprehensive, accurate and grammatically correct.
All content must relate to the cryptocurrency domain and contain no sensitive, personal, political or inappropriate material.

Return only the JSON samples, with no additional commentary."#,
        samples = SAMPLES_PER_PAGE,
        category = CATEGORY,
        content = page_content,
    )
}

// ── Tests ──
