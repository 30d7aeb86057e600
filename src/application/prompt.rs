//! Prompt template for the trend research request.

use crate::domain::values::time_frame::TimeFrame;
use chrono::NaiveDate;

/// Shopping sites whose pages never count as trend articles.
pub const EXCLUDED_SITES: [&str; 4] = ["Pinterest", "Amazon", "Shopee", "Taobao"];

/// Distinct site domains asked for when at least this many items are requested.
pub const MIN_DISTINCT_DOMAINS: usize = 3;

/// Inputs of the prompt template.
#[derive(Debug, Clone)]
pub struct PromptInput<'a> {
    pub topics: &'a [String],
    pub time_frame: TimeFrame,
    pub today: NaiveDate,
    pub language: &'a str,
    pub max_items: usize,
}

pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let topic_label = input.topics.join(", ");
    let cutoff = input.time_frame.cutoff_phrase(input.today);
    let excluded = EXCLUDED_SITES.join(", ");
    // Never ask for more domains than articles.
    let min_domains = MIN_DISTINCT_DOMAINS.min(input.max_items);

    format!(
        r#"You are a meticulous consumer-electronics trend analyst. Write every field of your answer in {language}.

[Today's date]: {today}

[Task]:
Run an in-depth Google search on the topic tags: [{topic_label}].

[Strict rules - no dead links]:
1. Never guess a URL. Use only URLs that literally appear in the results of the Google Search tool. If no suitable link is found, do not make one up.
2. Link check: before answering, make sure each URL looks like a full article page (for example ending in .html, or containing /article/ or /news/), not a homepage.
3. Source diversity: every returned article must come from a different site domain (at least {min_domains} distinct domains).
4. Time range: only pick news from this window: {cutoff}.
5. Exclusions: skip shopping sites such as {excluded}.

Find the {max_items} most inspiring articles and answer with the following JSON only (no Markdown code fences, pure JSON):

[
  {{
    "title": "Article title (translated into {language})",
    "url": "Real article URL (copied verbatim from the search results)",
    "source": "Name of the source site (e.g. The Verge)",
    "date": "Publication date (e.g. 2024-10-15)",
    "summary": "Summary in {language} (about 80 words, explaining what is new about the trend)",
    "tags": ["related tag 1", "related tag 2"]
  }}
]
"#,
        language = input.language,
        today = input.today.format("%Y/%m/%d"),
        topic_label = topic_label,
        min_domains = min_domains,
        cutoff = cutoff,
        excluded = excluded,
        max_items = input.max_items,
    )
}
