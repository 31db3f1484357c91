//! Result rendering — a pure projection from a decoded [`UploadResponse`] to the
//! view model the results region is drawn from.
//!
//! Nothing here touches the network or validation; every function is
//! deterministic and tested without a page.

use crate::flow::sources::primary_source;
use crate::models::upload::{AnalysisResult, Recommendation, UploadResponse};

pub const DOMAIN_PLACEHOLDER: &str = "General";
pub const SKILLS_PLACEHOLDER: &str = "No specific skills identified";
pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No recommendations found. Try uploading a more detailed resume.";

/// Skills shown before the rest collapse into a "+N more" tag.
const MAX_VISIBLE_SKILLS: usize = 10;
const STAR_SYMBOL: char = '★';
const MAX_STARS: u32 = 5;
/// Seconds between consecutive course cards appearing.
const CARD_STAGGER_SECS: f64 = 0.1;

const PAID_ICON: &str = "💰";
const FREE_ICON: &str = "🆓";

// ────────────────────────────────────────────────────────────────────────────
// View model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub label: String,
    /// CSS class; placeholder and summary tags are styled apart from real values.
    pub class: &'static str,
}

impl Tag {
    fn value(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class: "tag",
        }
    }

    fn muted(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class: "tag tag-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    pub course_name: String,
    pub instructor: String,
    pub platform: String,
    pub match_percentage: u32,
    pub stars: String,
    pub rating_label: String,
    pub cost_icon: &'static str,
    pub cost_label: String,
    pub enrolled_label: Option<String>,
    pub source_url: Option<String>,
    pub course_url: Option<String>,
    pub match_reasons: Vec<String>,
    /// CSS `animation-delay`, e.g. `"0.3s"` for the fourth card.
    pub animation_delay: String,
}

impl CourseCard {
    pub fn has_match_reasons(&self) -> bool {
        !self.match_reasons.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub experience_level: String,
    pub skill_count: u64,
    pub domain_tags: Vec<Tag>,
    pub skill_tags: Vec<Tag>,
    pub education_tags: Vec<Tag>,
    pub recommendation_count: usize,
    pub cards: Vec<CourseCard>,
    /// Set only when there are no cards.
    pub empty_message: Option<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

pub fn render_results(response: &UploadResponse) -> ResultsView {
    let default_analysis = AnalysisResult::default();
    let analysis = response.analysis.as_ref().unwrap_or(&default_analysis);
    let recommendations = response.recommendations.as_deref().unwrap_or_default();

    let cards: Vec<CourseCard> = recommendations
        .iter()
        .enumerate()
        .map(|(index, rec)| render_course_card(index, rec))
        .collect();

    ResultsView {
        experience_level: analysis.experience_level.clone(),
        skill_count: analysis.skill_count,
        domain_tags: render_domain_tags(&analysis.domains),
        skill_tags: render_skill_tags(&analysis.skills),
        education_tags: analysis.education.iter().map(Tag::value).collect(),
        recommendation_count: cards.len(),
        empty_message: cards.is_empty().then_some(NO_RECOMMENDATIONS_MESSAGE),
        cards,
    }
}

pub fn render_domain_tags(domains: &[String]) -> Vec<Tag> {
    if domains.is_empty() {
        return vec![Tag::muted(DOMAIN_PLACEHOLDER)];
    }
    domains.iter().map(|d| Tag::value(domain_label(d))).collect()
}

/// `"data_science"` → `"DATA SCIENCE"`.
pub fn domain_label(domain: &str) -> String {
    domain.replace('_', " ").to_uppercase()
}

pub fn render_skill_tags(skills: &[String]) -> Vec<Tag> {
    if skills.is_empty() {
        return vec![Tag::muted(SKILLS_PLACEHOLDER)];
    }

    let mut tags: Vec<Tag> = skills
        .iter()
        .take(MAX_VISIBLE_SKILLS)
        .map(Tag::value)
        .collect();

    if skills.len() > MAX_VISIBLE_SKILLS {
        tags.push(Tag::muted(format!(
            "+{} more",
            skills.len() - MAX_VISIBLE_SKILLS
        )));
    }
    tags
}

pub fn render_course_card(index: usize, rec: &Recommendation) -> CourseCard {
    let is_paid = rec.is_paid == "Paid";

    CourseCard {
        course_name: rec.course_name.clone(),
        instructor: rec.instructor.clone(),
        platform: rec.platform.clone(),
        match_percentage: rec.match_percentage,
        stars: star_symbols(rec.rating),
        rating_label: format_rating(rec.rating),
        cost_icon: if is_paid { PAID_ICON } else { FREE_ICON },
        cost_label: rec.is_paid.clone(),
        enrolled_label: rec
            .enrolled
            .filter(|&n| n > 0)
            .map(|n| format_number(n.unsigned_abs())),
        source_url: primary_source(rec.sources.as_ref()),
        course_url: Some(rec.course_url.trim())
            .filter(|u| !u.is_empty())
            .map(String::from),
        match_reasons: rec.match_reasons.clone(),
        animation_delay: format!("{:.1}s", index as f64 * CARD_STAGGER_SECS),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Formatting helpers
// ────────────────────────────────────────────────────────────────────────────

/// Number of star symbols for a rating: whole stars plus one more when the
/// fractional part is at least one half. Out-of-range ratings are clamped.
pub fn star_count(rating: f64) -> u32 {
    if !rating.is_finite() {
        return 0;
    }
    let rating = rating.clamp(0.0, MAX_STARS as f64);
    let full = rating.floor();
    let half = if rating - full >= 0.5 { 1 } else { 0 };
    (full as u32 + half).min(MAX_STARS)
}

pub fn star_symbols(rating: f64) -> String {
    std::iter::repeat(STAR_SYMBOL)
        .take(star_count(rating) as usize)
        .collect()
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Groups digits in threes from the right: `1234567` → `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
