use serde::Deserialize;

/// Top-level envelope returned by the analysis service for `POST /upload`.
///
/// Every field is optional on the wire. A missing `success` decodes as `false`,
/// which routes the response to the error path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(default)]
    pub total_recommendations: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub skill_count: u64,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub match_percentage: u32, // 0 – 100
    #[serde(default)]
    pub rating: f64, // 0.0 – 5.0
    /// "Paid", "Free" or "Unknown".
    #[serde(default)]
    pub is_paid: String,
    #[serde(default)]
    pub enrolled: Option<i64>,
    #[serde(default)]
    pub match_reasons: Vec<String>,
    #[serde(default)]
    pub course_url: String,
    #[serde(default)]
    pub sources: Option<Sources>,
}

/// Course sources as the service emits them: either a proper JSON array, or a
/// Python-style list literal serialized as one string (`"['http://a', 'http://b']"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Sources {
    List(Vec<String>),
    Encoded(String),
}
