use serde::{Deserialize, Serialize};

/// Output of the external signature-matching service: the signatures it
/// extracted from the reference image and from the query image, each ordered
/// by the service's own ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub reference: Vec<SignatureEntry>,
    pub query: Vec<SignatureEntry>,
}

/// One extracted signature. `similarities` is only populated on query
/// entries; index `i` scores the query against `reference[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub confidence: f32,
    /// Cropped signature image as a data-URL-prefixed base64 string.
    pub image: String,
    #[serde(default)]
    pub similarities: Vec<f32>,
}
