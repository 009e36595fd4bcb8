use serde::{Deserialize, Serialize};

/// Everything needed to issue the single outbound GET. Built once from CLI
/// input, immutable afterwards.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
    /// Raw `"Key: Value"` strings, applied in listed order.
    pub headers: Vec<String>,
    /// Raw cookie strings, joined with `"; "` into a single `Cookie` header.
    pub cookies: Vec<String>,
}

/// The three extracted sequences. Each selector pass fills its own field, so
/// the lengths are independent; there is no positional correspondence between
/// `titles[i]`, `prices[i]` and `images[i]`.
///
/// Field order fixes the JSON key order: `titles`, `prices`, `images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub titles: Vec<String>,
    pub prices: Vec<String>,
    /// `None` when an `img` match has no `src` attribute; serialized as `null`.
    pub images: Vec<Option<String>>,
}

impl ScrapeResult {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.prices.is_empty() && self.images.is_empty()
    }
}
