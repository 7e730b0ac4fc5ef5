//! Key Fingerprint Module
//!
//! Builds deterministic cache keys from normalized request inputs so that
//! requests differing only in formatting (case, spacing, float noise) share
//! a cache slot.
//!
//! Keys have the form `<operation>:<sha256 hex>`. Every part is hashed with a
//! kind tag and a length prefix, so `("a b", "c")` and `("a", "b c")` never
//! collide.

use sha2::{Digest, Sha256};

use crate::cache::OperationType;

/// Decimal places kept for numeric parameters.
pub const DEFAULT_PRECISION: u32 = 2;

// == Normalization ==
/// Trims, lower-cases and collapses internal whitespace runs.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Rounds a number to `decimals` places and renders it canonically.
///
/// Negative zero renders as zero so `-0.001` and `0.001` agree.
pub fn normalize_number(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", decimals as usize, rounded)
}

// == Fingerprint Builder ==
/// Incremental builder for a cache key.
///
/// ```
/// use ai_response_cache::cache::{Fingerprint, OperationType};
///
/// let a = Fingerprint::new(OperationType::Chat).text("  Hello   World ").finish();
/// let b = Fingerprint::new(OperationType::Chat).text("hello world").finish();
/// assert_eq!(a, b);
/// assert!(a.starts_with("chat:"));
/// ```
#[derive(Debug, Clone)]
pub struct Fingerprint {
    operation: OperationType,
    hasher: Sha256,
    precision: u32,
}

impl Fingerprint {
    pub fn new(operation: OperationType) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(operation.as_str().as_bytes());
        Self {
            operation,
            hasher,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Overrides the decimal places used by subsequent `number` parts.
    pub fn precision(mut self, decimals: u32) -> Self {
        self.precision = decimals;
        self
    }

    /// Adds a free-text part.
    pub fn text(mut self, value: &str) -> Self {
        self.part(b't', normalize_text(value).as_bytes());
        self
    }

    /// Adds an optional free-text part; absence hashes differently from "".
    pub fn optional_text(mut self, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.part(b't', normalize_text(v).as_bytes()),
            None => self.part(b'n', &[]),
        }
        self
    }

    /// Adds a numeric part, rounded to the current precision.
    pub fn number(mut self, value: f64) -> Self {
        let rendered = normalize_number(value, self.precision);
        self.part(b'f', rendered.as_bytes());
        self
    }

    /// Adds an unordered set of text items. Items are normalized, sorted and
    /// de-duplicated; blank items are dropped.
    pub fn text_set<S: AsRef<str>>(mut self, items: &[S]) -> Self {
        let mut normalized: Vec<String> = items
            .iter()
            .map(|s| normalize_text(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        normalized.sort();
        normalized.dedup();

        self.part(b's', &(normalized.len() as u64).to_le_bytes());
        for item in &normalized {
            self.part(b't', item.as_bytes());
        }
        self
    }

    /// Finishes the key.
    pub fn finish(self) -> String {
        format!("{}:{:x}", self.operation, self.hasher.finalize())
    }

    fn part(&mut self, kind: u8, bytes: &[u8]) {
        self.hasher.update([kind]);
        self.hasher.update((bytes.len() as u64).to_le_bytes());
        self.hasher.update(bytes);
    }
}

// == Operation Keys ==
/// Key for a crop-assistant chat reply.
pub fn chat_key(message: &str, crop: Option<&str>, language: &str) -> String {
    Fingerprint::new(OperationType::Chat)
        .text(message)
        .optional_text(crop)
        .text(language)
        .finish()
}

/// Key for a diagnosis; symptom order does not matter.
pub fn diagnosis_key<S: AsRef<str>>(crop: &str, symptoms: &[S], location: Option<&str>) -> String {
    Fingerprint::new(OperationType::Diagnosis)
        .text(crop)
        .text_set(symptoms)
        .optional_text(location)
        .finish()
}

/// Key for a field plan. Area and coordinates are rounded to two decimals.
pub fn planning_key(
    crop: &str,
    area_hectares: f64,
    latitude: f64,
    longitude: f64,
    season: Option<&str>,
) -> String {
    Fingerprint::new(OperationType::Planning)
        .text(crop)
        .number(area_hectares)
        .number(latitude)
        .number(longitude)
        .optional_text(season)
        .finish()
}
