//! PII detection entities
//!
//! Types describing the outcome of scanning free text for personally
//! identifiable information before it may be forwarded to the AI provider.

use serde::{Deserialize, Serialize};

/// Category of personally identifiable information detected in user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// 13-digit South African national ID number
    IdNumber,
    /// 9-12 digit account number co-occurring with a bank keyword
    BankAccount,
    /// South African phone number (0XX or +27 prefixed)
    PhoneNumber,
    /// Email address
    EmailAddress,
}

impl PiiCategory {
    /// All categories, in detection order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::IdNumber,
            Self::BankAccount,
            Self::PhoneNumber,
            Self::EmailAddress,
        ]
    }

    /// Human-readable label used in rejection messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::IdNumber => "ID number",
            Self::BankAccount => "bank account number",
            Self::PhoneNumber => "phone number",
            Self::EmailAddress => "email address",
        }
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of scanning input text for PII
///
/// Invariants: `is_valid == !contains_pii`; `message` is present iff PII was
/// found; `categories` is non-empty iff PII was found. Construct through
/// [`PiiScanResult::clean`] or [`PiiScanResult::detected`] so invalid states
/// are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiScanResult {
    /// Whether the input is safe to forward to the AI provider
    pub is_valid: bool,
    /// Whether any PII category matched
    pub contains_pii: bool,
    /// Detected categories, in detection order, deduplicated
    pub categories: Vec<PiiCategory>,
    /// User-facing rejection message, present only when PII was found
    pub message: Option<String>,
}

impl PiiScanResult {
    /// A result for input with no detected PII
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            is_valid: true,
            contains_pii: false,
            categories: Vec::new(),
            message: None,
        }
    }

    /// A result for input in which the given categories were detected
    ///
    /// Duplicates are removed while preserving first-seen order. An empty
    /// category list collapses to [`PiiScanResult::clean`].
    #[must_use]
    pub fn detected(categories: Vec<PiiCategory>) -> Self {
        let mut deduped: Vec<PiiCategory> = Vec::with_capacity(categories.len());
        for category in categories {
            if !deduped.contains(&category) {
                deduped.push(category);
            }
        }

        if deduped.is_empty() {
            return Self::clean();
        }

        let labels: Vec<&str> = deduped.iter().map(PiiCategory::label).collect();
        let message = format!(
            "Please don't share your {}. We don't need this information to help you.",
            labels.join(", ")
        );

        Self {
            is_valid: false,
            contains_pii: true,
            categories: deduped,
            message: Some(message),
        }
    }

    /// Whether a specific category was detected
    #[must_use]
    pub fn has(&self, category: PiiCategory) -> bool {
        self.categories.contains(&category)
    }
}

impl Default for PiiScanResult {
    fn default() -> Self {
        Self::clean()
    }
}
