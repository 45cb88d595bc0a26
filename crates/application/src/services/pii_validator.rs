//! PII validator service
//!
//! Decides whether free text is safe to forward to the AI provider, and
//! redacts text for logging. Detection is rule-based: compiled regex
//! patterns for digit runs, phone numbers, and emails, plus an Aho-Corasick
//! keyword set that corroborates bank account numbers.
//!
//! Rejection and redaction deliberately differ in strictness: a bare 9-12
//! digit run only *rejects* when a bank keyword co-occurs anywhere in the
//! text, but it is always *redacted* from logs.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use domain::{PiiCategory, PiiScanResult};
use regex::Regex;

// South African ID number: 13 digits (YYMMDD SSSS C A Z). Any 13-digit run
// trips this; checksum and date plausibility are not verified.
static SA_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"\b\d{13}\b").expect("valid ID pattern")
});

// SA bank account numbers are 9-12 digits across the major banks
static ACCOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\b\d{9,12}\b").expect("valid account pattern")
});

// SA phone numbers: 0XX XXX XXXX, or +27/27 followed by nine digits
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?:\+27\d{9}|\b(?:0\d{9}|27\d{9}))\b").expect("valid phone pattern")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

// Keywords that corroborate a digit run as a bank account number. Matched
// anywhere in the text, not windowed around the digits.
static BANK_KEYWORDS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([
            "bank", "account", "acc", "fnb", "absa", "standard", "nedbank", "capitec",
        ])
        .expect("valid keyword set")
});

/// Service for detecting and redacting PII in user input
#[derive(Debug, Clone, Copy, Default)]
pub struct PiiValidator;

impl PiiValidator {
    /// Create a new validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scan input text for PII
    ///
    /// Pure and deterministic; never fails. Categories accumulate in the
    /// fixed order ID number, bank account, phone, email.
    #[must_use]
    pub fn validate(&self, text: &str) -> PiiScanResult {
        let mut categories = Vec::new();

        let id_runs: Vec<&str> = SA_ID_PATTERN.find_iter(text).map(|m| m.as_str()).collect();
        if !id_runs.is_empty() {
            categories.push(PiiCategory::IdNumber);
        }

        // Bank account runs: discard any run subsumed by a detected ID run,
        // and only flag when an ID was not already flagged and a bank
        // keyword appears somewhere in the text.
        let has_standalone_account = ACCOUNT_PATTERN
            .find_iter(text)
            .map(|m| m.as_str())
            .any(|run| !id_runs.iter().any(|id| id.contains(run) || run.contains(id)));
        if has_standalone_account && id_runs.is_empty() && BANK_KEYWORDS.is_match(text) {
            categories.push(PiiCategory::BankAccount);
        }

        if PHONE_PATTERN.is_match(text) {
            categories.push(PiiCategory::PhoneNumber);
        }

        if EMAIL_PATTERN.is_match(text) {
            categories.push(PiiCategory::EmailAddress);
        }

        PiiScanResult::detected(categories)
    }

    /// Whether the text contains a 13-digit SA ID number pattern
    ///
    /// Agrees with [`validate`](Self::validate): whenever this returns true,
    /// the scan result includes the ID number category.
    #[must_use]
    pub fn contains_sa_id_number(&self, text: &str) -> bool {
        SA_ID_PATTERN.is_match(text)
    }

    /// Redact detected PII for safe logging
    ///
    /// More aggressive than rejection: every 9-12 digit run is redacted
    /// regardless of bank keywords. ID runs are replaced first so the
    /// generic digit-run replacement never partially consumes them.
    #[must_use]
    pub fn sanitize_for_logging(&self, text: &str) -> String {
        let sanitized = SA_ID_PATTERN.replace_all(text, "[ID_REDACTED]");
        let sanitized = PHONE_PATTERN.replace_all(&sanitized, "[PHONE_REDACTED]");
        let sanitized = EMAIL_PATTERN.replace_all(&sanitized, "[EMAIL_REDACTED]");
        let sanitized = ACCOUNT_PATTERN.replace_all(&sanitized, "[NUMBER_REDACTED]");
        sanitized.into_owned()
    }
}
