//! Application status codes

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Status of a grant application or active grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrantStatus {
    Pending,
    Approved,
    Declined,
    Active,
    Suspended,
    Cancelled,
}

impl GrantStatus {
    /// All status codes
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pending,
            Self::Approved,
            Self::Declined,
            Self::Active,
            Self::Suspended,
            Self::Cancelled,
        ]
    }

    /// The code as SASSA displays it
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Declined => "DECLINED",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Official one-line meaning
    #[must_use]
    pub const fn official_meaning(&self) -> &'static str {
        match self {
            Self::Pending => "Application is being processed",
            Self::Approved => "Application has been approved",
            Self::Declined => "Application has been declined",
            Self::Active => "Grant is active and payments are being made",
            Self::Suspended => "Grant has been temporarily suspended",
            Self::Cancelled => "Grant has been permanently stopped",
        }
    }

    /// Plain-language explanation shown to users
    #[must_use]
    pub const fn plain_meaning(&self) -> &'static str {
        match self {
            Self::Pending => {
                "SASSA is still reviewing your application. This is normal and can take up to 90 days."
            },
            Self::Approved => "Your grant has been approved. Payments will start.",
            Self::Declined => {
                "Your application was not successful. You have the right to appeal within 90 days."
            },
            Self::Active => "Your grant is active. You should be receiving regular payments.",
            Self::Suspended => "Payments are paused. Visit a SASSA office to resolve the issue.",
            Self::Cancelled => "The grant has been stopped permanently.",
        }
    }

    /// Recommended next steps
    #[must_use]
    pub const fn recommended_actions(&self) -> &'static [&'static str] {
        match self {
            Self::Pending => &[
                "Wait for SMS notification",
                "Check status online after 30 days",
                "Visit SASSA if no update after 90 days",
            ],
            Self::Approved => &[
                "Ensure bank details are correct",
                "Wait for payment date SMS",
                "Collect grant on payment date",
            ],
            Self::Declined => &[
                "Request reasons for decline",
                "Gather additional documents",
                "Submit appeal within 90 days",
            ],
            Self::Active => &[
                "Collect payments on scheduled dates",
                "Update SASSA if your details change",
                "Report any missed payments",
            ],
            Self::Suspended => &[
                "Visit your nearest SASSA office",
                "Bring your ID and SASSA card",
                "Ask for the reason for suspension",
            ],
            Self::Cancelled => &[
                "Ask SASSA for the cancellation reason",
                "Reapply if your circumstances changed",
            ],
        }
    }

    /// Look up a status by its display code (case-insensitive)
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        Self::all()
            .iter()
            .find(|status| status.code().eq_ignore_ascii_case(code.trim()))
            .copied()
            .ok_or_else(|| DomainError::not_found("Status code", code))
    }
}

impl std::fmt::Display for GrantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
