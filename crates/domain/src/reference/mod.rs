//! Static SASSA reference dataset
//!
//! Read-only facts about grants, payment windows, and status codes, used to
//! ground the system prompt and the canned fallback answers. Amounts reflect
//! the 2026 published figures and are reviewed annually.

pub mod grants;
pub mod payments;
pub mod status;

pub use grants::{GrantKind, MeansTest};
pub use payments::{PaymentMethod, PaymentMonth, PaymentWindow};
pub use status::GrantStatus;

/// SASSA toll-free contact number
pub const TOLL_FREE_NUMBER: &str = "0800 60 10 11";

/// Official SASSA website
pub const OFFICIAL_WEBSITE: &str = "www.sassa.gov.za";

/// SRD grant portal
pub const SRD_PORTAL: &str = "srd.sassa.gov.za";

/// Days allowed to appeal a declined application
pub const APPEAL_WINDOW_DAYS: u32 = 90;

/// Maximum days an application normally spends in processing
pub const PROCESSING_DAYS: u32 = 90;
