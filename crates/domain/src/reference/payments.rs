//! Monthly payment windows
//!
//! SASSA pays all grants into bank accounts on the first of the month, with
//! cash and post-office collection staggered over the following days. The
//! windows repeat every month, so they are derived from a date rather than
//! stored.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a grant is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Bank,
    Cash,
    PostOffice,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::PostOffice => "post office",
        };
        write!(f, "{s}")
    }
}

/// A collection window within a payment month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentWindow {
    /// Which grants the window applies to
    pub group: &'static str,
    pub method: PaymentMethod,
    /// First day of the month the window opens
    pub start_day: u32,
    /// Last day of the month the window closes
    pub end_day: u32,
}

/// Caveat attached to the bank payment date
pub const BANK_DATE_NOTE: &str =
    "If the 1st falls on a weekend, bank payments go through on the last working day before.";

/// The fixed monthly collection windows
const WINDOWS: &[PaymentWindow] = &[
    PaymentWindow {
        group: "All grants",
        method: PaymentMethod::Bank,
        start_day: 1,
        end_day: 1,
    },
    PaymentWindow {
        group: "Old Age & Disability Grants",
        method: PaymentMethod::Cash,
        start_day: 3,
        end_day: 5,
    },
    PaymentWindow {
        group: "Old Age & Disability Grants",
        method: PaymentMethod::PostOffice,
        start_day: 3,
        end_day: 5,
    },
    PaymentWindow {
        group: "Child Support Grant",
        method: PaymentMethod::Cash,
        start_day: 6,
        end_day: 7,
    },
    PaymentWindow {
        group: "Child Support Grant",
        method: PaymentMethod::PostOffice,
        start_day: 6,
        end_day: 7,
    },
];

/// A calendar month in which payments fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMonth {
    pub month: u32,
    pub year: i32,
}

impl PaymentMonth {
    /// The payment month containing the given date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// The month after this one
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                month: 1,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                year: self.year,
            }
        }
    }

    /// Month label, e.g. "March 2026"
    #[must_use]
    pub fn label(&self) -> String {
        const MONTH_NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let index = (self.month.clamp(1, 12) - 1) as usize;
        format!("{} {}", MONTH_NAMES[index], self.year)
    }

    /// ISO date of the bank payment day, e.g. "2026-03-01"
    #[must_use]
    pub fn bank_payment_date_iso(&self) -> String {
        format!("{:04}-{:02}-01", self.year, self.month)
    }

    /// Collection windows for this month
    #[must_use]
    pub const fn windows(&self) -> &'static [PaymentWindow] {
        WINDOWS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_2026() -> PaymentMonth {
        PaymentMonth::from_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
    }

    #[test]
    fn from_date_extracts_month_and_year() {
        let month = march_2026();
        assert_eq!(month.month, 3);
        assert_eq!(month.year, 2026);
    }

    #[test]
    fn label_formats_month_name() {
        assert_eq!(march_2026().label(), "March 2026");
    }

    #[test]
    fn bank_payment_date_is_first_of_month() {
        assert_eq!(march_2026().bank_payment_date_iso(), "2026-03-01");
    }

    #[test]
    fn next_month_within_year() {
        let next = march_2026().next();
        assert_eq!(next.month, 4);
        assert_eq!(next.year, 2026);
    }

    #[test]
    fn next_month_rolls_over_year() {
        let december = PaymentMonth {
            month: 12,
            year: 2026,
        };
        let next = december.next();
        assert_eq!(next.month, 1);
        assert_eq!(next.year, 2027);
    }

    #[test]
    fn bank_window_is_first_of_month() {
        let windows = march_2026().windows();
        let bank: Vec<_> = windows
            .iter()
            .filter(|w| w.method == PaymentMethod::Bank)
            .collect();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].start_day, 1);
        assert_eq!(bank[0].end_day, 1);
        assert_eq!(bank[0].group, "All grants");
    }

    #[test]
    fn old_age_cash_window_is_days_three_to_five() {
        let window = march_2026()
            .windows()
            .iter()
            .find(|w| w.group.contains("Old Age") && w.method == PaymentMethod::Cash)
            .copied()
            .unwrap();
        assert_eq!((window.start_day, window.end_day), (3, 5));
    }

    #[test]
    fn child_support_cash_window_is_days_six_to_seven() {
        let window = march_2026()
            .windows()
            .iter()
            .find(|w| w.group.contains("Child Support") && w.method == PaymentMethod::Cash)
            .copied()
            .unwrap();
        assert_eq!((window.start_day, window.end_day), (6, 7));
    }

    #[test]
    fn payment_method_display() {
        assert_eq!(PaymentMethod::Bank.to_string(), "bank");
        assert_eq!(PaymentMethod::PostOffice.to_string(), "post office");
    }
}
