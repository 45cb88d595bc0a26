//! Grant types, amounts, and eligibility thresholds

use serde::{Deserialize, Serialize};

/// Annual means-test income ceilings in rand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeansTest {
    /// Maximum annual income for a single applicant
    pub single_max_annual: u32,
    /// Maximum combined annual income for a married applicant
    pub married_max_annual: u32,
}

/// The SASSA grant types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantKind {
    OldAge,
    Disability,
    ChildSupport,
    FosterChild,
    CareDependency,
    GrantInAid,
    WarVeterans,
}

impl GrantKind {
    /// All grant types, in the order they appear in published tables
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OldAge,
            Self::Disability,
            Self::ChildSupport,
            Self::FosterChild,
            Self::CareDependency,
            Self::GrantInAid,
            Self::WarVeterans,
        ]
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OldAge => "Old Age Grant",
            Self::Disability => "Disability Grant",
            Self::ChildSupport => "Child Support Grant",
            Self::FosterChild => "Foster Child Grant",
            Self::CareDependency => "Care Dependency Grant",
            Self::GrantInAid => "Grant-in-Aid",
            Self::WarVeterans => "War Veterans Grant",
        }
    }

    /// Monthly amount in rand (2026 figures)
    #[must_use]
    pub const fn monthly_amount_rand(&self) -> u32 {
        match self {
            Self::OldAge | Self::Disability | Self::CareDependency => 2180,
            Self::ChildSupport | Self::GrantInAid => 530,
            Self::FosterChild => 1180,
            Self::WarVeterans => 2200,
        }
    }

    /// One-line eligibility summary
    #[must_use]
    pub const fn eligibility(&self) -> &'static str {
        match self {
            Self::OldAge => "citizens, permanent residents, or refugees aged 60 or older",
            Self::Disability => "people aged 18-59 with a disability preventing work",
            Self::ChildSupport => "primary caregivers of children under 18",
            Self::FosterChild => "foster parents with a court order for foster care",
            Self::CareDependency => "caregivers of children with severe disabilities",
            Self::GrantInAid => "grant recipients needing full-time care from another person",
            Self::WarVeterans => "war veterans aged 60 or older, or disabled",
        }
    }

    /// Means-test ceilings, where the grant is means tested
    #[must_use]
    pub const fn means_test(&self) -> Option<MeansTest> {
        match self {
            Self::OldAge | Self::Disability => Some(MeansTest {
                single_max_annual: 86_280,
                married_max_annual: 172_560,
            }),
            Self::ChildSupport => Some(MeansTest {
                single_max_annual: 52_800,
                married_max_annual: 105_600,
            }),
            _ => None,
        }
    }

    /// Amount formatted for display, e.g. "R2,180/month"
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        let amount = self.monthly_amount_rand();
        let thousands = amount / 1000;
        let rest = amount % 1000;
        if thousands > 0 {
            format!("R{thousands},{rest:03}/month")
        } else {
            format!("R{rest}/month")
        }
    }
}

impl std::fmt::Display for GrantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
