//! Deterministic fallback answers
//!
//! Used whenever no provider is configured or a provider call fails. The
//! lower-cased question is classified against an ordered decision table of
//! (predicate, renderer) pairs; the first match wins. Every rendered block
//! is wrapped in [`AiAnswer::with_disclaimer`], so the disclaimer invariant
//! holds on this path too.

use std::fmt::Write as _;

use chrono::NaiveDate;
use domain::reference::{
    APPEAL_WINDOW_DAYS, OFFICIAL_WEBSITE, PROCESSING_DAYS, SRD_PORTAL, TOLL_FREE_NUMBER,
};
use domain::{AiAnswer, GrantKind, GrantStatus, PaymentMethod, PaymentMonth};

/// One row of the dispatch table
struct Topic {
    /// Stable name, used in tests and logs
    name: &'static str,
    /// Predicate over the lower-cased question
    matches: fn(&str) -> bool,
    /// Renders the answer body (without disclaimer)
    render: fn(PaymentMonth) -> String,
}

/// Dispatch order is part of the contract: first match wins.
const TOPICS: &[Topic] = &[
    Topic {
        name: "payment",
        matches: |q| {
            q.contains("payment")
                || q.contains("pay date")
                || (q.contains("when")
                    && (q.contains("paid") || q.contains("get") || q.contains("receive")))
        },
        render: render_payment_dates,
    },
    Topic {
        name: "amount",
        matches: |q| q.contains("how much") || q.contains("amount") || q.contains("value"),
        render: |_| render_amounts(),
    },
    Topic {
        name: "status",
        matches: |q| q.contains("pending") || q.contains("status"),
        render: |_| render_status_codes(),
    },
    Topic {
        name: "appeal",
        matches: |q| q.contains("declined") || q.contains("rejected") || q.contains("appeal"),
        render: |_| render_appeals(),
    },
    Topic {
        name: "old_age",
        matches: |q| {
            q.contains("old age")
                || q.contains("pension")
                || (q.contains("60") && q.contains("year"))
        },
        render: |_| render_grant_details(GrantKind::OldAge),
    },
    Topic {
        name: "child_support",
        matches: |q| {
            q.contains("child support") || q.contains("child grant") || q.contains("csg")
        },
        render: |_| render_grant_details(GrantKind::ChildSupport),
    },
    Topic {
        name: "disability",
        matches: |q| q.contains("disability"),
        render: |_| render_grant_details(GrantKind::Disability),
    },
    Topic {
        name: "apply",
        matches: |q| q.contains("apply") || q.contains("application") || q.contains("how do i"),
        render: |_| render_how_to_apply(),
    },
    Topic {
        name: "documents",
        matches: |q| {
            q.contains("document") || q.contains("what do i need") || q.contains("bring")
        },
        render: |_| render_documents(),
    },
    Topic {
        name: "contact",
        matches: |q| {
            q.contains("contact")
                || q.contains("phone")
                || q.contains("office")
                || q.contains("number")
        },
        render: |_| render_contact(),
    },
];

/// Names of the topics in dispatch order, for observability and tests
#[must_use]
pub fn topic_names() -> Vec<&'static str> {
    TOPICS.iter().map(|t| t.name).collect()
}

/// Produce a canned answer for the question
///
/// Never fails; unmatched questions receive a generic menu-style answer.
#[must_use]
pub fn fallback_answer(question: &str, today: NaiveDate) -> AiAnswer {
    let lowered = question.to_lowercase();
    let month = PaymentMonth::from_date(today);

    for topic in TOPICS {
        if (topic.matches)(&lowered) {
            tracing::debug!(topic = topic.name, "serving fallback answer");
            return AiAnswer::with_disclaimer((topic.render)(month));
        }
    }

    tracing::debug!(topic = "default", "serving fallback answer");
    AiAnswer::with_disclaimer(render_default_menu())
}

fn render_payment_dates(month: PaymentMonth) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "**SASSA Payment Dates for {}:**\n", month.label());
    let _ = writeln!(
        body,
        "**Bank Payments (all grants):** 1st of the month ({})",
        month.bank_payment_date_iso()
    );
    body.push_str("- If the 1st falls on a weekend, payment is made on the last working day before.\n\n");
    body.push_str("**Cash/Post Office Payments:**\n");
    for window in month.windows() {
        if window.method == PaymentMethod::Cash {
            let _ = writeln!(
                body,
                "- {}: {}th - {}th of the month",
                window.group, window.start_day, window.end_day
            );
        }
    }
    body.push_str("\n**Tips:**\n");
    body.push_str("- Bring your SASSA card and ID when collecting\n");
    body.push_str("- Uncollected grants may be suspended after 3 consecutive months\n");
    body.push_str("- Check your specific pay point for exact times");
    body
}

fn render_amounts() -> String {
    let mut body = String::from("**SASSA Grant Amounts (2026):**\n\n");
    for grant in GrantKind::all() {
        let _ = writeln!(body, "- **{}:** {}", grant.name(), grant.formatted_amount());
    }
    body.push_str("\nThese amounts are reviewed annually and may increase in April each year.");
    body
}

fn render_status_codes() -> String {
    let mut body = String::from("**Understanding SASSA Status Codes:**\n\n");
    let _ = writeln!(
        body,
        "**PENDING** - {}\n",
        GrantStatus::Pending.plain_meaning()
    );
    body.push_str("**What to do:**\n");
    for (i, action) in GrantStatus::Pending.recommended_actions().iter().enumerate() {
        let _ = writeln!(body, "{}. {action}", i + 1);
    }
    body.push_str("\n**Other status codes:**\n");
    for status in GrantStatus::all() {
        if *status != GrantStatus::Pending {
            let _ = writeln!(body, "- **{}** - {}", status.code(), status.plain_meaning());
        }
    }
    body.pop();
    body
}

fn render_appeals() -> String {
    let mut body = String::from("**How to Appeal a SASSA Decision:**\n\n");
    let _ = writeln!(
        body,
        "If your application was declined, you have **{APPEAL_WINDOW_DAYS} days** to appeal.\n"
    );
    body.push_str("**Steps to appeal:**\n");
    body.push_str("1. Request written reasons for the decline from SASSA\n");
    body.push_str("2. Gather additional supporting documents\n");
    body.push_str("3. Visit your local SASSA office to submit the appeal\n");
    body.push_str("4. Keep copies of everything you submit\n\n");
    body.push_str("**Important:**\n");
    let _ = writeln!(body, "- The {APPEAL_WINDOW_DAYS}-day deadline is strict!");
    body.push_str("- You may be called for an appeal hearing\n");
    body.push_str("- Appeal processing takes 30-90 days\n");
    body.push_str("- If unsuccessful, you can approach the courts");
    body
}

fn render_grant_details(grant: GrantKind) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "**{} Information:**\n", grant.name());
    let _ = writeln!(body, "**Amount:** {}\n", grant.formatted_amount());
    body.push_str("**Eligibility:**\n");
    let _ = writeln!(body, "- For {}", grant.eligibility());
    if let Some(test) = grant.means_test() {
        body.push_str("- Must pass the means test:\n");
        let _ = writeln!(body, "  - Single: Max income R{}/year", test.single_max_annual);
        let _ = writeln!(
            body,
            "  - Married: Max income R{}/year",
            test.married_max_annual
        );
    }
    body.push_str("\n**How to apply:**\n");
    body.push_str("Visit your nearest SASSA office with your ID, proof of residence, and bank statements. ");
    let _ = write!(
        body,
        "Application is free and takes up to {PROCESSING_DAYS} days to process."
    );
    body
}

fn render_how_to_apply() -> String {
    let mut body = String::from("**How to Apply for a SASSA Grant:**\n\n");
    body.push_str("**Step 1: Gather Documents**\n");
    body.push_str("- South African ID\n");
    body.push_str("- Proof of residence (utility bill, affidavit)\n");
    body.push_str("- Bank statements (3 months)\n");
    body.push_str("- For child grants: child's birth certificate\n\n");
    body.push_str("**Step 2: Visit SASSA Office**\n");
    body.push_str("- Find your nearest SASSA office\n");
    body.push_str("- No appointment needed\n");
    body.push_str("- Application is FREE\n\n");
    body.push_str("**Step 3: Complete Application**\n");
    body.push_str("- Fill in forms with SASSA staff assistance\n");
    body.push_str("- Biometric verification (fingerprints, photo)\n\n");
    body.push_str("**Step 4: Wait for Outcome**\n");
    let _ = writeln!(body, "- Processing takes up to {PROCESSING_DAYS} days");
    body.push_str("- You'll receive SMS notification\n");
    let _ = write!(body, "- Check status at {SRD_PORTAL}");
    body
}

fn render_documents() -> String {
    let mut body = String::from("**Documents Needed for SASSA Applications:**\n\n");
    body.push_str("**For all grants:**\n");
    body.push_str("- South African ID (green book or smart card)\n");
    body.push_str("- Proof of residence (utility bill, lease, or affidavit)\n");
    body.push_str("- Bank statement or proof of banking details\n\n");
    body.push_str("**Additional documents:**\n");
    body.push_str("- **Child Support Grant:** Child's birth certificate\n");
    body.push_str("- **Disability Grant:** Medical reports (SASSA will arrange assessment)\n");
    body.push_str("- **Foster Child Grant:** Court order for foster care\n\n");
    body.push_str("**Tips:**\n");
    body.push_str("- Bring original documents AND copies\n");
    body.push_str("- If married, bring spouse's ID and income proof");
    body
}

fn render_contact() -> String {
    let mut body = String::from("**SASSA Contact Information:**\n\n");
    let _ = writeln!(body, "**Toll-free number:** {TOLL_FREE_NUMBER}");
    let _ = writeln!(body, "**Website:** {OFFICIAL_WEBSITE}");
    let _ = writeln!(body, "**SRD Portal:** {SRD_PORTAL}\n");
    body.push_str("**Office hours:** Monday to Friday, 8:00 AM - 4:00 PM\n\n");
    body.push_str("**To find your nearest office:**\n");
    let _ = writeln!(body, "- Visit {OFFICIAL_WEBSITE} and use the office locator");
    body.push_str("- Or call the toll-free number\n\n");
    body.push_str("**What you can do online:**\n");
    body.push_str("- Check application status\n");
    body.push_str("- Update banking details\n");
    body.push_str("- Apply for SRD grant");
    body
}

fn render_default_menu() -> String {
    let mut body = String::from("Thank you for your question about SASSA grants!\n\n");
    body.push_str("**I can help you with:**\n");
    body.push_str("- Grant amounts and eligibility\n");
    body.push_str("- Payment dates and schedules\n");
    body.push_str("- Application process\n");
    body.push_str("- Status codes explained\n");
    body.push_str("- Appeal procedures\n");
    body.push_str("- Required documents\n\n");
    body.push_str("**Quick info:**\n");
    for grant in [
        GrantKind::OldAge,
        GrantKind::ChildSupport,
        GrantKind::Disability,
    ] {
        let _ = writeln!(body, "- {}: {}", grant.name(), grant.formatted_amount());
    }
    body.push_str("\n**For official assistance:**\n");
    let _ = writeln!(body, "- Call SASSA: {TOLL_FREE_NUMBER}");
    let _ = writeln!(body, "- Visit: {OFFICIAL_WEBSITE}");
    body.push_str("- Go to your nearest SASSA office\n\n");
    body.push_str("Please ask a specific question and I'll do my best to help!");
    body
}

#[cfg(test)]
mod tests {
    use domain::RESPONSE_DISCLAIMER;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn answer(question: &str) -> String {
        fallback_answer(question, today()).answer
    }

    #[test]
    fn dispatch_order_is_fixed() {
        assert_eq!(
            topic_names(),
            vec![
                "payment",
                "amount",
                "status",
                "appeal",
                "old_age",
                "child_support",
                "disability",
                "apply",
                "documents",
                "contact",
            ]
        );
    }

    #[test]
    fn every_topic_answer_ends_with_disclaimer() {
        let questions = [
            "when is the payment date",
            "how much is the grant",
            "what does pending mean",
            "my application was declined",
            "tell me about the old age grant",
            "child support grant info",
            "disability grant info",
            "how do i apply",
            "what documents do i bring",
            "how do i contact sassa",
            "something entirely unrelated",
        ];
        for q in questions {
            assert!(answer(q).ends_with(RESPONSE_DISCLAIMER), "{q}");
        }
    }

    #[test]
    fn payment_question_gets_payment_dates() {
        let text = answer("When is the next payment?");
        assert!(text.contains("SASSA Payment Dates for March 2026"));
        assert!(text.contains("1st of the month"));
        assert!(text.contains("Child Support Grant: 6th - 7th"));
    }

    #[test]
    fn when_paid_phrasing_matches_payment_topic() {
        let text = answer("When will I get paid?");
        assert!(text.contains("SASSA Payment Dates"));
    }

    #[test]
    fn amount_question_lists_all_grants() {
        let text = answer("How much is the old age grant?");
        // "how much" outranks the old-age topic in dispatch order
        assert!(text.contains("SASSA Grant Amounts (2026)"));
        assert!(text.contains("R2,180/month"));
        assert!(text.contains("R530/month"));
    }

    #[test]
    fn status_question_explains_pending() {
        let text = answer("Why is my status still pending?");
        assert!(text.contains("Understanding SASSA Status Codes"));
        assert!(text.contains("PENDING"));
        assert!(text.contains("90 days"));
    }

    #[test]
    fn declined_question_gets_appeal_guide() {
        let text = answer("My application was declined, what now?");
        assert!(text.contains("How to Appeal a SASSA Decision"));
        assert!(text.contains("**90 days**"));
    }

    #[test]
    fn pension_question_gets_old_age_details() {
        let text = answer("Tell me about the pension");
        assert!(text.contains("Old Age Grant Information"));
        assert!(text.contains("R86280") || text.contains("86_280") || text.contains("86280"));
    }

    #[test]
    fn csg_question_gets_child_support_details() {
        let text = answer("csg info please");
        assert!(text.contains("Child Support Grant Information"));
        assert!(text.contains("R530/month"));
    }

    #[test]
    fn disability_question_gets_disability_details() {
        let text = answer("who qualifies for the disability grant?");
        assert!(text.contains("Disability Grant Information"));
    }

    #[test]
    fn apply_question_gets_steps() {
        let text = answer("where do i submit an application form?");
        assert!(text.contains("How to Apply for a SASSA Grant"));
        assert!(text.contains("Step 1"));
    }

    #[test]
    fn documents_question_gets_checklist() {
        let text = answer("which documents must i take along?");
        assert!(text.contains("Documents Needed for SASSA Applications"));
    }

    #[test]
    fn contact_question_gets_channels() {
        let text = answer("what is the sassa office address?");
        assert!(text.contains("SASSA Contact Information"));
        assert!(text.contains("0800 60 10 11"));
        assert!(text.contains("srd.sassa.gov.za"));
    }

    #[test]
    fn unmatched_question_gets_menu() {
        let text = answer("tell me a story about winter");
        assert!(text.contains("I can help you with"));
        assert!(text.ends_with(RESPONSE_DISCLAIMER));
    }

    #[test]
    fn payment_outranks_status() {
        // Contains both "payment" and "status"; payment comes first in the table
        let text = answer("payment status please");
        assert!(text.contains("SASSA Payment Dates"));
    }

    #[test]
    fn classification_is_case_insensitive() {
        let text = answer("WHEN IS THE PAYMENT DATE?");
        assert!(text.contains("SASSA Payment Dates"));
    }

    #[test]
    fn payment_block_embeds_injected_month() {
        let december = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let text = fallback_answer("payment dates", december).answer;
        assert!(text.contains("December 2026"));
        assert!(text.contains("2026-12-01"));
    }
}
