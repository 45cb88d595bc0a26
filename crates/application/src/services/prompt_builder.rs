//! Prompt construction
//!
//! Builds the full instruction prompt sent to the provider: a fixed safety
//! preamble, reference facts rendered from the domain dataset, optional
//! caller-supplied context, and the user question. The current date is an
//! explicit parameter so reference facts (payment month) are computed per
//! call rather than captured at startup.

use std::fmt::Write as _;

use chrono::NaiveDate;
use domain::reference::{
    APPEAL_WINDOW_DAYS, OFFICIAL_WEBSITE, PROCESSING_DAYS, SRD_PORTAL, TOLL_FREE_NUMBER,
};
use domain::{GrantKind, GrantStatus, PaymentMethod, PaymentMonth, reference::payments};

/// Render the system prompt for the given date
///
/// Every section the safety policy requires is always present: the
/// not-the-agency statement, the no-personal-information rule, the pointer
/// to official channels, and the grounding reference data.
#[must_use]
pub fn system_prompt(today: NaiveDate) -> String {
    let month = PaymentMonth::from_date(today);
    let mut prompt = String::with_capacity(4096);

    prompt.push_str(
        "You are an AI assistant for GrantGuide SA, an UNOFFICIAL and INDEPENDENT platform \
         that helps South Africans understand SASSA grants.\n\n",
    );

    prompt.push_str("CRITICAL RULES:\n");
    prompt.push_str("1. You are NOT SASSA. You do NOT represent SASSA. Always make this clear.\n");
    prompt.push_str(
        "2. You CANNOT process applications, check real statuses, or access SASSA systems.\n",
    );
    prompt.push_str(
        "3. You provide GENERAL INFORMATION ONLY based on publicly available SASSA guidelines.\n",
    );
    prompt.push_str(
        "4. NEVER ask for or accept ID numbers, bank details, or other personal information.\n",
    );
    prompt.push_str(
        "5. Always recommend users visit official SASSA offices or sassa.gov.za for official services.\n",
    );
    prompt.push_str(
        "6. Be helpful, accurate, and compassionate - many users are in difficult situations.\n",
    );
    prompt.push_str("7. Keep responses concise and easy to understand.\n\n");

    prompt.push_str("=== SASSA GRANT AMOUNTS (2026) ===\n");
    for grant in GrantKind::all() {
        let _ = writeln!(prompt, "- {}: {}", grant.name(), grant.formatted_amount());
    }
    prompt.push('\n');

    let _ = writeln!(
        prompt,
        "=== PAYMENT DATES FOR {} ===",
        month.label().to_uppercase()
    );
    let _ = writeln!(
        prompt,
        "- Bank payments (all grants): 1st of the month ({})",
        month.bank_payment_date_iso()
    );
    for window in month.windows() {
        if window.method == PaymentMethod::Cash {
            let _ = writeln!(
                prompt,
                "- {} (cash/post office): {}th-{}th of the month",
                window.group, window.start_day, window.end_day
            );
        }
    }
    let _ = writeln!(prompt, "\nNote: {}", payments::BANK_DATE_NOTE);
    prompt.push('\n');

    prompt.push_str("=== ELIGIBILITY REQUIREMENTS ===\n");
    for grant in [
        GrantKind::OldAge,
        GrantKind::ChildSupport,
        GrantKind::Disability,
    ] {
        let _ = writeln!(prompt, "\n{}:", grant.name().to_uppercase());
        let _ = writeln!(prompt, "- Eligibility: {}", grant.eligibility());
        if let Some(test) = grant.means_test() {
            let _ = writeln!(
                prompt,
                "- Means test: Single max income R{}/year, Married R{}/year",
                test.single_max_annual, test.married_max_annual
            );
        }
    }
    prompt.push('\n');

    prompt.push_str("=== STATUS CODES ===\n");
    for status in GrantStatus::all() {
        let _ = writeln!(prompt, "- {}: {}", status.code(), status.plain_meaning());
    }
    prompt.push('\n');

    prompt.push_str("=== HOW TO APPLY ===\n");
    prompt.push_str("1. Gather documents: ID, proof of residence, bank statements\n");
    prompt.push_str("2. Visit nearest SASSA office\n");
    prompt.push_str("3. Complete application form\n");
    prompt.push_str("4. Biometric verification (fingerprints, photo)\n");
    let _ = writeln!(prompt, "5. Wait for outcome (up to {PROCESSING_DAYS} days)\n");

    prompt.push_str("=== APPEALS ===\n");
    let _ = writeln!(
        prompt,
        "- You have {APPEAL_WINDOW_DAYS} days from decline date to appeal"
    );
    prompt.push_str("- Request written reasons for decline\n");
    prompt.push_str("- Submit appeal at SASSA office with additional documents\n");
    prompt.push_str("- Appeal processing takes 30-90 days\n\n");

    prompt.push_str("=== CONTACT INFO ===\n");
    let _ = writeln!(prompt, "- SASSA toll-free: {TOLL_FREE_NUMBER}");
    let _ = writeln!(prompt, "- Website: {OFFICIAL_WEBSITE}");
    let _ = writeln!(prompt, "- SRD Portal: {SRD_PORTAL}");
    prompt.push('\n');

    prompt.push_str("Keep responses helpful, accurate, and remind users you are unofficial.");

    prompt
}

/// Assemble the outbound prompt
///
/// Order is fixed: system prompt, blank line, optional context block, user
/// question. The context block is emitted only when `context` is non-empty.
#[must_use]
pub fn build_prompt(question: &str, context: Option<&str>, today: NaiveDate) -> String {
    let mut prompt = system_prompt(today);
    prompt.push_str("\n\n");

    if let Some(context) = context.filter(|c| !c.is_empty()) {
        let _ = write!(prompt, "RELEVANT CONTEXT:\n{context}\n\n");
    }

    let _ = write!(prompt, "USER QUESTION:\n{question}");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn system_prompt_states_unofficial_status() {
        let prompt = system_prompt(today());
        assert!(prompt.contains("UNOFFICIAL"));
        assert!(prompt.contains("You are NOT SASSA"));
    }

    #[test]
    fn system_prompt_forbids_personal_information() {
        let prompt = system_prompt(today());
        assert!(prompt.contains("NEVER ask for or accept ID numbers"));
    }

    #[test]
    fn system_prompt_points_to_official_channels() {
        let prompt = system_prompt(today());
        assert!(prompt.contains("sassa.gov.za"));
        assert!(prompt.contains("0800 60 10 11"));
    }

    #[test]
    fn system_prompt_embeds_current_month() {
        let prompt = system_prompt(today());
        assert!(prompt.contains("PAYMENT DATES FOR MARCH 2026"));
        assert!(prompt.contains("2026-03-01"));
    }

    #[test]
    fn system_prompt_tracks_injected_date() {
        let december = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        let prompt = system_prompt(december);
        assert!(prompt.contains("PAYMENT DATES FOR DECEMBER 2026"));
        assert!(!prompt.contains("MARCH"));
    }

    #[test]
    fn system_prompt_lists_grant_amounts() {
        let prompt = system_prompt(today());
        assert!(prompt.contains("Old Age Grant: R2,180/month"));
        assert!(prompt.contains("Child Support Grant: R530/month"));
        assert!(prompt.contains("War Veterans Grant: R2,200/month"));
    }

    #[test]
    fn system_prompt_lists_status_codes() {
        let prompt = system_prompt(today());
        for code in ["PENDING", "APPROVED", "DECLINED", "ACTIVE", "SUSPENDED", "CANCELLED"] {
            assert!(prompt.contains(code), "missing {code}");
        }
    }

    #[test]
    fn build_prompt_contains_system_prompt_and_question() {
        let prompt = build_prompt("When are grants paid?", None, today());
        assert!(prompt.contains(&system_prompt(today())));
        assert!(prompt.contains("USER QUESTION:\nWhen are grants paid?"));
    }

    #[test]
    fn build_prompt_without_context_omits_marker() {
        let prompt = build_prompt("A question", None, today());
        assert!(!prompt.contains("RELEVANT CONTEXT"));
    }

    #[test]
    fn build_prompt_with_context_includes_marker_and_text() {
        let prompt = build_prompt("A question", Some("Payment dates page"), today());
        assert!(prompt.contains("RELEVANT CONTEXT:\nPayment dates page"));
        assert!(prompt.contains("USER QUESTION:\nA question"));
    }

    #[test]
    fn build_prompt_with_empty_context_omits_marker() {
        let prompt = build_prompt("A question", Some(""), today());
        assert!(!prompt.contains("RELEVANT CONTEXT"));
    }

    #[test]
    fn context_block_precedes_question() {
        let prompt = build_prompt("Q", Some("CTX"), today());
        let context_pos = prompt.find("RELEVANT CONTEXT").unwrap();
        let question_pos = prompt.find("USER QUESTION").unwrap();
        assert!(context_pos < question_pos);
    }
}
