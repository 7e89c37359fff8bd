//! Secondary attribute extraction from email text and sender metadata.
//!
//! Every attribute is a priority-ordered substring scan: the first matching
//! tier wins and nothing here throws. The decision-maker check is the one
//! regex in the engine, compiled once from the lexicon's title list.

use regex::Regex;

use crate::lexicon::Lexicon;
use crate::types::{CustomerType, DealValue, Email, Sentiment, Urgency};

/// Context derived from one email: everything on `EmailAnalysis` except
/// the classification triple.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContext {
    pub customer_type: CustomerType,
    pub urgency: Urgency,
    pub products: Vec<String>,
    pub key_requirements: Vec<String>,
    pub estimated_deal_value: DealValue,
    pub sentiment: Sentiment,
    pub decision_maker: bool,
    /// First organizational title matched in the body, as written there.
    pub decision_maker_title: Option<String>,
}

// Requirement tags accumulate independently; they are labels, not routing
// keys, so the strings stay module-local rather than configurable.
const DEMO_CUES: &[&str] = &["demo", "trial"];
const INTEGRATION_CUES: &[&str] = &["integration", "api", "emr"];
const MULTI_YEAR_CUE: &str = "multi-year";
const OPEN_ACCESS_CUE: &str = "open access";
const REFUND_CUE: &str = "refund";
const ACCESS_CUE: &str = "access";

// Mid-scale organizational cue for deal sizing.
const ORG_MEDIUM_CUE: &str = "university";

/// Extract context attributes for one email.
///
/// `title_re` is the compiled decision-maker alternation from
/// [`Lexicon::decision_maker_pattern`]; the engine owns the compilation.
pub fn extract_context(email: &Email, lexicon: &Lexicon, title_re: &Regex) -> EmailContext {
    let subject = email.subject.to_lowercase();
    let body = email.body.to_lowercase();
    let org = email
        .sender
        .organization
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let urgency = detect_urgency(&subject, &body, lexicon);
    let decision_maker_title = title_re
        .captures(&email.body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    EmailContext {
        customer_type: detect_customer_type(&org, &email.sender.email, lexicon),
        urgency,
        products: detect_products(&body, lexicon),
        key_requirements: collect_requirements(&subject, &body, lexicon),
        estimated_deal_value: estimate_deal_value(&body, &org, lexicon),
        sentiment: detect_sentiment(&body, urgency, lexicon),
        decision_maker: decision_maker_title.is_some(),
        decision_maker_title,
    }
}

fn any_cue(text: &str, cues: &[String]) -> bool {
    cues.iter().any(|cue| text.contains(cue.as_str()))
}

/// Priority order: healthcare > consortium > corporate > academic >
/// internal domain > individual. First tier that matches wins.
fn detect_customer_type(org: &str, sender_email: &str, lexicon: &Lexicon) -> CustomerType {
    let email_lower = sender_email.to_lowercase();

    if !org.is_empty() {
        if any_cue(org, &lexicon.healthcare_terms) {
            return CustomerType::Healthcare;
        }
        if any_cue(org, &lexicon.consortium_terms) {
            return CustomerType::Consortium;
        }
        if any_cue(org, &lexicon.corporate_terms) {
            return CustomerType::Corporate;
        }
    }
    if any_cue(org, &lexicon.academic_terms) || email_lower.contains(".edu") {
        return CustomerType::Academic;
    }
    if let Some(domain) = email_lower.rsplit('@').next() {
        if lexicon
            .internal_domains
            .iter()
            .any(|d| domain == d.to_lowercase())
        {
            return CustomerType::Internal;
        }
    }
    CustomerType::Individual
}

fn detect_urgency(subject: &str, body: &str, lexicon: &Lexicon) -> Urgency {
    let hit = |cues: &[String]| any_cue(body, cues) || any_cue(subject, cues);

    if hit(&lexicon.urgency_critical_cues) {
        Urgency::Critical
    } else if hit(&lexicon.urgency_high_cues) {
        Urgency::High
    } else if hit(&lexicon.urgency_low_cues) {
        Urgency::Low
    } else {
        Urgency::Medium
    }
}

/// Products mentioned in the body, in catalog declaration order.
/// Set semantics: a product appears once however often it is mentioned.
fn detect_products(body: &str, lexicon: &Lexicon) -> Vec<String> {
    lexicon
        .products
        .iter()
        .filter(|p| body.contains(p.needle.as_str()))
        .map(|p| p.name.clone())
        .collect()
}

fn collect_requirements(subject: &str, body: &str, lexicon: &Lexicon) -> Vec<String> {
    let text_has = |needle: &str| body.contains(needle) || subject.contains(needle);
    let mut tags = Vec::new();

    if any_cue(body, &lexicon.pricing_cues) || any_cue(subject, &lexicon.pricing_cues) {
        tags.push("Pricing information".to_string());
    }
    if DEMO_CUES.iter().any(|c| text_has(c)) {
        tags.push("Product demonstration".to_string());
    }
    if INTEGRATION_CUES.iter().any(|c| text_has(c)) {
        tags.push("Technical integration".to_string());
    }
    if text_has(MULTI_YEAR_CUE) {
        tags.push("Multi-year agreement".to_string());
    }
    if text_has(OPEN_ACCESS_CUE) {
        tags.push("Open access options".to_string());
    }
    if text_has(REFUND_CUE) {
        tags.push("Refund processing".to_string());
    }
    if text_has(ACCESS_CUE) {
        tags.push("Access resolution".to_string());
    }

    tags
}

fn estimate_deal_value(body: &str, org: &str, lexicon: &Lexicon) -> DealValue {
    if any_cue(body, &lexicon.deal_high_cues) {
        DealValue::High
    } else if any_cue(body, &lexicon.deal_medium_cues) || org.contains(ORG_MEDIUM_CUE) {
        DealValue::Medium
    } else {
        DealValue::Unknown
    }
}

fn detect_sentiment(body: &str, urgency: Urgency, lexicon: &Lexicon) -> Sentiment {
    if any_cue(body, &lexicon.positive_cues) {
        Sentiment::Positive
    } else if any_cue(body, &lexicon.frustrated_cues) {
        Sentiment::Frustrated
    } else if urgency.is_elevated() {
        Sentiment::Urgent
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Folder, Sender};
    use chrono::Utc;

    fn make_email(org: Option<&str>, sender_email: &str, subject: &str, body: &str) -> Email {
        Email {
            id: "e-1".to_string(),
            sender: Sender {
                name: "Sam Okafor".to_string(),
                email: sender_email.to_string(),
                organization: org.map(|o| o.to_string()),
            },
            subject: subject.to_string(),
            body: body.to_string(),
            received_at: Utc::now(),
            is_read: false,
            is_handled: false,
            folder: Folder::Inbox,
            detected_intent: None,
        }
    }

    fn extract(email: &Email) -> EmailContext {
        let lex = Lexicon::default();
        let re = Regex::new(&lex.decision_maker_pattern()).unwrap();
        extract_context(email, &lex, &re)
    }

    #[test]
    fn healthcare_terms_outrank_consortium() {
        let email = make_email(
            Some("Regional Medical Consortium"),
            "sam@rmc.org",
            "",
            "",
        );
        assert_eq!(extract(&email).customer_type, CustomerType::Healthcare);
    }

    #[test]
    fn corporate_terms_outrank_academic() {
        let email = make_email(Some("University Labs Inc"), "sam@unilabs.com", "", "");
        assert_eq!(extract(&email).customer_type, CustomerType::Corporate);
    }

    #[test]
    fn edu_address_marks_academic_without_org() {
        let email = make_email(None, "sam@medschool.edu", "", "");
        assert_eq!(extract(&email).customer_type, CustomerType::Academic);
    }

    #[test]
    fn internal_domain_detected() {
        let email = make_email(None, "sam@elsevier.com", "", "");
        assert_eq!(extract(&email).customer_type, CustomerType::Internal);
    }

    #[test]
    fn unknown_sender_defaults_to_individual() {
        let email = make_email(None, "sam@gmail.com", "", "");
        assert_eq!(extract(&email).customer_type, CustomerType::Individual);
    }

    #[test]
    fn urgency_tiers_apply_in_priority_order() {
        let critical = make_email(None, "a@b.c", "", "The deadline is Friday, this is urgent.");
        assert_eq!(extract(&critical).urgency, Urgency::Critical);

        let high = make_email(None, "a@b.c", "", "Could you reply by end of week, asap?");
        assert_eq!(extract(&high).urgency, Urgency::High);

        let low = make_email(None, "a@b.c", "", "No rush at all, whenever suits.");
        assert_eq!(extract(&low).urgency, Urgency::Low);

        let medium = make_email(None, "a@b.c", "", "Just following up on my earlier note.");
        assert_eq!(extract(&medium).urgency, Urgency::Medium);
    }

    #[test]
    fn urgency_cue_in_subject_counts() {
        let email = make_email(None, "a@b.c", "Urgent: site down", "Please take a look.");
        assert_eq!(extract(&email).urgency, Urgency::Critical);
    }

    #[test]
    fn products_in_catalog_order_without_duplicates() {
        let email = make_email(
            None,
            "a@b.c",
            "",
            "We use Scopus daily, and ScienceDirect too. SCOPUS access matters most.",
        );
        let ctx = extract(&email);
        assert_eq!(ctx.products, vec!["ScienceDirect".to_string(), "Scopus".to_string()]);
    }

    #[test]
    fn api_mention_maps_to_api_access_product() {
        let email = make_email(None, "a@b.c", "", "Is there an API for bulk export?");
        assert_eq!(extract(&email).products, vec!["API Access".to_string()]);
    }

    #[test]
    fn requirements_accumulate_independently() {
        let email = make_email(
            None,
            "a@b.c",
            "Quote request",
            "We need pricing for a multi-year license, a demo for the team, \
             and details on API integration.",
        );
        let ctx = extract(&email);
        assert_eq!(
            ctx.key_requirements,
            vec![
                "Pricing information".to_string(),
                "Product demonstration".to_string(),
                "Technical integration".to_string(),
                "Multi-year agreement".to_string(),
            ]
        );
    }

    #[test]
    fn refund_and_access_requirements_detected() {
        let email = make_email(
            None,
            "a@b.c",
            "",
            "Requesting a refund; meanwhile our access is still broken.",
        );
        let ctx = extract(&email);
        assert_eq!(
            ctx.key_requirements,
            vec!["Refund processing".to_string(), "Access resolution".to_string()]
        );
    }

    #[test]
    fn scale_cues_mark_high_deal_value() {
        let email = make_email(
            None,
            "a@b.c",
            "",
            "The enterprise budget for this is around $2.1M.",
        );
        assert_eq!(extract(&email).estimated_deal_value, DealValue::High);
    }

    #[test]
    fn university_org_marks_medium_deal_value() {
        let email = make_email(
            Some("State University"),
            "sam@stateu.edu",
            "",
            "Some everyday question.",
        );
        assert_eq!(extract(&email).estimated_deal_value, DealValue::Medium);
    }

    #[test]
    fn no_scale_cues_means_unknown_deal_value() {
        let email = make_email(None, "a@b.c", "", "Quick question about the docs.");
        assert_eq!(extract(&email).estimated_deal_value, DealValue::Unknown);
    }

    #[test]
    fn positive_cues_outrank_frustration() {
        let email = make_email(
            None,
            "a@b.c",
            "",
            "Good news: the committee approved, though I cannot say when funds land.",
        );
        assert_eq!(extract(&email).sentiment, Sentiment::Positive);
    }

    #[test]
    fn elevated_urgency_reads_as_urgent_sentiment() {
        let email = make_email(None, "a@b.c", "", "We need this fixed immediately.");
        let ctx = extract(&email);
        assert_eq!(ctx.urgency, Urgency::Critical);
        assert_eq!(ctx.sentiment, Sentiment::Urgent);
    }

    #[test]
    fn decision_maker_title_is_captured() {
        let email = make_email(
            Some("City Hospital"),
            "sam@cityhospital.org",
            "",
            "I am the Director of Medical Education and need this resolved.",
        );
        let ctx = extract(&email);
        assert!(ctx.decision_maker);
        assert_eq!(ctx.decision_maker_title.as_deref(), Some("Director"));
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let email = make_email(None, "a@b.c", "", "As dean of the faculty I approve.");
        let ctx = extract(&email);
        assert!(ctx.decision_maker);
        assert_eq!(ctx.decision_maker_title.as_deref(), Some("dean"));
    }

    #[test]
    fn compound_title_matches_as_substring() {
        let email = make_email(None, "a@b.c", "", "Our Headmaster signed off on the order.");
        let ctx = extract(&email);
        assert!(ctx.decision_maker);
        assert_eq!(ctx.decision_maker_title.as_deref(), Some("Head"));
    }

    #[test]
    fn no_title_means_not_a_decision_maker() {
        let email = make_email(None, "a@b.c", "", "I am a PhD student in the chemistry group.");
        let ctx = extract(&email);
        assert!(!ctx.decision_maker);
        assert!(ctx.decision_maker_title.is_none());
    }

    #[test]
    fn empty_email_yields_defaults() {
        let email = make_email(None, "", "", "");
        let ctx = extract(&email);
        assert_eq!(ctx.customer_type, CustomerType::Individual);
        assert_eq!(ctx.urgency, Urgency::Medium);
        assert!(ctx.products.is_empty());
        assert!(ctx.key_requirements.is_empty());
        assert_eq!(ctx.estimated_deal_value, DealValue::Unknown);
        assert_eq!(ctx.sentiment, Sentiment::Neutral);
        assert!(!ctx.decision_maker);
    }
}
