//! Category and intent scoring over raw email text.
//!
//! Scoring is substring presence, not token match: a keyword counts once
//! per email no matter how often it appears. Intent rules are evaluated in
//! a fixed order per category and the first match wins.

use crate::lexicon::Lexicon;
use crate::types::{Category, Email, Intent};

/// Classifier output: the winning category and intent with their
/// individual confidences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub category_confidence: u8,
    pub intent: Intent,
    pub intent_confidence: u8,
}

impl Classification {
    /// Rounded mean of the category and intent confidences. This is the
    /// single number reported on `EmailAnalysis`.
    pub fn overall_confidence(&self) -> u8 {
        ((self.category_confidence as u16 + self.intent_confidence as u16 + 1) / 2) as u8
    }
}

/// Confidence when category scores tie (including zero-zero).
const TIE_CONFIDENCE: u8 = 50;
/// Confidence for a category-default intent when no cue rule fires.
const DEFAULT_INTENT_CONFIDENCE: u8 = 70;

// Support conjunction cues. These rules need two hits at once, so they
// stay structural rather than living in the lexicon's flat lists.
const ACCESS_PROBLEM_CUES: &[&str] = &["denied", "revoked", "cannot"];

/// Classify one email against the lexicon.
///
/// Total over its input: empty subject and body simply match nothing and
/// fall through to the sales default at tie confidence.
pub fn classify(email: &Email, lexicon: &Lexicon) -> Classification {
    let subject = email.subject.to_lowercase();
    let body = email.body.to_lowercase();

    let (category, category_confidence) = categorize(&subject, &body, lexicon);
    let (intent, intent_confidence) = detect_intent(&subject, &body, category, lexicon);

    Classification {
        category,
        category_confidence,
        intent,
        intent_confidence,
    }
}

/// Count how many distinct keywords appear in subject or body.
fn distinct_hits(subject: &str, body: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|kw| subject.contains(kw.as_str()) || body.contains(kw.as_str()))
        .count()
}

fn any_cue(text: &str, cues: &[String]) -> bool {
    cues.iter().any(|cue| text.contains(cue.as_str()))
}

/// The subject line is consulted only for a cue list's primary (first)
/// term; the secondary cues apply to the body alone.
fn primary_cue(text: &str, cues: &[String]) -> bool {
    cues.first().is_some_and(|cue| text.contains(cue.as_str()))
}

fn categorize(subject: &str, body: &str, lexicon: &Lexicon) -> (Category, u8) {
    let sales_score = distinct_hits(subject, body, &lexicon.sales_keywords);
    let support_score = distinct_hits(subject, body, &lexicon.support_keywords);

    if sales_score == support_score {
        // Ambiguous text routes to sales at low confidence.
        return (Category::Sales, TIE_CONFIDENCE);
    }

    let (category, score) = if sales_score > support_score {
        (Category::Sales, sales_score)
    } else {
        (Category::Support, support_score)
    };

    let confidence = (60 + 5 * score).min(95) as u8;
    (category, confidence)
}

fn detect_intent(subject: &str, body: &str, category: Category, lexicon: &Lexicon) -> (Intent, u8) {
    match category {
        Category::Sales => {
            if any_cue(body, &lexicon.high_value_cues) {
                return (Intent::HighValueOpportunity, 90);
            }
            if any_cue(body, &lexicon.renewal_cues) || primary_cue(subject, &lexicon.renewal_cues) {
                return (Intent::RenewalRequest, 85);
            }
            if any_cue(body, &lexicon.pricing_cues) || primary_cue(subject, &lexicon.pricing_cues) {
                return (Intent::PricingRequest, 85);
            }
            (Intent::ProductEnquiry, DEFAULT_INTENT_CONFIDENCE)
        }
        Category::Support => {
            if any_cue(body, &lexicon.refund_cues) {
                return (Intent::ProductRefund, 90);
            }
            if body.contains("password") || subject.contains("password") {
                return (Intent::PasswordChange, 90);
            }
            if body.contains("reset") && body.contains("account") {
                return (Intent::AccountReset, 85);
            }
            if body.contains("access") && ACCESS_PROBLEM_CUES.iter().any(|c| body.contains(c)) {
                return (Intent::AccessIssue, 85);
            }
            (Intent::TechnicalSupport, DEFAULT_INTENT_CONFIDENCE)
        }
    }
}
