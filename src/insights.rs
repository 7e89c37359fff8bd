//! Actionable insight strings derived from an email plus its extracted
//! context. Entries appear in a fixed order; conditions that do not hold
//! simply contribute nothing.

use crate::context::EmailContext;
use crate::lexicon::Lexicon;
use crate::types::{DealValue, Email};

const RENEWAL_WINDOW_CUES: (&str, &str) = ("renewal", "expires");

/// Build the ordered insight list for one email.
///
/// Order: decision-maker note, high-value flag, renewal-window flag,
/// competitive-evaluation flag, cross-sell flag.
pub fn generate_insights(email: &Email, ctx: &EmailContext, lexicon: &Lexicon) -> Vec<String> {
    let body = email.body.to_lowercase();
    let mut insights = Vec::new();

    if let Some(title) = &ctx.decision_maker_title {
        insights.push(format!(
            "{} is a decision-maker ({})",
            email.sender.name, title
        ));
    }

    if ctx.estimated_deal_value == DealValue::High {
        insights.push("High-value opportunity - prioritize".to_string());
    }

    let (renewal, expires) = RENEWAL_WINDOW_CUES;
    if body.contains(renewal) && body.contains(expires) {
        insights.push("Renewal window open - current agreement expires soon".to_string());
    }

    let rivals: Vec<&str> = lexicon
        .competitors
        .iter()
        .filter(|name| body.contains(&name.to_lowercase()))
        .map(|name| name.as_str())
        .collect();
    if !rivals.is_empty() {
        insights.push(format!(
            "Competitive evaluation underway: mentions {}",
            rivals.join(", ")
        ));
    }

    if ctx.products.len() > 1 {
        insights.push(format!(
            "Cross-sell opportunity: {}",
            ctx.products.join(", ")
        ));
    }

    insights
}
