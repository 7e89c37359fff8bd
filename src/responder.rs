//! Canned conversational replies about an analyzed email.
//!
//! Single pass over the lower-cased user input, branches checked in a
//! fixed priority order. Every branch formats fields already present on
//! the analysis or recommendation; the final branch is an unconditional
//! catch-all, so the reply is never empty.

use crate::types::{AgentRecommendation, Email, EmailAnalysis};

/// Answer a free-text follow-up question about one email.
pub fn respond(
    input: &str,
    email: &Email,
    analysis: &EmailAnalysis,
    recommendation: &AgentRecommendation,
) -> String {
    let lower = input.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("why") || has("explain") {
        return explain(analysis, recommendation);
    }

    if has("alternative") || has("other option") {
        return list_alternatives(recommendation);
    }

    if has("talking point") || has("what should i say") {
        return list_talking_points(analysis, recommendation);
    }

    if has("risk") || has("concern") {
        return list_risks(recommendation);
    }

    if has("account") || has("history") {
        return format!(
            "I can pull up the account history for {}. That covers past purchases, \
             support tickets, and renewal dates.",
            email.sender.org_or_name()
        );
    }

    if has("yes") || has("proceed") || has("go ahead") {
        return format!(
            "Great, I'm preparing \"{}\" now. It will be ready for your review momentarily.",
            recommendation.primary_action
        );
    }

    if has("draft") || has("compose") {
        return "I'm drafting a reply from this email's context. You can review and edit \
                it before anything is sent."
            .to_string();
    }

    if has("help") {
        return "I can explain this recommendation, list alternatives and talking points, \
                flag risks, pull up account history, or draft a reply. Just ask."
            .to_string();
    }

    // Catch-all: always well-formed, never empty.
    format!(
        "Based on my analysis, this is a {} query with {} intent. {}",
        analysis.category, analysis.intent, recommendation.reasoning
    )
}

fn explain(analysis: &EmailAnalysis, recommendation: &AgentRecommendation) -> String {
    if analysis.actionable_insights.is_empty() {
        return recommendation.reasoning.clone();
    }
    let bullets = analysis
        .actionable_insights
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\nKey insights:\n{}", recommendation.reasoning, bullets)
}

fn list_alternatives(recommendation: &AgentRecommendation) -> String {
    if recommendation.alternatives.is_empty() {
        return "The primary action I recommended is the best approach for this situation."
            .to_string();
    }
    let numbered = recommendation
        .alternatives
        .iter()
        .enumerate()
        .map(|(i, alt)| format!("{}. {}", i + 1, alt))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Alternative approaches:\n{numbered}")
}

fn list_talking_points(analysis: &EmailAnalysis, recommendation: &AgentRecommendation) -> String {
    match &recommendation.talking_points {
        Some(points) if !points.is_empty() => {
            let bullets = points
                .iter()
                .map(|p| format!("- {p}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Key talking points:\n{bullets}")
        }
        _ => {
            let topic = if analysis.products.is_empty() {
                "the product".to_string()
            } else {
                analysis.products.join(", ")
            };
            format!("Focus on addressing their specific questions about {topic}.")
        }
    }
}

fn list_risks(recommendation: &AgentRecommendation) -> String {
    match &recommendation.risk_factors {
        Some(risks) if !risks.is_empty() => {
            let bullets = risks
                .iter()
                .map(|r| format!("- {r}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Potential risks:\n{bullets}")
        }
        _ => "No significant risks identified for this request.".to_string(),
    }
}
