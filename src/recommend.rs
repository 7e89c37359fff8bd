//! Intent-keyed recommendation dispatch.
//!
//! One handler per intent, each a pure template interpolation over the
//! email and its analysis. Optional fields are populated only where they
//! apply. The string-label entry point degrades to a generic
//! recommendation instead of failing on unknown labels.

use crate::types::{AgentRecommendation, Email, EmailAnalysis, Intent, Urgency};

/// Build the recommendation for an analyzed email.
pub fn recommend(email: &Email, analysis: &EmailAnalysis) -> AgentRecommendation {
    recommend_intent(analysis.intent, email, analysis)
}

/// Build a recommendation from an untrusted intent label (for example one
/// returned by an external classifier). Unrecognized labels fall back to
/// the generic recommendation; this never errors.
pub fn recommend_for_label(
    label: &str,
    email: &Email,
    analysis: &EmailAnalysis,
) -> AgentRecommendation {
    match Intent::parse(label) {
        Some(intent) => recommend_intent(intent, email, analysis),
        None => fallback_recommendation(email),
    }
}

/// Generic "need more context" recommendation for anything outside the
/// intent taxonomy.
pub fn fallback_recommendation(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!(
            "Message from {} needs more context before a recommendation.",
            email.sender.name
        ),
        primary_action: "Review the email manually".to_string(),
        reasoning: "The detected intent is outside the known taxonomy, so no playbook applies."
            .to_string(),
        alternatives: vec![
            "Reply asking for clarification".to_string(),
            "Route to a human agent".to_string(),
        ],
        talking_points: None,
        risk_factors: None,
        time_sensitivity: None,
    }
}

fn recommend_intent(intent: Intent, email: &Email, analysis: &EmailAnalysis) -> AgentRecommendation {
    match intent {
        Intent::HighValueOpportunity => high_value_opportunity(email),
        Intent::RenewalRequest => renewal_request(email),
        Intent::PricingRequest => pricing_request(email, analysis),
        Intent::ProductEnquiry => product_enquiry(email),
        Intent::ProductRefund => product_refund(email, analysis),
        Intent::PasswordChange => password_change(email),
        Intent::AccountReset => account_reset(email),
        Intent::AccessIssue => access_issue(email, analysis),
        Intent::TechnicalSupport => technical_support(email),
    }
}

// -----------------------------------------------------------------------
// Sales handlers
// -----------------------------------------------------------------------

fn high_value_opportunity(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!(
            "High-value opportunity from {}. Requires personal attention.",
            email.sender.org_or_name()
        ),
        primary_action: "Review and craft personalized response".to_string(),
        reasoning: "High-value deals require executive engagement and customized proposals."
            .to_string(),
        alternatives: vec![
            "Schedule executive meeting".to_string(),
            "Prepare custom proposal".to_string(),
        ],
        talking_points: Some(vec![
            "Multi-year incentives".to_string(),
            "Bundle discounts".to_string(),
            "Strategic partnership".to_string(),
        ]),
        risk_factors: None,
        time_sensitivity: Some("Respond within 4 hours".to_string()),
    }
}

fn renewal_request(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!("Renewal request from {}.", email.sender.org_or_name()),
        primary_action: "Forward to Renewals team with context".to_string(),
        reasoning: "Renewal processes should follow standard procedures for efficiency."
            .to_string(),
        alternatives: vec![
            "Generate renewal quote".to_string(),
            "Schedule renewal call".to_string(),
        ],
        talking_points: None,
        risk_factors: None,
        time_sensitivity: Some("Respond within 24 hours".to_string()),
    }
}

fn pricing_request(email: &Email, analysis: &EmailAnalysis) -> AgentRecommendation {
    let talking_points = if analysis.key_requirements.is_empty() {
        None
    } else {
        Some(analysis.key_requirements.clone())
    };
    AgentRecommendation {
        summary: format!("Pricing request from {}.", email.sender.org_or_name()),
        primary_action: "Generate quote draft".to_string(),
        reasoning: "Provide quick pricing to maintain momentum.".to_string(),
        alternatives: vec![
            "Send standard pricing sheet".to_string(),
            "Schedule pricing call".to_string(),
        ],
        talking_points,
        risk_factors: None,
        time_sensitivity: Some("Respond within 24 hours".to_string()),
    }
}

fn product_enquiry(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!("Product enquiry from {}.", email.sender.org_or_name()),
        primary_action: "Send standard product information".to_string(),
        reasoning: "Standard response should address initial questions.".to_string(),
        alternatives: vec![
            "Schedule demo".to_string(),
            "Share case studies".to_string(),
        ],
        talking_points: Some(vec![
            "Product features".to_string(),
            "Integration options".to_string(),
            "Pricing tiers".to_string(),
        ]),
        risk_factors: None,
        time_sensitivity: None,
    }
}

// -----------------------------------------------------------------------
// Support handlers
// -----------------------------------------------------------------------

fn product_refund(email: &Email, analysis: &EmailAnalysis) -> AgentRecommendation {
    let time_sensitivity = if analysis.urgency == Urgency::Critical {
        "Process immediately"
    } else {
        "Process within 24 hours"
    };
    AgentRecommendation {
        summary: format!("Refund request from {}.", email.sender.name),
        primary_action: "Verify transaction and process refund".to_string(),
        reasoning: "Quick refund processing improves customer satisfaction.".to_string(),
        alternatives: vec![
            "Escalate to billing".to_string(),
            "Request more information".to_string(),
        ],
        talking_points: None,
        risk_factors: None,
        time_sensitivity: Some(time_sensitivity.to_string()),
    }
}

fn password_change(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!("Password reset issue from {}.", email.sender.name),
        primary_action: "Send password reset link via alternate method".to_string(),
        reasoning: "Password issues require immediate resolution for access.".to_string(),
        alternatives: vec![
            "Escalate to IT".to_string(),
            "Verify identity and reset manually".to_string(),
        ],
        talking_points: None,
        risk_factors: None,
        time_sensitivity: Some("Respond within 2 hours".to_string()),
    }
}

fn account_reset(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!("Account reset request from {}.", email.sender.name),
        primary_action: "Initiate account reset procedure".to_string(),
        reasoning: "Account access is critical for customer operations.".to_string(),
        alternatives: vec![
            "Verify identity first".to_string(),
            "Escalate to security team".to_string(),
        ],
        talking_points: None,
        risk_factors: None,
        time_sensitivity: Some("Respond within 4 hours".to_string()),
    }
}

fn access_issue(email: &Email, analysis: &EmailAnalysis) -> AgentRecommendation {
    let critical = analysis.urgency == Urgency::Critical;
    AgentRecommendation {
        summary: format!(
            "Access issue reported by {} at {}.",
            email.sender.name,
            email.sender.org_or_name()
        ),
        primary_action: "Create support ticket and grant temporary access".to_string(),
        reasoning: if critical {
            "Critical deadline involved - immediate access restoration needed.".to_string()
        } else {
            "Access issues need investigation to prevent recurrence.".to_string()
        },
        alternatives: vec![
            "Escalate to technical team".to_string(),
            "Verify subscription status".to_string(),
        ],
        talking_points: None,
        risk_factors: critical.then(|| {
            vec![
                "Deadline at risk".to_string(),
                "Customer satisfaction impact".to_string(),
            ]
        }),
        time_sensitivity: Some(if critical {
            "Immediate action required".to_string()
        } else {
            "Respond within 4 hours".to_string()
        }),
    }
}

fn technical_support(email: &Email) -> AgentRecommendation {
    AgentRecommendation {
        summary: format!("Technical support request from {}.", email.sender.name),
        primary_action: "Create support ticket".to_string(),
        reasoning: "Route to appropriate technical team for resolution.".to_string(),
        alternatives: vec![
            "Send troubleshooting guide".to_string(),
            "Schedule support call".to_string(),
        ],
        talking_points: None,
        risk_factors: None,
        time_sensitivity: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, CustomerType, DealValue, Folder, Sender, Sentiment};
    use chrono::Utc;

    fn make_email() -> Email {
        Email {
            id: "e-1".to_string(),
            sender: Sender {
                name: "Alex Moreau".to_string(),
                email: "alex@metro-consortium.org".to_string(),
                organization: Some("Metro Library Consortium".to_string()),
            },
            subject: "Renewal terms".to_string(),
            body: "Looking at renewal terms for next year.".to_string(),
            received_at: Utc::now(),
            is_read: false,
            is_handled: false,
            folder: Folder::Inbox,
            detected_intent: None,
        }
    }

    fn make_analysis(intent: Intent, urgency: Urgency) -> EmailAnalysis {
        EmailAnalysis {
            category: intent.category(),
            intent,
            confidence: 85,
            customer_type: CustomerType::Consortium,
            urgency,
            products: vec![],
            key_requirements: vec!["Pricing information".to_string()],
            estimated_deal_value: DealValue::Medium,
            sentiment: Sentiment::Neutral,
            decision_maker: false,
            actionable_insights: vec![],
        }
    }

    #[test]
    fn high_value_populates_talking_points_and_deadline() {
        let email = make_email();
        let analysis = make_analysis(Intent::HighValueOpportunity, Urgency::Medium);
        let rec = recommend(&email, &analysis);
        assert!(rec.summary.contains("Metro Library Consortium"));
        assert!(rec.talking_points.as_ref().is_some_and(|t| !t.is_empty()));
        assert_eq!(rec.time_sensitivity.as_deref(), Some("Respond within 4 hours"));
    }

    #[test]
    fn pricing_request_surfaces_key_requirements() {
        let email = make_email();
        let analysis = make_analysis(Intent::PricingRequest, Urgency::Medium);
        let rec = recommend(&email, &analysis);
        assert_eq!(
            rec.talking_points,
            Some(vec!["Pricing information".to_string()])
        );
        assert_eq!(rec.primary_action, "Generate quote draft");
    }

    #[test]
    fn pricing_request_without_requirements_omits_talking_points() {
        let email = make_email();
        let mut analysis = make_analysis(Intent::PricingRequest, Urgency::Medium);
        analysis.key_requirements.clear();
        let rec = recommend(&email, &analysis);
        assert!(rec.talking_points.is_none());
    }

    #[test]
    fn refund_deadline_tightens_under_critical_urgency() {
        let email = make_email();
        let relaxed = recommend(&email, &make_analysis(Intent::ProductRefund, Urgency::Medium));
        assert_eq!(relaxed.time_sensitivity.as_deref(), Some("Process within 24 hours"));

        let critical = recommend(&email, &make_analysis(Intent::ProductRefund, Urgency::Critical));
        assert_eq!(critical.time_sensitivity.as_deref(), Some("Process immediately"));
    }

    #[test]
    fn access_issue_risk_factors_only_when_critical() {
        let email = make_email();
        let relaxed = recommend(&email, &make_analysis(Intent::AccessIssue, Urgency::Medium));
        assert!(relaxed.risk_factors.is_none());

        let critical = recommend(&email, &make_analysis(Intent::AccessIssue, Urgency::Critical));
        let risks = critical.risk_factors.expect("critical access issue carries risks");
        assert!(risks.contains(&"Deadline at risk".to_string()));
        assert_eq!(critical.time_sensitivity.as_deref(), Some("Immediate action required"));
    }

    #[test]
    fn every_intent_has_a_handler() {
        let email = make_email();
        let intents = [
            Intent::ProductEnquiry,
            Intent::PricingRequest,
            Intent::RenewalRequest,
            Intent::HighValueOpportunity,
            Intent::ProductRefund,
            Intent::AccountReset,
            Intent::PasswordChange,
            Intent::AccessIssue,
            Intent::TechnicalSupport,
        ];
        for intent in intents {
            let rec = recommend(&email, &make_analysis(intent, Urgency::Medium));
            assert!(!rec.summary.is_empty(), "{intent}");
            assert!(!rec.primary_action.is_empty(), "{intent}");
            assert!(!rec.reasoning.is_empty(), "{intent}");
        }
    }

    #[test]
    fn unknown_label_falls_back_instead_of_failing() {
        let email = make_email();
        let analysis = make_analysis(Intent::ProductEnquiry, Urgency::Medium);
        let rec = recommend_for_label("EscalateToLegal", &email, &analysis);
        assert!(rec.summary.contains("needs more context"));
        assert!(rec.talking_points.is_none());
    }

    #[test]
    fn known_label_dispatches_normally() {
        let email = make_email();
        let analysis = make_analysis(Intent::ProductEnquiry, Urgency::Medium);
        let rec = recommend_for_label("renewalrequest", &email, &analysis);
        assert_eq!(rec.primary_action, "Forward to Renewals team with context");
    }

    #[test]
    fn recommendation_is_deterministic() {
        let email = make_email();
        let analysis = make_analysis(Intent::RenewalRequest, Urgency::Medium);
        let first = recommend(&email, &analysis);
        for _ in 0..3 {
            assert_eq!(recommend(&email, &analysis), first);
        }
    }

    #[test]
    fn category_matches_intent_scope() {
        let analysis = make_analysis(Intent::PasswordChange, Urgency::Medium);
        assert_eq!(analysis.category, Category::Support);
    }
}
