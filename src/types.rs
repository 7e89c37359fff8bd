//! Core data model for email triage.
//!
//! `Email` is the root record; `EmailAnalysis` and `AgentRecommendation` are
//! pure projections derived from it, recomputed on every access and never
//! mutated in place. Everything serializes to flat camelCase JSON so the
//! results can cross any boundary unchanged.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mail folder a message lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Inbox,
    Sent,
    Drafts,
    Archive,
}

/// Message sender: display name, address, optional organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Sender {
    /// Organization if known, otherwise the sender's display name.
    /// Recommendation templates interpolate this.
    pub fn org_or_name(&self) -> &str {
        self.organization.as_deref().unwrap_or(&self.name)
    }
}

/// An email as handed to the triage engine.
///
/// `is_read` and `is_handled` are the only fields a caller flips after
/// creation; the engine itself never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    pub sender: Sender,
    pub subject: String,
    /// Plain text, paragraphs separated by newline characters.
    pub body: String,
    pub received_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_handled: bool,
    pub folder: Folder,
    /// Precomputed intent hint from an import source. The classifier does
    /// not consult it; callers may.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_intent: Option<Intent>,
}

// =============================================================================
// Classification taxonomy
// =============================================================================

/// Top-level routing bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sales,
    Support,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Support => "support",
        }
    }

    /// Lenient parse for untrusted wire values. Case-insensitive, returns
    /// `None` rather than erroring on anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sales" => Some(Self::Sales),
            "support" => Some(Self::Support),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fine-grained business reason for an email, scoped within a category.
///
/// One flat enum instead of per-category sub-enums so the recommendation
/// dispatch stays an exhaustive `match`; `category()` recovers the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    // Sales
    ProductEnquiry,
    PricingRequest,
    RenewalRequest,
    HighValueOpportunity,
    // Support
    ProductRefund,
    AccountReset,
    PasswordChange,
    AccessIssue,
    TechnicalSupport,
}

impl Intent {
    /// The category this intent is scoped to.
    pub fn category(&self) -> Category {
        match self {
            Self::ProductEnquiry
            | Self::PricingRequest
            | Self::RenewalRequest
            | Self::HighValueOpportunity => Category::Sales,
            Self::ProductRefund
            | Self::AccountReset
            | Self::PasswordChange
            | Self::AccessIssue
            | Self::TechnicalSupport => Category::Support,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductEnquiry => "ProductEnquiry",
            Self::PricingRequest => "PricingRequest",
            Self::RenewalRequest => "RenewalRequest",
            Self::HighValueOpportunity => "HighValueOpportunity",
            Self::ProductRefund => "ProductRefund",
            Self::AccountReset => "AccountReset",
            Self::PasswordChange => "PasswordChange",
            Self::AccessIssue => "AccessIssue",
            Self::TechnicalSupport => "TechnicalSupport",
        }
    }

    /// Lenient parse for untrusted wire values. Case-insensitive; `None`
    /// for anything outside the taxonomy.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "productenquiry" => Some(Self::ProductEnquiry),
            "pricingrequest" => Some(Self::PricingRequest),
            "renewalrequest" => Some(Self::RenewalRequest),
            "highvalueopportunity" => Some(Self::HighValueOpportunity),
            "productrefund" => Some(Self::ProductRefund),
            "accountreset" => Some(Self::AccountReset),
            "passwordchange" => Some(Self::PasswordChange),
            "accessissue" => Some(Self::AccessIssue),
            "technicalsupport" => Some(Self::TechnicalSupport),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Extracted context attributes
// =============================================================================

/// Kind of customer inferred from sender metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Academic,
    Healthcare,
    Corporate,
    Consortium,
    Government,
    Individual,
    Internal,
}

/// How quickly the sender expects a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// True for the two tiers that should preempt other work.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// Rough deal size estimate from scale cues in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealValue {
    High,
    Medium,
    Low,
    Unknown,
}

/// Coarse tone of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Frustrated,
    Urgent,
}

// =============================================================================
// Derived projections
// =============================================================================

/// Full analysis of one email: classification plus extracted context.
///
/// A pure function of the input `Email` and the lexicon. Re-derivable at
/// any time; callers may memoize per email id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAnalysis {
    pub category: Category,
    pub intent: Intent,
    /// Heuristic certainty, 0-100. Not a calibrated probability.
    pub confidence: u8,
    pub customer_type: CustomerType,
    pub urgency: Urgency,
    /// Known product names found in the body, in catalog order, no duplicates.
    pub products: Vec<String>,
    pub key_requirements: Vec<String>,
    pub estimated_deal_value: DealValue,
    pub sentiment: Sentiment,
    pub decision_maker: bool,
    pub actionable_insights: Vec<String>,
}

/// Structured next-action suggestion for a human agent.
///
/// Deterministic given identical inputs. Absent optional fields mean
/// "not applicable", not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecommendation {
    pub summary: String,
    pub primary_action: String,
    pub reasoning: String,
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talking_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_sensitivity: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_category_scoping() {
        assert_eq!(Intent::PricingRequest.category(), Category::Sales);
        assert_eq!(Intent::HighValueOpportunity.category(), Category::Sales);
        assert_eq!(Intent::PasswordChange.category(), Category::Support);
        assert_eq!(Intent::TechnicalSupport.category(), Category::Support);
    }

    #[test]
    fn intent_parse_is_case_insensitive() {
        assert_eq!(Intent::parse("PricingRequest"), Some(Intent::PricingRequest));
        assert_eq!(Intent::parse("pricingrequest"), Some(Intent::PricingRequest));
        assert_eq!(Intent::parse("  AccessIssue  "), Some(Intent::AccessIssue));
        assert_eq!(Intent::parse("EscalateToLegal"), None);
        assert_eq!(Intent::parse(""), None);
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert_eq!(Category::parse("Sales"), Some(Category::Sales));
        assert_eq!(Category::parse("SUPPORT"), Some(Category::Support));
        assert_eq!(Category::parse("spam"), None);
    }

    #[test]
    fn analysis_serializes_camel_case() {
        let analysis = EmailAnalysis {
            category: Category::Sales,
            intent: Intent::PricingRequest,
            confidence: 85,
            customer_type: CustomerType::Academic,
            urgency: Urgency::Medium,
            products: vec!["Scopus".to_string()],
            key_requirements: vec![],
            estimated_deal_value: DealValue::Medium,
            sentiment: Sentiment::Neutral,
            decision_maker: false,
            actionable_insights: vec![],
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["category"], "sales");
        assert_eq!(json["intent"], "PricingRequest");
        assert_eq!(json["customerType"], "academic");
        assert_eq!(json["estimatedDealValue"], "medium");
        assert!(json["actionableInsights"].is_array());
    }

    #[test]
    fn recommendation_omits_absent_optionals() {
        let rec = AgentRecommendation {
            summary: "s".to_string(),
            primary_action: "a".to_string(),
            reasoning: "r".to_string(),
            alternatives: vec![],
            talking_points: None,
            risk_factors: None,
            time_sensitivity: None,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("talkingPoints").is_none());
        assert!(json.get("riskFactors").is_none());
        assert!(json.get("timeSensitivity").is_none());
    }

    #[test]
    fn org_or_name_falls_back_to_name() {
        let with_org = Sender {
            name: "Dana Reyes".to_string(),
            email: "dana@citylabs.com".to_string(),
            organization: Some("City Labs".to_string()),
        };
        let without_org = Sender {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            organization: None,
        };
        assert_eq!(with_org.org_or_name(), "City Labs");
        assert_eq!(without_org.org_or_name(), "Dana Reyes");
    }
}
