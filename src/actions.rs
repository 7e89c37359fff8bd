//! Per-intent quick actions.
//!
//! Static dispatch tables pairing each intent with the one-click actions a
//! human agent can take, plus the feedback line and rough time saved shown
//! after triggering one. Pure data; executing an action is the caller's
//! concern.

use serde::Serialize;

use crate::types::Intent;

/// Visual weight of an action. The first action per intent is the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    Primary,
    Secondary,
}

/// One quick action available for an intent.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentAction {
    pub id: &'static str,
    pub label: &'static str,
    pub variant: ActionVariant,
    /// Confirmation line shown once the action has been triggered.
    pub feedback: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_saved: Option<&'static str>,
}

const PRODUCT_ENQUIRY: &[IntentAction] = &[
    IntentAction {
        id: "send-standard",
        label: "Send Standard Response",
        variant: ActionVariant::Primary,
        feedback: "Standard response sent to customer",
        time_saved: Some("10 min"),
    },
    IntentAction {
        id: "share-product-info",
        label: "Share Product Info",
        variant: ActionVariant::Secondary,
        feedback: "Product information package sent",
        time_saved: Some("15 min"),
    },
    IntentAction {
        id: "schedule-demo",
        label: "Schedule Demo",
        variant: ActionVariant::Secondary,
        feedback: "Demo scheduled with customer",
        time_saved: Some("20 min"),
    },
];

const PRICING_REQUEST: &[IntentAction] = &[
    IntentAction {
        id: "generate-quote",
        label: "Generate Quote Draft",
        variant: ActionVariant::Primary,
        feedback: "Quote draft generated and ready for review",
        time_saved: Some("25 min"),
    },
    IntentAction {
        id: "send-pricing",
        label: "Send Pricing Sheet",
        variant: ActionVariant::Secondary,
        feedback: "Pricing sheet sent to customer",
        time_saved: Some("15 min"),
    },
];

const RENEWAL_REQUEST: &[IntentAction] = &[
    IntentAction {
        id: "forward-renewals",
        label: "Forward to Renewals",
        variant: ActionVariant::Primary,
        feedback: "Request forwarded to Renewals team",
        time_saved: Some("15 min"),
    },
    IntentAction {
        id: "generate-renewal-quote",
        label: "Generate Renewal Quote",
        variant: ActionVariant::Secondary,
        feedback: "Renewal quote generated",
        time_saved: Some("20 min"),
    },
];

const HIGH_VALUE_OPPORTUNITY: &[IntentAction] = &[IntentAction {
    id: "priority-response",
    label: "Priority Response",
    variant: ActionVariant::Primary,
    feedback: "Priority response drafted",
    time_saved: Some("30 min"),
}];

const PRODUCT_REFUND: &[IntentAction] = &[
    IntentAction {
        id: "process-refund",
        label: "Process Refund",
        variant: ActionVariant::Primary,
        feedback: "Refund processed successfully",
        time_saved: Some("15 min"),
    },
    IntentAction {
        id: "verify-transaction",
        label: "Verify Transaction",
        variant: ActionVariant::Secondary,
        feedback: "Transaction verification initiated",
        time_saved: Some("10 min"),
    },
];

const ACCOUNT_RESET: &[IntentAction] = &[
    IntentAction {
        id: "reset-account",
        label: "Reset Account",
        variant: ActionVariant::Primary,
        feedback: "Account reset initiated",
        time_saved: Some("10 min"),
    },
    IntentAction {
        id: "send-verification",
        label: "Send Verification",
        variant: ActionVariant::Secondary,
        feedback: "Verification email sent",
        time_saved: Some("5 min"),
    },
];

const PASSWORD_CHANGE: &[IntentAction] = &[
    IntentAction {
        id: "send-reset-link",
        label: "Send Reset Link",
        variant: ActionVariant::Primary,
        feedback: "Password reset link sent",
        time_saved: Some("5 min"),
    },
    IntentAction {
        id: "escalate-it",
        label: "Escalate to IT",
        variant: ActionVariant::Secondary,
        feedback: "Issue escalated to IT team",
        time_saved: Some("10 min"),
    },
];

const ACCESS_ISSUE: &[IntentAction] = &[
    IntentAction {
        id: "create-ticket",
        label: "Create Support Ticket",
        variant: ActionVariant::Primary,
        feedback: "Support ticket created and assigned",
        time_saved: Some("15 min"),
    },
    IntentAction {
        id: "grant-temp-access",
        label: "Grant Temporary Access",
        variant: ActionVariant::Secondary,
        feedback: "Temporary access granted",
        time_saved: Some("10 min"),
    },
];

const TECHNICAL_SUPPORT: &[IntentAction] = &[
    IntentAction {
        id: "escalate-technical",
        label: "Escalate to Technical",
        variant: ActionVariant::Primary,
        feedback: "Issue escalated to technical team",
        time_saved: Some("20 min"),
    },
    IntentAction {
        id: "send-troubleshooting",
        label: "Send Troubleshooting Guide",
        variant: ActionVariant::Secondary,
        feedback: "Troubleshooting guide sent",
        time_saved: Some("10 min"),
    },
];

/// Quick actions for an intent, primary action first.
pub fn actions_for(intent: Intent) -> &'static [IntentAction] {
    match intent {
        Intent::ProductEnquiry => PRODUCT_ENQUIRY,
        Intent::PricingRequest => PRICING_REQUEST,
        Intent::RenewalRequest => RENEWAL_REQUEST,
        Intent::HighValueOpportunity => HIGH_VALUE_OPPORTUNITY,
        Intent::ProductRefund => PRODUCT_REFUND,
        Intent::AccountReset => ACCOUNT_RESET,
        Intent::PasswordChange => PASSWORD_CHANGE,
        Intent::AccessIssue => ACCESS_ISSUE,
        Intent::TechnicalSupport => TECHNICAL_SUPPORT,
    }
}
