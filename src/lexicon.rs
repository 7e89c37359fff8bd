//! Keyword tables driving classification and context extraction.
//!
//! Everything the engine substring-matches against lives here so a
//! deployment can overlay its own vocabulary (partial configs fall back to
//! the built-in tables field by field). Loaded once at startup and treated
//! as immutable from then on.

use serde::{Deserialize, Serialize};

// Built-in vocabulary. The product catalog and competitor list reflect the
// scholarly-publishing deployment this engine was first tuned for.

const SALES_KEYWORDS: &[&str] = &[
    "pricing", "quote", "purchase", "buy", "subscription", "upgrade",
    "license", "proposal", "contract", "renewal", "expand", "budget",
    "cost", "discount", "deal", "demo", "trial", "enterprise", "bundle",
    "multi-year", "annual", "negotiate",
];

const SUPPORT_KEYWORDS: &[&str] = &[
    "error", "issue", "problem", "access denied", "login", "password",
    "help", "support", "not working", "cannot", "trouble", "failed",
    "reset", "blocked", "refund", "charge", "duplicate", "urgent",
    "revoked", "suspended", "locked out", "broken",
];

const HIGH_VALUE_CUES: &[&str] = &["$1", "$2", "million", "enterprise", "multi-year", "5-year"];
const RENEWAL_CUES: &[&str] = &["renewal", "renew"];
const PRICING_CUES: &[&str] = &["pricing", "quote", "cost"];
const REFUND_CUES: &[&str] = &["refund", "charge", "duplicate"];

const URGENCY_CRITICAL_CUES: &[&str] = &["urgent", "critical", "immediately", "deadline"];
const URGENCY_HIGH_CUES: &[&str] = &["asap", "by end of", "tomorrow"];
const URGENCY_LOW_CUES: &[&str] = &["when convenient", "no rush"];

const POSITIVE_CUES: &[&str] = &["good news", "approved", "ready"];
const FRUSTRATED_CUES: &[&str] = &["frustrated", "disappointed", "cannot"];

const HEALTHCARE_TERMS: &[&str] = &["clinic", "hospital", "nhs", "medical"];
const CONSORTIUM_TERMS: &[&str] = &["consortium"];
const CORPORATE_TERMS: &[&str] = &["corp", "inc", "labs"];
const ACADEMIC_TERMS: &[&str] = &["university", "edu"];
const INTERNAL_DOMAINS: &[&str] = &["elsevier.com"];

const DEAL_HIGH_CUES: &[&str] = &["$1", "$2", "million", "enterprise"];
const DEAL_MEDIUM_CUES: &[&str] = &["150", "200+"];

const COMPETITORS: &[&str] = &[
    "Web of Science", "Springer", "Wiley", "Taylor & Francis",
    "Google Scholar", "PubMed", "EndNote", "Zotero",
];

const DECISION_MAKER_TITLES: &[&str] = &[
    "Director", "Dean", "Manager", "Chief", "Executive",
    "Coordinator", "VP", "President", "Head", "Administrator",
];

const PRODUCT_CATALOG: &[(&str, &str)] = &[
    ("ScienceDirect", "sciencedirect"),
    ("Scopus", "scopus"),
    ("ClinicalKey", "clinicalkey"),
    ("Mendeley", "mendeley"),
    ("SciVal", "scival"),
    ("API Access", "api"),
];

/// One catalog product: display name plus the lowercase needle matched
/// against body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub name: String,
    pub needle: String,
}

/// The full keyword configuration for one engine instance.
///
/// Every field has a built-in default, so a config file only needs the
/// tables it wants to replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    /// Category scoring keywords. A keyword counts once per email no
    /// matter how often it appears.
    #[serde(default = "default_sales_keywords")]
    pub sales_keywords: Vec<String>,
    #[serde(default = "default_support_keywords")]
    pub support_keywords: Vec<String>,

    /// Intent cue lists, checked in the classifier's fixed rule order.
    #[serde(default = "default_high_value_cues")]
    pub high_value_cues: Vec<String>,
    #[serde(default = "default_renewal_cues")]
    pub renewal_cues: Vec<String>,
    #[serde(default = "default_pricing_cues")]
    pub pricing_cues: Vec<String>,
    #[serde(default = "default_refund_cues")]
    pub refund_cues: Vec<String>,

    #[serde(default = "default_urgency_critical_cues")]
    pub urgency_critical_cues: Vec<String>,
    #[serde(default = "default_urgency_high_cues")]
    pub urgency_high_cues: Vec<String>,
    #[serde(default = "default_urgency_low_cues")]
    pub urgency_low_cues: Vec<String>,

    #[serde(default = "default_positive_cues")]
    pub positive_cues: Vec<String>,
    #[serde(default = "default_frustrated_cues")]
    pub frustrated_cues: Vec<String>,

    /// Customer-type terms matched against the sender organization,
    /// highest priority first: healthcare, consortium, corporate, academic.
    #[serde(default = "default_healthcare_terms")]
    pub healthcare_terms: Vec<String>,
    #[serde(default = "default_consortium_terms")]
    pub consortium_terms: Vec<String>,
    #[serde(default = "default_corporate_terms")]
    pub corporate_terms: Vec<String>,
    #[serde(default = "default_academic_terms")]
    pub academic_terms: Vec<String>,
    /// Sender email domains treated as internal colleagues.
    #[serde(default = "default_internal_domains")]
    pub internal_domains: Vec<String>,

    #[serde(default = "default_deal_high_cues")]
    pub deal_high_cues: Vec<String>,
    #[serde(default = "default_deal_medium_cues")]
    pub deal_medium_cues: Vec<String>,

    #[serde(default = "default_products")]
    pub products: Vec<ProductEntry>,
    /// Competing product names, matched case-insensitively in the body.
    #[serde(default = "default_competitors")]
    pub competitors: Vec<String>,
    /// Organizational titles that signal purchasing authority.
    #[serde(default = "default_decision_maker_titles")]
    pub decision_maker_titles: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            sales_keywords: default_sales_keywords(),
            support_keywords: default_support_keywords(),
            high_value_cues: default_high_value_cues(),
            renewal_cues: default_renewal_cues(),
            pricing_cues: default_pricing_cues(),
            refund_cues: default_refund_cues(),
            urgency_critical_cues: default_urgency_critical_cues(),
            urgency_high_cues: default_urgency_high_cues(),
            urgency_low_cues: default_urgency_low_cues(),
            positive_cues: default_positive_cues(),
            frustrated_cues: default_frustrated_cues(),
            healthcare_terms: default_healthcare_terms(),
            consortium_terms: default_consortium_terms(),
            corporate_terms: default_corporate_terms(),
            academic_terms: default_academic_terms(),
            internal_domains: default_internal_domains(),
            deal_high_cues: default_deal_high_cues(),
            deal_medium_cues: default_deal_medium_cues(),
            products: default_products(),
            competitors: default_competitors(),
            decision_maker_titles: default_decision_maker_titles(),
        }
    }
}

impl Lexicon {
    /// Case-insensitive alternation over the decision-maker titles, ready
    /// for `Regex::new`. Titles match as substrings, so compounds like
    /// "Headmaster" or "SVP" count. Titles are escaped so config values
    /// can contain regex metacharacters safely.
    pub fn decision_maker_pattern(&self) -> String {
        let alternation = self
            .decision_maker_titles
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        format!(r"(?i)({})", alternation)
    }
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_sales_keywords() -> Vec<String> {
    strings(SALES_KEYWORDS)
}

fn default_support_keywords() -> Vec<String> {
    strings(SUPPORT_KEYWORDS)
}

fn default_high_value_cues() -> Vec<String> {
    strings(HIGH_VALUE_CUES)
}

fn default_renewal_cues() -> Vec<String> {
    strings(RENEWAL_CUES)
}

fn default_pricing_cues() -> Vec<String> {
    strings(PRICING_CUES)
}

fn default_refund_cues() -> Vec<String> {
    strings(REFUND_CUES)
}

fn default_urgency_critical_cues() -> Vec<String> {
    strings(URGENCY_CRITICAL_CUES)
}

fn default_urgency_high_cues() -> Vec<String> {
    strings(URGENCY_HIGH_CUES)
}

fn default_urgency_low_cues() -> Vec<String> {
    strings(URGENCY_LOW_CUES)
}

fn default_positive_cues() -> Vec<String> {
    strings(POSITIVE_CUES)
}

fn default_frustrated_cues() -> Vec<String> {
    strings(FRUSTRATED_CUES)
}

fn default_healthcare_terms() -> Vec<String> {
    strings(HEALTHCARE_TERMS)
}

fn default_consortium_terms() -> Vec<String> {
    strings(CONSORTIUM_TERMS)
}

fn default_corporate_terms() -> Vec<String> {
    strings(CORPORATE_TERMS)
}

fn default_academic_terms() -> Vec<String> {
    strings(ACADEMIC_TERMS)
}

fn default_internal_domains() -> Vec<String> {
    strings(INTERNAL_DOMAINS)
}

fn default_deal_high_cues() -> Vec<String> {
    strings(DEAL_HIGH_CUES)
}

fn default_deal_medium_cues() -> Vec<String> {
    strings(DEAL_MEDIUM_CUES)
}

fn default_products() -> Vec<ProductEntry> {
    PRODUCT_CATALOG
        .iter()
        .map(|(name, needle)| ProductEntry {
            name: name.to_string(),
            needle: needle.to_string(),
        })
        .collect()
}

fn default_competitors() -> Vec<String> {
    strings(COMPETITORS)
}

fn default_decision_maker_titles() -> Vec<String> {
    strings(DECISION_MAKER_TITLES)
}
