//! The composed triage engine.
//!
//! Owns the lexicon and the one compiled regex, and wires the pipeline:
//! classify, extract context, generate insights, recommend, respond. The
//! remote path overrides the classifier's verdict when the external
//! service answers, and falls back to the local result on any failure.

use regex::Regex;

use crate::classifier::classify;
use crate::context::extract_context;
use crate::insights::generate_insights;
use crate::lexicon::Lexicon;
use crate::recommend;
use crate::remote::{RemoteAnalysis, RemoteClassifier};
use crate::responder;
use crate::types::{AgentRecommendation, Category, Email, EmailAnalysis, Intent};

/// One configured engine instance. Cheap to share by reference; every
/// operation is a pure function of its arguments.
pub struct TriageEngine {
    lexicon: Lexicon,
    title_re: Regex,
}

impl TriageEngine {
    /// Engine with the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::default())
    }

    /// Engine with a caller-supplied lexicon, compiled once.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        // Titles are regex-escaped, so the alternation always compiles.
        let title_re = Regex::new(&lexicon.decision_maker_pattern()).unwrap();
        Self { lexicon, title_re }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Full local analysis of one email.
    pub fn analyze(&self, email: &Email) -> EmailAnalysis {
        let classification = classify(email, &self.lexicon);
        let ctx = extract_context(email, &self.lexicon, &self.title_re);
        let actionable_insights = generate_insights(email, &ctx, &self.lexicon);

        EmailAnalysis {
            category: classification.category,
            intent: classification.intent,
            confidence: classification.overall_confidence(),
            customer_type: ctx.customer_type,
            urgency: ctx.urgency,
            products: ctx.products,
            key_requirements: ctx.key_requirements,
            estimated_deal_value: ctx.estimated_deal_value,
            sentiment: ctx.sentiment,
            decision_maker: ctx.decision_maker,
            actionable_insights,
        }
    }

    /// Analyze with a remote override. The remote call gets one attempt;
    /// any failure is logged and the local analysis is returned unchanged.
    pub async fn analyze_with_remote(
        &self,
        email: &Email,
        remote: &RemoteClassifier,
    ) -> EmailAnalysis {
        let mut analysis = self.analyze(email);
        match remote.classify(email).await {
            Ok(result) => apply_remote(&mut analysis, &result),
            Err(e) => {
                log::warn!(
                    "remote classification failed for email {}, using local heuristics: {}",
                    email.id,
                    e
                );
            }
        }
        analysis
    }

    /// Recommendation for an analyzed email.
    pub fn recommend(&self, email: &Email, analysis: &EmailAnalysis) -> AgentRecommendation {
        recommend::recommend(email, analysis)
    }

    /// Reply to a free-text follow-up about an analyzed email.
    pub fn respond(
        &self,
        input: &str,
        email: &Email,
        analysis: &EmailAnalysis,
        recommendation: &AgentRecommendation,
    ) -> String {
        responder::respond(input, email, analysis, recommendation)
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay a remote classification onto a local analysis.
///
/// Only the classifier's outputs are overridable: category, intent,
/// confidence. Values that do not parse into the known taxonomy are
/// ignored field by field. An intent override realigns the category to
/// its scope; a category-only override that contradicts the local
/// intent's scope is dropped to keep the pair consistent.
pub fn apply_remote(analysis: &mut EmailAnalysis, remote: &RemoteAnalysis) {
    let remote_intent = remote.intent.as_deref().and_then(Intent::parse);
    let remote_category = remote.category.as_deref().and_then(Category::parse);

    if let Some(intent) = remote_intent {
        analysis.intent = intent;
        analysis.category = intent.category();
    } else if let Some(category) = remote_category {
        if category == analysis.intent.category() {
            analysis.category = category;
        } else {
            log::debug!(
                "ignoring remote category {} that contradicts local intent {}",
                category,
                analysis.intent
            );
        }
    }

    if let Some(confidence) = remote.confidence {
        if confidence.is_finite() {
            analysis.confidence = confidence.round().clamp(0.0, 100.0) as u8;
        }
    }
}
