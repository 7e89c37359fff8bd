//! Deterministic, explainable email triage.
//!
//! Classifies an in-memory [`Email`] by business category and intent using
//! keyword heuristics, derives secondary context (customer type, urgency,
//! sentiment, products, deal value, decision-maker), and maps the result to
//! a structured next-action recommendation plus canned follow-up replies.
//! An optional HTTP collaborator can override the classifier; every remote
//! failure degrades silently to the local path.
//!
//! This is a heuristic scorer, not a model: every output is re-derivable
//! from the input and the configured [`Lexicon`].
//!
//! ```no_run
//! use inbox_triage::TriageEngine;
//! # fn demo(email: inbox_triage::Email) {
//! let engine = TriageEngine::new();
//! let analysis = engine.analyze(&email);
//! let recommendation = engine.recommend(&email, &analysis);
//! let reply = engine.respond("why?", &email, &analysis, &recommendation);
//! # let _ = reply;
//! # }
//! ```

pub mod actions;
pub mod classifier;
pub mod context;
pub mod engine;
pub mod insights;
pub mod lexicon;
pub mod recommend;
pub mod remote;
pub mod responder;
pub mod types;

pub use engine::{apply_remote, TriageEngine};
pub use lexicon::Lexicon;
pub use remote::{RemoteAnalysis, RemoteClassifier, RemoteError};
pub use types::{
    AgentRecommendation, Category, CustomerType, DealValue, Email, EmailAnalysis, Folder, Intent,
    Sender, Sentiment, Urgency,
};
