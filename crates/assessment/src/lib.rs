//! Agent exposure assessment core
//!
//! [`AssessmentState`] walks a session through the five questions and
//! [`risk`] turns a complete profile into a score, tier and control list.

pub mod questions;
pub mod risk;
pub mod state;

pub use questions::{catalog, question, AnswerOption, Question};
pub use risk::{compute_result, Contribution};
pub use state::AssessmentState;
