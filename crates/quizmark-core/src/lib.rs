//! quizmark-core — Quiz definition model, validation, and scoring.
//!
//! This crate defines the data model for multi-question assessments plus
//! the two pure engines the quizmark system builds on: the validator that
//! gates what may become a stored quiz definition, and the scorer that
//! turns a submission into a total score, sub-scores, and a result.

pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scorer;
pub mod validator;
