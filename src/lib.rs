//! LifeStyleCheck: a guided lifestyle questionnaire over a hosted LLM, plus
//! the relay proxy that keeps the provider key server-side.

pub mod cli;
pub mod config;
pub mod error;
pub mod interview;
pub mod llm;
pub mod relay;
