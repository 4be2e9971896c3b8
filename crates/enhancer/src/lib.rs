#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod llm;

pub use config::EnhancerConfig;
pub use llm::{LlmEnhancer, parse_suggestions};
