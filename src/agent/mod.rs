//! The tool-calling agent loop.
//!
//! [`executor::AgentExecutor`] drives the model step by step: each step
//! either finishes with an answer or requests one tool invocation, whose
//! observation is fed back into the next step.

/// The iterate-until-finished loop controller.
pub mod executor;

pub use executor::{AgentExecutor, ExecutorConfig, StepOutcome};
