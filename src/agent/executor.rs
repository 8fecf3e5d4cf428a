//! Agent loop controller.
//!
//! Each iteration makes one reasoning call. The model either produces a
//! final answer, which ends the loop, or requests a tool invocation. The
//! requested tool is resolved through the registry, executed, and the
//! `(call, observation)` pair is appended to the running step list before
//! the next reasoning call. Steps are strictly sequential: a step's
//! observation must be complete before the next reasoning call is issued.

use crate::llm::client::{ChatMessage, LLMClient};
use crate::tools::registry::ToolRegistry;
use crate::types::{AgentFinish, AgentRun, AppError, IntermediateStep, Result, ToolCall};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// The fixed instruction template conditioning the reasoning model.
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Configuration for the agent loop.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum number of reasoning iterations before the run fails.
    pub max_iterations: usize,
    /// Deadline for a single tool execution.
    pub tool_timeout: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tool_timeout: Duration::from_secs(30),
        }
    }
}

/// Outcome of a single reasoning step, matched exhaustively by the loop.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The model produced a final answer; the loop ends.
    Finish(AgentFinish),
    /// The model requested one tool invocation.
    Invoke(ToolCall),
}

/// Drives the reasoning model and the tool registry to a terminal answer.
///
/// Built once at startup and shared across requests; holds no per-request
/// state.
pub struct AgentExecutor {
    client: Arc<dyn LLMClient>,
    registry: Arc<ToolRegistry>,
    config: ExecutorConfig,
}

impl AgentExecutor {
    pub fn new(
        client: Arc<dyn LLMClient>,
        registry: Arc<ToolRegistry>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            client,
            registry,
            config,
        }
    }

    /// Run the loop to completion for one query.
    ///
    /// Fails with [`AppError::ToolNotFound`] if the model names an
    /// unregistered tool, and with [`AppError::Exhausted`] if no terminal
    /// answer is produced within `max_iterations`.
    pub async fn run(&self, input: &str) -> Result<AgentRun> {
        let mut intermediate_steps: Vec<IntermediateStep> = Vec::new();

        for iteration in 0..self.config.max_iterations {
            match self.step(input, &intermediate_steps).await? {
                StepOutcome::Finish(finish) => {
                    tracing::info!(
                        iterations = iteration + 1,
                        steps = intermediate_steps.len(),
                        "agent finished"
                    );
                    return Ok(AgentRun {
                        output: finish.output,
                        intermediate_steps,
                    });
                }
                StepOutcome::Invoke(call) => {
                    tracing::info!(tool = %call.name, iteration, "agent requested tool");
                    let observation = timeout(
                        self.config.tool_timeout,
                        self.registry.execute(&call.name, call.arguments.clone()),
                    )
                    .await
                    .map_err(|_| AppError::Tool(format!("Tool '{}' timed out", call.name)))??;

                    intermediate_steps.push(IntermediateStep { call, observation });
                }
            }
        }

        Err(AppError::Exhausted(format!(
            "No terminal answer after {} iterations",
            self.config.max_iterations
        )))
    }

    /// One reasoning step: returns the model's decision for the current
    /// state. If the model requests several tool calls at once, only the
    /// first is resolved this iteration; the model re-plans with the new
    /// observation in context.
    async fn step(&self, input: &str, steps: &[IntermediateStep]) -> Result<StepOutcome> {
        let messages = self.render_messages(input, steps);
        let tools = self.registry.get_tool_definitions();

        let response = self.client.generate_with_tools(&messages, &tools).await?;

        match response.tool_calls.into_iter().next() {
            Some(call) => Ok(StepOutcome::Invoke(call)),
            None => Ok(StepOutcome::Finish(AgentFinish {
                output: response.content,
            })),
        }
    }

    /// Render the query state as a conversation: system prompt, user
    /// input, then each recorded step as an assistant tool call followed
    /// by its tool result.
    fn render_messages(&self, input: &str, steps: &[IntermediateStep]) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(input)];
        for step in steps {
            messages.push(ChatMessage::assistant("", vec![step.call.clone()]));
            messages.push(ChatMessage::tool_result(&step.call.id, &step.observation));
        }
        messages
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}
