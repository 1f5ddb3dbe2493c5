//! LLM-backed crew executor.
//!
//! Each task runs as its own conversation: the agent persona as the system
//! message, the rendered task as the user message, then model replies and
//! tool results until the model answers without calling a tool.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jobcrew_core::event::{DomainEvent, EventBus};
use jobcrew_core::message::{Conversation, Message};
use jobcrew_core::provider::{Provider, ProviderRequest};
use jobcrew_core::tool::{ToolCall, ToolRegistry};
use jobcrew_core::{Crew, ExecutionError, Executor, TaskId, TaskOutput, TaskSpec, WorkflowResult};
use tracing::{debug, info, warn};

/// Runs a crew's tasks in order against a single LLM provider.
pub struct CrewExecutor {
    /// The LLM provider to use
    provider: Arc<dyn Provider>,

    /// The model to use
    model: String,

    temperature: f32,

    /// Max tokens per response
    max_tokens: Option<u32>,

    /// Tools available to agents that name them
    tools: Arc<ToolRegistry>,

    /// Maximum LLM round-trips per task
    max_iterations: u32,

    event_bus: Arc<EventBus>,
}

impl CrewExecutor {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
            tools,
            max_iterations: 10,
            event_bus: Arc::new(EventBus::default()),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Set the maximum number of LLM round-trips per task.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Publish progress events on a shared bus.
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = event_bus;
        self
    }

    /// Render the user prompt for a task, appending the outputs it depends on.
    pub fn task_prompt(task: &TaskSpec, context: &[(TaskId, &str)]) -> String {
        let mut prompt = format!(
            "{}\n\nThis is the expected criteria for your final answer: {}\n\
             You MUST return the actual complete content as the final answer, not a summary.",
            task.description, task.expected_output
        );

        if !context.is_empty() {
            prompt.push_str("\n\nContext from previous tasks:");
            for (id, text) in context {
                prompt.push_str(&format!("\n\n## {id}\n{text}"));
            }
        }
        prompt
    }

    /// Collect dependency outputs in declaration order.
    fn gather_context<'a>(
        task: &TaskSpec,
        outputs: &'a HashMap<TaskId, String>,
    ) -> Result<Vec<(TaskId, &'a str)>, ExecutionError> {
        task.context
            .iter()
            .map(|dep| {
                outputs
                    .get(dep)
                    .map(|text| (*dep, text.as_str()))
                    .ok_or(ExecutionError::MissingContext {
                        task: task.id,
                        missing: *dep,
                    })
            })
            .collect()
    }

    async fn run_task(&self, task: &TaskSpec, prompt: &str) -> Result<String, ExecutionError> {
        let agent = &task.agent;
        let mut conversation = Conversation::for_task(task.id, &agent.system_prompt(), prompt);
        let tool_definitions = self.tools.definitions_for(&agent.tools);

        for iteration in 1..=self.max_iterations {
            debug!(task = %task.id, iteration, "Crew task iteration");

            let request = ProviderRequest {
                model: self.model.clone(),
                messages: conversation.messages.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                tools: tool_definitions.clone(),
            };

            let response = match self.provider.complete(request).await {
                Ok(response) => response,
                Err(source) => {
                    self.event_bus.publish(DomainEvent::ErrorOccurred {
                        context: task.id.to_string(),
                        error_message: source.to_string(),
                        timestamp: Utc::now(),
                    });
                    return Err(ExecutionError::Provider {
                        task: task.id,
                        source,
                    });
                }
            };

            if let Some(usage) = &response.usage {
                self.event_bus.publish(DomainEvent::ResponseGenerated {
                    task: task.id,
                    model: response.model.clone(),
                    tokens_used: usage.total_tokens,
                    timestamp: Utc::now(),
                });
            }

            if response.message.tool_calls.is_empty() {
                let text = response.message.content.clone();
                conversation.push(response.message);

                self.event_bus.publish(DomainEvent::TaskCompleted {
                    task: task.id,
                    iterations: iteration,
                    output_chars: text.len(),
                    timestamp: Utc::now(),
                });
                return Ok(text);
            }

            let tool_calls = response.message.tool_calls.clone();
            conversation.push(response.message);

            for tc in &tool_calls {
                let call = ToolCall {
                    id: tc.id.clone(),
                    name: tc.name.clone(),
                    arguments: serde_json::from_str(&tc.arguments).unwrap_or_default(),
                };

                let start = std::time::Instant::now();
                let result = self.tools.execute_allowed(&call, &agent.tools).await;
                let duration_ms = start.elapsed().as_millis() as u64;

                let (success, content) = match result {
                    Ok(tool_result) => (tool_result.success, tool_result.output),
                    Err(e) => {
                        warn!(task = %task.id, tool = %tc.name, error = %e, "Tool execution failed");
                        (false, format!("Error: {e}"))
                    }
                };

                self.event_bus.publish(DomainEvent::ToolExecuted {
                    tool_name: tc.name.clone(),
                    success,
                    duration_ms,
                    timestamp: Utc::now(),
                });
                conversation.push(Message::tool_result(&tc.id, content));
            }
        }

        warn!(task = %task.id, limit = self.max_iterations, "Iteration limit reached");
        Err(ExecutionError::IterationLimit {
            task: task.id,
            limit: self.max_iterations,
        })
    }
}

#[async_trait]
impl Executor for CrewExecutor {
    fn name(&self) -> &str {
        "llm"
    }

    async fn execute(&self, crew: &Crew) -> Result<WorkflowResult, ExecutionError> {
        if crew.tasks.is_empty() {
            return Err(ExecutionError::EmptyCrew);
        }

        let mut outputs: HashMap<TaskId, String> = HashMap::new();
        let mut completed = Vec::with_capacity(crew.tasks.len());

        for task in &crew.tasks {
            let context = Self::gather_context(task, &outputs)?;
            let prompt = Self::task_prompt(task, &context);

            info!(
                task = %task.id,
                agent = %task.agent.role,
                context_tasks = context.len(),
                "Starting task"
            );
            self.event_bus.publish(DomainEvent::TaskStarted {
                task: task.id,
                agent_role: task.agent.role.clone(),
                context_tasks: context.len(),
                timestamp: Utc::now(),
            });

            let text = self.run_task(task, &prompt).await?;
            info!(task = %task.id, chars = text.len(), "Task finished");

            outputs.insert(task.id, text.clone());
            completed.push(TaskOutput {
                task: task.id,
                agent_role: task.agent.role.clone(),
                text,
            });
        }

        WorkflowResult::from_outputs(completed).ok_or(ExecutionError::EmptyCrew)
    }
}
