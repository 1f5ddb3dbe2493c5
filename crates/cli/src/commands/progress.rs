//! Progress output from crew events.

use jobcrew_core::event::{DomainEvent, EventBus};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Render an event as a progress line. Per-response token counts are skipped.
pub(crate) fn describe(event: &DomainEvent) -> Option<String> {
    match event {
        DomainEvent::TaskStarted {
            task,
            agent_role,
            context_tasks,
            ..
        } => Some(if *context_tasks == 0 {
            format!("▶ {task}: {agent_role}")
        } else {
            format!("▶ {task}: {agent_role} (using {context_tasks} earlier result(s))")
        }),
        DomainEvent::ToolExecuted {
            tool_name,
            success,
            duration_ms,
            ..
        } => {
            let status = if *success { "ok" } else { "failed" };
            Some(format!("  🔧 {tool_name} {status} in {duration_ms}ms"))
        }
        DomainEvent::TaskCompleted {
            task, iterations, ..
        } => Some(format!("✅ {task} finished after {iterations} LLM call(s)")),
        DomainEvent::ErrorOccurred {
            context,
            error_message,
            ..
        } => Some(format!("❌ {context}: {error_message}")),
        DomainEvent::ResponseGenerated { .. } => None,
    }
}

/// Feed every progress line to `sink` until the bus is dropped.
pub(crate) fn spawn(events: &EventBus, sink: fn(&str)) -> JoinHandle<()> {
    let mut rx = events.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(line) = describe(&event) {
                        sink(&line);
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jobcrew_core::TaskId;
    use std::sync::{Arc, Mutex};

    static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

    #[test]
    fn started_task_mentions_its_context() {
        let line = describe(&DomainEvent::TaskStarted {
            task: TaskId::OpportunityCuration,
            agent_role: "Job Opportunity Curator".into(),
            context_tasks: 2,
            timestamp: Utc::now(),
        })
        .unwrap();
        assert_eq!(
            line,
            "▶ opportunity_curation: Job Opportunity Curator (using 2 earlier result(s))"
        );
    }

    #[test]
    fn token_usage_is_not_printed() {
        let event = DomainEvent::ResponseGenerated {
            task: TaskId::MarketResearch,
            model: "gpt-4o-mini".into(),
            tokens_used: 42,
            timestamp: Utc::now(),
        };
        assert!(describe(&event).is_none());
    }

    #[tokio::test]
    async fn printer_drains_events_then_stops_when_bus_drops() {
        let bus = Arc::new(EventBus::default());
        let handle = spawn(&bus, |line| LINES.lock().unwrap().push(line.to_string()));

        bus.publish(DomainEvent::ToolExecuted {
            tool_name: "web_search".into(),
            success: false,
            duration_ms: 12,
            timestamp: Utc::now(),
        });
        bus.publish(DomainEvent::TaskCompleted {
            task: TaskId::MarketResearch,
            iterations: 2,
            output_chars: 100,
            timestamp: Utc::now(),
        });
        drop(bus);

        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("printer did not stop")
            .unwrap();
        let lines = LINES.lock().unwrap();
        assert_eq!(
            *lines,
            vec![
                "  🔧 web_search failed in 12ms".to_string(),
                "✅ market_research finished after 2 LLM call(s)".to_string(),
            ]
        );
    }
}
