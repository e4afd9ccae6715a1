//! The AI assistant: question answering over the task set.
//!
//! The deterministic pipeline (classify → select → render) is always
//! available and total over its input. When a generative provider is
//! configured, answers come from it instead, optionally enriched with
//! web-search context; any provider failure falls back to the
//! deterministic pipeline for the same question and task set, so the
//! caller always receives an answer.
//!
//! Providers are injected capabilities, not ambient state: the assistant
//! holds `Option<Generator>` / `Option<SearchEngine>` values owned by the
//! caller and branches on their presence explicitly.

pub mod intent;
pub mod query;
pub mod render;

pub use intent::{classify, Intent};

use crate::api::{Generator, OpenAi, SearchEngine, Tavily};
use crate::libs::config::Config;
use crate::libs::settings::AiSettings;
use crate::libs::task::Task;
use crate::msg_debug;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Questions that look like general knowledge requests trigger a web
// search, unless they also look like task introspection; searching for
// "what is overdue" would waste a provider call.
const SEARCH_HINTS: &[&str] = &["how to", "recipe", "ingredients", "find", "search", "look up", "what is"];
const TASK_HINTS: &[&str] = &["my task", "my ", "due", "priority", "overdue"];

/// AI-generated (or templated) suggestions for a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEnhancement {
    pub enhanced_description: String,
    pub suggested_subtasks: Vec<String>,
    pub estimated_duration: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnhancementResponse {
    enhanced_description: Option<String>,
    suggested_subtasks: Option<Vec<String>>,
    estimated_duration: Option<String>,
}

pub struct Assistant<G = OpenAi, S = Tavily> {
    generator: Option<G>,
    search: Option<S>,
}

impl Assistant<OpenAi, Tavily> {
    /// Builds the assistant from the application config; each provider is
    /// present only when its module is configured.
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: config.ai.as_ref().map(OpenAi::new),
            search: config.search.as_ref().map(Tavily::new),
        }
    }
}

impl<G: Generator, S: SearchEngine> Assistant<G, S> {
    pub fn new(generator: Option<G>, search: Option<S>) -> Self {
        Self { generator, search }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Answers a free-text question about the given tasks.
    ///
    /// Never fails from the caller's point of view: provider errors are
    /// logged and downgraded to the deterministic pipeline's output. One
    /// provider attempt per question, no retries.
    pub async fn answer(&self, question: &str, tasks: &[Task], settings: &AiSettings) -> String {
        let today = Local::now().date_naive();
        let generator = match &self.generator {
            Some(generator) => generator,
            None => return fallback_answer(question, tasks, today),
        };

        let system_prompt = system_prompt(settings, tasks);
        let mut user_prompt = question.to_string();

        if needs_web_search(question) {
            if let Some(search) = &self.search {
                match search.search(question).await {
                    Ok(context) if !context.is_empty() => {
                        user_prompt.push_str("\n\nWeb Search Results:\n");
                        user_prompt.push_str(&context);
                    }
                    Ok(_) => {}
                    Err(err) => msg_debug!(format!("Web search failed: {}", err)),
                }
            }
        }

        match generator.complete(&system_prompt, &user_prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                msg_debug!(format!("Generation failed, falling back to rules: {}", err));
                fallback_answer(question, tasks, today)
            }
        }
    }

    /// Suggests an enhanced description, subtasks and a duration estimate
    /// for one task. Provider failures and malformed payloads yield the
    /// fixed template, never an error.
    pub async fn enhance(&self, task: &Task) -> TaskEnhancement {
        let generator = match &self.generator {
            Some(generator) => generator,
            None => return fallback_enhancement(task),
        };

        let payload = match generator.complete_json(&enhancement_prompt(task)).await {
            Ok(payload) => payload,
            Err(err) => {
                msg_debug!(format!("Task enhancement failed: {}", err));
                return fallback_enhancement(task);
            }
        };

        match serde_json::from_str::<EnhancementResponse>(&payload) {
            Ok(response) => TaskEnhancement {
                enhanced_description: response
                    .enhanced_description
                    .unwrap_or_else(|| task.description.clone().unwrap_or_default()),
                suggested_subtasks: response.suggested_subtasks.unwrap_or_default(),
                estimated_duration: response.estimated_duration.unwrap_or_else(|| "Unknown".to_string()),
            },
            Err(err) => {
                msg_debug!(format!("Task enhancement returned malformed JSON: {}", err));
                fallback_enhancement(task)
            }
        }
    }
}

/// The deterministic pipeline: classify → select → render.
///
/// Calling this twice with the same input yields identical output; the
/// AI layer relies on that when it falls back.
pub fn fallback_answer(question: &str, tasks: &[Task], today: NaiveDate) -> String {
    let intent = intent::classify(question);
    let selection = query::select(intent, tasks, today);
    render::render(intent, &selection, tasks)
}

/// True when the question should be enriched with web-search context.
pub fn needs_web_search(question: &str) -> bool {
    let question = question.to_lowercase();
    SEARCH_HINTS.iter().any(|hint| question.contains(hint)) && !TASK_HINTS.iter().any(|hint| question.contains(hint))
}

fn system_prompt(settings: &AiSettings, tasks: &[Task]) -> String {
    let listing = tasks.iter().map(task_line).collect::<Vec<_>>().join("\n");

    format!(
        "You are {}, a helpful AI task management assistant. {}\n\n\
        Your role is to help users manage their tasks, provide information, and assist with task-related queries.\n\n\
        The user currently has the following tasks:\n{}\n\n\
        You can:\n\
        1. Answer questions about the user's tasks\n\
        2. Provide helpful information related to their tasks (recipes, how-to guides, tips, etc.)\n\
        3. Help them plan and organize their tasks\n\
        4. Search the web when needed to provide relevant information\n\n\
        Always be context-aware and relate your responses to the user's actual tasks when possible.\n",
        settings.assistant_name,
        settings.tone.instruction(),
        listing
    )
}

fn task_line(task: &Task) -> String {
    let due = task
        .due_date
        .map(|due| format!(", due: {}", due.format(DATE_FORMAT)))
        .unwrap_or_default();
    format!(
        "- {} ({}, {}, priority: {}{})",
        task.title,
        task.bucket_label(),
        task.status,
        task.priority,
        due
    )
}

fn enhancement_prompt(task: &Task) -> String {
    format!(
        "You are helping a user enhance their task. The task is:\n\
        Title: {}\n\
        Description: {}\n\
        Priority: {}\n\
        Due Date: {}\n\n\
        Provide:\n\
        1. An enhanced, more detailed description with actionable steps\n\
        2. 3-5 suggested subtasks to break down this task\n\
        3. An estimated duration for completing this task\n\n\
        If the task involves something like cooking, shopping, research, etc., feel free to search for relevant information or provide helpful suggestions.\n\n\
        Respond in JSON format:\n\
        {{\n\
          \"enhancedDescription\": \"...\",\n\
          \"suggestedSubtasks\": [\"...\", \"...\"],\n\
          \"estimatedDuration\": \"...\"\n\
        }}",
        task.title,
        task.description.as_deref().unwrap_or("No description"),
        task.priority,
        task.due_date
            .map(|due| due.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "No due date".to_string()),
    )
}

/// Fixed enhancement template used when no provider is available.
pub fn fallback_enhancement(task: &Task) -> TaskEnhancement {
    TaskEnhancement {
        enhanced_description: match &task.description {
            Some(description) => format!(
                "{}\n\nSuggested steps:\n1. Break down into smaller tasks\n2. Identify required resources\n3. Set milestones\n4. Review progress regularly",
                description
            ),
            None => "Consider adding more details about:\n- Specific goals\n- Resources needed\n- Success criteria\n- Potential obstacles".to_string(),
        },
        suggested_subtasks: vec![
            "Research and planning".to_string(),
            "Implementation".to_string(),
            "Review and testing".to_string(),
            "Finalization".to_string(),
        ],
        estimated_duration: "Based on the task complexity, this might take 2-4 hours.".to_string(),
    }
}
