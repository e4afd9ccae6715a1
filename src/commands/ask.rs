//! Ask the assistant a free-text question about your tasks.
//!
//! The command wires the assistant to its collaborators: the task list,
//! the stored settings, the chat log, and the daily quota. Quota
//! exhaustion is an expected outcome reported to the user, not an error.

use crate::db::chat_history::ChatHistory;
use crate::db::settings::Settings;
use crate::db::tasks::Tasks;
use crate::libs::assistant::Assistant;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::rate_limit::{DailyQuota, DAILY_LIMIT};
use crate::libs::task::TaskFilter;
use crate::{msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AskArgs {
    #[arg(required = true, help = "Question for the assistant")]
    question: Vec<String>,
}

pub async fn cmd(args: AskArgs) -> Result<()> {
    let question = args.question.join(" ");
    let question = question.trim();
    if question.is_empty() {
        msg_error!(Message::EmptyQuestion);
        return Ok(());
    }

    let mut history = ChatHistory::new()?;
    let asked_today = history.count_since(DailyQuota::window_start())?;
    let quota = DailyQuota::new().check(asked_today);
    if !quota.allowed {
        msg_warning!(Message::DailyLimitReached(DAILY_LIMIT));
        return Ok(());
    }

    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
    let settings = Settings::new()?.get_or_create()?;
    let assistant = Assistant::from_config(&Config::read()?);

    let answer = assistant.answer(question, &tasks, &settings).await;
    history.append(question, &answer)?;

    msg_print!(answer, true);
    msg_info!(Message::QuestionsRemaining(quota.remaining.saturating_sub(1)));

    Ok(())
}
