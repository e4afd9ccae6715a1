use crate::db::tasks::Tasks;
use crate::libs::assistant::Assistant;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EnhanceArgs {
    #[arg(required = true, help = "Task ID to enhance")]
    id: i64,
}

pub async fn cmd(args: EnhanceArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.get_by_id(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    let assistant = Assistant::from_config(&Config::read()?);
    if !assistant.has_generator() {
        msg_info!(Message::AssistantNotConfigured);
    }

    msg_print!(Message::EnhancingTask(task.title.clone()));
    let enhancement = assistant.enhance(&task).await;
    View::enhancement(&task, &enhancement)
}
