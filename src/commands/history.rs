use crate::db::chat_history::ChatHistory;
use crate::libs::messages::Message;
use crate::libs::rate_limit::DailyQuota;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(short, long, default_value_t = 10, help = "Number of recent entries to show")]
    limit: usize,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let mut history = ChatHistory::new()?;

    let records = history.recent(args.limit)?;
    if records.is_empty() {
        msg_info!(Message::HistoryEmpty);
    } else {
        msg_print!(Message::HistoryHeader, true);
        View::history(&records)?;
    }

    let quota = DailyQuota::new().check(history.count_since(DailyQuota::window_start())?);
    msg_info!(Message::QuestionsRemaining(quota.remaining));

    Ok(())
}
