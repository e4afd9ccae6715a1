pub mod ask;
pub mod bucket;
pub mod enhance;
pub mod history;
pub mod init;
pub mod settings;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create and manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Create and manage buckets")]
    Bucket(bucket::BucketArgs),
    #[command(about = "Ask the assistant a question about your tasks", arg_required_else_help = true)]
    Ask(ask::AskArgs),
    #[command(about = "Get AI suggestions for a task", arg_required_else_help = true)]
    Enhance(enhance::EnhanceArgs),
    #[command(about = "Show chat history and remaining questions")]
    History(history::HistoryArgs),
    #[command(about = "View or change the assistant settings")]
    Settings(settings::SettingsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Bucket(args) => bucket::cmd(args),
            Commands::Ask(args) => ask::cmd(args).await,
            Commands::Enhance(args) => enhance::cmd(args).await,
            Commands::History(args) => history::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
        }
    }
}
