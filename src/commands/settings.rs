use crate::db::settings::Settings;
use crate::libs::messages::Message;
use crate::libs::settings::Tone;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[arg(long, help = "Assistant display name")]
    name: Option<String>,

    #[arg(long, help = "Response tone: professional, friendly or casual")]
    tone: Option<String>,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut store = Settings::new()?;
    let mut settings = store.get_or_create()?;

    // Without flags the command just reports the current settings.
    if args.name.is_none() && args.tone.is_none() {
        msg_print!(Message::SettingsHeader, true);
        println!("Name: {}", settings.assistant_name);
        println!("Tone: {}", settings.tone);
        return Ok(());
    }

    if let Some(name) = args.name {
        settings.assistant_name = name;
    }
    if let Some(tone) = args.tone {
        match tone.parse::<Tone>() {
            Ok(tone) => settings.tone = tone,
            Err(_) => {
                msg_error!(Message::InvalidTone(tone));
                return Ok(());
            }
        }
    }

    store.save(&settings)?;
    msg_success!(Message::SettingsSaved);
    Ok(())
}
