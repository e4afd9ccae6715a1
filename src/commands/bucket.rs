use crate::db::buckets::{Bucket, Buckets};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct BucketArgs {
    #[arg(help = "Name for a new bucket")]
    name: Option<String>,

    #[arg(short, long, help = "Bucket color")]
    color: Option<String>,

    #[arg(short, long, help = "Show all buckets")]
    show: bool,

    #[arg(long, value_name = "ID", help = "Delete a bucket")]
    delete: Option<i64>,
}

pub fn cmd(args: BucketArgs) -> Result<()> {
    let mut buckets = Buckets::new()?;

    if args.show {
        return show(&mut buckets);
    }

    if let Some(id) = args.delete {
        return match buckets.get_by_id(id)? {
            Some(bucket) => {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteBucket(bucket.name.clone()).to_string())
                    .interact()?;
                if confirmed {
                    let detached = buckets.delete(id)?;
                    if detached > 0 {
                        msg_info!(Message::BucketTasksDetached(detached));
                    }
                    msg_success!(Message::BucketDeleted(bucket.name));
                }
                Ok(())
            }
            None => {
                msg_error!(Message::BucketNotFound(id.to_string()));
                Ok(())
            }
        };
    }

    if let Some(name) = args.name {
        let bucket = Bucket::new(name.clone(), args.color.clone());
        buckets.create(&bucket)?;
        msg_success!(Message::BucketCreated(name));
        return Ok(());
    }

    show(&mut buckets)
}

fn show(buckets: &mut Buckets) -> Result<()> {
    let all = buckets.list()?;
    if all.is_empty() {
        msg_info!(Message::BucketsNotFound);
        return Ok(());
    }
    msg_print!(Message::BucketsHeader, true);
    View::buckets(&all)
}
