use crate::{
    db::records::Records,
    libs::{config::Config, ledger::sort_newest_first, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only the N most recent days
    #[arg(short, long)]
    limit: Option<usize>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let mut records = Records::new()?.load()?;

    if records.is_empty() {
        msg_info!(Message::NoRecordsYet);
        return Ok(());
    }

    sort_newest_first(&mut records);
    let total = records.len();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    msg_print!(Message::RecordsHeader, true);
    View::records(&records, &config.currency, &config.date_format);
    msg_print!(Message::RecordsCount(total));
    Ok(())
}
