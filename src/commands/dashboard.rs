//! Dashboard: overall summary plus the aggregated series of one period type.
//!
//! For weekly and monthly periods an income versus costs breakdown is shown
//! as well. The period defaults to the configured one.

use crate::{
    db::records::Records,
    libs::{
        aggregate::{aggregate, PeriodType},
        config::Config,
        messages::Message,
        summary::summarize,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Period to group by; defaults to the configured period
    #[arg(short, long, value_enum)]
    period: Option<PeriodType>,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let config = Config::read()?;
    let period = args.period.unwrap_or(config.default_period);
    let records = Records::new()?.load()?;

    msg_print!(Message::DashboardHeader, true);

    let Some(summary) = summarize(&records) else {
        msg_info!(Message::NoRecordsYet);
        return Ok(());
    };
    msg_print!(Message::OverallSummaryHeader);
    View::summary(&summary, &config.currency);

    let aggregates = aggregate(&records, period);
    msg_print!(Message::PeriodHeader(period.to_string()), true);
    View::aggregates(&aggregates, &config.currency);

    if period != PeriodType::Daily {
        msg_print!(Message::IncomeCostHeader(period.to_string()), true);
        View::income_costs(&aggregates, &config.currency);
    }
    Ok(())
}
