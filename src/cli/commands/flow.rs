//! Flow command.

use std::io::Write;

use crate::cli::args::FlowAction;
use crate::control_flow;
use crate::error::Result;

pub fn run(out: &mut impl Write, action: FlowAction) -> Result<()> {
    match action {
        FlowAction::Sign { n } => control_flow::classify_sign(out, n)?,
        FlowAction::Count { limit } => control_flow::count_up(out, limit)?,
        FlowAction::Range { start, end } => control_flow::count_range(out, start, end)?,
        FlowAction::Day { day } => control_flow::name_day(out, day)?,
    }
    Ok(())
}
