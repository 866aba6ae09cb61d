//! Demo command.

use std::io::Write;

use crate::cli::args::DemoTarget;
use crate::error::Result;
use crate::{calculator, control_flow, person};

pub fn run(out: &mut impl Write, target: DemoTarget) -> Result<()> {
    match target {
        DemoTarget::Calculator => calculator::demo(out)?,
        DemoTarget::Person => person::demo(out)?,
        DemoTarget::ControlFlow => control_flow::demo(out)?,
        DemoTarget::All => {
            calculator::demo(out)?;
            person::demo(out)?;
            control_flow::demo(out)?;
        }
    }
    Ok(())
}
