//! Calc command.

use std::io::Write;

use serde::Serialize;

use crate::calculator::Calculator;
use crate::cli::args::Operation;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct CalcOutput {
    operation: &'static str,
    a: i32,
    b: i32,
    result: i32,
    stored_result: i32,
}

/// Apply `op` to `a` and `b` with a calculator holding `initial_result`.
pub fn run(
    out: &mut impl Write,
    op: Operation,
    a: i32,
    b: i32,
    initial_result: i32,
    json: bool,
) -> Result<()> {
    let calc = Calculator::with_result(initial_result);
    let result = match op {
        Operation::Add => calc.add(a, b),
        Operation::Subtract => calc.subtract(a, b),
        Operation::Multiply => calc.multiply(a, b),
        Operation::Divide => calc.divide(a, b)?,
    };

    if json {
        let output = CalcOutput {
            operation: op.as_str(),
            a,
            b,
            result,
            stored_result: calc.result(),
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    } else {
        writeln!(out, "{result}")?;
    }
    Ok(())
}
