//! Integer calculator.
//!
//! The four operations are pure functions of their operands. The stored
//! result is only ever changed through [`Calculator::set_result`].

use std::io::Write;

use crate::error::{Error, Result};

/// A simple calculator over `i32`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    result: i32,
}

impl Calculator {
    /// Create a calculator with a stored result of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given stored result.
    pub fn with_result(result: i32) -> Self {
        Calculator { result }
    }

    /// Sum of `a` and `b`, wrapping on overflow.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        tracing::debug!("[calculator] add {a} {b}");
        a.wrapping_add(b)
    }

    /// Difference `a - b`, wrapping on overflow.
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        tracing::debug!("[calculator] subtract {a} {b}");
        a.wrapping_sub(b)
    }

    /// Product of `a` and `b`, wrapping on overflow.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        tracing::debug!("[calculator] multiply {a} {b}");
        a.wrapping_mul(b)
    }

    /// Quotient of `a / b`, truncated toward zero.
    ///
    /// Returns [`Error::InvalidArgument`] when `b` is zero.
    /// `i32::MIN / -1` wraps to `i32::MIN`.
    pub fn divide(&self, a: i32, b: i32) -> Result<i32> {
        tracing::debug!("[calculator] divide {a} {b}");
        if b == 0 {
            tracing::warn!("[calculator] rejected division of {a} by zero");
            return Err(Error::invalid_argument("Division by zero"));
        }
        Ok(a.wrapping_div(b))
    }

    /// The last explicitly stored value.
    pub fn result(&self) -> i32 {
        self.result
    }

    pub fn set_result(&mut self, result: i32) {
        self.result = result;
    }
}

/// Write the calculator walkthrough: construction, one addition, one subtraction.
pub fn demo(out: &mut impl Write) -> Result<()> {
    let calc = Calculator::new();
    writeln!(out, "Calculator created")?;

    let sum = calc.add(5, 3);
    writeln!(out, "5 + 3 = {sum}")?;

    let diff = calc.subtract(10, 4);
    writeln!(out, "10 - 4 = {diff}")?;

    Ok(())
}
