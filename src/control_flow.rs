//! Control-flow demonstrations.
//!
//! Every function writes its lines to the given sink and accepts any integer.
//! Out-of-range inputs fall through to a default message instead of failing,
//! so the only possible error is a failed write.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Map 1..=7 to Monday..=Sunday.
    pub fn from_number(day: i32) -> Option<Self> {
        match day {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

pub const INVALID_DAY: &str = "Invalid day";

/// Weekday name for `day`, or [`INVALID_DAY`].
pub fn day_name(day: i32) -> &'static str {
    Weekday::from_number(day).map_or(INVALID_DAY, Weekday::name)
}

pub fn classify_sign(out: &mut impl Write, n: i32) -> io::Result<()> {
    let message = match n.signum() {
        1 => "Number is positive",
        -1 => "Number is negative",
        _ => "Number is zero",
    };
    writeln!(out, "{message}")
}

/// Header line, then `Count: i` for each `i` in `1..=limit`.
pub fn count_up(out: &mut impl Write, limit: i32) -> io::Result<()> {
    writeln!(out, "Counting from 1 to {limit}:")?;
    for i in 1..=limit {
        writeln!(out, "Count: {i}")?;
    }
    Ok(())
}

/// Header line, then `Current: i` while `i <= end`, starting at `start`.
pub fn count_range(out: &mut impl Write, start: i32, end: i32) -> io::Result<()> {
    writeln!(out, "While loop from {start} to {end}:")?;
    let mut current = start;
    while current <= end {
        writeln!(out, "Current: {current}")?;
        // Stop at i32::MAX instead of overflowing
        match current.checked_add(1) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(())
}

pub fn name_day(out: &mut impl Write, day: i32) -> io::Result<()> {
    writeln!(out, "Day {day} is {}", day_name(day))
}

/// Run every demonstration in order with the sample inputs.
pub fn demo(out: &mut impl Write) -> io::Result<()> {
    classify_sign(out, 5)?;
    classify_sign(out, -3)?;
    classify_sign(out, 0)?;

    count_up(out, 5)?;

    count_range(out, 1, 3)?;

    name_day(out, 3)?;
    name_day(out, 8)?;
    Ok(())
}
