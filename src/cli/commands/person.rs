//! Person command.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::person::Person;

#[derive(Debug, Serialize)]
struct PersonOutput<'a> {
    #[serde(flatten)]
    person: &'a Person,
    adult: bool,
}

/// Build a person, optionally replace its age, and report on it.
///
/// The constructor keeps whatever age it is given; only `set_age` validates.
pub fn run(
    out: &mut impl Write,
    name: String,
    age: i32,
    email: String,
    set_age: Option<i32>,
    json: bool,
) -> Result<()> {
    let mut person = Person::new(name, age, email);
    if let Some(new_age) = set_age {
        person.set_age(new_age)?;
    }

    if json {
        let output = PersonOutput {
            person: &person,
            adult: person.is_adult(),
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    } else {
        writeln!(out, "{person}")?;
        writeln!(out, "Is adult: {}", person.is_adult())?;
    }
    Ok(())
}
