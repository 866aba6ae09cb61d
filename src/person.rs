use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};

/// Age from which a person counts as an adult.
pub const ADULT_AGE: i32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: i32,
    email: String,
}

impl Person {
    /// Create a person record.
    ///
    /// The age is stored as given; only [`Person::set_age`] rejects negative values.
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Replace the age, failing with [`Error::InvalidArgument`] if it is negative.
    pub fn set_age(&mut self, age: i32) -> Result<()> {
        if age < 0 {
            tracing::warn!("[person] rejected negative age {age} for {}", self.name);
            return Err(Error::invalid_argument("Age cannot be negative"));
        }
        self.age = age;
        Ok(())
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{name='{}', age={}, email='{}'}}",
            self.name, self.age, self.email
        )
    }
}

/// Write the sample record followed by its adult check.
pub fn demo(out: &mut impl Write) -> Result<()> {
    let person = Person::new("John Doe", 25, "john@example.com");
    writeln!(out, "{person}")?;
    writeln!(out, "Is adult: {}", person.is_adult())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_stores_fields_verbatim() {
        let person = Person::new("Ada", 36, "ada@example.com");
        assert_eq!(person.name(), "Ada");
        assert_eq!(person.age(), 36);
        assert_eq!(person.email(), "ada@example.com");
    }

    #[test]
    fn test_constructor_accepts_negative_age_but_setter_rejects_it() {
        let mut person = Person::new("Ghost", -5, "ghost@example.com");
        assert_eq!(person.age(), -5);

        let err = person.set_age(-5).unwrap_err();
        assert!(matches!(&err, Error::InvalidArgument(msg) if msg == "Age cannot be negative"));
        assert_eq!(err.to_string(), "Age cannot be negative");
        // Failed mutation leaves the stored age untouched
        assert_eq!(person.age(), -5);
    }

    #[test]
    fn test_set_age_accepts_zero_and_positive() {
        let mut person = Person::new("Kid", 3, "kid@example.com");
        person.set_age(0).unwrap();
        assert_eq!(person.age(), 0);
        person.set_age(41).unwrap();
        assert_eq!(person.age(), 41);
    }

    #[test]
    fn test_unvalidated_setters() {
        let mut person = Person::new("A", 1, "a@example.com");
        person.set_name("");
        person.set_email("not an email");
        assert_eq!(person.name(), "");
        assert_eq!(person.email(), "not an email");
    }

    #[test]
    fn test_is_adult_boundary() {
        let cases = [(17, false), (18, true), (0, false), (200, true), (-1, false)];
        for (age, expected) in cases {
            let person = Person::new("P", age, "p@example.com");
            assert_eq!(person.is_adult(), expected, "age {age}");
        }
    }

    #[test]
    fn test_display_format() {
        let person = Person::new("John Doe", 25, "john@example.com");
        assert_eq!(
            person.to_string(),
            "Person{name='John Doe', age=25, email='john@example.com'}"
        );
    }

    #[test]
    fn test_json_field_order() {
        let person = Person::new("John Doe", 25, "john@example.com");
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John Doe","age":25,"email":"john@example.com"}"#
        );
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Person{name='John Doe', age=25, email='john@example.com'}\nIs adult: true\n"
        );
    }
}
