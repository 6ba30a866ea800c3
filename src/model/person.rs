use serde::{Deserialize, Serialize};

/// One roster entry. Both fields are raw text: `age` is whatever followed
/// the comma at entry time, not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: String,
}

impl Person {
    /// Parse a raw input line of the form `name,age`.
    ///
    /// The text is split on commas and only the first two parts are kept:
    /// part 0 (untrimmed) is the name, part 1 is the age. With no comma the
    /// age is a single space. There is no validation: an empty name or a
    /// non-numeric age is accepted as-is.
    pub fn from_entry(input: &str) -> Self {
        let mut parts = input.split(',');
        let name = parts.next().unwrap_or_default().to_string();
        let age = parts.next().map_or_else(|| " ".to_string(), str::to_string);
        Person { name, age }
    }
}
