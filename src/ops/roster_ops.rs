use crate::model::{Person, Roster};

/// Append a record parsed from raw editor text. Always appends exactly one
/// record; there is no validation to reject the input. Returns a copy of
/// what was appended.
pub fn append_entry(roster: &mut Roster, raw: &str) -> Person {
    let person = Person::from_entry(raw);
    roster.push(person.clone());
    person
}

/// Remove the last record whose name matches the selected row's name.
/// Removes exactly zero (no match) or one record, and returns it.
pub fn delete_last_match(roster: &mut Roster, name: &str) -> Option<Person> {
    let index = roster.last_index_of(name)?;
    Some(roster.remove(index))
}
