use serde::{Deserialize, Serialize};

use super::person::Person;

/// The ordered record store. Insertion order is display order, and the
/// persisted JSON array preserves it. Owned by the TUI's `App` and mutated
/// only through the ops layer, so there is exactly one writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Roster { people }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// Append at the end. The roster is never kept sorted.
    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Remove and return the record at `index`. Panics if out of range;
    /// callers obtain the index from `last_index_of` on the same roster.
    pub fn remove(&mut self, index: usize) -> Person {
        self.people.remove(index)
    }

    /// Index of the highest-index record whose name matches.
    ///
    /// Records are identified by name, and deletion targets the *last*
    /// same-named record in store order, not the one at the highlighted
    /// row's position. Duplicate names make the two diverge.
    pub fn last_index_of(&self, name: &str) -> Option<usize> {
        self.people.iter().rposition(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, age: &str) -> Person {
        Person {
            name: name.into(),
            age: age.into(),
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut roster = Roster::default();
        roster.push(person("B", "2"));
        roster.push(person("A", "1"));
        let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn last_index_of_picks_highest_index_match() {
        let mut roster = Roster::default();
        roster.push(person("A", "1"));
        roster.push(person("B", "2"));
        roster.push(person("A", "3"));
        assert_eq!(roster.last_index_of("A"), Some(2));
        assert_eq!(roster.last_index_of("B"), Some(1));
        assert_eq!(roster.last_index_of("C"), None);
    }

    #[test]
    fn serializes_as_bare_json_array() {
        let roster = Roster::new(vec![person("Ana", "30")]);
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"[{"name":"Ana","age":"30"}]"#);
    }

    #[test]
    fn empty_roster_round_trips() {
        let roster = Roster::default();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
