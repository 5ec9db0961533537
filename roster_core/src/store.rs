use core::fmt;
use core::slice;
use serde_json::Value;

/// A single registered user: whatever fields were submitted at
/// registration, stored verbatim.
pub type Record = serde_json::Map<String, Value>;

/// A grow-only list of registered users.
///
/// A user's position in the list is assigned at registration and never
/// changes; it is the only identifier usable for login. The list never
/// shrinks and records are never mutated in place.
#[derive(Clone, PartialEq, Eq)]
pub struct UserStore(Vec<Record>);

impl UserStore {
    /// Creates an empty `UserStore`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a record and returns the position assigned to it.
    pub fn insert(&mut self, record: Record) -> usize {
        self.0.push(record);
        self.0.len() - 1
    }

    /// Returns the record at `position`, if that position is occupied.
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.0.get(position)
    }

    /// Returns true if `position` is occupied.
    pub fn contains(&self, position: usize) -> bool {
        position < self.0.len()
    }

    /// Returns the number of registered users.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nobody has registered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator visiting all records in registration order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.0.iter()
    }
}

impl fmt::Debug for UserStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserStore").field("users", &self.0).finish()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a UserStore {
    type IntoIter = slice::Iter<'a, Record>;
    type Item = &'a Record;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn record(name: &str) -> Record {
        let mut record = Record::new();
        record.insert("name".to_string(), json!(name));
        record
    }

    #[test]
    fn insert_assigns_sequential_positions() {
        let mut store = UserStore::new();

        assert_eq!(store.insert(record("first")), 0);
        assert_eq!(store.insert(record("second")), 1);
        assert_eq!(store.insert(record("third")), 2);
    }

    #[test]
    fn get_returns_the_inserted_record() {
        let mut store = UserStore::new();
        let position = store.insert(record("JoshMatz"));

        assert_eq!(store.get(position), Some(&record("JoshMatz")));
    }

    #[test]
    fn get_unoccupied_position() {
        let store = UserStore::new();

        assert_eq!(store.get(0), None);
    }

    #[test]
    fn contains_tracks_occupied_positions() {
        let mut store = UserStore::new();
        store.insert(record("only"));

        assert!(store.contains(0));
        assert!(!store.contains(1));
    }

    #[test]
    fn empty_by_default() {
        let store = UserStore::default();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    proptest! {
        #[test]
        fn positions_stay_stable_as_the_store_grows(names in proptest::collection::vec("[A-Za-z]{2,10}", 1..8)) {
            let mut store = UserStore::new();

            let positions: Vec<usize> = names.iter().map(|name| store.insert(record(name))).collect();

            for (position, name) in positions.iter().zip(&names) {
                prop_assert_eq!(store.get(*position), Some(&record(name)));
            }
            prop_assert!(!store.contains(names.len()));
        }
    }
}
