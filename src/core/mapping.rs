use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

use crate::common::trace;
use crate::core::entry::Entry;

/// Key unique association of hex literals to values.
///
/// Later inserts for a key replace the earlier value. Iteration and
/// serialization follow ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert entry, returning the value it replaced.
    pub fn insert(&mut self, entry: Entry) -> Option<String> {
        let (key, value) = entry.into_key_value();
        let old = self.entries.insert(key.into_string(), value);
        if let Some(old) = &old {
            trace!("overwrite {:?}", old);
        }
        old
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Entry> for Mapping {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<Entry> for Mapping {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::HexKey;

    fn entry(key: &str, value: &str) -> Entry {
        Entry::new(HexKey::new(key).unwrap(), value)
    }

    #[test]
    fn later_value_wins() {
        let mut mapping = Mapping::new();

        assert_eq!(mapping.insert(entry("0x3400", "first")), None);
        assert_eq!(
            mapping.insert(entry("0x3400", "second")),
            Some("first".to_owned())
        );

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("0x3400"), Some("second"));
    }

    #[test]
    fn keys_differing_in_case_are_distinct() {
        let mapping: Mapping = vec![entry("0xab12", "a"), entry("0xAB12", "b")]
            .into_iter()
            .collect();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("0xab12"), Some("a"));
        assert_eq!(mapping.get("0xAB12"), Some("b"));
    }

    #[test]
    fn iterates_in_key_order() {
        let mapping: Mapping = vec![
            entry("0x4E00", "yī"),
            entry("0x3400", "qiū"),
            entry("0x3401", "tiǎn"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = mapping.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["0x3400", "0x3401", "0x4E00"]);
    }

    #[test]
    fn empty() {
        let mapping = Mapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.get("0x0"), None);
        assert_eq!((&mapping).into_iter().count(), 0);
    }
}
