//! FieldLookup for plain string maps.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::ports::FieldLookup;

impl<K, S> FieldLookup for HashMap<K, String, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn text_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

// covers `StructuredName` (`BTreeMap<&'static str, String>`) as well
impl<K> FieldLookup for BTreeMap<K, String>
where
    K: Borrow<str> + Ord,
{
    fn text_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
