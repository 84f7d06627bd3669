use std::fmt;

/// Insertion-ordered map keyed by free-form labels
///
/// Report labels (structure names, metric names) carry no fixed schema and
/// their source order matters for display, so entries keep the order in
/// which a key was first inserted. Re-inserting a key replaces its value
/// in place.
///
/// # Example
///
/// ```
/// use dvhstat_core::LabelMap;
///
/// let mut stats: LabelMap<String> = LabelMap::new();
/// stats.insert("Volume [cm³]", "120.5".to_string());
/// stats.insert("Mean Dose [%]", "95.3".to_string());
/// stats.insert("Volume [cm³]", "121.0".to_string());
///
/// assert_eq!(stats.len(), 2);
/// assert_eq!(stats.get("Volume [cm³]").map(String::as_str), Some("121.0"));
/// assert_eq!(stats.keys().collect::<Vec<_>>(), ["Volume [cm³]", "Mean Dose [%]"]);
/// ```
#[derive(Clone, PartialEq)]
pub struct LabelMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> LabelMap<V> {
    /// Creates an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value for `key`, inserting one built by `default` first if absent
    pub fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let idx = match self.position(key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key.to_string(), default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.position(key).map(move |idx| &mut self.entries[idx].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keeps only the entries for which `keep` returns true, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &V) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<V> Default for LabelMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for LabelMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for LabelMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LabelMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for LabelMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(feature = "json")]
mod serde_impl {
    use super::LabelMap;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    impl<V: Serialize> Serialize for LabelMap<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    struct LabelMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for LabelMapVisitor<V> {
        type Value = LabelMap<V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of labels to values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = LabelMap::new();
            while let Some((k, v)) = access.next_entry::<String, V>()? {
                map.insert(k, v);
            }
            Ok(map)
        }
    }

    impl<'de, V: Deserialize<'de>> Deserialize<'de> for LabelMap<V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(LabelMapVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = LabelMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        assert_eq!(map.insert("b", 3), Some(1));

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("b", &3), ("a", &2)]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: LabelMap<Vec<i32>> = LabelMap::new();
        map.get_or_insert_with("x", Vec::new).push(1);
        map.get_or_insert_with("x", Vec::new).push(2);
        assert_eq!(map.get("x"), Some(&vec![1, 2]));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let map: LabelMap<i32> = LabelMap::new();
        assert!(map.get("nope").is_none());
        assert!(!map.contains_key("nope"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut map: LabelMap<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        map.retain(|k, _| k != "b");
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_preserves_order() {
        let map: LabelMap<String> = [("z", "1".to_string()), ("a", "2".to_string())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);

        let back: LabelMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
