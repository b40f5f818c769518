use std::collections::BTreeMap;

use lexime_trie::DoubleArray;

/// Double-array trie over UTF-8 keys with a parallel value table. Values
/// only sit on full keys, so every match ends on a char boundary of the
/// probed text.
pub(crate) struct KeyTrie {
    /// `None` for an empty table.
    da: Option<DoubleArray<u8>>,
    values: Vec<String>,
}

impl KeyTrie {
    pub(crate) fn from_map(map: &BTreeMap<String, String>) -> Self {
        if map.is_empty() {
            return Self {
                da: None,
                values: Vec::new(),
            };
        }
        // BTreeMap<String, _> iterates in byte order, as DoubleArray::build requires.
        let keys: Vec<&[u8]> = map.keys().map(|k| k.as_bytes()).collect();
        let values: Vec<String> = map.values().cloned().collect();
        let da = DoubleArray::<u8>::build(&keys);
        Self {
            da: Some(da),
            values,
        }
    }

    /// Longest key that prefixes `text`, as `(byte_len, value)`.
    pub(crate) fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let da = self.da.as_ref()?;
        da.common_prefix_search(text.as_bytes())
            .max_by_key(|m| m.len)
            .and_then(|m| {
                let value = self.values.get(m.value_id as usize)?;
                Some((m.len, value.as_str()))
            })
    }
}
