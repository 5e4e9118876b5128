//! Locale document tree and dot-notation key flattening.

use std::collections::BTreeMap;

/// A node in a parsed locale document.
///
/// Locale files are nested YAML mappings whose leaves are the translated
/// strings. Keys within one mapping are unique; `BTreeMap` keeps siblings
/// in a stable order so flattened output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleValue {
    /// Terminal node holding the translation text.
    Leaf(String),
    /// Mapping from key to child node.
    Branch(BTreeMap<String, LocaleValue>),
}

impl LocaleValue {
    /// What: Build a `LocaleValue` tree from a parsed YAML value.
    ///
    /// Inputs:
    /// - `value`: Parsed YAML value (normally the mapping under the top-level locale key)
    ///
    /// Output:
    /// - `Result<Self, String>` containing the tree or a descriptive error
    ///
    /// # Errors
    /// - Returns `Err` when a node is neither a mapping nor a scalar (e.g. a sequence)
    /// - Returns `Err` when a mapping key is not a string
    ///
    /// Details:
    /// - Scalars of any YAML type become leaves holding their string form
    /// - Errors name the dotted path of the offending node so the broken
    ///   entry can be found in the file
    pub fn from_yaml(value: &serde_norway::Value) -> Result<Self, String> {
        Self::from_yaml_at(value, "")
    }

    /// Recursive worker for [`Self::from_yaml`], tracking the dotted path so far.
    fn from_yaml_at(value: &serde_norway::Value, path: &str) -> Result<Self, String> {
        match value {
            serde_norway::Value::Mapping(map) => {
                let mut children = BTreeMap::new();
                for (key, val) in map {
                    let Some(key_str) = key.as_str() else {
                        return Err(format!(
                            "unsupported key type at path '{path}': mapping keys must be strings"
                        ));
                    };
                    let child_path = join_key(path, key_str);
                    let child = Self::from_yaml_at(val, &child_path)?;
                    children.insert(key_str.to_string(), child);
                }
                Ok(Self::Branch(children))
            }
            serde_norway::Value::String(s) => Ok(Self::Leaf(s.clone())),
            serde_norway::Value::Bool(b) => Ok(Self::Leaf(b.to_string())),
            serde_norway::Value::Number(n) => Ok(Self::Leaf(n.to_string())),
            serde_norway::Value::Null => Ok(Self::Leaf(String::new())),
            serde_norway::Value::Sequence(_) => Err(format!(
                "unsupported node type at path '{path}': sequences are not allowed in locale files"
            )),
            serde_norway::Value::Tagged(_) => Err(format!(
                "unsupported node type at path '{path}': tagged values are not allowed in locale files"
            )),
        }
    }

    /// What: Produce the dotted key path of every leaf reachable from this node.
    ///
    /// Output:
    /// - Sorted `Vec<String>` with exactly one entry per leaf
    ///
    /// Details:
    /// - A leaf child of key `k` contributes `k`; a branch child contributes
    ///   `k.` prefixed onto each of its own flattened paths
    /// - No path is produced for a branch itself
    /// - Called on a bare `Leaf` (which has no key to name it) this yields
    ///   nothing; the loader guarantees document roots are branches
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut paths = Vec::new();
        if let Self::Branch(map) = self {
            for (key, child) in map {
                match child {
                    Self::Leaf(_) => paths.push(key.clone()),
                    Self::Branch(_) => {
                        for sub in child.flatten() {
                            paths.push(format!("{key}.{sub}"));
                        }
                    }
                }
            }
        }
        paths
    }

    /// What: Count the leaves in this subtree.
    ///
    /// Output:
    /// - Number of `Leaf` nodes reachable from this node (inclusive)
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(map) => map.values().map(Self::leaf_count).sum(),
        }
    }

    /// What: Look up the leaf value at a dotted path.
    ///
    /// Inputs:
    /// - `path`: Dot-notation key (e.g., "app.forms.personal.first_name")
    ///
    /// Output:
    /// - `Some(&str)` when the path walks branch keys down to a leaf, `None` otherwise
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let mut node = self;
        for segment in path.split('.') {
            match node {
                Self::Branch(map) => node = map.get(segment)?,
                Self::Leaf(_) => return None,
            }
        }
        match node {
            Self::Leaf(text) => Some(text),
            Self::Branch(_) => None,
        }
    }

    /// What: Collect `(dotted path, leaf text)` pairs into `out`.
    ///
    /// Inputs:
    /// - `prefix`: Dotted path accumulated so far ("" at the root)
    /// - `out`: Map to populate
    pub(crate) fn collect_translations(
        &self,
        prefix: &str,
        out: &mut std::collections::HashMap<String, String>,
    ) {
        match self {
            Self::Leaf(text) => {
                out.insert(prefix.to_string(), text.clone());
            }
            Self::Branch(map) => {
                for (key, child) in map {
                    child.collect_translations(&join_key(prefix, key), out);
                }
            }
        }
    }
}

/// Join a dotted prefix and a key, omitting the dot for the root prefix.
fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
