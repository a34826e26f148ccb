use crate::profilestorepb;
use std::collections::BTreeMap;

/// Label name/value pairs identifying the pushed series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later values replace earlier ones for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_proto(&self) -> profilestorepb::LabelSet {
        profilestorepb::LabelSet {
            labels: self
                .0
                .iter()
                .map(|(name, value)| profilestorepb::Label {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LabelSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ls = LabelSet::new();
        for (name, value) in iter {
            ls.insert(name, value);
        }
        ls
    }
}

/// Parses a single `name=value` pair. The value may itself contain `=`.
pub fn parse_label(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected \"<name>=<value>\" but got {:?}", s))?;

    if name.is_empty() {
        return Err(format!("label name is empty in {:?}", s));
    }

    Ok((name.to_string(), value.to_string()))
}
