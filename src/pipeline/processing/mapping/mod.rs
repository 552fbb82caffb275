use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::FULL_NAME_FIELD;
use crate::domain::NormalizedRow;

/// Output field name -> ordered source field names, in configuration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingConfig {
    fields: Vec<(String, Vec<String>)>,
}

impl MappingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target; re-adding an existing target replaces its sources in place
    pub fn insert(&mut self, target: impl Into<String>, sources: Vec<String>) {
        let target = target.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == target) {
            Some((_, existing_sources)) => *existing_sources = sources,
            None => self.fields.push((target, sources)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(target, sources)| (target.as_str(), sources.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for MappingConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = MappingConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping output fields to arrays of source field names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = MappingConfig::new();
                while let Some((target, sources)) = access.next_entry::<String, Vec<String>>()? {
                    config.insert(target, sources);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

/// A mapped value: one source stays scalar, several become a list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    Sequence(Vec<String>),
}

/// One payload record, serialized as a JSON object in mapping order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputItem {
    fields: Vec<(String, FieldValue)>,
}

impl OutputItem {
    pub fn get(&self, target: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == target)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    fn push(&mut self, target: &str, value: FieldValue) {
        self.fields.push((target.to_string(), value));
    }
}

impl Serialize for OutputItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Project a row through the mapping.
///
/// `full_name` joins its non-empty sources with a space. Any other target takes
/// the single source value as-is, or the list of all source values (empties kept)
/// when more than one source is configured.
pub fn map_row(row: &NormalizedRow, mapping: &MappingConfig) -> OutputItem {
    let mut item = OutputItem::default();

    for (target, sources) in mapping.iter() {
        let values: Vec<&str> = sources.iter().map(|source| row.lookup(source)).collect();

        let value = if target == FULL_NAME_FIELD {
            FieldValue::Scalar(join_non_empty(&values))
        } else if let [single] = values.as_slice() {
            FieldValue::Scalar(single.to_string())
        } else {
            FieldValue::Sequence(values.iter().map(|v| v.to_string()).collect())
        };

        item.push(target, value);
    }

    item
}

pub fn map_batch(rows: &[NormalizedRow], mapping: &MappingConfig) -> Vec<OutputItem> {
    rows.iter().map(|row| map_row(row, mapping)).collect()
}

fn join_non_empty(values: &[&str]) -> String {
    values
        .iter()
        .filter(|value| !value.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
