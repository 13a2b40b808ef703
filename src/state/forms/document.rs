//! The form document built by the wizard

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to value mapping for one entry of a section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, empty when never set
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// True when at least one field holds a non-empty value
    pub fn has_content(&self) -> bool {
        self.0.values().any(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Committed value of a section.
///
/// `Declined` serializes as `null` and records that the user answered "no";
/// a section with no entry in the document was never answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    Declined,
    Single(Record),
    Multiple(Vec<Record>),
}

impl SectionValue {
    pub fn is_declined(&self) -> bool {
        matches!(self, SectionValue::Declined)
    }

    /// Entries of the section, empty when declined
    pub fn entries(&self) -> &[Record] {
        match self {
            SectionValue::Declined => &[],
            SectionValue::Single(record) => std::slice::from_ref(record),
            SectionValue::Multiple(records) => records,
        }
    }

    /// True when any field of any entry is non-empty
    pub fn has_content(&self) -> bool {
        self.entries().iter().any(Record::has_content)
    }
}

/// Section-keyed document built by the wizard and read by the renderer
/// and exporters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDocument {
    sections: BTreeMap<String, SectionValue>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&SectionValue> {
        self.sections.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: SectionValue) {
        self.sections.insert(key.into(), value);
    }

    pub fn decline(&mut self, key: impl Into<String>) {
        self.set(key, SectionValue::Declined);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    mod record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_get_missing_field_is_empty() {
            let r = Record::new();
            assert_eq!(r.get("fullName"), "");
        }

        #[test]
        fn test_has_content() {
            assert!(!record(&[("a", ""), ("b", "")]).has_content());
            assert!(record(&[("a", ""), ("b", "x")]).has_content());
            assert!(!Record::new().has_content());
        }

        #[test]
        fn test_set_overwrites_value() {
            let mut r = Record::new();
            r.set("skill", "Go");
            r.set("skill", "Rust");
            assert_eq!(r.get("skill"), "Rust");
        }
    }

    mod section_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_declined_has_no_entries() {
            assert!(SectionValue::Declined.entries().is_empty());
            assert!(!SectionValue::Declined.has_content());
        }

        #[test]
        fn test_single_exposes_one_entry() {
            let value = SectionValue::Single(record(&[("summary", "")]));
            assert_eq!(value.entries().len(), 1);
            assert!(!value.has_content());
        }

        #[test]
        fn test_multiple_content_in_any_entry() {
            let value =
                SectionValue::Multiple(vec![record(&[("skill", "")]), record(&[("skill", "Go")])]);
            assert!(value.has_content());
        }
    }

    mod serialization {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_declined_serializes_as_null() {
            let mut doc = FormDocument::new();
            doc.decline("personal");
            doc.set(
                "skills",
                SectionValue::Multiple(vec![record(&[("skill", "Go")])]),
            );
            let json = serde_json::to_value(&doc).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"personal": null, "skills": [{"skill": "Go"}]})
            );
        }

        #[test]
        fn test_deserialize_all_shapes() {
            let json = r#"{"personal": {"fullName": "Jane Doe"}, "summary": null, "skills": [{"skill": "Rust"}]}"#;
            let doc: FormDocument = serde_json::from_str(json).unwrap();
            assert_eq!(doc.get("summary"), Some(&SectionValue::Declined));
            assert_eq!(
                doc.get("personal"),
                Some(&SectionValue::Single(record(&[("fullName", "Jane Doe")])))
            );
            assert_eq!(
                doc.get("skills").map(|v| v.entries().len()),
                Some(1)
            );
            assert!(doc.get("education").is_none());
        }
    }
}
