use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A JSON-ready output value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Converted output rows sharing one column list.
///
/// Every record carries exactly one value per column, so all records
/// serialize with the same keys in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    values: Vec<Vec<FieldValue>>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            values: Vec::new(),
        }
    }

    pub fn with_capacity(columns: Vec<String>, capacity: usize) -> Self {
        Self {
            columns,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append a record, padding with `null` or dropping surplus values to fit the columns.
    pub fn push(&mut self, mut values: Vec<FieldValue>) {
        values.resize(self.columns.len(), FieldValue::Null);
        self.values.push(values);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Record<'_>> {
        self.values.get(index).map(|values| Record {
            columns: &self.columns,
            values,
        })
    }

    pub fn first(&self) -> Option<Record<'_>> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Record<'_>> {
        self.values.iter().map(|values| Record {
            columns: &self.columns,
            values,
        })
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for record in self.iter() {
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}

/// Borrowed view of one record: field names paired with values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [FieldValue],
}

impl<'a> Record<'a> {
    pub fn get(&self, field: &str) -> Option<&'a FieldValue> {
        let values = self.values;
        self.columns
            .iter()
            .position(|column| column == field)
            .and_then(|idx| values.get(idx))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a FieldValue)> + use<'a> {
        let (columns, values) = (self.columns, self.values);
        columns.iter().map(String::as_str).zip(values.iter())
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordSet {
        let mut records = RecordSet::new(vec!["zeta".into(), "alpha".into(), "tags".into()]);
        records.push(vec![
            FieldValue::Int(1),
            FieldValue::Text("ä".into()),
            FieldValue::List(vec!["x".into()]),
        ]);
        records.push(vec![FieldValue::Float(2.5)]);
        records
    }

    #[test]
    fn push_pads_with_null() {
        let records = sample();
        let second = records.get(1).expect("second record");
        assert_eq!(second.get("zeta"), Some(&FieldValue::Float(2.5)));
        assert_eq!(second.get("alpha"), Some(&FieldValue::Null));
        assert_eq!(second.get("tags"), Some(&FieldValue::Null));
        assert_eq!(second.get("missing"), None);
    }

    #[test]
    fn serializes_keys_in_column_order() {
        let json = serde_json::to_string(&sample()).expect("serialize records");
        assert_eq!(
            json,
            r#"[{"zeta":1,"alpha":"ä","tags":["x"]},{"zeta":2.5,"alpha":null,"tags":null}]"#
        );
    }

    #[test]
    fn empty_set_serializes_as_empty_array() {
        let records = RecordSet::new(vec!["a".into()]);
        assert!(records.is_empty());
        assert_eq!(serde_json::to_string(&records).unwrap(), "[]");
    }
}
