use indexmap::IndexMap;
use serde::Serialize;

use crate::picker::DatePicker;

/// Hidden-field values of a form's pickers, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    fields: IndexMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pickers<'a>(pickers: impl IntoIterator<Item = &'a DatePicker>) -> Self {
        let mut form = Self::new();
        for picker in pickers {
            form.insert_picker(picker);
        }
        form
    }

    /// Record the picker's hidden field. Unnamed pickers contribute nothing.
    pub fn insert_picker(&mut self, picker: &DatePicker) -> bool {
        let Some(field) = picker.hidden_field() else {
            return false;
        };
        self.fields.insert(field.name, field.value);
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FormData;
    use crate::picker::DatePicker;

    #[test]
    fn collects_named_pickers_in_order() {
        let start = DatePicker::new().with_name("start").with_value("2024-03-15");
        let anonymous = DatePicker::new().with_value("2024-03-16");
        let end = DatePicker::new().with_name("end");

        let form = FormData::from_pickers([&start, &anonymous, &end]);
        assert_eq!(form.len(), 2);
        assert_eq!(form.get("start"), Some("2024-03-15"));
        assert_eq!(form.get("end"), Some(""));
        let names: Vec<&str> = form.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["start", "end"]);
    }

    #[test]
    fn serializes_as_flat_object() {
        let picker = DatePicker::new().with_name("dateOfBirth").with_value("1990-11-05");
        let form = FormData::from_pickers([&picker]);
        let json = serde_json::to_string(&form).expect("serialize");
        assert_eq!(json, r#"{"dateOfBirth":"1990-11-05"}"#);
    }
}
