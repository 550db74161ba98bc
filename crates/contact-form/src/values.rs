// File: src/values.rs
// Purpose: Raw form input, validated form values and field change events

use crate::field::{Field, QueryType};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated input as the user typed it
///
/// Every field is optional on the wire: text defaults to empty, an unselected
/// radio group is `None` and an unchecked box is `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub query_type: Option<String>,
    #[serde(deserialize_with = "deserialize_checkbox")]
    pub consent: bool,
}

impl RawFormValues {
    /// Apply a single field change
    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::FirstName(value) => self.first_name = value,
            FieldInput::LastName(value) => self.last_name = value,
            FieldInput::Email(value) => self.email = value,
            FieldInput::Message(value) => self.message = value,
            FieldInput::QueryType(value) => self.query_type = Some(value),
            FieldInput::Consent(checked) => self.consent = checked,
        }
    }

    /// Current text of a text field; empty for the radio group and checkbox
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::QueryType | Field::Consent => "",
        }
    }

    /// The selected query type, if the raw value names one
    pub fn selected_query_type(&self) -> Option<QueryType> {
        self.query_type.as_deref().and_then(QueryType::parse)
    }
}

/// A validated contact request, serialized as the POST body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub query_type: QueryType,
    pub consent: bool,
}

/// A change to one field, as emitted by an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    FirstName(String),
    LastName(String),
    Email(String),
    Message(String),
    QueryType(String),
    Consent(bool),
}

impl FieldInput {
    /// The field this change targets
    pub fn field(&self) -> Field {
        match self {
            FieldInput::FirstName(_) => Field::FirstName,
            FieldInput::LastName(_) => Field::LastName,
            FieldInput::Email(_) => Field::Email,
            FieldInput::Message(_) => Field::Message,
            FieldInput::QueryType(_) => Field::QueryType,
            FieldInput::Consent(_) => Field::Consent,
        }
    }

    /// Build a change from an HTML input name and its submitted value
    ///
    /// Checkbox values follow browser conventions (`on`, `true`, `1`).
    pub fn from_named(name: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let input = match Field::from_name(name)? {
            Field::FirstName => FieldInput::FirstName(value),
            Field::LastName => FieldInput::LastName(value),
            Field::Email => FieldInput::Email(value),
            Field::Message => FieldInput::Message(value),
            Field::QueryType => FieldInput::QueryType(value),
            Field::Consent => FieldInput::Consent(checkbox_text(&value)),
        };
        Some(input)
    }
}

fn checkbox_text(value: &str) -> bool {
    matches!(value, "on" | "true" | "1")
}

/// Accepts JSON booleans and the strings an HTML checkbox may post
fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl<'de> Visitor<'de> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or a checkbox value")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            Ok(checkbox_text(value))
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}
