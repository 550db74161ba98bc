// File: src/validation.rs
// Purpose: Rule table, per-field error map and the validation entry points

use crate::field::{Field, QueryType};
use crate::values::{FormValues, RawFormValues};
use contact_form_validation::{is_checked, is_one_of, is_present, is_valid_email};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// A predicate over the raw input plus the message shown when it fails
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&RawFormValues) -> bool,
    pub message: &'static str,
}

/// The ordered rules for one field; the first failing rule wins
#[derive(Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

pub static RULES: &[FieldRules] = &[
    FieldRules {
        field: Field::FirstName,
        rules: &[Rule { check: first_name_present, message: "First name is required" }],
    },
    FieldRules {
        field: Field::LastName,
        rules: &[Rule { check: last_name_present, message: "Last name is required" }],
    },
    FieldRules {
        field: Field::Email,
        rules: &[Rule { check: email_well_formed, message: "Invalid email address" }],
    },
    FieldRules {
        field: Field::Message,
        rules: &[Rule { check: message_present, message: "Message cannot be empty" }],
    },
    FieldRules {
        field: Field::QueryType,
        rules: &[Rule { check: query_type_known, message: "Please select a query type" }],
    },
    FieldRules {
        field: Field::Consent,
        rules: &[Rule { check: consent_given, message: "Please consent to being contacted" }],
    },
];

fn first_name_present(values: &RawFormValues) -> bool {
    is_present(&values.first_name)
}

fn last_name_present(values: &RawFormValues) -> bool {
    is_present(&values.last_name)
}

fn email_well_formed(values: &RawFormValues) -> bool {
    is_valid_email(&values.email)
}

fn message_present(values: &RawFormValues) -> bool {
    is_present(&values.message)
}

fn query_type_known(values: &RawFormValues) -> bool {
    values
        .query_type
        .as_deref()
        .is_some_and(|value| is_one_of(value, QueryType::VALUES))
}

fn consent_given(values: &RawFormValues) -> bool {
    is_checked(values.consent)
}

/// Field names to error messages, at most one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Get error message for a field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Check if field has an error
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in field declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Messages in field declaration order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.values().map(String::as_str).collect()
    }
}

/// Outcome of validating a full set of raw values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(FormValues),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The error map, if validation failed
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<FormValues, FieldErrors> {
        match self {
            ValidationResult::Valid(values) => Ok(values),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }
}

/// Run one field's rules and return the first failing message
pub fn validate_field(values: &RawFormValues, field: Field) -> Option<&'static str> {
    RULES
        .iter()
        .filter(|entry| entry.field == field)
        .flat_map(|entry| entry.rules.iter())
        .find(|rule| !(rule.check)(values))
        .map(|rule| rule.message)
}

/// Validate every field and aggregate all failures
pub fn validate(values: &RawFormValues) -> ValidationResult {
    let errors = RULES.iter().fold(FieldErrors::new(), |mut errors, entry| {
        if let Some(message) = validate_field(values, entry.field) {
            errors.insert(entry.field, message);
        }
        errors
    });

    // an unparseable query type always fails its rule, so `None` implies errors
    match values.selected_query_type() {
        Some(query_type) if errors.is_empty() => ValidationResult::Valid(FormValues {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
            query_type,
            consent: values.consent,
        }),
        _ => {
            debug!(failed = errors.len(), "contact form failed validation");
            ValidationResult::Invalid(errors)
        }
    }
}
