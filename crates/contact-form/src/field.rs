// File: src/field.rs
// Purpose: Field identifiers and the query type enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named input of the contact form
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
    QueryType,
    Consent,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
        Field::QueryType,
        Field::Consent,
    ];

    /// Wire and HTML name of the field
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
            Field::QueryType => "queryType",
            Field::Consent => "consent",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Message => "Message",
            Field::QueryType => "Query Type",
            Field::Consent => "I consent to being contacted by the team",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of query types offered by the radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    General,
    Support,
}

impl QueryType {
    pub const ALL: [QueryType; 2] = [QueryType::General, QueryType::Support];

    /// Raw values accepted for the `queryType` field
    pub const VALUES: &'static [&'static str] = &["general", "support"];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::General => "general",
            QueryType::Support => "support",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryType::General => "General Enquiry",
            QueryType::Support => "Support Request",
        }
    }

    /// Parse a raw radio value; exact match only
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|query_type| query_type.as_str() == value)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn test_field_serializes_as_wire_name() {
        assert_eq!(serde_json::to_string(&Field::FirstName).unwrap(), "\"firstName\"");
        assert_eq!(serde_json::to_string(&Field::QueryType).unwrap(), "\"queryType\"");
    }

    #[test]
    fn test_query_type_parse() {
        assert_eq!(QueryType::parse("general"), Some(QueryType::General));
        assert_eq!(QueryType::parse("support"), Some(QueryType::Support));
        assert_eq!(QueryType::parse("Support"), None);
        assert_eq!(QueryType::parse(""), None);
    }
}
