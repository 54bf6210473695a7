use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON value that may arrive either as a number or as a string.
///
/// The remote collection assigns ids as numeric strings, records created
/// elsewhere may carry real numbers, and `age` comes back in whichever form the
/// form submitted it. Both forms are kept verbatim so an update sends back what
/// was received; comparisons always go through the textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(_) => false,
            Scalar::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

/// One student record as stored by the remote collection and the local overlay.
///
/// Every attribute is optional: records come from two untrusted sources and a
/// missing field renders as an empty cell. Attributes the dashboard does not
/// know about (`avatar`, `createdAt`, ...) are carried in `extra` so a full
/// `PUT` does not drop them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Creation timestamp, ISO-8601 when written by this dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    /// Textual id, or `None` when the record has not been assigned one yet.
    /// An empty id counts as absent.
    pub fn id_text(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| id.to_string())
            .filter(|id| !id.is_empty())
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id_text().as_deref() == Some(id)
    }

    pub fn firstname_text(&self) -> &str {
        self.firstname.as_deref().unwrap_or("")
    }

    pub fn lastname_text(&self) -> &str {
        self.lastname.as_deref().unwrap_or("")
    }

    pub fn age_text(&self) -> String {
        self.age.as_ref().map(|a| a.to_string()).unwrap_or_default()
    }

    pub fn phone_text(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    pub fn mail_text(&self) -> &str {
        self.mail.as_deref().unwrap_or("")
    }

    pub fn role_text(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_attributes_on_round_trip() {
        let raw = r#"{"id":"7","firstname":"Ada","avatar":"https://img/7.png","createdAt":1700000000}"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.id_text().as_deref(), Some("7"));
        assert_eq!(student.extra.len(), 2);

        let back: Value = serde_json::to_value(&student).unwrap();
        assert_eq!(back["avatar"], "https://img/7.png");
        assert_eq!(back["createdAt"], 1700000000);
        assert!(back.get("lastname").is_none());
    }

    #[test]
    fn numeric_and_string_ids_compare_by_text() {
        let numeric: Student = serde_json::from_str(r#"{"id":12,"age":30}"#).unwrap();
        let textual: Student = serde_json::from_str(r#"{"id":"12","age":"30"}"#).unwrap();
        assert!(numeric.has_id("12"));
        assert!(textual.has_id("12"));
        assert_eq!(numeric.age_text(), textual.age_text());
    }

    #[test]
    fn null_and_empty_ids_are_absent() {
        let null_id: Student = serde_json::from_str(r#"{"id":null,"mail":"a@x.com"}"#).unwrap();
        let empty_id: Student = serde_json::from_str(r#"{"id":"","mail":"a@x.com"}"#).unwrap();
        assert_eq!(null_id.id_text(), None);
        assert_eq!(empty_id.id_text(), None);
    }

    #[test]
    fn zero_age_is_text_not_blank() {
        let zero: Student = serde_json::from_str(r#"{"age":0}"#).unwrap();
        let missing = Student::default();
        assert_eq!(zero.age_text(), "0");
        assert_eq!(missing.age_text(), "");
    }
}
