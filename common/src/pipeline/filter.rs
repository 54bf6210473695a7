use serde::{Deserialize, Serialize};

use crate::model::entity_key::KeyedStudent;
use crate::model::student::Student;

/// The field the search box matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    #[default]
    All,
    Firstname,
    Lastname,
    Phone,
    Age,
    Role,
}

impl FilterField {
    /// Selectors in the order the filter dropdown lists them.
    pub const OPTIONS: [FilterField; 6] = [
        FilterField::All,
        FilterField::Firstname,
        FilterField::Lastname,
        FilterField::Phone,
        FilterField::Age,
        FilterField::Role,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterField::All => "all",
            FilterField::Firstname => "firstname",
            FilterField::Lastname => "lastname",
            FilterField::Phone => "phone",
            FilterField::Age => "age",
            FilterField::Role => "role",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::All => "All",
            FilterField::Firstname => "First Name",
            FilterField::Lastname => "Last Name",
            FilterField::Phone => "Phone",
            FilterField::Age => "Age",
            FilterField::Role => "Role",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|f| f.key() == key)
    }

    /// `all` and `firstname` match a prefix of the first name; every other
    /// selector matches a substring of its own field.
    fn is_prefix_match(&self) -> bool {
        matches!(self, FilterField::All | FilterField::Firstname)
    }

    fn value_of(&self, student: &Student) -> String {
        match self {
            FilterField::All | FilterField::Firstname => student.firstname_text().to_string(),
            FilterField::Lastname => student.lastname_text().to_string(),
            FilterField::Phone => student.phone_text().to_string(),
            FilterField::Age => student.age_text(),
            FilterField::Role => student.role_text().to_string(),
        }
    }
}

/// Case-insensitive match of one record against an already lowercased term.
pub fn matches(student: &Student, field: FilterField, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    let value = field.value_of(student).to_lowercase();
    if field.is_prefix_match() {
        value.starts_with(term_lower)
    } else {
        value.contains(term_lower)
    }
}

/// Records of `entries` matching `term` on `field`, in their original order.
/// An empty term keeps every record.
pub fn filter<'a>(entries: &'a [KeyedStudent], field: FilterField, term: &str) -> Vec<&'a KeyedStudent> {
    let term_lower = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(&entry.student, field, &term_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(firstname: &str, lastname: &str, phone: &str, age: &str, role: &str) -> KeyedStudent {
        KeyedStudent::new(Student {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            phone: Some(phone.into()),
            age: Some(age.into()),
            role: Some(role.into()),
            mail: Some(format!("{}@x.com", firstname.to_lowercase())),
            ..Default::default()
        })
    }

    fn sample() -> Vec<KeyedStudent> {
        vec![
            keyed("Amy", "Stone", "555-0101", "21", "Student"),
            keyed("Bob", "Amsel", "555-0199", "34", "Teacher"),
            keyed("Samantha", "Ray", "555-4401", "19", "student"),
            keyed("amelia", "Grant", "555-7000", "42", "Admin"),
        ]
    }

    fn firstnames(rows: Vec<&KeyedStudent>) -> Vec<&str> {
        rows.into_iter().map(|e| e.student.firstname_text()).collect()
    }

    #[test]
    fn all_selector_is_a_firstname_prefix_match() {
        let data = sample();
        let rows = filter(&data, FilterField::All, "am");
        assert_eq!(firstnames(rows), vec!["Amy", "amelia"]);
    }

    #[test]
    fn firstname_selector_ignores_case() {
        let data = sample();
        let rows = filter(&data, FilterField::Firstname, "AM");
        assert_eq!(firstnames(rows), vec!["Amy", "amelia"]);
    }

    #[test]
    fn other_selectors_match_substrings() {
        let data = sample();
        assert_eq!(firstnames(filter(&data, FilterField::Lastname, "ams")), vec!["Bob"]);
        assert_eq!(firstnames(filter(&data, FilterField::Phone, "01")), vec!["Amy", "Bob", "Samantha"]);
        assert_eq!(firstnames(filter(&data, FilterField::Age, "4")), vec!["Bob", "amelia"]);
        assert_eq!(
            firstnames(filter(&data, FilterField::Role, "STUDENT")),
            vec!["Amy", "Samantha"]
        );
    }

    #[test]
    fn empty_term_passes_everything_through() {
        let data = sample();
        assert_eq!(filter(&data, FilterField::Role, "").len(), data.len());
    }

    #[test]
    fn missing_fields_behave_as_empty_text() {
        let data = vec![KeyedStudent::new(Student {
            mail: Some("nobody@x.com".into()),
            ..Default::default()
        })];
        assert!(filter(&data, FilterField::Phone, "5").is_empty());
        assert!(filter(&data, FilterField::All, "a").is_empty());
    }

    #[test]
    fn numeric_age_is_coerced_to_text() {
        let student: Student = serde_json::from_str(r#"{"age":27,"mail":"n@x.com"}"#).unwrap();
        assert!(matches(&student, FilterField::Age, "27"));
    }

    #[test]
    fn selector_keys_round_trip() {
        for field in FilterField::OPTIONS {
            assert_eq!(FilterField::from_key(field.key()), Some(field));
        }
        assert_eq!(FilterField::from_key("mail"), None);
    }
}
