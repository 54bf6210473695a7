use std::fmt;

use super::student::Student;

/// Identity used to collapse duplicate records coming from the remote
/// collection and the local overlay.
///
/// A record with an id is keyed by `"{id}-{mail}"`; a record without one is
/// keyed by its mail alone. A missing mail contributes an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(String);

impl EntityKey {
    pub fn of(student: &Student) -> Self {
        match student.id_text() {
            Some(id) => EntityKey(format!("{}-{}", id, student.mail_text())),
            None => EntityKey(student.mail_text().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record paired with the key computed for it when it entered the working
/// set. The key is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedStudent {
    pub key: EntityKey,
    pub student: Student,
}

impl KeyedStudent {
    pub fn new(student: Student) -> Self {
        Self {
            key: EntityKey::of(&student),
            student,
        }
    }
}

impl From<Student> for KeyedStudent {
    fn from(student: Student) -> Self {
        KeyedStudent::new(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::student::Scalar;

    #[test]
    fn id_and_mail_form_the_key() {
        let student = Student {
            id: Some(Scalar::from(4u64)),
            mail: Some("amy@x.com".into()),
            ..Default::default()
        };
        assert_eq!(EntityKey::of(&student).as_str(), "4-amy@x.com");
    }

    #[test]
    fn mail_alone_without_id() {
        let student = Student {
            mail: Some("amy@x.com".into()),
            ..Default::default()
        };
        assert_eq!(EntityKey::of(&student).as_str(), "amy@x.com");
    }

    #[test]
    fn same_id_different_mail_are_distinct() {
        let a = Student {
            id: Some("1".into()),
            mail: Some("a@x.com".into()),
            ..Default::default()
        };
        let b = Student {
            mail: Some("b@x.com".into()),
            ..a.clone()
        };
        assert_ne!(EntityKey::of(&a), EntityKey::of(&b));
    }
}
