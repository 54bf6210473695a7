use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::student::{Scalar, Student};

/// One editable field of the add/edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Firstname,
    Lastname,
    Age,
    Phone,
    Mail,
    Role,
}

impl DraftField {
    /// Fields in the order the dialog shows them.
    pub const ALL: [DraftField; 6] = [
        DraftField::Firstname,
        DraftField::Lastname,
        DraftField::Age,
        DraftField::Phone,
        DraftField::Mail,
        DraftField::Role,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Firstname => "firstname",
            DraftField::Lastname => "lastname",
            DraftField::Age => "age",
            DraftField::Phone => "phone",
            DraftField::Mail => "mail",
            DraftField::Role => "role",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Firstname => "First Name",
            DraftField::Lastname => "Last Name",
            DraftField::Age => "Age",
            DraftField::Phone => "Phone",
            DraftField::Mail => "Email",
            DraftField::Role => "Role",
        }
    }

    /// HTML input type for the field.
    pub fn input_type(&self) -> &'static str {
        match self {
            DraftField::Age => "number",
            DraftField::Mail => "email",
            _ => "text",
        }
    }
}

/// Contents of the add/edit form. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentDraft {
    pub firstname: String,
    pub lastname: String,
    pub age: String,
    pub phone: String,
    pub mail: String,
    pub role: String,
}

impl StudentDraft {
    /// Prefills a draft for editing an existing record.
    pub fn from_student(student: &Student) -> Self {
        Self {
            firstname: student.firstname_text().to_string(),
            lastname: student.lastname_text().to_string(),
            age: student.age_text(),
            phone: student.phone_text().to_string(),
            mail: student.mail_text().to_string(),
            role: student.role_text().to_string(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Firstname => &self.firstname,
            DraftField::Lastname => &self.lastname,
            DraftField::Age => &self.age,
            DraftField::Phone => &self.phone,
            DraftField::Mail => &self.mail,
            DraftField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Firstname => self.firstname = value,
            DraftField::Lastname => self.lastname = value,
            DraftField::Age => self.age = value,
            DraftField::Phone => self.phone = value,
            DraftField::Mail => self.mail = value,
            DraftField::Role => self.role = value,
        }
    }

    /// Reports the first blank field, in dialog order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match DraftField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            Some(field) => Err(ValidationError::MissingField(field.label())),
            None => Ok(()),
        }
    }

    /// A new record without identity, ready to `POST`.
    pub fn into_new_student(self, date: Option<String>) -> Student {
        self.apply_to(Student {
            date,
            ..Default::default()
        })
    }

    /// `base` with the draft's fields written over it. Identity, date and
    /// unknown attributes of `base` are kept, ready to `PUT`.
    pub fn apply_to(self, base: Student) -> Student {
        Student {
            firstname: Some(self.firstname),
            lastname: Some(self.lastname),
            age: Some(Scalar::Text(self.age)),
            phone: Some(self.phone),
            mail: Some(self.mail),
            role: Some(self.role),
            ..base
        }
    }
}
