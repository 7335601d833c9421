//! Data models for the employee directory

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Wire format for `date_of_joining`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Department an employee belongs to.
///
/// The form only offers the four known values. A list row may carry any other
/// string, which is kept as `Other` so the row still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Department {
    Hr,
    Engineering,
    Marketing,
    ResearchAndDevelopment,
    Other(String),
}

impl Department {
    /// Values offered by the department selector
    pub const ALL: [Department; 4] = [
        Department::Hr,
        Department::Engineering,
        Department::Marketing,
        Department::ResearchAndDevelopment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::ResearchAndDevelopment => "R&D",
            Department::Other(name) => name.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Department::Other(_))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one of the four known values only
impl FromStr for Department {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_string(deserializer)?;
        Ok(raw.parse().unwrap_or(Department::Other(raw)))
    }
}

/// Employee record as exchanged with the API.
///
/// Decoding is lenient: a missing or `null` text field reads as empty, a
/// number reads as its decimal text and an unusable joining date reads as
/// `None`. Records built from the form always carry a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: String,
    #[serde(default = "unknown_department")]
    pub department: Department,
    #[serde(default, deserialize_with = "deserialize_joining_date")]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
}

fn unknown_department() -> Department {
    Department::Other(String::new())
}

/// Reads a string, a number or a bool as text; `null` reads as empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Accepts `YYYY-MM-DD` as well as full ISO timestamps some backends return
/// for date columns (`2024-03-01T00:00:00.000Z`). Anything else is `None`.
fn deserialize_joining_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer)?;
    let date_part = raw.get(..10).unwrap_or(&raw);
    Ok(NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok())
}

/// `{ "message": ... }` body returned by every mutation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Form input addressed by the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    EmployeeId,
    Email,
    PhoneNumber,
    Department,
    DateOfJoining,
    Role,
}

impl Field {
    /// Fields in the order the form renders them
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::EmployeeId,
        Field::Email,
        Field::PhoneNumber,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::EmployeeId => "employee_id",
            Field::Email => "email",
            Field::PhoneNumber => "phone_number",
            Field::Department => "department",
            Field::DateOfJoining => "date_of_joining",
            Field::Role => "role",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Jane Doe",
            Field::EmployeeId => "Up to 10 characters",
            Field::Email => "jane@example.com",
            Field::PhoneNumber => "10 digits",
            Field::Department => "Select your Department",
            Field::DateOfJoining => "YYYY-MM-DD",
            Field::Role => "Software Engineer",
        }
    }
}

/// Form values bound to the inputs, kept as raw text until submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl FormDraft {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name.clone(),
            employee_id: record.employee_id.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            department: record.department.as_str().to_string(),
            date_of_joining: record
                .date_of_joining
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            role: record.role.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::EmployeeId => &self.employee_id,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Department => &self.department,
            Field::DateOfJoining => &self.date_of_joining,
            Field::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::EmployeeId => &mut self.employee_id,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Department => &mut self.department,
            Field::DateOfJoining => &mut self.date_of_joining,
            Field::Role => &mut self.role,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Whether a submit creates a new record or updates an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing the record with this identifier; the identifier input is locked
    Update { employee_id: String },
}

impl FormMode {
    pub fn is_update(&self) -> bool {
        matches!(self, FormMode::Update { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Employee",
            FormMode::Update { .. } => "Update Employee",
        }
    }
}

/// Success and error banners shown above the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Banner {
    pub fn clear(&mut self) {
        self.message = None;
        self.error = None;
    }
}
