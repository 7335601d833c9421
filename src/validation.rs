//! Input constraints checked before a draft is sent.
//!
//! These mirror what a browser enforces for the form inputs: every field is
//! required, the identifier has a max length unless it is locked, the email must look like an
//! address, the phone must be exactly ten digits and the joining date may not
//! lie in the future.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;

use crate::models::{Department, EmployeeRecord, Field, FormDraft, FormMode, DATE_FORMAT};

pub const EMPLOYEE_ID_MAX_LEN: usize = 10;

// `\d` would also accept non-ASCII digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Please fill out this field.")]
    Missing,
    #[error("Please use at most {max} characters.")]
    TooLong { max: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Please select an item in the list.")]
    UnknownDepartment,
    #[error("Please enter a date as YYYY-MM-DD.")]
    InvalidDate,
    #[error("Value must be {max} or earlier.")]
    FutureDate { max: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.violation)
    }
}

/// All violations found in a draft, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn for_field(&self, field: Field) -> Option<&Violation> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.violation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: Field, violation: Violation) {
        self.0.push(FieldError { field, violation });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(first) => write!(f, "{first}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Latest joining date accepted right now: the current UTC date
pub fn latest_joining_date() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check a draft and turn it into a record ready to send.
///
/// Values go out as typed. The email is the exception: surrounding whitespace
/// is stripped the way an email input does. In update mode the identifier
/// input is locked, so it is not checked. `today` is the latest allowed
/// joining date.
pub fn validate(
    draft: &FormDraft,
    mode: &FormMode,
    today: NaiveDate,
) -> Result<EmployeeRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let id_locked = mode.is_update();
    let email = draft.email.trim();

    for field in Field::ALL {
        let value = match field {
            Field::EmployeeId if id_locked => continue,
            Field::Email => email,
            _ => draft.get(field),
        };
        if value.is_empty() {
            errors.push(field, Violation::Missing);
        }
    }

    if !id_locked && draft.employee_id.chars().count() > EMPLOYEE_ID_MAX_LEN {
        errors.push(
            Field::EmployeeId,
            Violation::TooLong {
                max: EMPLOYEE_ID_MAX_LEN,
            },
        );
    }

    if !email.is_empty() && !is_valid_email(email) {
        errors.push(Field::Email, Violation::InvalidEmail);
    }

    let phone = draft.phone_number.as_str();
    if !phone.is_empty() && !is_valid_phone(phone) {
        errors.push(Field::PhoneNumber, Violation::InvalidPhone);
    }

    let department = draft.department.as_str();
    let parsed_department = department.parse::<Department>().ok();
    if !department.is_empty() && parsed_department.is_none() {
        errors.push(Field::Department, Violation::UnknownDepartment);
    }

    let date = draft.date_of_joining.as_str();
    let parsed_date = if date.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Ok(d) if d > today => {
                errors.push(Field::DateOfJoining, Violation::FutureDate { max: today });
                None
            }
            Ok(d) => Some(d),
            Err(_) => {
                errors.push(Field::DateOfJoining, Violation::InvalidDate);
                None
            }
        }
    };

    // Keep form order so the first reported error matches the topmost input
    errors
        .0
        .sort_by_key(|e| Field::ALL.iter().position(|f| *f == e.field));

    match (parsed_department, parsed_date) {
        (Some(department), Some(date_of_joining)) if errors.is_empty() => Ok(EmployeeRecord {
            name: draft.name.clone(),
            employee_id: draft.employee_id.clone(),
            email: email.to_string(),
            phone_number: phone.to_string(),
            department,
            date_of_joining: Some(date_of_joining),
            role: draft.role.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_draft() -> FormDraft {
        FormDraft {
            name: "Grace Hopper".into(),
            employee_id: "E001".into(),
            email: "grace@navy.mil".into(),
            phone_number: "1234567890".into(),
            department: "Engineering".into(),
            date_of_joining: "2024-06-01".into(),
            role: "Rear Admiral".into(),
        }
    }

    #[test]
    fn valid_draft_becomes_record() {
        let record = validate(&valid_draft(), &FormMode::Create, today()).unwrap();
        assert_eq!(record.department, Department::Engineering);
        assert_eq!(record.date_of_joining, Some(today()));
        assert_eq!(record.phone_number, "1234567890");
    }

    #[test]
    fn values_are_sent_as_typed_except_email() {
        let mut draft = valid_draft();
        draft.name = "  Grace Hopper ".into();
        draft.email = " grace@navy.mil ".into();
        let record = validate(&draft, &FormMode::Create, today()).unwrap();
        assert_eq!(record.name, "  Grace Hopper ");
        assert_eq!(record.email, "grace@navy.mil");
    }

    #[test]
    fn whitespace_only_text_counts_as_filled() {
        let mut draft = valid_draft();
        draft.name = "   ".into();
        draft.role = " ".into();
        let record = validate(&draft, &FormMode::Create, today()).unwrap();
        assert_eq!(record.name, "   ");
        assert_eq!(record.role, " ");

        draft.email = "  ".into();
        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        assert_eq!(errors.for_field(Field::Email), Some(&Violation::Missing));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn phone_with_padding_is_rejected() {
        let mut draft = valid_draft();
        draft.phone_number = " 1234567890".into();
        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        assert_eq!(errors.for_field(Field::PhoneNumber), Some(&Violation::InvalidPhone));
    }

    #[test]
    fn locked_identifier_is_not_checked_in_update_mode() {
        let mut draft = valid_draft();
        draft.employee_id = "EMP-2021-0001".into();
        let mode = FormMode::Update {
            employee_id: "EMP-2021-0001".into(),
        };

        let record = validate(&draft, &mode, today()).unwrap();
        assert_eq!(record.employee_id, "EMP-2021-0001");

        draft.employee_id.clear();
        assert!(validate(&draft, &mode, today()).is_ok());

        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        assert_eq!(errors.for_field(Field::EmployeeId), Some(&Violation::Missing));
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut draft = valid_draft();
        draft.phone_number = "12345".into();
        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        assert_eq!(errors.for_field(Field::PhoneNumber), Some(&Violation::InvalidPhone));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn phone_pattern_is_ascii_and_exact() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("123456789a"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn empty_draft_reports_every_field_as_missing() {
        let errors = validate(&FormDraft::default(), &FormMode::Create, today()).unwrap_err();
        assert_eq!(errors.len(), Field::ALL.len());
        assert!(errors.iter().all(|e| e.violation == Violation::Missing));
        assert_eq!(errors.first().map(|e| e.field), Some(Field::Name));
    }

    #[test]
    fn employee_id_longer_than_ten_chars_is_rejected() {
        let mut draft = valid_draft();
        draft.employee_id = "E0123456789".into();
        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        assert_eq!(
            errors.for_field(Field::EmployeeId),
            Some(&Violation::TooLong { max: 10 })
        );
    }

    #[test]
    fn future_joining_date_is_rejected() {
        let mut draft = valid_draft();
        draft.date_of_joining = "2024-06-02".into();
        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        assert_eq!(
            errors.for_field(Field::DateOfJoining),
            Some(&Violation::FutureDate { max: today() })
        );
    }

    #[test]
    fn malformed_values_are_reported_in_form_order() {
        let mut draft = valid_draft();
        draft.date_of_joining = "01/06/2024".into();
        draft.department = "Sales".into();
        draft.email = "not-an-email".into();
        let errors = validate(&draft, &FormMode::Create, today()).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Email, Field::Department, Field::DateOfJoining]
        );
        assert_eq!(
            errors.to_string(),
            "Email: Please enter a valid email address."
        );
    }

    #[test]
    fn latest_joining_date_is_the_utc_date() {
        let before = Utc::now().date_naive();
        let limit = latest_joining_date();
        let after = Utc::now().date_naive();
        assert!(limit == before || limit == after);
    }
}
