//! State behind the employee form and list.
//!
//! `EmployeePanel` owns the draft, the mode flag, the latest list snapshot and
//! the banners. It knows nothing about the UI toolkit. Every remote operation
//! is split into a `begin_*` step that decides what to send and a `finish_*`
//! step that applies the outcome, so the view can run the HTTP call on a
//! background executor in between. The `reload`/`submit`/`delete` helpers run
//! both halves synchronously against an [`EmployeeApi`].
//!
//! Two guards tighten the ordering of in-flight requests:
//!
//! * only one submit may be in flight at a time;
//! * list reloads carry a [`ReloadTicket`] and a result older than the newest
//!   one already applied is dropped, so a slow reload cannot replace a fresher
//!   list.

use chrono::NaiveDate;

use crate::api::{ApiResult, EmployeeApi};
use crate::models::{Banner, EmployeeRecord, Field, FormDraft, FormMode, MessageResponse};
use crate::validation::{self, ValidationErrors};

pub const FETCH_FAILED: &str = "Failed to fetch employee data.";
pub const SUBMIT_FAILED: &str = "Some error occurred.";
pub const DELETE_FAILED: &str = "Failed to delete employee.";

/// Sequence number handed out by [`EmployeePanel::begin_reload`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReloadTicket(u64);

/// A validated create or update ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(EmployeeRecord),
    Update {
        employee_id: String,
        record: EmployeeRecord,
    },
}

impl Mutation {
    pub fn send(&self, api: &dyn EmployeeApi) -> ApiResult<MessageResponse> {
        match self {
            Mutation::Create(record) => api.add_employee(record),
            Mutation::Update {
                employee_id,
                record,
            } => api.update_employee(employee_id, record),
        }
    }
}

/// Why a submit did not start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submit is already in progress")]
    InFlight,
    #[error("{0}")]
    Invalid(ValidationErrors),
}

#[derive(Debug, Default)]
pub struct EmployeePanel {
    draft: FormDraft,
    mode: FormMode,
    employees: Vec<EmployeeRecord>,
    banner: Banner,
    field_errors: ValidationErrors,
    submit_in_flight: bool,
    next_ticket: u64,
    applied_ticket: Option<ReloadTicket>,
    draft_revision: u64,
}

impl EmployeePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// Bumped whenever the draft is replaced from outside the inputs
    /// (edit, reset, successful submit); the view re-syncs its inputs on change.
    pub fn draft_revision(&self) -> u64 {
        self.draft_revision
    }

    /// The identifier input is locked while a record is being updated
    pub fn is_field_editable(&self, field: Field) -> bool {
        !(field == Field::EmployeeId && self.mode.is_update())
    }

    /// Apply a value typed into an input
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.is_field_editable(field) {
            return;
        }
        self.draft.set(field, value);
    }

    // ---- list ----

    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.next_ticket += 1;
        ReloadTicket(self.next_ticket)
    }

    /// Apply a list snapshot. Returns `false` when the result was stale and dropped.
    pub fn finish_reload(
        &mut self,
        ticket: ReloadTicket,
        result: ApiResult<Vec<EmployeeRecord>>,
    ) -> bool {
        if self.applied_ticket.is_some_and(|applied| ticket < applied) {
            tracing::debug!(?ticket, applied = ?self.applied_ticket, "dropping stale employee list");
            return false;
        }
        self.applied_ticket = Some(ticket);

        match result {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "employee list loaded");
                self.employees = employees;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch employee list");
                self.banner.error = Some(FETCH_FAILED.to_string());
            }
        }
        true
    }

    pub fn reload(&mut self, api: &dyn EmployeeApi) -> bool {
        let ticket = self.begin_reload();
        self.finish_reload(ticket, api.list_employees())
    }

    // ---- submit ----

    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<Mutation, SubmitBlocked> {
        if self.submit_in_flight {
            return Err(SubmitBlocked::InFlight);
        }

        self.banner.clear();

        let record = match validation::validate(&self.draft, &self.mode, today) {
            Ok(record) => record,
            Err(errors) => {
                self.banner.error = Some(errors.to_string());
                self.field_errors = errors.clone();
                return Err(SubmitBlocked::Invalid(errors));
            }
        };
        self.field_errors = ValidationErrors::default();
        self.submit_in_flight = true;

        let mutation = match &self.mode {
            FormMode::Create => Mutation::Create(record),
            FormMode::Update { employee_id } => Mutation::Update {
                employee_id: employee_id.clone(),
                record,
            },
        };
        tracing::info!(employee_id = %self.draft.employee_id, update = self.mode.is_update(), "submitting employee");
        Ok(mutation)
    }

    /// Apply the submit outcome. On success returns the ticket for the reload
    /// that should follow.
    pub fn finish_submit(&mut self, result: ApiResult<MessageResponse>) -> Option<ReloadTicket> {
        self.submit_in_flight = false;

        match result {
            Ok(response) => {
                self.banner.message = Some(response.message);
                self.clear_draft();
                Some(self.begin_reload())
            }
            Err(e) => {
                tracing::warn!(error = %e, "employee submit failed");
                self.banner.error = Some(
                    e.server_message()
                        .unwrap_or(SUBMIT_FAILED)
                        .to_string(),
                );
                None
            }
        }
    }

    pub fn submit(&mut self, api: &dyn EmployeeApi, today: NaiveDate) -> Result<(), SubmitBlocked> {
        let mutation = self.begin_submit(today)?;
        if let Some(ticket) = self.finish_submit(mutation.send(api)) {
            self.finish_reload(ticket, api.list_employees());
        }
        Ok(())
    }

    // ---- edit / reset ----

    /// Load a listed record into the draft and switch to update mode.
    /// Returns `false` if no listed record has this identifier.
    pub fn edit(&mut self, employee_id: &str) -> bool {
        let Some(record) = self.employees.iter().find(|e| e.employee_id == employee_id) else {
            return false;
        };
        tracing::debug!(employee_id, "editing employee");
        self.draft = FormDraft::from_record(record);
        self.mode = FormMode::Update {
            employee_id: record.employee_id.clone(),
        };
        self.field_errors = ValidationErrors::default();
        self.draft_revision += 1;
        true
    }

    pub fn reset(&mut self) {
        tracing::debug!("resetting employee form");
        self.clear_draft();
    }

    fn clear_draft(&mut self) {
        self.draft = FormDraft::default();
        self.mode = FormMode::Create;
        self.field_errors = ValidationErrors::default();
        self.draft_revision += 1;
    }

    // ---- delete ----

    /// Apply a delete outcome. On success returns the ticket for the reload
    /// that should follow.
    pub fn finish_delete(&mut self, employee_id: &str, result: ApiResult<MessageResponse>) -> Option<ReloadTicket> {
        match result {
            Ok(response) => {
                tracing::info!(employee_id, "employee deleted");
                self.banner.message = Some(response.message);
                Some(self.begin_reload())
            }
            Err(e) => {
                tracing::warn!(employee_id, error = %e, "employee delete failed");
                self.banner.error = Some(DELETE_FAILED.to_string());
                None
            }
        }
    }

    pub fn delete(&mut self, api: &dyn EmployeeApi, employee_id: &str) {
        let result = api.delete_employee(employee_id);
        if let Some(ticket) = self.finish_delete(employee_id, result) {
            self.finish_reload(ticket, api.list_employees());
        }
    }
}
