//! User actions for the employee directory view.
//!
//! HTTP calls block, so each one runs on the background executor and the
//! outcome is handed back to the panel on the foreground.

use gpui::Context;

use employee_directory::{validation, Department, Field, ReloadTicket, SubmitBlocked};

use crate::app::App;

impl App {
    pub fn reload_employees(&mut self, cx: &mut Context<Self>) {
        let ticket = self.panel.begin_reload();
        self.fetch_employees(ticket, cx);
    }

    fn fetch_employees(&self, ticket: ReloadTicket, cx: &mut Context<Self>) {
        let api = self.api.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_executor().spawn(async move { api.list_employees() })
                .await;
            let _ = this.update(cx, |app, cx| {
                if app.panel.finish_reload(ticket, result) {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    pub fn handle_submit(&mut self, cx: &mut Context<Self>) {
        let today = validation::latest_joining_date();
        let mutation = match self.panel.begin_submit(today) {
            Ok(mutation) => mutation,
            Err(SubmitBlocked::InFlight) => return,
            Err(SubmitBlocked::Invalid(errors)) => {
                tracing::debug!(count = errors.len(), "employee form rejected");
                cx.notify();
                return;
            }
        };
        cx.notify();

        let api = self.api.clone();
        cx.spawn(async move |this, cx| {
            let result = cx
                .background_executor().spawn(async move { mutation.send(api.as_ref()) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if let Some(ticket) = app.panel.finish_submit(result) {
                    app.fetch_employees(ticket, cx);
                }
                cx.notify();
            });
        })
        .detach();
    }

    pub fn handle_edit(&mut self, employee_id: &str, cx: &mut Context<Self>) {
        if self.panel.edit(employee_id) {
            cx.notify();
        }
    }

    pub fn handle_reset(&mut self, cx: &mut Context<Self>) {
        self.panel.reset();
        cx.notify();
    }

    pub fn handle_department(&mut self, department: Department, cx: &mut Context<Self>) {
        self.panel.set_field(Field::Department, department.as_str());
        cx.notify();
    }

    pub fn handle_delete(&mut self, employee_id: String, cx: &mut Context<Self>) {
        let api = self.api.clone();
        cx.spawn(async move |this, cx| {
            let id = employee_id.clone();
            let result = cx
                .background_executor().spawn(async move { api.delete_employee(&id) })
                .await;
            let _ = this.update(cx, |app, cx| {
                if let Some(ticket) = app.panel.finish_delete(&employee_id, result) {
                    app.fetch_employees(ticket, cx);
                }
                cx.notify();
            });
        })
        .detach();
    }
}
