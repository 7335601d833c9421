//! Employee list table

use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, Hsla, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use employee_directory::{EmployeeRecord, FormMode};

use crate::app::App;

const COLUMNS: [&str; 6] = ["Name", "Employee ID", "Email", "Phone", "Department", "Role"];
const ACTIONS_WIDTH: f32 = 150.;

fn cell(content: impl Into<SharedString>, color: Hsla) -> impl IntoElement {
    div()
        .flex_1()
        .min_w(px(0.))
        .overflow_hidden()
        .text_sm()
        .text_color(color)
        .child(content.into())
}

impl App {
    pub fn render_employee_table(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let employees = self.panel.employees();
        let editing = match self.panel.mode() {
            FormMode::Update { employee_id } => Some(employee_id.as_str()),
            FormMode::Create => None,
        };

        div()
            .w_full()
            .rounded_lg()
            .overflow_hidden()
            .border_1()
            .border_color(theme.border)
            .child(
                div()
                    .px_3()
                    .py_2()
                    .bg(theme.surface_raised)
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("Employee List"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_3()
                    .py_2()
                    .bg(theme.surface)
                    .border_b_1()
                    .border_color(theme.border)
                    .font_weight(FontWeight::MEDIUM)
                    .children(COLUMNS.map(|title| cell(title, theme.foreground_dim)))
                    .child(
                        div()
                            .w(px(ACTIONS_WIDTH))
                            .text_sm()
                            .text_color(theme.foreground_dim)
                            .child("Actions"),
                    ),
            )
            .when(employees.is_empty(), |el| {
                el.child(
                    div()
                        .px_3()
                        .py_2()
                        .text_sm()
                        .text_color(theme.foreground_muted)
                        .child("No employees"),
                )
            })
            .children(employees.iter().enumerate().map(|(i, employee)| {
                let is_last = i == employees.len() - 1;
                let is_editing = editing == Some(employee.employee_id.as_str());
                self.render_employee_row(employee, is_last, is_editing, cx)
            }))
    }

    fn render_employee_row(
        &self,
        employee: &EmployeeRecord,
        is_last: bool,
        is_editing: bool,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;
        let edit_id = employee.employee_id.clone();
        let delete_id = employee.employee_id.clone();

        div()
            .id(SharedString::from(format!("employee-{}", employee.employee_id)))
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_2()
            .when(is_editing, |el| el.bg(theme.locked.opacity(0.1)))
            .when(!is_last, |el| el.border_b_1().border_color(theme.border))
            .hover(|style| style.bg(theme.surface_raised))
            .child(cell(employee.name.clone(), theme.foreground))
            .child(cell(employee.employee_id.clone(), theme.foreground))
            .child(cell(employee.email.clone(), theme.foreground))
            .child(cell(employee.phone_number.clone(), theme.foreground))
            .child(cell(employee.department.to_string(), theme.foreground))
            .child(cell(employee.role.clone(), theme.foreground))
            .child(
                div()
                    .w(px(ACTIONS_WIDTH))
                    .flex()
                    .gap_2()
                    .child(
                        div()
                            .id(SharedString::from(format!("edit-{}", employee.employee_id)))
                            .cursor_pointer()
                            .px_3()
                            .py_1()
                            .rounded(px(6.))
                            .bg(theme.edit)
                            .text_sm()
                            .text_color(theme.background)
                            .hover(|style| style.bg(theme.edit.opacity(0.8)))
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.handle_edit(&edit_id, cx);
                            }))
                            .child("Edit"),
                    )
                    .child(
                        div()
                            .id(SharedString::from(format!("delete-{}", employee.employee_id)))
                            .cursor_pointer()
                            .px_3()
                            .py_1()
                            .rounded(px(6.))
                            .bg(theme.danger)
                            .text_sm()
                            .text_color(theme.background)
                            .hover(|style| style.bg(theme.danger.opacity(0.8)))
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.handle_delete(delete_id.clone(), cx);
                            }))
                            .child("Delete"),
                    ),
            )
    }
}
