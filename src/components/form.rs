//! Employee form: labelled inputs, department selector and actions

use gpui::{
    div, prelude::FluentBuilder, px, AnyElement, Context, FontWeight, InteractiveElement,
    IntoElement, ParentElement, SharedString, StatefulInteractiveElement, Styled,
};
use gpui_component::input::Input;

use employee_directory::{Department, Field, FormMode};

use crate::app::App;

impl App {
    pub fn render_form(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let title = match self.panel.mode() {
            FormMode::Create => "New Employee".to_string(),
            FormMode::Update { employee_id } => format!("Editing {employee_id}"),
        };

        div()
            .w_full()
            .p_4()
            .rounded_lg()
            .bg(theme.surface)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .child(title),
            )
            .children(Field::ALL.into_iter().map(|field| self.render_field(field, cx)))
            .child(self.render_form_actions(cx))
    }

    fn render_field(&self, field: Field, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let hint = self
            .panel
            .field_errors()
            .for_field(field)
            .map(|violation| violation.to_string());

        let control: AnyElement = match field {
            Field::Department => self.render_department_selector(cx).into_any_element(),
            _ if !self.panel.is_field_editable(field) => div()
                .w_full()
                .px_3()
                .py_2()
                .rounded(px(6.))
                .bg(theme.surface_raised)
                .border_1()
                .border_color(theme.locked.opacity(0.5))
                .flex()
                .justify_between()
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.foreground_dim)
                        .child(self.panel.draft().get(field).to_string()),
                )
                .child(div().text_xs().text_color(theme.locked).child("locked"))
                .into_any_element(),
            _ => match self.input_for(field) {
                Some(input_state) => Input::new(input_state).into_any_element(),
                None => div().into_any_element(),
            },
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground_dim)
                    .child(field.label()),
            )
            .child(control)
            .when_some(hint, |el, hint| {
                el.child(div().text_xs().text_color(theme.danger).child(hint))
            })
    }

    fn input_for(&self, field: Field) -> Option<&gpui::Entity<gpui_component::input::InputState>> {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, input_state)| input_state)
    }

    fn render_department_selector(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let selected = self.panel.draft().department.parse::<Department>().ok();

        div()
            .flex()
            .items_center()
            .gap_2()
            .children(Department::ALL.into_iter().map(|department| {
                let is_selected = selected.as_ref() == Some(&department);
                let label = department.to_string();
                div()
                    .id(SharedString::from(format!("department-{label}")))
                    .px_3()
                    .py_1()
                    .rounded(px(6.))
                    .border_1()
                    .border_color(if is_selected { theme.primary } else { theme.border })
                    .bg(if is_selected {
                        theme.primary.opacity(0.2)
                    } else {
                        theme.surface_raised
                    })
                    .text_sm()
                    .text_color(if is_selected { theme.primary } else { theme.foreground })
                    .cursor_pointer()
                    .hover(|style| style.bg(theme.row_hover))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.handle_department(department.clone(), cx);
                    }))
                    .child(label)
            }))
            .when(selected.is_none(), |el| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(theme.foreground_muted)
                        .child(Field::Department.placeholder()),
                )
            })
    }

    fn render_form_actions(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let submitting = self.panel.is_submitting();

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .id("submit-employee")
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .bg(if submitting {
                        theme.foreground_muted
                    } else {
                        theme.primary
                    })
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.background)
                    .when(!submitting, |el| {
                        el.cursor_pointer()
                            .hover(|style| style.bg(theme.primary.opacity(0.8)))
                    })
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.handle_submit(cx);
                    }))
                    .child(if submitting {
                        "Saving..."
                    } else {
                        self.panel.mode().submit_label()
                    }),
            )
            .child(
                div()
                    .id("reset-employee")
                    .cursor_pointer()
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .bg(theme.surface_raised)
                    .text_sm()
                    .text_color(theme.foreground)
                    .hover(|style| style.bg(theme.row_hover))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.handle_reset(cx);
                    }))
                    .child("Reset"),
            )
    }
}
