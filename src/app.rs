//! Employee form & list view

use std::sync::Arc;

use gpui::{
    div, AppContext as _, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::input::{InputEvent, InputState as GpuiInputState};

use employee_directory::{ApiClient, EmployeeApi, EmployeePanel, Field};

use crate::theme::DirectoryTheme;

/// Fields edited through a text input; department uses a selector
pub const TEXT_FIELDS: [Field; 6] = [
    Field::Name,
    Field::EmployeeId,
    Field::Email,
    Field::PhoneNumber,
    Field::DateOfJoining,
    Field::Role,
];

/// Main application state
pub struct App {
    pub theme: DirectoryTheme,
    pub panel: EmployeePanel,

    // API client
    pub api: Arc<dyn EmployeeApi>,
    pub api_base_url: String,

    // One input per text field, in form order
    pub inputs: Vec<(Field, Entity<GpuiInputState>)>,
    /// Draft revision last pushed into the inputs
    pub synced_revision: u64,
}

impl App {
    pub fn new(window: &mut Window, cx: &mut Context<Self>, api_client: ApiClient) -> Self {
        let api_base_url = api_client.get_base_url().to_string();

        let mut inputs = Vec::with_capacity(TEXT_FIELDS.len());
        for field in TEXT_FIELDS {
            let input_state =
                cx.new(|cx| GpuiInputState::new(window, cx).placeholder(field.placeholder()));

            cx.subscribe_in(
                &input_state,
                window,
                move |this, input_state: &Entity<GpuiInputState>, event: &InputEvent, _window, cx| {
                    match event {
                        InputEvent::Change { .. } => {
                            let value = input_state.read(cx).value().to_string();
                            this.panel.set_field(field, value);
                            cx.notify();
                        }
                        InputEvent::PressEnter { .. } => this.handle_submit(cx),
                        _ => {}
                    }
                },
            )
            .detach();

            inputs.push((field, input_state));
        }

        Self {
            theme: DirectoryTheme::new(),
            panel: EmployeePanel::new(),
            api: Arc::new(api_client),
            api_base_url,
            inputs,
            synced_revision: 0,
        }
    }

    /// Load the list once the view is mounted
    pub fn initialize(&mut self, cx: &mut Context<Self>) {
        self.reload_employees(cx);
    }

    pub fn focus_first_input(&self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some((_, input_state)) = self.inputs.first() {
            input_state.update(cx, |state, cx| {
                state.focus(window, cx);
            });
        }
    }

    /// Push the draft into the inputs after edit, reset or a successful submit
    fn sync_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let revision = self.panel.draft_revision();
        if revision == self.synced_revision {
            return;
        }
        self.synced_revision = revision;

        for (field, input_state) in &self.inputs {
            let value = self.panel.draft().get(*field).to_string();
            input_state.update(cx, |state, cx| {
                state.set_value(value, window, cx);
            });
        }
    }
}

impl Render for App {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_inputs(window, cx);
        let theme = &self.theme;

        div()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_header())
            .child(
                div()
                    .id("directory-content")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(self.render_banners())
                    .child(self.render_form(cx))
                    .child(self.render_employee_table(cx)),
            )
    }
}
