//! Header component for the employee directory

use gpui::{div, prelude::FluentBuilder, FontWeight, IntoElement, ParentElement, Styled};

use crate::app::App;

impl App {
    pub fn render_header(&self) -> impl IntoElement {
        let theme = &self.theme;
        let count = self.panel.employees().len();
        let submitting = self.panel.is_submitting();

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(theme.surface)
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.primary)
                            .child("Employee Management System"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(self.api_base_url.clone()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .when(submitting, |el| {
                        el.child(
                            div()
                                .flex()
                                .items_center()
                                .gap_1()
                                .child(div().w_2().h_2().rounded_full().bg(theme.edit))
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(theme.foreground_dim)
                                        .child("Saving..."),
                                ),
                        )
                    })
                    .child(
                        div()
                            .px_2()
                            .py_px()
                            .rounded_full()
                            .bg(theme.primary.opacity(0.2))
                            .text_xs()
                            .text_color(theme.primary)
                            .child(match count {
                                1 => "1 employee".to_string(),
                                n => format!("{n} employees"),
                            }),
                    ),
            )
    }
}
