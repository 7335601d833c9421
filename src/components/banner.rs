//! Success and error banners

use gpui::{div, prelude::FluentBuilder, Hsla, IntoElement, ParentElement, Styled};

use crate::app::App;

impl App {
    pub fn render_banners(&self) -> impl IntoElement {
        let theme = &self.theme;
        let banner = self.panel.banner();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .when_some(banner.message.clone(), |el, message| {
                el.child(render_alert(message, theme.success))
            })
            .when_some(banner.error.clone(), |el, error| {
                el.child(render_alert(error, theme.danger))
            })
    }
}

fn render_alert(text: String, color: Hsla) -> impl IntoElement {
    div()
        .w_full()
        .px_4()
        .py_2()
        .rounded_lg()
        .bg(color.opacity(0.15))
        .border_1()
        .border_color(color)
        .text_sm()
        .text_color(color)
        .child(text)
}
