//! Employee Directory - desktop form and list over the employee REST API
//!
//! Built with GPUI and Monokai Pro theme

mod app;
mod components;
mod handlers;
mod theme;

use anyhow::Result;
use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;

use employee_directory::{ApiClient, AppConfig};

use crate::app::App;

const WINDOW_TITLE: &str = "Employee Directory";
const WINDOW_WIDTH: f32 = 1100.;
const WINDOW_HEIGHT: f32 = 860.;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_directory=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let api_client = ApiClient::new(&config)?;
    tracing::info!(base_url = api_client.get_base_url(), "starting employee directory");

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(window, cx, api_client.clone()));

            // Fetch the list as soon as the view is mounted
            app_entity.update(cx, |app, cx| {
                app.initialize(cx);
                app.focus_first_input(window, cx);
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        if let Err(e) = opened {
            tracing::error!(error = %e, "failed to open window");
            cx.quit();
        }
    });

    Ok(())
}
