//! Dioxus web UI module

pub mod components;
pub mod theme;

use dioxus::prelude::*;
use glowbot_core::StatusRecord;

use crate::ui::components::StatusPanel;
use crate::ui::theme::inject_global_css;

/// Root page component
#[component]
pub fn App(statuses: Vec<StatusRecord>) -> Element {
    rsx! {
        {inject_global_css()}
        StatusPanel { statuses }
    }
}

/// Render the dashboard to a full HTML document
pub fn render_page(statuses: Vec<StatusRecord>) -> String {
    let mut vdom = VirtualDom::new_with_props(App, AppProps { statuses });
    vdom.rebuild_in_place();

    let body = dioxus_ssr::render(&vdom);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Glowbot Dashboard</title>
</head>
<body>
    <div id="main">
        {body}
    </div>
</body>
</html>"#
    )
}
