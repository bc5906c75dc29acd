use std::fmt::Write;

use portal_auth::Controller;
use portal_db::KeyValueStore;
use portal_types::view::ViewState;

/// Plain-text rendering of whatever the controller is showing.
pub fn render<S: KeyValueStore>(app: &mut Controller<S>) -> String {
    let mut out = String::new();

    if let Some(notice) = app.take_notice() {
        let _ = writeln!(out, "* {}", notice);
    }

    match app.view() {
        ViewState::Home => {
            let name = app.current_user().map(|u| u.username.as_str()).unwrap_or("");
            let _ = writeln!(out, "Hello, {}", name);
            let _ = writeln!(out, "== {} ==", ViewState::Home.title());
            let _ = writeln!(out, "This is your personal home page. (logout to leave)");
        }
        view => {
            let _ = writeln!(out, "== {} ==", view.title());
            let _ = writeln!(out, "username: {}", app.username());
            let _ = writeln!(out, "password: {}", "*".repeat(app.password().chars().count()));
            if let Some(error) = app.error() {
                let _ = writeln!(out, "! {}", error);
            }
            let hint = match view {
                ViewState::Register => "already have an account? type `switch` to sign in",
                _ => "no account yet? type `switch` to register",
            };
            let _ = writeln!(out, "{}", hint);
        }
    }

    out
}
