use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use dapp_form::form;
use crate::app::{App, FocusField};
use crate::tui::AppEvent;

const PAGE: u16 = 5;

pub fn handle_event(app: &mut App, event: AppEvent, events: &UnboundedSender<AppEvent>) {
    match event {
        AppEvent::Key(key) => handle_key(app, key, events),
        AppEvent::Paste(text) => app.insert_str(&text),
        AppEvent::Resize(_, _) => {}
        AppEvent::DeployResolved(text) => app.apply_deploy_response(text),
        AppEvent::RecommendResolved(text) => app.apply_recommend_response(text),
    }
}

fn handle_key(app: &mut App, key: KeyEvent, events: &UnboundedSender<AppEvent>) {
    // AltGr arrives as Ctrl+Alt on Windows and must still type characters
    let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    if shortcut {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('s') => submit_focused(app, events),
            KeyCode::Char('t') => app.insert_token_template(),
            KeyCode::Char('u') => app.clear_focused(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),

        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Up => app.cursor_up(),
        KeyCode::Down => app.cursor_down(),
        KeyCode::Home => app.cursor_line_start(),
        KeyCode::End => app.cursor_line_end(),

        KeyCode::PageDown => app.scroll_response_down(PAGE),
        KeyCode::PageUp => app.scroll_response_up(PAGE),

        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

/// Spawn the submit for the focused section. The result comes back as an
/// event; a later submit that resolves after an earlier one overwrites it.
fn submit_focused(app: &App, events: &UnboundedSender<AppEvent>) {
    let backend = app.backend.clone();
    let tx = events.clone();

    match app.focus {
        FocusField::TokenDraft => {
            let draft = app.form.token_draft.clone();
            tracing::info!(chars = draft.chars().count(), "submitting token deploy");
            tokio::spawn(async move {
                let text = form::deploy_token(&backend, &draft).await;
                let _ = tx.send(AppEvent::DeployResolved(text));
            });
        }
        FocusField::RecommendDraft => {
            let draft = app.form.recommend_draft.clone();
            tracing::info!(chars = draft.chars().count(), "requesting recommendations");
            tokio::spawn(async move {
                let text = form::request_recommendations(&backend, &draft).await;
                let _ = tx.send(AppEvent::RecommendResolved(text));
            });
        }
    }
}
