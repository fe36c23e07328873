//! Key routing.
//!
//! Global keys work on every tab; everything printable on the Query tab
//! goes into the question buffer, so all Query-tab actions sit behind a
//! control modifier or a non-text key.
//!
//! - Tab / BackTab      cycle views
//! - Ctrl+C, Ctrl+Q     quit
//! - Enter              submit (Query tab)
//! - Shift+Enter        literal line break (Query tab)
//! - Ctrl+L             clear answer area (Query tab)
//! - Ctrl+P             cycle product filter (Query tab)
//! - Up / Down          select evidence card (Query) or archive row
//! - Right / Left       expand / collapse the selected evidence card

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::state::{App, Tab};
use crate::ui::view::ARCHIVE_ROWS;

/// Handle one key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows terminals deliver both Press and Release.
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('l') if app.tab == Tab::Query => {
                app.clear_query();
                return;
            }
            KeyCode::Char('p') if app.tab == Tab::Query => {
                app.input.cycle_product();
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Tab => {
            app.tab = app.tab.next();
        }
        KeyCode::BackTab => {
            app.tab = app.tab.prev();
        }
        _ => match app.tab {
            Tab::Query => handle_query_keys(app, key),
            Tab::Archive => handle_archive_keys(app, key),
            Tab::Analytics | Tab::Settings => handle_static_keys(app, key),
        },
    }
}

fn handle_query_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.input.push_newline();
            } else {
                app.submit();
            }
        }
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Up => app.select_prev_card(),
        KeyCode::Down => app.select_next_card(),
        KeyCode::Right => {
            if !app.is_expanded(app.selected_card()) {
                app.toggle_selected_card();
            }
        }
        KeyCode::Left => {
            if app.is_expanded(app.selected_card()) {
                app.toggle_selected_card();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push_char(c);
        }
        _ => {}
    }
}

fn handle_archive_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.archive_row = app.archive_row.saturating_sub(1),
        KeyCode::Down => {
            if app.archive_row + 1 < ARCHIVE_ROWS.len() {
                app.archive_row += 1;
            }
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_static_keys(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::Transport;
    use crate::api::transport_fake::FakeTransport;
    use crate::api::AskClient;
    use crate::query::QueryState;

    const ANSWER: &str = r#"{"question": "q", "answer": "a", "sources": []}"#;

    fn app() -> (App, FakeTransport) {
        let fake = FakeTransport::with_response(ANSWER);
        let client =
            AskClient::with_transport("http://localhost:8000", Transport::Fake(fake.clone()));
        (App::new(client), fake)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_typed_chars_fill_buffer() {
        let (mut app, _) = app();
        for c in "why?".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.input.buffer(), "why?");
    }

    #[test]
    fn test_plain_enter_submits() {
        let (mut app, fake) = app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(app.controller.is_loading());
        assert_eq!(app.input.buffer(), "");
        // Worker is already spawned; let it settle before dropping.
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while app.controller.is_loading() && std::time::Instant::now() < deadline {
            app.on_tick();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(fake.request_count(), 1);
    }

    #[test]
    fn test_shift_enter_inserts_line_break() {
        let (mut app, fake) = app();
        handle_key_event(&mut app, press(KeyCode::Char('a')));
        handle_key_event(&mut app, press_with(KeyCode::Enter, KeyModifiers::SHIFT));
        handle_key_event(&mut app, press(KeyCode::Char('b')));
        assert_eq!(app.input.buffer(), "a\nb");
        assert_eq!(fake.request_count(), 0);
    }

    #[test]
    fn test_enter_on_blank_buffer_is_noop() {
        let (mut app, fake) = app();
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(*app.controller.state(), QueryState::Idle);
        assert_eq!(fake.request_count(), 0);
    }

    #[test]
    fn test_ctrl_l_clears() {
        let (mut app, _) = app();
        handle_key_event(
            &mut app,
            press_with(KeyCode::Char('l'), KeyModifiers::CONTROL),
        );
        assert_eq!(*app.controller.state(), QueryState::Idle);
        // Ctrl+L must not type an 'l'.
        assert_eq!(app.input.buffer(), "");
    }

    #[test]
    fn test_ctrl_p_cycles_filter_without_typing() {
        let (mut app, _) = app();
        handle_key_event(
            &mut app,
            press_with(KeyCode::Char('p'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.input.product(), Some("Credit card"));
        assert_eq!(app.input.buffer(), "");
    }

    #[test]
    fn test_tab_cycles_views() {
        let (mut app, _) = app();
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Analytics);
        handle_key_event(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::Query);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_tab() {
        let (mut app, _) = app();
        app.tab = Tab::Settings;
        handle_key_event(
            &mut app,
            press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_text_on_query_tab_but_quits_elsewhere() {
        let (mut app, _) = app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.input.buffer(), "q");

        app.tab = Tab::Analytics;
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_archive_row_selection_stays_in_bounds() {
        let (mut app, _) = app();
        app.tab = Tab::Archive;
        for _ in 0..20 {
            handle_key_event(&mut app, press(KeyCode::Down));
        }
        assert_eq!(app.archive_row, ARCHIVE_ROWS.len() - 1);
        for _ in 0..20 {
            handle_key_event(&mut app, press(KeyCode::Up));
        }
        assert_eq!(app.archive_row, 0);
    }

    #[test]
    fn test_release_events_ignored() {
        let (mut app, _) = app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert_eq!(app.input.buffer(), "");
    }
}
