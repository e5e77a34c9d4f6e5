use crate::application::{App, AppMode};
use crate::domain::ProjectStatus;
use crate::infrastructure::CsvExporter;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Editing => Self::handle_editing_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::ExportCsv => Self::handle_filename_input_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('e') = key {
                app.start_csv_export();
            }
            return;
        }

        match key {
            KeyCode::Char('i') | KeyCode::Enter => {
                app.start_editing();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                app.toggle_list_focus();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.focus_list(ProjectStatus::Active);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.focus_list(ProjectStatus::Finished);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next();
            }
            KeyCode::Char(' ') => {
                app.toggle_drag();
            }
            KeyCode::Char('m') => {
                app.move_selected();
            }
            KeyCode::Esc => {
                app.cancel_drag();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.submit_form();
            }
            KeyCode::Esc => {
                app.stop_editing();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.form.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.form.focus_previous();
            }
            KeyCode::Backspace => {
                app.form.backspace();
            }
            KeyCode::Delete => {
                app.form.delete();
            }
            KeyCode::Left => {
                app.form.move_cursor_left();
            }
            KeyCode::Right => {
                app.form.move_cursor_right();
            }
            KeyCode::Home => {
                app.form.move_cursor_home();
            }
            KeyCode::End => {
                app.form.move_cursor_end();
            }
            KeyCode::Char(c) => {
                app.form.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_filename_input_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_csv_export_filename();
                let result = CsvExporter::export_projects(app.store.projects(), &filename);
                app.set_csv_export_result(result);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                if let Some(idx) = previous_boundary(&app.filename_input, app.filename_cursor) {
                    app.filename_input.remove(idx);
                    app.filename_cursor = idx;
                }
            }
            KeyCode::Delete => {
                if app.filename_cursor < app.filename_input.len() {
                    app.filename_input.remove(app.filename_cursor);
                }
            }
            KeyCode::Left => {
                if let Some(idx) = previous_boundary(&app.filename_input, app.filename_cursor) {
                    app.filename_cursor = idx;
                }
            }
            KeyCode::Right => {
                let next = app.filename_input[app.filename_cursor..].chars().next().map(char::len_utf8);
                if let Some(width) = next {
                    app.filename_cursor += width;
                }
            }
            KeyCode::Home => {
                app.filename_cursor = 0;
            }
            KeyCode::End => {
                app.filename_cursor = app.filename_input.len();
            }
            KeyCode::Char(c) => {
                app.filename_input.insert(app.filename_cursor, c);
                app.filename_cursor += c.len_utf8();
            }
            _ => {}
        }
    }
}

/// Byte index of the char just before `cursor`, if any.
fn previous_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[..cursor].char_indices().next_back().map(|(idx, _)| idx)
}
