use crate::application::{App, AppMode, FormField, ProjectList};
use crate::domain::ProjectStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_form(f, app, chunks[1]);
    render_lists(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "projdeck - Project Board | {} active | {} finished",
        app.active.borrow().len(),
        app.finished.borrow().len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = matches!(app.mode, AppMode::Editing);
    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let focused = editing && app.form.focus == field;
            let label_style = if focused {
                Style::default().fg(Color::Black).bg(Color::LightBlue)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Line::from(vec![
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::raw(" "),
                Span::raw(app.form.value(field).to_string()),
            ])
        })
        .collect();

    let border_style = if editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("New Project"),
    );
    f.render_widget(form, area);

    if editing {
        let row = FormField::ALL.iter().position(|&fd| fd == app.form.focus).unwrap_or(0);
        let typed = &app.form.value(app.form.focus)[..app.form.cursor_position];
        if let Some(position) = form_cursor_position(area, row, typed.chars().count()) {
            f.set_cursor_position(position);
        }
    }
}

/// Screen cell for the form cursor, or `None` when it falls outside `area`.
fn form_cursor_position(area: Rect, row: usize, typed_chars: usize) -> Option<(u16, u16)> {
    const LABEL_WIDTH: u16 = 13;
    let typed_width = u16::try_from(typed_chars).unwrap_or(u16::MAX);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1 + LABEL_WIDTH).saturating_add(typed_width);
    let y = area.y.saturating_add(1).saturating_add(row);
    (x < area.right() && y < area.bottom()).then_some((x, y))
}

fn render_lists(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (kind, column) in ProjectStatus::ALL.into_iter().zip(columns.iter()) {
        let list = app.list(kind).borrow();
        render_project_list(f, app, &list, *column);
    }
}

fn render_project_list(f: &mut Frame, app: &App, list: &ProjectList, area: Rect) {
    let focused = matches!(app.mode, AppMode::Normal) && app.focused_list == list.kind;
    let dragging = app.drag.as_ref();

    let items: Vec<ListItem> = list
        .projects
        .iter()
        .map(|project| {
            let held = dragging.is_some_and(|d| d.project_id == project.id);
            let title_style = if held {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(Span::styled(project.title.clone(), title_style)),
                Line::from(Span::styled(
                    format!("{} assigned", project.persons_label()),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(project.description.clone()),
            ])
        })
        .collect();

    // A held project turns the focused list into a drop target
    let border_style = match (focused, dragging) {
        (true, Some(_)) => Style::default().fg(Color::Magenta),
        (true, None) => Style::default().fg(Color::LightBlue),
        _ => Style::default(),
    };

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(list.title()),
        )
        .highlight_style(if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    if !list.is_empty() {
        state.select(Some(list.selected));
    }
    f.render_stateful_widget(widget, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if let Some(ref drag) = app.drag {
                format!("Holding a project from {} | Space: drop | Esc: cancel", drag.origin)
            } else {
                "i: new project | Tab/←→: switch list | Space: pick up/drop | m: move | Ctrl+E: export CSV | ?: help | q: quit".to_string()
            }
        }
        AppMode::Editing => match app.status_message {
            Some(ref status) => status.clone(),
            None => "Tab/↑↓: next field | Enter: add project | Esc: back to lists".to_string(),
        },
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::ExportCsv => format!("Export CSV as: {} (Enter to export, Esc to cancel)", app.filename_input),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("projdeck Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"PROJDECK PROJECT BOARD

=== ADDING PROJECTS ===
i or Enter      Open the New Project form
Tab / ↓         Next field
Shift+Tab / ↑   Previous field
Enter           Add the project (form stays open for the next one)
Esc             Back to the lists (typed text is kept)

Title           Required, 5-50 characters
Description     Optional, up to 100 characters
People          Required, a number from 1 to 9

New projects always start in ACTIVE PROJECTS.

=== MOVING PROJECTS ===
Space           Pick up the selected project
←→ / h l / Tab  Choose the target list (it lights up as a drop target)
Space           Drop the project onto the chosen list
Esc             Put the project back without moving it
m               Move the selected project straight to the other list

Dropping a project on the list it came from does nothing.

=== NAVIGATION ===
↑↓ or j/k       Select a project in the focused list
F1 or ?         Show this help
q               Quit

=== EXPORT ===
Ctrl+E          Export every project to a CSV file
                Columns: id, title, description, people, status

Projects live in memory only; export before quitting to keep a copy."#.to_string()
}
