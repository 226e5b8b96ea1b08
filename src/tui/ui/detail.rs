/*
[INPUT]:  Selected task from AppState
[OUTPUT]: Detail panel with title, schedule, status, and description
[POS]:    TUI UI selected-task detail rendering
[UPDATE]: When changing the detail layout
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;
use crate::tui::ui::modal::{DATE_FORMAT, TIME_FORMAT};

pub(in crate::tui) fn draw_task_detail(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Detail");

    let Some(task) = app.selected_task() else {
        let placeholder = Paragraph::new("Select a task to see its details").block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let status_style = if task.completed {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Title:       ", label_style),
            Span::raw(task.title.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Scheduled:   ", label_style),
            Span::raw(format!(
                "{} {}",
                task.date.format(DATE_FORMAT),
                task.time.format(TIME_FORMAT)
            )),
        ]),
        Line::from(vec![
            Span::styled("Status:      ", label_style),
            Span::styled(task.status_label(), status_style),
        ]),
        Line::from(""),
    ];

    if task.description.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no description)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled("Description:", label_style)));
        lines.push(Line::from(task.description.as_str()));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
