/*
[INPUT]:  AppState visible task list and list selection state
[OUTPUT]: Task list rendered into the frame
[POS]:    TUI UI task list rendering
[UPDATE]: When changing task row formatting or highlight style
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;
use crate::tui::ui::modal::{DATE_FORMAT, TIME_FORMAT};

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let items = if app.visible.is_empty() {
        vec![ListItem::new("No tasks to show")]
    } else {
        app.visible
            .iter()
            .map(|task| {
                let status_style = if task.completed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                let line = Line::from(vec![
                    Span::raw(format!(
                        "{} {}  ",
                        task.date.format(DATE_FORMAT),
                        task.time.format(TIME_FORMAT)
                    )),
                    Span::raw(task.title.as_str()),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", task.status_label()), status_style),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let title = format!("Tasks ({})", app.filter.label());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}
