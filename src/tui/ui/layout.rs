/*
[INPUT]:  Current tab and filter selections
[OUTPUT]: Tab bar and filter bar rendered into the frame
[POS]:    TUI UI selector bars
[UPDATE]: When changing tabs or filter options
*/

use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::tui::app::{Filter, Tab};
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = vec![Line::from("Tasks"), Line::from("Logs")];
    let selected = match current_tab {
        Tab::Tasks => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tabs"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

pub(in crate::tui) fn draw_filter_bar(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    filter: Filter,
) {
    let options = [Filter::All, Filter::Pending, Filter::Completed];
    let titles: Vec<Line> = options
        .iter()
        .map(|option| Line::from(option.label()))
        .collect();
    let selected = options
        .iter()
        .position(|option| *option == filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Filter"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}
