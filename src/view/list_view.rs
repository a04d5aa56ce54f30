use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::viewmodel::AppViewModel;

pub fn render(frame: &mut Frame, vm: &mut AppViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(0),     // List
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_list(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, vm: &AppViewModel, area: Rect) {
    let selected = vm
        .list()
        .selected_item()
        .map(|item| item.value.as_str())
        .unwrap_or("");

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(vm.position(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(selected, Style::default().fg(Color::Yellow)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("listbox"));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, vm: &mut AppViewModel, area: Rect) {
    let title = format!("{} ({} items)", vm.title(), vm.list().len());
    let block = vm.theme().block().title(title);
    let list = vm.list_mut();
    list.panel_mut().set_block(block);
    list.set_area(area);

    frame.render_widget(vm.list(), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)), Span::raw(" nav  "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)), Span::raw(" page  "),
        Span::styled("z", Style::default().fg(Color::Yellow)), Span::raw(" center  "),
        Span::styled("g", Style::default().fg(Color::Yellow)), Span::raw(" top  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)), Span::raw(" choose  "),
        Span::styled("q", Style::default().fg(Color::Yellow)), Span::raw(" quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
