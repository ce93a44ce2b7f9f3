//! Country list rendering
//!
//! Draws the header, controls line, country table, pagination bar, and
//! status line. All data comes from the pipeline output; this layer never
//! mutates application state.

pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::pipeline::PageView;
use crate::view_state::SortOrder;

use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SELECTED};

/// Render the full screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Controls (page size | sort | filter)
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Country table
            Constraint::Length(1), // Pagination bar
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let page = app.page();

    render_header(frame, chunks[0]);
    render_controls(frame, chunks[1], app);
    match &page {
        Ok(view) => render_table(frame, chunks[3], view, app.selected_row),
        Err(_) => render_table(frame, chunks[3], &PageView::empty(), 0),
    }
    if let Ok(view) = &page {
        render_pagination(frame, chunks[4], app.view.current_page, view.total_pages);
    }
    render_status(frame, chunks[5], app, &page);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Country List",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let arrow = match app.view.sort_order {
        SortOrder::Ascending => "↑",
        SortOrder::Descending => "↓",
    };
    let line = Line::from(vec![
        Span::styled("per page ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("{}", app.view.page_size),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled("  sort by name ", Style::default().fg(COLOR_DIM)),
        Span::styled(arrow, Style::default().fg(COLOR_ACCENT)),
        Span::styled("  filter ", Style::default().fg(COLOR_DIM)),
        Span::styled(app.view.filter.label(), Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(frame: &mut Frame, area: Rect, page: &PageView, selected_row: usize) {
    let header = Row::new(vec!["Name", "Region", "Area"]).style(
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::UNDERLINED),
    );

    let rows = page.rows.iter().enumerate().map(|(i, country)| {
        let area_text = match country.area {
            Some(a) => format!("{}", a),
            None => "—".to_string(),
        };
        let style = if i == selected_row {
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        Row::new(vec![
            Cell::from(country.name.clone()),
            Cell::from(country.region.clone()),
            Cell::from(area_text),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header);

    frame.render_widget(table, area);
}

fn render_pagination(frame: &mut Frame, area: Rect, current_page: usize, total_pages: usize) {
    if total_pages == 0 {
        return;
    }
    let mut spans = Vec::new();
    for page in 1..=total_pages {
        let style = if page == current_page {
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    page: &Result<PageView, crate::pipeline::PipelineError>,
) {
    let line = if app.loading {
        Line::from(Span::styled("loading…", Style::default().fg(COLOR_DIM)))
    } else if app.fetch_failed {
        Line::from(Span::styled(
            "fetch failed, showing an empty list (r to retry)",
            Style::default().fg(COLOR_ERROR),
        ))
    } else if let Err(e) = page {
        Line::from(Span::styled(
            format!("{}", e),
            Style::default().fg(COLOR_ERROR),
        ))
    } else {
        Line::from(Span::styled(
            "q quit  s sort  f filter  p page size  ←/→ page  ↑/↓ select  r refetch",
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
