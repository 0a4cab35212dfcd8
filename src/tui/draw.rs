use crate::tui::app::App;
use gridpath::analysis::summary::CostChange;
use gridpath::{NodeId, ShortestPaths};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let node_count = app.comparison().rows().len();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length((node_count + 3) as u16),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let traces = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_cost_table(app), chunks[2]);
    frame.render_widget(build_routes(app), chunks[3]);
    frame.render_widget(
        build_trace(" Standard trace ", app.comparison().standard(), app.step()),
        traces[0],
    );
    frame.render_widget(
        build_trace(" Power-aware trace ", app.comparison().power_aware(), app.step()),
        traces[1],
    );
    frame.render_widget(build_help(), chunks[5]);
}

fn fmt_cost(cost: f64) -> String {
    if cost.is_finite() {
        format!("{:>8.2}", cost)
    } else {
        format!("{:>8}", "inf")
    }
}

fn change_style(change: CostChange) -> Style {
    match change {
        CostChange::Cheaper => Style::default().fg(Color::Green),
        CostChange::Costlier => Style::default().fg(Color::Red),
        CostChange::Same => Style::default().add_modifier(Modifier::DIM),
        CostChange::Unreachable => Style::default().fg(Color::DarkGray),
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let seed = app
        .session()
        .seed()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "fixed".to_string());
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Gridpath ").style(Style::default().bold().cyan()),
            Span::raw("—").style(dim),
            Span::raw(" Seed: ").style(dim),
            Span::raw(seed).style(Style::default().bold()),
            Span::raw(" Source: ").style(dim),
            Span::raw(app.source().to_string()).style(Style::default().bold()),
            Span::raw(" Destination: ").style(dim),
            Span::raw(app.target().to_string()).style(Style::default().bold()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_cost_table(app: &'_ App) -> Table<'_> {
    let graph = app.session().power_aware();

    Table::new(
        app.comparison().rows().iter().map(|row| {
            let power = graph
                .node_by_id(row.node())
                .map(|n| format!("{:>6.2}", n.power()))
                .unwrap_or_default();
            let improvement = row
                .improvement_pct()
                .map(|p| format!("{:>7.1}%", p))
                .unwrap_or_else(|| format!("{:>8}", "-"));
            let marker = if row.node() == app.target() { "*" } else { "" };

            Row::new(vec![
                Cell::from(format!("{}{}", row.node(), marker)),
                Cell::from(power),
                Cell::from(fmt_cost(row.standard_cost())),
                Cell::from(fmt_cost(row.power_cost())),
                Cell::from(improvement).style(change_style(row.change())),
            ])
        }),
        [
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new([
            Cell::from("Node"),
            Cell::from(" Power"),
            Cell::from("Standard"),
            Cell::from("Power-aware"),
            Cell::from("  Change"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Path costs ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn route_line<'a>(label: &'a str, color: Color, run: &ShortestPaths, target: NodeId) -> Line<'a> {
    let route = match run.route_to(target) {
        Ok(route) => format!("{}  ({})", route, fmt_cost(route.cost).trim()),
        Err(e) => e.to_string(),
    };
    Line::from(vec![
        Span::raw(label).style(Style::default().fg(color)),
        Span::raw(route),
    ])
}

fn build_routes(app: &'_ App) -> Paragraph<'_> {
    let target = app.target();

    Paragraph::new(vec![
        route_line("standard    ", Color::LightBlue, app.comparison().standard(), target),
        route_line("power-aware ", Color::LightGreen, app.comparison().power_aware(), target),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::from(" Route ").style(Style::default().bold()))
            .padding(Padding::horizontal(1)),
    )
}

fn build_trace<'a>(title: &'a str, run: &'a ShortestPaths, step: usize) -> Paragraph<'a> {
    let trace = run.trace();
    let lines = match trace.get(step.min(trace.len().saturating_sub(1))) {
        Some(s) => {
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("Step {}/{}", s.step() + 1, trace.len())).bold(),
                Span::raw(format!("  visited {}", s.visited())),
                Span::raw(format!("  {:?}", run.elapsed())).style(Style::default().add_modifier(Modifier::DIM)),
            ])];
            lines.extend(s.distances().iter().map(|(id, d)| {
                let style = if id == s.visited() {
                    Style::default().bold().yellow()
                } else {
                    Style::default()
                };
                Line::from(Span::raw(format!("{:>4} {}", id, fmt_cost(d))).style(style))
            }));
            lines
        }
        None => vec![Line::from("no steps")],
    };

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::from(title).style(Style::default().bold()))
            .padding(Padding::horizontal(1)),
    )
}

fn build_help() -> Line<'static> {
    Line::from(
        " q quit  space/→ next step  ← prev step  s source  d destination  r regenerate ",
    )
    .style(Style::default().add_modifier(Modifier::DIM))
    .alignment(Alignment::Center)
}
