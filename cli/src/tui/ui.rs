use curriculum_core::service::dto::{PhaseView, WeekCard};
use curriculum_core::{AppDataRepository, Theme, WeekStatus, TOTAL_WEEKS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::tui::app::App;

struct Palette {
    primary: Color,
    muted: Color,
    text: Color,
}

const DARK: Palette = Palette {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
};

const LIGHT: Palette = Palette {
    primary: Color::Blue,
    muted: Color::Gray,
    text: Color::Black,
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

fn status_color(status: WeekStatus) -> Color {
    match status {
        WeekStatus::Completed => Color::Green,
        WeekStatus::InProgress => Color::Blue,
        WeekStatus::Behind => Color::Red,
        WeekStatus::NotStarted => Color::DarkGray,
    }
}

fn rounded(title: &str, p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.muted))
        .title(format!(" {} ", title))
}

pub fn draw<R: AppDataRepository>(frame: &mut Frame, app: &App<R>) {
    let p = palette(app.theme);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title + tabs
            Constraint::Length(4), // Summary
            Constraint::Min(12),   // Week cards
            Constraint::Length(5), // Notes
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    draw_header(frame, app, p, main_layout[0]);
    draw_summary(frame, app, p, main_layout[1]);

    match app.current_phase() {
        Some(phase) => draw_phase(frame, app, phase, p, main_layout[2]),
        None => frame.render_widget(
            Paragraph::new("No curriculum loaded").alignment(Alignment::Center),
            main_layout[2],
        ),
    }

    draw_notes(frame, app, p, main_layout[3]);
    draw_footer(frame, app, p, main_layout[4]);
}

fn draw_header<R: AppDataRepository>(frame: &mut Frame, app: &App<R>, p: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "DEVOPS CURRICULUM",
        Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let titles: Vec<Line> = app
        .phases
        .iter()
        .map(|phase| Line::from(format!("Phase {}: {}", phase.phase, phase.name)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.phase_index)
        .style(Style::default().fg(p.muted))
        .highlight_style(Style::default().fg(p.primary).add_modifier(Modifier::BOLD))
        .divider("|");
    frame.render_widget(tabs, chunks[1]);
}

fn draw_summary<R: AppDataRepository>(frame: &mut Frame, app: &App<R>, p: &Palette, area: Rect) {
    let s = &app.summary;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stat = |label: &str, value: String, detail: String| {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(p.muted))),
        ])
        .block(rounded(label, p).padding(Padding::horizontal(1)))
    };

    frame.render_widget(
        stat(
            "Total Hours",
            format!("{:.1}h", s.total_hours),
            format!("of {:.0}h", s.total_target_hours),
        ),
        chunks[0],
    );
    frame.render_widget(
        stat(
            "Current Week",
            format!("Week {}", s.current_week),
            format!("of {}", TOTAL_WEEKS),
        ),
        chunks[1],
    );

    let overall = Gauge::default()
        .block(rounded("Overall Progress", p))
        .gauge_style(Style::default().fg(p.primary))
        .ratio((s.overall_progress / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", s.overall_progress));
    frame.render_widget(overall, chunks[2]);

    frame.render_widget(
        stat(
            "This Week",
            format!("{:.1}h", s.hours_this_week),
            format!("target {:.1}h", s.target_hours_per_week),
        ),
        chunks[3],
    );
}

fn draw_phase<R: AppDataRepository>(
    frame: &mut Frame,
    app: &App<R>,
    phase: &PhaseView,
    p: &Palette,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            phase.description.as_str(),
            Style::default().fg(p.muted),
        )),
        chunks[0],
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);

    for (row_index, row_cards) in phase.weeks.chunks(3).enumerate() {
        let Some(row_area) = rows.get(row_index) else {
            break;
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

        for (col_index, card) in row_cards.iter().enumerate() {
            let selected = row_index * 3 + col_index == app.week_index;
            draw_week_card(frame, card, selected, p, cols[col_index]);
        }
    }
}

fn draw_week_card(frame: &mut Frame, card: &WeekCard, selected: bool, p: &Palette, area: Rect) {
    let color = status_color(card.status);
    let border_style = if selected {
        Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(border_style)
        .title(Line::from(vec![
            Span::styled(format!(" Week {} ", card.week), Style::default().fg(p.text)),
            Span::styled(format!("{} ", card.status), Style::default().fg(color)),
        ]));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Topic
            Constraint::Length(1), // Hours
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Days left
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            card.topic.as_str(),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        )),
        lines[0],
    );
    frame.render_widget(
        Paragraph::new(format!(
            "{:.1}h / {:.1}h",
            card.studied_hours, card.target_hours
        ))
        .style(Style::default().fg(p.muted)),
        lines[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio((card.progress_percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", card.progress_percent));
    frame.render_widget(gauge, lines[2]);

    if card.status == WeekStatus::InProgress {
        frame.render_widget(
            Paragraph::new(format!("{} days left", card.days_left))
                .style(Style::default().fg(p.muted)),
            lines[3],
        );
    }
}

fn draw_notes<R: AppDataRepository>(frame: &mut Frame, app: &App<R>, p: &Palette, area: Rect) {
    let title = match app.selected_card() {
        Some(card) => format!("Week {} Reflection", card.week),
        None => "Reflection".to_string(),
    };
    let text = match app.selected_notes() {
        Some(notes) => Span::styled(notes, Style::default().fg(p.text)),
        None => Span::styled(
            "No reflection yet. Add one with `curriculum note set <week> ...`",
            Style::default().fg(p.muted),
        ),
    };
    let notes = Paragraph::new(Line::from(text))
        .wrap(Wrap { trim: true })
        .block(rounded(&title, p).padding(Padding::horizontal(1)));
    frame.render_widget(notes, area);
}

fn draw_footer<R: AppDataRepository>(frame: &mut Frame, app: &App<R>, p: &Palette, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(p.text));
    let label = |l: &'static str| Span::styled(l, Style::default().fg(p.muted));

    let mut spans = vec![
        label("PHASE: "),
        key("←/→  "),
        label("WEEK: "),
        key("j/k  "),
        label("CURRENT: "),
        key("c  "),
        label("THEME: "),
        key("t  "),
        label("RELOAD: "),
        key("r  "),
        label("QUIT: "),
        key("q"),
    ];
    if let Some(message) = &app.message {
        spans.push(Span::styled(
            format!("   {}", message),
            Style::default().fg(p.primary),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
