use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use crate::domain::dashboard::WEEKLY_ACTIVITY;
use crate::terminal::cards::{EMAIL_CARD_HEIGHT, EmailCard, STAT_CARD_HEIGHT, StatCard};
use crate::terminal::state::DashboardState;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const CHART_HEIGHT: u16 = 12;
const BAR_COLOR: Color = Color::Rgb(59, 130, 246);

pub fn render(f: &mut Frame, state: &DashboardState) {
    if state.is_loading() {
        render_loading(f, state);
    } else {
        render_dashboard(f, state);
    }
}

fn render_loading(f: &mut Frame, state: &DashboardState) {
    let [area] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(f.area());

    let spinner = SPINNER[state.spinner_tick % SPINNER.len()];
    let p = Paragraph::new(vec![
        Line::from(Span::styled(spinner, Style::default().fg(BAR_COLOR))),
        Line::default(),
        Line::from(Span::styled(
            "Loading your email intelligence...",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);

    f.render_widget(p, area);
}

fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let [header, stats, emails, chart, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(STAT_CARD_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(CHART_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Email Intelligence Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your AI-powered email insights",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(title, header);

    render_stats(f, state, stats);
    render_emails(f.buffer_mut(), state, emails);
    render_activity(f, chart);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" move  "),
        Span::styled("Home/End", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" jump  "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ]));
    f.render_widget(hint, footer);
}

fn render_stats(f: &mut Frame, state: &DashboardState, area: Rect) {
    let s = &state.stats;
    let cells: [Rect; 5] = Layout::horizontal([Constraint::Ratio(1, 5); 5]).areas(area);

    let cards = [
        StatCard::new("✉", "Total Emails", s.total_emails.to_string(), "blue"),
        StatCard::new("⚠", "Priority", s.priority_emails.to_string(), "red"),
        StatCard::new("↗", "Action Required", s.action_required.to_string(), "orange"),
        StatCard::new("◫", "Meetings", s.meetings.to_string(), "green"),
        StatCard::new("◷", "Time Saved", format!("{}h", s.time_saved), "purple"),
    ];

    for (card, cell) in cards.into_iter().zip(cells) {
        f.render_widget(card, cell);
    }
}

/// Stacks one card per visible email, scrolled so the selection stays on screen.
fn render_emails(buf: &mut Buffer, state: &DashboardState, area: Rect) {
    let block = Block::default()
        .title(" Priority Emails ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let emails = state.visible_emails();
    if emails.is_empty() {
        Paragraph::new(Span::styled(
            "No emails to show.",
            Style::default().fg(Color::DarkGray),
        ))
        .render(inner, buf);
        return;
    }

    let fits = usize::from((inner.height / EMAIL_CARD_HEIGHT).max(1));
    let selected = state.selected().unwrap_or(0);
    let offset = selected.saturating_sub(fits - 1);

    let mut y = inner.y;
    for (i, email) in emails.iter().enumerate().skip(offset).take(fits) {
        let height = EMAIL_CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let slot = Rect::new(inner.x, y, inner.width, height);
        EmailCard::new(email)
            .selected(state.selected() == Some(i))
            .render(slot, buf);
        y += height;
    }
}

fn render_activity(f: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = WEEKLY_ACTIVITY
        .iter()
        .map(|p| {
            Bar::default()
                .label(Line::from(p.name))
                .value(p.emails)
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Email Activity ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(BAR_COLOR))
        .value_style(Style::default().fg(Color::White).bg(BAR_COLOR))
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}
