//! Presentational widgets for the dashboard: one stat tile and one email card.
//!
//! Both look their colors up in small fixed tables. A name that is not in the
//! table gets no styling rather than an error.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::domain::email::EmailSummary;

/// Rows taken by one [`EmailCard`], borders included.
pub const EMAIL_CARD_HEIGHT: u16 = 6;
/// Rows taken by one [`StatCard`], borders included.
pub const STAT_CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatColor {
    Blue,
    Red,
    Orange,
    Green,
    Purple,
}

impl StatColor {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blue" => Some(Self::Blue),
            "red" => Some(Self::Red),
            "orange" => Some(Self::Orange),
            "green" => Some(Self::Green),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }

    /// Accent used for the icon chip.
    pub fn theme(self) -> Style {
        let (bg, fg) = match self {
            Self::Blue => (Color::Rgb(219, 234, 254), Color::Rgb(37, 99, 235)),
            Self::Red => (Color::Rgb(254, 226, 226), Color::Rgb(220, 38, 38)),
            Self::Orange => (Color::Rgb(255, 237, 213), Color::Rgb(234, 88, 12)),
            Self::Green => (Color::Rgb(220, 252, 231), Color::Rgb(22, 163, 74)),
            Self::Purple => (Color::Rgb(243, 232, 255), Color::Rgb(147, 51, 234)),
        };
        Style::default().bg(bg).fg(fg)
    }
}

/// Badge style for a classifier priority label.
pub fn priority_style(priority: &str) -> Option<Style> {
    let (bg, fg) = match priority {
        "High" => (Color::Rgb(254, 226, 226), Color::Rgb(153, 27, 27)),
        "Medium" => (Color::Rgb(254, 249, 195), Color::Rgb(133, 77, 14)),
        "Low" => (Color::Rgb(220, 252, 231), Color::Rgb(22, 101, 52)),
        _ => return None,
    };
    Some(Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD))
}

#[derive(Debug, Clone)]
pub struct StatCard<'a> {
    icon: &'a str,
    title: &'a str,
    value: String,
    color: Option<StatColor>,
}

impl<'a> StatCard<'a> {
    pub fn new(icon: &'a str, title: &'a str, value: impl Into<String>, color: &str) -> Self {
        Self {
            icon,
            title,
            value: value.into(),
            color: StatColor::from_name(color),
        }
    }

    pub fn color(&self) -> Option<StatColor> {
        self.color
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chip = self.color.map(StatColor::theme).unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(format!(" {} ", self.icon), chip)),
            Line::from(Span::styled(self.title, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                self.value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[derive(Debug, Clone)]
pub struct EmailCard<'a> {
    email: &'a EmailSummary,
    selected: bool,
}

impl<'a> EmailCard<'a> {
    pub fn new(email: &'a EmailSummary) -> Self {
        Self {
            email,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for EmailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let e = self.email;
        let [top, subject, sender, summary] =
            Layout::vertical([Constraint::Length(1); 4]).areas(inner);

        let date = Span::styled(e.date.as_str(), Style::default().fg(Color::DarkGray));
        let date_width = u16::try_from(date.width()).unwrap_or(u16::MAX);
        let [tags, date_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(date_width)]).areas(top);

        let badge = priority_style(&e.priority).unwrap_or_default();
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", e.priority), badge),
            Span::raw(" "),
            Span::styled(e.category.as_str(), Style::default().fg(Color::DarkGray)),
        ]))
        .render(tags, buf);
        Paragraph::new(date).render(date_area, buf);

        Paragraph::new(Span::styled(
            e.subject.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(subject, buf);
        Paragraph::new(Span::styled(
            e.sender.as_str(),
            Style::default().fg(Color::Gray),
        ))
        .render(sender, buf);
        Paragraph::new(Span::styled(
            e.summary.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
        .render(summary, buf);
    }
}
