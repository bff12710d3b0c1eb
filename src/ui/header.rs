use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::context::AppContext;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, context: &AppContext) -> Paragraph<'static> {
        let palette = context.theme.palette();
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let user = match context.auth.user() {
            Some(user) => user.email.clone(),
            None if context.auth.is_loading() => "Loading...".to_string(),
            None => "Signed out".to_string(),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "dialogkit",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(user, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(context.theme.toggle_label(), text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
