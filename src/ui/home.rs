use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::context::AppContext;
use crate::ui::host::HostState;

/// Body of the home screen.
pub fn home_widget(context: &AppContext, host: &HostState) -> Paragraph<'static> {
    let palette = context.theme.palette();
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    let greeting = match context.auth.user() {
        Some(user) => format!("Signed in as {}", user.email),
        None if context.auth.is_loading() => "Checking sign-in...".to_string(),
        None => "Signed out".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(greeting, text.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Press Enter or o to open the dialog.", text)),
        Line::from(Span::styled(
            format!("Dialog dismissed {} time(s).", host.dismissals),
            muted,
        )),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().style(Style::default().bg(palette.background)))
}
