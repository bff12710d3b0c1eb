use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Palette;

use super::layout::{DialogRegions, CLOSE_CONTROL_WIDTH};
use super::view::DialogView;

const CLOSE_GLYPH: &str = "[x]";

/// Draw the content box of a shown dialog.
pub fn render_dialog(frame: &mut Frame, regions: &DialogRegions, view: &DialogView, palette: &Palette) {
    if regions.content.is_empty() {
        return;
    }

    frame.render_widget(Clear, regions.content);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    frame.render_widget(block, regions.content);

    if let Some(header) = regions.header {
        render_header(frame, header, regions.close_control, view, palette);
    }

    if !regions.body.is_empty() {
        let body = Paragraph::new(view.body.clone())
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, regions.body);
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    close_control: Option<Rect>,
    view: &DialogView,
    palette: &Palette,
) {
    if let Some(heading) = view.heading() {
        let reserved = if close_control.is_some() {
            CLOSE_CONTROL_WIDTH + 1
        } else {
            0
        };
        let title_area = Rect {
            width: area.width.saturating_sub(reserved),
            ..area
        };
        let title = Paragraph::new(Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);
    }

    if let (Some(rect), Some(control)) = (close_control, view.close_control()) {
        let style = if control.focused {
            Style::default()
                .fg(palette.accent)
                .bg(palette.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        frame.render_widget(Paragraph::new(Span::styled(CLOSE_GLYPH, style)), rect);
    }
}
