use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::home_widget;
use crate::ui::layout::layout_regions;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draw the home screen, then the dialog over everything above the footer.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let palette = app.context().theme.palette();

    // Footer hints describe whoever receives input this frame.
    app.sync_dialog();

    frame.render_widget(Header::new().widget(app.context()), header);
    frame.render_widget(Clear, body);
    frame.render_widget(home_widget(app.context(), app.host()), body);
    frame.render_widget(
        Footer::new().widget(footer, palette, app.dialog_shown()),
        footer,
    );

    let overlay = Rect {
        height: area.height.saturating_sub(footer.height),
        ..area
    };
    app.render_dialog(frame, overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::context::AppContext;
    use crate::ui::footer::{DIALOG_HINTS, HOME_HINTS};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::mpsc;

    fn footer_row(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let y = buffer.area.height - 2;
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn draw_app(terminal: &mut Terminal<TestBackend>, app: &mut App) {
        terminal.draw(|frame| draw(frame, app)).unwrap();
    }

    #[test]
    fn footer_hints_follow_surface_status() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(AppContext::default(), DialogConfig::default(), tx);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        draw_app(&mut terminal, &mut app);
        assert!(footer_row(&terminal).contains(HOME_HINTS.trim()));

        app.open_dialog();
        draw_app(&mut terminal, &mut app);
        assert!(app.dialog_shown());
        assert!(footer_row(&terminal).contains(DIALOG_HINTS.trim()));

        app.set_dialog_open(false);
        draw_app(&mut terminal, &mut app);
        assert!(!app.dialog_shown());
        assert!(footer_row(&terminal).contains(HOME_HINTS.trim()));
    }

    #[test]
    fn dialog_leaves_footer_uncovered() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(AppContext::default(), DialogConfig::default(), tx);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        app.open_dialog();
        draw_app(&mut terminal, &mut app);

        let regions = app.dialog().regions().expect("dialog drawn");
        assert_eq!(regions.surface.height, 27);
    }
}
