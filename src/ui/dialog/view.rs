use ratatui::text::Text;

use super::policy::DialogFocus;
use super::props::{Attributes, DialogProps};

pub const DIALOG_ROLE: &str = "dialog";
pub const CLOSE_CONTROL_LABEL: &str = "Close Dialog";

/// Accessibility node exposed for the dialog surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSemantics {
    pub role: &'static str,
    pub modal: bool,
    /// Id of the title heading; only set when a non-empty title is shown.
    pub labelled_by: Option<String>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseControl {
    pub label: &'static str,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogHeader {
    pub heading: Option<Heading>,
    pub close_control: Option<CloseControl>,
}

/// What the dialog renders for one set of props.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogView<'a> {
    pub semantics: DialogSemantics,
    pub header: Option<DialogHeader>,
    pub body: Text<'a>,
}

impl<'a> DialogView<'a> {
    pub fn build(props: &DialogProps<'a>, title_id: &str, focus: DialogFocus) -> Self {
        let heading = props.visible_title().map(|title| Heading {
            id: title_id.to_string(),
            text: title.to_string(),
        });
        let close_control = props.show_close_control.then_some(CloseControl {
            label: CLOSE_CONTROL_LABEL,
            focused: focus == DialogFocus::CloseControl,
        });
        let labelled_by = heading.as_ref().map(|heading| heading.id.clone());

        let header = (heading.is_some() || close_control.is_some()).then(|| DialogHeader {
            heading,
            close_control,
        });

        Self {
            semantics: DialogSemantics {
                role: DIALOG_ROLE,
                modal: true,
                labelled_by,
                attributes: props.attributes.clone(),
            },
            header,
            body: props.body.clone().unwrap_or_default(),
        }
    }

    pub fn heading(&self) -> Option<&str> {
        self.header
            .as_ref()
            .and_then(|header| header.heading.as_ref())
            .map(|heading| heading.text.as_str())
    }

    pub fn close_control(&self) -> Option<&CloseControl> {
        self.header
            .as_ref()
            .and_then(|header| header.close_control.as_ref())
    }

    /// Body as plain text, one entry per line.
    pub fn body_lines(&self) -> Vec<String> {
        self.body
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const TITLE_ID: &str = "dialog-title-test";

    fn props() -> DialogProps<'static> {
        DialogProps::new(true, Arc::new(|_: bool| {}))
    }

    #[test]
    fn title_and_close_control_render_full_header() {
        let view = DialogView::build(&props().title("Confirm"), TITLE_ID, DialogFocus::Body);
        assert_eq!(view.heading(), Some("Confirm"));
        let control = view.close_control().expect("close control");
        assert_eq!(control.label, "Close Dialog");
        assert!(!control.focused);
        assert_eq!(view.semantics.labelled_by.as_deref(), Some(TITLE_ID));
    }

    #[test]
    fn no_title_and_no_close_control_means_no_header() {
        let view = DialogView::build(
            &props().title("").show_close_control(false),
            TITLE_ID,
            DialogFocus::Body,
        );
        assert!(view.header.is_none());
        assert!(view.semantics.labelled_by.is_none());
    }

    #[test]
    fn close_control_alone_keeps_header_without_heading() {
        let view = DialogView::build(&props(), TITLE_ID, DialogFocus::Body);
        let header = view.header.as_ref().expect("header");
        assert!(header.heading.is_none());
        assert!(header.close_control.is_some());
        assert!(view.semantics.labelled_by.is_none());
    }

    #[test]
    fn title_without_close_control() {
        let view = DialogView::build(
            &props().title("Notice").show_close_control(false),
            TITLE_ID,
            DialogFocus::Body,
        );
        assert_eq!(view.heading(), Some("Notice"));
        assert!(view.close_control().is_none());
    }

    #[test]
    fn semantics_are_modal_dialog() {
        let view = DialogView::build(&props().class("custom-class"), TITLE_ID, DialogFocus::Body);
        assert_eq!(view.semantics.role, "dialog");
        assert!(view.semantics.modal);
        assert!(view.semantics.attributes.has_class("custom-class"));
    }

    #[test]
    fn absent_body_is_empty() {
        let view = DialogView::build(&props().title("Test"), TITLE_ID, DialogFocus::Body);
        assert!(view.body_lines().is_empty());
        assert_eq!(view.heading(), Some("Test"));
    }

    #[test]
    fn body_lines_flatten_spans() {
        let view = DialogView::build(
            &props().body("Do you want to save your changes?\nSave  Cancel"),
            TITLE_ID,
            DialogFocus::Body,
        );
        assert_eq!(
            view.body_lines(),
            vec!["Do you want to save your changes?", "Save  Cancel"]
        );
    }

    #[test]
    fn focus_marks_close_control() {
        let view = DialogView::build(&props(), TITLE_ID, DialogFocus::CloseControl);
        assert!(view.close_control().expect("close control").focused);
    }
}
