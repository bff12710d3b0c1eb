use std::collections::BTreeMap;
use std::sync::Arc;

use ratatui::text::Text;

use crate::config::DialogConfig;

/// Host callback that receives open-intent changes. The controller only ever
/// calls it with `false`.
pub type SetOpen = Arc<dyn Fn(bool) + Send + Sync>;

pub const DEFAULT_WIDTH_PERCENT: u16 = 60;
pub const DEFAULT_HEIGHT_PERCENT: u16 = 40;

/// Presentational attributes passed through to the dialog node untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    pub class: Vec<String>,
    pub data: BTreeMap<String, String>,
}

impl Attributes {
    pub fn has_class(&self, class: &str) -> bool {
        self.class.iter().any(|c| c == class)
    }
}

/// Content box size as a percentage of the surface area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogSize {
    pub width_percent: u16,
    pub height_percent: u16,
}

impl Default for DialogSize {
    fn default() -> Self {
        Self {
            width_percent: DEFAULT_WIDTH_PERCENT,
            height_percent: DEFAULT_HEIGHT_PERCENT,
        }
    }
}

/// Everything the host supplies on each render.
#[derive(Clone)]
pub struct DialogProps<'a> {
    pub is_open: bool,
    pub set_is_open: SetOpen,
    pub title: Option<String>,
    pub body: Option<Text<'a>>,
    pub show_close_control: bool,
    pub close_on_click_outside: bool,
    pub size: DialogSize,
    pub attributes: Attributes,
}

impl<'a> DialogProps<'a> {
    pub fn new(is_open: bool, set_is_open: SetOpen) -> Self {
        Self {
            is_open,
            set_is_open,
            title: None,
            body: None,
            show_close_control: true,
            close_on_click_outside: true,
            size: DialogSize::default(),
            attributes: Attributes::default(),
        }
    }

    /// Props seeded from the `[dialog]` config section.
    pub fn from_config(config: &DialogConfig, is_open: bool, set_is_open: SetOpen) -> Self {
        Self::new(is_open, set_is_open)
            .title(config.title.clone())
            .show_close_control(config.show_close_control)
            .close_on_click_outside(config.close_on_click_outside)
            .size(config.width_percent, config.height_percent)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<Text<'a>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn show_close_control(mut self, show: bool) -> Self {
        self.show_close_control = show;
        self
    }

    pub fn close_on_click_outside(mut self, close: bool) -> Self {
        self.close_on_click_outside = close;
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.size = DialogSize {
            width_percent,
            height_percent,
        };
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attributes.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attributes.class.push(class.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.data.insert(key.into(), value.into());
        self
    }

    /// The title, with an empty string treated as absent.
    pub fn visible_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Identity of the close callback, used to detect a changed callback.
    pub(crate) fn callback_identity(&self) -> usize {
        Arc::as_ptr(&self.set_is_open) as *const () as usize
    }
}

impl std::fmt::Debug for DialogProps<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogProps")
            .field("is_open", &self.is_open)
            .field("title", &self.title)
            .field("has_body", &self.body.is_some())
            .field("show_close_control", &self.show_close_control)
            .field("close_on_click_outside", &self.close_on_click_outside)
            .field("size", &self.size)
            .field("attributes", &self.attributes)
            .finish()
    }
}
