use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::Frame;
use uuid::Uuid;

use crate::context::AppContext;
use crate::surface::{Listener, ListenerId, ModalSurface, SurfaceEvent};

use super::layout::DialogRegions;
use super::policy::{self, Decision, DialogFocus, PolicyContext};
use super::props::DialogProps;
use super::render::render_dialog;
use super::view::DialogView;

/// Dialog state shared with the attached listener.
#[derive(Debug, Default)]
struct SharedFrame {
    regions: Option<DialogRegions>,
    show_close_control: bool,
    focus: DialogFocus,
}

/// Values the listener closes over. A change means re-attaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerDeps {
    close_on_click_outside: bool,
    callback: usize,
}

impl ListenerDeps {
    fn of(props: &DialogProps<'_>) -> Self {
        Self {
            close_on_click_outside: props.close_on_click_outside,
            callback: props.callback_identity(),
        }
    }
}

/// Keeps a modal surface in step with the host's open intent.
///
/// The controller never stores the open intent. Every [`update`](Self::update)
/// compares the intent in the props with the surface's current status and
/// calls `show`/`hide` only on mismatch. Dismissal signals are turned into a
/// single `set_is_open(false)` call; the surface only closes once the host
/// renders again with `is_open == false`.
///
/// Dropping the controller detaches its listener and hides the surface.
pub struct DialogController<S: ModalSurface> {
    surface: S,
    title_id: String,
    shared: Arc<Mutex<SharedFrame>>,
    listener: Option<(ListenerId, ListenerDeps)>,
}

impl<S: ModalSurface> DialogController<S> {
    /// Take ownership of `surface` and run the first update.
    pub fn mount(surface: S, props: &DialogProps<'_>) -> Self {
        let mut controller = Self {
            surface,
            title_id: format!("dialog-title-{}", Uuid::new_v4()),
            shared: Arc::new(Mutex::new(SharedFrame::default())),
            listener: None,
        };
        tracing::debug!(title_id = %controller.title_id, is_open = props.is_open, "dialog mounted");
        controller.update(props);
        controller
    }

    /// Run the per-render effects: reconcile visibility, then listeners.
    pub fn update(&mut self, props: &DialogProps<'_>) {
        self.reconcile(props.is_open);
        self.sync_listener(props);

        let shown = self.surface.is_shown();
        let mut shared = self.shared.lock();
        shared.show_close_control = props.show_close_control;
        if !props.show_close_control || !shown {
            shared.focus = DialogFocus::Body;
        }
        if !shown {
            shared.regions = None;
        }
    }

    /// Update, then draw the dialog over `area` when the surface is shown.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        props: &DialogProps<'_>,
        context: &AppContext,
    ) {
        self.update(props);
        if !self.surface.is_shown() {
            return;
        }

        let view = self.view(props);
        let regions = DialogRegions::compute(
            area,
            props.size,
            view.header.is_some(),
            view.close_control().is_some(),
        );
        {
            let mut shared = self.shared.lock();
            shared.regions = Some(regions);
            if regions.close_control.is_none() {
                shared.focus = DialogFocus::Body;
            }
        }

        let palette = context.theme.palette();
        self.surface.draw_backdrop(frame, area, palette);
        render_dialog(frame, &regions, &view, palette);
    }

    /// Feed a raw input event to the surface.
    pub fn dispatch(&mut self, event: &SurfaceEvent) {
        self.surface.dispatch(event);
    }

    pub fn view<'a>(&self, props: &DialogProps<'a>) -> DialogView<'a> {
        let focus = self.shared.lock().focus;
        DialogView::build(props, &self.title_id, focus)
    }

    pub fn is_shown(&self) -> bool {
        self.surface.is_shown()
    }

    pub fn focus(&self) -> DialogFocus {
        self.shared.lock().focus
    }

    /// Regions from the last draw, if the dialog has been drawn while shown.
    pub fn regions(&self) -> Option<DialogRegions> {
        self.shared.lock().regions
    }

    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Explicit unmount; equivalent to dropping the controller.
    pub fn unmount(self) {}

    fn reconcile(&mut self, is_open: bool) {
        let result = match (is_open, self.surface.is_shown()) {
            (true, false) => self.surface.show(),
            (false, true) => self.surface.hide(),
            _ => return,
        };
        match result {
            Ok(()) => tracing::debug!(title_id = %self.title_id, is_open, "dialog surface reconciled"),
            Err(err) => tracing::warn!(title_id = %self.title_id, error = %err, "dialog surface rejected reconcile"),
        }
    }

    fn sync_listener(&mut self, props: &DialogProps<'_>) {
        let deps = ListenerDeps::of(props);
        if matches!(self.listener, Some((_, current)) if current == deps) {
            return;
        }
        self.detach_listener();
        let listener = self.make_listener(props);
        let id = self.surface.subscribe(listener);
        self.listener = Some((id, deps));
    }

    fn detach_listener(&mut self) {
        if let Some((id, _)) = self.listener.take() {
            if !self.surface.unsubscribe(id) {
                tracing::warn!(listener = id.value(), "dialog listener was already detached");
            }
        }
    }

    fn make_listener(&self, props: &DialogProps<'_>) -> Listener {
        let shared = Arc::clone(&self.shared);
        let set_is_open = Arc::clone(&props.set_is_open);
        let close_on_click_outside = props.close_on_click_outside;

        Box::new(move |event: &SurfaceEvent| {
            let decision = {
                let frame = shared.lock();
                policy::evaluate(
                    event,
                    &PolicyContext {
                        close_on_click_outside,
                        show_close_control: frame.show_close_control,
                        focus: frame.focus,
                        regions: frame.regions,
                    },
                )
            };
            match decision {
                Decision::RequestClose(trigger) => {
                    tracing::debug!(?trigger, "dialog close requested");
                    set_is_open(false);
                }
                Decision::MoveFocus(focus) => shared.lock().focus = focus,
                Decision::Ignore => {}
            }
        })
    }
}

impl<S: ModalSurface> Drop for DialogController<S> {
    fn drop(&mut self) {
        self.detach_listener();
        if self.surface.is_shown() {
            if let Err(err) = self.surface.hide() {
                tracing::warn!(title_id = %self.title_id, error = %err, "failed to hide dialog on unmount");
            }
        }
        tracing::debug!(title_id = %self.title_id, "dialog unmounted");
    }
}
