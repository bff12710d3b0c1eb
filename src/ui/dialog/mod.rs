//! Modal dialog component.
//!
//! - `props.rs` - host-supplied inputs
//! - `controller.rs` - surface lifecycle and listener effects
//! - `policy.rs` - dismissal rules
//! - `view.rs` - header/body/semantics derived from props
//! - `layout.rs` - regions used for drawing and hit testing
//! - `render.rs` - drawing

mod controller;
mod layout;
mod policy;
mod props;
mod render;
mod view;

pub use controller::DialogController;
pub use layout::{DialogRegions, CLOSE_CONTROL_WIDTH};
pub use policy::{evaluate, Decision, DialogFocus, DismissTrigger, PolicyContext};
pub use props::{Attributes, DialogProps, DialogSize, SetOpen};
pub use render::render_dialog;
pub use view::{
    CloseControl, DialogHeader, DialogSemantics, DialogView, Heading, CLOSE_CONTROL_LABEL,
    DIALOG_ROLE,
};
