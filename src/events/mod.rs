pub mod listeners;
pub mod page;
pub mod pointer;

pub use listeners::ListenerSet;
pub use page::{wire_anchor_clicks, wire_mobile_toggle, wire_scroll_effects};
pub use pointer::wire_pointermove;
