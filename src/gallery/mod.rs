//! Gallery building: layout, panels, text and the room shell

pub mod layout;
pub mod panel;
pub mod room;
pub mod text;

pub use layout::{layout_slots, LayoutParams, Wall, WallSlot};
pub use panel::Panel;
