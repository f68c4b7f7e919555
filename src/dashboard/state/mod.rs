/// Per-view state containers
mod latest_slot;
mod view_state;

pub use latest_slot::{LatestSlot, Ticket};
pub use view_state::ViewState;
