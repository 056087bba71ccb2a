// Service exports
pub mod demo;
pub mod roster;

pub use demo::demo_participants;
pub use roster::{RosterStore, RosterError};
