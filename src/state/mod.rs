pub mod hold;

pub use hold::{HoldTracker, Transition};
