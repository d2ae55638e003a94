//! Styled building blocks shared by the Runway & Rivets front end.

pub mod components;

pub use components::*;
