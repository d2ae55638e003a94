// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod input;

// Primitive wrappers
pub mod label;
pub mod toast;

pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use toast::*;
