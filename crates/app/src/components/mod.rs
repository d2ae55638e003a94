pub mod user_setup;

pub use user_setup::UserSetup;
