pub mod buttons;
pub mod session;
