//! UI Components

pub mod connect_button;
pub mod navbar;

pub use connect_button::ConnectButton;
pub use navbar::Navbar;
