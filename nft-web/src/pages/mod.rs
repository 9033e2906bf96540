//! Page modules

pub mod mint;
pub mod status;

pub use mint::MintPage;
pub use status::StatusPage;
