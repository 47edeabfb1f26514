pub mod modal;
pub mod navbar;

pub use modal::Modal;
pub use navbar::Navbar;
