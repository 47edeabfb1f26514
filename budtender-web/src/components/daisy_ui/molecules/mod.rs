pub mod card;
pub mod tab;

pub use card::Card;
pub use tab::{Tab, TabItem};
