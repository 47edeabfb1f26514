pub mod alert;
pub mod badge;
pub mod checkbox;
pub mod input;
pub mod loading;
pub mod progress;
pub mod range;
pub mod rating;
pub mod textarea;

pub use alert::Alert;
pub use badge::Badge;
pub use checkbox::Checkbox;
pub use input::Input;
pub use loading::Loading;
pub use progress::Progress;
pub use range::Range;
pub use rating::Rating;
pub use textarea::Textarea;
