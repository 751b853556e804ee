//! Reusable UI components

mod button;
mod dialog;
mod placeholder;
mod toast;

pub use button::{Button, ButtonVariant};
pub use dialog::{Dialog, action_button};
pub use placeholder::render_placeholder;
pub use toast::Toast;
