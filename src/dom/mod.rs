// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod feedback;
pub mod browser;
pub mod theme;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use feedback::{close_modal, open_modal, ToastNotifier};
pub use browser::{confirm, current_path, prompt, BrowserNavigator};
pub use theme::{apply_theme, init_theme};
