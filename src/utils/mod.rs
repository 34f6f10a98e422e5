// Utils compartidos

pub mod constants;
pub mod format;
pub mod navigation;
pub mod notice;
pub mod storage;

pub use constants::*;
pub use format::*;
pub use navigation::{Navigator, Page};
pub use notice::{Notice, NoticeKind, Notifier};
pub use storage::*;
