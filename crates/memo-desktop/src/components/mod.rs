//! UI Components
//!
//! Building blocks of the memo screen.

mod error_banner;
mod memo_form;
mod memo_item;
mod memo_list;
mod offline_banner;

pub use error_banner::ErrorBanner;
pub use memo_form::MemoForm;
pub use memo_item::MemoItem;
pub use memo_list::MemoList;
pub use offline_banner::OfflineBanner;
