pub mod authenticated_view;
pub mod error_fallback;
pub mod loading_indicator;
pub mod notice_banner;

pub use authenticated_view::*;
pub use error_fallback::*;
pub use loading_indicator::*;
pub use notice_banner::*;
