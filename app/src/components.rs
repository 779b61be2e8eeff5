//! Reusable UI building blocks shared by the pages.
//!
//! Each sub-module renders one element of the page: layouts, the navigation bar,
//! the notification tray, category banners, loading skeletons and the error page.

pub mod category_header;
pub mod error_template;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod skeleton;
