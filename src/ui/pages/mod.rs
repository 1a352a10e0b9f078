//! Application pages module
//!
//! - Home page (hero + features)
//! - Login page (placeholder)
//! - Antd demo page (ping action)
//! - Not found page

mod antd;
mod home;
mod login;
mod not_found;

pub use antd::AntdPage;
pub use home::{Features, Hero, HomePage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
