pub mod common;
pub mod hash_router;
pub mod icon;
pub mod pages;
pub mod ping_client;

pub use hash_router::HashRouter;
pub use icon::{Icon, icons};
