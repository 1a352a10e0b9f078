//! Routing and ping logic shared by the server and the browser bundle

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod mount;
pub mod ping;
pub mod routes;

pub use ping::{PING_ENDPOINT, PING_TIMEOUT_MS, PingError, PingResponse, PingStatus};
pub use routes::{Page, Route, RouteTable, RouteTableError, UI_MOUNT_PATH, path_from_hash};
