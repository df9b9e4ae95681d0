//! Configuration utilities (port, static assets, env vars)

use std::{env, net::{Ipv4Addr, SocketAddr}};
use std::path::PathBuf;

/// Socket address to bind the server to.
///
/// Reads the `PORT` env var or defaults to 8080, binds to 0.0.0.0.
pub fn server_addr() -> SocketAddr {
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8080);
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

/// Directory served under `/static`.
///
/// `STATIC_DIR` env var wins; defaults to `./static` in the working
/// directory, which is the repo layout.
pub fn static_dir() -> PathBuf {
    env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./static"))
}
