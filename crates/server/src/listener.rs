//! Listener binding: `listenfd` hand-off first, then `host:port`.

use std::env;

use clap::Args;
use listenfd::ListenFd;
use tokio::net::TcpListener;

pub const DEFAULT_PORT: u16 = 8080;

/// Bind address flags shared by both servers.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on (falls back to APP_PORT, then 8080)
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// The port to bind, honouring `APP_PORT` when no port was given.
    pub fn port(&self) -> u16 {
        resolve_port(self.port, env::var("APP_PORT").ok().as_deref())
    }
}

/// `--port`/`PORT` wins, then `APP_PORT`, then [`DEFAULT_PORT`].
///
/// An unparseable `APP_PORT` is ignored with a warning.
pub fn resolve_port(explicit: Option<u16>, app_port: Option<&str>) -> u16 {
    if let Some(port) = explicit {
        return port;
    }

    app_port
        .and_then(|v| {
            v.trim()
                .parse::<u16>()
                .inspect_err(|e| tracing::warn!(value = v, error = %e, "Ignoring APP_PORT"))
                .ok()
        })
        .unwrap_or(DEFAULT_PORT)
}

/// Takes the socket passed on listen fd 0 (auto-reload), or binds `host:port`.
pub async fn bind_listener(args: &ServeArgs) -> std::io::Result<TcpListener> {
    let mut listenfd = ListenFd::from_env();

    match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)
        }
        None => TcpListener::bind((args.host.as_str(), args.port())).await,
    }
}
