pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{request, ClientTransport, DefaultTransport, FetchTransport};
pub use config::TomlConfig;
pub use crate::core::{api::ServerApi, delay::resolve_after, url::form_url};
pub use domain::endpoints::{
    Endpoint, ALL_CLIENTS, CHECK_KEY, CLIENT, MARKER, PERM, SERVER_ADDR, STAT,
};
pub use domain::model::{QueryParam, TransportKind};
pub use domain::ports::Transport;
pub use utils::error::{HttpResourceError, Result};
