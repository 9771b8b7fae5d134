mod auth;
mod facts;
mod internet;

pub use auth::{cmd_login, cmd_logout, cmd_whoami};
pub use facts::{cmd_create_fact, cmd_list_facts};
pub use internet::cmd_internet_facts;

use crate::clients::{CatnipClient, SessionStore, build_http_client};
use crate::config::Config;

fn catnip_client(config: &Config, server_url: &str) -> anyhow::Result<CatnipClient> {
    let http = build_http_client(config.client.request_timeout_seconds)?;
    Ok(CatnipClient::new(http, server_url)?)
}

fn session_store(config: &Config) -> anyhow::Result<SessionStore> {
    SessionStore::from_config(&config.client)
}
