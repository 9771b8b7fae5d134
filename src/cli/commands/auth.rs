//! Login, logout, and whoami command handlers

use super::{catnip_client, session_store};
use crate::clients::{ClientError, Session};
use crate::config::Config;

pub async fn cmd_login(config: &Config, username: &str, password: &str) -> anyhow::Result<()> {
    let client = catnip_client(config, &config.client.server_url)?;

    let login = match client.login(username, password).await {
        Ok(login) => login,
        Err(ClientError::Unauthorized(message)) => anyhow::bail!("Login failed: {message}"),
        Err(e) => return Err(e.into()),
    };

    let session = Session {
        server_url: client.server_url().to_string(),
        token: login.token,
        user: login.user_data,
    };

    let store = session_store(config)?;
    store.save(&session)?;

    println!("✓ Logged in as {}", session.user.username);
    Ok(())
}

pub fn cmd_logout(config: &Config) -> anyhow::Result<()> {
    let store = session_store(config)?;

    if store.clear()? {
        println!("✓ Logged out");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub fn cmd_whoami(config: &Config) -> anyhow::Result<()> {
    let store = session_store(config)?;

    match store.current_user()? {
        Some(user) => println!("{} (id {})", user.username, user.id),
        None => {
            println!("Not logged in.");
            println!("Log in with: catnip login <username> <password>");
        }
    }
    Ok(())
}
