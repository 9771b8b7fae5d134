//! Fact listing and creation command handlers

use super::{catnip_client, session_store};
use crate::clients::ClientError;
use crate::config::Config;
use crate::models::Fact;

pub async fn cmd_list_facts(config: &Config, mine: bool) -> anyhow::Result<()> {
    let current_user = session_store(config)?.current_user()?;

    if mine && current_user.is_none() {
        anyhow::bail!("Not logged in. Log in with: catnip login <username> <password>");
    }

    let client = catnip_client(config, &config.client.server_url)?;
    let facts = client.list_facts().await?;

    let username = current_user.map(|u| u.username);
    let facts: Vec<&Fact> = facts
        .iter()
        .filter(|f| !mine || username.as_deref().is_some_and(|u| f.is_owned_by(u)))
        .collect();

    if facts.is_empty() {
        println!("No cat facts yet.");
        println!();
        println!("Add one with: catnip create \"your fact\"");
        return Ok(());
    }

    println!("Cat Facts ({} total)", facts.len());
    println!("{:-<70}", "");

    for fact in facts {
        let owner = match username.as_deref() {
            Some(u) if fact.is_owned_by(u) => "Me",
            _ => fact.owner.as_str(),
        };
        println!("#{:<4} {:<10} {}", fact.fact_id, owner, fact.cat_fact);
    }

    Ok(())
}

pub async fn cmd_create_fact(config: &Config, text: &str) -> anyhow::Result<()> {
    let store = session_store(config)?;

    let Some(session) = store.load()? else {
        anyhow::bail!("Not logged in. Log in with: catnip login <username> <password>");
    };

    let client = catnip_client(config, &session.server_url)?;

    match client.create_fact(&session.token, text).await {
        Ok(response) => {
            println!("✓ {}", response.message);
            Ok(())
        }
        Err(ClientError::Unauthorized(message)) => {
            store.clear()?;
            anyhow::bail!("{message}. Session cleared, please log in again.")
        }
        Err(e) => Err(e.into()),
    }
}
