//! Public cat-fact API command handler

use crate::clients::{CatFactClient, build_http_client};
use crate::config::Config;

pub async fn cmd_internet_facts(config: &Config, page: u32, max_length: u32) -> anyhow::Result<()> {
    let http = build_http_client(config.client.request_timeout_seconds)?;
    let client = CatFactClient::new(http, &config.client.catfact_api_url)?;

    let result = client.fetch_page(page, Some(max_length)).await?;

    if result.data.is_empty() {
        println!("No facts on page {}.", result.current_page);
        return Ok(());
    }

    match result.last_page {
        Some(last) => println!("Internet Cat Facts (page {} of {last})", result.current_page),
        None => println!("Internet Cat Facts (page {})", result.current_page),
    }
    println!("{:-<70}", "");

    for (index, fact) in result.data.iter().enumerate() {
        println!("{:>3}. {}", index + 1, fact.fact);
    }

    println!();
    if result.has_prev() {
        println!("Previous: catnip internet-facts --page {}", result.current_page.saturating_sub(1));
    }
    if result.has_next() {
        println!("Next:     catnip internet-facts --page {}", result.current_page + 1);
    }

    Ok(())
}
