//! `pchat send` and `pchat pull`.

use chrono::DateTime;
use console::style;

use pairchat_types::chat::{ChatMessage, SendRequest};
use pairchat_types::page::{Page, PullRequest};

use crate::state::AppState;

pub async fn send(
    state: &AppState,
    chat: String,
    sender: String,
    text: String,
    json: bool,
) -> anyhow::Result<()> {
    let req = SendRequest { chat, sender, text };
    state.chat_service.send(&req).await?;

    if json {
        println!("{}", serde_json::json!({}));
    } else {
        println!(
            "  {} Sent to {}",
            style("✓").green(),
            style(&req.chat).cyan()
        );
    }
    Ok(())
}

pub async fn pull(state: &AppState, req: PullRequest, json: bool) -> anyhow::Result<()> {
    let page = state.chat_service.pull(&req).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&req.chat, &page);
    }
    Ok(())
}

fn print_page(chat: &str, page: &Page) {
    println!();
    if page.messages.is_empty() {
        println!("  {}", style(format!("No messages in {chat}")).dim());
    }
    for message in &page.messages {
        println!("  {}", render_line(message));
    }
    println!();
    if page.has_more {
        println!(
            "  {} more available: --cursor {}",
            style("…").dim(),
            style(page.next_cursor).yellow()
        );
        println!();
    }
}

fn render_line(message: &ChatMessage) -> String {
    format!(
        "{} {} {}",
        style(format_sent_at(message.sent_at)).dim(),
        style(format!("{}:", message.sender)).bold(),
        message.text
    )
}

/// Human-readable UTC time for a send timestamp, or the raw number when it
/// is out of chrono's range.
fn format_sent_at(sent_at: i64) -> String {
    DateTime::from_timestamp(sent_at, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| sent_at.to_string())
}
