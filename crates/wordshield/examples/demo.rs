//! Minimal end-to-end demo: build a filter from a static word list with
//! periodic rebuild enabled, then run a few lookups.
//!
//! ```sh
//! cargo run --example demo
//! ```

use std::time::Duration;

use tracing::info;
use wordshield::{FilterConfig, StaticWordSource, WordFilter};

#[tokio::main]
async fn main() -> wordshield::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let filter = WordFilter::new(
        StaticWordSource::new(["傻逼", "傻子", "司马南|美国", "方舟子|死了"]),
        FilterConfig::new()
            .statistics(true)
            .rebuild_interval(Duration::from_secs(5)),
    )
    .await?;

    for text in [
        "你这个傻瓜",
        "傻子",
        "大傻逼",
        "方舟子早就该死了",
        "方舟子还活着",
        "司马南在美国买房子",
    ] {
        match filter.hit(text) {
            Some(word) => info!(text, hit_word = %word, "hit"),
            None => info!(text, "clean"),
        }
    }

    let (hit, masked) = filter.replace("司马南在美国买房子");
    info!(hit, masked = %masked, "replace");

    for stats in filter.debug_infos() {
        info!(word = %stats.word, hits = stats.hit_count, "stats");
    }

    filter.shutdown();
    Ok(())
}
