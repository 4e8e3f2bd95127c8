use std::{env, path::Path};

use anyhow::{bail, Result};
use futures::future::join_all;
use indicatif::MultiProgress;
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    cli::{create_progress_bar, FetchArgs},
    config::FetchToml,
    download::{download_category, read_url_list, FetchSummary, TOKEN_VAR},
    reading::Category,
};

/// Downloads all categories at once, each with its own request limit.
pub async fn fetch(args: FetchArgs, config: FetchToml) -> Result<Vec<FetchSummary>> {
    let config = apply(args, config);

    let jobs: Vec<(Category, &Path)> = Category::ALL
        .into_iter()
        .filter_map(|c| config.url_lists.get(c).map(|list| (c, list)))
        .collect();
    if jobs.is_empty() {
        bail!("no URL lists configured: set [fetch.url_lists] in the config file");
    }

    let token = env::var(TOKEN_VAR).ok().filter(|t| !t.is_empty());
    if token.is_none() {
        warn!("{TOKEN_VAR} not set, requests go out unauthenticated");
    }

    let client = Client::new();
    let bars = MultiProgress::new();

    let mut downloads = Vec::with_capacity(jobs.len());
    for (category, list) in jobs {
        let urls = read_url_list(list)?;
        let concurrency = config.concurrency_for(category);
        info!(%category, urls = urls.len(), concurrency, "queued");

        let bar = bars.add(create_progress_bar(
            urls.len() as u64,
            format!("Downloading {category}"),
        ));
        let target_dir = config.raw_dir.join(category.dir_name());
        let client = &client;
        let token = token.as_deref();

        downloads.push(async move {
            download_category(client, category, urls, &target_dir, concurrency, token, bar).await
        });
    }

    join_all(downloads).await.into_iter().collect()
}

fn apply(args: FetchArgs, mut config: FetchToml) -> FetchToml {
    if let Some(raw_dir) = args.raw_dir {
        config.raw_dir = raw_dir;
    }
    if let Some(n) = args.concurrency {
        config.concurrency = n;
    }
    if let Some(n) = args.snow_concurrency {
        config.snow_concurrency = n;
    }

    config
}

// -- Tests -------------------------------------------------------------------
