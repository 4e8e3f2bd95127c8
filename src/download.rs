//! Downloads MERRA-2 granules listed in the subsetter's URL list files.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Error, Result};
use futures::{stream, StreamExt};
use indicatif::ProgressBar;
use reqwest::Client;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::reading::Category;

/// Environment variable holding an Earthdata bearer token.
pub const TOKEN_VAR: &str = "EARTHDATA_TOKEN";

const GRANULE_MARKER: &str = "tavg1_2d";
const GRANULE_NAME_LEN: usize = 28;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub category: Category,
    pub saved: usize,
    pub failed: usize,
    /// Files in the category directory once the run is over.
    pub on_disk: usize,
}

/// The URLs in a list file. The first line is a title.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list {}", path.display()))?;

    Ok(parse_url_list(&text))
}

pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The `tavg1_2d...` granule token in the URL, else its last path segment.
pub fn granule_name(url: &str) -> String {
    if let Some(start) = url.find(GRANULE_MARKER) {
        let name: String = url[start..].chars().take(GRANULE_NAME_LEN).collect();
        if name.chars().count() == GRANULE_NAME_LEN {
            return name;
        }
    }

    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("granule")
        .to_string()
}

/// Streams one URL into `target_dir`. The file only appears once complete.
pub async fn download_file(
    client: &Client,
    url: &str,
    target_dir: &Path,
    token: Option<&str>,
) -> Result<PathBuf, Error> {
    let mut request = client.get(url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .map_err(|e| Error::msg(format!("Failed to download file: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::msg(format!(
            "Failed to download file: {}",
            response.status()
        )));
    }

    let file_path = target_dir.join(granule_name(url));
    let mut staging = NamedTempFile::new_in(target_dir)?;
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| Error::msg(format!("Error reading chunk: {}", e)))?;
        staging.write_all(&chunk)?;
    }

    staging.persist(&file_path)?;

    Ok(file_path)
}

/// Downloads every URL with at most `concurrency` requests in flight. Failures
/// are logged and skipped.
pub async fn download_category(
    client: &Client,
    category: Category,
    urls: Vec<String>,
    target_dir: &Path,
    concurrency: usize,
    token: Option<&str>,
    progress_bar: ProgressBar,
) -> Result<FetchSummary> {
    fs::create_dir_all(target_dir)?;

    let results: Vec<Result<PathBuf>> = stream::iter(urls)
        .map(|url| {
            let progress_bar = progress_bar.clone();
            async move {
                let result = download_file(client, &url, target_dir, token).await;
                match &result {
                    Ok(path) => debug!(%category, url = %url, path = %path.display(), "saved"),
                    Err(e) => warn!(%category, url = %url, error = %e, "download failed"),
                }
                progress_bar.inc(1);
                result
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    progress_bar.finish_with_message(format!("{category}: {} saved, {failed} failed", results.len() - failed));

    Ok(FetchSummary {
        category,
        saved: results.len() - failed,
        failed,
        on_disk: count_files(target_dir)?,
    })
}

pub fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        if entry?.file_type()?.is_file() {
            count += 1;
        }
    }

    Ok(count)
}

// -- Tests -------------------------------------------------------------------
