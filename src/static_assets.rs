//! Proxy rewriting for public static assets

use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use regex::Regex;

use crate::builder::UrlBuilder;
use crate::config::ImgproxyConfig;
use crate::error::BridgeError;

/// Rewrites public static asset URLs into proxy URLs.
///
/// Every decision here can fall back: a `None` from
/// [`rewrite`](Self::rewrite) means the caller keeps the original URL.
pub struct StaticAssetRewriter {
    config: ImgproxyConfig,
    builder: UrlBuilder,
    ignore: Option<Regex>,
}

impl StaticAssetRewriter {
    /// Compiles the ignore pattern once; an invalid pattern fails
    /// construction rather than disabling the filter at request time.
    pub fn new(config: ImgproxyConfig) -> Result<Self, BridgeError> {
        let builder = UrlBuilder::new(config.imgproxy_url.clone(), &config.key, &config.salt)?;
        let ignore = if config.static_resources.ignore_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&config.static_resources.ignore_pattern)?)
        };

        Ok(Self {
            config,
            builder,
            ignore,
        })
    }

    /// Proxy URL for the asset publicly reachable at `source_url` and stored
    /// at `local_path`, or `None` when the asset stays on its original URL.
    ///
    /// The file's mtime becomes a `cb:` cache buster, so downstream caches
    /// refetch after a deployment replaces the file.
    pub fn rewrite(&self, source_url: &str, local_path: &Path) -> Option<String> {
        if !self.config.is_enabled() || !self.config.static_resources.enabled {
            return None;
        }

        if let Some(ignore) = &self.ignore {
            if ignore.is_match(source_url) {
                tracing::debug!(source_url = %source_url, "Static asset matches ignore pattern");
                return None;
            }
        }

        let media_type = match media_type_from_url(source_url) {
            Some(media_type) => media_type,
            None => return None,
        };
        if !self.config.is_media_type_enabled(media_type) {
            tracing::debug!(
                source_url = %source_url,
                media_type = %media_type,
                "Media type not enabled for static asset proxying"
            );
            return None;
        }

        let mtime = modification_time(local_path)?;

        let url = self
            .builder
            .build_url(source_url)
            .quality(self.config.fallback_quality())
            .cache_buster(&mtime.to_string())
            .build();

        Some(url)
    }
}

/// Media type guessed from the URL's filename extension.
fn media_type_from_url(source_url: &str) -> Option<&'static str> {
    let filename = source_url.rsplit('/').next()?;
    let (_, extension) = filename.rsplit_once('.')?;

    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// File mtime as Unix seconds; any stat failure turns into `None` so the
/// caller can keep the original URL.
fn modification_time(path: &Path) -> Option<u64> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not stat static asset");
            return None;
        }
    };

    let modified = metadata.modified().ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(since_epoch.as_secs())
}
