//! Source URI resolution per storage backend

/// Narrow handle on a stored media resource, enough to address its bytes and
/// derive the download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResource {
    /// Content hash of the stored bytes, as produced by the storage layer
    pub content_hash: String,
    /// Original filename, with extension
    pub filename: String,
    /// MIME type of the stored bytes
    pub media_type: String,
}

impl MediaResource {
    pub fn new(
        content_hash: impl Into<String>,
        filename: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            content_hash: content_hash.into(),
            filename: filename.into(),
            media_type: media_type.into(),
        }
    }

    /// Filename without its final extension, used for the `fn:` option.
    pub fn filename_stem(&self) -> &str {
        match self.filename.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.filename,
        }
    }
}

/// Capability to turn a stored resource into the URI the proxy fetches it
/// from.
///
/// The backend is selected by deployment configuration; URL construction
/// never inspects the storage implementation behind the trait.
pub trait SourceUriResolver: Send + Sync {
    /// URI the proxy can fetch the resource's bytes from.
    fn resolve_source_uri(&self, resource: &MediaResource) -> String;
}

/// Resolver for resources served over HTTP by the host system.
#[derive(Debug, Clone)]
pub struct PublicUrlResolver {
    base_url: String,
}

impl PublicUrlResolver {
    /// `base_url` is the public prefix persistent resources are served under.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl SourceUriResolver for PublicUrlResolver {
    fn resolve_source_uri(&self, resource: &MediaResource) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.content_hash,
            resource.filename
        )
    }
}

/// Resolver for resources in S3-compatible object storage; the proxy fetches
/// them directly via its `s3://` scheme.
#[derive(Debug, Clone)]
pub struct S3StorageResolver {
    bucket: String,
    key_prefix: String,
}

impl S3StorageResolver {
    pub fn new(bucket: impl Into<String>, key_prefix: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key_prefix: key_prefix.into(),
        }
    }
}

impl SourceUriResolver for S3StorageResolver {
    fn resolve_source_uri(&self, resource: &MediaResource) -> String {
        let prefix = self.key_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            format!("s3://{}/{}", self.bucket, resource.content_hash)
        } else {
            format!("s3://{}/{}/{}", self.bucket, prefix, resource.content_hash)
        }
    }
}
