//! Proxy URL construction and signing
//!
//! Provides:
//! - URL assembly from ordered processing options
//! - URL signing with HMAC-SHA256 (salt || path)
//! - Unsigned "insecure" mode when no key material is configured

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::BridgeError;
use crate::request::UrlRequest;

type HmacSha256 = Hmac<Sha256>;

/// Decoded HMAC key material. Both halves are required for signing.
#[derive(Debug, Clone)]
struct SigningKeys {
    key: Vec<u8>,
    salt: Vec<u8>,
}

/// Builds proxy URLs against one deployment.
///
/// Construction decodes the hex key material once; afterwards the builder is
/// immutable and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    keys: Option<SigningKeys>,
}

impl UrlBuilder {
    /// Create a builder for the proxy at `base_url`.
    ///
    /// `key` and `salt` are hex strings. Signing is enabled only when both
    /// are non-empty; otherwise URLs carry the literal `insecure` segment.
    /// Non-empty but malformed hex fails construction.
    pub fn new(
        base_url: impl Into<String>,
        key: &str,
        salt: &str,
    ) -> Result<UrlBuilder, BridgeError> {
        let keys = if key.is_empty() || salt.is_empty() {
            None
        } else {
            Some(SigningKeys {
                key: hex::decode(key).map_err(BridgeError::InvalidKey)?,
                salt: hex::decode(salt).map_err(BridgeError::InvalidSalt)?,
            })
        };

        Ok(UrlBuilder {
            base_url: base_url.into(),
            keys,
        })
    }

    /// Start a request for one source image.
    pub fn build_url(&self, source_url: &str) -> UrlRequest<'_> {
        UrlRequest::new(self, source_url)
    }

    /// Assemble the final URL from already-rendered option tokens.
    ///
    /// The path is `/<opt1>/<opt2>/.../<base64url(source_url)>` with an
    /// optional `.<extension>` suffix; option order is preserved as given.
    pub fn generate_url(
        &self,
        source_url: &str,
        options: &[String],
        extension: Option<&str>,
    ) -> String {
        let encoded_source = base64_url_encode(source_url.as_bytes());

        let mut path = format!("/{}/{}", options.join("/"), encoded_source);
        if let Some(ext) = extension {
            path.push('.');
            path.push_str(ext);
        }

        let signature = self.sign_path(&path);
        tracing::debug!(
            source_url = %source_url,
            signed = self.keys.is_some(),
            "Generated proxy URL"
        );

        format!("{}/{}{}", self.base_url, signature, path)
    }

    /// Signature segment for `path`, or the literal `insecure` segment when
    /// signing is disabled.
    ///
    /// The signed payload is `salt || path` as raw bytes; `path` already
    /// carries its leading slash.
    fn sign_path(&self, path: &str) -> String {
        match &self.keys {
            Some(keys) => {
                let mut mac = HmacSha256::new_from_slice(&keys.key)
                    .expect("HMAC can take key of any size");
                mac.update(&keys.salt);
                mac.update(path.as_bytes());
                base64_url_encode(&mac.finalize().into_bytes())
            }
            None => "insecure".to_string(),
        }
    }
}

/// Base64url encode (URL-safe, no padding)
fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}
