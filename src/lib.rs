//! Bridges a CMS media pipeline to the imgproxy image-processing service.
//!
//! Instead of serving raw image files, asset URLs are rewritten into signed,
//! parameterized proxy URLs that imgproxy resolves on demand:
//!
//! ```text
//! <base>/<signature>/<option>/<option>/<base64url(source-url)>[.<ext>]
//! ```
//!
//! The signature is HMAC-SHA256 over salt and path, base64url encoded
//! without padding. Deployments without key material use the literal
//! `insecure` segment instead.
//!
//! ```rust
//! use imgproxy_bridge::{ResizeType, UrlBuilder};
//!
//! let builder = UrlBuilder::new("http://localhost:8084", "", "").unwrap();
//! let url = builder
//!     .build_url("local:///path/to/image.jpg")
//!     .resize(Some(ResizeType::Fit), Some(300), Some(200), Some(false), Some(true))
//!     .extension(Some("png"))
//!     .build();
//!
//! assert_eq!(
//!     url,
//!     "http://localhost:8084/insecure/rs:fit:300:200:0:1/bG9jYWw6Ly8vcGF0aC90by9pbWFnZS5qcGc.png"
//! );
//! ```
//!
//! [`expected_size`] predicts the dimensions the proxy will produce, so the
//! host can emit width/height attributes without a round-trip.

pub mod builder;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod expected_size;
pub mod options;
pub mod request;
pub mod source;
pub mod static_assets;
pub mod thumbnail;

// Re-export commonly used types
pub use builder::UrlBuilder;
pub use config::{ImgproxyConfig, MediaTypeConfig, StaticResourceConfig};
pub use dimensions::Dimensions;
pub use error::BridgeError;
pub use expected_size::expected_size;
pub use options::{Quality, ResizeType};
pub use request::UrlRequest;
pub use source::{MediaResource, PublicUrlResolver, S3StorageResolver, SourceUriResolver};
pub use static_assets::StaticAssetRewriter;
pub use thumbnail::{ImageAsset, ThumbnailConfiguration, ThumbnailResult, ThumbnailService};
