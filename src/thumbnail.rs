//! Thumbnail URL generation for the host media pipeline

use serde::Serialize;

use crate::builder::UrlBuilder;
use crate::config::ImgproxyConfig;
use crate::dimensions::Dimensions;
use crate::error::BridgeError;
use crate::expected_size::expected_size;
use crate::options::{Quality, ResizeType};
use crate::source::{MediaResource, SourceUriResolver};

/// Image asset metadata as handed over by the host media pipeline.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub resource: MediaResource,
    /// Native width, if the host knows it
    pub width: Option<u32>,
    /// Native height, if the host knows it
    pub height: Option<u32>,
}

/// Requested thumbnail parameters, mirroring the host's thumbnail
/// configuration object.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailConfiguration {
    pub width: Option<u32>,
    pub maximum_width: Option<u32>,
    pub height: Option<u32>,
    pub maximum_height: Option<u32>,
    pub allow_cropping: bool,
    pub allow_up_scaling: bool,
    pub quality: Option<u8>,
    pub format: Option<String>,
}

/// What the host renders into the image tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailResult {
    pub width: u32,
    pub height: u32,
    pub src: String,
}

/// Produces thumbnail proxy URLs for media assets.
///
/// A `None` result means "not handled here" and the host falls back to its
/// own thumbnail pipeline.
pub struct ThumbnailService<R> {
    config: ImgproxyConfig,
    builder: UrlBuilder,
    resolver: R,
}

impl<R: SourceUriResolver> ThumbnailService<R> {
    pub fn new(config: ImgproxyConfig, resolver: R) -> Result<Self, BridgeError> {
        let builder = UrlBuilder::new(config.imgproxy_url.clone(), &config.key, &config.salt)?;
        Ok(Self {
            config,
            builder,
            resolver,
        })
    }

    /// Thumbnail URL and predicted output size for `asset`, or `None` when
    /// proxying is not configured for it.
    pub fn thumbnail(
        &self,
        asset: &ImageAsset,
        configuration: &ThumbnailConfiguration,
    ) -> Option<ThumbnailResult> {
        if !self.config.is_enabled() {
            tracing::debug!("No proxy base URL configured, leaving thumbnail to the host");
            return None;
        }
        if !self.config.is_media_type_enabled(&asset.resource.media_type) {
            tracing::debug!(
                media_type = %asset.resource.media_type,
                "Media type not enabled for proxying"
            );
            return None;
        }

        let source_uri = self.resolver.resolve_source_uri(&asset.resource);

        let target = Dimensions::from_optional(
            configuration.width.or(configuration.maximum_width),
            configuration.height.or(configuration.maximum_height),
        );
        let resize_type = derive_resize_type(configuration);
        let enlarge = configuration.allow_up_scaling;

        let quality = match configuration.quality {
            Some(q) => Quality::Numeric(q),
            None => self.config.fallback_quality(),
        };

        let mut request = self
            .builder
            .build_url(&source_uri)
            .file_name(asset.resource.filename_stem())
            .quality(quality)
            .resize(
                Some(resize_type),
                Some(target.width),
                Some(target.height),
                Some(enlarge),
                Some(false),
            );

        if !self.config.auto_format {
            if let Some(format) = configuration.format.as_deref() {
                request = request.extension(Some(format));
            }
        }

        let actual = Dimensions::from_optional(asset.width, asset.height);
        let size = expected_size(actual, target, resize_type, enlarge);

        Some(ThumbnailResult {
            width: size.width,
            height: size.height,
            src: request.build(),
        })
    }
}

/// `fit` unless the host asked for cropping (`fill`) or for an exact box
/// without maximum bounds (`force`).
fn derive_resize_type(configuration: &ThumbnailConfiguration) -> ResizeType {
    if configuration.allow_cropping {
        ResizeType::Fill
    } else if configuration.maximum_width.is_none()
        && configuration.width.is_some()
        && configuration.maximum_height.map_or(false, |h| h != 0)
        && configuration.height.is_some()
    {
        ResizeType::Force
    } else {
        ResizeType::Fit
    }
}
