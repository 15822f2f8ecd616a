//! Per-request processing option accumulator

use crate::builder::UrlBuilder;
use crate::options::{Quality, ResizeType};

/// One proxy URL in the making.
///
/// Obtained from [`UrlBuilder::build_url`]. Options render in call order,
/// which is part of the wire contract. Setters consume and return the request
/// so chains read naturally; [`build`](Self::build) borrows and can be called
/// repeatedly with identical output.
#[derive(Debug, Clone)]
pub struct UrlRequest<'a> {
    builder: &'a UrlBuilder,
    source_url: String,
    options: Vec<String>,
    extension: Option<String>,
}

impl<'a> UrlRequest<'a> {
    pub(crate) fn new(builder: &'a UrlBuilder, source_url: &str) -> Self {
        UrlRequest {
            builder,
            source_url: source_url.to_string(),
            options: Vec::new(),
            extension: None,
        }
    }

    /// Append a resize option, rendered `rs:<type>:<w>:<h>:<enlarge>:<extend>`.
    ///
    /// Absent components render as empty segments. A width or height of 0
    /// also renders empty; callers use 0 for "unconstrained". Flags render
    /// as `1`/`0`.
    pub fn resize(
        mut self,
        resize_type: Option<ResizeType>,
        width: Option<u32>,
        height: Option<u32>,
        enlarge: Option<bool>,
        extend: Option<bool>,
    ) -> Self {
        let opt = format!(
            "rs:{}:{}:{}:{}:{}",
            resize_type.map(|t| t.as_str()).unwrap_or(""),
            fmt_dimension(width),
            fmt_dimension(height),
            fmt_flag(enlarge),
            fmt_flag(extend),
        );
        self.options.push(opt);
        self
    }

    /// Append `fn:<name>`; the proxy serves the result under this filename.
    ///
    /// Digit-only names get a `_` prefix so the segment cannot be read as a
    /// numeric option value. Callers sanitize `name` beyond that before
    /// passing it in.
    pub fn file_name(mut self, name: &str) -> Self {
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            self.options.push(format!("fn:_{}", name));
        } else {
            self.options.push(format!("fn:{}", name));
        }
        self
    }

    /// Append the matching quality option. [`Quality::Default`] appends
    /// nothing, leaving the choice to the proxy.
    pub fn quality(mut self, quality: Quality) -> Self {
        match quality {
            Quality::Numeric(q) => self.options.push(format!("q:{}", q)),
            Quality::FormatSpec(spec) => self.options.push(format!("fq:{}", spec)),
            Quality::Default => {}
        }
        self
    }

    /// Append `cb:<token>` so downstream caches refetch when the source
    /// changes.
    pub fn cache_buster(mut self, token: &str) -> Self {
        self.options.push(format!("cb:{}", token));
        self
    }

    /// Set the result file extension; `None` leaves the source format.
    pub fn extension(mut self, extension: Option<&str>) -> Self {
        self.extension = extension.map(str::to_string);
        self
    }

    /// Render the final URL.
    pub fn build(&self) -> String {
        self.builder
            .generate_url(&self.source_url, &self.options, self.extension.as_deref())
    }
}

fn fmt_dimension(value: Option<u32>) -> String {
    match value {
        Some(v) if v != 0 => v.to_string(),
        _ => String::new(),
    }
}

fn fmt_flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "1".to_string(),
        Some(false) => "0".to_string(),
        None => String::new(),
    }
}
