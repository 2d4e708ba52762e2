use crate::{config::ImageConfig, content::model::Page};

/// Turns authored image paths into displayable ones under a deployment base path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
    placeholder_width: u32,
    placeholder_height: u32,
}

/// Where a page's picture comes from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum ImageSource {
    /// An authored image path, already resolved against the base path.
    Url(String),
    /// A seeded placeholder generated from the page's keyword.
    Keyword(String),
}

impl ImageSource {
    pub fn src(&self) -> &str {
        match self {
            Self::Url(s) | Self::Keyword(s) => s,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.src().starts_with("http")
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::from_config(&ImageConfig::default())
    }
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let defaults = ImageConfig::default();
        Self {
            base_url,
            placeholder_width: defaults.placeholder_width,
            placeholder_height: defaults.placeholder_height,
        }
    }

    pub fn from_config(cfg: &ImageConfig) -> Self {
        Self {
            placeholder_width: cfg.placeholder_width,
            placeholder_height: cfg.placeholder_height,
            ..Self::new(cfg.base_url.clone())
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a possibly-relative path. `None` or empty input means no image.
    pub fn resolve(&self, path: Option<&str>) -> Option<String> {
        let path = path.filter(|p| !p.is_empty())?;

        if path.starts_with("http") {
            return Some(path.to_owned());
        }
        // Already carries the deployment prefix; a second one would break the URL.
        if self.base_url != "/" && path.contains(self.base_url.as_str()) {
            return Some(path.to_owned());
        }

        let clean = path.strip_prefix('/').unwrap_or(path);
        Some(format!("{}{clean}", self.base_url))
    }

    /// Image for `page` shown as 1-based `page_number`: URL first, then keyword, else none.
    pub fn page_image(&self, page: &Page, page_number: usize) -> Option<ImageSource> {
        if let Some(url) = self.resolve(page.image_url.as_deref()) {
            return Some(ImageSource::Url(url));
        }
        let keyword = page.image_keyword.as_deref().filter(|k| !k.is_empty())?;
        Some(ImageSource::Keyword(format!(
            "https://picsum.photos/seed/{keyword}{page_number}/{}/{}",
            self.placeholder_width, self.placeholder_height
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/images.rs"]
mod tests;
