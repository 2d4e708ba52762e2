//! Best-effort image preloading.
//!
//! Local images are probed for their dimensions so broken assets show up in the logs before the
//! book opens. Nothing here can fail the caller: every problem is counted and logged.

use std::path::{Path, PathBuf};

use crate::content::{
    images::{ImageResolver, ImageSource},
    model::Story,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PreloadReport {
    /// Local images decoded successfully.
    pub ready: Vec<PreloadedImage>,
    /// Remote sources left to the host's own loader.
    pub remote: usize,
    /// Local sources that could not be read or decoded.
    pub failed: usize,
    /// Pages with no image at all.
    pub without_image: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PreloadedImage {
    pub page_index: usize,
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Map a resolved local `src` back to a file under `asset_root`.
pub fn local_path(resolver: &ImageResolver, asset_root: &Path, src: &str) -> PathBuf {
    let rel = src
        .strip_prefix(resolver.base_url())
        .or_else(|| src.strip_prefix('/'))
        .unwrap_or(src);
    asset_root.join(rel)
}

#[tracing::instrument(skip(story, resolver), fields(pages = story.pages.len()))]
pub fn preload_images(story: &Story, resolver: &ImageResolver, asset_root: &Path) -> PreloadReport {
    let mut report = PreloadReport::default();

    for (page_index, page) in story.pages.iter().enumerate() {
        let Some(source) = resolver.page_image(page, page_index + 1) else {
            report.without_image += 1;
            continue;
        };
        if source.is_remote() {
            report.remote += 1;
            continue;
        }
        let ImageSource::Url(src) = source else {
            report.remote += 1;
            continue;
        };

        let path = local_path(resolver, asset_root, &src);
        match image::image_dimensions(&path) {
            Ok((width, height)) => report.ready.push(PreloadedImage {
                page_index,
                src,
                width,
                height,
            }),
            Err(err) => {
                tracing::debug!(page_index, path = %path.display(), %err, "image preload failed");
                report.failed += 1;
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "../../tests/unit/content/preload.rs"]
mod tests;
