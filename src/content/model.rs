use crate::foundation::error::{YearbookError, YearbookResult};

/// Header shown on profile pages without an explicit chapter title.
pub const PROFILE_HEADER: &str = "Class of 2025";

/// A complete yearbook, built once and read-only afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Story {
    pub title: String,
    pub author: String,
    pub pages: Vec<Page>,
}

impl Story {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    #[default]
    Chapter,
    Profile,
}

impl PageKind {
    pub fn parse(s: &str) -> YearbookResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chapter" => Ok(Self::Chapter),
            "profile" => Ok(Self::Profile),
            other => Err(YearbookError::validation(format!(
                "unknown page type '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageLayout {
    #[default]
    Standard,
    /// Chapter-only: the image fills the page with the text overlaid.
    FullImage,
}

impl PageLayout {
    pub fn parse(s: &str) -> YearbookResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "full-image" | "full_image" | "fullimage" => Ok(Self::FullImage),
            other => Err(YearbookError::validation(format!(
                "unknown page layout '{other}'"
            ))),
        }
    }
}

/// One content page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub kind: PageKind,
    pub layout: PageLayout,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Page {
    pub fn chapter(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: PageKind::Chapter,
            chapter_title: Some(title.into()),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn profile(student_name: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            kind: PageKind::Profile,
            student_name: Some(student_name.into()),
            text: quote.into(),
            ..Self::default()
        }
    }

    /// Full-image layout only applies to chapters.
    pub fn effective_layout(&self) -> PageLayout {
        match self.kind {
            PageKind::Chapter => self.layout,
            PageKind::Profile => PageLayout::Standard,
        }
    }

    /// Running header for this page given its 1-based page number.
    pub fn header_label(&self, page_number: usize) -> String {
        match (&self.chapter_title, self.kind) {
            (Some(title), _) if !title.is_empty() => title.clone(),
            (_, PageKind::Profile) => PROFILE_HEADER.to_owned(),
            (_, PageKind::Chapter) => format!("Chapter {page_number}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
