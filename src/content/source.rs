//! Static yearbook record and the story builder.
//!
//! Page order is chapters (by `order`), then one profile per student, then the farewell.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    content::model::{Page, PageKind, PageLayout, Story},
    foundation::error::{YearbookError, YearbookResult},
};

/// Chapter title given to every student profile page.
pub const PROFILE_CHAPTER_TITLE: &str = "Student Profile";

/// The yearbook data file as authored.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct YearbookSource {
    pub metadata: SourceMetadata,
    #[serde(default)]
    pub chapters: Vec<ChapterRecord>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    pub farewell: ChapterRecord,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SourceMetadata {
    pub yearbook: YearbookMetadata,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct YearbookMetadata {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    #[serde(default)]
    pub order: i64,
    #[serde(rename = "type", default = "default_chapter_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_keyword: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

fn default_chapter_type() -> String {
    "chapter".to_owned()
}

impl YearbookSource {
    pub fn from_json_str(s: &str) -> YearbookResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> YearbookResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read yearbook data '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Build the ordered story. The ordering is part of the narrative and must not change.
    pub fn build_story(&self) -> YearbookResult<Story> {
        let mut chapters: Vec<&ChapterRecord> = self.chapters.iter().collect();
        chapters.sort_by_key(|c| c.order);

        let mut pages = Vec::with_capacity(chapters.len() + self.students.len() + 1);
        for chapter in chapters {
            pages.push(chapter_page(chapter, true)?);
        }
        for student in &self.students {
            pages.push(profile_page(student));
        }
        // Farewell layout is never honoured; it always renders as a standard chapter.
        pages.push(chapter_page(&self.farewell, false)?);

        tracing::debug!(
            chapters = self.chapters.len(),
            students = self.students.len(),
            pages = pages.len(),
            "built yearbook story"
        );

        Ok(Story {
            title: self.metadata.yearbook.title.clone(),
            author: self.metadata.yearbook.subtitle.clone(),
            pages,
        })
    }
}

fn chapter_page(record: &ChapterRecord, honour_layout: bool) -> YearbookResult<Page> {
    let kind = PageKind::parse(&record.kind)
        .map_err(|e| YearbookError::content(format!("chapter {}: {e}", record.order)))?;
    let layout = match (&record.layout, honour_layout) {
        (Some(layout), true) => PageLayout::parse(layout)
            .map_err(|e| YearbookError::content(format!("chapter {}: {e}", record.order)))?,
        _ => PageLayout::Standard,
    };

    Ok(Page {
        kind,
        layout,
        text: record.text.clone(),
        image_keyword: non_empty(&record.image_keyword),
        image_url: None,
        chapter_title: record.chapter_title.clone(),
        student_name: None,
        nickname: None,
    })
}

fn profile_page(record: &StudentRecord) -> Page {
    Page {
        kind: PageKind::Profile,
        layout: PageLayout::Standard,
        text: record.quote.clone(),
        image_keyword: non_empty(&record.image_keyword),
        image_url: non_empty(&record.image_url),
        chapter_title: Some(PROFILE_CHAPTER_TITLE.to_owned()),
        student_name: Some(record.name.clone()),
        nickname: non_empty(&record.nickname),
    }
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Load a yearbook data file and build its story in one step.
pub fn load_story(path: &Path) -> YearbookResult<Story> {
    YearbookSource::load(path)?.build_story()
}

#[cfg(test)]
#[path = "../../tests/unit/content/source.rs"]
mod tests;
