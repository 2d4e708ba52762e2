//! Desktop two-up layout: which content lives on each physical sheet.
//!
//! ```text
//! sheet 0        front = front cover      back = page 0
//! sheet i        front = page 1+(i-1)*2   back = page 2+(i-1)*2
//! last sheet     front = page 1+(i-1)*2   back = back cover
//! ```
//!
//! Faces past the end of the page list are blank paper.

use crate::content::model::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverVariant {
    Front,
    Back,
}

/// Which half of the open spread a page face renders on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "face", rename_all = "snake_case")]
pub enum SheetFace<'a> {
    Cover {
        variant: CoverVariant,
    },
    Page {
        index: usize,
        /// 1-based number printed on the page.
        number: usize,
        side: PageSide,
        #[serde(skip)]
        page: &'a Page,
    },
    Blank,
}

impl SheetFace<'_> {
    pub fn page_index(&self) -> Option<usize> {
        match self {
            Self::Page { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Sheet<'a> {
    pub index: usize,
    pub front: SheetFace<'a>,
    pub back: SheetFace<'a>,
}

/// Number of physical sheets for `page_count` pages: both covers plus two pages per leaf.
pub fn total_sheets(page_count: usize) -> usize {
    page_count.div_ceil(2) + 2
}

fn page_face(pages: &[Page], index: usize, side: PageSide) -> SheetFace<'_> {
    match pages.get(index) {
        Some(page) => SheetFace::Page {
            index,
            number: index + 1,
            side,
            page,
        },
        None => SheetFace::Blank,
    }
}

/// Faces of sheet `index`. Indices at or past [`total_sheets`] map to blank paper.
pub fn map_sheet(index: usize, pages: &[Page]) -> Sheet<'_> {
    let last = total_sheets(pages.len()) - 1;

    let (front, back) = if index == 0 {
        (
            SheetFace::Cover {
                variant: CoverVariant::Front,
            },
            page_face(pages, 0, PageSide::Left),
        )
    } else if index == last {
        (
            page_face(pages, 1 + (index - 1) * 2, PageSide::Right),
            SheetFace::Cover {
                variant: CoverVariant::Back,
            },
        )
    } else if index < last {
        let front = 1 + (index - 1) * 2;
        (
            page_face(pages, front, PageSide::Right),
            page_face(pages, front + 1, PageSide::Left),
        )
    } else {
        (SheetFace::Blank, SheetFace::Blank)
    };

    Sheet { index, front, back }
}

#[cfg(test)]
#[path = "../../tests/unit/book/sheet.rs"]
mod tests;
