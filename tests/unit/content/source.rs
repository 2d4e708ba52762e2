use super::*;

fn source(json: serde_json::Value) -> YearbookSource {
    serde_json::from_value(json).unwrap()
}

fn minimal() -> serde_json::Value {
    serde_json::json!({
        "metadata": { "yearbook": { "title": "Memories", "subtitle": "Class of 2025" } },
        "chapters": [
            { "order": 2, "type": "chapter", "chapterTitle": "Second", "text": "b", "imageKeyword": "school" },
            { "order": 1, "type": "chapter", "layout": "full-image", "chapterTitle": "First", "text": "a" }
        ],
        "students": [
            { "name": "Asha", "quote": "Onwards", "imageKeyword": "portrait", "imageUrl": "" }
        ],
        "farewell": { "order": 99, "type": "chapter", "layout": "full-image", "chapterTitle": "Farewell", "text": "bye" }
    })
}

#[test]
fn pages_are_chapters_then_profiles_then_farewell() {
    let story = source(minimal()).build_story().unwrap();
    let titles: Vec<_> = story
        .pages
        .iter()
        .map(|p| p.chapter_title.clone().unwrap_or_default())
        .collect();
    assert_eq!(titles, ["First", "Second", PROFILE_CHAPTER_TITLE, "Farewell"]);
    assert_eq!(story.pages[2].kind, PageKind::Profile);
    assert_eq!(story.pages[2].student_name.as_deref(), Some("Asha"));
    assert_eq!(story.pages[2].text, "Onwards");
}

#[test]
fn story_metadata_comes_from_yearbook_block() {
    let story = source(minimal()).build_story().unwrap();
    assert_eq!(story.title, "Memories");
    assert_eq!(story.author, "Class of 2025");
}

#[test]
fn empty_image_url_is_absent() {
    let story = source(minimal()).build_story().unwrap();
    assert_eq!(story.pages[2].image_url, None);
    assert_eq!(story.pages[2].image_keyword.as_deref(), Some("portrait"));
}

#[test]
fn chapter_layout_kept_but_farewell_layout_ignored() {
    let story = source(minimal()).build_story().unwrap();
    assert_eq!(story.pages[0].layout, PageLayout::FullImage);
    assert_eq!(story.pages[3].layout, PageLayout::Standard);
}

#[test]
fn equal_orders_keep_authoring_order() {
    let mut json = minimal();
    json["chapters"] = serde_json::json!([
        { "order": 1, "chapterTitle": "A", "text": "" },
        { "order": 1, "chapterTitle": "B", "text": "" },
        { "order": 0, "chapterTitle": "C", "text": "" }
    ]);
    let story = source(json).build_story().unwrap();
    let titles: Vec<_> = story.pages[..3]
        .iter()
        .map(|p| p.chapter_title.clone().unwrap())
        .collect();
    assert_eq!(titles, ["C", "A", "B"]);
}

#[test]
fn unknown_chapter_type_is_a_content_error() {
    let mut json = minimal();
    json["chapters"][0]["type"] = serde_json::json!("poster");
    let err = source(json).build_story().unwrap_err();
    assert!(matches!(err, YearbookError::Content(_)));
}

#[test]
fn missing_farewell_fails_to_parse() {
    let mut json = minimal();
    json.as_object_mut().unwrap().remove("farewell");
    let err = YearbookSource::from_json_str(&json.to_string()).unwrap_err();
    assert!(matches!(err, YearbookError::Serde(_)));
}

#[test]
fn no_students_still_ends_with_farewell() {
    let mut json = minimal();
    json["students"] = serde_json::json!([]);
    let story = source(json).build_story().unwrap();
    assert_eq!(story.page_count(), 3);
    assert_eq!(
        story.pages.last().unwrap().chapter_title.as_deref(),
        Some("Farewell")
    );
}

#[test]
fn blank_title_and_student_name_still_build() {
    let mut json = minimal();
    json["metadata"]["yearbook"]["title"] = "".into();
    json["students"][0]["name"] = "".into();
    let story = source(json).build_story().unwrap();
    assert_eq!(story.title, "");
    assert_eq!(story.pages[2].student_name.as_deref(), Some(""));
    assert_eq!(story.page_count(), 4);
}
