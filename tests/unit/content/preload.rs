use super::*;
use crate::content::model::Page;

fn write_png(path: &Path, w: u32, h: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(w, h, image::Rgba([200, 180, 120, 255]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

#[test]
fn local_path_strips_base_prefix() {
    let r = ImageResolver::new("/OSEM-YearBook/");
    let root = Path::new("public");
    assert_eq!(
        local_path(&r, root, "/OSEM-YearBook/images/a.png"),
        root.join("images/a.png")
    );
    assert_eq!(local_path(&r, root, "/images/a.png"), root.join("images/a.png"));
}

#[test]
fn preload_counts_every_outcome_without_failing() {
    let root = PathBuf::from("target").join("preload_unit");
    write_png(&root.join("images/ok.png"), 3, 2);

    let mut local_ok = Page::profile("Asha", "a");
    local_ok.image_url = Some("/images/ok.png".into());
    let mut local_missing = Page::profile("Ravi", "b");
    local_missing.image_url = Some("/images/missing.png".into());
    let mut keyword = Page::chapter("Sports", "c");
    keyword.image_keyword = Some("stadium".into());
    let mut remote = Page::profile("Meera", "d");
    remote.image_url = Some("https://cdn.example.com/m.jpg".into());
    let bare = Page::chapter("Quiet", "e");

    let story = Story {
        title: "t".into(),
        author: "a".into(),
        pages: vec![local_ok, local_missing, keyword, remote, bare],
    };

    let report = preload_images(&story, &ImageResolver::new("/"), &root);
    assert_eq!(report.ready.len(), 1);
    assert_eq!(report.ready[0].page_index, 0);
    assert_eq!((report.ready[0].width, report.ready[0].height), (3, 2));
    assert_eq!(report.failed, 1);
    assert_eq!(report.remote, 2);
    assert_eq!(report.without_image, 1);
}
