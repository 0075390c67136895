use std::cell::Cell;
use std::path::Path;

use svgprim::{ElementId, Error, Loader, Options, Source};

const ICON: &str = "<svg viewBox='0 0 10 10'><circle r='5'/></svg>";

fn memory_loader<'a>(loads: &'a Cell<u32>) -> Loader<'a> {
    Loader {
        fetch: Box::new(|uri: &str| match uri {
            "icons/circle.svg" => Ok(ICON.to_string()),
            "icons/broken.svg" => Ok("<svg a='1'><g></svg>".to_string()),
            _ => Err(format!("'{}' not found", uri)),
        }),
        on_load: Some(Box::new(move || loads.set(loads.get() + 1))),
        ..Loader::default()
    }
}

#[test]
fn load_data() {
    let loads = Cell::new(0);
    let loader = memory_loader(&loads);

    let tree = loader
        .load(&Source::Data(ICON.to_string()), &Options::default())
        .unwrap()
        .unwrap();
    assert_eq!(tree.root().tag_name(), Some(ElementId::Svg));
    assert_eq!(loads.get(), 0);
}

#[test]
fn load_href() {
    let loads = Cell::new(0);
    let loader = memory_loader(&loads);

    let tree = loader
        .load(&Source::Href("icons/circle.svg".to_string()), &Options::default())
        .unwrap()
        .unwrap();
    assert_eq!(tree.descendants().count(), 2);
    assert_eq!(loads.get(), 1);
}

#[test]
fn load_missing_href() {
    let loads = Cell::new(0);
    let loader = memory_loader(&loads);

    let res = loader.load(&Source::Href("icons/none.svg".to_string()), &Options::default());
    assert!(matches!(res, Err(Error::SourceUnavailable(_))));
    assert_eq!(loads.get(), 0);
}

#[test]
fn load_broken_href() {
    let loads = Cell::new(0);
    let loader = memory_loader(&loads);

    let res = loader.load(&Source::Href("icons/broken.svg".to_string()), &Options::default());
    assert!(res.unwrap().is_none());
    assert_eq!(loads.get(), 1);
}

#[test]
fn unresolved_href() {
    let loader = Loader {
        resolve_href: Box::new(|_, _| None),
        ..Loader::default()
    };

    let res = loader.load(&Source::Href("a.svg".to_string()), &Options::default());
    assert!(matches!(res, Err(Error::SourceUnavailable(_))));
}

#[test]
fn relative_href() {
    let loader = Loader {
        resources_dir: Some(Path::new("res").to_path_buf()),
        fetch: Box::new(|uri: &str| {
            if Path::new(uri) == Path::new("res/icons/circle.svg") {
                Ok(ICON.to_string())
            } else {
                Err(format!("'{}' not found", uri))
            }
        }),
        ..Loader::default()
    };

    let res = loader.load(&Source::Href("icons/circle.svg".to_string()), &Options::default());
    assert!(res.unwrap().is_some());
}

#[test]
fn load_file() {
    let path = std::env::temp_dir().join(format!("svgprim-load-file-{}.svg", std::process::id()));
    std::fs::write(&path, ICON).unwrap();

    let href = format!("file://{}", path.display());
    let res = Loader::default().load(&Source::Href(href), &Options::default());
    std::fs::remove_file(&path).unwrap();

    assert!(res.unwrap().is_some());
}

#[test]
fn network_href_is_unavailable() {
    let res = Loader::default().load(
        &Source::Href("https://example.com/a.svg".to_string()),
        &Options::default(),
    );
    assert!(matches!(res, Err(Error::SourceUnavailable(_))));
}
