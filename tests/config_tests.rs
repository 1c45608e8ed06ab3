use std::io::Write;
use std::time::Duration;

use gallery_carousel::breakpoints::Breakpoint;
use gallery_carousel::config::Configuration;
use gallery_carousel::pause::PausePolicy;

#[test]
fn defaults_when_empty() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.auto_advance, Duration::from_millis(3000));
    assert_eq!(cfg.transition, Duration::from_millis(500));
    assert_eq!(cfg.viewport_width, 1280);
    assert_eq!(cfg.pause_policy, PausePolicy::Shared);
    assert_eq!(cfg.breakpoints.rows().len(), 4);
    assert!(cfg.item_sequence().unwrap().is_empty());
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
viewport-width: 700
auto-advance: 5s
transition: 250ms
pause-policy: per-source
items:
  - src: "/img/a.jpg"
    alt: "Harbour at dawn"
  - src: "/img/b.png"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.viewport_width, 700);
    assert_eq!(cfg.auto_advance, Duration::from_secs(5));
    assert_eq!(cfg.transition, Duration::from_millis(250));
    assert_eq!(cfg.pause_policy, PausePolicy::PerSource);

    let items = cfg.item_sequence().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.get(0).unwrap().alt, "Harbour at dawn");
    assert_eq!(items.get(1).unwrap().alt, "b");
    assert_eq!(items.get(1).unwrap().index, 1);

    let options = cfg.carousel_options();
    assert_eq!(options.viewport_width, 700);
    assert_eq!(options.breakpoints.visible_for(700), 2);
}

#[test]
fn parse_custom_breakpoints() {
    let yaml = r#"
breakpoints:
  - max-width: 600
    visible: 1
  - visible: 5
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(
        cfg.breakpoints.rows(),
        &[
            Breakpoint {
                max_width: Some(600),
                visible: 1
            },
            Breakpoint {
                max_width: None,
                visible: 5
            },
        ]
    );
    assert_eq!(cfg.breakpoints.visible_for(601), 5);
}

#[test]
fn rejects_breakpoints_without_catch_all() {
    let yaml = r#"
breakpoints:
  - max-width: 600
    visible: 1
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(format!("{err:#}").contains("max-width"));
}

#[test]
fn rejects_zero_durations() {
    let cfg: Configuration = serde_yaml::from_str("auto-advance: 0s").unwrap();
    assert!(cfg.validated().is_err());
    let cfg: Configuration = serde_yaml::from_str("transition: 0ms").unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn rejects_items_and_library_together() {
    let yaml = r#"
library-path: "/photos"
items:
  - src: "/img/a.jpg"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn rejects_unknown_pause_policy() {
    assert!(serde_yaml::from_str::<Configuration>("pause-policy: sometimes").is_err());
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "viewport-width: 480\nauto-advance: 2s").unwrap();
    let cfg = Configuration::from_yaml_file(file.path())
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.viewport_width, 480);
    assert_eq!(cfg.breakpoints.visible_for(cfg.viewport_width), 1);
    assert_eq!(cfg.auto_advance, Duration::from_secs(2));
}

#[test]
fn library_path_scans_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.jpg"), b"x").unwrap();
    std::fs::write(dir.path().join("a.png"), b"x").unwrap();
    let yaml = format!("library-path: {:?}", dir.path().to_string_lossy());
    let cfg: Configuration = serde_yaml::from_str(&yaml).unwrap();
    let items = cfg.validated().unwrap().item_sequence().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.get(0).unwrap().alt, "a");
}

#[test]
fn rejects_unknown_keys() {
    let err = serde_yaml::from_str::<Configuration>("autoadvance: 5s").unwrap_err();
    assert!(err.to_string().contains("autoadvance"), "{err}");

    let yaml = r#"
items:
  - src: "/img/a.jpg"
    title: "Harbour"
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}
