use pipfall_data::load_catalog;
use std::fs;
use std::path::PathBuf;

fn write_catalog(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pipfall-{name}-{}.json", std::process::id()));
    fs::write(&path, body).expect("write temp catalog");
    path
}

#[test]
fn accepts_a_minimal_catalog() {
    let path = write_catalog(
        "ok",
        r#"[
            {"key": "strike", "name": "Strike", "effect": "strike", "description": "hit"},
            {"key": "mirror", "name": "Mirror", "effect": "mirror", "description": "flip",
             "targets": 1, "multi_select": true}
        ]"#,
    );
    let catalog = load_catalog(&path).expect("valid catalog");
    assert_eq!(catalog.cards.len(), 2);
    let _ = fs::remove_file(&path);
}

#[test]
fn rejects_duplicate_keys() {
    let path = write_catalog(
        "dup",
        r#"[
            {"key": "strike", "name": "Strike", "effect": "strike", "description": "hit"},
            {"key": "strike", "name": "Strike", "effect": "strike", "description": "hit"}
        ]"#,
    );
    let err = load_catalog(&path).expect_err("duplicate key");
    assert!(format!("{err:#}").contains("duplicate card key"));
    let _ = fs::remove_file(&path);
}

#[test]
fn rejects_unrecognized_effects() {
    let path = write_catalog(
        "unknown",
        r#"[
            {"key": "wish", "name": "Wish", "effect": "wish_upon_a_die", "description": "?"}
        ]"#,
    );
    let err = load_catalog(&path).expect_err("unknown effect");
    assert!(format!("{err:#}").contains("unrecognized effect"));
    let _ = fs::remove_file(&path);
}

#[test]
fn rejects_board_effects_with_targets() {
    let path = write_catalog(
        "targets",
        r#"[
            {"key": "strike", "name": "Strike", "effect": "strike", "description": "hit",
             "targets": 1}
        ]"#,
    );
    let err = load_catalog(&path).expect_err("strike takes no targets");
    assert!(format!("{err:#}").contains("takes no targets"));
    let _ = fs::remove_file(&path);
}

#[test]
fn rejects_clone_without_two_targets() {
    let path = write_catalog(
        "clone",
        r#"[
            {"key": "clone", "name": "Clone", "effect": "clone", "description": "copy",
             "targets": 1}
        ]"#,
    );
    let err = load_catalog(&path).expect_err("clone needs two targets");
    assert!(format!("{err:#}").contains("exactly 2"));
    let _ = fs::remove_file(&path);
}

#[test]
fn rejects_selection_effects_without_targets() {
    let path = write_catalog(
        "mirror",
        r#"[
            {"key": "mirror", "name": "Mirror", "effect": "mirror", "description": "flip"}
        ]"#,
    );
    let err = load_catalog(&path).expect_err("mirror needs a target");
    assert!(format!("{err:#}").contains("at least 1"));
    let _ = fs::remove_file(&path);
}
