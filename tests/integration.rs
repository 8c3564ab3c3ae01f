// SPDX-License-Identifier: MPL-2.0
use thumbcap_studio::config::{self, Config};
use thumbcap_studio::export::{ExportSnapshot, DEFAULT_FILENAME};
use thumbcap_studio::generation::GeneratedContent;
use thumbcap_studio::i18n::fluent::I18n;
use thumbcap_studio::media;
use thumbcap_studio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_both_locales_translate_pipeline_tasks() {
    let mut i18n = I18n::default();

    i18n.set_locale("en-US".parse().expect("locale"));
    let english = i18n.tr("generation-task-frames");
    assert!(english.contains("key frames"));

    i18n.set_locale("fr".parse().expect("locale"));
    let french = i18n.tr("generation-task-frames");
    assert!(french.contains("images clés"));
}

#[test]
fn test_config_round_trip_preserves_export_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::Light,
        last_export_dir: Some(dir.path().join("exports")),
    };
    config::save_to_path(&config, &config_path).expect("save");

    let loaded = config::load_from_path(&config_path).expect("load");
    assert_eq!(loaded.language, Some("fr".to_string()));
    assert_eq!(loaded.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.last_export_dir, Some(dir.path().join("exports")));
}

#[test]
fn test_export_document_round_trip_on_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let export_path = dir.path().join(DEFAULT_FILENAME);

    let video = media::analyze_youtube_url("https://youtube.com/watch?v=demo").expect("video");
    let content = GeneratedContent::mock();
    let snapshot = ExportSnapshot::new(
        video,
        content.thumbnails[4].clone(),
        &content.captions[2],
        "Custom caption from the integration test".to_string(),
    );

    snapshot.write_to_path(&export_path).expect("write export");

    let written = std::fs::read_to_string(&export_path).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");

    assert_eq!(value["video"]["type"], "youtube");
    assert_eq!(value["thumbnail"]["style"], "Dramatic");
    assert_eq!(value["analytics"]["predicted_ctr"], 8.7);
    assert_eq!(value["analytics"]["seo_score"], 85);
    assert_eq!(
        value["caption"],
        "Custom caption from the integration test"
    );
}
