// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证看板配置读取、覆写与默认值回落
// ==========================================

mod test_helpers;

use production_plan_board::config::{config_keys, BoardConfigReader, BoardProfile, ConfigManager};
use production_plan_board::engine::color::DEFAULT_PALETTE;
use production_plan_board::engine::LayoutParams;
use production_plan_board::i18n;
use test_helpers::{create_test_db, insert_board_config};

#[tokio::test]
async fn test_config_manager_creation() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let config_manager = ConfigManager::new(&db_path);
    assert!(
        config_manager.is_ok(),
        "ConfigManager should be created successfully"
    );
}

#[tokio::test]
async fn test_empty_config_uses_defaults() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    let palette = config_manager.get_palette().await.expect("palette");
    assert_eq!(palette.len(), DEFAULT_PALETTE.len());

    let lines = config_manager.get_canonical_lines().await.expect("lines");
    assert_eq!(lines, BoardProfile::default().canonical_lines);

    let layout = config_manager.get_layout_params().await.expect("layout");
    assert_eq!(layout, LayoutParams::default());
}

#[tokio::test]
async fn test_overrides_are_read_back() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    insert_board_config(
        &config_manager,
        &[
            (config_keys::PALETTE, r##"["#112233", "#445566"]"##),
            (config_keys::CANONICAL_LINES, r#"["SMT-1", "SMT-2", "DIP"]"#),
            (config_keys::LAYOUT, r#"{"row_unit_px": 30, "min_chart_height_px": 100}"#),
            (config_keys::SUMMARY_COLUMN_LABEL, "日计划"),
        ],
    )
    .expect("Failed to insert config");

    let profile = config_manager.load_board_profile().await.expect("profile");
    assert_eq!(profile.palette, vec!["#112233", "#445566"]);
    assert_eq!(profile.canonical_lines, vec!["SMT-1", "SMT-2", "DIP"]);
    assert_eq!(profile.layout.row_unit_px, 30.0);
    assert_eq!(profile.layout.min_chart_height_px, 100.0);
    // 未覆写的布局字段保持默认
    assert_eq!(profile.layout.bottom_padding_px, LayoutParams::default().bottom_padding_px);
    assert_eq!(profile.summary_column_label, "日计划");
}

#[tokio::test]
async fn test_upsert_replaces_previous_value() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    config_manager
        .set_global_config_value(config_keys::CANONICAL_LINES, r#"["A"]"#)
        .unwrap();
    config_manager
        .set_global_config_value(config_keys::CANONICAL_LINES, r#"["B", "C"]"#)
        .unwrap();

    let lines = config_manager.get_canonical_lines().await.unwrap();
    assert_eq!(lines, vec!["B", "C"]);
}

#[tokio::test]
async fn test_malformed_values_fall_back() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    insert_board_config(
        &config_manager,
        &[
            (config_keys::PALETTE, "[]"),
            (config_keys::CANONICAL_LINES, "not json"),
            (config_keys::LAYOUT, r#"{"row_unit_px": -5, "list_panel_ratio": 0}"#),
        ],
    )
    .unwrap();

    let palette = config_manager.get_palette().await.unwrap();
    assert_eq!(palette.len(), DEFAULT_PALETTE.len(), "空调色板回落默认");

    let lines = config_manager.get_canonical_lines().await.unwrap();
    assert_eq!(lines, BoardProfile::default().canonical_lines);

    let layout = config_manager.get_layout_params().await.unwrap();
    assert_eq!(layout.row_unit_px, LayoutParams::default().row_unit_px);
    assert_eq!(layout.list_panel_ratio, LayoutParams::default().list_panel_ratio);
}

#[tokio::test]
async fn test_labels_default_to_translation() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    i18n::set_locale("en");
    assert_eq!(config_manager.get_summary_column_label().await.unwrap(), "Planned");
    assert_eq!(config_manager.get_placeholder_model_label().await.unwrap(), "Model");

    // 空白覆写视为未配置
    config_manager
        .set_global_config_value(config_keys::PLACEHOLDER_MODEL_LABEL, "   ")
        .unwrap();
    assert_eq!(config_manager.get_placeholder_model_label().await.unwrap(), "Model");

    config_manager
        .set_global_config_value(config_keys::PLACEHOLDER_MODEL_LABEL, "型号")
        .unwrap();
    assert_eq!(config_manager.get_placeholder_model_label().await.unwrap(), "型号");
}

#[tokio::test]
async fn test_profile_defaults_match_unconfigured_database() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    i18n::set_locale("en");
    let built_in = BoardProfile::default();
    assert_eq!(built_in.summary_column_label, "Planned");
    assert_eq!(built_in.placeholder_model_label, "Model");
    assert_eq!(built_in.unassigned_machine_label, "Unassigned");

    // 无配置库（CLI 内置配置）与空配置库读出的看板配置一致
    let from_db = config_manager.load_board_profile().await.expect("profile");
    assert_eq!(from_db, built_in);
}
