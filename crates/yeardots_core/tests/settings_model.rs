use chrono::NaiveDate;
use yeardots_core::{
    AccentColor, DayState, FontChoice, GridLayout, GridOffset, OffsetBounds, SettingsUpdate,
    TextOpacity, TextSize, WallpaperController, WallpaperSettings,
};

#[test]
fn defaults_match_first_launch_sheet() {
    let settings = WallpaperSettings::default();

    assert_eq!(settings.grid.accent.to_hex(), "#4ADE80");
    assert_eq!(settings.grid.layout, GridLayout::Standard);
    assert_eq!(settings.grid.column_count(), 17);
    assert_eq!(settings.grid.dot_diameter(), 9);
    assert_eq!(settings.grid.dot_gap(), 3);
    assert_eq!(settings.text.font, FontChoice::Light);
    assert_eq!(settings.text.text_size, TextSize::M);
    assert_eq!(settings.text.opacity, TextOpacity::Full);
    assert!(settings.text.show_stats);
    assert!(settings.text.show_year);
    assert!(settings.offset.is_zero());
    assert_eq!(settings.scale, 1.0);
    assert!(settings.apply_both_targets);
}

#[test]
fn serialization_uses_shell_option_ids() {
    let settings = WallpaperSettings::default()
        .with_update(SettingsUpdate::Layout(GridLayout::Calendar))
        .with_update(SettingsUpdate::Font(FontChoice::Mono))
        .with_update(SettingsUpdate::TextSize(TextSize::Xs))
        .with_update(SettingsUpdate::Opacity(TextOpacity::Half))
        .with_update(SettingsUpdate::Accent(AccentColor::parse("#fbbf24").unwrap()));

    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["grid"]["layout"], "CALENDAR");
    assert_eq!(json["grid"]["shape"], "ROUNDED");
    assert_eq!(json["grid"]["size"], "MEDIUM");
    assert_eq!(json["grid"]["accent"], "#FBBF24");
    assert_eq!(json["text"]["font"], "MONO");
    assert_eq!(json["text"]["textSize"], "XS");
    assert_eq!(json["text"]["opacity"], "50");
    assert_eq!(json["applyBothTargets"], true);

    let decoded: WallpaperSettings = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, settings);
}

#[test]
fn deserialize_rejects_malformed_accent() {
    let mut json = serde_json::to_value(WallpaperSettings::default()).unwrap();
    json["grid"]["accent"] = serde_json::json!("green");

    let err = serde_json::from_value::<WallpaperSettings>(json).unwrap_err();
    assert!(err.to_string().contains("#RRGGBB"), "unexpected error: {err}");
}

#[test]
fn updates_return_new_values_without_touching_the_original() {
    let original = WallpaperSettings::default();
    let updated = original.with_update(SettingsUpdate::CustomText("x".repeat(80)));

    assert!(original.text.custom_text.is_empty());
    assert_eq!(updated.text.custom_text.chars().count(), 50);
}

#[test]
fn invalid_scale_is_ignored() {
    let settings = WallpaperSettings::default()
        .with_update(SettingsUpdate::Scale(0.0))
        .with_update(SettingsUpdate::Scale(f32::NAN));
    assert_eq!(settings.scale, 1.0);

    let settings = settings.with_update(SettingsUpdate::Scale(2.75));
    assert_eq!(settings.scale, 2.75);
}

#[test]
fn controller_drag_is_relative_to_gesture_start_and_clamped() {
    let mut controller = WallpaperController::default();

    controller.begin_drag();
    controller.drag_by(30.0, 40.0);
    let offset = controller.drag_by(60.0, -500.0);
    controller.end_drag();
    assert_eq!(offset, GridOffset { x: 60.0, y: -150.0 });

    controller.begin_drag();
    let offset = controller.drag_by(90.0, 0.0);
    assert_eq!(offset, GridOffset { x: 100.0, y: -150.0 });

    controller.reset_offset();
    assert!(controller.settings().offset.is_zero());
}

#[test]
fn controller_honors_custom_bounds() {
    let bounds = OffsetBounds {
        max_x: 20.0,
        max_y: 10.0,
    };
    let mut controller = WallpaperController::new(WallpaperSettings::default(), bounds);

    controller.apply(SettingsUpdate::Offset(GridOffset { x: -99.0, y: 99.0 }));
    assert_eq!(controller.settings().offset, GridOffset { x: -20.0, y: 10.0 });
}

#[test]
fn controller_snapshot_recomputes_grid_for_layout_changes() {
    let mut controller = WallpaperController::default();
    let date = NaiveDate::from_ymd_opt(2023, 7, 2).unwrap();

    let standard = controller.snapshot_for(date);
    assert_eq!(standard.grid.row_count(), 22);
    assert_eq!(standard.progress.percent, 50);

    controller.apply(SettingsUpdate::Layout(GridLayout::Calendar));
    let calendar = controller.snapshot_for(date);
    assert_eq!(calendar.grid.column_count, 7);
    assert_eq!(calendar.grid.row_count(), 53);
    assert_eq!(
        calendar.grid.today().map(|cell| cell.state),
        Some(DayState::Today)
    );
}
