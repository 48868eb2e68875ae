//! Wallpaper customization model.
//!
//! # Responsibility
//! - Define the enumerated option sets offered by the customization sheet.
//! - Hold user choices as immutable values updated through `SettingsUpdate`.
//!
//! # Invariants
//! - Every option set has a stable string id shared with the UI shell.
//! - Column count is always taken from `GridLayout`, never typed by users.
//! - Custom text never exceeds `CUSTOM_TEXT_MAX_CHARS` characters.
//! - Grid offsets stay within the configured `OffsetBounds`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum length of the user-provided caption.
pub const CUSTOM_TEXT_MAX_CHARS: usize = 50;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
        .expect("hex color pattern is valid")
});

/// Error for option ids or color strings the core does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsParseError {
    UnknownOption { kind: &'static str, value: String },
    InvalidColor(String),
}

impl Display for SettingsParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption { kind, value } => write!(f, "unknown {kind} option: {value}"),
            Self::InvalidColor(value) => {
                write!(f, "color must be `#RRGGBB`, got `{value}`")
            }
        }
    }
}

impl Error for SettingsParseError {}

/// Column arrangement of the dot grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridLayout {
    #[default]
    Standard,
    Compact,
    Loose,
    Calendar,
    Wide,
}

impl GridLayout {
    pub const ALL: [GridLayout; 5] = [
        Self::Standard,
        Self::Compact,
        Self::Loose,
        Self::Calendar,
        Self::Wide,
    ];

    pub fn columns(self) -> u32 {
        match self {
            Self::Standard => 17,
            Self::Compact => 21,
            Self::Loose => 13,
            Self::Calendar => 7,
            Self::Wide => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Compact => "COMPACT",
            Self::Loose => "LOOSE",
            Self::Calendar => "CALENDAR",
            Self::Wide => "WIDE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Compact => "Compact",
            Self::Loose => "Loose",
            Self::Calendar => "Calendar",
            Self::Wide => "Wide",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        parse_by_id(&Self::ALL, value, Self::as_str, "layout")
    }
}

/// Visual outline applied uniformly to every dot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DotShape {
    #[default]
    Rounded,
    Circle,
    Square,
}

impl DotShape {
    pub const ALL: [DotShape; 3] = [Self::Rounded, Self::Circle, Self::Square];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rounded => "ROUNDED",
            Self::Circle => "CIRCLE",
            Self::Square => "SQUARE",
        }
    }

    /// Corner radius as a fraction of the dot diameter.
    pub fn corner_ratio(self) -> f32 {
        match self {
            Self::Rounded => 0.25,
            Self::Circle => 0.5,
            Self::Square => 0.0,
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        parse_by_id(&Self::ALL, value, Self::as_str, "shape")
    }
}

/// Dot size class; decides diameter and spacing in density-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DotSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl DotSize {
    pub const ALL: [DotSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn diameter(self) -> u32 {
        match self {
            Self::Small => 7,
            Self::Medium => 9,
            Self::Large => 13,
        }
    }

    pub fn gap(self) -> u32 {
        match self {
            Self::Large => 4,
            Self::Small | Self::Medium => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        parse_by_id(&Self::ALL, value, Self::as_str, "size")
    }
}

/// Typeface used by the stats overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontChoice {
    #[serde(rename = "SF_THIN")]
    Thin,
    #[default]
    #[serde(rename = "SF_LIGHT")]
    Light,
    #[serde(rename = "SF_REGULAR")]
    Regular,
    #[serde(rename = "SF_MEDIUM")]
    Medium,
    #[serde(rename = "SF_BOLD")]
    Bold,
    #[serde(rename = "SERIF")]
    Serif,
    #[serde(rename = "MONO")]
    Mono,
}

impl FontChoice {
    pub const ALL: [FontChoice; 7] = [
        Self::Thin,
        Self::Light,
        Self::Regular,
        Self::Medium,
        Self::Bold,
        Self::Serif,
        Self::Mono,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thin => "SF_THIN",
            Self::Light => "SF_LIGHT",
            Self::Regular => "SF_REGULAR",
            Self::Medium => "SF_MEDIUM",
            Self::Bold => "SF_BOLD",
            Self::Serif => "SERIF",
            Self::Mono => "MONO",
        }
    }

    /// CSS-style weight for the system face; `None` for named families.
    pub fn weight(self) -> Option<u16> {
        match self {
            Self::Thin => Some(100),
            Self::Light => Some(300),
            Self::Regular => Some(400),
            Self::Medium => Some(500),
            Self::Bold => Some(700),
            Self::Serif | Self::Mono => None,
        }
    }

    /// Named family for non-system faces.
    pub fn family(self) -> Option<&'static str> {
        match self {
            Self::Serif => Some("serif"),
            Self::Mono => Some("monospace"),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        parse_by_id(&Self::ALL, value, Self::as_str, "font")
    }
}

/// Overlay text scale step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextSize {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
}

impl TextSize {
    pub const ALL: [TextSize; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    pub fn factor(self) -> f32 {
        match self {
            Self::Xs => 0.7,
            Self::S => 0.85,
            Self::M => 1.0,
            Self::L => 1.2,
            Self::Xl => 1.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        parse_by_id(&Self::ALL, value, Self::as_str, "text size")
    }
}

/// Overlay text opacity step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextOpacity {
    #[serde(rename = "25")]
    Quarter,
    #[serde(rename = "50")]
    Half,
    #[serde(rename = "75")]
    ThreeQuarters,
    #[default]
    #[serde(rename = "100")]
    Full,
}

impl TextOpacity {
    pub const ALL: [TextOpacity; 4] = [
        Self::Quarter,
        Self::Half,
        Self::ThreeQuarters,
        Self::Full,
    ];

    pub fn value(self) -> f32 {
        match self {
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
            Self::Full => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quarter => "25",
            Self::Half => "50",
            Self::ThreeQuarters => "75",
            Self::Full => "100",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        parse_by_id(
            &Self::ALL,
            value.trim().trim_end_matches('%'),
            Self::as_str,
            "opacity",
        )
    }
}

fn parse_by_id<T: Copy>(
    all: &[T],
    value: &str,
    id: fn(T) -> &'static str,
    kind: &'static str,
) -> Result<T, SettingsParseError> {
    let normalized = value.trim();
    all.iter()
        .copied()
        .find(|candidate| id(*candidate).eq_ignore_ascii_case(normalized))
        .ok_or_else(|| SettingsParseError::UnknownOption {
            kind,
            value: normalized.to_string(),
        })
}

/// Opaque RGB accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Preset swatches offered by the customization sheet.
    pub const PRESETS: [AccentColor; 9] = [
        Self::rgb(0x4A, 0xDE, 0x80),
        Self::rgb(0x22, 0xD3, 0xEE),
        Self::rgb(0x60, 0xA5, 0xFA),
        Self::rgb(0xA7, 0x8B, 0xFA),
        Self::rgb(0xF4, 0x72, 0xB6),
        Self::rgb(0xFB, 0x71, 0x85),
        Self::rgb(0xFB, 0x92, 0x3C),
        Self::rgb(0xFB, 0xBF, 0x24),
        Self::rgb(0xFF, 0xFF, 0xFF),
    ];

    /// Parses `#RRGGBB` (leading `#` optional, hex digits case-insensitive).
    pub fn parse(value: &str) -> Result<Self, SettingsParseError> {
        let trimmed = value.trim();
        let captures = HEX_COLOR
            .captures(trimmed)
            .ok_or_else(|| SettingsParseError::InvalidColor(trimmed.to_string()))?;
        let channel = |idx: usize| -> Result<u8, SettingsParseError> {
            u8::from_str_radix(&captures[idx], 16)
                .map_err(|_| SettingsParseError::InvalidColor(trimmed.to_string()))
        };
        Ok(Self::rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::PRESETS[0]
    }
}

impl Display for AccentColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for AccentColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Visual parameters of the dot grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfiguration {
    pub layout: GridLayout,
    pub shape: DotShape,
    pub size: DotSize,
    pub accent: AccentColor,
}

impl GridConfiguration {
    pub fn column_count(&self) -> u32 {
        self.layout.columns()
    }

    pub fn dot_diameter(&self) -> u32 {
        self.size.diameter()
    }

    pub fn dot_gap(&self) -> u32 {
        self.size.gap()
    }

    pub fn shape_kind(&self) -> DotShape {
        self.shape
    }

    pub fn size_class(&self) -> DotSize {
        self.size
    }
}

/// Stats overlay drawn under the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOverlayConfig {
    pub show_stats: bool,
    pub show_year: bool,
    pub font: FontChoice,
    pub text_size: TextSize,
    pub opacity: TextOpacity,
    pub custom_text: String,
}

impl Default for TextOverlayConfig {
    fn default() -> Self {
        Self {
            show_stats: true,
            show_year: true,
            font: FontChoice::default(),
            text_size: TextSize::default(),
            opacity: TextOpacity::default(),
            custom_text: String::new(),
        }
    }
}

/// Caps caption input at `CUSTOM_TEXT_MAX_CHARS` characters.
pub fn clamp_custom_text(value: &str) -> String {
    value.chars().take(CUSTOM_TEXT_MAX_CHARS).collect()
}

/// Drag limits for the grid position, in density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetBounds {
    pub max_x: f32,
    pub max_y: f32,
}

impl Default for OffsetBounds {
    fn default() -> Self {
        Self {
            max_x: 100.0,
            max_y: 150.0,
        }
    }
}

/// Grid translation away from the canvas center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridOffset {
    pub x: f32,
    pub y: f32,
}

impl GridOffset {
    pub const ZERO: GridOffset = GridOffset { x: 0.0, y: 0.0 };

    /// Clamps each axis to `±bounds`; non-finite components collapse to 0.
    pub fn clamped(self, bounds: OffsetBounds) -> Self {
        Self {
            x: clamp_axis(self.x, bounds.max_x),
            y: clamp_axis(self.y, bounds.max_y),
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

fn clamp_axis(value: f32, bound: f32) -> f32 {
    let max = if bound.is_nan() { 0.0 } else { bound.abs() };
    if value.is_finite() {
        value.clamp(-max, max)
    } else {
        0.0
    }
}

/// Complete user configuration handed to rendering and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperSettings {
    pub grid: GridConfiguration,
    pub text: TextOverlayConfig,
    pub offset: GridOffset,
    /// Pixel density multiplier applied to every dp dimension.
    pub scale: f32,
    pub apply_both_targets: bool,
}

impl Default for WallpaperSettings {
    fn default() -> Self {
        Self {
            grid: GridConfiguration::default(),
            text: TextOverlayConfig::default(),
            offset: GridOffset::ZERO,
            scale: 1.0,
            apply_both_targets: true,
        }
    }
}

/// One user-driven change to `WallpaperSettings`.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsUpdate {
    Accent(AccentColor),
    Shape(DotShape),
    Size(DotSize),
    Layout(GridLayout),
    Font(FontChoice),
    TextSize(TextSize),
    Opacity(TextOpacity),
    CustomText(String),
    ShowStats(bool),
    ShowYear(bool),
    Offset(GridOffset),
    Scale(f32),
    ApplyBothTargets(bool),
}

impl WallpaperSettings {
    /// Returns a copy with `update` applied.
    ///
    /// Offsets are stored as given; bounds are enforced by the owning
    /// controller. Non-positive or non-finite scales are ignored.
    pub fn with_update(&self, update: SettingsUpdate) -> Self {
        let mut next = self.clone();
        match update {
            SettingsUpdate::Accent(color) => next.grid.accent = color,
            SettingsUpdate::Shape(shape) => next.grid.shape = shape,
            SettingsUpdate::Size(size) => next.grid.size = size,
            SettingsUpdate::Layout(layout) => next.grid.layout = layout,
            SettingsUpdate::Font(font) => next.text.font = font,
            SettingsUpdate::TextSize(size) => next.text.text_size = size,
            SettingsUpdate::Opacity(opacity) => next.text.opacity = opacity,
            SettingsUpdate::CustomText(text) => next.text.custom_text = clamp_custom_text(&text),
            SettingsUpdate::ShowStats(show) => next.text.show_stats = show,
            SettingsUpdate::ShowYear(show) => next.text.show_year = show,
            SettingsUpdate::Offset(offset) => next.offset = offset,
            SettingsUpdate::Scale(scale) => {
                if scale.is_finite() && scale > 0.0 {
                    next.scale = scale;
                }
            }
            SettingsUpdate::ApplyBothTargets(both) => next.apply_both_targets = both,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clamp_custom_text, AccentColor, DotShape, FontChoice, GridLayout, GridOffset,
        OffsetBounds, SettingsParseError, TextOpacity, TextSize, CUSTOM_TEXT_MAX_CHARS,
    };

    #[test]
    fn parses_option_ids_case_insensitively() {
        assert_eq!(GridLayout::parse("compact").expect("layout"), GridLayout::Compact);
        assert_eq!(DotShape::parse(" CIRCLE ").expect("shape"), DotShape::Circle);
        assert_eq!(FontChoice::parse("sf_bold").expect("font"), FontChoice::Bold);
        assert_eq!(TextSize::parse("xl").expect("text size"), TextSize::Xl);
        assert_eq!(TextOpacity::parse("75%").expect("opacity"), TextOpacity::ThreeQuarters);
    }

    #[test]
    fn rejects_unknown_option_id() {
        let err = GridLayout::parse("HEX").expect_err("unknown layout must fail");
        assert_eq!(
            err,
            SettingsParseError::UnknownOption {
                kind: "layout",
                value: "HEX".to_string(),
            }
        );
    }

    #[test]
    fn accent_color_accepts_mixed_case_and_missing_hash() {
        let color = AccentColor::parse("4ade80").expect("color");
        assert_eq!(color, AccentColor::default());
        assert_eq!(AccentColor::parse("#Fb923C").expect("color").to_hex(), "#FB923C");
    }

    #[test]
    fn accent_color_rejects_short_forms() {
        assert!(matches!(
            AccentColor::parse("#fff"),
            Err(SettingsParseError::InvalidColor(_))
        ));
    }

    #[test]
    fn custom_text_is_capped_by_characters() {
        let long = "é".repeat(CUSTOM_TEXT_MAX_CHARS + 5);
        assert_eq!(clamp_custom_text(&long).chars().count(), CUSTOM_TEXT_MAX_CHARS);
    }

    #[test]
    fn offset_clamps_to_bounds() {
        let offset = GridOffset { x: 240.0, y: -400.0 }.clamped(OffsetBounds::default());
        assert_eq!(offset, GridOffset { x: 100.0, y: -150.0 });
    }

    #[test]
    fn non_finite_offset_collapses_to_center() {
        let offset = GridOffset {
            x: f32::NAN,
            y: f32::NEG_INFINITY,
        }
        .clamped(OffsetBounds::default());
        assert_eq!(offset, GridOffset::ZERO);

        let bounds = OffsetBounds {
            max_x: f32::NAN,
            max_y: f32::INFINITY,
        };
        let offset = GridOffset { x: 5.0, y: -900.0 }.clamped(bounds);
        assert_eq!(offset, GridOffset { x: 0.0, y: -900.0 });
    }
}
