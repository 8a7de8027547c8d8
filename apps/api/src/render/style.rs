//! Page geometry and the fixed visual style of the document.
//!
//! Everything is expressed in PDF points (1/72 inch). The palette and sizes
//! follow the portfolio site: orange accent for the title and section
//! headers, slate for the headline, gray for the footer stamp.

use super::metrics::FontFace;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (US letter, 0.75" margins)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH_PT: f32 = 612.0;
pub const PAGE_HEIGHT_PT: f32 = 792.0;
pub const MARGIN_PT: f32 = 54.0;
pub const CONTENT_WIDTH_PT: f32 = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;

/// Horizontal inset applied on both sides of every table cell.
pub const CELL_PADDING_X_PT: f32 = 6.0;

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

/// RGB color with components in 0.0..=1.0. Converted to the writer's color
/// type only at the drawing boundary, keeping layout free of PDF types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Site accent orange, #f97316.
pub const ACCENT: Tint = Tint {
    r: 249.0 / 255.0,
    g: 115.0 / 255.0,
    b: 22.0 / 255.0,
};

/// Slate used for the headline, #374151.
pub const SLATE: Tint = Tint {
    r: 55.0 / 255.0,
    g: 65.0 / 255.0,
    b: 81.0 / 255.0,
};

pub const GRAY: Tint = Tint {
    r: 0.5,
    g: 0.5,
    b: 0.5,
};

pub const BLACK: Tint = Tint {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

// ────────────────────────────────────────────────────────────────────────────
// Text styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size_pt: f32,
    /// Baseline-to-baseline distance for wrapped lines.
    pub leading_pt: f32,
    pub color: Tint,
}

pub const TITLE: TextStyle = TextStyle {
    face: FontFace::HelveticaBold,
    size_pt: 24.0,
    leading_pt: 28.8,
    color: ACCENT,
};

pub const HEADLINE: TextStyle = TextStyle {
    face: FontFace::Helvetica,
    size_pt: 14.0,
    leading_pt: 16.8,
    color: SLATE,
};

pub const SECTION_HEADER: TextStyle = TextStyle {
    face: FontFace::HelveticaBold,
    size_pt: 16.0,
    leading_pt: 19.2,
    color: ACCENT,
};

pub const ENTRY_HEADING: TextStyle = TextStyle {
    face: FontFace::HelveticaBoldOblique,
    size_pt: 12.0,
    leading_pt: 14.0,
    color: BLACK,
};

pub const BODY: TextStyle = TextStyle {
    face: FontFace::Helvetica,
    size_pt: 10.0,
    leading_pt: 12.0,
    color: BLACK,
};

pub const BODY_BOLD: TextStyle = TextStyle {
    face: FontFace::HelveticaBold,
    size_pt: 10.0,
    leading_pt: 12.0,
    color: BLACK,
};

pub const FOOTER: TextStyle = TextStyle {
    face: FontFace::Helvetica,
    size_pt: 8.0,
    leading_pt: 9.6,
    color: GRAY,
};

// ────────────────────────────────────────────────────────────────────────────
// Vertical rhythm (points)
// ────────────────────────────────────────────────────────────────────────────

pub const TITLE_SPACE_AFTER: f32 = 12.0;
pub const HEADLINE_SPACE_AFTER: f32 = 20.0;
pub const SECTION_SPACE_BEFORE: f32 = 20.0;
pub const SECTION_SPACE_AFTER: f32 = 10.0;
/// Inset between a section header's text and its border box.
pub const SECTION_BORDER_PADDING: f32 = 5.0;
pub const SECTION_BORDER_THICKNESS: f32 = 1.0;
pub const ENTRY_SPACE_BEFORE: f32 = 12.0;
pub const ENTRY_SPACE_AFTER: f32 = 6.0;

pub const CONTACT_ROW_PADDING: f32 = 10.0;
pub const TABLE_ROW_PADDING: f32 = 8.0;

pub const GAP_AFTER_CONTACT: f32 = 20.0;
pub const GAP_AFTER_BLOCK: f32 = 15.0;
pub const GAP_BETWEEN_ENTRIES: f32 = 10.0;
pub const GAP_BEFORE_FOOTER: f32 = 30.0;
