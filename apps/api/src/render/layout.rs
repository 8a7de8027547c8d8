//! Pagination: turns the content tree into positioned draw operations.
//!
//! Coordinates here are top-down: `y` grows toward the page bottom, and the
//! writer flips to PDF bottom-left coordinates when drawing. Lines wrap
//! greedily on advance widths from the metric tables, so the layout is fully
//! deterministic for a given content tree and footer date. Table rows are
//! atomic across page breaks; paragraphs break per line.

use chrono::NaiveDate;

use super::content::{CertificationRow, ExperienceEntry, ProjectEntry, ResumeContent, SkillRow};
use super::metrics::metrics;
use super::style::{self, TextStyle, Tint};

const BULLET_PREFIX: &str = "\u{2022} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A positioned run of text. `x` is the left edge of the run, `y` the
/// baseline, both measured from the top-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub style: TextStyle,
}

/// Outline-only border box around a section header.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxOp {
    pub x: f32,
    /// Top edge, measured from the page top.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub color: Tint,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub texts: Vec<TextOp>,
    pub boxes: Vec<BoxOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
    /// Count of logical blocks laid out (title through footer).
    pub sections: usize,
}

/// Greedy word wrap over advance widths. Words longer than `max_width`
/// get a line of their own rather than being split.
fn wrap(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let table = metrics(style.face);
    let space = table.space_width(style.size_pt);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = table.text_width(word, style.size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Flowing cursor over a growing list of pages.
struct Cursor {
    done: Vec<Page>,
    current: Page,
    /// Distance from the page top to the top of the next line box.
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Cursor {
            done: Vec::new(),
            current: Page::default(),
            y: style::MARGIN_PT,
        }
    }

    fn bottom() -> f32 {
        style::PAGE_HEIGHT_PT - style::MARGIN_PT
    }

    fn at_page_top(&self) -> bool {
        self.y <= style::MARGIN_PT + 0.01
    }

    fn break_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.y = style::MARGIN_PT;
    }

    /// Starts a fresh page if `height` does not fit below the cursor.
    fn ensure(&mut self, height: f32) {
        if self.y + height > Self::bottom() && !self.at_page_top() {
            self.break_page();
        }
    }

    fn gap(&mut self, height: f32) {
        self.y += height;
    }

    /// Vertical space before a block, suppressed at the top of a page.
    fn space_before(&mut self, height: f32) {
        if !self.at_page_top() {
            self.y += height;
        }
    }

    /// Places one run inside `[left, left + width]` without advancing the
    /// cursor. `top_y` is the top of the line box; the baseline sits one em
    /// below it.
    fn place(&mut self, text: &str, style: TextStyle, align: Align, left: f32, width: f32, top_y: f32) {
        let measured = metrics(style.face).text_width(text, style.size_pt);
        let x = match align {
            Align::Left => left,
            Align::Center => left + (width - measured) / 2.0,
            Align::Right => left + width - measured,
        };
        self.current.texts.push(TextOp {
            text: text.to_string(),
            x,
            y: top_y + style.size_pt,
            style,
        });
    }

    /// Emits a single line at the cursor and advances by the leading.
    fn line(&mut self, text: &str, style: TextStyle, align: Align) {
        self.ensure(style.leading_pt);
        let top = self.y;
        self.place(text, style, align, style::MARGIN_PT, style::CONTENT_WIDTH_PT, top);
        self.y = top + style.leading_pt;
    }

    /// Wraps `text` at the content width and emits it line by line. The
    /// paragraph may break across pages.
    fn paragraph(&mut self, text: &str, style: TextStyle, align: Align) {
        for wrapped in wrap(text, &style, style::CONTENT_WIDTH_PT) {
            self.line(&wrapped, style, align);
        }
    }

    /// Bordered section header. The box and its text move as one unit.
    fn section_header(&mut self, title: &str) {
        let style = style::SECTION_HEADER;
        let box_height = style.leading_pt + 2.0 * style::SECTION_BORDER_PADDING;
        self.space_before(style::SECTION_SPACE_BEFORE);
        self.ensure(box_height);
        let top = self.y;
        self.current.boxes.push(BoxOp {
            x: style::MARGIN_PT,
            y: top,
            width: style::CONTENT_WIDTH_PT,
            height: box_height,
            thickness: style::SECTION_BORDER_THICKNESS,
            color: style::ACCENT,
        });
        self.place(
            title,
            style,
            Align::Left,
            style::MARGIN_PT + style::SECTION_BORDER_PADDING,
            style::CONTENT_WIDTH_PT - 2.0 * style::SECTION_BORDER_PADDING,
            top + style::SECTION_BORDER_PADDING,
        );
        self.y = top + box_height + style::SECTION_SPACE_AFTER;
    }

    /// 2x2 table of centered single-line cells.
    fn contact_table(&mut self, rows: &[[&'static str; 2]; 2]) {
        const COL_WIDTH: f32 = 216.0;
        let left = style::MARGIN_PT + (style::CONTENT_WIDTH_PT - 2.0 * COL_WIDTH) / 2.0;
        for row in rows {
            let height = style::BODY.leading_pt + style::CONTACT_ROW_PADDING;
            self.ensure(height);
            let top = self.y;
            for (i, cell) in row.iter().enumerate() {
                self.place(
                    cell,
                    style::BODY,
                    Align::Center,
                    left + i as f32 * COL_WIDTH,
                    COL_WIDTH,
                    top,
                );
            }
            self.y = top + height;
        }
    }

    /// Right-aligned bold label column next to a wrapped detail column.
    fn skills_table(&mut self, skills: &[SkillRow]) {
        const LABEL_COL: f32 = 108.0;
        const DETAIL_COL: f32 = 324.0;
        let left = style::MARGIN_PT + (style::CONTENT_WIDTH_PT - (LABEL_COL + DETAIL_COL)) / 2.0;
        let label_width = LABEL_COL - 2.0 * style::CELL_PADDING_X_PT;
        let detail_width = DETAIL_COL - 2.0 * style::CELL_PADDING_X_PT;

        for row in skills {
            let label_lines = wrap(row.label, &style::BODY_BOLD, label_width);
            let detail_lines = wrap(row.detail, &style::BODY, detail_width);
            let line_count = label_lines.len().max(detail_lines.len()).max(1);
            let height = line_count as f32 * style::BODY.leading_pt + style::TABLE_ROW_PADDING;
            self.ensure(height);
            let top = self.y;
            for (i, line) in label_lines.iter().enumerate() {
                self.place(
                    line,
                    style::BODY_BOLD,
                    Align::Right,
                    left + style::CELL_PADDING_X_PT,
                    label_width,
                    top + i as f32 * style::BODY.leading_pt,
                );
            }
            for (i, line) in detail_lines.iter().enumerate() {
                self.place(
                    line,
                    style::BODY,
                    Align::Left,
                    left + LABEL_COL + style::CELL_PADDING_X_PT,
                    detail_width,
                    top + i as f32 * style::BODY.leading_pt,
                );
            }
            self.y = top + height;
        }
    }

    /// Three columns: bold wrapped title, issuer, year.
    fn certifications_table(&mut self, rows: &[CertificationRow]) {
        const COLS: [f32; 3] = [216.0, 108.0, 72.0];
        let table_width: f32 = COLS.iter().sum();
        let left = style::MARGIN_PT + (style::CONTENT_WIDTH_PT - table_width) / 2.0;
        let title_width = COLS[0] - 2.0 * style::CELL_PADDING_X_PT;

        for row in rows {
            let title_lines = wrap(row.title, &style::BODY_BOLD, title_width);
            let line_count = title_lines.len().max(1);
            let height = line_count as f32 * style::BODY.leading_pt + style::TABLE_ROW_PADDING;
            self.ensure(height);
            let top = self.y;
            for (i, line) in title_lines.iter().enumerate() {
                self.place(
                    line,
                    style::BODY_BOLD,
                    Align::Left,
                    left + style::CELL_PADDING_X_PT,
                    title_width,
                    top + i as f32 * style::BODY.leading_pt,
                );
            }
            self.place(
                row.issuer,
                style::BODY,
                Align::Left,
                left + COLS[0] + style::CELL_PADDING_X_PT,
                COLS[1] - 2.0 * style::CELL_PADDING_X_PT,
                top,
            );
            self.place(
                row.year,
                style::BODY,
                Align::Left,
                left + COLS[0] + COLS[1] + style::CELL_PADDING_X_PT,
                COLS[2] - 2.0 * style::CELL_PADDING_X_PT,
                top,
            );
            self.y = top + height;
        }
    }

    fn experience_entry(&mut self, entry: &ExperienceEntry) {
        self.space_before(style::ENTRY_SPACE_BEFORE);
        self.paragraph(entry.heading, style::ENTRY_HEADING, Align::Left);
        self.gap(style::ENTRY_SPACE_AFTER);
        for bullet in entry.bullets {
            self.paragraph(&format!("{BULLET_PREFIX}{bullet}"), style::BODY, Align::Left);
        }
    }

    fn project_entry(&mut self, project: &ProjectEntry) {
        self.space_before(style::ENTRY_SPACE_BEFORE);
        self.paragraph(project.heading, style::ENTRY_HEADING, Align::Left);
        self.gap(style::ENTRY_SPACE_AFTER);
        self.paragraph(project.description, style::BODY, Align::Left);
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }
}

/// Lays out the whole document. `footer_date` is the date stamped into the
/// footer, injected so callers can pin it.
pub fn paginate(content: &ResumeContent, footer_date: NaiveDate) -> Layout {
    let mut cursor = Cursor::new();
    let mut sections = 0;

    cursor.paragraph(content.name, style::TITLE, Align::Center);
    cursor.gap(style::TITLE_SPACE_AFTER);
    cursor.paragraph(content.headline, style::HEADLINE, Align::Center);
    cursor.gap(style::HEADLINE_SPACE_AFTER);
    sections += 1;

    cursor.contact_table(&content.contact_rows);
    cursor.gap(style::GAP_AFTER_CONTACT);
    sections += 1;

    cursor.section_header("PROFESSIONAL SUMMARY");
    cursor.paragraph(content.summary, style::BODY, Align::Left);
    cursor.gap(style::GAP_AFTER_BLOCK);
    sections += 1;

    cursor.section_header("CORE SKILLS");
    cursor.skills_table(content.skills);
    cursor.gap(style::GAP_AFTER_BLOCK);
    sections += 1;

    cursor.section_header("PROFESSIONAL EXPERIENCE");
    for (i, entry) in content.experience.iter().enumerate() {
        cursor.experience_entry(entry);
        if i + 1 == content.experience.len() {
            cursor.gap(style::GAP_AFTER_BLOCK);
        } else {
            cursor.gap(style::GAP_BETWEEN_ENTRIES);
        }
    }
    sections += 1;

    cursor.section_header("KEY PROJECTS");
    for (i, project) in content.projects.iter().enumerate() {
        cursor.project_entry(project);
        if i + 1 == content.projects.len() {
            cursor.gap(style::GAP_AFTER_BLOCK);
        } else {
            cursor.gap(style::GAP_BETWEEN_ENTRIES);
        }
    }
    sections += 1;

    cursor.section_header("CERTIFICATIONS");
    cursor.certifications_table(content.certifications);
    cursor.gap(style::GAP_AFTER_BLOCK);
    sections += 1;

    cursor.section_header("EDUCATION");
    cursor.space_before(style::ENTRY_SPACE_BEFORE);
    cursor.paragraph(content.education_degree, style::ENTRY_HEADING, Align::Left);
    cursor.gap(style::ENTRY_SPACE_AFTER);
    cursor.paragraph(content.education_detail, style::BODY, Align::Left);
    sections += 1;

    cursor.gap(style::GAP_BEFORE_FOOTER);
    let stamp = format!("Resume generated on {}", footer_date.format("%B %d, %Y"));
    cursor.line(&stamp, style::FOOTER, Align::Center);
    sections += 1;

    Layout {
        pages: cursor.finish(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_TITLES: [&str; 6] = [
        "PROFESSIONAL SUMMARY",
        "CORE SKILLS",
        "PROFESSIONAL EXPERIENCE",
        "KEY PROJECTS",
        "CERTIFICATIONS",
        "EDUCATION",
    ];

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    }

    fn standard_layout() -> Layout {
        paginate(&ResumeContent::standard(), fixed_date())
    }

    fn all_texts(layout: &Layout) -> Vec<&TextOp> {
        layout.pages.iter().flat_map(|p| &p.texts).collect()
    }

    #[test]
    fn test_wrap_empty_string_yields_no_lines() {
        assert!(wrap("", &style::BODY, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_single_word_yields_one_line() {
        assert_eq!(wrap("Burp", &style::BODY, 100.0), vec!["Burp"]);
    }

    #[test]
    fn test_wrap_preserves_every_word() {
        let text = "Lead security vulnerability assessments for critical digital \
                    infrastructure across multiple production environments";
        let lines = wrap(text, &style::BODY, 150.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_lines_fit_the_width() {
        let text = "Developed and maintained security testing protocols for enterprise \
                    web applications and internal tooling";
        let table = metrics(style::BODY.face);
        for line in wrap(text, &style::BODY, 200.0) {
            assert!(table.text_width(&line, style::BODY.size_pt) <= 200.0);
        }
    }

    #[test]
    fn test_document_spans_multiple_pages() {
        let layout = standard_layout();
        assert!(
            layout.pages.len() >= 2,
            "expected at least 2 pages, got {}",
            layout.pages.len()
        );
    }

    #[test]
    fn test_nine_logical_sections() {
        assert_eq!(standard_layout().sections, 9);
    }

    #[test]
    fn test_every_section_title_is_laid_out() {
        let layout = standard_layout();
        let texts = all_texts(&layout);
        for title in SECTION_TITLES {
            assert!(
                texts.iter().any(|op| op.text == title),
                "missing section title {title:?}"
            );
        }
    }

    #[test]
    fn test_one_border_box_per_section_title() {
        let layout = standard_layout();
        let box_count: usize = layout.pages.iter().map(|p| p.boxes.len()).sum();
        assert_eq!(box_count, SECTION_TITLES.len());
    }

    #[test]
    fn test_document_opens_with_the_name() {
        let layout = standard_layout();
        assert_eq!(layout.pages[0].texts[0].text, "ROHAN VERMA");
    }

    #[test]
    fn test_footer_stamp_lands_on_last_page() {
        let layout = standard_layout();
        let last = layout.pages.last().unwrap();
        assert!(last
            .texts
            .iter()
            .any(|op| op.text == "Resume generated on August 22, 2026"));
    }

    #[test]
    fn test_bullets_carry_the_marker() {
        let layout = standard_layout();
        let bullet_count = all_texts(&layout)
            .iter()
            .filter(|op| op.text.starts_with(BULLET_PREFIX))
            .count();
        assert!(bullet_count >= 10, "expected many bullets, got {bullet_count}");
    }

    #[test]
    fn test_all_ops_stay_inside_the_margins() {
        let layout = standard_layout();
        let right_edge = style::PAGE_WIDTH_PT - style::MARGIN_PT;
        let bottom_edge = style::PAGE_HEIGHT_PT - style::MARGIN_PT;
        for page in &layout.pages {
            for op in &page.texts {
                let width = metrics(op.style.face).text_width(&op.text, op.style.size_pt);
                assert!(op.x >= style::MARGIN_PT - 0.5, "text past left margin: {op:?}");
                assert!(op.x + width <= right_edge + 0.5, "text past right margin: {op:?}");
                assert!(op.y > style::MARGIN_PT, "baseline above top margin: {op:?}");
                assert!(op.y <= bottom_edge + 0.5, "baseline below bottom margin: {op:?}");
            }
            for b in &page.boxes {
                assert!(b.x >= style::MARGIN_PT - 0.5);
                assert!(b.x + b.width <= right_edge + 0.5);
                assert!(b.y >= style::MARGIN_PT - 0.5);
                assert!(b.y + b.height <= bottom_edge + 0.5);
            }
        }
    }

    #[test]
    fn test_no_page_is_empty() {
        let layout = standard_layout();
        assert!(layout.pages.iter().all(|p| !p.texts.is_empty()));
    }

    #[test]
    fn test_same_date_produces_identical_layout() {
        assert_eq!(standard_layout(), standard_layout());
    }

    #[test]
    fn test_footer_date_controls_the_stamp() {
        let other = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let layout = paginate(&ResumeContent::standard(), other);
        assert!(all_texts(&layout)
            .iter()
            .any(|op| op.text == "Resume generated on January 03, 2025"));
    }
}
