//! Draws a paginated layout into a PDF document.
//!
//! All three faces are PDF built-ins, so the writer embeds no font files and
//! the output stays small. The layout's top-down coordinates are flipped to
//! the PDF bottom-left origin here and nowhere else.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt, Rgb,
};

use super::layout::{Layout, Page};
use super::metrics::FontFace;
use super::style::{self, Tint};

use super::RenderError;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    bold_oblique: IndirectFontRef,
}

impl Fonts {
    fn for_face(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
            FontFace::HelveticaBoldOblique => &self.bold_oblique,
        }
    }
}

fn mm(pt: f32) -> Mm {
    Mm::from(Pt(pt.into()))
}

/// Layout coordinates grow downward from the page top.
fn flip(y_from_top: f32) -> f32 {
    style::PAGE_HEIGHT_PT - y_from_top
}

fn color(tint: Tint) -> Color {
    Color::Rgb(Rgb::new(tint.r.into(), tint.g.into(), tint.b.into(), None))
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for op in &page.texts {
        layer.set_fill_color(color(op.style.color));
        layer.use_text(
            op.text.as_str(),
            op.style.size_pt.into(),
            mm(op.x),
            mm(flip(op.y)),
            fonts.for_face(op.style.face),
        );
    }
    for b in &page.boxes {
        layer.set_outline_color(color(b.color));
        layer.set_outline_thickness(b.thickness.into());
        let points = vec![
            (Point::new(mm(b.x), mm(flip(b.y))), false),
            (Point::new(mm(b.x + b.width), mm(flip(b.y))), false),
            (
                Point::new(mm(b.x + b.width), mm(flip(b.y + b.height))),
                false,
            ),
            (Point::new(mm(b.x), mm(flip(b.y + b.height))), false),
        ];
        layer.add_line(Line {
            points,
            is_closed: true,
        });
    }
}

/// Serializes the layout into PDF bytes.
pub fn write_document(layout: &Layout, title: &str) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        mm(style::PAGE_WIDTH_PT),
        mm(style::PAGE_HEIGHT_PT),
        "Page 1",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        bold_oblique: doc.add_builtin_font(BuiltinFont::HelveticaBoldOblique)?,
    };

    let mut pages = layout.pages.iter();
    if let Some(page) = pages.next() {
        draw_page(&doc.get_page(first_page).get_layer(first_layer), page, &fonts);
    }
    for (i, page) in pages.enumerate() {
        let (page_idx, layer_idx) = doc.add_page(
            mm(style::PAGE_WIDTH_PT),
            mm(style::PAGE_HEIGHT_PT),
            format!("Page {}", i + 2),
        );
        draw_page(&doc.get_page(page_idx).get_layer(layer_idx), page, &fonts);
    }

    Ok(doc.save_to_bytes()?)
}
