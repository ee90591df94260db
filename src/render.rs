//! PDF renderer – takes a [`ResumeLayout`] and produces PDF bytes using
//! `printpdf` (v0.8 ops-based API).

use printpdf::*;

use crate::encoding::to_win_ansi;
use crate::error::{GenerationError, GenerationResult};
use crate::fonts::Face;
use crate::layout_config::{Element, PhotoPlacement, ResumeLayout, TextLine};
use crate::photo::LoadedPhoto;

/// Millimetres per point.
const MM_PER_PT: f32 = 0.352778;

/// A printpdf XObject together with the pixel dimensions of the source image.
struct ImageResource {
    xobj_id: XObjectId,
    px_width: u32,
    px_height: u32,
}

/// Render a layout into PDF bytes.
///
/// `photo` supplies the pixels for the layout's photo placement. A placement
/// without a photo, or a photo without a placement, is an error.
pub fn render_pdf(layout: &ResumeLayout, photo: Option<&LoadedPhoto>) -> GenerationResult<Vec<u8>> {
    let page_w = Mm(layout.page_width_pt * MM_PER_PT);
    let page_h = Mm(layout.page_height_pt * MM_PER_PT);

    let mut doc = PdfDocument::new(&layout.title);

    let image = match (photo, layout.photo()) {
        (Some(p), Some(_)) => Some(register_photo(&mut doc, p)?),
        (None, None) => None,
        (Some(_), None) => {
            return Err(GenerationError::new("Photo supplied but the layout has no place for it"))
        }
        (None, Some(_)) => return Err(GenerationError::new("Layout places a photo but none was supplied")),
    };

    let mut pages = Vec::with_capacity(layout.pages.len());
    for page_layout in &layout.pages {
        let mut ops = Vec::new();
        for element in &page_layout.elements {
            match element {
                Element::Text(line) => render_line(&mut ops, line, layout.page_height_pt)?,
                Element::Photo(placement) => {
                    if let Some(res) = &image {
                        render_photo(&mut ops, placement, res, layout.page_height_pt);
                    }
                }
            }
        }
        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    // Ensure at least one page.
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }

    doc.with_pages(pages);
    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for w in &warnings {
        log::debug!("printpdf: {w:?}");
    }

    Ok(bytes)
}

/// Register the photo with printpdf as an XObject.
fn register_photo(doc: &mut PdfDocument, photo: &LoadedPhoto) -> GenerationResult<ImageResource> {
    let mut img_warnings: Vec<PdfWarnMsg> = Vec::new();
    let raw = RawImage::decode_from_bytes(&photo.bytes, &mut img_warnings)
        .map_err(|e| GenerationError::new(format!("Photo cannot be embedded: {e}")))?;
    let xobj_id = doc.add_image(&raw);
    Ok(ImageResource {
        xobj_id,
        px_width: photo.px_width,
        px_height: photo.px_height,
    })
}

fn render_line(ops: &mut Vec<Op>, line: &TextLine, page_height: f32) -> GenerationResult<()> {
    if line.text.is_empty() {
        return Ok(());
    }
    let font = Face::from_bold(line.bold).builtin();

    // PDF origin is bottom-left; layout origin is top-left. The baseline sits
    // a little below the middle of the cell.
    let baseline_from_top = line.y + line.height / 2.0 + 0.3 * line.font_size;
    let text_y = page_height - baseline_from_top;

    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(line.x),
            y: Pt(text_y),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(line.font_size),
        font,
    });
    ops.push(Op::SetFillColor {
        col: Color::Rgb(Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            icc_profile: None,
        }),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(to_win_ansi(&line.text)?)],
        font,
    });
    ops.push(Op::EndTextSection);
    Ok(())
}

fn render_photo(ops: &mut Vec<Op>, placement: &PhotoPlacement, res: &ImageResource, page_height: f32) {
    // translate_y = bottom edge of image in PDF coordinates.
    let img_bottom_y = page_height - placement.y - placement.height;

    // At dpi=72 printpdf renders 1 px = 1 pt, so
    // scale = desired_pt / px_dim.
    let scale_x = if res.px_width > 0 {
        placement.width / res.px_width as f32
    } else {
        1.0
    };
    let scale_y = if res.px_height > 0 {
        placement.height / res.px_height as f32
    } else {
        1.0
    };

    ops.push(Op::UseXobject {
        id: res.xobj_id.clone(),
        transform: XObjectTransform {
            translate_x: Some(Pt(placement.x)),
            translate_y: Some(Pt(img_bottom_y)),
            dpi: Some(72.0),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            rotate: None,
        },
    });
}
