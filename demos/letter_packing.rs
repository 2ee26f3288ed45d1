use std::path::Path;

use aoer_circle_pack::prelude::*;
use geo_types::{coord, Rect};
use rand::prelude::*;

/// Inspired by P.2.2.5 of Generative Design.
///
/// Pack circles inside letterforms on a landscape page. The letters are hand-drawn
/// path data; pass an SVG file holding a single path to pack that instead.
fn main() -> anyhow::Result<()> {
    let page = PageConfig::letter().landscape(true);
    let margin = page.margin();
    let domain = page.domain();

    let mut glyphs = PathGlyphs::new();
    glyphs
        .insert_path('L', "M 0 0 H 20 V 80 H 60 V 100 H 0 Z")?
        .insert_path(
            'K',
            "M 0 0 H 20 V 40 l 26 -40 h 24 l -36 52 l 38 48 h -24 l -28 -38 V 100 H 0 z",
        )?
        .insert_path('D', "M 0 0 h 30 c 40 0 40 100 0 100 H 0 z")?;

    let outlines: Vec<Shape> = match std::env::args().nth(1) {
        Some(file) => vec![Shape::from_svg_document(&std::fs::read_to_string(file)?)?],
        None => "LKD".chars().map(|c| glyphs.glyph(c)).collect::<Result<Vec<Shape>, GlyphError>>()?,
    };

    // One cell per outline, side by side, with a margin between them.
    let cell_width = (domain.width() - margin * (outlines.len() - 1) as f64) / outlines.len() as f64;
    let letters = outlines
        .iter()
        .enumerate()
        .map(|(i, outline)| {
            let x0 = domain.min().x + i as f64 * (cell_width + margin);
            let cell = Rect::new(
                coord! {x: x0, y: domain.min().y},
                coord! {x: x0 + cell_width, y: domain.max().y},
            );
            outline.center_fit(&cell)
        })
        .collect::<Result<Vec<Shape>, _>>()?;

    let packer = CirclePacker::new(
        PackerConfig::new(page.page(), 1000, 0.5 * page.dpi, 1000),
        Boundary::Contained(letters.clone()),
    )?;
    let packing = packer.pack(&mut SmallRng::seed_from_u64(12345));
    println!(
        "Placed {} circles in {} attempts{}",
        packing.circles.len(),
        packing.attempts,
        if packing.saturated { " (saturated)" } else { "" }
    );

    let (width, height) = page.size();
    let mut doc = PlotDocument::new(width, height);
    doc.stroke("blue").pen(0.5);
    for letter in &letters {
        doc.draw_shape(letter);
    }
    doc.stroke("black").pen(1.0).draw_circles(&packing.circles);

    let fname = Path::new(file!())
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("letter_packing");
    std::fs::create_dir_all("images")?;
    doc.save(format!("images/{}.svg", fname))?;
    Ok(())
}
