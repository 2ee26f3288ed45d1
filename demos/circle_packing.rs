use std::path::Path;

use aoer_circle_pack::prelude::*;
use rand::prelude::*;

/// Inspired by P.2.2.5 of Generative Design, and
/// https://generativeartistry.com/tutorials/circle-packing/
///
/// Fill a letter-size page, inside a one inch margin, with circles.
fn main() -> anyhow::Result<()> {
    let page = PageConfig::letter();
    let total_circles = 5000;
    let circle_attempts = 100;
    let max_radius = 0.5 * page.dpi;
    // Static seed so the SVG doesn't change every time we run the demo.
    let mut rng = SmallRng::seed_from_u64(12345);

    let packer = CirclePacker::new(
        PackerConfig::new(page.domain(), total_circles, max_radius, circle_attempts),
        Boundary::Margin,
    )?;
    let packing = packer.pack(&mut rng);
    println!(
        "Placed {} circles in {} attempts{}",
        packing.circles.len(),
        packing.attempts,
        if packing.saturated { " (saturated)" } else { "" }
    );

    let (width, height) = page.size();
    let mut doc = PlotDocument::new(width, height);
    doc.stroke("blue")
        .draw_rect(&page.page())
        .stroke("black")
        .draw_circles(&packing.circles);

    let fname = Path::new(file!())
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("circle_packing");
    std::fs::create_dir_all("images")?;
    doc.save(format!("images/{}.svg", fname))?;
    Ok(())
}
