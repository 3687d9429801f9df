use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

use dial_ui::prelude::*;

/// Writes `<scope>.svg` (and `<scope>.png` when `png` is set) for every dial.
pub fn write_snapshots(clocks: &[AnalogClock], now: Instant, dir: &Path, png: bool) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    for clock in clocks {
        let svg = clock.to_svg(now);
        let svg_path = dir.join(format!("{}.svg", clock.scope()));
        fs::write(&svg_path, &svg)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;
        log::info!("wrote {}", svg_path.display());

        if png {
            let png_path = svg_path.with_extension("png");
            rasterize(&svg, &png_path)?;
            log::info!("wrote {}", png_path.display());
        }
    }
    Ok(())
}

/// Renders an SVG document to a PNG file at its natural size.
fn rasterize(svg: &str, path: &Path) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).context("generated SVG did not parse")?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .with_context(|| format!("cannot allocate a {}x{} pixmap", size.width(), size.height()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .save_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
