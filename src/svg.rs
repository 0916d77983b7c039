use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use euclid_tsp::{Point, Tour};

/// Side length of the square canvas in pixels.
const CANVAS: f64 = 800.0;

fn header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "<svg width='{0}' height='{0}' xmlns='http://www.w3.org/2000/svg' style='background:black'>",
        CANVAS
    )
}

fn cities<W: Write>(out: &mut W, points: &[Point], scale: f64) -> std::io::Result<()> {
    for p in points {
        writeln!(
            out,
            "<circle cx='{}' cy='{}' r='5' fill='red' />",
            p.x * scale,
            p.y * scale
        )?;
    }
    Ok(())
}

/// Draws the tour as lime arrows between red cities. Coordinates in `[0, grid_size]` fill the
/// canvas.
pub fn write_tour<W: Write>(
    out: &mut W,
    points: &[Point],
    tour: &Tour,
    grid_size: f64,
) -> std::io::Result<()> {
    let scale = CANVAS / grid_size;
    header(out)?;
    writeln!(out, "<defs>")?;
    writeln!(
        out,
        "  <marker id='arrow' markerWidth='10' markerHeight='10' refX='5' refY='3' orient='auto'>"
    )?;
    writeln!(out, "      <path d='M0,0 L0,6 L6,3 z' fill='lime'/>")?;
    writeln!(out, "  </marker>")?;
    writeln!(out, "</defs>")?;

    for e in tour.nodes().windows(2) {
        let p1 = points[e[0].id()];
        let p2 = points[e[1].id()];
        writeln!(
            out,
            "<line x1='{}' y1='{}' x2='{}' y2='{}' stroke='lime' stroke-width='3' marker-end='url(#arrow)' />",
            p1.x * scale,
            p1.y * scale,
            p2.x * scale,
            p2.y * scale
        )?;
    }

    cities(out, points, scale)?;
    write!(out, "</svg>")
}

/// Draws the complete graph over the cities in thin white lines.
pub fn write_points<W: Write>(out: &mut W, points: &[Point], grid_size: f64) -> std::io::Result<()> {
    let scale = CANVAS / grid_size;
    header(out)?;
    for (i, p1) in points.iter().enumerate() {
        for p2 in &points[i + 1..] {
            writeln!(
                out,
                "<line x1='{}' y1='{}' x2='{}' y2='{}' stroke='white' stroke-width='1'/>",
                p1.x * scale,
                p1.y * scale,
                p2.x * scale,
                p2.y * scale
            )?;
        }
    }
    cities(out, points, scale)?;
    write!(out, "</svg>")
}

pub fn export_tour_svg(
    filename: &Path,
    points: &[Point],
    tour: &Tour,
    grid_size: f64,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(filename)?);
    write_tour(&mut writer, points, tour, grid_size)?;
    writer.flush()?;
    log::info!("Solution SVG written to {:?}", filename);
    Ok(())
}

pub fn export_points_svg(filename: &Path, points: &[Point], grid_size: f64) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(filename)?);
    write_points(&mut writer, points, grid_size)?;
    writer.flush()?;
    log::info!("SVG visual written to {:?}", filename);
    Ok(())
}
