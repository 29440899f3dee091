//! SVG rendering of a packing.
//!
//! Each accepted circle becomes one filled `<circle>` with an outline. The
//! document's view box matches the packed region so one SVG unit equals one
//! region unit.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Circle as SvgCircle, Group, Rectangle},
};

use circpack::Packing;

use crate::{config::StyleConfig, error::CliError};

/// Build the SVG document for `packing`.
///
/// # Errors
///
/// Returns [`CliError::Style`] if a configured color cannot be parsed.
pub fn render_packing(packing: &Packing, style: &StyleConfig) -> Result<Document, CliError> {
    let region = packing.region();
    let fill = style.fill_color()?;
    let stroke = style.stroke_color()?;

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, region.width(), region.height()))
        .set("width", region.width())
        .set("height", region.height());

    if let Some(background) = style.background_color()? {
        document = document.add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", region.width())
                .set("height", region.height())
                .set("fill", &background),
        );
    }

    let circles = packing.circles().iter().fold(
        Group::new()
            .set("fill", &fill)
            .set("stroke", &stroke)
            .set("stroke-width", style.stroke_width()),
        |group, circle| {
            group.add(
                SvgCircle::new()
                    .set("cx", circle.center().x())
                    .set("cy", circle.center().y())
                    .set("r", circle.radius()),
            )
        },
    );

    debug!(circles = packing.len(); "SVG document rendered");
    Ok(document.add(circles))
}

/// Writes an SVG document to the specified file
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be created or written.
pub fn write_document(path: impl AsRef<Path>, document: &Document) -> Result<(), CliError> {
    let path = path.as_ref();
    info!(file_name = path.display().to_string(); "Creating SVG file");

    let mut file = File::create(path).map_err(|err| {
        error!(file_name = path.display().to_string(), err:err; "Failed to create SVG file");
        err
    })?;

    write!(file, "{document}").map_err(|err| {
        error!(file_name = path.display().to_string(), err:err; "Failed to write SVG content");
        err
    })?;

    Ok(())
}
