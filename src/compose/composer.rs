//! Composition orchestration.
//!
//! Drives the palette and blob generators in a loop and maps their output
//! onto a [`Document`]. This is the only place generation meets a host.

use rand::Rng;

use crate::config::GenerationConfig;
use crate::error::{BlotError, Result};
use crate::synth::{generate_palette, organic_blob};

use super::document::{Document, NodeId};

/// Frame name given to the generated container.
const FRAME_NAME: &str = "Blur Canvas";

/// Generate one blob composition into `doc`; returns the frame node.
///
/// The palette is generated before any node is created, so a failure
/// (unknown preset, empty manual colour list) aborts the request without
/// leaving partial content in the document.
///
/// Each shape draws its outline, position and blur jitter from `rng` in a
/// fixed order, so a seeded generator reproduces the composition exactly.
/// A non-positive canvas size is degenerate and not defended against.
pub fn generate_composition<R: Rng + ?Sized, D: Document>(
    config: &GenerationConfig,
    rng: &mut R,
    doc: &mut D,
) -> Result<NodeId> {
    let shapes = config.shape_total();
    let canvas = config.canvas;

    let palette = generate_palette(rng, &config.preset, shapes, &config.colours, config.mode)?;
    if palette.is_empty() && shapes > 0 {
        return Err(BlotError::Compose {
            message: "manual mode requires at least one colour".to_string(),
            help: Some("Add entries to `colours` or switch to a preset".to_string()),
        });
    }

    let center = doc.viewport_center();
    let frame = doc.create_frame(FRAME_NAME, canvas, canvas);
    doc.set_position(frame, center.x - canvas / 2.0, center.y - canvas / 2.0);

    for i in 0..shapes {
        let blob = organic_blob(rng, canvas * 0.6);
        let node = doc.create_vector(blob);

        let x = rng.random_range(-canvas * 0.2..canvas * 0.4);
        let y = rng.random_range(-canvas * 0.2..canvas * 0.4);
        doc.set_position(node, x, y);

        // Fewer manual colours than shapes: cycle the palette.
        doc.set_fill(node, palette[i % palette.len()]);

        let blur = (config.blur + rng.random_range(-40.0..60.0)).max(0.0);
        doc.set_blur(node, blur);

        doc.append_child(frame, node);
    }

    doc.center_viewport(frame);

    Ok(frame)
}
