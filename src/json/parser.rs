//! Parser für Diagramm-Dokumente und Kommentarlisten.

use super::model::GraphDto;
use crate::core::{CommentRecord, GraphDocument};
use anyhow::{Context, Result};


/// Parsed ein Diagramm-Dokument aus einem JSON-String.
pub fn parse_graph_document(json: &str) -> Result<GraphDocument> {
    let dto: GraphDto =
        serde_json::from_str(json).context("Diagramm-Dokument konnte nicht gelesen werden")?;
    let document = GraphDocument::from(dto);
    log::info!(
        "Diagramm '{}' geladen: {} X-Anker, {} Y-Anker, {} Teilkurven",
        document.graph_name,
        document.calibration.x_axis_points.len(),
        document.calibration.y_axis_points.len(),
        document.subcurves.len()
    );
    Ok(document)
}

/// Parsed eine Kommentarliste `[{subplot, coordinate: {x, y}, text}]`.
pub fn parse_comments(json: &str) -> Result<Vec<CommentRecord>> {
    let comments: Vec<CommentRecord> =
        serde_json::from_str(json).context("Kommentarliste konnte nicht gelesen werden")?;
    log::info!("{} Kommentare geladen", comments.len());
    Ok(comments)
}
