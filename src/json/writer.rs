//! Writer für Diagramm-Dokumente und Kommentarlisten.

use super::model::GraphDto;
use crate::core::{CommentRecord, GraphDocument};
use anyhow::{Context, Result};

/// Schreibt ein Diagramm-Dokument als eingerücktes JSON.
pub fn write_graph_document(document: &GraphDocument) -> Result<String> {
    serde_json::to_string_pretty(&GraphDto::from(document))
        .context("Diagramm-Dokument konnte nicht geschrieben werden")
}

/// Schreibt eine Kommentarliste als JSON.
pub fn write_comments(comments: &[CommentRecord]) -> Result<String> {
    serde_json::to_string_pretty(comments).context("Kommentarliste konnte nicht geschrieben werden")
}
