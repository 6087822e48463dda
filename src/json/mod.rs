//! JSON Import/Export für Diagramm-Dokumente und Kommentarlisten.
//!
//! Das Dokumentformat speichert Anker als `{xValue, yValue, xCoordinate,
//! yCoordinate, isLogScale, logBase}` und Teilkurven als `subgraphs`.

mod model;
pub mod parser;
pub mod writer;

pub use parser::{parse_comments, parse_graph_document};
pub use writer::{write_comments, write_graph_document};
