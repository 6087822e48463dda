//! Serde-Abbild des externen Dokumentformats.

use crate::core::geometry::point_serde;
use crate::core::{AxisKind, AxisPoint, Calibration, GraphDocument, InterpolationMethod, Point, SubCurve};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GraphDto {
    #[serde(default)]
    pub graph_name: String,
    #[serde(default)]
    pub x_axis_name: String,
    #[serde(default)]
    pub y_axis_name: String,
    #[serde(default)]
    pub origin_point: Option<AxisPointDto>,
    #[serde(default)]
    pub x_axis_points: Vec<AxisPointDto>,
    #[serde(default)]
    pub y_axis_points: Vec<AxisPointDto>,
    #[serde(default)]
    pub subgraphs: Vec<SubgraphDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AxisPointDto {
    #[serde(default)]
    pub x_value: f64,
    #[serde(default)]
    pub y_value: f64,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
    #[serde(default)]
    pub is_log_scale: bool,
    #[serde(default)]
    pub log_base: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SubgraphDto {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interpolation_type: InterpolationMethod,
    #[serde(default, with = "point_serde::vec")]
    pub knots: Vec<Point>,
    #[serde(default, with = "point_serde::vec")]
    pub coordinates: Vec<Point>,
}

impl AxisPointDto {
    fn from_axis_point(point: &AxisPoint, axis: AxisKind) -> Self {
        let (x_value, y_value) = match axis {
            AxisKind::Y => (0.0, point.value),
            AxisKind::X | AxisKind::Origin => (point.value, 0.0),
        };
        Self {
            x_value,
            y_value,
            x_coordinate: point.position.x,
            y_coordinate: point.position.y,
            is_log_scale: point.is_log_scale,
            log_base: point.log_base,
        }
    }

    fn origin(position: Point) -> Self {
        Self {
            x_coordinate: position.x,
            y_coordinate: position.y,
            ..Self::default()
        }
    }

    fn into_axis_point(self, axis: AxisKind) -> AxisPoint {
        AxisPoint {
            value: match axis {
                AxisKind::Y => self.y_value,
                AxisKind::X | AxisKind::Origin => self.x_value,
            },
            position: Point::new(self.x_coordinate, self.y_coordinate),
            is_log_scale: self.is_log_scale,
            log_base: self.log_base,
        }
    }
}

impl From<GraphDto> for GraphDocument {
    fn from(dto: GraphDto) -> Self {
        let calibration = Calibration {
            origin: dto
                .origin_point
                .map(|o| Point::new(o.x_coordinate, o.y_coordinate)),
            x_axis_points: dto
                .x_axis_points
                .into_iter()
                .map(|p| p.into_axis_point(AxisKind::X))
                .collect(),
            y_axis_points: dto
                .y_axis_points
                .into_iter()
                .map(|p| p.into_axis_point(AxisKind::Y))
                .collect(),
        };
        let subcurves = dto
            .subgraphs
            .into_iter()
            .map(|s| SubCurve {
                id: s.id,
                name: s.name,
                knots: s.knots,
                interpolation_method: s.interpolation_type,
                coordinates: s.coordinates,
            })
            .collect();

        Self {
            graph_name: dto.graph_name,
            x_axis_name: dto.x_axis_name,
            y_axis_name: dto.y_axis_name,
            calibration,
            subcurves,
        }
    }
}

impl From<&GraphDocument> for GraphDto {
    fn from(doc: &GraphDocument) -> Self {
        let cal = &doc.calibration;
        Self {
            graph_name: doc.graph_name.clone(),
            x_axis_name: doc.x_axis_name.clone(),
            y_axis_name: doc.y_axis_name.clone(),
            origin_point: cal.origin.map(AxisPointDto::origin),
            x_axis_points: cal
                .x_axis_points
                .iter()
                .map(|p| AxisPointDto::from_axis_point(p, AxisKind::X))
                .collect(),
            y_axis_points: cal
                .y_axis_points
                .iter()
                .map(|p| AxisPointDto::from_axis_point(p, AxisKind::Y))
                .collect(),
            subgraphs: doc
                .subcurves
                .iter()
                .map(|c| SubgraphDto {
                    id: c.id,
                    name: c.name.clone(),
                    interpolation_type: c.interpolation_method,
                    knots: c.knots.clone(),
                    coordinates: c.coordinates.clone(),
                })
                .collect(),
        }
    }
}
