//! Drawing state machine for the admin map editor.
//!
//! Turns a sequence of map gestures into a [`MapElementDraft`]:
//!
//! ```text
//! Idle --select_tool--> Armed(tool)
//! Armed(marker|circle) --left_click--> Finishing(point)
//! Armed(polygon|polyline) --left_click--> Drawing([p])
//! Drawing --left_click--> Drawing([.., p])
//! Drawing --right_click (>= 2 points)--> Finishing(path)
//! Finishing --submit(form)--> Idle   (yields a draft)
//! any --cancel--> Idle               (discards points)
//! ```
//!
//! Every tool, markers included, produces a map element. Metadata comes
//! from one structured [`AnnotationForm`] validated with the same rules the
//! server applies.

use crate::error::CoreError;
use crate::geo::{Coordinates, LatLng};
use crate::map_element::{
    validate_geometry, validate_size, MapElementDraft, MapElementKind, RiskLevel, DEFAULT_COLOR,
    MIN_PATH_POINTS,
};
use crate::validation::{is_present, require_fields};

/// Range of the drawing-size control.
pub const MIN_DRAWING_SIZE: f64 = 1.0;
pub const MAX_DRAWING_SIZE: f64 = 10.0;

/// Meters per kilometer, for circle radii.
const METERS_PER_KM: f64 = 1000.0;

/// Circle radius in meters for a drawing-size value in kilometers.
pub fn circle_radius_meters(drawing_size_km: f64) -> f64 {
    drawing_size_km * METERS_PER_KM
}

/// Where the editor is in the drawing sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    /// No tool selected.
    Idle,
    /// Tool selected, waiting for the first click.
    Armed(MapElementKind),
    /// Accumulating a path for polygon/polyline.
    Drawing {
        tool: MapElementKind,
        points: Vec<LatLng>,
    },
    /// Geometry is complete; waiting for metadata.
    Finishing {
        tool: MapElementKind,
        geometry: Coordinates,
    },
}

/// Metadata collected once a shape is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationForm {
    pub label: Option<String>,
    pub description: Option<String>,
    pub risk: RiskLevel,
    pub category: Option<String>,
    pub color: String,
    /// Drawing-size control value: stroke weight for paths, radius in
    /// kilometers for circles.
    pub drawing_size: f64,
}

impl Default for AnnotationForm {
    fn default() -> Self {
        Self {
            label: None,
            description: None,
            risk: RiskLevel::Low,
            category: None,
            color: DEFAULT_COLOR.to_string(),
            drawing_size: 3.0,
        }
    }
}

/// The editor itself. One tool is active at a time.
#[derive(Debug, Clone)]
pub struct MapEditor {
    state: EditorState,
}

impl Default for MapEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MapEditor {
    pub fn new() -> Self {
        Self {
            state: EditorState::Idle,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Points placed so far in the current drawing.
    pub fn pending_points(&self) -> &[LatLng] {
        match &self.state {
            EditorState::Drawing { points, .. } => points,
            _ => &[],
        }
    }

    /// Select a tool. Any drawing in progress is discarded.
    pub fn select_tool(&mut self, tool: MapElementKind) {
        self.state = EditorState::Armed(tool);
    }

    /// Abort the current drawing and return to idle.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Left click on the map at `point`.
    pub fn left_click(&mut self, point: LatLng) {
        self.state = match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Armed(tool) if tool.is_point() => EditorState::Finishing {
                tool,
                geometry: Coordinates::Point(point),
            },
            EditorState::Armed(tool) => EditorState::Drawing {
                tool,
                points: vec![point],
            },
            EditorState::Drawing { tool, mut points } => {
                points.push(point);
                EditorState::Drawing { tool, points }
            }
            other => other,
        };
    }

    /// Right click: finish a path once it has enough points.
    pub fn right_click(&mut self) {
        self.state = match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Drawing { tool, points } if points.len() >= MIN_PATH_POINTS => {
                EditorState::Finishing {
                    tool,
                    geometry: Coordinates::Path(points),
                }
            }
            other => other,
        };
    }

    /// Submit the metadata form for the finished shape.
    ///
    /// On success the editor returns to idle and the create payload is
    /// returned. On a validation error the shape stays pending so the form
    /// can be corrected.
    pub fn submit(&mut self, form: &AnnotationForm) -> Result<MapElementDraft, CoreError> {
        let EditorState::Finishing { tool, geometry } = &self.state else {
            return Err(CoreError::Validation(
                "no finished shape is waiting for details".to_string(),
            ));
        };

        let draft = build_draft(*tool, geometry.clone(), form)?;
        self.state = EditorState::Idle;
        Ok(draft)
    }
}

fn build_draft(
    kind: MapElementKind,
    geometry: Coordinates,
    form: &AnnotationForm,
) -> Result<MapElementDraft, CoreError> {
    require_fields(&[("color", is_present(Some(&form.color)))])?;

    if !(MIN_DRAWING_SIZE..=MAX_DRAWING_SIZE).contains(&form.drawing_size) {
        return Err(CoreError::Validation(format!(
            "drawing size must be between {MIN_DRAWING_SIZE} and {MAX_DRAWING_SIZE}, got {}",
            form.drawing_size
        )));
    }

    let coordinates = validate_geometry(kind, geometry)?;
    for point in coordinates.points() {
        point.validate()?;
    }

    let size = match kind {
        MapElementKind::Circle => Some(circle_radius_meters(form.drawing_size)),
        MapElementKind::Polygon | MapElementKind::Polyline => Some(form.drawing_size),
        MapElementKind::Marker => None,
    };
    validate_size(size)?;

    Ok(MapElementDraft {
        kind,
        coordinates,
        color: form.color.trim().to_string(),
        size,
        label: non_blank(&form.label),
        description: non_blank(&form.description),
        risk: form.risk,
        category: non_blank(&form.category),
    })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
