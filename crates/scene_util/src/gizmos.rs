//! Editor-only debug drawing.
//!
//! Gizmos are recorded as plain commands in a [`GizmoBuffer`] that the
//! editor's renderer drains once per frame. Nothing here touches the GPU;
//! the buffer is just data, which keeps the helpers testable and the
//! module compilable headless.

use scene_math::{Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Radius of the marker sphere drawn above objects.
pub const MARKER_SPHERE_RADIUS: f32 = 0.25;

/// A single recorded draw command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GizmoCommand {
    /// A solid sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// A solid axis-aligned cube.
    Cube {
        /// Cube center.
        center: Vec3,
        /// Edge lengths per axis.
        size: Vec3,
        /// Fill color.
        color: Color,
    },
    /// An axis-aligned wireframe cube.
    WireCube {
        /// Cube center.
        center: Vec3,
        /// Edge lengths per axis.
        size: Vec3,
        /// Edge color.
        color: Color,
    },
    /// A line segment.
    Line {
        /// Segment start.
        start: Vec3,
        /// Segment end.
        end: Vec3,
        /// Line color.
        color: Color,
    },
}

/// Per-frame buffer of gizmo draw commands.
#[derive(Debug, Default)]
pub struct GizmoBuffer {
    commands: Vec<GizmoCommand>,
}

impl GizmoBuffer {
    /// Create a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Record a solid sphere.
    pub fn sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.commands.push(GizmoCommand::Sphere {
            center,
            radius,
            color,
        });
    }

    /// Record a solid cube.
    pub fn cube(&mut self, center: Vec3, size: Vec3, color: Color) {
        self.commands.push(GizmoCommand::Cube {
            center,
            size,
            color,
        });
    }

    /// Record a wireframe cube.
    pub fn wire_cube(&mut self, center: Vec3, size: Vec3, color: Color) {
        self.commands.push(GizmoCommand::WireCube {
            center,
            size,
            color,
        });
    }

    /// Record a line segment.
    pub fn line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.commands.push(GizmoCommand::Line { start, end, color });
    }

    /// Draw a red marker sphere floating one `scale.y` above the object.
    pub fn sphere_above(&mut self, target: &Transform) {
        self.sphere_above_with_color(target, Color::RED);
    }

    /// Draw a marker sphere floating one `scale.y` above the object, in
    /// the given color.
    pub fn sphere_above_with_color(&mut self, target: &Transform, color: Color) {
        let center = Vec3::new(
            target.position.x,
            target.position.y + target.scale.y,
            target.position.z,
        );
        self.sphere(center, MARKER_SPHERE_RADIUS, color);
    }

    /// Draw the object's bounds as a solid cube with a wireframe outline.
    pub fn outlined_cube(&mut self, target: &Transform, faces: Color, edges: Color) {
        self.cube(target.position, target.scale, faces);
        self.wire_cube(target.position, target.scale, edges);
    }

    /// Draw a horizontal line at `y_level`, spanning the object's width
    /// (`x ± scale.x / 2`) at the object's `z`.
    pub fn y_level_line(&mut self, target: &Transform, y_level: f32, color: Color) {
        let start = Vec3::new(
            target.position.x - target.scale.x / 2.0,
            y_level,
            target.position.z,
        );
        let end = Vec3::new(
            target.position.x + target.scale.x / 2.0,
            y_level,
            target.position.z,
        );
        self.line(start, end, color);
    }

    /// Returns the recorded commands in draw order.
    #[must_use]
    pub fn commands(&self) -> &[GizmoCommand] {
        &self.commands
    }

    /// Discard all recorded commands. The renderer calls this after
    /// draining the buffer each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Returns the number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_math::Quat;

    #[test]
    fn test_sphere_above_offsets_by_scale_y() {
        let mut gizmos = GizmoBuffer::new();
        let target = Transform::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::IDENTITY,
            Vec3::new(1.0, 4.0, 1.0),
        );
        gizmos.sphere_above(&target);

        assert_eq!(
            gizmos.commands(),
            &[GizmoCommand::Sphere {
                center: Vec3::new(1.0, 6.0, 3.0),
                radius: MARKER_SPHERE_RADIUS,
                color: Color::RED,
            }]
        );
    }

    #[test]
    fn test_sphere_above_with_color() {
        let mut gizmos = GizmoBuffer::new();
        gizmos.sphere_above_with_color(&Transform::IDENTITY, Color::ORANGE);

        let [GizmoCommand::Sphere { color, .. }] = gizmos.commands() else {
            panic!("expected a single sphere command");
        };
        assert_eq!(*color, Color::ORANGE);
    }

    #[test]
    fn test_outlined_cube_records_faces_then_edges() {
        let mut gizmos = GizmoBuffer::new();
        let target = Transform::from_position(Vec3::Y).with_scale(Vec3::new(2.0, 1.0, 2.0));
        gizmos.outlined_cube(&target, Color::BROWN, Color::BLACK);

        assert_eq!(
            gizmos.commands(),
            &[
                GizmoCommand::Cube {
                    center: Vec3::Y,
                    size: Vec3::new(2.0, 1.0, 2.0),
                    color: Color::BROWN,
                },
                GizmoCommand::WireCube {
                    center: Vec3::Y,
                    size: Vec3::new(2.0, 1.0, 2.0),
                    color: Color::BLACK,
                },
            ]
        );
    }

    #[test]
    fn test_y_level_line_spans_object_width() {
        let mut gizmos = GizmoBuffer::new();
        let target = Transform::from_position(Vec3::new(10.0, 5.0, -2.0))
            .with_scale(Vec3::new(6.0, 1.0, 1.0));
        gizmos.y_level_line(&target, 0.5, Color::WHITE);

        assert_eq!(
            gizmos.commands(),
            &[GizmoCommand::Line {
                start: Vec3::new(7.0, 0.5, -2.0),
                end: Vec3::new(13.0, 0.5, -2.0),
                color: Color::WHITE,
            }]
        );
    }

    #[test]
    fn test_clear_empties_the_buffer() {
        let mut gizmos = GizmoBuffer::new();
        gizmos.sphere_above(&Transform::IDENTITY);
        gizmos.y_level_line(&Transform::IDENTITY, 0.0, Color::RED);
        assert_eq!(gizmos.len(), 2);

        gizmos.clear();
        assert!(gizmos.is_empty());
    }
}
