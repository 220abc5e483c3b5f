//! Painter's-algorithm render list
//!
//! Faces are projected whole or not at all: a single vertex on or behind the
//! near plane drops the face for the frame. Surviving faces are keyed by their
//! average camera-space depth and painted farthest first. There is no depth
//! buffer and no clipping, so interpenetrating geometry can sort wrongly.

use super::math::{project_point, CameraPose, Vec3};
use super::render::Framebuffer;
use super::types::{Color, RenderConfig};
use crate::world::{Face, Mesh};

/// A face projected to screen space, ready for painting
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenPolygon {
    pub points: Vec<(i32, i32)>,
    pub color: Color,
    /// Average camera-space depth of the face's vertices
    pub depth: f32,
}

/// Project one face. Returns `None` if any vertex fails the near-plane test
/// or the face has fewer than three vertices.
pub fn project_face(
    vertices: &[Vec3],
    face: &Face,
    camera: &CameraPose,
    config: &RenderConfig,
) -> Option<ScreenPolygon> {
    if face.indices.len() < 3 {
        return None;
    }

    let mut points = Vec::with_capacity(face.indices.len());
    let mut depth_sum = 0.0;
    for &i in &face.indices {
        let projected = project_point(*vertices.get(i)?, camera, config)?;
        points.push((projected.x, projected.y));
        depth_sum += projected.depth;
    }

    Some(ScreenPolygon {
        depth: depth_sum / face.indices.len() as f32,
        points,
        color: face.color,
    })
}

/// All polygons visible this frame
#[derive(Debug, Default)]
pub struct RenderList {
    polygons: Vec<ScreenPolygon>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project every face of a mesh and keep the visible ones
    pub fn push_mesh(&mut self, mesh: &Mesh, camera: &CameraPose, config: &RenderConfig) {
        self.polygons.extend(
            mesh.faces
                .iter()
                .filter_map(|face| project_face(&mesh.vertices, face, camera, config)),
        );
    }

    pub fn push(&mut self, polygon: ScreenPolygon) {
        self.polygons.push(polygon);
    }

    /// Order by depth, farthest first. Equal depths keep insertion order.
    pub fn sort(&mut self) {
        self.polygons.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[ScreenPolygon] {
        &self.polygons
    }

    /// Paint in list order: fill, then outline
    pub fn paint(&self, fb: &mut Framebuffer, config: &RenderConfig) {
        for polygon in &self.polygons {
            fb.fill_polygon(&polygon.points, polygon.color);
            fb.stroke_polygon(&polygon.points, config.outline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Color = Color::new(0, 200, 0);
    const BLUE: Color = Color::new(0, 0, 200);

    /// Square facing the camera at depth `z`, centred on the view axis
    fn square_at(mesh: &mut Mesh, z: f32, half: f32, color: Color) {
        let base = mesh.vertices.len();
        mesh.vertices.extend([
            Vec3::new(-half, -half, z),
            Vec3::new(half, -half, z),
            Vec3::new(half, half, z),
            Vec3::new(-half, half, z),
        ]);
        mesh.faces.push(Face::new(vec![base, base + 1, base + 2, base + 3], color));
    }

    fn camera() -> CameraPose {
        CameraPose::new(Vec3::ZERO, 0.0)
    }

    #[test]
    fn test_depth_is_vertex_average() {
        let cfg = RenderConfig::default();
        let vertices = vec![
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(10.0, 0.0, 200.0),
            Vec3::new(0.0, 10.0, 300.0),
        ];
        let face = Face::new(vec![0, 1, 2], GREEN);
        let poly = project_face(&vertices, &face, &camera(), &cfg).unwrap();
        assert!((poly.depth - 200.0).abs() < 1e-3);
        assert_eq!(poly.points.len(), 3);
    }

    #[test]
    fn test_face_with_one_vertex_behind_is_dropped() {
        let cfg = RenderConfig::default();
        let vertices = vec![
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(10.0, 0.0, 100.0),
            Vec3::new(0.0, 10.0, 5.0),
        ];
        let mesh = Mesh {
            vertices,
            faces: vec![Face::new(vec![0, 1, 2], GREEN)],
        };
        let mut list = RenderList::new();
        list.push_mesh(&mesh, &camera(), &cfg);
        assert!(list.is_empty());
    }

    #[test]
    fn test_degenerate_face_is_dropped() {
        let cfg = RenderConfig::default();
        let vertices = vec![Vec3::new(0.0, 0.0, 100.0), Vec3::new(10.0, 0.0, 100.0)];
        let face = Face::new(vec![0, 1], GREEN);
        assert!(project_face(&vertices, &face, &camera(), &cfg).is_none());
    }

    #[test]
    fn test_sort_farthest_first() {
        let mut list = RenderList::new();
        for depth in [50.0, 10.0, 90.0] {
            list.push(ScreenPolygon {
                points: vec![(0, 0), (1, 0), (0, 1)],
                color: GREEN,
                depth,
            });
        }
        list.sort();
        let order: Vec<f32> = list.polygons().iter().map(|p| p.depth).collect();
        assert_eq!(order, vec![90.0, 50.0, 10.0]);
    }

    #[test]
    fn test_nearer_face_painted_over_farther() {
        let cfg = RenderConfig::default();
        let mut mesh = Mesh::new();
        // Near face added first so only sorting can put it on top
        square_at(&mut mesh, 200.0, 20.0, GREEN);
        square_at(&mut mesh, 400.0, 100.0, BLUE);

        let mut list = RenderList::new();
        list.push_mesh(&mesh, &camera(), &cfg);
        list.sort();
        assert_eq!(list.polygons()[0].color, BLUE);

        let mut fb = Framebuffer::new(cfg.width, cfg.height);
        fb.clear(Color::BLACK);
        list.paint(&mut fb, &cfg);
        let (cx, cy) = (cfg.width / 2, cfg.height / 2);
        assert_eq!(fb.get_pixel(cx, cy), Some(GREEN));
        // Blue square spans +-175px at depth 400; green only +-70px at depth 200
        assert_eq!(fb.get_pixel(cx + 120, cy), Some(BLUE));
        assert_eq!(fb.get_pixel(cx + 70, cy), Some(cfg.outline));
    }
}
