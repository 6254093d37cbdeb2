use glam::Vec2;

use crate::helpers::geometry::distance_to_segment;

/// Rectangular playfield in world units, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Route the balloons follow, fixed for the whole session.
///
/// Always holds at least two points and no two consecutive points are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    pub fn new(points: Vec<Vec2>) -> Result<Self, String> {
        if points.len() < 2 {
            return Err(format!(
                "Path needs at least 2 points, got {}",
                points.len()
            ));
        }

        for (i, pair) in points.windows(2).enumerate() {
            if pair[0] == pair[1] {
                return Err(format!(
                    "Path points {} and {} are identical ({}, {})",
                    i,
                    i + 1,
                    pair[0].x,
                    pair[0].y
                ));
            }
        }

        Ok(Self { points })
    }

    /// Left edge to the middle, then straight down to the bottom edge.
    pub fn default_for(playfield: &Playfield) -> Result<Self, String> {
        let center = playfield.center();
        Self::new(vec![
            Vec2::new(0.0, center.y),
            Vec2::new(center.x, center.y),
            Vec2::new(center.x, playfield.height),
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    pub fn end(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Index of the final point; a balloon whose segment index reaches this
    /// has arrived.
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn total_length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Shortest distance from `point` to any segment of the path.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.segments()
            .map(|(a, b)| distance_to_segment(point, a, b))
            .fold(f32::INFINITY, f32::min)
    }
}
