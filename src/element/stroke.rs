use egui::{Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};

use super::{Element, INK};

/// Freehand stroke built from an ordered run of pointer positions
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
}

impl Stroke {
    // A stroke starts life with the press position as its only point
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            points: vec![start],
            thickness,
        }
    }

    // Append a point while the pointer is held down
    pub fn grow(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Element for Stroke {
    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        // A lone press leaves no mark; only connected segments are visible
        if self.points.len() < 2 {
            return;
        }

        let screen_points: Vec<Pos2> = self.points.iter().map(|point| *point + origin).collect();
        painter.add(Shape::line(
            screen_points,
            EguiStroke::new(self.thickness, INK),
        ));
    }
}
