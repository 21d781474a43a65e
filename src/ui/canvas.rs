//! Painting render frames with egui.
//!
//! Translates backend-neutral [`DrawCommand`]s into egui shapes, offset to
//! the rectangle allocated for the plot.

use eframe::egui;

use crate::app::LobePlotApp;
use crate::geometry::Pixel;
use crate::render::{DrawCommand, FontSpec, Frame, Rgb, TextMetrics};

/// Convert an RGB triple to an egui colour
pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn font_id(font: FontSpec) -> egui::FontId {
    egui::FontId::proportional(font.size)
}

/// Text metrics backed by egui's font layout
pub struct PainterMetrics<'a> {
    painter: &'a egui::Painter,
}

impl<'a> PainterMetrics<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl TextMetrics for PainterMetrics<'_> {
    fn measure(&self, text: &str, font: FontSpec) -> (f64, f64) {
        let galley =
            self.painter
                .layout_no_wrap(text.to_owned(), font_id(font), egui::Color32::BLACK);
        let size = galley.size();
        (size.x as f64, size.y as f64)
    }
}

/// Paints frames relative to the top-left corner of the plot rectangle
struct FramePainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl FramePainter<'_> {
    fn pos(&self, p: Pixel) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x as f32, self.origin.y + p.y as f32)
    }

    fn paint(&self, frame: &Frame) {
        for command in frame.commands() {
            self.paint_command(command);
        }
    }

    fn paint_command(&self, command: &DrawCommand) {
        match command {
            DrawCommand::Polyline {
                points,
                stroke,
                dash,
            } => {
                let path: Vec<egui::Pos2> = points.iter().map(|p| self.pos(*p)).collect();
                let stroke = egui::Stroke::new(stroke.width, to_color32(stroke.color));

                match dash {
                    Some(pattern) => {
                        // Pattern alternates on/off lengths
                        let dashes: Vec<f32> = pattern.iter().step_by(2).copied().collect();
                        let gaps: Vec<f32> = pattern.iter().skip(1).step_by(2).copied().collect();
                        self.painter.extend(egui::Shape::dashed_line_with_offset(
                            &path, stroke, &dashes, &gaps, 0.0,
                        ));
                    }
                    None => {
                        self.painter.add(egui::Shape::line(path, stroke));
                    }
                }
            }
            DrawCommand::Segments { segments, stroke } => {
                let stroke = egui::Stroke::new(stroke.width, to_color32(stroke.color));
                for [a, b] in segments {
                    self.painter
                        .line_segment([self.pos(*a), self.pos(*b)], stroke);
                }
            }
            DrawCommand::Polygon { points, fill } => {
                let points = points.iter().map(|p| self.pos(*p)).collect();
                self.painter.add(egui::Shape::convex_polygon(
                    points,
                    to_color32(*fill),
                    egui::Stroke::NONE,
                ));
            }
            DrawCommand::Region {
                curve,
                baseline,
                fill,
            } => {
                self.painter
                    .add(egui::Shape::mesh(self.region_mesh(curve, *baseline, *fill)));
            }
            DrawCommand::Text {
                pos,
                text,
                font,
                color,
            } => {
                self.painter.text(
                    self.pos(*pos),
                    egui::Align2::LEFT_TOP,
                    text,
                    font_id(*font),
                    to_color32(*color),
                );
            }
        }
    }

    /// Fill under a one-sided curve as a strip of trapezoids down to the baseline
    fn region_mesh(&self, curve: &[Pixel], baseline: f64, fill: Rgb) -> egui::Mesh {
        let color = to_color32(fill);
        let mut mesh = egui::Mesh::default();

        for (i, p) in curve.iter().enumerate() {
            mesh.colored_vertex(self.pos(*p), color);
            mesh.colored_vertex(self.pos(Pixel::new(p.x, baseline)), color);

            if i > 0 {
                let top = (2 * i) as u32;
                let prev_top = top - 2;
                mesh.add_triangle(prev_top, prev_top + 1, top);
                mesh.add_triangle(top, prev_top + 1, top + 1);
            }
        }

        mesh
    }
}

impl LobePlotApp {
    /// Fill the available space with the plot
    pub fn render_plot(&mut self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

        if !self.display.has_data() {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Open a data file to plot it (File \u{2192} Open file...)",
                egui::FontId::proportional(16.0),
                egui::Color32::GRAY,
            );
            return;
        }

        let painter = ui.painter_at(rect);
        let frame = self.display.render(
            rect.width() as f64,
            rect.height() as f64,
            &PainterMetrics::new(&painter),
        );

        FramePainter {
            painter: &painter,
            origin: rect.min,
        }
        .paint(&frame);
    }
}
