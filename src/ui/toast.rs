//! Short-lived notifications in the corner of the window.

use eframe::egui;
use std::time::{Duration, Instant};

use crate::app::LobePlotApp;
use crate::state::ToastType;
use crate::ui::canvas::to_color32;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Fade-out time at the end of [`TOAST_DURATION`]
const FADE: Duration = Duration::from_millis(500);

/// A message shown until [`TOAST_DURATION`] has passed
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastType,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastType) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }

    /// 1.0 while fully visible, falling to 0.0 over the last [`FADE`]
    fn opacity(&self) -> f32 {
        let remaining = TOAST_DURATION.saturating_sub(self.shown_at.elapsed());
        (remaining.as_secs_f32() / FADE.as_secs_f32()).min(1.0)
    }
}

impl LobePlotApp {
    /// Draw the current toast anchored to the bottom-right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        let Some(toast) = &self.toast else {
            return;
        };

        let opacity = toast.opacity();
        let fill = to_color32(toast.kind.color()).gamma_multiply(opacity);
        let text = to_color32(toast.kind.text_color()).gamma_multiply(opacity);

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(360.0);
                        ui.label(egui::RichText::new(&toast.message).color(text).size(14.0));
                    });
            });
    }
}
