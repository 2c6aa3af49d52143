use std::time::Instant;

use eframe::egui::{self, Rect, vec2};

use crate::{constants::FRAME_RATE_WINDOW, sim::FrameStats};

pub struct InfoPanel {
    pub last_update: Instant,
    pub frame_rates: [f64; FRAME_RATE_WINDOW],
    pub frame_rate_index: usize,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_rates: [0.0; FRAME_RATE_WINDOW],
            frame_rate_index: 0,
        }
    }

    fn record_frame(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_update).as_secs_f64();
        self.last_update = now;
        if elapsed > 0.0 {
            self.frame_rates[self.frame_rate_index] = 1.0 / elapsed;
            self.frame_rate_index = (self.frame_rate_index + 1) % self.frame_rates.len();
        }
    }

    fn average_frame_rate(&self) -> f64 {
        self.frame_rates.iter().sum::<f64>() / self.frame_rates.len() as f64
    }

    pub fn render(
        &mut self,
        ctx: &egui::Context,
        canvas: Rect,
        particles: usize,
        stats: FrameStats,
    ) {
        self.record_frame(Instant::now());

        egui::Area::new(egui::Id::new("constellation_info"))
            .fixed_pos(canvas.min + vec2(8.0, 8.0))
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.label(format!("{:.0} fps", self.average_frame_rate()));
                    ui.label(format!("Particles: {particles}"));
                    ui.label(format!("Links: {}", stats.links));
                    ui.label(format!("Overlapping pairs: {}", stats.impulses));
                });
            });
    }
}
