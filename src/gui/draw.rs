use super::{App, Config};
use crate::{NiceInt, Pattern};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, DragValue, Image, RichText, Slider, Stroke,
    TextureOptions, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let finished = self.simulation.is_finished();
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add_enabled(!finished, Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        if ui
            .add_enabled(self.is_paused && !finished, Self::new_button("Next step"))
            .clicked()
        {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 1.0..=240.0).logarithmic(true));
        });

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
    }

    fn draw_restart_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Pattern: "));
            for pattern in Pattern::ALL {
                ui.radio_value(
                    &mut self.next_pattern,
                    pattern,
                    Self::new_text(&pattern.to_string()),
                );
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Grid size: "));
            ui.add(DragValue::new(&mut self.next_grid_size).range(1..=Config::MAX_GRID_SIZE));
            ui.label(Self::new_text(&format!(
                " (min {})",
                self.next_pattern.min_size()
            )));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Steps: "));
            ui.add(DragValue::new(&mut self.next_time_steps).range(0..=Config::MAX_TIME_STEPS));
        });

        if ui.add(Self::new_button("Restart")).clicked() {
            self.restart();
        }

        if let Some(err) = &self.config_error {
            ui.label(
                RichText::new(err)
                    .color(Config::ERROR_COLOR)
                    .size(Config::TEXT_SIZE),
            );
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let sim = &self.simulation;
        let mut text = format!(
            "Engine: {}\nPattern: {}, {}x{}\nStep: {} of {}\nLive cells: {}\nTotal living cells: {}\nTotal dead cells: {}\nLast step: {:.3} ms",
            sim.engine().name(),
            self.config.pattern(),
            self.config.grid_size(),
            self.config.grid_size(),
            NiceInt::from(sim.steps_processed()),
            NiceInt::from(sim.time_steps()),
            NiceInt::from(self.frame.population() as u64),
            NiceInt::from(sim.total_live()),
            NiceInt::from(sim.total_deaths()),
            self.last_update_duration * 1e3,
        );
        if sim.stopped_early() {
            text.push_str("\nStable, remaining steps extrapolated");
        } else if sim.is_finished() {
            text.push_str("\nFinished");
        }
        ui.label(Self::new_text(&text));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_run_controls(ui);
                });
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_restart_controls(ui);
                });
            });

            ui.add_space(Config::GAP_ABOVE_STATS);
            self.draw_stats(ui);
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let side = self.frame.side();
        let ci = ColorImage::from_gray([side; 2], self.frame.pixels());
        self.texture.set(ci, TextureOptions::NEAREST);

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        ui.add(Image::from_texture(source));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(1.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space((ui.available_width() - size_px).max(0.));

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
