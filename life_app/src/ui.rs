// ui.rs - egui frontend: controls, keyboard bindings, grid painting

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::debug;
use std::time::{Duration, Instant};

use crate::{LifeApp, PIXEL_SIZE, patterns};

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.randomize_grid();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Young:");
                ui.color_edit_button_srgba(&mut self.young_color);
                ui.label("Mature:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            if self.show_help {
                ui.label("Mouse click :  toggle cell (while paused)");
                ui.label("      space :  play/pause");
                ui.label("        +/- :  change speed");
                ui.label("          R :  randomize      C :  clear");
                ui.separator();
            }

            // Draw the grid; cells brighten toward the mature color with age
            let spacing = 0.5;
            let box_size = PIXEL_SIZE - spacing;
            let rows = self.grid.height() as usize;
            let cols = self.grid.width() as usize;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                PIXEL_SIZE * cols as f32 - spacing,
                PIXEL_SIZE * rows as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for row in 0..rows {
                for col in 0..cols {
                    let x = start_pos.x + col as f32 * PIXEL_SIZE;
                    let y = start_pos.y + row as f32 * PIXEL_SIZE;

                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let age = self.grid.age(row as i64, col as i64);
                    painter.rect_filled(rect, 1.0, self.cell_color(age));
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    // Editing is only allowed while paused
                    if !self.is_running && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                self.toggle_cell(row as i64, col as i64);
                            }
                        }
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = rows * cols;
            let live_cells: usize = (0..rows)
                .map(|row| {
                    (0..cols)
                        .filter(|&col| self.grid.is_alive(row as i64, col as i64))
                        .count()
                })
                .sum();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total as f32 * 100.0
                ));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            debug!("resuming game");
            self.last_update = Instant::now();
        } else {
            debug!("pausing game");
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| !i.keys_down.is_empty() || i.pointer.any_pressed()) {
            self.show_help = false;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.toggle_running();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.is_running = false;
            self.randomize_grid();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::C)) {
            self.is_running = false;
            self.clear_grid();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::PlusEquals)) {
            self.update_interval = (self.update_interval * 4 / 5).max(Duration::from_millis(10));
            debug!("update interval decreased to {:?}", self.update_interval);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Minus)) {
            self.update_interval = (self.update_interval * 5 / 4).min(Duration::from_secs(2));
            debug!("update interval increased to {:?}", self.update_interval);
        }
    }
}
