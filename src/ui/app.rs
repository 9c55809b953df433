//! Main application for the Hexapawn GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main Hexapawn application
pub struct HexapawnApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for HexapawnApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl HexapawnApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("5x5 Hexapawn - You play White");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.outcome.is_some() {
                    ui.add_space(10.0);
                    self.render_end_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("HEXAPAWN").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("reach the far row, or trap your opponent")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (text, color) = if self.state.outcome.is_some() {
                ("Game Over", WIN_HIGHLIGHT)
            } else if self.state.is_animating() {
                ("Moving...", STATUS_THINKING)
            } else if self.state.is_player_turn() {
                ("Your turn", STATUS_OK)
            } else {
                ("AI thinking...", STATUS_THINKING)
            };
            ui.label(RichText::new(text).size(16.0).strong().color(color));

            if let Some(mv) = self.state.last_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!(
                        "Last: ({}, {}) -> ({}, {})",
                        mv.from.row, mv.from.col, mv.to.row, mv.to.col
                    ))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render engine debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(12.0)
                        .color(TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render end-of-game card with the restart button
    fn render_end_card(&mut self, ui: &mut egui::Ui) {
        let Some(outcome) = self.state.outcome else {
            return;
        };

        Frame::new()
            .fill(END_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(outcome.label())
                            .size(20.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(END_BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let restart = ui.add(
                                egui::Label::new(
                                    RichText::new("Restart")
                                        .size(14.0)
                                        .strong()
                                        .color(egui::Color32::BLACK),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if restart.clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(BOARD_MARGIN))
            .show(ctx, |ui| {
                let targets = self.state.selected_targets();
                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.selected,
                    &targets,
                    self.state.last_move,
                    self.state.animation.as_ref(),
                    self.state.outcome.is_some(),
                );

                if let Some(pos) = clicked {
                    self.state.handle_click(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for HexapawnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Advance the orchestration loop: apply finished animations and
        // run the AI's turn
        self.state.tick();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_animating() {
            ctx.request_repaint();
        }
    }
}
