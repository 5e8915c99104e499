//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::{AppConfig, MAX_DIFFICULTY};
use crate::{GameOutcome, Piece};

/// Main Connect Four application
pub struct ConnectFourApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl ConnectFourApp {
    /// Create the app from loaded settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let state = GameState::from_config(config).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid board settings, using a standard board");
            let mode = GameMode::PvE {
                human_color: config.human_plays,
            };
            GameState::new(mode, crate::Board::new(), config.difficulty)
        });
        info!(
            rows = state.board.rows(),
            cols = state.board.cols(),
            difficulty = state.difficulty(),
            "starting Connect Four"
        );

        Self {
            state,
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn color_name(piece: Piece) -> &'static str {
        match piece {
            Piece::Red => "RED",
            Piece::Yellow => "YELLOW",
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.state.restart(GameMode::PvE {
                            human_color: Piece::Red,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Yellow)").clicked() {
                        self.state.restart(GameMode::PvE {
                            human_color: Piece::Yellow,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.restart(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => {
                            format!("PvE - You: {}", Self::color_name(human_color))
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CONNECT FOUR").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.is_game_over() {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui) {
                        self.state.reset();
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, disc_color(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(Self::color_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), TIMER_WARNING)
                    } else if self.state.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        ("Your turn".to_string(), TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let mut difficulty = self.state.difficulty();
            ui.add_enabled_ui(!self.state.is_ai_thinking(), |ui| {
                ui.add(egui::Slider::new(&mut difficulty, 1..=MAX_DIFFICULTY).text("Difficulty"));
            });
            if difficulty != self.state.difficulty() {
                self.state.set_difficulty(difficulty);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if self.state.mode == GameMode::PvP && ui.button("Hint").clicked() {
                    self.state.request_suggestion();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("Column {}", result.column + 1))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!(
                    "Depth {} | {} nodes | {} cutoffs",
                    result.depth, result.nodes, result.cutoffs
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );
            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
        });
    }

    /// Render game over card. Returns true if a new game was requested.
    fn render_game_over_card(&self, ui: &mut egui::Ui) -> bool {
        let mut new_game = false;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match self.state.outcome {
                        GameOutcome::Win(winner) => {
                            ui.label(
                                RichText::new(format!("{} WINS!", Self::color_name(winner)))
                                    .size(18.0)
                                    .strong()
                                    .color(disc_color(winner)),
                            );
                        }
                        GameOutcome::Draw => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                        }
                        GameOutcome::InProgress => {}
                    }

                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        new_game = true;
                    }
                });
            });

        new_game
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepting_input = !self.state.is_game_over()
                && !self.state.is_ai_thinking()
                && self.state.is_human_turn();

            let clicked = ui
                .vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        &self.state.board,
                        self.state.current_turn,
                        self.state.last_move,
                        self.state.suggested_column,
                        self.state.winning_line,
                        accepting_input,
                    )
                })
                .inner;

            if let Some(col) = clicked {
                if let Err(err) = self.state.try_drop(col) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
