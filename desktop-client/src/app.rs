use crate::config::ClientConfig;
use common::{GRID_SIDE, GameState, GameStatus, Mark, log};

const WINNING_CELL_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const CELL_GAP: f32 = 4.0;

pub struct GameApp {
    config: ClientConfig,
    game: GameState,
}

impl GameApp {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            game: GameState::new(),
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Tic Tac Toe");
                ui.label("Two players, one device");
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Restart").clicked() {
                    self.restart();
                }
            });
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let status_text = self.game.status_line();
        match self.game.status() {
            GameStatus::XWon | GameStatus::OWon => {
                ui.colored_label(egui::Color32::GREEN, status_text);
            }
            GameStatus::Draw => {
                ui.colored_label(egui::Color32::YELLOW, status_text);
            }
            GameStatus::InProgress => {
                ui.label(status_text);
            }
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let cell_size = self.config.cell_size;
        let mut clicked: Option<usize> = None;

        egui::Grid::new("board_grid")
            .spacing(egui::vec2(CELL_GAP, CELL_GAP))
            .show(ui, |ui| {
                for row in 0..GRID_SIDE {
                    for col in 0..GRID_SIDE {
                        let index = row * GRID_SIDE + col;
                        if self.render_cell(ui, index, cell_size) {
                            clicked = Some(index);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(index) = clicked {
            self.handle_cell_click(index);
        }
    }

    fn render_cell(&self, ui: &mut egui::Ui, index: usize, cell_size: f32) -> bool {
        let mark = self.game.board().cell(index);
        let is_winning_cell = self
            .game
            .winning_line()
            .is_some_and(|line| line.contains(index));

        let text = egui::RichText::new(mark.symbol())
            .size(cell_size * 0.5)
            .strong();

        let mut button = egui::Button::new(text).min_size(egui::vec2(cell_size, cell_size));
        if is_winning_cell {
            button = button.fill(WINNING_CELL_COLOR);
        }

        let clickable = !self.game.is_over() && mark == Mark::Empty;
        ui.add_enabled(clickable, button).clicked()
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        if !self.config.show_hints {
            return;
        }

        if self.game.is_over() {
            ui.label("Press Restart to play again.");
        } else {
            ui.label("Tip: take the center to control more winning lines.");
        }
    }

    fn handle_cell_click(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(next) => {
                log!("{} placed at cell {}", self.game.current_mark().symbol(), index);
                self.game = next;
            }
            Err(e) => {
                // Invalid input is not an error for the player: drop it.
                log!("Ignored move at cell {}: {}", index, e);
            }
        }
    }

    fn restart(&mut self) {
        self.game = GameState::new();
        log!("Game restarted");
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_header(ui);
                ui.add_space(8.0);
                self.render_status(ui);
                ui.add_space(12.0);
                self.render_board(ui);
                ui.add_space(12.0);
                self.render_footer(ui);
            });
        });
    }
}
