use crate::libquiz::engine::{Phase, QuizEngine};
use crate::Error;
use eframe::egui;
use eframe::egui::Color32;
use eframe::egui::RichText;
use eframe::egui::ScrollArea;
use eframe::egui::Ui;
use log::{debug, warn};

const BLUE: Color32 = Color32::from_rgb(96, 165, 250);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);
const RED: Color32 = Color32::from_rgb(248, 113, 113);

struct GuiState {
    engine: QuizEngine,
}

impl GuiState {
    fn new(_ctx: &eframe::CreationContext, engine: QuizEngine) -> Self {
        Self { engine }
    }

    fn draw_question(&mut self, ui: &mut Ui) {
        let current = self.engine.current_state();
        let Some(question) = current.current_question else {
            return;
        };

        ui.label(
            RichText::new(format!(
                "Question {}/{}",
                current.current_index_display, current.total_questions
            ))
            .size(20.0),
        );
        ui.add_space(16.0);
        ui.label(RichText::new(question.text.as_str()).size(26.0).strong());
        ui.add_space(16.0);

        let mut picked = None;
        let width = ui.available_width();
        for (idx, option) in question.options.iter().enumerate() {
            let button = egui::Button::new(RichText::new(option.text.as_str()).size(18.0));
            if ui.add_sized([width, 40.0], button).clicked() {
                picked = Some(idx);
            }
        }

        if let Some(idx) = picked {
            debug!("[GUI] Picked option {}", idx);
            if let Err(err) = self.engine.answer(idx) {
                warn!("[GUI] {}", err);
            }
            debug!(
                "[GUI] {}/{} answered",
                self.engine.state().answers_given.len(),
                self.engine.total_questions()
            );
        }
    }

    fn draw_summary(&mut self, ui: &mut Ui) {
        let summary = self.engine.summary();

        ui.label(RichText::new("Quiz Complete!").size(30.0).strong().color(BLUE));
        ui.add_space(12.0);
        ui.label(
            RichText::new(format!(
                "You scored {} out of {} ({:.0}%)",
                summary.score, summary.total_questions, summary.score_percentage
            ))
            .size(20.0),
        );
        ui.add_space(12.0);

        if summary.passed {
            ui.label(RichText::new("🎉").size(60.0));
            ui.label(RichText::new("Congratulations!").size(24.0).strong().color(GREEN));
        } else {
            ui.label(RichText::new("😢").size(60.0));
            ui.label(RichText::new("Try Again!").size(24.0).strong().color(RED));

            if !summary.missed_questions.is_empty() {
                ui.separator();
                ui.label(RichText::new("Questions Missed:").size(20.0).color(BLUE));
                ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    for missed in &summary.missed_questions {
                        ui.label(format!("{}. {}", missed.index + 1, missed.question_text));
                        ui.label(
                            RichText::new(format!("Your Answer: {}", missed.user_answer)).color(RED),
                        );
                        ui.label(
                            RichText::new(format!("Correct Answer: {}", missed.correct_answer))
                                .color(GREEN),
                        );
                        ui.add_space(8.0);
                    }
                });
            }
        }

        ui.add_space(16.0);
        if ui.button(RichText::new("Restart Quiz").size(18.0)).clicked() {
            self.engine.restart();
        }
    }
}

impl eframe::App for GuiState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| match self.engine.phase() {
                Phase::InProgress => self.draw_question(ui),
                Phase::Finished => self.draw_summary(ui),
            });
        });
    }
}

pub(crate) fn init_gui(engine: QuizEngine) -> Result<(), Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pop Quiz!",
        native_options,
        Box::new(move |cc| Ok(Box::new(GuiState::new(cc, engine)))),
    )?;

    Ok(())
}
