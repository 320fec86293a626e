//! Interrogation room
//!
//! Five questions, three answers each. Every answer shows CORRECT!/WRONG!
//! until Enter is pressed again. A perfect run opens the accusation board;
//! anything less starts the questioning over.

use macroquad::prelude::*;

use super::{AccusationScene, DrawContext, Scene, SceneAction};
use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::game::Events;
use crate::input::{Action, FrameInput};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub text: &'static str,
    pub choices: [&'static str; 3],
    pub correct: usize,
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "Where were you at 8 PM last night?",
        choices: ["I was at home alone", "I was at the victim's office", "I was at a restaurant with friends"],
        correct: 0,
    },
    Question {
        text: "What is your relationship with the victim?",
        choices: ["We were business partners", "I barely knew them", "We were close friends"],
        correct: 0,
    },
    Question {
        text: "Why did you have the victim's keys?",
        choices: ["I found them on the street", "The victim gave them to me", "I took them from the office"],
        correct: 0,
    },
    Question {
        text: "What was the argument about yesterday?",
        choices: ["There was no argument", "Money and business disputes", "Personal matters"],
        correct: 0,
    },
    Question {
        text: "Can you explain the evidence found at the scene?",
        choices: ["I was framed by someone", "I accidentally left them there", "Those items were planted"],
        correct: 0,
    },
];

pub struct InterrogationScene {
    questions: Vec<Question>,
    current: usize,
    selected: usize,
    correct_answers: usize,
    /// Set while the answer verdict is on screen
    last_answer: Option<bool>,
    background: &'static str,
}

impl InterrogationScene {
    pub fn new(background: &'static str) -> Self {
        Self::with_questions(background, QUESTIONS.to_vec())
    }

    pub fn with_questions(background: &'static str, questions: Vec<Question>) -> Self {
        Self { questions, current: 0, selected: 0, correct_answers: 0, last_answer: None, background }
    }

    pub fn current_question(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn showing_result(&self) -> Option<bool> {
        self.last_answer
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = 0;
        self.correct_answers = 0;
        self.last_answer = None;
    }

    fn choice_count(&self) -> usize {
        self.questions.get(self.current).map(|q| q.choices.len()).unwrap_or(1)
    }

    fn answer(&mut self) {
        let Some(question) = self.questions.get(self.current) else { return };
        let correct = self.selected == question.correct;
        if correct {
            self.correct_answers += 1;
        }
        self.last_answer = Some(correct);
        self.selected = 0;
    }

    /// Move past the verdict screen
    fn advance(&mut self) -> SceneAction {
        self.last_answer = None;
        self.current += 1;
        if self.current < self.questions.len() {
            return SceneAction::None;
        }

        let total = self.questions.len();
        if self.correct_answers == total {
            println!("All {} questions correct, opening accusation board", total);
            SceneAction::Push(Box::new(AccusationScene::new()))
        } else {
            println!("Only {}/{} correct, restarting interrogation", self.correct_answers, total);
            self.reset();
            SceneAction::None
        }
    }
}

impl Scene for InterrogationScene {
    fn title(&self) -> &str {
        "Interrogation"
    }

    fn handle_input(&mut self, input: &FrameInput, _events: &mut Events) -> SceneAction {
        if input.pressed(Action::Back) {
            return SceneAction::Pop;
        }

        if self.last_answer.is_some() {
            if input.pressed(Action::Confirm) {
                return self.advance();
            }
            return SceneAction::None;
        }

        let n = self.choice_count();
        if input.pressed(Action::MenuUp) {
            self.selected = (self.selected + n - 1) % n;
        }
        if input.pressed(Action::MenuDown) {
            self.selected = (self.selected + 1) % n;
        }
        if input.pressed(Action::Confirm) {
            self.answer();
        }
        SceneAction::None
    }

    fn draw(&self, ctx: &DrawContext) {
        match ctx.assets.texture(self.background) {
            Some(tex) => draw_texture_ex(tex, 0.0, 0.0, WHITE, DrawTextureParams {
                dest_size: Some(vec2(SCENE_WIDTH, SCENE_HEIGHT)),
                ..Default::default()
            }),
            None => draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, Color::new(0.08, 0.08, 0.1, 1.0)),
        }
        draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.55));

        let cx = SCENE_WIDTH * 0.5;
        if let Some(correct) = self.last_answer {
            let (label, color) = if correct { ("CORRECT!", ui::SUCCESS_COLOR) } else { ("WRONG!", ui::DANGER_COLOR) };
            ui::draw_text_centered(label, cx, SCENE_HEIGHT * 0.5 - 20.0, ui::FONT_SIZE_TITLE, color);
            let score = format!("Score: {}/{}", self.correct_answers, self.current + 1);
            ui::draw_text_centered(&score, cx, SCENE_HEIGHT * 0.5 + 60.0, ui::FONT_SIZE_CONTENT, WHITE);
            ui::draw_text_centered("Press ENTER to continue", cx, SCENE_HEIGHT * 0.5 + 100.0, ui::FONT_SIZE_SMALL, ui::TEXT_DIM);
            return;
        }

        let Some(question) = self.questions.get(self.current) else { return };
        let progress = format!("Question {}/{}", self.current + 1, self.questions.len());
        ui::draw_label(&progress, 50.0, 60.0, ui::FONT_SIZE_CONTENT, WHITE);

        let mut y = ui::draw_wrapped(question.text, 50.0, 110.0, SCENE_WIDTH - 100.0, ui::FONT_SIZE_HEADER, WHITE);
        y += 40.0;
        for (i, choice) in question.choices.iter().enumerate() {
            let (prefix, color) = if i == self.selected { ("> ", YELLOW) } else { ("  ", ui::TEXT_COLOR) };
            let line = format!("{}{}. {}", prefix, i + 1, choice);
            y = ui::draw_wrapped(&line, 70.0, y, SCENE_WIDTH - 120.0, ui::FONT_SIZE_CONTENT, color) + 10.0;
        }

        ui::draw_text_centered(
            "UP/DOWN to select, ENTER to confirm, ESC to leave",
            cx,
            SCENE_HEIGHT - 50.0,
            ui::FONT_SIZE_SMALL,
            ui::TEXT_DIM,
        );
    }
}
