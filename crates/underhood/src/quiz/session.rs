//! Quiz state machine: shuffled question queue, scoring, win/lose verdict.

use crate::core::rng::Rng;
use crate::quiz::region::RegionId;

/// Correct answers needed (out of six) to win a round.
pub const WIN_THRESHOLD: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Neutral,
    Correct,
    Incorrect,
}

/// One line of feedback shown in the bar at the bottom of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Neutral,
        }
    }
}

/// Result of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// The region the player clicked.
    pub region: RegionId,
    pub correct: bool,
}

/// A single play-through of the quiz. Questions are drawn from a shuffled
/// queue; each region is asked exactly once per round.
pub struct QuizSession {
    roster: Vec<RegionId>,
    queue: Vec<RegionId>,
    rng: Rng,
    current: Option<RegionId>,
    correct: u32,
    answered: u32,
    state: GameState,
    feedback: Feedback,
}

impl QuizSession {
    /// Start a round over the given regions. An empty roster ends
    /// immediately (zero correct can never reach the threshold).
    pub fn new(roster: Vec<RegionId>, seed: u64) -> Self {
        let mut session = Self {
            roster,
            queue: Vec::new(),
            rng: Rng::new(seed),
            current: None,
            correct: 0,
            answered: 0,
            state: GameState::Playing,
            feedback: Feedback::neutral("Identify the car components!"),
        };
        session.begin_round();
        session
    }

    fn begin_round(&mut self) {
        self.queue = self.roster.clone();
        self.rng.shuffle(&mut self.queue);
        self.correct = 0;
        self.answered = 0;
        self.state = GameState::Playing;
        self.feedback = Feedback::neutral("Identify the car components!");
        self.advance_question();
    }

    /// Draw the next question, or settle the verdict when the queue is empty.
    fn advance_question(&mut self) {
        match self.queue.pop() {
            Some(next) => {
                self.current = Some(next);
            }
            None => {
                self.current = None;
                if self.correct >= WIN_THRESHOLD {
                    self.state = GameState::Won;
                    self.feedback = Feedback {
                        text: format!(
                            "You win! Score: {}/{}",
                            self.correct, self.answered
                        ),
                        kind: FeedbackKind::Correct,
                    };
                } else {
                    self.state = GameState::Lost;
                    self.feedback = Feedback {
                        text: format!(
                            "Try again! Score: {}/{}",
                            self.correct, self.answered
                        ),
                        kind: FeedbackKind::Incorrect,
                    };
                }
            }
        }
    }

    /// Grade a clicked region against the current question and move on.
    ///
    /// Returns None when not playing or when no question is pending, which
    /// makes stray clicks after the verdict harmless.
    pub fn submit_answer(&mut self, clicked: RegionId) -> Option<AnswerOutcome> {
        if self.state != GameState::Playing {
            return None;
        }
        let target = self.current?;
        let correct = clicked == target;

        self.answered += 1;
        if correct {
            self.correct += 1;
            self.feedback = Feedback {
                text: format!("Correct! That was the {}.", target.name()),
                kind: FeedbackKind::Correct,
            };
        } else {
            // name the component that was actually asked for
            self.feedback = Feedback {
                text: format!("Wrong! That was the {}.", target.name()),
                kind: FeedbackKind::Incorrect,
            };
        }

        self.advance_question();
        Some(AnswerOutcome {
            region: clicked,
            correct,
        })
    }

    /// Restart with a fresh shuffle. Only honored once the round is over.
    pub fn restart(&mut self) -> bool {
        if self.state == GameState::Playing {
            return false;
        }
        self.begin_round();
        true
    }

    /// The region currently being asked about.
    pub fn current_target(&self) -> Option<RegionId> {
        self.current
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Prompt line for the current question.
    pub fn prompt(&self) -> String {
        match self.current {
            Some(target) => format!("Click on: {}", target.name()),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_roster() -> Vec<RegionId> {
        RegionId::ALL.to_vec()
    }

    #[test]
    fn starts_playing_with_a_question() {
        let session = QuizSession::new(full_roster(), 7);
        assert_eq!(session.state(), GameState::Playing);
        assert!(session.current_target().is_some());
        assert_eq!(session.feedback().kind, FeedbackKind::Neutral);
    }

    #[test]
    fn each_region_asked_exactly_once() {
        let mut session = QuizSession::new(full_roster(), 42);
        let mut asked = Vec::new();
        while let Some(target) = session.current_target() {
            asked.push(target);
            session.submit_answer(target);
        }
        asked.sort_by_key(|id| id.code());
        let mut expected = full_roster();
        expected.sort_by_key(|id| id.code());
        assert_eq!(asked, expected);
    }

    #[test]
    fn all_correct_wins() {
        let mut session = QuizSession::new(full_roster(), 1);
        while let Some(target) = session.current_target() {
            let outcome = session.submit_answer(target).unwrap();
            assert!(outcome.correct);
        }
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.correct(), 6);
        assert!(session.feedback().text.contains("6/6"));
    }

    #[test]
    fn four_of_six_is_the_threshold() {
        // two wrong answers still win; three do not
        let mut session = QuizSession::new(full_roster(), 9);
        for i in 0..6 {
            let target = session.current_target().unwrap();
            if i < 2 {
                let wrong = RegionId::ALL
                    .iter()
                    .copied()
                    .find(|&id| id != target)
                    .unwrap();
                session.submit_answer(wrong);
            } else {
                session.submit_answer(target);
            }
        }
        assert_eq!(session.state(), GameState::Won);

        let mut session = QuizSession::new(full_roster(), 9);
        for i in 0..6 {
            let target = session.current_target().unwrap();
            if i < 3 {
                let wrong = RegionId::ALL
                    .iter()
                    .copied()
                    .find(|&id| id != target)
                    .unwrap();
                session.submit_answer(wrong);
            } else {
                session.submit_answer(target);
            }
        }
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.correct(), 3);
    }

    #[test]
    fn four_correct_then_two_wrong_wins_with_four_of_six() {
        let mut session = QuizSession::new(full_roster(), 21);
        for i in 0..6 {
            let target = session.current_target().unwrap();
            if i < 4 {
                session.submit_answer(target);
            } else {
                let wrong = RegionId::ALL
                    .iter()
                    .copied()
                    .find(|&id| id != target)
                    .unwrap();
                session.submit_answer(wrong);
            }
        }
        assert_eq!(session.state(), GameState::Won);
        assert!(session.feedback().text.contains("4/6"));
    }

    #[test]
    fn six_wrong_loses_with_zero_of_six() {
        let mut session = QuizSession::new(full_roster(), 13);
        while let Some(target) = session.current_target() {
            let wrong = RegionId::ALL
                .iter()
                .copied()
                .find(|&id| id != target)
                .unwrap();
            let outcome = session.submit_answer(wrong).unwrap();
            assert!(!outcome.correct);
        }
        assert_eq!(session.state(), GameState::Lost);
        assert!(session.feedback().text.contains("0/6"));
    }

    #[test]
    fn wrong_answer_names_the_asked_component() {
        let mut session = QuizSession::new(full_roster(), 5);
        let target = session.current_target().unwrap();
        let wrong = RegionId::ALL
            .iter()
            .copied()
            .find(|&id| id != target)
            .unwrap();
        session.submit_answer(wrong);
        assert!(session.feedback().text.contains(target.name()));
        assert!(!session.feedback().text.contains(wrong.name()) || wrong.name() == target.name());
    }

    #[test]
    fn submissions_after_verdict_are_ignored() {
        let mut session = QuizSession::new(full_roster(), 3);
        while let Some(target) = session.current_target() {
            session.submit_answer(target);
        }
        let answered = session.answered();
        assert!(session.submit_answer(RegionId::Battery).is_none());
        assert_eq!(session.answered(), answered);
    }

    #[test]
    fn restart_only_from_terminal_state() {
        let mut session = QuizSession::new(full_roster(), 11);
        assert!(!session.restart());

        while let Some(target) = session.current_target() {
            session.submit_answer(target);
        }
        assert!(session.restart());
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.answered(), 0);
        assert!(session.current_target().is_some());
    }

    #[test]
    fn empty_roster_loses_immediately() {
        let session = QuizSession::new(Vec::new(), 1);
        assert_eq!(session.state(), GameState::Lost);
        assert!(session.current_target().is_none());
        assert!(session.feedback().text.contains("0/0"));
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let order = |seed| {
            let mut session = QuizSession::new(full_roster(), seed);
            let mut asked = Vec::new();
            while let Some(t) = session.current_target() {
                asked.push(t);
                session.submit_answer(t);
            }
            asked
        };
        // same seed, same order
        assert_eq!(order(1), order(1));
        assert_eq!(order(987654321), order(987654321));
    }
}
