mod plan;
mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use plan::{MIXED_PER_TOPIC, QuizPlan, QuizPlanBuilder, SESSION_SIZE};
pub use progress::QuizProgress;
pub use session::{AnswerOutcome, QuizSession, QuizState};
pub use view::{AdvanceOutcome, AnswerFeedback, MissedQuestion, QuestionView, ResultView};
pub use workflow::QuizLoopService;
