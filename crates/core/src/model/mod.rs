mod bank;
mod builtin;
mod question;
mod score;
mod tabs;
mod theme;
mod topic;

pub use bank::{BankError, QuestionBank};
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use score::{Percent, Tier};
pub use tabs::{TabError, TabSet};
pub use theme::{Theme, UnknownTheme};
pub use topic::{Topic, TopicSelector};
