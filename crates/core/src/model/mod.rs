mod bank;
mod ids;
mod question;
mod score;

pub use ids::{OptionId, QuestionId};

pub use bank::{BankError, QuestionBank};
pub use question::{AnswerOption, Question, QuestionError};
pub use score::Score;
