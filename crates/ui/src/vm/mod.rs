mod quiz_vm;

pub use quiz_vm::{
    CompletedVm, FeedbackVm, OptionVm, QuestionCardVm, QuizIntent, QuizOutcome, QuizScreen, QuizVm,
};
