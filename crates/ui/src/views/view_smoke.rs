use quiz_core::model::OptionId;

use super::test_harness::setup_quiz_harness;
use crate::vm::QuizIntent;

fn select(id: &str) -> QuizIntent {
    QuizIntent::Select(OptionId::new(id))
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let harness = setup_quiz_harness(Vec::new());
    let html = harness.render();

    assert!(html.contains("Quiz App"), "missing heading in {html}");
    assert!(
        html.contains("Which planet is known as the Red Planet?"),
        "missing question in {html}"
    );
    assert!(html.contains("Venus"), "missing option in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(!html.contains("Correct!"), "unexpected feedback in {html}");
}

#[test]
fn quiz_view_smoke_renders_reveal() {
    let harness = setup_quiz_harness(vec![select("mars"), QuizIntent::Submit]);
    let html = harness.render();

    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(
        html.contains("Iron oxide gives Mars its colour."),
        "missing explanation in {html}"
    );
    assert!(html.contains("Next Question"), "missing next button in {html}");
    assert!(!html.contains("Submit Answer"), "submit still shown in {html}");
}

#[test]
fn quiz_view_smoke_renders_incorrect_reveal_on_second_question() {
    let harness = setup_quiz_harness(vec![
        select("mars"),
        QuizIntent::Submit,
        QuizIntent::Next,
        select("six"),
        QuizIntent::Submit,
    ]);
    let html = harness.render();

    assert!(html.contains("Incorrect"), "missing verdict in {html}");
    assert!(html.contains("Question 2 of 2"), "missing progress in {html}");
}

#[test]
fn quiz_view_smoke_renders_completion() {
    let harness = setup_quiz_harness(vec![
        select("mars"),
        QuizIntent::Submit,
        QuizIntent::Next,
        select("six"),
        QuizIntent::Submit,
        QuizIntent::Next,
    ]);
    let html = harness.render();

    assert!(html.contains("Quiz Completed!"), "missing title in {html}");
    assert!(html.contains("Your Score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");
    assert!(!html.contains("Question 2 of 2"), "stale progress in {html}");
}
