use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{CompletedVm, OptionVm, QuestionCardVm, QuizIntent, QuizScreen, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| QuizVm::new(ctx.quiz_service().start_session()));

    rsx! { QuizScreenView { vm } }
}

/// Renders whatever the session currently shows and routes user intents back into it.
#[component]
pub fn QuizScreenView(vm: Signal<QuizVm>) -> Element {
    let mut fatal = use_signal(|| None::<crate::views::ViewError>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let result = vm.write().dispatch(intent);
        if let Err(err) = result {
            fatal.set(Some(err));
        }
    });

    let screen = vm.read().screen();
    let error = fatal().or_else(|| screen.as_ref().err().copied());

    rsx! {
        div { class: "page quiz",
            if let Some(err) = error {
                p { class: "fatal", "{err.message()}" }
            } else {
                match screen {
                    Ok(QuizScreen::Question(card)) => rsx! {
                        h1 { "Quiz App" }
                        QuestionCard { card, on_intent: dispatch }
                    },
                    Ok(QuizScreen::Completed(done)) => rsx! {
                        CompletedCard { done, on_intent: dispatch }
                    },
                    Err(_) => rsx! {},
                }
            }
        }
    }
}

#[component]
fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "{card.title}" }
            }
            div { class: "card-content",
                div { class: "radio-group", role: "radiogroup",
                    for option in card.options.clone() {
                        OptionRow { key: "{option.id}", option: option.clone(), on_intent }
                    }
                }
                if let Some(feedback) = card.feedback.clone() {
                    div { class: "feedback",
                        p { class: feedback.class, "{feedback.verdict}" }
                        p { class: "explanation", "{feedback.explanation}" }
                    }
                }
            }
            div { class: "card-footer",
                if card.revealed {
                    button {
                        class: "btn",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "Next Question"
                    }
                } else {
                    button {
                        class: "btn",
                        id: "quiz-submit",
                        r#type: "button",
                        disabled: !card.can_submit,
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        "Submit Answer"
                    }
                }
            }
        }
        p { class: "quiz-progress", "{card.position_label}" }
    }
}

#[component]
fn OptionRow(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let dom_id = option.dom_id();
    let select = option.select_intent();

    rsx! {
        div { class: "option",
            input {
                r#type: "radio",
                id: "{dom_id}",
                name: "answer",
                value: "{option.id}",
                checked: option.checked,
                disabled: option.disabled,
                onchange: move |_| on_intent.call(select.clone()),
            }
            label { r#for: "{dom_id}", "{option.label}" }
        }
    }
}

#[component]
fn CompletedCard(done: CompletedVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Quiz Completed!" }
            }
            div { class: "card-content",
                p { class: "score", "{done.score_line}" }
                button {
                    class: "btn",
                    id: "quiz-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Restart Quiz"
                }
            }
        }
    }
}
