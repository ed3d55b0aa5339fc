use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuizService;
use storage::{parse_records, records_into_bank};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizScreenView, QuizView};
use crate::vm::{QuizIntent, QuizVm};

pub const TWO_QUESTIONS: &str = r#"[
    { "id": "q1", "label": "Which planet is known as the Red Planet?", "answer": "mars",
      "explanation": "Iron oxide gives Mars its colour.",
      "options": [{ "id": "venus", "label": "Venus" }, { "id": "mars", "label": "Mars" }] },
    { "id": "q2", "label": "How many legs does a spider have?", "answer": "eight",
      "explanation": "Spiders are arachnids with eight legs.",
      "options": [{ "id": "six", "label": "Six" }, { "id": "eight", "label": "Eight" }] }
]"#;

struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    /// Intents applied before the first render; empty renders through `QuizView`.
    script: Vec<QuizIntent>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let vm = use_signal(|| {
        let mut vm = QuizVm::new(ctx.quiz_service().start_session());
        for intent in props.script.clone() {
            vm.dispatch(intent).expect("scripted intent");
        }
        vm
    });

    if props.script.is_empty() {
        rsx! { QuizView {} }
    } else {
        rsx! { QuizScreenView { vm } }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(script: Vec<QuizIntent>) -> ViewHarness {
    let records = parse_records(TWO_QUESTIONS).expect("parse records");
    let bank = records_into_bank(records).expect("valid bank");
    let app = Arc::new(TestApp {
        quiz_service: Arc::new(QuizService::new(bank)),
    });

    let mut dom = VirtualDom::new_with_props(QuizHarness, HarnessProps { app, script });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    ViewHarness { dom }
}
