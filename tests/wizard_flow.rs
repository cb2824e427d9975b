use intake_wizard::WizardError;
use intake_wizard::notify::{MemoryNotifier, NotificationKind};
use intake_wizard::session::WizardSession;
use intake_wizard::terminal::{Outcome, TerminalFrontend};
use intake_wizard::transport::MemoryTransport;
use intake_wizard::validation::validate;
use intake_wizard::value::Value;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Cursor;

const STEP_ONE: [(&str, &str); 4] = [
    ("name", "A"),
    ("email", "a@b.com"),
    ("companyName", "C"),
    ("industry", "I"),
];

#[test]
fn start_reject_fill_advance_retreat() {
    let mut session = WizardSession::intake();
    let mut notifier = MemoryNotifier::new();

    assert!(matches!(
        session.advance(&mut notifier),
        Err(WizardError::IncompleteStep { step: 1, .. })
    ));
    assert_eq!(notifier.kinds(), [NotificationKind::ValidationFailure]);

    for (key, value) in STEP_ONE {
        session.update(key, value);
    }
    assert!(session.advance(&mut notifier).expect("step 1 complete"));
    assert_eq!(session.current_step(), 2);

    assert!(session.retreat());
    assert_eq!(session.current_step(), 1);
    for (key, value) in STEP_ONE {
        assert_eq!(session.form().text(key), Some(value));
    }
}

/// Session with every required field answered, moved to the last step.
fn completed_session(notifier: &mut MemoryNotifier) -> WizardSession {
    let mut session = WizardSession::intake();
    for (key, value) in STEP_ONE {
        session.update(key, value);
    }
    for (key, value) in [
        ("teamSize", "6-10"),
        ("revenue", "30k-100k"),
        ("hasProduct", "entwicklung"),
        ("hasTechTeam", "teilweise"),
        ("timeline", "4-wochen"),
        ("budget", "7k-15k"),
        ("hasWorkedWithAgencies", "ja"),
    ] {
        session.update(key, value);
    }
    session.update("mainReasons", Value::list(["X"]));
    while session.advance(&mut *notifier).expect("all steps complete") {}
    session
}

#[test]
fn terminal_submission_matches_final_form_state() {
    let mut notifier = MemoryNotifier::new();
    let session = completed_session(&mut notifier);

    let mut transport = MemoryTransport::new();
    let record = session.submit(&mut transport, &mut notifier).expect("submit");

    assert_eq!(record.answers(), session.form().values());
    assert_eq!(record.answer("email"), Some(&Value::text("a@b.com")));
    assert_eq!(transport.sent(), &[record]);
}

#[test]
fn hidden_field_keeps_value() {
    let mut session = WizardSession::intake();
    session.update("hasProduct", "ja");
    session.update("productDescription", "X");
    session.update("hasProduct", "nein");
    assert_eq!(session.form().text("productDescription"), Some("X"));
}

#[test]
fn scripted_terminal_run_submits() {
    // Step 1 has 8 prompts; the first "n" is rejected because email is empty.
    let script = [
        "Ada", "", "", "Analytical Engines", "", "", "", "Computing", // step 1, email skipped
        "n",  // rejected
        "e",  // edit again
        "", "ada@example.com", "", "", "", "", "", "", // step 1 second pass
        "n",
        "2", "1", "1", "my product", // step 2, reveal asked in the same pass
        "n",
        "1,4", "", "", "", // step 3
        "n",
        "2", "", "", "1", // step 4
        "n",
        "8", "2", // step 5
        "n",
        "", // step 6
        "s",
    ]
    .join("\n")
        + "\n";

    let mut session = WizardSession::intake();
    let mut transport = MemoryTransport::new();
    let mut log = MemoryNotifier::new();
    let mut frontend = TerminalFrontend::new(Cursor::new(script), Vec::new());

    let outcome = frontend
        .run(&mut session, &mut transport, &mut log)
        .expect("terminal io");

    let record = match outcome {
        Outcome::Submitted(record) => record,
        other => panic!("expected submission, got {other:?}"),
    };
    assert_eq!(record.answer("email"), Some(&Value::text("ada@example.com")));
    assert_eq!(record.answer("hasProduct"), Some(&Value::text("ja")));
    assert_eq!(record.answer("productDescription"), Some(&Value::text("my product")));
    assert_eq!(
        record.answer("mainReasons"),
        Some(&Value::list([
            "Entwicklung von Softwarelösungen (Web, Mobile App usw.)",
            "Automatisierung von Prozessen",
        ]))
    );
    assert_eq!(
        log.kinds(),
        [
            NotificationKind::ValidationFailure,
            NotificationKind::SubmissionSuccess
        ]
    );

    let output = String::from_utf8(frontend.into_output()).expect("utf-8 output");
    assert!(output.contains("Schritt 6 von 6"));
    assert!(output.contains("Fehlende Pflichtfelder: E-Mail-Adresse"));
}

#[test]
fn terminal_retries_after_delivery_failure() {
    let mut session = completed_session(&mut MemoryNotifier::new());
    let mut log = MemoryNotifier::new();
    let mut transport = MemoryTransport::failing_times(1);
    // comment prompt, failed submit, retry
    let script = "\ns\ns\n";
    let mut frontend = TerminalFrontend::new(Cursor::new(script), Vec::new());

    let outcome = frontend
        .run(&mut session, &mut transport, &mut log)
        .expect("terminal io");

    assert!(matches!(outcome, Outcome::Submitted(_)));
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(
        log.kinds(),
        [
            NotificationKind::DeliveryFailure,
            NotificationKind::SubmissionSuccess
        ]
    );
    assert_eq!(session.current_step(), 6);

    let output = String::from_utf8(frontend.into_output()).expect("utf-8 output");
    assert!(output.contains("submission could not be delivered"));
    assert!(output.contains("Übermittlung fehlgeschlagen"));
}

#[test]
fn closed_input_abandons_without_sending() {
    let mut session = WizardSession::intake();
    let mut transport = MemoryTransport::new();
    let mut frontend = TerminalFrontend::new(Cursor::new("Ada\n"), Vec::new());

    let outcome = frontend
        .run(&mut session, &mut transport, &mut MemoryNotifier::new())
        .expect("terminal io");

    assert!(matches!(outcome, Outcome::Abandoned));
    assert!(transport.sent().is_empty());
    assert_eq!(session.form().text("name"), Some("Ada"));
}

#[derive(Debug, Clone)]
enum Op {
    Advance,
    Retreat,
    Set(&'static str, &'static str),
    Clear(&'static str),
    Reason(bool),
}

const KEYS: [&str; 13] = [
    "name",
    "email",
    "companyName",
    "industry",
    "teamSize",
    "revenue",
    "hasProduct",
    "hasTechTeam",
    "timeline",
    "budget",
    "hasWorkedWithAgencies",
    "productDescription",
    "phone",
];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Advance),
        2 => Just(Op::Retreat),
        4 => (prop::sample::select(&KEYS[..]), prop::sample::select(&["x", " ", "ja"][..]))
            .prop_map(|(key, value)| Op::Set(key, value)),
        1 => prop::sample::select(&KEYS[..]).prop_map(Op::Clear),
        1 => any::<bool>().prop_map(Op::Reason),
    ]
}

proptest! {
    #[test]
    fn navigation_stays_in_bounds_and_is_gated(ops in prop::collection::vec(op(), 0..80)) {
        let mut session = WizardSession::intake();
        let mut notifier = MemoryNotifier::new();

        for op in ops {
            match op {
                Op::Advance => {
                    let before = session.clone();
                    let complete = validate(before.current_step(), before.form());
                    match session.advance(&mut notifier) {
                        Ok(moved) => {
                            prop_assert!(complete);
                            prop_assert_eq!(moved, before.current_step() < 6);
                            let expected = before.current_step() + usize::from(moved);
                            prop_assert_eq!(session.current_step(), expected);
                        }
                        Err(_) => {
                            prop_assert!(!complete);
                            prop_assert_eq!(session.current_step(), before.current_step());
                            prop_assert_eq!(session.form(), before.form());
                        }
                    }
                }
                Op::Retreat => {
                    let before = session.current_step();
                    let moved = session.retreat();
                    prop_assert_eq!(moved, before > 1);
                    prop_assert_eq!(session.current_step(), if moved { before - 1 } else { before });
                }
                Op::Set(key, value) => session.update(key, value),
                Op::Clear(key) => session.update(key, ""),
                Op::Reason(included) => session.toggle_multi_select("mainReasons", "X", included),
            }
            prop_assert!((1..=6).contains(&session.current_step()));
        }
    }
}
