//! End-to-end query flow tests.
//!
//! Drives the public API the way the UI does — submit, drain events,
//! inspect state — against `FakeTransport`, with no live network calls.

use std::time::{Duration, Instant};

use creditrust::api::transport::Transport;
use creditrust::api::{AskClient, FakeTransport};
use creditrust::query::QueryState;
use creditrust::ui::{split_answer, App};

fn answered_body(source_count: usize) -> String {
    let sources: Vec<String> = (0..source_count)
        .map(|i| {
            format!(
                r#"{{"text": "Consumer reported duplicate charges #{i}.",
                    "product": "Credit card",
                    "company": "Acme Financial {i}",
                    "complaint_id": "CC-10{i}"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"question": "why fees?",
            "answer": "Summary: fee complaints rose sharply.\n\nMost narratives cite duplicate service charges.\n\nSeveral mention slow refunds.",
            "sources": [{}]}}"#,
        sources.join(",")
    )
}

fn app_with(fake: FakeTransport) -> App {
    let client = AskClient::with_transport("http://localhost:8000", Transport::Fake(fake));
    App::new(client)
}

fn settle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.controller.is_loading() && Instant::now() < deadline {
        app.on_tick();
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn submit_then_answer_flows_to_renderers() {
    let fake = FakeTransport::with_response(&answered_body(8));
    let mut app = app_with(fake.clone());

    for c in "why fees?".chars() {
        app.input.push_char(c);
    }
    app.input.cycle_product(); // Credit card
    app.submit();

    assert!(app.controller.is_loading());
    settle(&mut app);

    // State settled with the full response...
    let response = match app.controller.state() {
        QueryState::Answered(r) => r.clone(),
        other => panic!("expected Answered, got {other:?}"),
    };
    assert_eq!(response.sources.len(), 8);

    // ...the evidence renderer caps at five cards...
    assert_eq!(app.visible_sources().len(), 5);

    // ...and the answer renderer picks the colon section as the summary.
    let sections = split_answer(&response.answer);
    assert_eq!(sections.summary, "Summary: fee complaints rose sharply.");
    assert_eq!(
        sections.detail,
        "Most narratives cite duplicate service charges.\n\nSeveral mention slow refunds."
    );

    // The request carried the selected product filter.
    let recorded = fake.recorded_requests();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].body.contains("\"product\":\"Credit card\""));
    assert_eq!(recorded[0].url, "http://localhost:8000/ask");
}

#[test]
fn backend_failure_surfaces_as_persistent_error_state() {
    let mut app = app_with(FakeTransport::with_status(500, "Internal Server Error"));

    app.input.push_char('q');
    app.submit();
    settle(&mut app);

    match app.controller.state() {
        QueryState::Errored(msg) => assert!(msg.contains("Internal Server Error")),
        other => panic!("expected Errored, got {other:?}"),
    }

    // Error persists until the next submission or clear.
    app.on_tick();
    assert!(matches!(app.controller.state(), QueryState::Errored(_)));

    app.clear_query();
    assert_eq!(*app.controller.state(), QueryState::Idle);
}

#[test]
fn clear_during_flight_discards_the_late_settlement() {
    let fake =
        FakeTransport::with_response(&answered_body(1)).delayed(Duration::from_millis(100));
    let mut app = app_with(fake);

    app.input.push_char('q');
    app.submit();
    app.clear_query();
    assert_eq!(*app.controller.state(), QueryState::Idle);

    // Let the superseded worker finish, then drain: Idle must hold.
    std::thread::sleep(Duration::from_millis(300));
    app.on_tick();
    assert_eq!(*app.controller.state(), QueryState::Idle);
    assert!(app.visible_sources().is_empty());
}

#[test]
fn whitespace_question_never_reaches_the_network() {
    let fake = FakeTransport::with_response(&answered_body(1));
    let mut app = app_with(fake.clone());

    for c in " \n\t ".chars() {
        app.input.push_char(c);
    }
    app.submit();

    assert_eq!(*app.controller.state(), QueryState::Idle);
    assert_eq!(fake.request_count(), 0);
}

#[test]
fn answers_are_replaced_wholesale_between_submissions() {
    let fake = FakeTransport::with_response(&answered_body(3));
    let mut app = app_with(fake.clone());

    app.input.push_char('a');
    app.submit();
    settle(&mut app);
    app.toggle_selected_card();
    assert!(app.is_expanded(0));

    app.input.push_char('b');
    app.submit();
    settle(&mut app);

    // New answer, recreated cards: everything collapsed again.
    assert!(matches!(app.controller.state(), QueryState::Answered(_)));
    assert!(!app.is_expanded(0));
    assert_eq!(fake.request_count(), 2);
}
