//! Headless integration tests for the deck
//!
//! These tests drive a deck through the surface protocol exactly as a UI
//! would: send `SurfaceEvent`s, drain the emitted `DeckMessage`s, and
//! assert on both the message stream and the resulting state. No display
//! surface is involved anywhere.

use tokio::sync::mpsc;

use pomodeck_core::{Deck, DeckMessage, NotifyLevel, SurfaceEvent, TimerMode};

fn drain(rx: &mut mpsc::Receiver<DeckMessage>) -> Vec<DeckMessage> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        out.push(msg);
    }
    out
}

/// Select each mode in turn and verify the fixed duration loads and the
/// countdown stops, with exactly one mode indicated per snapshot.
#[tokio::test]
async fn mode_selection_loads_fixed_durations() {
    let (mut deck, mut rx) = Deck::new();
    deck.start().await.unwrap();
    drain(&mut rx);

    let cases = [
        (TimerMode::ShortBreak, "05"),
        (TimerMode::LongBreak, "15"),
        (TimerMode::Pomodoro, "25"),
    ];

    for (mode, minutes) in cases {
        // Start the countdown first so set_mode has something to stop
        deck.handle_event(SurfaceEvent::StartPauseToggled)
            .await
            .unwrap();
        deck.handle_event(SurfaceEvent::ModeSelected { mode })
            .await
            .unwrap();

        let msgs = drain(&mut rx);
        assert!(msgs.contains(&DeckMessage::ModeChanged { mode }));
        assert!(msgs.contains(&DeckMessage::ClockChanged {
            minutes: minutes.to_string(),
            seconds: "00".to_string()
        }));
        assert!(msgs.contains(&DeckMessage::RunningChanged { running: false }));
        assert!(!deck.timer().is_running());
    }
}

/// Start the timer, let one tick elapse, and verify a single decrement.
#[tokio::test]
async fn running_timer_counts_down_by_one_per_tick() {
    let (mut deck, mut rx) = Deck::new();

    deck.handle_event(SurfaceEvent::StartPauseToggled)
        .await
        .unwrap();
    deck.handle_event(SurfaceEvent::Tick).await.unwrap();

    let msgs = drain(&mut rx);
    assert_eq!(msgs[0], DeckMessage::RunningChanged { running: true });
    assert_eq!(
        msgs[1],
        DeckMessage::ClockChanged {
            minutes: "24".to_string(),
            seconds: "59".to_string()
        }
    );
    assert_eq!(deck.timer().remaining_secs(), 1499);
    assert!(deck.timer().is_running());
}

/// Toggling twice with no tick in between restores the original state.
#[tokio::test]
async fn double_toggle_is_a_no_op() {
    let (mut deck, mut rx) = Deck::new();
    let remaining_before = deck.timer().remaining_secs();

    deck.handle_event(SurfaceEvent::StartPauseToggled)
        .await
        .unwrap();
    deck.handle_event(SurfaceEvent::StartPauseToggled)
        .await
        .unwrap();

    assert_eq!(
        drain(&mut rx),
        vec![
            DeckMessage::RunningChanged { running: true },
            DeckMessage::RunningChanged { running: false },
        ]
    );
    assert!(!deck.timer().is_running());
    assert_eq!(deck.timer().remaining_secs(), remaining_before);
}

/// Ticks while paused must not move the clock.
#[tokio::test]
async fn paused_timer_ignores_ticks() {
    let (mut deck, mut rx) = Deck::new();

    for _ in 0..5 {
        deck.handle_event(SurfaceEvent::Tick).await.unwrap();
    }

    assert!(drain(&mut rx).is_empty());
    assert_eq!(deck.timer().remaining_secs(), 1500);
}

/// Run a short break all the way down. Completion must notify the user,
/// auto-advance to pomodoro, reload 25:00, and stop the countdown.
#[tokio::test]
async fn short_break_completion_advances_to_pomodoro() {
    let (mut deck, mut rx) = Deck::new();

    deck.handle_event(SurfaceEvent::ModeSelected {
        mode: TimerMode::ShortBreak,
    })
    .await
    .unwrap();
    deck.handle_event(SurfaceEvent::StartPauseToggled)
        .await
        .unwrap();
    drain(&mut rx);

    // 300 ticks count down to 00:00; the tick after that completes
    let mut completion_msgs = Vec::new();
    for _ in 0..301 {
        deck.handle_event(SurfaceEvent::Tick).await.unwrap();
        completion_msgs = drain(&mut rx);
    }

    assert!(matches!(
        &completion_msgs[0],
        DeckMessage::Notify {
            level: NotifyLevel::Info,
            ..
        }
    ));
    assert!(completion_msgs.contains(&DeckMessage::ModeChanged {
        mode: TimerMode::Pomodoro
    }));
    assert!(completion_msgs.contains(&DeckMessage::ClockChanged {
        minutes: "25".to_string(),
        seconds: "00".to_string()
    }));
    assert!(completion_msgs.contains(&DeckMessage::RunningChanged { running: false }));

    assert_eq!(deck.timer().mode(), TimerMode::Pomodoro);
    assert_eq!(deck.timer().remaining_secs(), 1500);
    assert!(!deck.timer().is_running());
}

/// A finished pomodoro flows into a short break.
#[tokio::test]
async fn pomodoro_completion_advances_to_short_break() {
    let (mut deck, mut rx) = Deck::new();

    deck.handle_event(SurfaceEvent::StartPauseToggled)
        .await
        .unwrap();

    let mut last = Vec::new();
    for _ in 0..1501 {
        deck.handle_event(SurfaceEvent::Tick).await.unwrap();
        last = drain(&mut rx);
    }

    assert!(last.contains(&DeckMessage::ModeChanged {
        mode: TimerMode::ShortBreak
    }));
    assert_eq!(deck.timer().remaining_secs(), 300);
}

/// Reset reloads the current mode's duration without changing modes.
#[tokio::test]
async fn reset_reloads_current_mode() {
    let (mut deck, mut rx) = Deck::new();

    deck.handle_event(SurfaceEvent::ModeSelected {
        mode: TimerMode::LongBreak,
    })
    .await
    .unwrap();
    deck.handle_event(SurfaceEvent::StartPauseToggled)
        .await
        .unwrap();
    deck.handle_event(SurfaceEvent::Tick).await.unwrap();
    drain(&mut rx);

    deck.handle_event(SurfaceEvent::ResetPressed).await.unwrap();

    let msgs = drain(&mut rx);
    assert!(msgs.contains(&DeckMessage::ModeChanged {
        mode: TimerMode::LongBreak
    }));
    assert!(msgs.contains(&DeckMessage::ClockChanged {
        minutes: "15".to_string(),
        seconds: "00".to_string()
    }));
    assert_eq!(deck.timer().remaining_secs(), 900);
    assert!(!deck.timer().is_running());
}

/// Full task round trip: add, observe empty-state flips, delete the only
/// task and watch the placeholder come back.
#[tokio::test]
async fn task_add_and_delete_drive_empty_state() {
    let (mut deck, mut rx) = Deck::new();
    deck.start().await.unwrap();

    let start_msgs = drain(&mut rx);
    assert!(start_msgs.contains(&DeckMessage::EmptyState { empty: true }));

    deck.handle_event(SurfaceEvent::TaskSubmitted {
        text: "Write report".to_string(),
    })
    .await
    .unwrap();

    let msgs = drain(&mut rx);
    let task = match &msgs[0] {
        DeckMessage::TaskAdded { task } => task.clone(),
        other => panic!("expected TaskAdded, got {other:?}"),
    };
    assert_eq!(task.text, "Write report");
    assert!(msgs.contains(&DeckMessage::EmptyState { empty: false }));

    deck.handle_event(SurfaceEvent::TaskDeleted { id: task.id })
        .await
        .unwrap();

    let msgs = drain(&mut rx);
    assert_eq!(msgs[0], DeckMessage::TaskRemoved { id: task.id });
    assert_eq!(msgs[1], DeckMessage::EmptyState { empty: true });
    assert!(deck.tasks().is_empty());
}

/// The character counter tracks the entry field and resets after an add.
#[tokio::test]
async fn char_counter_follows_input_and_resets_on_add() {
    let (mut deck, mut rx) = Deck::new();

    deck.handle_event(SurfaceEvent::InputChanged {
        text: "abc".to_string(),
    })
    .await
    .unwrap();
    assert_eq!(drain(&mut rx), vec![DeckMessage::CharCount { count: 3 }]);

    deck.handle_event(SurfaceEvent::TaskSubmitted {
        text: "abc".to_string(),
    })
    .await
    .unwrap();

    let msgs = drain(&mut rx);
    assert!(msgs.contains(&DeckMessage::CharCount { count: 0 }));
}

/// Quit request flows through to the surface.
#[tokio::test]
async fn quit_request_emits_quit() {
    let (mut deck, mut rx) = Deck::new();

    deck.handle_event(SurfaceEvent::QuitRequested).await.unwrap();
    assert_eq!(drain(&mut rx), vec![DeckMessage::Quit]);
}
