use super::*;
use crate::audio::mock::MockBackend;
use crate::error::PlaybackError;
use crate::playlist::Playlist;

fn playlist(names: &[&str]) -> Playlist {
    Playlist::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
}

fn transport(names: &[&str]) -> Transport<MockBackend> {
    Transport::new(MockBackend::default(), playlist(names))
}

#[test]
fn starts_idle_with_nothing_open() {
    let t = transport(&["a.mp3", "b.mp3"]);
    assert_eq!(t.state(), TransportState::Idle);
    assert_eq!(t.current(), 0);
    assert!(!t.has_handle());
    assert_eq!(t.loop_mode(), LoopMode::LoopAll);
}

#[test]
fn play_opens_and_starts_the_entry() {
    let mut t = transport(&["a.mp3", "b.mp3"]);
    let started = t.play(1).unwrap();
    assert_eq!(started.index, 1);
    assert_eq!(started.path, std::path::PathBuf::from("b.mp3"));
    assert!(started.skipped.is_empty());
    assert_eq!(t.state(), TransportState::Playing);
    assert_eq!(t.backend().opened(), vec!["b.mp3".to_string()]);
    assert_eq!(t.backend().state.borrow().calls, vec!["start"]);
}

#[test]
fn next_and_prev_wrap_in_natural_order() {
    let mut t = transport(&["a", "b", "c"]);
    t.play(0).unwrap();
    assert_eq!(t.next().unwrap().index, 1);
    assert_eq!(t.next().unwrap().index, 2);
    assert_eq!(t.next().unwrap().index, 0);
    assert_eq!(t.prev().unwrap().index, 2);
}

#[test]
fn next_len_times_returns_to_start_when_shuffled() {
    let mut t = transport(&["a", "b", "c", "d", "e", "f", "g"]);
    t.play(3).unwrap();
    assert!(t.toggle_shuffle());
    for _ in 0..7 {
        t.next().unwrap();
    }
    assert_eq!(t.current(), 3);
}

#[test]
fn single_entry_next_is_always_the_same_index() {
    let mut t = transport(&["only.mp3"]);
    t.play(0).unwrap();
    for _ in 0..4 {
        assert_eq!(t.next().unwrap().index, 0);
        assert_eq!(t.prev().unwrap().index, 0);
    }
    t.toggle_shuffle();
    assert_eq!(t.next().unwrap().index, 0);
}

#[test]
fn at_most_one_handle_is_ever_open() {
    let mut t = transport(&["a", "b", "c"]);
    t.play(0).unwrap();
    t.next().unwrap();
    t.prev().unwrap();
    t.toggle_pause().unwrap();
    t.next().unwrap();
    t.play(2).unwrap();
    assert_eq!(t.backend().live(), 1);
    t.stop_all();
    assert_eq!(t.backend().live(), 0);
    t.prev().unwrap();
    assert_eq!(t.backend().live(), 1);
    assert_eq!(t.backend().state.borrow().max_live, 1);
}

#[test]
fn dropping_the_transport_releases_the_handle() {
    let backend = MockBackend::default();
    let state = std::rc::Rc::clone(&backend.state);
    let mut t = Transport::new(backend, playlist(&["a", "b"]));
    t.play(0).unwrap();
    assert_eq!(state.borrow().live, 1);
    drop(t);
    assert_eq!(state.borrow().live, 0);
}

#[test]
fn pause_and_resume_keep_the_same_handle() {
    let mut t = transport(&["a", "b"]);
    t.play(0).unwrap();

    assert!(matches!(t.toggle_pause().unwrap(), PauseToggle::Paused));
    assert_eq!(t.state(), TransportState::Paused);
    assert!(!t.poll_finished());

    assert!(matches!(t.toggle_pause().unwrap(), PauseToggle::Resumed));
    assert_eq!(t.state(), TransportState::Playing);

    assert_eq!(t.backend().opened().len(), 1);
    assert_eq!(t.backend().state.borrow().calls, vec!["start", "stop", "start"]);
}

#[test]
fn toggle_pause_when_stopped_starts_the_current_entry() {
    let mut t = transport(&["a", "b"]);
    t.play(1).unwrap();
    t.stop_all();
    assert_eq!(t.state(), TransportState::Stopped);
    assert!(!t.has_handle());

    match t.toggle_pause().unwrap() {
        PauseToggle::Started(s) => assert_eq!(s.index, 1),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(t.state(), TransportState::Playing);
}

#[test]
fn failing_entries_are_skipped_forward() {
    let backend = MockBackend::failing(&["b", "c"]);
    let mut t = Transport::new(backend, playlist(&["a", "b", "c", "d"]));
    t.play(0).unwrap();

    let started = t.next().unwrap();
    assert_eq!(started.index, 3);
    let skipped: Vec<usize> = started.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1, 2]);
    assert!(matches!(
        started.skipped[0].error,
        PlaybackError::Decode { .. }
    ));
    assert_eq!(t.backend().live(), 1);
}

#[test]
fn all_failing_entries_end_idle_with_nothing_open() {
    let backend = MockBackend::failing(&["a", "b", "c"]);
    let mut t = Transport::new(backend, playlist(&["a", "b", "c"]));

    let err = t.play(1).unwrap_err();
    let PlaybackError::NothingPlayable { skipped } = &err else {
        panic!("unexpected {err:?}");
    };
    let skipped: Vec<usize> = skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1, 2, 0]);
    assert_eq!(t.state(), TransportState::Idle);
    assert!(!t.has_handle());
    // One attempt per entry, no more.
    assert_eq!(t.backend().opened(), vec!["b", "c", "a"]);
}

#[test]
fn try_play_does_not_skip() {
    let backend = MockBackend::failing(&["b"]);
    let mut t = Transport::new(backend, playlist(&["a", "b"]));
    t.play(0).unwrap();
    assert!(t.try_play(1).is_err());
    assert_eq!(t.state(), TransportState::Idle);
    assert_eq!(t.current(), 1);
    assert!(!t.has_handle());

    assert!(matches!(
        t.try_play(9),
        Err(PlaybackError::NoSuchEntry(9))
    ));
}

#[test]
fn poll_finished_only_when_playing_sound_ran_out() {
    let mut t = transport(&["a", "b"]);
    assert!(!t.poll_finished());
    t.play(0).unwrap();
    assert!(!t.poll_finished());
    t.backend().finish_current();
    assert!(t.poll_finished());
}

#[test]
fn loop_all_wraps_after_last_track() {
    let mut t = transport(&["a", "b"]);
    t.play(1).unwrap();
    t.backend().finish_current();
    match t.advance_after_finish().unwrap() {
        Advance::Started(s) => assert_eq!(s.index, 0),
        Advance::EndOfPlaylist { .. } => panic!("loop-all never ends"),
    }
}

#[test]
fn no_loop_stops_after_last_track_of_the_order() {
    let mut t = transport(&["a", "b"]);
    t.set_loop_mode(LoopMode::NoLoop);
    t.play(0).unwrap();

    assert!(matches!(t.advance_after_finish().unwrap(), Advance::Started(_)));
    assert_eq!(t.current(), 1);

    assert!(matches!(
        t.advance_after_finish().unwrap(),
        Advance::EndOfPlaylist { skipped } if skipped.is_empty()
    ));
    assert_eq!(t.state(), TransportState::Stopped);
    assert!(!t.has_handle());
}

#[test]
fn no_loop_ends_when_the_last_track_cannot_be_played() {
    let backend = MockBackend::failing(&["c"]);
    let mut t = Transport::new(backend, playlist(&["a", "b", "c"]));
    t.set_loop_mode(LoopMode::NoLoop);
    t.play(0).unwrap();

    t.backend().finish_current();
    assert!(matches!(
        t.advance_after_finish().unwrap(),
        Advance::Started(Started { index: 1, .. })
    ));

    t.backend().finish_current();
    match t.advance_after_finish().unwrap() {
        Advance::EndOfPlaylist { skipped } => {
            let skipped: Vec<usize> = skipped.iter().map(|s| s.index).collect();
            assert_eq!(skipped, vec![2]);
        }
        Advance::Started(s) => panic!("wrapped around to {}", s.index),
    }
    assert_eq!(t.state(), TransportState::Stopped);
    assert!(!t.has_handle());
    assert_eq!(t.backend().opened(), vec!["a", "b", "c"]);
}

#[test]
fn no_loop_skips_broken_entries_before_the_last_one() {
    let backend = MockBackend::failing(&["b"]);
    let mut t = Transport::new(backend, playlist(&["a", "b", "c"]));
    t.set_loop_mode(LoopMode::NoLoop);
    t.play(0).unwrap();

    t.backend().finish_current();
    match t.advance_after_finish().unwrap() {
        Advance::Started(s) => {
            assert_eq!(s.index, 2);
            assert_eq!(s.skipped.len(), 1);
        }
        Advance::EndOfPlaylist { .. } => panic!("ended before the last track"),
    }
}

#[test]
fn prev_skips_broken_entries_backwards() {
    let backend = MockBackend::failing(&["b"]);
    let mut t = Transport::new(backend, playlist(&["a", "b", "c"]));
    t.play(2).unwrap();

    let started = t.prev().unwrap();
    assert_eq!(started.index, 0);
    let skipped: Vec<usize> = started.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1]);

    assert_eq!(t.prev().unwrap().index, 2);
    assert_eq!(t.prev().unwrap().index, 0);
}

#[test]
fn play_toward_backward_walks_the_shuffled_order() {
    let backend = MockBackend::failing(&["b", "c", "d"]);
    let mut t = Transport::new(backend, playlist(&["a", "b", "c", "d", "e"]));
    t.toggle_shuffle();
    let start = t.order().last();

    let started = t.play_toward(start, Direction::Backward).unwrap();
    let mut expected = start;
    for s in &started.skipped {
        assert_eq!(s.index, expected);
        expected = t.order().prev_before(expected);
    }
    assert_eq!(started.index, expected);
    assert!(started.index == 0 || started.index == 4);
}

#[test]
fn loop_one_replays_the_current_track() {
    let mut t = transport(&["a", "b"]);
    t.set_loop_mode(LoopMode::LoopOne);
    t.play(1).unwrap();
    t.advance_after_finish().unwrap();
    assert_eq!(t.current(), 1);
    assert_eq!(t.backend().opened(), vec!["b", "b"]);
}

#[test]
fn cycle_loop_mode_cycles_three_states() {
    let mut t = transport(&["a"]);
    assert_eq!(t.cycle_loop_mode(), LoopMode::LoopOne);
    assert_eq!(t.cycle_loop_mode(), LoopMode::NoLoop);
    assert_eq!(t.cycle_loop_mode(), LoopMode::LoopAll);
}

#[test]
fn loop_mode_from_setting() {
    use crate::config::LoopModeSetting;
    assert_eq!(LoopMode::from(LoopModeSetting::NoLoop), LoopMode::NoLoop);
    assert_eq!(LoopMode::from(LoopModeSetting::LoopAll), LoopMode::LoopAll);
    assert_eq!(LoopMode::from(LoopModeSetting::LoopOne), LoopMode::LoopOne);
}
