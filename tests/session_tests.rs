//! Session Integration Tests
//!
//! Drives a `Session` through load, parameter and patch-query sequences
//! against a scripted engine double.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use approx::assert_relative_eq;
use declick_session::{
    Audio, ChannelType, DeclickError, Patch, Result, Session, SessionConfig, Settings,
};

/// Engine double with a fixed answer per channel and a shared call counter
struct ScriptedAudio {
    label: &'static str,
    settings: Settings,
    left: Vec<Patch>,
    fail_right: bool,
    patch_calls: Rc<Cell<usize>>,
}

impl ScriptedAudio {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            settings: Settings::default(),
            left: Vec::new(),
            fail_right: false,
            patch_calls: Rc::new(Cell::new(0)),
        }
    }

    fn preset(mut self, threshold: f64, max_length: i32) -> Self {
        self.settings = Settings::new(threshold, max_length);
        self
    }

    fn left(mut self, patches: Vec<Patch>) -> Self {
        self.left = patches;
        self
    }

    fn failing_right(mut self) -> Self {
        self.fail_right = true;
        self
    }
}

impl Audio for ScriptedAudio {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn patches(&self, channel: ChannelType) -> Result<Vec<Patch>> {
        self.patch_calls.set(self.patch_calls.get() + 1);
        match channel {
            ChannelType::Left => Ok(self.left.clone()),
            ChannelType::Right if self.fail_right => Err(DeclickError::Engine {
                reason: format!("{}: right channel analysis failed", self.label),
            }),
            ChannelType::Right => Ok(Vec::new()),
        }
    }
}

fn patch(start: usize, length: usize) -> Patch {
    Patch {
        start_position: start,
        length,
        error_level_at_detection: 20.0,
    }
}

// === Defaults Without Audio ===

#[test]
fn test_empty_session_ignores_writes() {
    let mut session = Session::new();

    for value in [0.0, -1.0, 1e9] {
        session.set_threshold(value);
        assert_relative_eq!(session.threshold(), 10.0);
    }
    for value in [0, -5, i32::MAX] {
        session.set_max_length(value);
        assert_eq!(session.max_length(), 250);
    }
    assert!(session.active_audio().is_none());
}

#[test]
fn test_reads_are_stable() {
    let mut session = Session::new();
    assert_eq!(session.threshold(), session.threshold());

    session.load_audio(ScriptedAudio::new("x"));
    session.set_threshold(3.25);
    assert_eq!(session.threshold(), session.threshold());
    assert_eq!(session.max_length(), session.max_length());
}

// === Loading ===

#[test]
fn test_absent_candidate_keeps_current_audio() {
    let notified = Rc::new(Cell::new(0));
    let mut session = Session::new();
    let counter = Rc::clone(&notified);
    session.subscribe(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    session.load_audio(ScriptedAudio::new("a").left(vec![patch(1, 2)]));
    assert_eq!(notified.get(), 1);

    session.set_active_audio(None);

    assert_eq!(notified.get(), 1);
    let patches = session.patches(ChannelType::Left).unwrap().unwrap();
    assert_eq!(patches, vec![patch(1, 2)]);
}

#[test]
fn test_load_overrides_preset_settings() {
    let mut session = Session::new();
    session.set_active_audio(Some(Box::new(ScriptedAudio::new("a").preset(5.0, 100))));

    assert_relative_eq!(session.threshold(), 10.0);
    assert_eq!(session.max_length(), 250);
}

#[test]
fn test_each_load_notifies_once_with_new_audio() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new();
    let log = Rc::clone(&seen);
    session.subscribe(move |event| {
        let left = event.audio.patches(ChannelType::Left)?;
        log.borrow_mut().push((event.generation, left.len()));
        Ok(())
    });

    session.load_audio(ScriptedAudio::new("a").left(vec![patch(1, 1)]));
    session.load_audio(ScriptedAudio::new("b").left(vec![patch(1, 1), patch(9, 3)]));

    assert_eq!(*seen.borrow(), vec![(1, 1), (2, 2)]);
    assert_eq!(session.generation(), 2);
}

#[test]
fn test_notification_completes_before_load_returns() {
    let done = Rc::new(Cell::new(false));
    let mut session = Session::new();
    let flag = Rc::clone(&done);
    session.subscribe(move |_| {
        flag.set(true);
        Ok(())
    });

    session.load_audio(ScriptedAudio::new("a"));
    assert!(done.get());
}

#[test]
fn test_failing_observer_does_not_starve_later_ones() {
    let later = Rc::new(Cell::new(0));
    let mut session = Session::new();
    session.subscribe(|_| {
        Err(DeclickError::Observer {
            reason: "panel closed".to_string(),
        })
    });
    let counter = Rc::clone(&later);
    session.subscribe(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    session.load_audio(ScriptedAudio::new("a"));
    session.load_audio(ScriptedAudio::new("b"));

    assert_eq!(later.get(), 2);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    let calls = Rc::new(Cell::new(0));
    let mut session = Session::new();
    let counter = Rc::clone(&calls);
    let id = session.subscribe(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    session.load_audio(ScriptedAudio::new("a"));
    assert!(session.unsubscribe(id));
    session.load_audio(ScriptedAudio::new("b"));

    assert_eq!(calls.get(), 1);
}

// === Patch Queries ===

#[test]
fn test_patches_absent_without_audio() {
    let session = Session::new();
    assert_eq!(session.patches(ChannelType::Left).unwrap(), None);
    assert_eq!(session.patches(ChannelType::Right).unwrap(), None);
}

#[test]
fn test_patches_pass_through_unmodified() {
    let calls = Rc::new(Cell::new(0));
    let mut audio = ScriptedAudio::new("a").left(vec![patch(40, 8), patch(10, 2)]);
    audio.patch_calls = Rc::clone(&calls);

    let mut session = Session::new();
    session.load_audio(audio);

    let left = session.patches(ChannelType::Left).unwrap().unwrap();
    assert_eq!(left, vec![patch(40, 8), patch(10, 2)]);

    let right = session.patches(ChannelType::Right).unwrap();
    assert_eq!(right, Some(Vec::new()));

    session.patches(ChannelType::Left).unwrap();
    assert_eq!(calls.get(), 3, "every query must reach the engine");
}

#[test]
fn test_engine_error_propagates() {
    let mut session = Session::new();
    session.load_audio(ScriptedAudio::new("a").failing_right());

    let err = session.patches(ChannelType::Right).unwrap_err();
    assert_eq!(err.error_code(), "ENGINE_ERROR");
    assert!(err.to_string().contains("right channel analysis failed"));
}

// === Full Trace ===

#[test]
fn test_default_fallback_and_reset_on_load() {
    let mut session = Session::new();
    assert_relative_eq!(session.threshold(), 10.0);

    session.load_audio(ScriptedAudio::new("x"));
    assert_relative_eq!(session.threshold(), 10.0);
    assert_eq!(session.max_length(), 250);

    session.set_threshold(7.5);
    assert_relative_eq!(session.threshold(), 7.5);

    session.load_audio(ScriptedAudio::new("y"));
    assert_relative_eq!(session.threshold(), 10.0);
}

#[test]
fn test_custom_config_trace() {
    let config = SessionConfig::from_json_str(r#"{ "default_threshold": 8.0 }"#).unwrap();
    let mut session = Session::with_config(config);
    assert_relative_eq!(session.threshold(), 8.0);
    assert_eq!(session.max_length(), 250);

    session.load_audio(ScriptedAudio::new("x").preset(1.0, 1));
    session.set_max_length(320);
    assert_relative_eq!(session.threshold(), 8.0);
    assert_eq!(session.max_length(), 320);
}

#[test]
fn test_output_name_survives_loads() {
    let mut session = Session::new();
    session.set_output_name_suggestion("side-a_declicked.wav");
    session.load_audio(ScriptedAudio::new("a"));
    assert_eq!(session.output_name_suggestion(), "side-a_declicked.wav");
}
