//! Session State
//!
//! The `Session` holds the active audio asset and the user-tunable
//! detection parameters, and tells observers when the asset changes.
//!
//! While nothing is loaded, parameter reads fall back to the configured
//! defaults and parameter writes are dropped. Loading an asset resets its
//! parameters to those same defaults.

pub mod config;
pub mod notify;

use log::{debug, info};

use crate::engine::{Audio, ChannelType, Patch};
use crate::error::Result;

pub use config::{SessionConfig, DEFAULT_MAX_LENGTH, DEFAULT_THRESHOLD};
pub use notify::{AudioChangeCallback, AudioChangeNotifier, AudioChanged, SubscriptionId};

/// Mediates between the UI and the loaded audio asset
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    output_name_suggestion: String,
    active_audio: Option<Box<dyn Audio>>,
    generation: u64,
    notifier: AudioChangeNotifier,
}

impl Session {
    /// Create an empty session with the built-in defaults
    ///
    /// # Example
    /// ```
    /// use declick_session::Session;
    /// let session = Session::new();
    /// assert!(!session.has_audio());
    /// assert_eq!(session.threshold(), 10.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with custom fallback parameters
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Make `candidate` the active asset.
    ///
    /// `None` leaves the current asset in place and notifies nobody.
    /// Otherwise the previous asset is replaced, the new one has its
    /// threshold and max length reset to the session defaults, and every
    /// observer is called before this returns.
    pub fn set_active_audio(&mut self, candidate: Option<Box<dyn Audio>>) {
        let Some(mut audio) = candidate else {
            debug!("Ignoring load without audio; active asset unchanged");
            return;
        };

        let settings = audio.settings_mut();
        settings.threshold_for_detection = self.config.default_threshold;
        settings.max_length_of_correction = self.config.default_max_length;

        if self.active_audio.is_some() {
            debug!("Replacing active audio (generation {})", self.generation);
        }
        self.generation += 1;

        let audio: &dyn Audio = &**self.active_audio.insert(audio);
        info!(
            "Audio loaded (generation {}), notifying {} observer(s)",
            self.generation,
            self.notifier.len()
        );

        let event = AudioChanged {
            generation: self.generation,
            audio,
        };
        self.notifier.notify_all(&event);
    }

    /// Shorthand for `set_active_audio(Some(Box::new(audio)))`
    pub fn load_audio(&mut self, audio: impl Audio + 'static) {
        self.set_active_audio(Some(Box::new(audio)));
    }

    pub fn active_audio(&self) -> Option<&dyn Audio> {
        self.active_audio.as_deref()
    }

    pub fn has_audio(&self) -> bool {
        self.active_audio.is_some()
    }

    /// Number of successful loads so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Detection threshold of the active asset, or the default
    pub fn threshold(&self) -> f64 {
        match &self.active_audio {
            Some(audio) => audio.settings().threshold_for_detection,
            None => self.config.default_threshold,
        }
    }

    /// Set the detection threshold. Dropped when no audio is loaded.
    pub fn set_threshold(&mut self, value: f64) {
        match &mut self.active_audio {
            Some(audio) => {
                debug!("Threshold set to {}", value);
                audio.settings_mut().threshold_for_detection = value;
            }
            None => debug!("No audio loaded; threshold {} discarded", value),
        }
    }

    /// Max correction length of the active asset, or the default
    pub fn max_length(&self) -> i32 {
        match &self.active_audio {
            Some(audio) => audio.settings().max_length_of_correction,
            None => self.config.default_max_length,
        }
    }

    /// Set the max correction length. Dropped when no audio is loaded.
    pub fn set_max_length(&mut self, value: i32) {
        match &mut self.active_audio {
            Some(audio) => {
                debug!("Max length set to {}", value);
                audio.settings_mut().max_length_of_correction = value;
            }
            None => debug!("No audio loaded; max length {} discarded", value),
        }
    }

    pub fn output_name_suggestion(&self) -> &str {
        &self.output_name_suggestion
    }

    pub fn set_output_name_suggestion(&mut self, value: impl Into<String>) {
        self.output_name_suggestion = value.into();
    }

    /// Patches the engine found on `channel`.
    ///
    /// `Ok(None)` means no audio is loaded, which is different from an
    /// asset with zero patches (`Ok(Some(vec![]))`). Engine errors are
    /// returned as they are.
    pub fn patches(&self, channel: ChannelType) -> Result<Option<Vec<Patch>>> {
        match &self.active_audio {
            Some(audio) => audio.patches(channel).map(Some),
            None => Ok(None),
        }
    }

    /// Register an audio change observer
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&AudioChanged<'_>) -> Result<()> + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
