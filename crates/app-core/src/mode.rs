//! Source selection: which data drives the height field.
//!
//! Two modes only. At most one input is ever connected. Generated and live
//! stream tear the previous input down on selection. The microphone has to
//! wait for a permission prompt, so the previous input keeps running (and
//! frames keep rendering in the previous mode) until the grant arrives; a
//! denial changes nothing.
//!
//! Cached bins belong to the input that produced them and are dropped with it,
//! so a source that has published nothing yet renders flat.

use std::fmt;
use std::str::FromStr;

use crate::constants::LIVE_STREAM_URL;
use crate::error::{InputError, ModeError};
use crate::heightfield::{HeightSource, RadialBins, RadialMapping, TravelingWave, WaveConfig};
use crate::mailbox::BinMailbox;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Generated,
    Microphone,
    LiveStream,
}

impl SourceKind {
    /// Selector value used by the panels.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Generated => "generated",
            SourceKind::Microphone => "mic",
            SourceKind::LiveStream => "live",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "generated" => Ok(SourceKind::Generated),
            "mic" | "microphone" => Ok(SourceKind::Microphone),
            "live" | "stream" => Ok(SourceKind::LiveStream),
            other => Err(InputError::UnrecognizedSource(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Generated,
    AudioReactive,
}

/// A live audio input attached to the analyzer.
///
/// Disconnecting consumes the connection, so it can happen only once.
pub trait InputConnection {
    fn disconnect(self);
}

/// Identifies one microphone request; grants for an older ticket are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermissionTicket(u64);

/// What the front-end must do after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Mode is now [`Mode::Generated`]; nothing else to do.
    Generated,
    /// Ask for microphone access, then report with
    /// [`ModeController::microphone_granted`] or
    /// [`ModeController::microphone_failed`].
    AwaitMicrophone(PermissionTicket),
    /// Mode is now [`Mode::AudioReactive`]; start playback of `url` and attach
    /// its connection with [`ModeController::attach_stream`].
    ConnectStream { url: &'static str },
}

pub struct ModeController<C: InputConnection> {
    mode: Mode,
    active: Option<C>,
    pending: Option<PermissionTicket>,
    next_ticket: u64,
    bins: Vec<f32>,
    bins_seen: u64,
}

impl<C: InputConnection> Default for ModeController<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: InputConnection> ModeController<C> {
    pub fn new() -> Self {
        Self {
            mode: Mode::Generated,
            active: None,
            pending: None,
            next_ticket: 0,
            bins: Vec::new(),
            bins_seen: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_audio_reactive(&self) -> bool {
        self.mode == Mode::AudioReactive
    }

    pub fn has_input(&self) -> bool {
        self.active.is_some()
    }

    pub fn pending_permission(&self) -> Option<PermissionTicket> {
        self.pending
    }

    /// Latest cached frequency bins.
    pub fn bins(&self) -> &[f32] {
        &self.bins
    }

    pub fn select(&mut self, source: SourceKind) -> SelectOutcome {
        if self.pending.take().is_some() {
            log::info!("[mode] dropping pending microphone request");
        }
        match source {
            SourceKind::Generated => {
                self.release_input();
                self.mode = Mode::Generated;
                log::info!("[mode] generated wave");
                SelectOutcome::Generated
            }
            SourceKind::Microphone => {
                self.next_ticket += 1;
                let ticket = PermissionTicket(self.next_ticket);
                self.pending = Some(ticket);
                log::info!("[mode] waiting for microphone permission");
                SelectOutcome::AwaitMicrophone(ticket)
            }
            SourceKind::LiveStream => {
                self.release_input();
                self.mode = Mode::AudioReactive;
                log::info!("[mode] live stream {}", LIVE_STREAM_URL);
                SelectOutcome::ConnectStream {
                    url: LIVE_STREAM_URL,
                }
            }
        }
    }

    /// Parse a selector value and select it.
    pub fn select_str(&mut self, value: &str) -> Result<SelectOutcome, InputError> {
        let source = value.parse::<SourceKind>()?;
        Ok(self.select(source))
    }

    /// Commit a granted microphone. A grant for a superseded request is
    /// disconnected straight away and leaves everything untouched.
    pub fn microphone_granted(
        &mut self,
        ticket: PermissionTicket,
        connection: C,
    ) -> Result<(), ModeError> {
        if self.pending != Some(ticket) {
            connection.disconnect();
            return Err(ModeError::StalePermission);
        }
        self.pending = None;
        self.release_input();
        self.active = Some(connection);
        self.mode = Mode::AudioReactive;
        log::info!("[mode] microphone connected");
        Ok(())
    }

    /// Record a failed microphone request. The mode does not change; the
    /// error is handed back for display.
    pub fn microphone_failed(&mut self, ticket: PermissionTicket, error: InputError) -> InputError {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
        log::warn!("[mode] microphone request failed: {}", error);
        error
    }

    /// Attach the playback connection for a stream selected earlier.
    pub fn attach_stream(&mut self, connection: C) {
        self.release_input();
        self.active = Some(connection);
    }

    /// Pull the newest analyzer snapshot into the cached bins. Only the
    /// audio-reactive branch consumes bins; in generated mode this is a no-op.
    pub fn refresh_bins(&mut self, mailbox: &BinMailbox) -> bool {
        if self.mode != Mode::AudioReactive {
            return false;
        }
        match mailbox.read_newer(self.bins_seen, &mut self.bins) {
            Some(seq) => {
                self.bins_seen = seq;
                true
            }
            None => false,
        }
    }

    /// Strategy for this frame's height field.
    pub fn height_source(
        &self,
        wave: &WaveConfig,
        elapsed_ms: f64,
        mapping: RadialMapping,
    ) -> HeightSource<'_> {
        match self.mode {
            Mode::Generated => HeightSource::Wave(TravelingWave::new(wave, elapsed_ms)),
            Mode::AudioReactive => HeightSource::Bins(RadialBins::new(&self.bins, mapping)),
        }
    }

    /// Disconnect the active input and forget its bins. The sequence
    /// watermark stays, so an old snapshot is never read back in.
    fn release_input(&mut self) {
        if let Some(connection) = self.active.take() {
            connection.disconnect();
            log::info!("[mode] disconnected previous input");
        }
        self.bins.clear();
    }
}
