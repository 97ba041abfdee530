//! Microphone capture via cpal.
//!
//! The input stream and the analyser both live on one worker thread: cpal
//! streams are not `Send` on every host, and opening a device can block for a
//! while, which must not stall the event loop. The worker reports whether the
//! device opened through a channel the event loop polls every frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use app_core::{InputConnection, InputError, SharedMailbox, ANALYZER_FFT_SIZE};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};

use crate::analyzer::{first_channel, SpectrumAnalyzer};

/// Roughly one analysis per display frame.
const ANALYSIS_INTERVAL: Duration = Duration::from_millis(16);
/// Cap on buffered samples if the analyser falls behind.
const MAX_BUFFERED: usize = ANALYZER_FFT_SIZE * 4;

type SampleBuffer = Arc<Mutex<Vec<f32>>>;

/// A running capture. Dropping it without `disconnect` leaves the worker running.
pub struct MicHandle {
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl InputConnection for MicHandle {
    fn disconnect(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("[audio] capture thread panicked");
            }
        }
        log::info!("[audio] microphone released");
    }
}

/// A capture that has been started but not yet confirmed.
pub struct PendingMic {
    ready: Receiver<Result<(), InputError>>,
    handle: Option<MicHandle>,
}

impl PendingMic {
    /// Non-blocking. Yields once, when the worker has opened the device or given up.
    pub fn poll(&mut self) -> Option<Result<MicHandle, InputError>> {
        let result = match self.ready.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(InputError::StreamFailed(
                "capture thread exited before reporting".into(),
            )),
        };
        let handle = self.handle.take()?;
        match result {
            Ok(()) => Some(Ok(handle)),
            Err(e) => {
                handle.disconnect();
                Some(Err(e))
            }
        }
    }
}

impl Drop for PendingMic {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.disconnect();
        }
    }
}

/// Start opening the default input device on a worker thread.
pub fn open_microphone(mailbox: SharedMailbox) -> PendingMic {
    let (tx, rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = stop.clone();
    let worker = thread::Builder::new()
        .name("mic-capture".into())
        .spawn(move || run_capture(mailbox, worker_stop, tx));
    match worker {
        Ok(worker) => PendingMic {
            ready: rx,
            handle: Some(MicHandle {
                stop,
                worker: Some(worker),
            }),
        },
        Err(e) => {
            // Nothing will ever report on rx; poll sees Disconnected.
            log::error!("[audio] failed to spawn capture thread: {}", e);
            PendingMic {
                ready: rx,
                handle: Some(MicHandle { stop, worker: None }),
            }
        }
    }
}

fn run_capture(mailbox: SharedMailbox, stop: Arc<AtomicBool>, ready: Sender<Result<(), InputError>>) {
    let (stream, samples, sample_rate) = match open_input_stream() {
        Ok(opened) => opened,
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };
    if ready.send(Ok(())).is_err() {
        return;
    }

    let mut analyzer = SpectrumAnalyzer::new(sample_rate, ANALYZER_FFT_SIZE);
    let fft_size = analyzer.fft_size();
    let mut block = Vec::with_capacity(fft_size);
    while !stop.load(Ordering::Relaxed) {
        thread::sleep(ANALYSIS_INTERVAL);
        {
            let mut buf = samples.lock().unwrap_or_else(|e| e.into_inner());
            if buf.len() < fft_size {
                continue;
            }
            // newest block, keeping half of it for 50% overlap
            let start = buf.len() - fft_size;
            block.clear();
            block.extend_from_slice(&buf[start..]);
            buf.drain(..start + fft_size / 2);
        }
        mailbox.publish(analyzer.process(&block));
    }
    drop(stream);
}

fn open_input_stream() -> Result<(cpal::Stream, SampleBuffer, f32), InputError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| InputError::DeviceUnavailable("no default input device".into()))?;
    let config = device
        .default_input_config()
        .map_err(|e| InputError::DeviceUnavailable(e.to_string()))?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    let stream_config: cpal::StreamConfig = config.config();
    let samples: SampleBuffer = Arc::new(Mutex::new(Vec::with_capacity(MAX_BUFFERED)));

    let stream = match config.sample_format() {
        SampleFormat::F32 => {
            build_input_stream::<f32>(&device, &stream_config, channels, samples.clone())
        }
        SampleFormat::I16 => {
            build_input_stream::<i16>(&device, &stream_config, channels, samples.clone())
        }
        SampleFormat::U16 => {
            build_input_stream::<u16>(&device, &stream_config, channels, samples.clone())
        }
        other => {
            return Err(InputError::DeviceUnavailable(format!(
                "unsupported sample format {:?}",
                other
            )))
        }
    }
    .map_err(|e| InputError::StreamFailed(e.to_string()))?;
    stream
        .play()
        .map_err(|e| InputError::StreamFailed(e.to_string()))?;

    log::info!(
        "[audio] capturing from {} ({} Hz, {} ch)",
        device.name().unwrap_or_else(|_| "unknown device".into()),
        sample_rate,
        channels
    );
    Ok((stream, samples, sample_rate))
}

/// Push the first channel of every frame into `sink`.
fn build_input_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    sink: SampleBuffer,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample,
    f32: FromSample<T>,
{
    device.build_input_stream(
        config,
        move |data: &[T], _: &cpal::InputCallbackInfo| {
            let mut buf = sink.lock().unwrap_or_else(|e| e.into_inner());
            buf.extend(first_channel(data, channels).map(|s| s.to_sample::<f32>()));
            if buf.len() > MAX_BUFFERED {
                let excess = buf.len() - MAX_BUFFERED;
                buf.drain(..excess);
            }
        },
        |err| log::error!("[audio] input stream error: {}", err),
        None,
    )
}
