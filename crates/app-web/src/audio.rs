use app_core::{
    BandLayout, BinMailbox, InputConnection, InputError, ANALYZER_FFT_SIZE, ANALYZER_MAX_DB,
    ANALYZER_MIN_DB, ANALYZER_SMOOTHING,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// A source feeding the analyser.
pub enum WebInput {
    Microphone {
        stream: web::MediaStream,
        node: web::MediaStreamAudioSourceNode,
    },
    Stream {
        element: web::HtmlAudioElement,
    },
}

impl InputConnection for WebInput {
    fn disconnect(self) {
        match self {
            WebInput::Microphone { stream, node } => {
                let _ = node.disconnect();
                for track in stream.get_tracks().iter() {
                    if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                        track.stop();
                    }
                }
                log::info!("[audio] microphone released");
            }
            // The element source node stays wired to the analyser for the
            // page's lifetime; pausing is enough to silence it.
            WebInput::Stream { element } => {
                let _ = element.pause();
                log::info!("[audio] stream paused");
            }
        }
    }
}

/// element source ─┐
///                 ├─> analyser ─> output gain ─> speakers
/// microphone ─────┘
pub struct AudioGraph {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    output: web::GainNode,
    element: web::HtmlAudioElement,
    element_source: Option<web::MediaElementAudioSourceNode>,
    layout: BandLayout,
    spectrum: Vec<f32>,
    bands: Vec<f32>,
}

fn js_err(e: JsValue) -> InputError {
    InputError::StreamFailed(format!("{:?}", e))
}

impl AudioGraph {
    pub fn new(element: web::HtmlAudioElement) -> Result<Self, JsValue> {
        let ctx = web::AudioContext::new()?;
        let analyser = ctx.create_analyser()?;
        analyser.set_fft_size(ANALYZER_FFT_SIZE as u32);
        analyser.set_smoothing_time_constant(ANALYZER_SMOOTHING as f64);
        analyser.set_min_decibels(ANALYZER_MIN_DB as f64);
        analyser.set_max_decibels(ANALYZER_MAX_DB as f64);
        let output = ctx.create_gain()?;
        output.gain().set_value(0.0);
        analyser.connect_with_audio_node(&output)?;
        output.connect_with_audio_node(&ctx.destination())?;

        let layout = BandLayout::standard(ctx.sample_rate(), ANALYZER_FFT_SIZE);
        log::info!(
            "[audio] analyser ready: {} Hz, {} bands",
            ctx.sample_rate(),
            layout.len()
        );
        Ok(Self {
            spectrum: vec![f32::NEG_INFINITY; analyser.frequency_bin_count() as usize],
            bands: Vec::with_capacity(layout.len()),
            ctx,
            analyser,
            output,
            element,
            element_source: None,
            layout,
        })
    }

    /// Browsers start contexts suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            if let Ok(p) = self.ctx.resume() {
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(p).await {
                        log::warn!("[audio] resume failed: {:?}", e);
                    }
                });
            }
        }
    }

    pub fn play_stream(&mut self, url: &str) -> Result<WebInput, InputError> {
        if self.element_source.is_none() {
            // An element can be captured only once per context.
            let source = self
                .ctx
                .create_media_element_source(&self.element)
                .map_err(js_err)?;
            source
                .connect_with_audio_node(&self.analyser)
                .map_err(js_err)?;
            self.element_source = Some(source);
        }
        self.output.gain().set_value(1.0);
        self.element.set_src(url);
        let playing = self.element.play().map_err(js_err)?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(playing).await {
                log::error!("[audio] stream playback failed: {:?}", e);
            }
        });
        log::info!("[audio] streaming {}", url);
        Ok(WebInput::Stream {
            element: self.element.clone(),
        })
    }

    pub fn connect_microphone(&mut self, stream: web::MediaStream) -> Result<WebInput, InputError> {
        let node = self
            .ctx
            .create_media_stream_source(&stream)
            .map_err(js_err)?;
        node.connect_with_audio_node(&self.analyser)
            .map_err(js_err)?;
        Ok(WebInput::Microphone { stream, node })
    }

    /// Microphone input is analysed but not played back, or the speakers
    /// would feed the mic. Call once the microphone is the active input.
    pub fn mute_output(&self) {
        self.output.gain().set_value(0.0);
    }

    /// Read the analyser, group into bands and publish one snapshot.
    pub fn poll(&mut self, mailbox: &BinMailbox) {
        self.analyser.get_float_frequency_data(&mut self.spectrum);
        self.layout.fill_from_db(&self.spectrum, &mut self.bands);
        mailbox.publish(&self.bands);
    }
}

/// Ask for microphone access. Resolves once the user answers the prompt.
pub async fn request_microphone() -> Result<web::MediaStream, InputError> {
    let window = web::window().ok_or_else(|| InputError::DeviceUnavailable("no window".into()))?;
    let navigator = window.navigator();
    let has_devices = js_sys::Reflect::has(&navigator, &JsValue::from_str("mediaDevices"))
        .unwrap_or(false);
    if !has_devices {
        return Err(InputError::DeviceUnavailable(
            "navigator.mediaDevices is missing".into(),
        ));
    }
    let devices = navigator
        .media_devices()
        .map_err(|e| InputError::DeviceUnavailable(format!("{:?}", e)))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let pending = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| InputError::DeviceUnavailable(format!("{:?}", e)))?;
    match JsFuture::from(pending).await {
        Ok(stream) => stream
            .dyn_into::<web::MediaStream>()
            .map_err(|_| InputError::DeviceUnavailable("not a MediaStream".into())),
        Err(e) => Err(classify_media_error(&e)),
    }
}

fn classify_media_error(e: &JsValue) -> InputError {
    let name = js_sys::Reflect::get(e, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    match name.as_str() {
        "NotAllowedError" | "SecurityError" => InputError::PermissionDenied,
        _ => InputError::DeviceUnavailable(format!("{:?}", e)),
    }
}
