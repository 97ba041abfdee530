// Command-line arguments.

use app_core::{ParamChange, RadialMapping, Settings, SettingsError, SourceKind};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RadialArg {
    /// Key bins by raw radial distance
    Raw,
    /// Stretch radial distance so the grid corners reach the last bin
    Corner,
}

impl From<RadialArg> for RadialMapping {
    fn from(arg: RadialArg) -> Self {
        match arg {
            RadialArg::Raw => RadialMapping::Raw,
            RadialArg::Corner => RadialMapping::Corner,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "radial-grid")]
#[command(about = "Audio-reactive grid of instanced boxes", long_about = None)]
pub struct Args {
    /// Grid rows (1-500)
    #[arg(long)]
    pub rows: Option<u32>,

    /// Grid columns (1-500)
    #[arg(long)]
    pub cols: Option<u32>,

    /// Wave amplitude (0-2.5)
    #[arg(long)]
    pub amplitude: Option<f32>,

    /// Wave frequency in Hz (0-50)
    #[arg(long, value_name = "HZ")]
    pub frequency_hz: Option<f32>,

    /// Hide the ground plane
    #[arg(long)]
    pub no_ground: bool,

    /// Initial source: generated, mic or live
    #[arg(long, default_value = "generated")]
    pub source: SourceKind,

    /// How radial distance maps onto frequency bins
    #[arg(long, value_enum, default_value_t = RadialArg::Raw)]
    pub radial: RadialArg,
}

impl Args {
    /// Start from the defaults and apply each flag through the validated setters.
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let mut settings = Settings::default();
        let changes = [
            self.rows.map(ParamChange::Rows),
            self.cols.map(ParamChange::Cols),
            self.amplitude.map(ParamChange::Amplitude),
            self.frequency_hz.map(ParamChange::FrequencyHz),
            self.no_ground.then_some(ParamChange::GroundPlane(false)),
            Some(ParamChange::Radial(self.radial.into())),
        ];
        for change in changes.into_iter().flatten() {
            settings.apply(change)?;
        }
        Ok(settings)
    }
}
