// Frame loop behavior of the application context.

use std::cell::Cell;
use std::rc::Rc;

use app_core::{
    BinMailbox, CellCoord, GridConfig, HeightField, InputConnection, LightRig, Mode, ParamChange,
    ParamEffect, RadialMapping, SelectOutcome, Settings, SourceKind, TravelingWave, Visualizer,
    GROUND_PLANE_SIZE,
};

#[derive(Clone, Default)]
struct FakeInput {
    disconnects: Rc<Cell<u32>>,
}

impl InputConnection for FakeInput {
    fn disconnect(self) {
        self.disconnects.set(self.disconnects.get() + 1);
    }
}

fn small_visualizer(rows: u32, cols: u32) -> Visualizer<FakeInput> {
    let mut vis = Visualizer::new(Settings::default(), BinMailbox::shared());
    vis.apply(ParamChange::Rows(rows)).unwrap();
    vis.apply(ParamChange::Cols(cols)).unwrap();
    vis
}

#[test]
fn every_frame_uploads_all_cells() {
    let mut vis = Visualizer::<FakeInput>::new(Settings::default(), BinMailbox::shared());
    for t in [0.0, 16.0, 33.0] {
        let frame = vis.frame(t);
        assert_eq!(frame.transforms.map(|t| t.len()), Some(250 * 250));
        assert_eq!(frame.cell_count, 250 * 250);
    }
}

#[test]
fn resizing_reallocates_at_once() {
    let mut vis = Visualizer::<FakeInput>::new(Settings::default(), BinMailbox::shared());
    assert_eq!(vis.apply(ParamChange::Rows(10)), Ok(ParamEffect::Reallocate));
    assert_eq!(vis.buffer().len(), 10 * 250);
    assert!(vis.apply(ParamChange::Rows(0)).is_err());
    assert_eq!(vis.buffer().len(), 10 * 250);
}

#[test]
fn ground_plane_tracks_settings() {
    let mut vis = small_visualizer(3, 3);
    let ground = vis.ground_plane().unwrap();
    assert!((ground.z + 1.05).abs() < 1e-6);
    assert_eq!(ground.size, GROUND_PLANE_SIZE);

    vis.apply(ParamChange::Amplitude(0.5)).unwrap();
    assert!((vis.frame(0.0).ground.unwrap().z + 0.55).abs() < 1e-6);

    vis.apply(ParamChange::GroundPlane(false)).unwrap();
    assert!(vis.ground_plane().is_none());
    assert!(vis.frame(0.0).ground.is_none());
}

#[test]
fn generated_frame_matches_wave() {
    let mut vis = small_visualizer(5, 5);
    let grid = GridConfig::new(5, 5, 0.02).unwrap();
    let wave = TravelingWave::new(vis.settings().wave(), 2_500.0);
    let frame = vis.frame(2_500.0);
    let transforms = frame.transforms.unwrap();
    for row in 0..5 {
        for col in 0..5 {
            let expected = wave.height(&CellCoord::new(&grid, row, col));
            assert!((transforms[grid.index(row, col)].position[2] - expected).abs() < 1e-6);
        }
    }
    assert_eq!(frame.lights, LightRig::at(2_500.0));
}

#[test]
fn audio_frame_reads_published_bins() {
    let mut vis = small_visualizer(4, 4);
    vis.apply(ParamChange::Radial(RadialMapping::Corner)).unwrap();
    assert!(matches!(
        vis.select_source(SourceKind::LiveStream),
        SelectOutcome::ConnectStream { .. }
    ));
    vis.mailbox().publish(&[0.0, 10.0]);

    let grid = GridConfig::new(4, 4, 0.02).unwrap();
    let frame = vis.frame(0.0);
    let z = frame.transforms.unwrap()[grid.index(0, 2)].position[2];
    assert!((z - 7.0711).abs() < 1e-3, "got {z}");
}

#[test]
fn leaving_microphone_disconnects_before_next_frame() {
    let mut vis = small_visualizer(4, 4);
    let mic = FakeInput::default();
    let SelectOutcome::AwaitMicrophone(ticket) = vis.select_source(SourceKind::Microphone) else {
        panic!("expected a permission request");
    };
    vis.microphone_granted(ticket, mic.clone()).unwrap();
    vis.mailbox().publish(&[1.0; 8]);
    let frame = vis.frame(0.0);
    assert!(frame.transforms.unwrap().iter().all(|c| c.position[2] == 1.0));

    vis.select_str("generated").unwrap();
    assert_eq!(mic.disconnects.get(), 1);
    assert_eq!(vis.mode(), Mode::Generated);

    let grid = GridConfig::new(4, 4, 0.02).unwrap();
    let wave = TravelingWave::new(vis.settings().wave(), 100.0);
    let frame = vis.frame(100.0);
    let z = frame.transforms.unwrap()[grid.index(1, 3)].position[2];
    assert!((z - wave.height(&CellCoord::new(&grid, 1, 3))).abs() < 1e-6);
    assert_eq!(mic.disconnects.get(), 1);
}

#[test]
fn source_without_data_renders_flat_after_microphone() {
    let mut vis = small_visualizer(2, 2);
    let mic = FakeInput::default();
    let SelectOutcome::AwaitMicrophone(ticket) = vis.select_source(SourceKind::Microphone) else {
        panic!("expected a permission request");
    };
    vis.microphone_granted(ticket, mic.clone()).unwrap();
    vis.mailbox().publish(&[1.0; 8]);
    assert!(vis.frame(0.0).transforms.unwrap().iter().all(|c| c.position[2] == 1.0));

    vis.select_source(SourceKind::Generated);
    // live stream selected but nothing attached or published yet
    vis.select_source(SourceKind::LiveStream);
    assert_eq!(vis.mode(), Mode::AudioReactive);
    assert!(!vis.modes().has_input());
    let frame = vis.frame(16.0);
    assert!(frame.transforms.unwrap().iter().all(|c| c.position[2] == 0.0));
    assert_eq!(mic.disconnects.get(), 1);
}
