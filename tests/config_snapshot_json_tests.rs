use plotgl::api::{
    AXES_SNAPSHOT_JSON_SCHEMA_V1, Axes, AxesConfig, AxesSnapshot, AxesSnapshotJsonContractV1,
};
use plotgl::artist::ArtistKind;
use plotgl::core::{AxisTickConfig, LocatorKind, ScaleMode, Viewport};
use plotgl::interaction::InteractionMode;
use plotgl::render::RecordingScene;
use plotgl::PlotError;

#[test]
fn config_json_round_trip() {
    let config = AxesConfig::new(Viewport::new(640, 480))
        .with_xscale(ScaleMode::Log)
        .with_y_ticks(AxisTickConfig::default().with_locator(LocatorKind::MaxN { bins: 4 }))
        .with_bbox_padding_ratio(0.05)
        .with_title("response")
        .with_xlabel("frequency")
        .with_interaction_mode(InteractionMode::BoxZoom);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"xscale\": \"log\""));
    let restored = AxesConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn sparse_config_json_uses_defaults() {
    let config = AxesConfig::from_json_str(r#"{"viewport":{"width":300,"height":200}}"#)
        .expect("parse");
    assert_eq!(config, AxesConfig::new(Viewport::new(300, 200)));
    assert_eq!(config.bbox_padding_ratio, 0.03);
}

#[test]
fn malformed_config_is_rejected() {
    assert!(AxesConfig::from_json_str("{").is_err());
    assert!(AxesConfig::from_json_str(r#"{"viewport":{"width":1,"height":1},"xscale":"symlog"}"#).is_err());
}

#[test]
fn invalid_config_fails_axes_creation() {
    let err = Axes::new(RecordingScene::new(), AxesConfig::new(Viewport::new(0, 100)))
        .err()
        .expect("zero width");
    assert!(matches!(err, PlotError::InvalidViewport { width: 0, height: 100 }));

    let padded = AxesConfig::new(Viewport::new(10, 10)).with_bbox_padding_ratio(f64::NAN);
    assert!(Axes::new(RecordingScene::new(), padded).is_err());
}

#[test]
fn config_drives_initial_axes_state() {
    let config = AxesConfig::new(Viewport::new(320, 240))
        .with_yscale(ScaleMode::Log)
        .with_title("t")
        .with_ylabel("amplitude")
        .with_interaction_mode(InteractionMode::BoxZoom);
    let axes = Axes::new(RecordingScene::new(), config).expect("axes init");

    assert_eq!(axes.yscale(), ScaleMode::Log);
    assert_eq!(axes.title(), "t");
    assert_eq!(axes.ylabel(), "amplitude");
    assert_eq!(axes.interaction_mode(), InteractionMode::BoxZoom);
    assert!(!axes.scene().navigation_enabled());
}

#[test]
fn snapshot_describes_artists_and_axes() {
    let mut axes = Axes::new(
        RecordingScene::new(),
        AxesConfig::new(Viewport::new(400, 300)).with_title("demo"),
    )
    .expect("axes init");
    axes.plot(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).expect("line");
    axes.scatter(vec![1.0], vec![1.0]).expect("points");
    axes.set_xlim(0.0, 10.0).expect("xlim");

    let snapshot = axes.snapshot();
    assert_eq!(snapshot.title, "demo");
    assert_eq!(snapshot.x.visible_limits, (0.0, 10.0));
    assert!(!snapshot.x.zoomed);
    assert_eq!(snapshot.x.ticks.len(), 6);

    let keys: Vec<&str> = snapshot.artists.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["artist-0", "artist-1"]);
    let line = &snapshot.artists["artist-0"];
    assert_eq!(line.kind, ArtistKind::Line);
    assert_eq!(line.len, 3);
    assert_eq!(line.color.as_deref(), Some("#1f77b4"));
    assert_eq!(snapshot.artists["artist-1"].kind, ArtistKind::Points);
}

#[test]
fn snapshot_contract_round_trips_through_compat_parser() {
    let mut axes = Axes::new(RecordingScene::new(), AxesConfig::new(Viewport::new(400, 300)))
        .expect("axes init");
    axes.plot(vec![0.0, 4.0], vec![0.0, 2.0]).expect("line");
    axes.set_xlim(0.0, 4.0).expect("xlim");
    axes.set_ylim(0.0, 2.0).expect("ylim");

    let contract_json = axes.snapshot_json_contract_v1_pretty().expect("contract");
    let payload: AxesSnapshotJsonContractV1 =
        serde_json::from_str(&contract_json).expect("payload");
    assert_eq!(payload.schema_version, AXES_SNAPSHOT_JSON_SCHEMA_V1);

    let from_contract = AxesSnapshot::from_json_compat_str(&contract_json).expect("contract parse");
    let from_bare =
        AxesSnapshot::from_json_compat_str(&axes.snapshot_json_pretty().expect("bare"))
            .expect("bare parse");
    for snapshot in [from_contract, from_bare] {
        assert_eq!(snapshot.viewport, Viewport::new(400, 300));
        assert_eq!(snapshot.x.visible_limits, (0.0, 4.0));
        assert_eq!(snapshot.y.base_limits, (0.0, 2.0));
        assert_eq!(snapshot.artists.len(), 1);
    }
}

#[test]
fn snapshot_with_artist_outside_log_domain_still_parses() {
    let mut axes = Axes::new(RecordingScene::new(), AxesConfig::new(Viewport::new(400, 300)))
        .expect("axes init");
    let line = axes.plot(vec![1.0, 10.0], vec![0.0, 1.0]).expect("line");
    let points = axes.scatter(vec![-1.0, -2.0], vec![1.0, 2.0]).expect("points");
    axes.set_xscale(ScaleMode::Log).expect("log x");

    let contract_json = axes.snapshot_json_contract_v1_pretty().expect("contract");
    let snapshot = AxesSnapshot::from_json_compat_str(&contract_json).expect("contract parse");
    assert_eq!(snapshot, axes.snapshot());
    assert_eq!(snapshot.artists[&points.to_string()].bbox, None);
    let line_bbox = snapshot.artists[&line.to_string()].bbox.expect("finite line extent");
    assert!(line_bbox.is_finite());
}

#[test]
fn unknown_snapshot_schema_version_is_rejected() {
    let axes = Axes::new(RecordingScene::new(), AxesConfig::new(Viewport::new(400, 300)))
        .expect("axes init");
    let contract_json = axes.snapshot_json_contract_v1_pretty().expect("contract");
    let bumped = contract_json.replacen(
        "\"schema_version\": 1",
        "\"schema_version\": 2",
        1,
    );
    assert!(AxesSnapshot::from_json_compat_str(&bumped).is_err());
}
