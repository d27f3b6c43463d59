use plotgl::api::{Axes, AxesConfig};
use plotgl::core::{
    Axis, BBox, MaxNLocator, ScalarFormatter, ScaleMode, TickRequest, Transform, Viewport,
    generate_ticks,
};
use plotgl::interaction::{GestureOutcome, ZoomGestureController};
use plotgl::render::RecordingScene;
use proptest::prelude::*;

proptest! {
    #[test]
    fn updated_window_maps_endpoints_to_unit_range(
        low in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
    ) {
        let high = low + span;
        let mut transform = Transform::default();
        transform.update(low, high).expect("valid window");

        prop_assert_eq!(transform.evaluate(low), 0.0);
        prop_assert_eq!(transform.evaluate(high), 1.0);
    }

    #[test]
    fn inverse_undoes_evaluate(
        low in -1.0e3f64..1.0e3,
        span in 1.0e-2f64..1.0e3,
        t in 0.0f64..1.0,
    ) {
        let transform = Transform::new(low, low + span).expect("valid window");
        let value = low + t * span;
        let round_trip = transform.inverse(transform.evaluate(value));
        prop_assert!((round_trip - value).abs() <= 1e-9 * (1.0 + value.abs()));
    }

    #[test]
    fn reset_after_zoom_restores_mapping(
        low in -1.0e3f64..1.0e3,
        span in 1.0e-2f64..1.0e3,
        zoom_low in 0.0f64..0.5,
        zoom_span in 0.01f64..0.5,
        probe in -2.0e3f64..2.0e3,
    ) {
        let mut transform = Transform::new(low, low + span).expect("valid window");
        let before = transform.evaluate(probe);

        let zoom_start = low + zoom_low * span;
        transform
            .zoom(zoom_start, zoom_start + zoom_span * span)
            .expect("valid zoom");
        prop_assert!(transform.is_zoomed());

        transform.reset();
        prop_assert!(!transform.is_zoomed());
        prop_assert_eq!(transform.evaluate(probe), before);
    }

    #[test]
    fn visible_ticks_are_ascending_and_inside_the_window(
        low in -1.0e4f64..1.0e4,
        span in 1.0e-3f64..1.0e4,
        bins in 1usize..12,
    ) {
        let transform = Transform::new(low, low + span).expect("valid window");
        let request = TickRequest {
            axis: Axis::X,
            range: (low, low + span),
            scale: ScaleMode::Linear,
            transform: &transform,
            span_px: 640.0,
        };
        let ticks = generate_ticks(&request, &MaxNLocator::new(bins), &ScalarFormatter);

        prop_assert!(ticks.windows(2).all(|pair| pair[0].position < pair[1].position));
        prop_assert!(ticks.iter().all(|tick| (0.0..=1.0).contains(&tick.position)));
        prop_assert!(ticks.windows(2).all(|pair| pair[0].label != pair[1].label));
    }

    #[test]
    fn committed_drag_is_normalized(
        x0 in 0.0f64..1.0,
        y0 in 0.0f64..1.0,
        x1 in 0.0f64..1.0,
        y1 in 0.0f64..1.0,
    ) {
        let mut gesture = ZoomGestureController::new();
        gesture.pointer_down(x0, y0);
        gesture.pointer_move(x1, y1);
        let GestureOutcome::Committed(bbox) = gesture.pointer_up() else {
            panic!("moved drag must commit");
        };
        prop_assert_eq!(bbox, BBox::new(x0.min(x1), x0.max(x1), y0.min(y1), y0.max(y1)));
    }

    #[test]
    fn autoscale_always_yields_a_usable_window(
        xs in prop::collection::vec(-1.0e6f64..1.0e6, 1..40),
        log_x in any::<bool>(),
    ) {
        let mut axes = Axes::new(
            RecordingScene::new(),
            AxesConfig::new(Viewport::new(640, 480)),
        )
        .expect("axes init");
        let ys: Vec<f64> = xs.iter().map(|x| x * 0.5).collect();
        axes.plot(xs, ys).expect("line");
        if log_x {
            axes.set_xscale(ScaleMode::Log).expect("log x");
        }

        let (xmin, xmax) = axes.get_xlim();
        let (ymin, ymax) = axes.get_ylim();
        prop_assert!(xmin.is_finite() && xmax.is_finite() && xmin < xmax);
        prop_assert!(ymin.is_finite() && ymax.is_finite() && ymin < ymax);
        if log_x {
            prop_assert!(xmin > 0.0);
        }
    }
}
