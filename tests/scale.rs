use cosmic_distance_ladder::models::{
    CepheidInput, DistanceResult, ParallaxInput, RedshiftInput, cepheid, parallax, redshift,
};
use cosmic_distance_ladder::scale::catalogue::{default_scale_entries, default_star_classes};
use cosmic_distance_ladder::scale::hr::format_luminosity_tick;
use cosmic_distance_ladder::scale::{
    Category, HrDiagram, LogAxis, ScaleChart, ScaleEntry, ScaleError, display_rows,
    format_distance_label, format_tick,
};
use cosmic_distance_ladder::{format_magnitude, map_to_axis_position};
use proptest::prelude::*;

const CHART_EXTENT: f64 = 800.0;

#[test]
fn magnitude_labels_use_suffixes() {
    assert_eq!(format_magnitude(13_400_000_000.0), "13.4B");
    assert_eq!(format_magnitude(54_000_000.0), "54.0M");
    assert_eq!(format_magnitude(2_500_000.0), "2.5M");
    assert_eq!(format_magnitude(158_000.0), "158.0K");
    assert_eq!(format_magnitude(1_000.0), "1.0K");
    assert_eq!(format_magnitude(642.0), "642");
    assert_eq!(format_magnitude(4.2), "4.2");
}

#[test]
fn magnitude_label_ties_round_up() {
    assert_eq!(format_magnitude(1_250.0), "1.3K");
    assert_eq!(format_magnitude(2_250_000.0), "2.3M");
    assert_eq!(format_magnitude(1_750_000_000.0), "1.8B");
    assert_eq!(format_magnitude(1_240.0), "1.2K");
}

#[test]
fn tick_labels_differ_from_item_labels() {
    assert_eq!(format_tick(1.0e9), "1B");
    assert_eq!(format_magnitude(1.0e9), "1.0B");
    assert_eq!(format_tick(100_000.0), "100K");
    assert_eq!(format_distance_label(13_400_000_000.0, "ly"), "13.4B ly");
    assert_eq!(format_distance_label(8.6, "ly"), "8.6 ly");
}

#[test]
fn axis_endpoints_hit_range_ends() {
    let domain = (1.0, 13_400_000_000.0);
    let range = (0.0, CHART_EXTENT);
    assert_eq!(map_to_axis_position(1.0, domain, range).unwrap(), 0.0);
    assert_eq!(
        map_to_axis_position(13_400_000_000.0, domain, range).unwrap(),
        CHART_EXTENT
    );
}

#[test]
fn axis_places_decades_evenly() {
    let axis = LogAxis::new((1.0, 1.0e4), (0.0, 400.0)).unwrap();
    for (value, expected) in [(10.0, 100.0), (100.0, 200.0), (1000.0, 300.0)] {
        let position = axis.position(value).unwrap();
        assert!((position - expected).abs() < 1e-9, "{value} -> {position}");
    }
}

#[test]
fn axis_rejects_non_positive_magnitudes() {
    let axis = LogAxis::new((1.0, 1.0e4), (0.0, 400.0)).unwrap();
    assert_eq!(axis.position(0.0), Err(ScaleError::InvalidMagnitude(0.0)));
    assert_eq!(axis.position(-5.0), Err(ScaleError::InvalidMagnitude(-5.0)));
    assert!(axis.position(f64::NAN).is_err());
    assert_eq!(axis.position_or_floor(0.0), 0.0);
    assert_eq!(axis.position_or_floor(-5.0), 0.0);
}

#[test]
fn axis_clamps_out_of_domain_values() {
    let axis = LogAxis::new((1.0, 1.0e4), (0.0, 400.0)).unwrap();
    assert_eq!(axis.position(0.5).unwrap(), 0.0);
    assert_eq!(axis.position(1.0e9).unwrap(), 400.0);
}

#[test]
fn axis_rejects_degenerate_domains() {
    assert_eq!(
        LogAxis::new((0.0, 10.0), (0.0, 1.0)),
        Err(ScaleError::InvalidDomain(0.0, 10.0))
    );
    assert_eq!(
        LogAxis::new((10.0, 10.0), (0.0, 1.0)),
        Err(ScaleError::InvalidDomain(10.0, 10.0))
    );
    assert_eq!(
        LogAxis::new((1.0, 10.0), (0.0, f64::INFINITY)),
        Err(ScaleError::InvalidRange(0.0, f64::INFINITY))
    );
}

proptest! {
    #[test]
    fn axis_mapping_is_monotonic(a in 1.0f64..1.34e10, b in 1.0f64..1.34e10) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let axis = LogAxis::new((1.0, 1.34e10), (0.0, CHART_EXTENT)).unwrap();
        let p_lo = axis.position(lo).unwrap();
        let p_hi = axis.position(hi).unwrap();
        prop_assert!(p_lo <= p_hi);
        prop_assert!((0.0..=CHART_EXTENT).contains(&p_lo));
        prop_assert!((0.0..=CHART_EXTENT).contains(&p_hi));
    }
}

#[test]
fn chart_axis_spans_one_to_largest_distance() {
    let chart = ScaleChart::new(default_scale_entries(), CHART_EXTENT).unwrap();
    assert_eq!(chart.axis().domain(), (1.0, 13_400_000_000.0));

    let items = chart.items();
    assert_eq!(items.len(), 7);
    let gn_z11 = items.last().unwrap();
    assert_eq!(gn_z11.position, CHART_EXTENT);
    assert_eq!(gn_z11.value_label, "13.4B ly");
    assert_eq!(gn_z11.category, Category::Galaxy);

    let positions: Vec<f64> = items.iter().map(|item| item.position).collect();
    assert!(positions.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn chart_axis_follows_dataset_changes() {
    let mut chart = ScaleChart::new(default_scale_entries(), CHART_EXTENT).unwrap();
    let nearby = vec![
        ScaleEntry::new("Proxima Centauri", 4.2, Category::Star).unwrap(),
        ScaleEntry::new("Betelgeuse", 642.0, Category::Star).unwrap(),
    ];
    chart.replace_entries(nearby).unwrap();
    assert_eq!(chart.axis().domain(), (1.0, 642.0));
    assert_eq!(chart.items()[1].position, CHART_EXTENT);

    assert_eq!(
        chart.replace_entries(Vec::new()),
        Err(ScaleError::EmptyCatalogue)
    );
    assert_eq!(chart.entries().len(), 2, "failed swap keeps previous dataset");
}

#[test]
fn chart_needs_an_entry_beyond_the_floor() {
    let sub_light_year = |max: f64| {
        vec![
            ScaleEntry::new("Inner marker", 0.8, Category::Star).unwrap(),
            ScaleEntry::new("Edge", max, Category::Star).unwrap(),
        ]
    };
    assert_eq!(
        ScaleChart::new(sub_light_year(1.0), CHART_EXTENT).unwrap_err(),
        ScaleError::CatalogueBelowFloor {
            floor: 1.0,
            max: 1.0
        }
    );
    assert_eq!(
        ScaleChart::new(sub_light_year(0.5), CHART_EXTENT).unwrap_err(),
        ScaleError::CatalogueBelowFloor {
            floor: 1.0,
            max: 0.8
        }
    );

    let chart = ScaleChart::new(sub_light_year(4.2), CHART_EXTENT).unwrap();
    let positions: Vec<f64> = chart.items().iter().map(|item| item.position).collect();
    assert_eq!(positions, [0.0, CHART_EXTENT]);
}

#[test]
fn scale_entries_must_be_positive() {
    assert!(ScaleEntry::new("Nowhere", 0.0, Category::Star).is_err());
    assert!(ScaleEntry::new("Nowhere", -1.0, Category::Galaxy).is_err());
}

#[test]
fn hr_diagram_puts_hot_bright_stars_top_left() {
    let diagram = HrDiagram::new(default_star_classes(), 600.0, 380.0).unwrap();
    let points = diagram.points();
    let o_type = points.iter().find(|p| p.spectral_type == "O").unwrap();
    let m_type = points.iter().find(|p| p.spectral_type == "M").unwrap();
    assert!(o_type.x < m_type.x, "hotter stars sit further left");
    assert!(o_type.y < m_type.y, "brighter stars sit higher");

    assert_eq!(diagram.project(50_000.0, 1.0e6).unwrap(), (0.0, 0.0));
    assert_eq!(diagram.project(2_000.0, 1.0e-4).unwrap(), (600.0, 380.0));

    let curve = diagram.main_sequence();
    assert_eq!(curve.len(), 7);
    assert!(curve.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
}

#[test]
fn luminosity_ticks_call_out_the_sun() {
    assert_eq!(format_luminosity_tick(1.0), "1 (Sun)");
    assert_eq!(format_luminosity_tick(100.0), "100");
    assert_eq!(format_luminosity_tick(0.001), "0.001");
}

#[test]
fn display_rows_match_widget_panels() {
    let cepheid = DistanceResult::from(
        cepheid::evaluate(&CepheidInput {
            period_days: 10.0,
            apparent_magnitude: 15.0,
        })
        .unwrap(),
    );
    let values: Vec<String> = display_rows(&cepheid).into_iter().map(|r| r.value).collect();
    assert_eq!(values, ["-6.48", "197,697", "644,492"]);

    let redshift = DistanceResult::from(
        redshift::evaluate(&RedshiftInput {
            redshift: 0.5,
            hubble_constant_km_s_mpc: 70.0,
        })
        .unwrap(),
    );
    let values: Vec<String> = display_rows(&redshift).into_iter().map(|r| r.value).collect();
    assert_eq!(values, ["115,305 km/s", "1,647.21", "5,370", "2,353.16"]);

    let edge_on = DistanceResult::from(parallax::evaluate(&ParallaxInput::new(0.0)).unwrap());
    let values: Vec<String> = display_rows(&edge_on).into_iter().map(|r| r.value).collect();
    assert_eq!(values, ["0.00", "∞"]);

    let quarter = DistanceResult::from(parallax::evaluate(&ParallaxInput::new(0.25)).unwrap());
    let values: Vec<String> = display_rows(&quarter).into_iter().map(|r| r.value).collect();
    assert_eq!(values, ["0.76", "1.3"]);
}
