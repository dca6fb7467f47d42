use cosmic_distance_ladder::config::WidgetDefaults;
use cosmic_distance_ladder::export::{chart, snapshot};
use cosmic_distance_ladder::scale::catalogue::{default_scale_entries, default_star_classes};
use cosmic_distance_ladder::scale::{Category, HrDiagram, ScaleChart, ScaleEntry};
use cosmic_distance_ladder::session::{InputField, SessionState};
use serde_json::Value;

#[test]
fn scale_csv_reads_back() {
    let chart = ScaleChart::new(default_scale_entries(), 800.0).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("scale.csv");
    chart::write_scale_csv_to_path(&path, &chart.items()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["label", "category", "distance_ly", "position", "value_label"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 7);
    assert_eq!(&rows[5][1], "Galaxy Cluster");
    assert_eq!(&rows[6][0], "GN-z11 (Most distant galaxy)");
    assert_eq!(&rows[6][3], "800.000");
    assert_eq!(&rows[6][4], "13.4B ly");
    let distance: f64 = rows[3][2].parse().unwrap();
    assert_eq!(distance, 158_000.0);
}

#[test]
fn hr_csv_lists_every_class() {
    let diagram = HrDiagram::new(default_star_classes(), 600.0, 380.0).unwrap();
    let mut buffer = Vec::new();
    chart::write_hr_csv(&mut buffer, &diagram.points()).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[9][0], "White Dwarf");
    let x: f64 = rows[0][3].parse().unwrap();
    let y: f64 = rows[0][4].parse().unwrap();
    assert!((0.0..=600.0).contains(&x));
    assert!((0.0..=380.0).contains(&y));
}

#[test]
fn snapshot_json_has_envelope_and_results() {
    let defaults = WidgetDefaults::default();
    let mut parallax = SessionState::parallax(&defaults).unwrap();
    parallax.set_field(InputField::OrbitalPhase, 0.5).unwrap();
    let cepheid = SessionState::cepheid(&defaults).unwrap();

    let mut buffer = Vec::new();
    snapshot::write_json_to(&mut buffer, &[parallax.snapshot(), cepheid.snapshot()]).unwrap();
    let json: Value = serde_json::from_slice(&buffer).unwrap();

    assert!(json["generated_at"].is_string());
    assert!(json["version"].is_string());
    let widgets = json["widgets"].as_array().unwrap();
    assert_eq!(widgets.len(), 2);

    assert_eq!(widgets[0]["kind"], "parallax");
    assert_eq!(widgets[0]["revision"], 1);
    assert_eq!(widgets[0]["result"]["model"], "parallax");
    assert_eq!(widgets[0]["result"]["distance_parsecs"], "unbounded");
    assert_eq!(widgets[0]["rows"][1]["value"], "∞");

    assert_eq!(widgets[1]["kind"], "cepheid");
    assert_eq!(widgets[1]["input"]["period_days"], 10.0);
    assert_eq!(widgets[1]["rows"][1]["value"], "197,697");
}

#[test]
fn snapshot_json_writes_to_nested_path() {
    let session = SessionState::redshift(&WidgetDefaults::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("redshift.json");
    snapshot::write_json(&path, &[session.snapshot()]).unwrap();

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["widgets"][0]["result"]["regime"], "relativistic");
}

#[test]
fn scale_csv_quotes_awkward_labels() {
    let label = "Virgo, \"Cluster\"\r\nNorth";
    let entries = vec![
        ScaleEntry::new(label, 54_000_000.0, Category::GalaxyCluster).unwrap(),
        ScaleEntry::new("Sirius", 8.6, Category::Star).unwrap(),
    ];
    let chart = ScaleChart::new(entries, 800.0).unwrap();
    let mut buffer = Vec::new();
    chart::write_scale_csv(&mut buffer, &chart.items()).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], label);
    assert_eq!(&rows[0][1], "Galaxy Cluster");
    assert_eq!(&rows[1][0], "Sirius");
}
