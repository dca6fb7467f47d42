//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Path that stands for stdout on the command line.
pub const STDOUT_PATH: &str = "-";

/// Whether `path` names stdout rather than a file.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_PATH
}

/// Buffered writer for an export target, creating missing parent directories.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdout(path) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            tracing::debug!(dir = %dir.display(), "creating export directory");
            fs::create_dir_all(dir)?;
        }
        _ => {}
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

pub mod snapshot {
    use std::io::{self, Write};
    use std::path::Path;

    use cosmic_session::ResultsSnapshot;
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::writer_for_path;

    #[derive(Serialize)]
    struct SnapshotEnvelope<'a> {
        generated_at: String,
        version: &'static str,
        widgets: &'a [ResultsSnapshot],
    }

    /// Write widget snapshots as pretty JSON.
    pub fn write_json_to(writer: &mut dyn Write, snapshots: &[ResultsSnapshot]) -> io::Result<()> {
        let envelope = SnapshotEnvelope {
            generated_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            widgets: snapshots,
        };
        to_writer_pretty(&mut *writer, &envelope)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Write widget snapshots to `path` (`-` for stdout).
    pub fn write_json(path: &Path, snapshots: &[ResultsSnapshot]) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        write_json_to(&mut *writer, snapshots)?;
        tracing::debug!(path = %path.display(), count = snapshots.len(), "wrote snapshot JSON");
        Ok(())
    }
}

pub mod chart {
    use std::io::{self, Write};
    use std::path::Path;

    use cosmic_scale::{ChartItem, HrPoint};

    use super::writer_for_path;

    const SCALE_HEADER: [&str; 5] = ["label", "category", "distance_ly", "position", "value_label"];
    const HR_HEADER: [&str; 5] = ["spectral_type", "temperature_k", "luminosity_solar", "x", "y"];

    /// Write distance-scale chart rows as CSV.
    pub fn write_scale_csv(writer: &mut dyn Write, items: &[ChartItem]) -> io::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(SCALE_HEADER)?;
        for item in items {
            out.write_record([
                item.label.clone(),
                item.category.to_string(),
                item.magnitude.to_string(),
                format!("{:.3}", item.position),
                item.value_label.clone(),
            ])?;
        }
        out.flush()
    }

    /// Write HR-diagram points as CSV.
    pub fn write_hr_csv(writer: &mut dyn Write, points: &[HrPoint]) -> io::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(HR_HEADER)?;
        for point in points {
            out.write_record([
                point.spectral_type.clone(),
                point.temperature_k.to_string(),
                point.luminosity_solar.to_string(),
                format!("{:.3}", point.x),
                format!("{:.3}", point.y),
            ])?;
        }
        out.flush()
    }

    /// Write distance-scale chart rows to `path` (`-` for stdout).
    pub fn write_scale_csv_to_path(path: &Path, items: &[ChartItem]) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        write_scale_csv(&mut *writer, items)?;
        tracing::debug!(path = %path.display(), rows = items.len(), "wrote scale chart CSV");
        Ok(())
    }

    /// Write HR-diagram points to `path` (`-` for stdout).
    pub fn write_hr_csv_to_path(path: &Path, points: &[HrPoint]) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        write_hr_csv(&mut *writer, points)?;
        tracing::debug!(path = %path.display(), rows = points.len(), "wrote HR diagram CSV");
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::is_stdout;

    #[test]
    fn dash_means_stdout() {
        assert!(is_stdout(Path::new("-")));
        assert!(!is_stdout(Path::new("./-")));
        assert!(!is_stdout(Path::new("scale.csv")));
    }
}
