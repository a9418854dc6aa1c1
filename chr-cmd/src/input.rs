//! Reading health CSVs from disk.

use anyhow::Context;
use chr_core::Metric;
use chr_db::Database;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::Read;

/// Read a text file, gunzipping it when the path ends in `.gz`.
pub fn read_data(path: &str) -> anyhow::Result<String> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
    let mut text = String::new();
    if path.ends_with(".gz") {
        GzDecoder::new(file)
            .read_to_string(&mut text)
            .with_context(|| format!("cannot decompress {}", path))?;
    } else {
        let mut file = file;
        file.read_to_string(&mut text)
            .with_context(|| format!("cannot read {}", path))?;
    }
    Ok(text)
}

/// Load a health CSV into a fresh in-memory database.
pub fn open_database(path: &str) -> anyhow::Result<Database> {
    let csv_data = read_data(path)?;
    let db = Database::new()?;
    let rows = db
        .load_health_csv(&csv_data)
        .with_context(|| format!("cannot parse {}", path))?;
    info!("[chr] {}: {} county-year records", path, rows);
    Ok(db)
}

/// `clap` parser for metric keys.
pub fn parse_metric(key: &str) -> Result<Metric, String> {
    Metric::from_key(key).ok_or_else(|| {
        let keys: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
        format!("unknown metric `{}`; expected one of: {}", key, keys.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "fips,county,state,year,life_expectancy\n06037,Los Angeles,California,2024,81.4\n";

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("chr-cmd-{}-{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn reads_plain_and_gzipped_csv() {
        let plain = temp_path("input.csv");
        std::fs::write(&plain, CSV).unwrap();

        let gz = temp_path("input.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_data(&plain).unwrap(), CSV);
        assert_eq!(read_data(&gz).unwrap(), CSV);

        let db = open_database(&gz).unwrap();
        assert_eq!(db.record_count().unwrap(), 1);

        std::fs::remove_file(plain).unwrap();
        std::fs::remove_file(gz).unwrap();
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_data("/nonexistent/health.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/health.csv"));
    }

    #[test]
    fn metric_keys_parse() {
        assert_eq!(parse_metric("median_income"), Ok(Metric::MedianIncome));
        let err = parse_metric("obesity").unwrap_err();
        assert!(err.contains("adult_obesity"));
    }
}
