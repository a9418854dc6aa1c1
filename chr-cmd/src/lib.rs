//! Command implementations for the CHR CLI.
//!
//! Provides subcommands for checking a health CSV (coverage, states,
//! statistics, correlations), generating sample data, downloading the
//! boundary topology and rendering a static map.

use chr_core::Metric;
use chr_view::state::{DEFAULT_METRIC, DEFAULT_YEAR};
use clap::Subcommand;

pub mod geo;
pub mod input;
pub mod render;
pub mod report;
pub mod sample;

#[derive(Subcommand)]
pub enum Command {
    /// Per-year row counts and per-metric coverage
    Coverage {
        /// Health CSV, plain or .gz
        #[arg(short = 'd', long)]
        data: String,
    },

    /// Mean, median, range and count of one metric in one year
    Summary {
        /// Health CSV, plain or .gz
        #[arg(short = 'd', long)]
        data: String,

        /// Metric key, e.g. adult_obesity
        #[arg(short = 'm', long, default_value = DEFAULT_METRIC.key(), value_parser = input::parse_metric)]
        metric: Metric,

        #[arg(short = 'y', long, default_value_t = DEFAULT_YEAR)]
        year: i32,
    },

    /// States and their county counts in the latest year
    States {
        /// Health CSV, plain or .gz
        #[arg(short = 'd', long)]
        data: String,
    },

    /// Pearson correlations between all metrics in one year
    Correlate {
        /// Health CSV, plain or .gz
        #[arg(short = 'd', long)]
        data: String,

        #[arg(short = 'y', long, default_value_t = DEFAULT_YEAR)]
        year: i32,
    },

    /// Write the generated demo dataset as a health CSV
    Sample {
        /// Output path for the CSV
        #[arg(short = 'o', long)]
        output: String,

        /// RNG seed; the same seed gives the same data
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Download the county/state boundary topology
    FetchGeo {
        /// Output path for the TopoJSON file
        #[arg(short = 'o', long)]
        output: String,

        #[arg(long, default_value = geo::GEOGRAPHY_URL)]
        url: String,
    },

    /// Render a static SVG choropleth with its legend
    Render {
        /// Health CSV, plain or .gz
        #[arg(short = 'd', long)]
        data: String,

        /// TopoJSON with `counties` and `states` objects
        #[arg(short = 'g', long)]
        geo: String,

        /// Metric key, e.g. adult_obesity
        #[arg(short = 'm', long, default_value = DEFAULT_METRIC.key(), value_parser = input::parse_metric)]
        metric: Metric,

        #[arg(short = 'y', long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        /// Output path for the SVG
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Coverage { data } => {
            let db = input::open_database(&data)?;
            print!("{}", report::coverage_report(&db)?);
            Ok(())
        }
        Command::Summary { data, metric, year } => {
            let db = input::open_database(&data)?;
            println!("{}", report::summary_report(&db, metric, year)?);
            Ok(())
        }
        Command::States { data } => {
            let db = input::open_database(&data)?;
            print!("{}", report::states_report(&db)?);
            Ok(())
        }
        Command::Correlate { data, year } => {
            let db = input::open_database(&data)?;
            print!("{}", report::correlate_report(&db, year)?);
            Ok(())
        }
        Command::Sample { output, seed } => sample::run_sample(&output, seed),
        Command::FetchGeo { output, url } => geo::run_fetch_geo(&url, &output).await,
        Command::Render {
            data,
            geo,
            metric,
            year,
            output,
        } => render::run_render(&data, &geo, metric, year, &output),
    }
}
