//! Downloading the boundary topology.

use anyhow::Context;
use chr_geo::map::{COUNTIES_OBJECT, STATES_OBJECT};
use chr_geo::Topology;
use log::{info, warn};

/// U.S. counties and states topology, 1:10m.
pub const GEOGRAPHY_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/counties-10m.json";

/// Check that `json` is a topology with county features; returns their count.
pub fn check_topology(json: &str) -> anyhow::Result<usize> {
    let topology = Topology::from_json(json)?;
    let counties = topology.features(COUNTIES_OBJECT)?.len();
    if !topology.objects.contains_key(STATES_OBJECT) {
        warn!("Topology has no '{}' object; maps will have no state borders", STATES_OBJECT);
    }
    Ok(counties)
}

/// GET `url` once and save the body to `output` if it is a usable topology.
pub async fn run_fetch_geo(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching geography from {}", url);
    let body = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?
        .error_for_status()?
        .text()
        .await?;

    let counties = check_topology(&body).with_context(|| format!("{} is not a county topology", url))?;
    tokio::fs::write(output, &body)
        .await
        .with_context(|| format!("cannot write {}", output))?;
    info!("Saved {} counties ({} bytes) to {}", counties, body.len(), output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_county_features() {
        let json = r#"{
            "type": "Topology",
            "arcs": [[[0,0],[1,0],[1,1],[0,0]]],
            "objects": {
                "counties": {"type": "GeometryCollection", "geometries": [
                    {"type": "Polygon", "id": "06037", "arcs": [[0]]}
                ]},
                "states": {"type": "GeometryCollection", "geometries": []}
            }
        }"#;
        assert_eq!(check_topology(json).unwrap(), 1);
    }

    #[test]
    fn rejects_an_html_error_page() {
        assert!(check_topology("<html>rate limited</html>").is_err());
    }
}
