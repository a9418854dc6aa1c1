//! Browser `fetch` wrappers.

use flate2::read::GzDecoder;
use std::io::Read;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Why a startup resource could not be loaded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The response body could not be read
    #[error("could not read the body of {url}: {message}")]
    Body { url: String, message: String },

    /// The body arrived but is not what was expected
    #[error("could not decode {what}: {message}")]
    Decode { what: String, message: String },
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

async fn fetch_response(url: &str) -> Result<Response, LoadError> {
    let network = |message: String| LoadError::Network {
        url: url.to_string(),
        message,
    };
    let window = web_sys::window().ok_or_else(|| network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| network(js_message(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| network("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let body = |message: String| LoadError::Body {
        url: url.to_string(),
        message,
    };
    let response = fetch_response(url).await?;
    let promise = response.text().map_err(|e| body(js_message(&e)))?;
    let text = JsFuture::from(promise).await.map_err(|e| body(js_message(&e)))?;
    text.as_string()
        .ok_or_else(|| body("body is not text".to_string()))
}

/// GET `url` and return the raw body.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let body = |message: String| LoadError::Body {
        url: url.to_string(),
        message,
    };
    let response = fetch_response(url).await?;
    let promise = response.array_buffer().map_err(|e| body(js_message(&e)))?;
    let buffer = JsFuture::from(promise).await.map_err(|e| body(js_message(&e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Decompress gzip bytes into UTF-8 text.
pub fn gunzip_text(bytes: &[u8]) -> Result<String, LoadError> {
    let mut text = String::new();
    GzDecoder::new(bytes)
        .read_to_string(&mut text)
        .map_err(|e| LoadError::Decode {
            what: "gzip data".to_string(),
            message: e.to_string(),
        })?;
    Ok(text)
}

/// Fetch a CSV, decompressing it when the URL ends in `.gz`.
pub async fn fetch_csv(url: &str) -> Result<String, LoadError> {
    if url.ends_with(".gz") {
        let bytes = fetch_bytes(url).await?;
        gunzip_text(&bytes)
    } else {
        fetch_text(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn gunzip_round_trip() {
        let csv = "fips,county,state,year\n01001,Autauga,Alabama,2024\n";
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(csv.as_bytes()).unwrap();
        let bytes = encoder.finish().unwrap();
        assert_eq!(gunzip_text(&bytes).unwrap(), csv);
    }

    #[test]
    fn gunzip_rejects_plain_text() {
        let err = gunzip_text(b"fips,county").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn error_messages_name_the_resource() {
        let err = LoadError::HttpStatus {
            url: "data/county_health_data.csv".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "data/county_health_data.csv returned HTTP 404");
    }
}
