// crates/streetfind-core/src/geocoder/http.rs
#![cfg(feature = "http")]

use super::raw::parse_matches;
use super::{Geocoder, StreetRequest};
use crate::config::SearchConfig;
use crate::error::GeocodeError;
use crate::model::RawMatch;
use reqwest::blocking::Client;

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Transport(Box::new(err))
    }
}

/// Blocking client for the address-search endpoint.
///
/// One `GET` per call, no retries, transport default timeout.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    client: Client,
    endpoint: String,
}

impl HttpGeocoder {
    pub fn new(config: &SearchConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing client (shared connection pool, custom TLS, ...).
    pub fn with_client(client: Client, config: &SearchConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Geocoder for HttpGeocoder {
    fn search_streets(&self, request: &StreetRequest) -> Result<Vec<RawMatch>, GeocodeError> {
        let params = request.query_params();
        tracing::debug!(endpoint = %self.endpoint, ?params, "sending street search");

        let response = self.client.get(&self.endpoint).query(&params).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let matches = parse_matches(&body)?;
        tracing::debug!(features = matches.len(), "street search answered");
        Ok(matches)
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves exactly one canned response and hands back the request line.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/search/", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            request_line
        });

        (endpoint, handle)
    }

    fn geocoder_for(endpoint: String) -> HttpGeocoder {
        let config = SearchConfig {
            endpoint,
            ..SearchConfig::default()
        };
        let client = Client::builder().no_proxy().build().unwrap();
        HttpGeocoder::with_client(client, &config)
    }

    fn victor_hugo() -> StreetRequest {
        StreetRequest::new(&SearchConfig::default(), "rue Victor Hugo".into(), None)
    }

    #[test]
    fn non_success_status_is_reported() {
        let (endpoint, server) = serve_once("503 Service Unavailable", "{}");
        let err = geocoder_for(endpoint)
            .search_streets(&victor_hugo())
            .unwrap_err();
        assert!(matches!(err, GeocodeError::Status(503)), "{err:?}");
        server.join().unwrap();
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let (endpoint, server) = serve_once("200 OK", "<html>maintenance</html>");
        let err = geocoder_for(endpoint)
            .search_streets(&victor_hugo())
            .unwrap_err();
        assert!(matches!(err, GeocodeError::Json(_)), "{err:?}");
        server.join().unwrap();
    }

    #[test]
    fn query_string_reaches_the_wire() {
        let body = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"Point","coordinates":[4.8357,45.764]},
             "properties":{"type":"street","name":"Rue Victor Hugo","city":"Lyon"}}]}"#;
        let (endpoint, server) = serve_once("200 OK", body);

        let matches = geocoder_for(endpoint)
            .search_streets(&victor_hugo())
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].city.as_deref(), Some("Lyon"));

        let request_line = server.join().unwrap();
        assert!(request_line.starts_with("GET /search/?"), "{request_line}");
        for part in ["q=rue+Victor+Hugo", "index=address", "limit=50", "type=street"] {
            assert!(request_line.contains(part), "{part} missing from {request_line}");
        }
        assert!(!request_line.contains("lat="));
    }
}
