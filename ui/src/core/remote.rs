//! Client for the remote bloom processing service.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use thiserror::Error;

use super::config;
use super::upload::UploadedFile;
use crate::bloom::ProcessResult;

pub const LUT_FIELD: &str = "lut";
pub const DATA_FIELD: &str = "data";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    #[error("Selecciona archivo LUT XML y archivo .npz con datos.")]
    MissingFiles,
    #[error("Error del servidor: {status}")]
    Server { status: u16 },
    #[error("{0}")]
    Transport(String),
    #[error("respuesta inválida: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProcessError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProcessError::Decode(err.to_string())
        } else {
            ProcessError::Transport(err.to_string())
        }
    }
}

/// Both files must be selected before anything is sent.
pub fn require_pair<'a>(
    lut: &'a Option<UploadedFile>,
    data: &'a Option<UploadedFile>,
) -> Result<(&'a UploadedFile, &'a UploadedFile), ProcessError> {
    match (lut.as_ref(), data.as_ref()) {
        (Some(lut), Some(data)) => Ok((lut, data)),
        _ => Err(ProcessError::MissingFiles),
    }
}

pub fn ensure_success(status: u16) -> Result<(), ProcessError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ProcessError::Server { status })
    }
}

#[derive(Debug, Clone)]
pub struct ProcessClient {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for ProcessClient {
    fn default() -> Self {
        Self::new(config::get().endpoint.clone())
    }
}

impl ProcessClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the LUT and data files as one multipart `POST` and decode the reply.
    pub async fn submit(
        &self,
        lut: &UploadedFile,
        data: &UploadedFile,
    ) -> Result<ProcessResult, ProcessError> {
        let form = Form::new()
            .part(LUT_FIELD, file_part(lut))
            .part(DATA_FIELD, file_part(data));

        tracing::info!(
            endpoint = %self.endpoint,
            lut = %lut.name,
            data = %data.name,
            "submitting files for processing"
        );

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status().as_u16();
        ensure_success(status)?;

        let body: Value = response.json().await?;
        tracing::debug!(status, "processing response received");
        Ok(ProcessResult::from_json(&body))
    }
}

fn file_part(file: &UploadedFile) -> Part {
    Part::bytes(file.bytes.clone()).file_name(file.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_files_are_required() {
        let lut = Some(UploadedFile::new("lut.xml", b"<lut/>".to_vec()));
        let data = Some(UploadedFile::new("datos.npz", vec![0u8; 4]));

        assert_eq!(require_pair(&lut, &None), Err(ProcessError::MissingFiles));
        assert_eq!(require_pair(&None, &data), Err(ProcessError::MissingFiles));
        assert_eq!(require_pair(&None, &None), Err(ProcessError::MissingFiles));

        let (l, d) = require_pair(&lut, &data).expect("pair");
        assert_eq!(l.name, "lut.xml");
        assert_eq!(d.name, "datos.npz");
    }

    #[test]
    fn non_success_status_names_the_code() {
        assert!(ensure_success(200).is_ok());
        assert!(ensure_success(204).is_ok());

        let err = ensure_success(500).expect_err("500 is a failure");
        assert_eq!(err, ProcessError::Server { status: 500 });
        assert!(err.to_string().contains("500"));
        assert_eq!(
            ensure_success(404).map_err(|e| e.to_string()),
            Err("Error del servidor: 404".to_string())
        );
    }

    #[test]
    fn missing_files_message() {
        assert_eq!(
            ProcessError::MissingFiles.to_string(),
            "Selecciona archivo LUT XML y archivo .npz con datos."
        );
    }

    #[test]
    fn client_defaults_to_configured_endpoint() {
        let client = ProcessClient::default();
        assert_eq!(client.endpoint(), config::get().endpoint);
        assert_eq!(
            ProcessClient::new("http://example.test/process").endpoint(),
            "http://example.test/process"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod stub_server {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};
        use tokio::task::JoinHandle;

        /// Answer a single request with `status` and `body`; the handle yields
        /// the raw request as received.
        pub async fn serve_once(
            status: &'static str,
            body: &'static str,
        ) -> (String, JoinHandle<String>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            let url = format!("http://{}/process", listener.local_addr().expect("local addr"));

            let handle = tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.expect("accept");
                let request = read_request(&mut socket).await;
                let reply = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(reply.as_bytes()).await.expect("write reply");
                let _ = socket.shutdown().await;
                request
            });

            (url, handle)
        }

        async fn read_request(socket: &mut TcpStream) -> String {
            let mut raw = Vec::new();
            let mut chunk = [0u8; 4096];
            while !request_complete(&raw) {
                let read = socket.read(&mut chunk).await.expect("read request");
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..read]);
            }
            String::from_utf8_lossy(&raw).into_owned()
        }

        fn request_complete(raw: &[u8]) -> bool {
            let Some(split) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
                return false;
            };
            let head = String::from_utf8_lossy(&raw[..split]);
            let body = &raw[split + 4..];
            let length = head.lines().find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.trim().eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            });
            match length {
                Some(length) => body.len() >= length,
                None => body.ends_with(b"0\r\n\r\n"),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn sample_files() -> (UploadedFile, UploadedFile) {
        (
            UploadedFile::new("lut.xml", b"<lut>0.1 0.2</lut>".to_vec()),
            UploadedFile::new("datos.npz", b"PK-npz".to_vec()),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn server_error_names_the_status_and_both_files_are_sent() {
        let (url, server) = stub_server::serve_once("500 Internal Server Error", "").await;
        let (lut, data) = sample_files();

        let result = ProcessClient::new(url).submit(&lut, &data).await;
        assert_eq!(result, Err(ProcessError::Server { status: 500 }));
        assert_eq!(
            result.map_err(|err| err.to_string()),
            Err("Error del servidor: 500".to_string())
        );

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /process"));
        assert!(request.contains("multipart/form-data"));
        assert!(request.contains(r#"name="lut"; filename="lut.xml""#));
        assert!(request.contains(r#"name="data"; filename="datos.npz""#));
        assert!(request.contains("<lut>0.1 0.2</lut>"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn non_json_reply_is_a_decode_error() {
        let (url, server) = stub_server::serve_once("200 OK", "<html>oops</html>").await;
        let (lut, data) = sample_files();

        let result = ProcessClient::new(url).submit(&lut, &data).await;
        assert!(matches!(result, Err(ProcessError::Decode(_))), "got {result:?}");
        server.await.expect("server task");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn json_reply_is_decoded() {
        let body = r#"{"estadisticas_ndvi": {"promedio": 0.5, "maximo": 0.9, "minimo": 0.1, "desviacion_std": 0.2}}"#;
        let (url, server) = stub_server::serve_once("200 OK", body).await;
        let (lut, data) = sample_files();

        let result = ProcessClient::new(url).submit(&lut, &data).await.expect("decoded reply");
        let ndvi = result.ndvi.as_ref().expect("ndvi stats");
        assert_eq!(ndvi.mean, Some(0.5));
        assert_eq!(ndvi.min, Some(0.1));
        assert_eq!(result.chart_series().map(|series| series.len()), Some(5));
        server.await.expect("server task");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let url = format!("http://{}/process", listener.local_addr().expect("local addr"));
        drop(listener);
        let (lut, data) = sample_files();

        let result = ProcessClient::new(url).submit(&lut, &data).await;
        assert!(matches!(result, Err(ProcessError::Transport(_))), "got {result:?}");
    }
}
