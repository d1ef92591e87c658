//! Blocking HTTP execution of parsed test blocks.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use std::time::Duration;
use tracing::{debug, error};

use restep_core::{parse_test_block, TestBlock, TestProcessor, TestRequest, TestResponse};

use crate::error::ExecError;

/// Name under which the processor registers itself.
pub const PROCESSOR_NAME: &str = "http";

/// Executor settings.
///
/// `insecure_tls` accepts any certificate chain and any hostname on the
/// client it configures. reqwest scopes the relaxation to that client, so it
/// does not leak into other HTTPS traffic in the process the way a global
/// trust override would. It exists for test environments with self-signed
/// endpoints; never enable it on production traffic paths.
///
/// `timeout` defaults to `None`: this layer imposes no deadline, and a hung
/// endpoint blocks the calling thread until the transport gives up. Callers
/// needing bounded latency set a timeout here or cancel at the call site.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub insecure_tls: bool,
    pub timeout: Option<Duration>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            insecure_tls: true,
            timeout: None,
        }
    }
}

/// Blocking `TestProcessor` speaking HTTP(S) through reqwest.
///
/// Each invocation builds a fresh client, runs one round trip and normalizes
/// the outcome; no state is shared between calls and no retries are made.
#[derive(Debug, Clone, Default)]
pub struct HttpTestProcessor {
    config: ExecutorConfig,
}

impl HttpTestProcessor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<Client, ExecError> {
        let mut builder = Client::builder().timeout(self.config.timeout);
        if self.config.insecure_tls {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        builder.build().map_err(ExecError::Setup)
    }

    fn run(&self, request: &TestRequest) -> Result<TestResponse, ExecError> {
        let client = self.build_client()?;

        if request.endpoint.contains("${") {
            return Err(ExecError::UnresolvedEndpoint(request.endpoint.clone()));
        }

        let block = parse_test_block(&request.test_block)?;
        let method = resolve_method(&block.operation)?;
        let builder = self.prepare(&client, method, &request.endpoint, &block);

        let response = builder.send().map_err(|source| ExecError::Transport {
            endpoint: request.endpoint.clone(),
            source,
        })?;
        normalize(response, &request.endpoint)
    }

    /// Assemble the outgoing request from the parsed block.
    ///
    /// Headers are appended in authored order; duplicate names keep whatever
    /// semantics reqwest gives them. A name or value the HTTP stack rejects
    /// is logged and skipped, like a malformed header line in the block.
    fn prepare(
        &self,
        client: &Client,
        method: Method,
        endpoint: &str,
        block: &TestBlock,
    ) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        for header in &block.headers {
            match (
                HeaderName::from_bytes(header.name.as_bytes()),
                HeaderValue::from_str(&header.value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.append(name, value);
                }
                _ => error!(header = %header, "header rejected by the HTTP stack, skipping"),
            }
        }
        if let Some(media) = block.media_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(media.as_str()));
        }

        let send_body = method == Method::POST || method == Method::PUT;
        let mut builder = client.request(method, endpoint).headers(headers);
        if send_body {
            builder = builder.body(block.body.clone().unwrap_or_default());
        }
        builder
    }
}

impl TestProcessor for HttpTestProcessor {
    fn name(&self) -> &str {
        PROCESSOR_NAME
    }

    fn execute_test(&self, request: &TestRequest) -> TestResponse {
        debug!(endpoint = %request.endpoint, "running HTTP test processor");
        match self.run(request) {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "test step produced no usable result");
                TestResponse::empty()
            }
        }
    }
}

/// Map the operation token onto the supported verb set, case-insensitively.
fn resolve_method(operation: &str) -> Result<Method, ExecError> {
    match operation.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "HEAD" => Ok(Method::HEAD),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        other => Err(ExecError::UnsupportedOperation(other.to_string())),
    }
}

/// Collapse a completed exchange into the uniform response record.
///
/// The status code is captured whatever it is; 4xx/5xx are real server
/// answers, not failures. An empty entity normalizes to `body = None`, so
/// HEAD responses carry only status and headers.
fn normalize(response: Response, endpoint: &str) -> Result<TestResponse, ExecError> {
    let status_code = response.status().as_u16();
    let response_headers = render_headers(response.headers());

    let text = response.text().map_err(|source| ExecError::Transport {
        endpoint: endpoint.to_string(),
        source,
    })?;
    let body = if text.is_empty() { None } else { Some(text) };

    debug!(status_code, "completed HTTP exchange");
    Ok(TestResponse {
        body,
        status_code: Some(status_code),
        response_headers: Some(response_headers),
    })
}

/// Render every response header name and value into one deterministic dump,
/// names in first-appearance order with their full value list:
/// `{content-type=[text/plain], set-cookie=[a=1, b=2]}`.
fn render_headers(headers: &HeaderMap) -> String {
    let mut out = String::from("{");
    for (i, name) in headers.keys().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let values: Vec<String> = headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();
        out.push_str(name.as_str());
        out.push_str("=[");
        out.push_str(&values.join(", "));
        out.push(']');
    }
    out.push('}');
    out
}
