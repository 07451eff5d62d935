use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Result as ReqwestResult,
};
use std::time::Duration;

pub struct ClientConfig {
    pub timeout: Duration,
}

pub fn build(cfg: ClientConfig) -> ReqwestResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .timeout(cfg.timeout)
        .default_headers(headers)
        .build()
}
