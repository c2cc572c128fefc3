//! Local stand-in for the GIF search APIs

use std::sync::{Arc, Mutex};
use tiny_http::{Response, Server};

pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Start a server on an ephemeral port. `handler` maps the request path and
/// query to a status and JSON body. Every request URL is recorded.
pub fn serve<F>(handler: F) -> (String, RequestLog)
where
    F: Fn(&str) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", server.server_addr().to_ip().unwrap());
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let seen = log.clone();

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let url = request.url().to_string();
            seen.lock().unwrap().push(url.clone());
            let (status, body) = handler(&url);
            let response = Response::from_string(body).with_status_code(status).with_header(
                "Content-Type: application/json"
                    .parse::<tiny_http::Header>()
                    .unwrap(),
            );
            let _ = request.respond(response);
        }
    });

    (base_url, log)
}

/// Giphy search body with `n` results tagged by `tag`.
pub fn giphy_body(tag: &str, n: usize) -> String {
    let data: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":"{tag}-{i}","title":"{tag} {i}","images":{{"fixed_height":{{"url":"https://media.giphy.test/{tag}/{i}.gif"}}}}}}"#
            )
        })
        .collect();
    format!(r#"{{"data":[{}],"meta":{{"status":200}}}}"#, data.join(","))
}

/// Tenor search body with `n` results tagged by `tag`.
pub fn tenor_body(tag: &str, n: usize) -> String {
    let results: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":"{tag}-{i}","title":"","content_description":"{tag} {i}","media_formats":{{"gif":{{"url":"https://media.tenor.test/{tag}/{i}.gif"}}}}}}"#
            )
        })
        .collect();
    format!(r#"{{"results":[{}],"next":""}}"#, results.join(","))
}

/// Value of query parameter `name` in a recorded request URL.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let parsed = url::Url::parse(&format!("http://local{}", url)).ok()?;
    parsed
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
