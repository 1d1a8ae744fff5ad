//! Drive `RemoteFeedLoader` with the JSON test vectors in `test-vectors/`.
//!
//! Each case describes a simulated transport outcome and the expected
//! delivery. The stub client completes synchronously inside `get`.

use std::sync::{Arc, Mutex};

use feed_core::{
    FeedError, FeedImage, FeedLoadResult, FeedLoader, HttpClient, HttpClientResult,
    HttpCompletion, HttpResponse, RemoteFeedLoader, TransportError,
};
use url::Url;

struct StubClient {
    outcome: HttpClientResult,
}

impl HttpClient for StubClient {
    fn get(&self, _url: &Url, completion: HttpCompletion) {
        completion(self.outcome.clone());
    }
}

fn outcome(case: &serde_json::Value) -> HttpClientResult {
    if let Some(message) = case.get("simulated_transport_error") {
        return Err(TransportError::new(message.as_str().unwrap()));
    }
    let sim = &case["simulated_response"];
    Ok(HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap().as_bytes(),
    ))
}

fn expected_image(value: &serde_json::Value) -> FeedImage {
    FeedImage {
        id: value["id"].as_str().unwrap().parse().unwrap(),
        description: value.get("description").map(|v| v.as_str().unwrap().to_string()),
        location: value.get("location").map(|v| v.as_str().unwrap().to_string()),
        url: Url::parse(value["url"].as_str().unwrap()).unwrap(),
    }
}

fn expected(case: &serde_json::Value, name: &str) -> FeedLoadResult {
    if let Some(error) = case.get("expected_error") {
        return match error.as_str().unwrap() {
            "Connectivity" => Err(FeedError::Connectivity),
            "InvalidData" => Err(FeedError::InvalidData),
            other => panic!("{name}: unknown expected_error: {other}"),
        };
    }
    Ok(case["expected_result"]
        .as_array()
        .unwrap()
        .iter()
        .map(expected_image)
        .collect())
}

#[test]
fn feed_test_vectors() {
    let raw = include_str!("../../test-vectors/feed.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    let url = Url::parse("http://localhost:3000/feed").unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = Arc::new(StubClient {
            outcome: outcome(case),
        });
        let loader = RemoteFeedLoader::new(url.clone(), client);

        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        loader.load(Box::new(move |result| sink.lock().unwrap().push(result)));

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1, "{name}: exactly one delivery");
        assert_eq!(received[0], expected(case, name), "{name}: delivered result");
    }
}
