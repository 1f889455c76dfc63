use std::sync::Arc;

use termoj_webclient::mock::ScriptedTransport;
use termoj_webclient::OjClient;

/// A client wired to a fresh scripted transport.
pub fn client() -> (Arc<ScriptedTransport>, OjClient) {
    let transport = Arc::new(ScriptedTransport::new());
    let cli = OjClient::with_transport(transport.clone());
    (transport, cli)
}

#[allow(dead_code)]
pub fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
