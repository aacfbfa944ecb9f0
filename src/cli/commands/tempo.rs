//! One-off tempo lookup.

use std::time::Duration;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::http;
use crate::tempo::{ProviderConfig, TempoQuery, TempoResolver, TempoResult};

/// Look up a track's BPM through the provider chain
pub fn cmd_bpm(
    rt: &Runtime,
    config: &Config,
    track: &str,
    artist: &str,
    timeout: Option<u64>,
) -> anyhow::Result<()> {
    rt.block_on(async {
        let mut providers = ProviderConfig::from_config(config);
        if let Some(secs) = timeout {
            providers.attempt_timeout = Duration::from_secs(secs.max(1));
        }

        let resolver = TempoResolver::from_config(
            &providers,
            http::build_client(providers.attempt_timeout)?,
        );
        let enabled: Vec<_> = resolver
            .provider_ids()
            .iter()
            .map(|id| id.as_str())
            .collect();
        tracing::debug!(providers = ?enabled, "Resolving tempo");

        let result = resolver.resolve(&TempoQuery::new(track, artist)).await;
        println!("{}", describe(&result));
        Ok(())
    })
}

/// One line for the terminal
fn describe(result: &TempoResult) -> String {
    match (result.bpm(), result.source()) {
        (Some(bpm), Some(source)) => format!("BPM: {} ({})", bpm, source),
        _ => "No tempo found".to_string(),
    }
}
