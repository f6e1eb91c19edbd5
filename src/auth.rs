use anyhow::{anyhow, Result};
use aws_config::Region;
use aws_msk_iam_sasl_signer::generate_auth_token;
use tokio::runtime::Handle;

/// Region the MSK cluster authenticates against.
pub const TOKEN_REGION: &str = "us-east-1";

/// A short-lived bearer credential for the broker connection.
#[derive(Debug, Clone)]
pub struct BearerToken {
    pub value: String,
    /// Expiry in milliseconds since the Unix epoch.
    pub expires_at_ms: i64,
}

/// Produces the current bearer token for SASL/OAUTHBEARER authentication.
///
/// The publishing client invokes this for every connection it opens, so a
/// fresh token is signed once per invocation. Tests substitute a fixed-token
/// implementation to stay off the network.
pub trait TokenProvider: Send + Sync {
    fn current_token(&self) -> Result<BearerToken>;
}

/// Signs MSK IAM auth tokens using the default AWS credential chain.
pub struct MskTokenProvider {
    region: Region,
    runtime: Handle,
}

impl MskTokenProvider {
    /// The handle is used to drive the async signer from the Kafka client's
    /// callback threads, which run outside the Tokio runtime.
    pub fn new(runtime: Handle) -> Self {
        MskTokenProvider {
            region: Region::new(TOKEN_REGION),
            runtime,
        }
    }
}

impl TokenProvider for MskTokenProvider {
    fn current_token(&self) -> Result<BearerToken> {
        let (value, expires_at_ms) = self
            .runtime
            .block_on(generate_auth_token(self.region.clone()))
            .map_err(|e| anyhow!("failed to generate MSK auth token - {e}"))?;

        Ok(BearerToken {
            value,
            expires_at_ms,
        })
    }
}
