use std::error::Error;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rdkafka::client::OAuthToken;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use rdkafka::ClientContext;
use tracing::debug;

use crate::auth::TokenProvider;

/// Submits messages to the broker. `send` enqueues one message and waits for
/// its delivery result; `flush` blocks until everything handed to the client
/// has reached the transport.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<()>;
    async fn flush(&self) -> Result<()>;
}

/// Client context that sources SASL/OAUTHBEARER tokens from a
/// [`TokenProvider`], so the client depends on the capability rather than a
/// concrete signer.
pub struct IamClientContext<P> {
    provider: P,
}

impl<P: TokenProvider> IamClientContext<P> {
    pub fn new(provider: P) -> Self {
        IamClientContext { provider }
    }
}

impl<P: TokenProvider + 'static> ClientContext for IamClientContext<P> {
    const ENABLE_REFRESH_OAUTH_TOKEN: bool = true;

    fn generate_oauth_token(
        &self,
        _oauthbearer_config: Option<&str>,
    ) -> Result<OAuthToken, Box<dyn Error>> {
        let token = self.provider.current_token()?;
        Ok(OAuthToken {
            token: token.value,
            principal_name: "".to_string(),
            lifetime_ms: token.expires_at_ms,
        })
    }
}

/// Kafka producer publishing over an encrypted, token-authenticated channel.
pub struct KafkaPublisher<P: TokenProvider + 'static> {
    producer: FutureProducer<IamClientContext<P>>,
}

impl<P: TokenProvider + 'static> KafkaPublisher<P> {
    pub fn new(bootstrap_servers: &str, provider: P) -> Result<Self> {
        let producer = ClientConfig::new()
            .set("bootstrap.servers", bootstrap_servers)
            .set("security.protocol", "SASL_SSL")
            .set("sasl.mechanisms", "OAUTHBEARER")
            .create_with_context(IamClientContext::new(provider))?;

        Ok(KafkaPublisher { producer })
    }
}

#[async_trait]
impl<P: TokenProvider + 'static> Publisher for KafkaPublisher<P> {
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let record = FutureRecord::<(), _>::to(topic).payload(payload);

        match self.producer.send(record, Duration::from_secs(0)).await {
            Ok(delivery) => {
                debug!("message delivered: {:?}", delivery);
                Ok(())
            }
            Err((e, _)) => Err(e.into()),
        }
    }

    async fn flush(&self) -> Result<()> {
        self.producer.flush(Timeout::Never)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use anyhow::anyhow;

    use super::*;
    use crate::auth::BearerToken;

    struct FixedTokenProvider;

    impl TokenProvider for FixedTokenProvider {
        fn current_token(&self) -> Result<BearerToken> {
            Ok(BearerToken {
                value: "fixed-token".to_string(),
                expires_at_ms: 1_700_000_000_000,
            })
        }
    }

    struct FailingTokenProvider;

    impl TokenProvider for FailingTokenProvider {
        fn current_token(&self) -> Result<BearerToken> {
            Err(anyhow!("no credentials available"))
        }
    }

    #[test]
    fn test_oauth_token_from_provider() {
        let context = IamClientContext::new(FixedTokenProvider);
        let token = context
            .generate_oauth_token(None)
            .expect("token generation should succeed");

        assert_eq!(token.token, "fixed-token");
        assert_eq!(token.lifetime_ms, 1_700_000_000_000);
        assert_eq!(token.principal_name, "");
    }

    #[test]
    fn test_provider_errors_propagate() {
        let context = IamClientContext::new(FailingTokenProvider);
        let err = match context.generate_oauth_token(None) {
            Err(e) => e,
            Ok(_) => panic!("token generation should fail"),
        };

        assert!(err.to_string().contains("no credentials available"));
    }
}
