//! The assistant: one raw utterance in, one reply out.
//!
//! Every call first loads the directory cache, so a call may trigger
//! one concurrent fetch pair against the hospital API. Matching itself
//! is pure over the snapshot — rule misses become the fallback reply,
//! never an error; only a failed directory load propagates.

use std::sync::Arc;

use crate::cache::{Clock, DirectoryCache, SystemClock};
use crate::config::AssistantConfig;
use crate::directory::{DirectoryApi, DirectoryError, DirectoryProvider};
use crate::reply::BotReply;
use crate::rules;

/// Errors surfaced to the UI boundary. The caller is expected to show
/// a generic message and retry by re-invoking `reply`.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Failed to load the hospital directory: {0}")]
    Directory(#[from] DirectoryError),
}

/// Rule-based chat assistant over the hospital directory.
pub struct Assistant {
    cache: DirectoryCache,
}

impl Assistant {
    /// Production assistant against the configured hospital API.
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_provider(Arc::new(DirectoryApi::from_config(config)), config)
    }

    /// Assistant with an injected directory source and the system clock.
    pub fn with_provider(provider: Arc<dyn DirectoryProvider>, config: &AssistantConfig) -> Self {
        Self::with_parts(provider, Arc::new(SystemClock), config)
    }

    /// Fully injected construction, used by tests for a fake clock.
    pub fn with_parts(
        provider: Arc<dyn DirectoryProvider>,
        clock: Arc<dyn Clock>,
        config: &AssistantConfig,
    ) -> Self {
        Self {
            cache: DirectoryCache::new(provider, clock, config.cache_ttl),
        }
    }

    /// Map one raw utterance to exactly one reply.
    pub async fn reply(&self, raw: &str) -> Result<BotReply, AssistantError> {
        let snapshot = self.cache.load().await?;
        let normalized = rules::normalize(raw);
        let reply = rules::reply_for(&normalized, &snapshot.departments, &snapshot.doctors);
        tracing::debug!(input = %normalized, shape = reply_shape(&reply), "resolved reply");
        Ok(reply)
    }
}

fn reply_shape(reply: &BotReply) -> &'static str {
    match reply {
        BotReply::Text { .. } => "text",
        BotReply::Departments { .. } => "departments",
        BotReply::Doctors { .. } => "doctors",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::messages::ReplyCopy;
    use crate::models::{Department, Doctor};

    struct CannedProvider {
        departments: Vec<Department>,
        doctors: Vec<Doctor>,
        fetch_pairs: AtomicUsize,
    }

    impl CannedProvider {
        fn hospital() -> Arc<Self> {
            Arc::new(Self {
                departments: vec![
                    Department {
                        id: 1,
                        name: "Cardiology".into(),
                    },
                    Department {
                        id: 2,
                        name: "Dermatology".into(),
                    },
                ],
                doctors: vec![
                    Doctor {
                        id: 10,
                        name: "Dr. Mehta".into(),
                        department: 1,
                        start_time: Some("09:00:00".into()),
                        end_time: Some("17:00:00".into()),
                        photo: None,
                    },
                    Doctor {
                        id: 11,
                        name: "Dr. Iyer".into(),
                        department: 2,
                        start_time: None,
                        end_time: None,
                        photo: None,
                    },
                ],
                fetch_pairs: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DirectoryProvider for CannedProvider {
        async fn fetch_departments(&self) -> Result<Vec<Department>, DirectoryError> {
            self.fetch_pairs.fetch_add(1, Ordering::SeqCst);
            Ok(self.departments.clone())
        }

        async fn fetch_doctors(&self) -> Result<Vec<Doctor>, DirectoryError> {
            Ok(self.doctors.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl DirectoryProvider for FailingProvider {
        async fn fetch_departments(&self) -> Result<Vec<Department>, DirectoryError> {
            Err(DirectoryError::Connection("https://example.test".into()))
        }

        async fn fetch_doctors(&self) -> Result<Vec<Doctor>, DirectoryError> {
            Err(DirectoryError::Connection("https://example.test".into()))
        }
    }

    fn assistant(provider: Arc<CannedProvider>) -> Assistant {
        Assistant::with_provider(provider, &AssistantConfig::default())
    }

    #[tokio::test]
    async fn greeting_end_to_end() {
        let bot = assistant(CannedProvider::hospital());
        let reply = bot.reply(" Hey").await.unwrap();
        assert_eq!(reply, BotReply::text(ReplyCopy::GREETING));
    }

    #[tokio::test]
    async fn symptom_query_returns_filtered_doctors() {
        let bot = assistant(CannedProvider::hospital());
        let reply = bot.reply("I have heart pain").await.unwrap();
        match reply {
            BotReply::Doctors { text, doctors } => {
                assert_eq!(text.as_deref(), Some("Doctors available in Cardiology:"));
                assert_eq!(doctors.len(), 1);
                assert_eq!(doctors[0].id, 10);
            }
            other => panic!("Expected a doctors reply, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn consecutive_replies_share_one_fetch_pair() {
        let provider = CannedProvider::hospital();
        let bot = assistant(provider.clone());

        bot.reply("hi").await.unwrap();
        bot.reply("departments").await.unwrap();
        bot.reply("skin rash").await.unwrap();

        assert_eq!(provider.fetch_pairs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn elapsed_ttl_triggers_a_new_fetch_pair() {
        use std::sync::atomic::AtomicI64;

        struct FakeClock(AtomicI64);
        impl Clock for FakeClock {
            fn now_ms(&self) -> i64 {
                self.0.load(Ordering::SeqCst)
            }
        }

        let provider = CannedProvider::hospital();
        let clock = Arc::new(FakeClock(AtomicI64::new(0)));
        let bot = Assistant::with_parts(
            provider.clone(),
            clock.clone(),
            &AssistantConfig::default(),
        );

        bot.reply("hi").await.unwrap();
        clock.0.store(301_000, Ordering::SeqCst);
        bot.reply("hi").await.unwrap();

        assert_eq!(provider.fetch_pairs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn directory_failure_propagates() {
        let bot = Assistant::with_provider(Arc::new(FailingProvider), &AssistantConfig::default());
        let err = bot.reply("hi").await;
        assert!(matches!(
            err,
            Err(AssistantError::Directory(DirectoryError::Connection(_)))
        ));
    }
}
