use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::use_cases::prompts::horoscope_prompt;
use crate::application::{ChatClient, HoroscopeCache, RebelSummaryGenerator};
use crate::domain::{DomainError, HoroscopeParser, HoroscopeRecord, HoroscopeRequest};

/// Use case answering one horoscope request.
///
/// With `use_cache` set and a cached record for the sign, only the summary is
/// regenerated (rebel path). Otherwise the LLM is asked for a fresh horoscope,
/// which is parsed and replaces whatever was cached for the sign.
pub struct GetHoroscopeUseCase {
    chat_client: Arc<dyn ChatClient>,
    cache: Arc<dyn HoroscopeCache>,
    parser: HoroscopeParser,
    rebel: RebelSummaryGenerator,
}

impl GetHoroscopeUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, cache: Arc<dyn HoroscopeCache>) -> Self {
        Self {
            rebel: RebelSummaryGenerator::new(chat_client.clone()),
            chat_client,
            cache,
            parser: HoroscopeParser::new(),
        }
    }

    pub async fn execute(&self, request: HoroscopeRequest) -> Result<HoroscopeRecord, DomainError> {
        let sign = request.validated_sign()?;

        if request.use_cache() {
            if let Some(cached) = self.cache.get(sign).await? {
                return self.rebel_path(sign, cached).await;
            }
            debug!("No cached horoscope for {}, generating a fresh one", sign);
        }

        self.fresh_path(sign).await
    }

    async fn rebel_path(
        &self,
        sign: &str,
        cached: HoroscopeRecord,
    ) -> Result<HoroscopeRecord, DomainError> {
        info!("Generating rebel summary for {} from cache", sign);

        // The LLM call runs without holding the cache. If a fresh reading was
        // stored meanwhile it keeps its own summary, and the caller gets the
        // reading this summary was written for.
        let summary = self.rebel.generate(&cached).await;

        match self.cache.update_summary(sign, &cached, &summary).await? {
            Some(updated) => Ok(updated),
            None => {
                warn!("Cached horoscope for {} changed during rebel summary", sign);
                Ok(cached.with_summary(summary))
            }
        }
    }

    async fn fresh_path(&self, sign: &str) -> Result<HoroscopeRecord, DomainError> {
        info!("Requesting horoscope for sign: {}", sign);
        let start_time = Instant::now();

        let reply = self
            .chat_client
            .complete(&horoscope_prompt(sign))
            .await
            .map_err(|e| {
                warn!("Horoscope request for {} failed: {}", sign, e);
                e
            })?;
        debug!("Raw model reply for {}:\n{}", sign, reply);

        let record = self.parser.parse(&reply);
        debug!("Parsed horoscope for {}: {:?}", sign, record);

        self.cache.put(sign, record.clone()).await?;

        info!(
            "Horoscope for {} ready in {:.2}s",
            sign,
            start_time.elapsed().as_secs_f64()
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::connector::{InMemoryHoroscopeCache, MockChatClient};

    /// Holds every call until released, so a test can act mid-request.
    struct GatedChatClient {
        entered: Notify,
        release: Notify,
        reply: String,
    }

    impl GatedChatClient {
        fn new(reply: &str) -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl ChatClient for GatedChatClient {
        async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(self.reply.clone())
        }
    }

    const REPLY: &str = "Descrição: Júpiter abre caminhos.\nNúmero da Sorte: 9\nCor: Verde\nConselho: Aceite ajuda.\nResumindo: Dia promissor.";

    fn setup(
        replies: Vec<Result<String, DomainError>>,
    ) -> (GetHoroscopeUseCase, Arc<MockChatClient>, Arc<InMemoryHoroscopeCache>) {
        let client = Arc::new(MockChatClient::with_replies(replies));
        let cache = Arc::new(InMemoryHoroscopeCache::new());
        let use_case = GetHoroscopeUseCase::new(client.clone(), cache.clone());
        (use_case, client, cache)
    }

    #[tokio::test]
    async fn missing_sign_is_rejected_without_calling_llm() {
        let (use_case, client, _) = setup(vec![]);

        let err = use_case
            .execute(HoroscopeRequest::default().with_cache(true))
            .await
            .unwrap_err();

        assert!(err.is_invalid_input());
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn fresh_request_parses_and_caches() {
        let (use_case, client, cache) = setup(vec![Ok(REPLY.to_string())]);

        let record = use_case.execute(HoroscopeRequest::new("Touro")).await.unwrap();

        assert_eq!(record.description(), "Júpiter abre caminhos.");
        assert_eq!(record.lucky_number(), 9);
        assert_eq!(client.calls().len(), 1);
        assert!(client.calls()[0].contains("Touro"));
        assert_eq!(cache.get("Touro").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn cached_request_only_replaces_summary() {
        let (use_case, client, _) = setup(vec![
            Ok(REPLY.to_string()),
            Ok("Resumo: 9? Que bosta de número.".to_string()),
        ]);

        let fresh = use_case.execute(HoroscopeRequest::new("Touro")).await.unwrap();
        let rebel = use_case
            .execute(HoroscopeRequest::new("Touro").with_cache(true))
            .await
            .unwrap();

        assert_eq!(rebel.description(), fresh.description());
        assert_eq!(rebel.lucky_number(), fresh.lucky_number());
        assert_eq!(rebel.color(), fresh.color());
        assert_eq!(rebel.advice(), fresh.advice());
        assert_eq!(rebel.date(), fresh.date());
        assert_eq!(rebel.summary(), "9? Que bosta de número.");
        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test]
    async fn use_cache_without_entry_takes_fresh_path() {
        let (use_case, _, cache) = setup(vec![Ok(REPLY.to_string())]);

        let record = use_case
            .execute(HoroscopeRequest::new("Peixes").with_cache(true))
            .await
            .unwrap();

        assert_eq!(record.summary(), "Dia promissor.");
        assert!(cache.get("Peixes").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn cache_keys_are_case_sensitive() {
        let (use_case, client, _) = setup(vec![Ok(REPLY.to_string()), Ok(REPLY.to_string())]);

        use_case.execute(HoroscopeRequest::new("leão")).await.unwrap();
        let record = use_case
            .execute(HoroscopeRequest::new("Leão").with_cache(true))
            .await
            .unwrap();

        assert_eq!(record.summary(), "Dia promissor.");
        assert!(client.calls()[1].contains("Para o signo de Leão"));
    }

    #[tokio::test]
    async fn upstream_failure_leaves_cache_untouched() {
        let (use_case, _, cache) = setup(vec![Err(DomainError::upstream(500, "boom"))]);

        let err = use_case.execute(HoroscopeRequest::new("Virgem")).await.unwrap_err();

        assert!(err.is_upstream());
        assert!(cache.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn rebel_failure_still_returns_cached_fields() {
        let (use_case, _, cache) = setup(vec![
            Ok(REPLY.to_string()),
            Err(DomainError::transport("connection reset")),
        ]);

        use_case.execute(HoroscopeRequest::new("Áries")).await.unwrap();
        let record = use_case
            .execute(HoroscopeRequest::new("Áries").with_cache(true))
            .await
            .unwrap();

        assert!(record.summary().contains('9'));
        assert_eq!(record.color(), "Verde");
        assert_eq!(cache.get("Áries").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn rebel_summary_stays_with_the_reading_it_was_written_for() {
        let client = Arc::new(GatedChatClient::new("Seu número 11 é uma merda."));
        let cache = Arc::new(InMemoryHoroscopeCache::new());
        let use_case = Arc::new(GetHoroscopeUseCase::new(client.clone(), cache.clone()));

        let first =
            HoroscopeRecord::new("Dia A.", 11, "c11", "Conselho A.", "Resumo A.", "19/10/2026");
        let second =
            HoroscopeRecord::new("Dia B.", 99, "c99", "Conselho B.", "Resumo B.", "19/10/2026");
        cache.put("Leão", first.clone()).await.unwrap();

        let rebel = tokio::spawn({
            let use_case = use_case.clone();
            async move {
                use_case
                    .execute(HoroscopeRequest::new("Leão").with_cache(true))
                    .await
            }
        });

        client.entered.notified().await;
        cache.put("Leão", second.clone()).await.unwrap();
        client.release.notify_one();

        let record = rebel.await.unwrap().unwrap();
        assert_eq!(record, first.with_summary("Seu número 11 é uma merda."));
        assert_eq!(cache.get("Leão").await.unwrap(), Some(second));
    }
}
