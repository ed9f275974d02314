//! Hostname resolution: ordered strategy chain with first-success semantics.
//!
//! The resolver walks its strategies in order. Strategies that poll a tunnel
//! which may still be starting (`Strategy::polls`) are wrapped in
//! [`with_retry`]; all others run once. A strategy that errors or finds
//! nothing is a miss and the chain moves on. Only total exhaustion surfaces
//! as [`ResolutionError::AllStrategiesExhausted`].

pub mod strategies;

use std::cell::RefCell;

use anyhow::Result;
use async_trait::async_trait;
use reach_common::Platform;

use crate::application::ports::{ServiceSupervisor, TunnelClient, TunnelFiles};
use crate::application::services::retry::{RetryPolicy, with_retry};
use crate::domain::error::ResolutionError;
use crate::domain::hostname::Hostname;
use crate::domain::resolution::{DiscoveryAttempt, Outcome, ResolutionContext};

pub use strategies::{
    CredentialScanStrategy, DirectInfoStrategy, DnsRouteStrategy, ListStrategy, ServiceLogStrategy,
};

/// One way of discovering the public hostname.
#[async_trait(?Send)]
pub trait Strategy {
    /// Short stable name used in logs and the discovery trail.
    fn name(&self) -> &'static str;

    /// Whether the resolver should retry this strategy on a miss.
    fn polls(&self) -> bool {
        false
    }

    /// Look for a hostname. `Ok(None)` and `Err` are both misses.
    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<Hostname>>;
}

/// Runs an ordered list of strategies until one yields a hostname.
pub struct HostnameResolver<'a> {
    strategies: Vec<Box<dyn Strategy + 'a>>,
}

impl<'a> HostnameResolver<'a> {
    /// Resolver over an explicit chain.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn Strategy + 'a>>) -> Self {
        Self { strategies }
    }

    /// The standard chain for `platform`:
    /// info → list → service log → credentials → DNS route (Linux only).
    #[must_use]
    pub fn standard<C, S, F>(platform: Platform, client: &'a C, supervisor: &'a S, files: &'a F) -> Self
    where
        C: TunnelClient,
        S: ServiceSupervisor,
        F: TunnelFiles,
    {
        let mut strategies: Vec<Box<dyn Strategy + 'a>> = vec![
            Box::new(DirectInfoStrategy::new(client)),
            Box::new(ListStrategy::new(client)),
            Box::new(ServiceLogStrategy::new(supervisor)),
            Box::new(CredentialScanStrategy::new(files)),
        ];
        if platform == Platform::Linux {
            strategies.push(Box::new(DnsRouteStrategy::new(client)));
        }
        Self::new(strategies)
    }

    /// Names of the strategies in evaluation order.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve the current public hostname.
    ///
    /// A valid preset hostname in `ctx` is returned without running the chain.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::AllStrategiesExhausted`] once every strategy,
    /// including all retries of polling strategies, has missed.
    pub async fn resolve(
        &self,
        ctx: &ResolutionContext,
        max_attempts_per_strategy: u32,
    ) -> Result<Hostname, ResolutionError> {
        if let Some(preset) = &ctx.preset_hostname {
            match Hostname::parse(preset) {
                Ok(hostname) => {
                    tracing::info!(%hostname, "using preset hostname");
                    return Ok(hostname);
                }
                Err(e) => tracing::warn!("ignoring preset hostname: {e}"),
            }
        }

        let policy = RetryPolicy::new(max_attempts_per_strategy, ctx.retry_delay);
        let trail = RefCell::new(Vec::new());
        let trail_ref = &trail;

        for strategy in &self.strategies {
            let run_once = move |_attempt: u32| async move {
                let outcome = match strategy.attempt(ctx).await {
                    Ok(Some(hostname)) => Outcome::Found(hostname),
                    Ok(None) => Outcome::NotFound,
                    Err(e) => Outcome::Error(format!("{e:#}")),
                };
                tracing::debug!(strategy = strategy.name(), %outcome, "strategy attempt");
                let found = match &outcome {
                    Outcome::Found(h) => Some(h.clone()),
                    Outcome::NotFound | Outcome::Error(_) => None,
                };
                trail_ref
                    .borrow_mut()
                    .push(DiscoveryAttempt::new(strategy.name(), outcome));
                found
            };

            let found = if strategy.polls() {
                with_retry(policy, run_once).await
            } else {
                run_once(1).await
            };

            if let Some(hostname) = found {
                tracing::info!(strategy = strategy.name(), %hostname, "hostname resolved");
                return Ok(hostname);
            }
        }

        let attempts = trail.into_inner();
        tracing::debug!(attempts = attempts.len(), "all hostname strategies exhausted");
        Err(ResolutionError::AllStrategiesExhausted { attempts })
    }
}
