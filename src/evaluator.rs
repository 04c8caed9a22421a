//! Sanity checker - configuration, lookup and the check orchestration.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::{mpsc, Mutex};

use crate::diagnostics::Diagnostics;
use crate::hash::{CredentialHasher, HashError};
use crate::registry::Registry;
use crate::rules::{RuleSet, RuleUpdate};
use crate::sections::{
    character_section, complexity_section, length_section, sequence_section, Rejection,
};

/// Outcome of [`Sanity::evaluate`].
pub type CheckResult = Result<(), Rejection>;

/// Rule registry plus diagnostics log. Every check goes through one of these.
///
/// Methods take `&mut self`; share one across threads behind a mutex
/// (see [`check_tx`]).
#[derive(Debug, Clone, Default)]
pub struct Sanity {
    registry: Registry,
    diagnostics: Diagnostics,
    debug_in_use: bool,
}

impl Sanity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a checker from a prepared registry and diagnostics log, e.g.
    /// to change the default rules or the log capacity up front.
    pub fn with_parts(registry: Registry, diagnostics: Diagnostics) -> Self {
        Self {
            registry,
            diagnostics,
            debug_in_use: false,
        }
    }

    /// See [`Registry::configure`].
    pub fn configure(&mut self, update: &RuleUpdate, rule_name: Option<&str>) {
        self.registry.configure(update, rule_name);
    }

    /// Rule set a check with `rule_name` would use. Unknown names fall back
    /// to the default and are noted in the diagnostics.
    pub fn resolve(&mut self, rule_name: Option<&str>) -> RuleSet {
        self.registry
            .resolve(rule_name, &mut self.diagnostics)
            .clone()
    }

    /// Returns `true` if `input` passes the rule set named `rule_name`, or
    /// the default rule set when no name is given.
    pub fn check(&mut self, input: &SecretString, rule_name: Option<&str>) -> bool {
        self.evaluate(input, rule_name).is_ok()
    }

    /// Like [`check`](Self::check) but reports which condition failed.
    ///
    /// Input is trimmed and, with `ignore_case`, lowercased per codepoint. Then in order:
    /// length bounds, character scan, denylist, complexity quorum. The first
    /// failure ends the check and its message is appended to the diagnostics.
    pub fn evaluate(&mut self, input: &SecretString, rule_name: Option<&str>) -> CheckResult {
        let rules = self.registry.resolve(rule_name, &mut self.diagnostics);
        self.debug_in_use = rules.debug;

        let trimmed = input.expose_secret().trim();
        let chars: Vec<char> = if rules.ignore_case {
            trimmed.chars().flat_map(char::to_lowercase).collect()
        } else {
            trimmed.chars().collect()
        };

        let result = length_section(rules, chars.len())
            .and_then(|()| character_section(rules, &chars))
            .and_then(|counts| {
                sequence_section(rules, &chars)?;
                complexity_section(rules, &counts, &mut self.diagnostics)
            });

        if let Err(rejection) = &result {
            self.diagnostics.push(rejection.to_string());
        }
        result
    }

    /// Checks `input` and hashes it with `hasher` when it passes.
    ///
    /// # Returns
    /// - `Ok(Some(hash))` if the input passed and was hashed
    /// - `Ok(None)` if the input was rejected; the hasher is not called
    /// - `Err(_)` if hashing itself failed
    pub fn check_and_hash<H>(
        &mut self,
        input: &SecretString,
        rule_name: Option<&str>,
        hasher: &H,
    ) -> Result<Option<String>, HashError>
    where
        H: CredentialHasher + ?Sized,
    {
        if !self.check(input, rule_name) {
            return Ok(None);
        }
        hasher.hash(input).map(Some)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// All recorded diagnostics, regardless of debug mode.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Diagnostics for display, only available when the rule set used by
    /// the most recent check has `debug` enabled.
    pub fn debug_info(&self) -> Option<impl Iterator<Item = &str>> {
        self.debug_in_use.then(|| self.diagnostics.entries())
    }

    pub fn reset_diagnostics(&mut self) {
        self.diagnostics.reset();
    }
}

/// Async version that sends the check result via channel.
///
/// The checker is locked for the whole evaluation.
#[cfg(feature = "async")]
pub async fn check_tx(
    sanity: &Mutex<Sanity>,
    input: &SecretString,
    rule_name: Option<&str>,
    tx: mpsc::Sender<CheckResult>,
) {
    let result = sanity.lock().await.evaluate(input, rule_name);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send check result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_check_tx_sends_result() {
        let sanity = Mutex::new(Sanity::new());
        let (tx, mut rx) = mpsc::channel(1);

        let pwd = SecretString::new("ABcd12xyz".to_string().into());
        check_tx(&sanity, &pwd, None, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_check_tx_reports_rejection() {
        let sanity = Mutex::new(Sanity::new());
        sanity
            .lock()
            .await
            .configure(&RuleUpdate::new().allow_symbols(false), None);
        let (tx, mut rx) = mpsc::channel(1);

        let pwd = SecretString::new("ABcd12xyz!".to_string().into());
        check_tx(&sanity, &pwd, None, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result, Err(Rejection::SymbolNotAllowed('!')));
        assert_eq!(sanity.lock().await.diagnostics().len(), 1);
    }

    #[tokio::test]
    async fn test_check_tx_closed_channel() {
        let sanity = Mutex::new(Sanity::new());
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("ABcd12xyz".to_string().into());
        check_tx(&sanity, &pwd, None, tx).await;
        assert!(!sanity.lock().await.diagnostics().is_empty());
    }
}
