//! Themed message selection
//!
//! A [`MessageTable`] maps each [`Condition`] to its candidate haikus and a
//! [`MessageSelector`] draws one uniformly at random. The random source is
//! always injectable so callers and tests can make the draw reproducible.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Condition;

pub mod haikus;

/// Returned when a condition has no candidates
pub const FALLBACK_MESSAGE: &str =
    "Sky data not found,\nwhispers lost in empty void,\nthe wind does not speak.";

static DEFAULT_SELECTOR: LazyLock<MessageSelector> =
    LazyLock::new(|| MessageSelector::new(MessageTable::builtin()));

/// Per-condition candidate messages
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    entries: HashMap<Condition, Vec<Cow<'static, str>>>,
}

impl MessageTable {
    /// An empty table; every lookup falls back
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped haiku collection
    #[must_use]
    pub fn builtin() -> Self {
        let entries = Condition::ALL
            .iter()
            .map(|&condition| {
                let candidates = haikus::builtin(condition)
                    .iter()
                    .map(|&message| Cow::Borrowed(message))
                    .collect();
                (condition, candidates)
            })
            .collect();
        Self { entries }
    }

    /// Replace the candidates for one condition
    #[must_use]
    pub fn with_messages<I, S>(mut self, condition: Condition, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.entries
            .insert(condition, messages.into_iter().map(Into::into).collect());
        self
    }

    /// Candidates for `condition`, empty when none are registered
    #[must_use]
    pub fn candidates(&self, condition: Condition) -> &[Cow<'static, str>] {
        self.entries
            .get(&condition)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Draws a themed message for a condition
#[derive(Debug, Clone)]
pub struct MessageSelector {
    table: MessageTable,
}

impl Default for MessageSelector {
    fn default() -> Self {
        Self::new(MessageTable::builtin())
    }
}

impl MessageSelector {
    #[must_use]
    pub fn new(table: MessageTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &MessageTable {
        &self.table
    }

    /// Pick a message using the thread-local generator
    #[must_use]
    pub fn select(&self, condition: Condition) -> String {
        self.select_with(condition, &mut rand::rng())
    }

    /// Pick a message using the supplied random source.
    ///
    /// Never empty: a missing or empty candidate list yields [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn select_with<R: Rng + ?Sized>(&self, condition: Condition, rng: &mut R) -> String {
        match self.table.candidates(condition).choose(rng) {
            Some(message) => message.to_string(),
            None => {
                tracing::warn!(%condition, "No messages registered, using fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Pick a built-in message for `condition`
#[must_use]
pub fn select_message(condition: Condition) -> String {
    DEFAULT_SELECTOR.select(condition)
}
