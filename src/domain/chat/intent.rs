//! Keyword-based intent classification for chat messages.
//!
//! Classification is a pure function over fixed bilingual keyword
//! tables. There is no scoring or stemming, only lower-cased substring
//! containment, checked in a fixed priority order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Search,
    Sale,
    Featured,
    Categories,
    Greeting,
    Help,
    General,
}

impl Intent {
    /// Returns the label used in logs and health payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Search => "search",
            Intent::Sale => "sale",
            Intent::Featured => "featured",
            Intent::Categories => "categories",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const SEARCH_KEYWORDS: &[&str] = &[
    "اعرض", "أرني", "ابحث", "show", "search", "find", "قمصان", "بنطلون", "فستان", "pants",
    "shirt", "dress", "baggy", "carhartt",
];

const SALE_KEYWORDS: &[&str] = &["عرض", "تخفيض", "خصم", "sale", "discount", "offer", "عروض"];

const FEATURED_KEYWORDS: &[&str] = &[
    "مميز", "أفضل", "مقترح", "featured", "best", "recommend", "اقتراح",
];

const CATEGORY_KEYWORDS: &[&str] = &["فئة", "نوع", "أقسام", "category", "categories", "type"];

const GREETING_KEYWORDS: &[&str] = &[
    "مرحبا", "السلام", "أهلا", "hello", "hi", "مساء", "صباح", "الجديد", "جديد",
];

const HELP_KEYWORDS: &[&str] = &["مساعدة", "help", "ماذا", "كيف", "what", "how"];

/// Filler tokens stripped from a search message before retrieval.
const SEARCH_STRIP_TOKENS: &[&str] = &[
    "اعرض", "أرني", "ابحث", "show", "search", "find", "لي", "me",
];

/// Classifies a message into an [`Intent`].
///
/// Keyword sets overlap across intents (for example "جديد" appears
/// under greeting while product words sit under search), so the
/// priority order below is part of the contract: search beats sale
/// beats featured beats categories beats greeting beats help.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    let tables: [(Intent, &[&str]); 6] = [
        (Intent::Search, SEARCH_KEYWORDS),
        (Intent::Sale, SALE_KEYWORDS),
        (Intent::Featured, FEATURED_KEYWORDS),
        (Intent::Categories, CATEGORY_KEYWORDS),
        (Intent::Greeting, GREETING_KEYWORDS),
        (Intent::Help, HELP_KEYWORDS),
    ];

    for (intent, keywords) in tables {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return intent;
        }
    }

    Intent::General
}

/// Strips search filler tokens from a message, leaving the terms worth
/// querying ("show me pants" becomes "pants").
///
/// Tokens are removed by a single left-to-right scan: at each position
/// the first token that matches (case-insensitively) is consumed, and
/// scanning resumes after it without revisiting earlier output.
pub fn strip_search_tokens(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while !rest.is_empty() {
        if let Some(consumed) = SEARCH_STRIP_TOKENS
            .iter()
            .find_map(|token| caseless_prefix_len(rest, token))
        {
            rest = &rest[consumed..];
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out.trim().to_string()
}

/// Byte length of `prefix` at the start of `s` under caseless
/// comparison, or `None` when it does not match there.
fn caseless_prefix_len(s: &str, prefix: &str) -> Option<usize> {
    let mut len = 0;
    let mut chars = s.chars();
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        len += actual.len_utf8();
    }
    Some(len)
}
