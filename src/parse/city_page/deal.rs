use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use crate::parse::text::element_text;

use super::MARKER_ATTR;

/// The kind of offer a deal badge advertises.
///
/// Derived once at classification time. The combined kind is its own
/// variant so a badge carrying both signals is never flattened into one of
/// its halves after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealKind {
    #[serde(rename = "flash")]
    Flash,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "flash+event")]
    FlashEvent,
    #[serde(rename = "other")]
    Other,
}

/// Where on a badge one classification signal is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    /// Case-insensitive substring of the badge's marker attribute value.
    MarkerKeyword(&'static str),
    /// Case-insensitive substring of the badge's inner HTML. Catches
    /// nested icon markup whose own marker names the category even when
    /// the badge's marker value does not.
    ContentKeyword(&'static str),
    /// A sentinel character anywhere in the badge's visible text.
    TextSentinel(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vote {
    Flash,
    Event,
}

/// The ordered signal table. Every row is independently sufficient to cast
/// its vote; the sentinel rows never assume the keyword rows already
/// failed. Keyword patterns are lowercase, matched against lowercased
/// input. A badge matching no row falls through to [`DealKind::Other`].
const SIGNAL_RULES: &[(Signal, Vote)] = &[
    (Signal::MarkerKeyword("flashdeal"), Vote::Flash),
    (Signal::ContentKeyword("flashdeal"), Vote::Flash),
    (Signal::TextSentinel('⚡'), Vote::Flash),
    (Signal::MarkerKeyword("eventdeal"), Vote::Event),
    (Signal::ContentKeyword("eventdeal"), Vote::Event),
    (Signal::TextSentinel('🌟'), Vote::Event),
];

impl Signal {
    fn matches(self, marker: &str, inner_html: &str, text: &str) -> bool {
        match self {
            Self::MarkerKeyword(pattern) => marker.contains(pattern),
            Self::ContentKeyword(pattern) => inner_html.contains(pattern),
            Self::TextSentinel(sentinel) => text.contains(sentinel),
        }
    }
}

impl DealKind {
    /// Classify one badge from its marker attribute value, its raw inner
    /// HTML and its visible text.
    ///
    /// The four outcomes are checked in order, first match wins; the
    /// combined case comes first so it can never degrade to plain flash or
    /// event.
    pub fn classify(marker: &str, inner_html: &str, text: &str) -> Self {
        let marker = marker.to_lowercase();
        let inner_html = inner_html.to_lowercase();

        let (mut flash, mut event) = (false, false);
        for &(signal, vote) in SIGNAL_RULES {
            if signal.matches(&marker, &inner_html, text) {
                match vote {
                    Vote::Flash => flash = true,
                    Vote::Event => event = true,
                }
            }
        }

        match (flash, event) {
            (true, true) => Self::FlashEvent,
            (true, false) => Self::Flash,
            (false, true) => Self::Event,
            (false, false) => Self::Other,
        }
    }
}

/// One classified deal badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub label: String,
    pub kind: DealKind,
}

impl Deal {
    /// Build a deal from one badge element. Infallible: a badge with no
    /// text yields a deal with an empty label, and a badge with no
    /// recognizable signal is kept as [`DealKind::Other`].
    pub(super) fn from_html_element(element: ElementRef) -> Self {
        let marker = element.attr(MARKER_ATTR).unwrap_or_default();
        let label = element_text(element);
        let kind = DealKind::classify(marker, &element.inner_html(), &label);
        Self { label, kind }
    }
}

/// Post-classification filter mirroring the deal categories users ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealFilter {
    /// Event deals only; the combined kind counts.
    Events,
    /// Flash deals only; the combined kind counts.
    Flash,
    /// Anything recognized, i.e. everything but [`DealKind::Other`].
    Special,
}

impl DealFilter {
    pub fn keeps(self, kind: DealKind) -> bool {
        match self {
            Self::Events => matches!(kind, DealKind::Event | DealKind::FlashEvent),
            Self::Flash => matches!(kind, DealKind::Flash | DealKind::FlashEvent),
            Self::Special => kind != DealKind::Other,
        }
    }
}
