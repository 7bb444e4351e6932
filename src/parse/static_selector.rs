use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector parsed on first use and cached for the life of the
/// process, so modules can keep selectors as plain `static` items next to
/// the code that selects with them.
#[derive(Debug)]
pub(super) struct StaticSelector {
    parsed: OnceLock<Selector>,
    css: &'static str,
}

impl StaticSelector {
    pub(super) const fn new(css: &'static str) -> Self {
        Self {
            parsed: OnceLock::new(),
            css,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // Selectors come from literals in this crate; a parse failure is a
        // programming error, not an input error.
        self.parsed.get_or_init(|| match Selector::parse(self.css) {
            Ok(selector) => selector,
            Err(e) => panic!("invalid static selector {:?}: {e:?}", self.css),
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
