use scraper::ElementRef;

use crate::parse::error::Result;
use crate::parse::text::element_text;
use crate::parse::Error;
use crate::static_selector;

/// One city advertised on the cities listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityMeta {
    slug: String, // ex. "berlin"
    name: String, // ex. "Berlin"
}

impl CityMeta {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse one city anchor: the slug is the last path segment of the
    /// anchor's href, the display name sits in its highlighted span.
    pub(super) fn from_html_element(anchor: ElementRef) -> Result<Self> {
        static_selector!(NAME_SELECTOR <- ".font-semibold");

        let href = anchor
            .attr("href")
            .filter(|href| !href.is_empty())
            .ok_or_else(|| Error::missing_field("city link has no href"))?;
        let slug = slug_from_href(href)
            .ok_or_else(|| Error::html_parse_error("city link has no usable path segment"))?;

        let name_element = anchor
            .select(&NAME_SELECTOR)
            .next()
            .ok_or_else(|| Error::missing_field("city link has no name span"))?;
        let name = element_text(name_element);
        if name.is_empty() {
            return Err(Error::missing_field("city name is empty"));
        }

        Ok(Self {
            slug: slug.to_string(),
            name,
        })
    }
}

/// Last non-empty path segment of an href, ignoring query and fragment.
/// Works for site-relative and absolute city links alike.
fn slug_from_href(href: &str) -> Option<&str> {
    let path = match href.find(['?', '#']) {
        Some(end) => &href[..end],
        None => href,
    };
    path.rsplit('/').find(|segment| !segment.is_empty())
}
