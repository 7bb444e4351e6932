use std::fmt::{self, Display, Formatter};

/// Language of the scraped pages and of the rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Lang {
    De,
    En,
}

impl Lang {
    /// The path segment used by the site for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::De => &DE,
            Self::En => &EN,
        }
    }
}

impl Display for Lang {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Localized phrases used by the text and HTML renderers.
pub struct Strings {
    pub deals_title: &'static str,
    pub restaurant_link_text: &'static str,
    pub view_restaurant: &'static str,
    pub deals_in: &'static str,
    pub no_deals_found: &'static str,
    pub city_page: &'static str,
}

static DE: Strings = Strings {
    deals_title: "NeoTaste Deals",
    restaurant_link_text: "Mehr Informationen/Details zum Angebot",
    view_restaurant: "Restaurant ansehen",
    deals_in: "Deals in",
    no_deals_found: "Keine Deals gefunden.",
    city_page: "Seite der Stadt",
};

static EN: Strings = Strings {
    deals_title: "NeoTaste Deals",
    restaurant_link_text: "More Info/Details about the Offer",
    view_restaurant: "View Restaurant",
    deals_in: "Deals in",
    no_deals_found: "No deals found.",
    city_page: "City Page",
};

#[cfg(test)]
mod tests {
    use super::Lang;

    #[test]
    fn codes_match_site_path_segments() {
        assert_eq!(Lang::De.code(), "de");
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::En.to_string(), "en");
    }

    #[test]
    fn strings_are_localized() {
        assert_eq!(Lang::De.strings().no_deals_found, "Keine Deals gefunden.");
        assert_eq!(Lang::En.strings().no_deals_found, "No deals found.");
        // the product name stays the same in both languages
        assert_eq!(Lang::De.strings().deals_title, Lang::En.strings().deals_title);
    }
}
