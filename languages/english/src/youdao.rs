use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use wordsheet_config::dictionary::DictionaryConfig;
use wordsheet_core::dictionary::{DictionaryEntry, DictionaryLookup, LookupError, ProviderMetadata};

/// Youdao web dictionary, scraped from the word's HTML page
pub struct YoudaoDictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
    layouts: Vec<MarkupLayout>,
}

impl YoudaoDictionary {
    pub fn new(config: DictionaryConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config,
            layouts: MarkupLayout::known()?,
        })
    }
}

#[async_trait]
impl DictionaryLookup for YoudaoDictionary {
    async fn lookup(&self, word: &str) -> Result<DictionaryEntry, LookupError> {
        let url = self.config.url_for(word);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::Http(response.status().as_u16()));
        }

        let body = response.text().await?;

        parse_entry(&self.layouts, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Youdao".to_string(),
            online: true,
        }
    }
}

/// Where one text field lives on the page
struct Field {
    selector: Selector,
    /// Which match to take
    nth: usize,
}

impl Field {
    fn new(css: &str, nth: usize) -> Result<Self, LookupError> {
        Ok(Self {
            selector: parse_selector(css)?,
            nth,
        })
    }

    fn text(&self, html: &Html) -> Option<String> {
        html.select(&self.selector)
            .nth(self.nth)
            .map(element_text)
            .filter(|text| !text.is_empty())
    }
}

/// Selectors for one revision of the result page
pub struct MarkupLayout {
    name: &'static str,
    british: Field,
    american: Field,
    /// One match per definition line
    definitions: Selector,
}

impl MarkupLayout {
    /// Page layouts the site has served, tried in order
    pub fn known() -> Result<Vec<Self>, LookupError> {
        Ok(vec![
            Self {
                name: "phrs-header",
                british: Field::new("#phrsListTab > h2 > div > span:nth-of-type(1) > span", 0)?,
                american: Field::new("#phrsListTab > h2 > div > span:nth-of-type(2) > span", 0)?,
                definitions: parse_selector("#phrsListTab > div > ul > li")?,
            },
            Self {
                name: "pronounce-spans",
                british: Field::new("span.pronounce > span", 0)?,
                american: Field::new("span.pronounce > span", 1)?,
                definitions: parse_selector("ul#phrsListTab > li")?,
            },
        ])
    }

    fn extract(&self, html: &Html) -> Result<DictionaryEntry, LookupError> {
        let british_pronunciation = self
            .british
            .text(html)
            .ok_or(LookupError::MissingField("british pronunciation"))?;

        let american_pronunciation = self
            .american
            .text(html)
            .ok_or(LookupError::MissingField("american pronunciation"))?;

        let definitions: Vec<String> = html
            .select(&self.definitions)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();

        if definitions.is_empty() {
            return Err(LookupError::MissingField("paraphrase"));
        }

        Ok(DictionaryEntry {
            british_pronunciation,
            american_pronunciation,
            paraphrase: definitions.join("; "),
        })
    }
}

/// Parse a result page with the first layout that yields every field
pub fn parse_entry(layouts: &[MarkupLayout], body: &str) -> Result<DictionaryEntry, LookupError> {
    let html = Html::parse_document(body);

    let mut first_error = None;
    for layout in layouts {
        match layout.extract(&html) {
            Ok(entry) => {
                tracing::trace!("Matched layout '{}'", layout.name);
                return Ok(entry);
            }
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    Err(first_error.unwrap_or_else(|| LookupError::Parse("no page layouts configured".to_string())))
}

fn parse_selector(css: &str) -> Result<Selector, LookupError> {
    Selector::parse(css).map_err(|e| LookupError::Parse(format!("bad selector {css:?}: {e:?}")))
}

/// Descendant text with whitespace runs collapsed
fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
