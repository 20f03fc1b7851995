use serde::{Deserialize, Serialize};

fn default_word_header() -> String {
    "Words".to_string()
}

fn default_british_header() -> String {
    "British Pronunciation".to_string()
}

fn default_american_header() -> String {
    "American Pronunciation".to_string()
}

fn default_paraphrase_header() -> String {
    "Paraphrase".to_string()
}

fn default_count_header() -> String {
    "Word Count".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    #[serde(default = "default_word_header")]
    pub word_header: String,
    #[serde(default = "default_british_header")]
    pub british_header: String,
    #[serde(default = "default_american_header")]
    pub american_header: String,
    #[serde(default = "default_paraphrase_header")]
    pub paraphrase_header: String,
    #[serde(default = "default_count_header")]
    pub count_header: String,
    /// Worksheet name, the spreadsheet default when unset
    #[serde(default)]
    pub sheet_name: Option<String>,
}

impl ReportConfig {
    /// Header labels in column order
    pub fn headers(&self) -> [&str; 5] {
        [
            &self.word_header,
            &self.british_header,
            &self.american_header,
            &self.paraphrase_header,
            &self.count_header,
        ]
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            word_header: default_word_header(),
            british_header: default_british_header(),
            american_header: default_american_header(),
            paraphrase_header: default_paraphrase_header(),
            count_header: default_count_header(),
            sheet_name: None,
        }
    }
}
