pub mod dictionary;
pub mod document;
pub mod enrich;
pub mod error;
pub mod frequency;
pub mod language;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod vocabulary;

pub use dictionary::{DictionaryEntry, DictionaryLookup, LookupError, ProviderMetadata};
pub use document::{RawDocument, SourceFormat};
pub use enrich::EnrichmentScheduler;
pub use error::PipelineError;
pub use frequency::FrequencyTable;
pub use language::{LanguageProcessor, Stemmer, Token};
pub use pipeline::Pipeline;
pub use report::{OutputRecord, ReportWriter};
pub use vocabulary::Vocabulary;
