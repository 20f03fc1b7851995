pub mod filter;
pub mod processor;
pub mod stemmer;
pub mod tokenizer;
pub mod youdao;

pub use filter::is_candidate_word;
pub use processor::EnglishProcessor;
pub use stemmer::SuffixStemmer;
pub use tokenizer::split_words;
pub use youdao::YoudaoDictionary;
