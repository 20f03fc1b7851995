use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use wordsheet_config::report::ReportConfig;

use crate::dictionary::DictionaryEntry;
use crate::error::PipelineError;
use crate::frequency::FrequencyTable;

pub const REPORT_EXTENSION: &str = "xlsx";

/// Excel rejects longer cell strings
const MAX_CELL_CHARS: usize = 32_767;

/// One spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub word: String,
    pub entry: Option<DictionaryEntry>,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Text(&'a str),
    Count(u32),
    Empty,
}

impl OutputRecord {
    /// Cell values in column order
    pub fn cells(&self) -> [Cell<'_>; 5] {
        let (british, american, paraphrase) = match &self.entry {
            Some(entry) => (
                Cell::Text(&entry.british_pronunciation),
                Cell::Text(&entry.american_pronunciation),
                Cell::Text(&entry.paraphrase),
            ),
            None => (Cell::Empty, Cell::Empty, Cell::Empty),
        };

        [
            Cell::Text(&self.word),
            british,
            american,
            paraphrase,
            Cell::Count(self.count),
        ]
    }
}

/// Join words with their lookup outcomes (same order) and counts.
///
/// Both lists must be the same length.
pub fn assemble(
    words: Vec<String>,
    outcomes: Vec<Option<DictionaryEntry>>,
    frequencies: &FrequencyTable,
) -> Result<Vec<OutputRecord>, PipelineError> {
    if words.len() != outcomes.len() {
        return Err(PipelineError::Misaligned {
            words: words.len(),
            outcomes: outcomes.len(),
        });
    }

    Ok(words
        .into_iter()
        .zip(outcomes)
        .map(|(word, entry)| {
            let count = frequencies.count(&word);
            OutputRecord { word, entry, count }
        })
        .collect())
}

/// `notes/essay.docx` -> `notes/essay.xlsx`
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(REPORT_EXTENSION)
}

pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the workbook in memory: bold header row, then one row per record
    pub fn render(&self, records: &[OutputRecord]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        if let Some(name) = &self.config.sheet_name {
            worksheet.set_name(name)?;
        }

        let bold = Format::new().set_bold();
        for (col, label) in self.config.headers().iter().enumerate() {
            worksheet.write_string_with_format(0, col as ColNum, *label, &bold)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as RowNum;

            for (col, cell) in record.cells().into_iter().enumerate() {
                let col = col as ColNum;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, clip(text))?;
                    }
                    Cell::Count(count) => {
                        worksheet.write_number(row, col, count)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        workbook.save_to_buffer()
    }

    /// Render, then replace `path` in one write
    pub fn write(&self, records: &[OutputRecord], path: &Path) -> Result<(), PipelineError> {
        let bytes = self.render(records).map_err(|e| PipelineError::Report {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        fs::write(path, bytes).map_err(|e| PipelineError::io(path, e))?;

        tracing::info!("Wrote {} rows to {}", records.len(), path.display());
        Ok(())
    }
}

fn clip(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
