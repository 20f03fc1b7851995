use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// UTF-8 text file (`.txt`)
    Plain,
    /// Word-processor container (`.docx`)
    RichText,
}

impl SourceFormat {
    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") => Ok(Self::Plain),
            Some("docx") => Ok(Self::RichText),
            _ => Err(PipelineError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Text content of one input file
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub text: String,
    pub format: SourceFormat,
}

impl RawDocument {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let format = SourceFormat::from_path(path)?;

        let text = match format {
            SourceFormat::Plain => {
                fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?
            }
            SourceFormat::RichText => load_docx_text(path)?,
        };

        tracing::debug!(
            "Loaded {} ({:?}, {} bytes of text)",
            path.display(),
            format,
            text.len()
        );

        Ok(Self { text, format })
    }
}

/// Top-level paragraph texts joined by single spaces, in document order.
/// Paragraphs inside tables are not part of the body text.
fn load_docx_text(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path).map_err(|e| PipelineError::io(path, e))?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| PipelineError::Document {
        path: path.to_path_buf(),
        reason: format!("{e:?}"),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join(" "))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}
