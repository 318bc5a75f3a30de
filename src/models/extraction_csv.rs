use std::collections::{BTreeSet, HashMap};
use std::io::{Read, Write};

use csv::{Reader, Writer};

use crate::models::{Error, QuestionAnswer, ResolvedQuestionAnswer};

const QUESTION_LABEL_COLUMN: &str = "question_label";
const EXTRACTED_TEXT_COLUMN: &str = "extracted_text";

const RESOLVED_COLUMNS: [&str; 6] = [
    "question_label",
    "original_extracted_text",
    "extracted_text",
    "extracted_text_similarity",
    "start",
    "end",
];

/// Read `question_label,extracted_text` rows into grouped question answers.
///
/// Headers must be exactly those two columns with no surrounding whitespace.
/// Rows sharing a label are merged, in first-seen order. Extractions are
/// trimmed, and blank ones are skipped.
pub fn read_extraction_rows<R: Read>(reader: R) -> Result<Vec<QuestionAnswer>, Error> {
    let mut reader = Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let bad_headers: Vec<&str> = headers
        .iter()
        .filter(|header| header.trim() != *header)
        .collect();
    if !bad_headers.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "Column headers contain leading or trailing whitespace: {}.",
            bad_headers.join(", ")
        )));
    }

    let present: BTreeSet<&str> = headers.iter().collect();
    if present.len() != headers.len() {
        let duplicates: BTreeSet<&str> = present
            .iter()
            .copied()
            .filter(|column| headers.iter().filter(|header| header == column).count() > 1)
            .collect();
        return Err(Error::InvalidArgument(format!(
            "Duplicate columns present: {}.",
            duplicates.into_iter().collect::<Vec<_>>().join(", ")
        )));
    }

    let required: BTreeSet<&str> = [QUESTION_LABEL_COLUMN, EXTRACTED_TEXT_COLUMN]
        .into_iter()
        .collect();

    let missing: Vec<&str> = required.difference(&present).copied().collect();
    if !missing.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "Missing required columns: {}.",
            missing.join(", ")
        )));
    }

    let extra: Vec<&str> = present.difference(&required).copied().collect();
    if !extra.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "Unexpected extra columns present: {}. Only {} are allowed.",
            extra.join(", "),
            required.iter().copied().collect::<Vec<_>>().join(", ")
        )));
    }

    // Both columns are known to exist at this point
    let label_index = headers
        .iter()
        .position(|header| header == QUESTION_LABEL_COLUMN)
        .unwrap_or_default();
    let text_index = headers
        .iter()
        .position(|header| header == EXTRACTED_TEXT_COLUMN)
        .unwrap_or_default();

    let mut question_answers: Vec<QuestionAnswer> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let label = record.get(label_index).unwrap_or_default().trim();
        let text = record.get(text_index).unwrap_or_default().trim();

        if label.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "Row {} has an empty question_label.",
                row + 1
            )));
        }

        let position = *positions.entry(label.to_string()).or_insert_with(|| {
            question_answers.push(QuestionAnswer {
                question_label: label.to_string(),
                extracted_text: Vec::new(),
            });
            question_answers.len() - 1
        });

        if !text.is_empty() {
            question_answers[position]
                .extracted_text
                .push(text.to_string());
        }
    }

    Ok(question_answers)
}

/// Write one row per resolved extraction.
///
/// Unmatched extractions leave `start` and `end` empty.
pub fn write_resolved_rows<W: Write>(
    writer: W,
    resolved: &[ResolvedQuestionAnswer],
) -> Result<(), Error> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(RESOLVED_COLUMNS)?;

    for question_answer in resolved {
        for extraction in &question_answer.extractions {
            let (start, end) = extraction
                .span
                .map(|span| (span.start.to_string(), span.end.to_string()))
                .unwrap_or_default();

            writer.write_record([
                question_answer.question_label.as_str(),
                extraction.original_text.as_str(),
                extraction.matched_text.as_str(),
                format!("{:?}", extraction.score).as_str(),
                start.as_str(),
                end.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
