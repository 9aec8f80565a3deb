//! Submission normalization
//!
//! Turns the flat field map of a submitted form into one [`Article`].
//! Repeated groups (judges, timeline) arrive as indexed fields such as
//! `judge_name_0`, `judge_name_1`, with a count field declaring how many
//! indices to read. Multi-line fields hold one list item per line.

use std::collections::HashMap;

use serde::Serialize;

use crate::article::{Article, Judge, TimelineEntry, DEFAULT_OPINION};
use crate::error::{CaseError, Result};

/// Raw form submission: field name to submitted value
pub type FormFields = HashMap<String, String>;

/// Collect submitted pairs into [`FormFields`].
///
/// A repeated field keeps its first value; later ones are ignored.
pub fn form_fields<I>(pairs: I) -> FormFields
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut fields = FormFields::new();
    for (name, value) in pairs {
        fields.entry(name).or_insert(value);
    }
    fields
}

/// Single-line fields copied verbatim into the article
pub const SCALAR_FIELDS: &[&str] = &[
    "title",
    "delivered_date",
    "bench_size",
    "intro",
    "plaintiff",
    "defendant",
    "case_type",
    "year_range",
    "ruling",
    "analysis",
    "ratio_decidendi",
    "case_number",
    "counsel_petitioner",
    "counsel_respondent",
    "hearing_dates",
];

/// Multi-line fields split into one list item per non-blank line
pub const LINE_LIST_FIELDS: &[&str] = &[
    "acts",
    "citations",
    "petitioner_arguments",
    "respondent_arguments",
    "verdict_points",
];

pub const JUDGE_COUNT_FIELD: &str = "judge_count";
pub const TIMELINE_COUNT_FIELD: &str = "timeline_count";

/// A repeated group of indexed sub-fields
#[derive(Debug, Clone, Serialize)]
pub struct IndexedGroup {
    pub name: &'static str,
    pub count_field: &'static str,
    /// Field prefixes; the index is appended as `{prefix}_{i}`
    pub fields: Vec<IndexedField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexedField {
    pub prefix: &'static str,
    pub default: &'static str,
    /// Entries whose key field is empty are dropped
    pub key: bool,
}

impl IndexedField {
    const fn new(prefix: &'static str, default: &'static str, key: bool) -> Self {
        Self {
            prefix,
            default,
            key,
        }
    }
}

/// Description of an empty submission form
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub scalar_fields: Vec<&'static str>,
    pub multiline_fields: Vec<&'static str>,
    pub groups: Vec<IndexedGroup>,
}

/// Shape of the submission form the normalizer understands
pub fn form_schema() -> FormSchema {
    FormSchema {
        scalar_fields: SCALAR_FIELDS.to_vec(),
        multiline_fields: LINE_LIST_FIELDS.to_vec(),
        groups: vec![
            IndexedGroup {
                name: "judges",
                count_field: JUDGE_COUNT_FIELD,
                fields: vec![
                    IndexedField::new("judge_name", "", true),
                    IndexedField::new("judge_initials", "", false),
                    IndexedField::new("judge_opinion", DEFAULT_OPINION, false),
                ],
            },
            IndexedGroup {
                name: "timeline",
                count_field: TIMELINE_COUNT_FIELD,
                fields: vec![
                    IndexedField::new("timeline_title", "", true),
                    IndexedField::new("timeline_desc", "", false),
                    IndexedField::new("timeline_date", "", false),
                ],
            },
        ],
    }
}

/// Build an article from a submitted form.
///
/// Fails with [`CaseError::MalformedSubmission`] if `judge_count` or
/// `timeline_count` is present but not a non-negative integer.
pub fn normalize(fields: &FormFields) -> Result<Article> {
    let judges = parse_judges(fields)?;
    let timeline = parse_timeline(fields)?;

    Ok(Article {
        title: field(fields, "title"),
        delivered_date: field(fields, "delivered_date"),
        bench_size: field(fields, "bench_size"),
        intro: field(fields, "intro"),
        plaintiff: field(fields, "plaintiff"),
        defendant: field(fields, "defendant"),
        case_type: field(fields, "case_type"),
        year_range: field(fields, "year_range"),
        judges,
        ruling: field(fields, "ruling"),
        acts: line_list(fields, "acts"),
        citations: line_list(fields, "citations"),
        timeline,
        petitioner_arguments: line_list(fields, "petitioner_arguments"),
        respondent_arguments: line_list(fields, "respondent_arguments"),
        analysis: field(fields, "analysis"),
        verdict_points: line_list(fields, "verdict_points"),
        ratio_decidendi: field(fields, "ratio_decidendi"),
        case_number: field(fields, "case_number"),
        counsel_petitioner: field(fields, "counsel_petitioner"),
        counsel_respondent: field(fields, "counsel_respondent"),
        hearing_dates: field(fields, "hearing_dates"),
    })
}

/// Split a multi-line block into trimmed, non-blank lines
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a declared entry count. Absent means zero.
pub fn parse_count(fields: &FormFields, name: &str) -> Result<usize> {
    match fields.get(name) {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| CaseError::MalformedSubmission {
                field: name.to_string(),
                value: raw.clone(),
            }),
    }
}

fn parse_judges(fields: &FormFields) -> Result<Vec<Judge>> {
    let count = parse_count(fields, JUDGE_COUNT_FIELD)?;
    let judges = (0..count)
        .map(|i| Judge {
            name: field(fields, &format!("judge_name_{}", i)),
            initials: field(fields, &format!("judge_initials_{}", i)),
            opinion: field_or(fields, &format!("judge_opinion_{}", i), DEFAULT_OPINION),
        })
        .filter(|judge| !judge.name.is_empty())
        .collect();
    Ok(judges)
}

fn parse_timeline(fields: &FormFields) -> Result<Vec<TimelineEntry>> {
    let count = parse_count(fields, TIMELINE_COUNT_FIELD)?;
    let timeline = (0..count)
        .map(|i| TimelineEntry {
            title: field(fields, &format!("timeline_title_{}", i)),
            description: field(fields, &format!("timeline_desc_{}", i)),
            date: field(fields, &format!("timeline_date_{}", i)),
        })
        .filter(|entry| !entry.title.is_empty())
        .collect();
    Ok(timeline)
}

fn field(fields: &FormFields, name: &str) -> String {
    field_or(fields, name, "")
}

fn field_or(fields: &FormFields, name: &str, default: &str) -> String {
    fields
        .get(name)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

fn line_list(fields: &FormFields, name: &str) -> Vec<String> {
    fields.get(name).map(|v| split_lines(v)).unwrap_or_default()
}
