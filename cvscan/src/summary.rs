//! CV summary extraction
//!
//! Pulls skills, job history and education out of a CV's extracted text with a
//! few line-oriented patterns. Best effort: a section that doesn't parse is
//! returned empty.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Text after a "Skill:" / "Skills -" heading, up to the next blank line or the end
static SKILLS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)skills?\s*[:\-]?\s*(.+?)(?:\n\n|\z)").unwrap());

/// "2019 - 2021 ..." or "2019 - Present ..." followed by a position line
static JOB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})\s*-\s*(\d{4}|Present).*\n(.+)").unwrap());

/// Same date range followed by "institution, degree"
static EDUCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*-\s*(\d{4}|Present).*\n(.+),\s*(.+)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CvSummary {
    pub skills: Vec<String>,
    pub jobs: Vec<JobEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobEntry {
    pub start: String,
    pub end: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub start: String,
    pub end: String,
    pub institution: String,
    pub degree: String,
}

pub fn extract_summary(text: &str) -> CvSummary {
    CvSummary {
        skills: extract_skills(text),
        jobs: extract_jobs(text),
        education: extract_education(text),
    }
}

fn extract_skills(text: &str) -> Vec<String> {
    SKILLS_RE
        .captures(text)
        .map(|caps| {
            caps[1]
                .split([',', '\n'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn extract_jobs(text: &str) -> Vec<JobEntry> {
    JOB_RE
        .captures_iter(text)
        .map(|caps| JobEntry {
            start: caps[1].to_string(),
            end: caps[2].to_string(),
            position: caps[3].trim().to_string(),
        })
        .collect()
}

fn extract_education(text: &str) -> Vec<EducationEntry> {
    EDUCATION_RE
        .captures_iter(text)
        .map(|caps| EducationEntry {
            start: caps[1].to_string(),
            end: caps[2].to_string(),
            institution: caps[3].trim().to_string(),
            degree: caps[4].trim().to_string(),
        })
        .collect()
}
