//! Question catalogue.
//!
//! A [`Catalogue`] is an ordered list of sections, each listing its
//! questions in display order. Once constructed it is immutable; every
//! constructor validates the cross-references between sections and
//! questions, so downstream scoring can rely on them.

use super::taxonomy::{Effort, Severity};
use crate::error::{AssessmentError, CatalogueErrorKind, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use xxhash_rust::xxh3::Xxh3;

/// Maximum achievable per-question answer score.
pub const MAX_ANSWER_SCORE: u32 = 3;

/// Minimum Jaro-Winkler similarity for an identifier suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A single weighted checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub section_id: String,
    pub text: String,
    /// Explanatory help shown alongside the question
    pub guidance: String,
    /// Regulatory or guidance citation
    pub reference: String,
    /// Importance to the score, 1 to 3
    pub weight: u8,
    pub severity: Option<Severity>,
    pub effort: Option<Effort>,
    pub remediation: Option<String>,
}

impl Question {
    /// Severity used for prioritization, inferred from weight when absent.
    #[must_use]
    pub const fn effective_severity(&self) -> Severity {
        Severity::resolve(self.severity, self.weight)
    }

    /// Effort used for prioritization, moderate when absent.
    #[must_use]
    pub const fn effective_effort(&self) -> Effort {
        Effort::resolve(self.effort)
    }

    /// Remediation note, or the guidance text when no note is given.
    #[must_use]
    pub fn remediation_text(&self) -> &str {
        self.remediation
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(&self.guidance)
    }

    /// Weight-3 questions carry the "high priority" badge.
    #[must_use]
    pub const fn is_high_priority(&self) -> bool {
        self.weight >= 3
    }
}

/// A named, ordered grouping of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    /// Short display marker such as `§1`
    pub icon: Option<String>,
    pub question_ids: Vec<String>,
}

/// Validated, read-only question catalogue.
#[derive(Debug, Clone)]
pub struct Catalogue {
    name: String,
    version: Option<String>,
    sections: Vec<Section>,
    questions: IndexMap<String, Question>,
    section_index: HashMap<String, usize>,
}

impl Catalogue {
    /// Build a catalogue, validating every cross-reference.
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        sections: Vec<Section>,
        questions: Vec<Question>,
    ) -> Result<Self> {
        let name = name.into();
        let mut section_index = HashMap::with_capacity(sections.len());
        for (idx, section) in sections.iter().enumerate() {
            if section.label.trim().is_empty() {
                return Err(invalid(CatalogueErrorKind::EmptyText {
                    id: section.id.clone(),
                    field: "label",
                }));
            }
            if section_index.insert(section.id.clone(), idx).is_some() {
                return Err(invalid(CatalogueErrorKind::DuplicateSection(
                    section.id.clone(),
                )));
            }
        }

        let mut by_id: IndexMap<String, Question> = IndexMap::with_capacity(questions.len());
        for question in questions {
            validate_question(&question)?;
            if !section_index.contains_key(&question.section_id) {
                return Err(invalid(CatalogueErrorKind::UnknownSection {
                    question: question.id,
                    section: question.section_id,
                }));
            }
            if by_id.contains_key(&question.id) {
                return Err(invalid(CatalogueErrorKind::DuplicateQuestion(question.id)));
            }
            by_id.insert(question.id.clone(), question);
        }

        let mut owner: HashMap<&str, &str> = HashMap::with_capacity(by_id.len());
        for section in &sections {
            for qid in &section.question_ids {
                let Some(question) = by_id.get(qid) else {
                    return Err(invalid(CatalogueErrorKind::UnknownQuestion {
                        section: section.id.clone(),
                        question: qid.clone(),
                    }));
                };
                if let Some(first) = owner.insert(qid, &section.id) {
                    return Err(invalid(if first == section.id {
                        CatalogueErrorKind::DuplicateQuestion(qid.clone())
                    } else {
                        CatalogueErrorKind::QuestionInMultipleSections {
                            question: qid.clone(),
                            first: first.to_string(),
                            second: section.id.clone(),
                        }
                    }));
                }
                if question.section_id != section.id {
                    return Err(invalid(CatalogueErrorKind::SectionMismatch {
                        question: qid.clone(),
                        declared: question.section_id.clone(),
                        listed: section.id.clone(),
                    }));
                }
            }
        }
        if let Some(orphan) = by_id.keys().find(|id| !owner.contains_key(id.as_str())) {
            return Err(invalid(CatalogueErrorKind::OrphanQuestion {
                question: orphan.clone(),
            }));
        }

        Ok(Self {
            name,
            version,
            sections,
            questions: by_id,
            section_index,
        })
    }

    /// An empty catalogue; every score over it is zero.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            sections: Vec::new(),
            questions: IndexMap::new(),
            section_index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sections in canonical order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_index.get(id).map(|&idx| &self.sections[idx])
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    #[must_use]
    pub fn contains_question(&self, id: &str) -> bool {
        self.questions.contains_key(id)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions of one section, in section order.
    pub fn section_questions<'a>(
        &'a self,
        section: &'a Section,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        section
            .question_ids
            .iter()
            .filter_map(move |qid| self.questions.get(qid))
    }

    /// Every question paired with its section, in canonical order
    /// (section order, then question order within the section).
    pub fn questions(&self) -> impl Iterator<Item = (&Section, &Question)> + '_ {
        self.sections
            .iter()
            .flat_map(move |section| self.section_questions(section).map(move |q| (section, q)))
    }

    /// The known question id most similar to `id`, if any is close enough.
    #[must_use]
    pub fn closest_question_id(&self, id: &str) -> Option<&str> {
        self.questions
            .keys()
            .map(|known| (known, strsim::jaro_winkler(id, known)))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(known, _)| known.as_str())
    }

    /// Stable hash over the scoring-relevant shape of the catalogue.
    ///
    /// Text edits do not change the fingerprint; reordering, reweighting
    /// or retiering questions does.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Xxh3::new();
        for section in &self.sections {
            hasher.update(b"S");
            hasher.update(section.id.as_bytes());
            hasher.update(b"\n");
        }
        for (section, question) in self.questions() {
            let line = format!(
                "Q{}|{}|{}|{:?}|{:?}\n",
                question.id, section.id, question.weight, question.severity, question.effort
            );
            hasher.update(line.as_bytes());
        }
        format!("{:016x}", hasher.digest())
    }

    /// Parse and validate a catalogue from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: CatalogueDocument = serde_yaml::from_str(content).map_err(|e| {
            AssessmentError::catalogue(
                "YAML deserialization",
                CatalogueErrorKind::InvalidYaml(e.to_string()),
            )
        })?;
        Self::from_document(document)
    }

    /// Parse and validate a catalogue from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: CatalogueDocument = serde_json::from_str(content).map_err(|e| {
            AssessmentError::catalogue(
                "JSON deserialization",
                CatalogueErrorKind::InvalidJson(e.to_string()),
            )
        })?;
        Self::from_document(document)
    }

    /// Convert the nested file format into a validated catalogue.
    pub fn from_document(document: CatalogueDocument) -> Result<Self> {
        let mut sections = Vec::with_capacity(document.sections.len());
        let mut questions = Vec::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for section_doc in document.sections {
            let mut question_ids = Vec::with_capacity(section_doc.questions.len());
            for q in section_doc.questions {
                if let Some(first) = seen.insert(q.id.clone(), section_doc.id.clone()) {
                    if first != section_doc.id {
                        return Err(invalid(CatalogueErrorKind::QuestionInMultipleSections {
                            question: q.id,
                            first,
                            second: section_doc.id,
                        }));
                    }
                }
                question_ids.push(q.id.clone());
                questions.push(Question {
                    id: q.id,
                    section_id: section_doc.id.clone(),
                    text: q.text,
                    guidance: q.guidance,
                    reference: q.reference,
                    weight: q.weight,
                    severity: q.severity,
                    effort: q.effort,
                    remediation: q.remediation,
                });
            }
            sections.push(Section {
                id: section_doc.id,
                label: section_doc.label,
                icon: section_doc.icon,
                question_ids,
            });
        }

        Self::new(document.name, document.version, sections, questions)
    }

    /// Render back into the nested file format.
    #[must_use]
    pub fn to_document(&self) -> CatalogueDocument {
        CatalogueDocument {
            name: self.name.clone(),
            version: self.version.clone(),
            sections: self
                .sections
                .iter()
                .map(|section| SectionDocument {
                    id: section.id.clone(),
                    label: section.label.clone(),
                    icon: section.icon.clone(),
                    questions: self
                        .section_questions(section)
                        .map(|q| QuestionDocument {
                            id: q.id.clone(),
                            text: q.text.clone(),
                            guidance: q.guidance.clone(),
                            reference: q.reference.clone(),
                            weight: q.weight,
                            severity: q.severity,
                            effort: q.effort,
                            remediation: q.remediation.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

fn invalid(kind: CatalogueErrorKind) -> AssessmentError {
    AssessmentError::catalogue("validation", kind)
}

fn validate_question(question: &Question) -> Result<()> {
    if !(1..=3).contains(&question.weight) {
        return Err(invalid(CatalogueErrorKind::InvalidWeight {
            question: question.id.clone(),
            weight: question.weight,
        }));
    }
    if question.id.trim().is_empty() {
        return Err(invalid(CatalogueErrorKind::EmptyText {
            id: question.section_id.clone(),
            field: "question id",
        }));
    }
    if question.text.trim().is_empty() {
        return Err(invalid(CatalogueErrorKind::EmptyText {
            id: question.id.clone(),
            field: "text",
        }));
    }
    Ok(())
}

// ============================================================================
// File format
// ============================================================================

/// On-disk catalogue layout: sections with their questions nested inline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogueDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub sections: Vec<SectionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionDocument {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuestionDocument {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub guidance: String,
    #[serde(default)]
    pub reference: String,
    pub weight: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<Effort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}
