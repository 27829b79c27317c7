//! Answers and the answer store.
//!
//! The [`AnswerStore`] is the only mutable piece of an assessment. It is
//! filled one answer at a time and may be partially populated; scoring
//! functions only ever borrow it.

use super::catalogue::{Catalogue, MAX_ANSWER_SCORE};
use crate::error::{AnswerErrorKind, AssessmentError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The chosen answer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AnswerValue {
    #[serde(rename = "compliant", alias = "yes")]
    Compliant,
    #[serde(rename = "partial")]
    Partial,
    #[serde(rename = "non_compliant", alias = "no")]
    NonCompliant,
    #[serde(rename = "not_applicable", alias = "na")]
    NotApplicable,
}

impl AnswerValue {
    pub const ALL: [Self; 4] = [
        Self::Compliant,
        Self::Partial,
        Self::NonCompliant,
        Self::NotApplicable,
    ];

    /// Numeric score, or `None` for answers excluded from scoring.
    #[must_use]
    pub const fn score(self) -> Option<u32> {
        match self {
            Self::Compliant => Some(MAX_ANSWER_SCORE),
            Self::Partial => Some(2),
            Self::NonCompliant => Some(1),
            Self::NotApplicable => None,
        }
    }

    /// Whether this answer produces a finding.
    #[must_use]
    pub const fn is_gap(self) -> bool {
        matches!(self, Self::Partial | Self::NonCompliant)
    }

    /// Option label as presented to the respondent.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Yes, fully in place",
            Self::Partial => "Partially in place",
            Self::NonCompliant => "No / not started",
            Self::NotApplicable => "Not applicable",
        }
    }

    /// Machine name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Partial => "partial",
            Self::NonCompliant => "non_compliant",
            Self::NotApplicable => "not_applicable",
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from question id to chosen answer.
///
/// Unanswered questions simply have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: IndexMap<String, AnswerValue>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer after checking the id exists in `catalogue`.
    ///
    /// Returns the previous answer for the question, if any.
    pub fn set_answer(
        &mut self,
        catalogue: &Catalogue,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<Option<AnswerValue>> {
        if !catalogue.contains_question(question_id) {
            return Err(AssessmentError::unknown_question(
                question_id,
                catalogue.closest_question_id(question_id).map(str::to_string),
            ));
        }
        Ok(self.answers.insert(question_id.to_string(), value))
    }

    /// Record an answer without checking the id.
    ///
    /// Entries for ids absent from the catalogue are ignored by scoring.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(question_id.into(), value)
    }

    /// Remove an answer, returning the question to "unanswered".
    pub fn clear_answer(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.answers.shift_remove(question_id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<AnswerValue> {
        self.answers.get(question_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Entries in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, AnswerValue)> {
        self.answers.iter().map(|(id, value)| (id.as_str(), *value))
    }

    /// Number of entries that refer to questions in `catalogue`.
    #[must_use]
    pub fn answered_in(&self, catalogue: &Catalogue) -> usize {
        self.answers
            .keys()
            .filter(|id| catalogue.contains_question(id))
            .count()
    }

    /// Ids with no matching question in `catalogue`.
    #[must_use]
    pub fn unknown_ids<'a>(&'a self, catalogue: &Catalogue) -> Vec<&'a str> {
        self.answers
            .keys()
            .filter(|id| !catalogue.contains_question(id))
            .map(String::as_str)
            .collect()
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Optional details about the organisation being assessed.
///
/// Echoed into report metadata; never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OrganisationProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Headcount band, e.g. `250–999`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<String>,
    /// Requests received in the last twelve months, e.g. `11–50`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_requests: Option<String>,
}

impl OrganisationProfile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sector.is_none()
            && self.employees.is_none()
            && self.annual_requests.is_none()
    }
}

/// Answer sheet file: an organisation profile plus raw answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AnswerSheet {
    #[serde(default)]
    pub organisation: OrganisationProfile,
    #[serde(default)]
    pub answers: IndexMap<String, AnswerValue>,
}

impl AnswerSheet {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            AssessmentError::answers(
                "YAML deserialization",
                AnswerErrorKind::InvalidYaml(e.to_string()),
            )
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            AssessmentError::answers(
                "JSON deserialization",
                AnswerErrorKind::InvalidJson(e.to_string()),
            )
        })
    }

    /// Build an answer store from the sheet.
    ///
    /// With `strict`, the first id unknown to `catalogue` is an error.
    /// Otherwise unknown ids are logged and kept; scoring ignores them.
    pub fn into_store(self, catalogue: &Catalogue, strict: bool) -> Result<(OrganisationProfile, AnswerStore)> {
        let mut store = AnswerStore::new();
        if strict {
            for (id, value) in self.answers {
                store.set_answer(catalogue, &id, value)?;
            }
            return Ok((self.organisation, store));
        }

        for (id, value) in self.answers {
            store.insert(id, value);
        }
        for id in store.unknown_ids(catalogue) {
            match catalogue.closest_question_id(id) {
                Some(suggestion) => tracing::warn!(
                    "Ignoring answer for unknown question '{id}' (did you mean '{suggestion}'?)"
                ),
                None => tracing::warn!("Ignoring answer for unknown question '{id}'"),
            }
        }
        Ok((self.organisation, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_scores() {
        assert_eq!(AnswerValue::Compliant.score(), Some(3));
        assert_eq!(AnswerValue::Partial.score(), Some(2));
        assert_eq!(AnswerValue::NonCompliant.score(), Some(1));
        assert_eq!(AnswerValue::NotApplicable.score(), None);
    }

    #[test]
    fn test_gap_answers() {
        assert!(AnswerValue::Partial.is_gap());
        assert!(AnswerValue::NonCompliant.is_gap());
        assert!(!AnswerValue::Compliant.is_gap());
        assert!(!AnswerValue::NotApplicable.is_gap());
    }

    #[test]
    fn test_serde_aliases() {
        let yaml = "gov-1: yes\ngov-2: partial\ngov-3: no\ngov-4: na\ngov-5: non_compliant\n";
        let store: AnswerStore = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(store.get("gov-1"), Some(AnswerValue::Compliant));
        assert_eq!(store.get("gov-3"), Some(AnswerValue::NonCompliant));
        assert_eq!(store.get("gov-4"), Some(AnswerValue::NotApplicable));
        assert_eq!(store.get("gov-5"), Some(AnswerValue::NonCompliant));

        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with("{\"gov-1\":\"compliant\""), "{json}");
    }

    #[test]
    fn test_set_answer_rejects_unknown_id() {
        let catalogue = Catalogue::builtin();
        let mut store = AnswerStore::new();

        assert_eq!(
            store.set_answer(catalogue, "gov-1", AnswerValue::Partial).unwrap(),
            None
        );
        assert_eq!(
            store.set_answer(catalogue, "gov-1", AnswerValue::Compliant).unwrap(),
            Some(AnswerValue::Partial)
        );

        match store.set_answer(catalogue, "gov-99", AnswerValue::Compliant) {
            Err(AssessmentError::Answers {
                source: AnswerErrorKind::UnknownQuestion { id, .. },
                ..
            }) => assert_eq!(id, "gov-99"),
            other => panic!("Expected unknown question error, got {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_answer() {
        let mut store = AnswerStore::new();
        store.insert("gov-1", AnswerValue::Partial);
        assert_eq!(store.clear_answer("gov-1"), Some(AnswerValue::Partial));
        assert!(store.is_empty());
        assert_eq!(store.clear_answer("gov-1"), None);
    }

    #[test]
    fn test_unknown_ids_and_answered_count() {
        let catalogue = Catalogue::builtin();
        let mut store = AnswerStore::new();
        store.insert("gov-1", AnswerValue::Compliant);
        store.insert("stale-7", AnswerValue::NonCompliant);
        assert_eq!(store.answered_in(catalogue), 1);
        assert_eq!(store.unknown_ids(catalogue), vec!["stale-7"]);
    }

    #[test]
    fn test_sheet_lenient_keeps_unknown_ids() {
        let sheet = AnswerSheet::from_yaml_str(
            "organisation:\n  name: Acme\nanswers:\n  gov-1: yes\n  gov-x: no\n",
        )
        .unwrap();
        let (profile, store) = sheet.into_store(Catalogue::builtin(), false).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Acme"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sheet_strict_rejects_unknown_ids() {
        let sheet = AnswerSheet::from_json_str(r#"{"answers": {"gov-x": "no"}}"#).unwrap();
        assert!(sheet.into_store(Catalogue::builtin(), true).is_err());
    }

    #[test]
    fn test_sheet_rejects_unknown_answer_value() {
        let result = AnswerSheet::from_json_str(r#"{"answers": {"gov-1": "sometimes"}}"#);
        assert!(matches!(
            result,
            Err(AssessmentError::Answers {
                source: AnswerErrorKind::InvalidJson(_),
                ..
            })
        ));
    }

    #[test]
    fn test_profile_is_empty() {
        assert!(OrganisationProfile::default().is_empty());
        let profile = OrganisationProfile {
            sector: Some("Education".to_string()),
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }
}
