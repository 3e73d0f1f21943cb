//! Read-only lexicon: lemma + category to base form and irregular cells.
//!
//! A lexicon miss is never an error anywhere in the pipeline; the morphology
//! stage falls back to its regular rules.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::features::{Gender, Number, Person};
use crate::LexicalCategory;

/// Key of one cell in a lexical unit's irregular-form table. The verb keys
/// span the full (form x tense x number x person) space; the remaining keys
/// cover nominal variation (plural, feminine, superlative) and defective
/// cells (gerund, participles, the impersonal present).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormKey {
    Present1s,
    Present2s,
    Present3s,
    Present1p,
    Present2p,
    Present3p,
    Past1s,
    Past2s,
    Past3s,
    Past1p,
    Past2p,
    Past3p,
    Imperfect1s,
    Imperfect2s,
    Imperfect3s,
    Imperfect1p,
    Imperfect2p,
    Imperfect3p,
    Pluperfect1s,
    Pluperfect2s,
    Pluperfect3s,
    Pluperfect1p,
    Pluperfect2p,
    Pluperfect3p,
    Future1s,
    Future2s,
    Future3s,
    Future1p,
    Future2p,
    Future3p,
    Conditional1s,
    Conditional2s,
    Conditional3s,
    Conditional1p,
    Conditional2p,
    Conditional3p,
    Subjunctive1s,
    Subjunctive2s,
    Subjunctive3s,
    Subjunctive1p,
    Subjunctive2p,
    Subjunctive3p,
    ImperfectSubjunctive1s,
    ImperfectSubjunctive2s,
    ImperfectSubjunctive3s,
    ImperfectSubjunctive1p,
    ImperfectSubjunctive2p,
    ImperfectSubjunctive3p,
    FutureSubjunctive1s,
    FutureSubjunctive2s,
    FutureSubjunctive3s,
    FutureSubjunctive1p,
    FutureSubjunctive2p,
    FutureSubjunctive3p,
    Imperative2s,
    Imperative3s,
    Imperative1p,
    Imperative2p,
    Imperative3p,
    Gerund,
    PastParticiple,
    PastParticiplePlural,
    PastParticipleFeminineSingular,
    PastParticipleFemininePlural,
    Impersonal,
    Plural,
    FeminineSingular,
    FemininePlural,
    Superlative,
    SuperlativePlural,
    SuperlativeFeminine,
    SuperlativeFemininePlural,
    Comparative,
}

impl FormKey {
    /// The finite indicative cell for a tense/number/person combination.
    pub fn indicative(tense: crate::features::Tense, number: Number, person: Person) -> FormKey {
        use crate::features::Tense::*;
        use FormKey::*;
        let cells: [FormKey; 6] = match tense {
            Present => [Present1s, Present2s, Present3s, Present1p, Present2p, Present3p],
            Past => [Past1s, Past2s, Past3s, Past1p, Past2p, Past3p],
            Imperfect => [
                Imperfect1s,
                Imperfect2s,
                Imperfect3s,
                Imperfect1p,
                Imperfect2p,
                Imperfect3p,
            ],
            Pluperfect => [
                Pluperfect1s,
                Pluperfect2s,
                Pluperfect3s,
                Pluperfect1p,
                Pluperfect2p,
                Pluperfect3p,
            ],
            Future => [Future1s, Future2s, Future3s, Future1p, Future2p, Future3p],
            Conditional => [
                Conditional1s,
                Conditional2s,
                Conditional3s,
                Conditional1p,
                Conditional2p,
                Conditional3p,
            ],
        };
        cells[Self::cell_index(number, person)]
    }

    /// The subjunctive cell for a tense/number/person combination. Tenses
    /// other than present/imperfect/future have no subjunctive; they map to
    /// the present subjunctive.
    pub fn subjunctive(tense: crate::features::Tense, number: Number, person: Person) -> FormKey {
        use crate::features::Tense::*;
        use FormKey::*;
        let cells: [FormKey; 6] = match tense {
            Imperfect => [
                ImperfectSubjunctive1s,
                ImperfectSubjunctive2s,
                ImperfectSubjunctive3s,
                ImperfectSubjunctive1p,
                ImperfectSubjunctive2p,
                ImperfectSubjunctive3p,
            ],
            Future => [
                FutureSubjunctive1s,
                FutureSubjunctive2s,
                FutureSubjunctive3s,
                FutureSubjunctive1p,
                FutureSubjunctive2p,
                FutureSubjunctive3p,
            ],
            _ => [
                Subjunctive1s,
                Subjunctive2s,
                Subjunctive3s,
                Subjunctive1p,
                Subjunctive2p,
                Subjunctive3p,
            ],
        };
        cells[Self::cell_index(number, person)]
    }

    /// The imperative cell, where one exists (there is no first singular
    /// imperative).
    pub fn imperative(number: Number, person: Person) -> Option<FormKey> {
        use FormKey::*;
        match (number, person) {
            (Number::Plural, Person::First) => Some(Imperative1p),
            (Number::Plural, Person::Second) => Some(Imperative2p),
            (Number::Plural, Person::Third) => Some(Imperative3p),
            (_, Person::First) => None,
            (_, Person::Second) => Some(Imperative2s),
            (_, Person::Third) => Some(Imperative3s),
        }
    }

    fn cell_index(number: Number, person: Person) -> usize {
        let p = match person {
            Person::First => 0,
            Person::Second => 1,
            Person::Third => 2,
        };
        match number {
            Number::Plural => 3 + p,
            _ => p,
        }
    }
}

/// Sparse irregular-form table, also used for per-instance overrides on a
/// single word node.
pub type InflectionTable = BTreeMap<FormKey, String>;

/// One lexicon entry: a lemma with a category, optional default features and
/// a sparse irregular-form table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LexicalUnit {
    pub lemma: String,
    pub category: LexicalCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub proper: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub possessive: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub forms: InflectionTable,
}

impl LexicalUnit {
    pub fn new(lemma: impl Into<String>, category: LexicalCategory) -> Self {
        LexicalUnit {
            lemma: lemma.into(),
            category,
            gender: None,
            number: None,
            person: None,
            proper: false,
            possessive: false,
            forms: InflectionTable::new(),
        }
    }

    pub fn form(&self, key: FormKey) -> Option<&str> {
        self.forms.get(&key).map(String::as_str)
    }
}

static BUILTIN: &str = include_str!("../data/lexicon.json");

/// An immutable store of lexical units indexed by (lemma, category).
/// Realisations share it by reference; it is never mutated after loading.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    units: Vec<LexicalUnit>,
    index: FxHashMap<(String, LexicalCategory), usize>,
}

impl Lexicon {
    /// The bundled lexicon of Galician function words and common irregular
    /// verbs. A malformed bundle degrades to an empty lexicon (the unit
    /// tests pin the bundle as well-formed and non-empty).
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN).unwrap_or_default()
    }

    /// Loads a lexicon from a JSON array of [`LexicalUnit`]s.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let units: Vec<LexicalUnit> = serde_json::from_str(json)?;
        let mut lexicon = Lexicon::default();
        for unit in units {
            lexicon.add(unit);
        }
        Ok(lexicon)
    }

    pub fn add(&mut self, unit: LexicalUnit) {
        let key = (unit.lemma.clone(), unit.category);
        self.index.insert(key, self.units.len());
        self.units.push(unit);
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn lookup(&self, lemma: &str, category: LexicalCategory) -> Option<&LexicalUnit> {
        self.index
            .get(&(lemma.to_owned(), category))
            .map(|&i| &self.units[i])
    }

    /// Looks the lemma up under every category, in a fixed preference order
    /// (pronoun first: bare clitics like "o" shadow the homographic
    /// article, which is only ever built as an explicit specifier).
    pub fn lookup_any(&self, lemma: &str) -> Option<&LexicalUnit> {
        const ORDER: [LexicalCategory; 8] = [
            LexicalCategory::Pronoun,
            LexicalCategory::Noun,
            LexicalCategory::Verb,
            LexicalCategory::Adjective,
            LexicalCategory::Adverb,
            LexicalCategory::Determiner,
            LexicalCategory::Preposition,
            LexicalCategory::Conjunction,
        ];
        ORDER.iter().find_map(|&c| self.lookup(lemma, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Tense;

    #[test]
    fn builtin_lexicon_loads() {
        let lexicon = Lexicon::builtin();
        assert!(!lexicon.is_empty());
        let ser = lexicon.lookup("ser", LexicalCategory::Verb).unwrap();
        assert_eq!(ser.form(FormKey::Present3s), Some("é"));
    }

    #[test]
    fn lookup_miss_is_none() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.lookup("zzz", LexicalCategory::Verb).is_none());
    }

    #[test]
    fn indicative_cells() {
        assert_eq!(
            FormKey::indicative(Tense::Present, Number::Singular, Person::First),
            FormKey::Present1s
        );
        assert_eq!(
            FormKey::indicative(Tense::Past, Number::Plural, Person::Third),
            FormKey::Past3p
        );
        assert_eq!(
            FormKey::indicative(Tense::Future, Number::Both, Person::Second),
            FormKey::Future2s
        );
    }

    #[test]
    fn form_keys_round_trip_snake_case() {
        let json = serde_json::to_string(&FormKey::ImperfectSubjunctive1p).unwrap();
        assert_eq!(json, "\"imperfect_subjunctive1p\"");
        let key: FormKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, FormKey::ImperfectSubjunctive1p);
    }
}
