//! The flat word-token sequence handed from the syntax stage to the
//! morphology stage, and the frozen literal text it produces.
//!
//! The syntax stage always appends flat — nested sequences never exist, so
//! a singleton sequence is its sole element by construction. Tokens carry a
//! governor-resolved [`Agreement`] snapshot so the morphology stage can
//! honour governor-driven agreement without access to the source tree.

use crate::features::{Agreement, Features, PronounCase};
use crate::lexicon::InflectionTable;
use crate::{DiscourseFunction, LexicalCategory};

/// One word-level unit of the intermediate sequence.
#[derive(Clone, Debug)]
pub struct WordToken {
    /// Lemma for word tokens; the surface text itself for literal tokens.
    pub lemma: String,
    pub category: LexicalCategory,
    pub features: Features,
    pub overrides: InflectionTable,
    pub function: DiscourseFunction,
    /// Agreement resolved from the governing node at syntax time.
    pub agreement: Agreement,
    /// Case role, stamped on pronoun tokens only.
    pub case: Option<PronounCase>,
    /// Canned text: realised verbatim.
    pub literal: bool,
    /// Inflection suppressed (wh words, fronted bare forms).
    pub no_morphology: bool,
}

impl WordToken {
    pub fn word(
        lemma: impl Into<String>,
        category: LexicalCategory,
        function: DiscourseFunction,
    ) -> Self {
        WordToken {
            lemma: lemma.into(),
            category,
            features: Features::default(),
            overrides: InflectionTable::new(),
            function,
            agreement: Agreement::default(),
            case: None,
            literal: false,
            no_morphology: false,
        }
    }

    pub fn canned(text: impl Into<String>, function: DiscourseFunction) -> Self {
        let mut token = WordToken::word(text, LexicalCategory::Conjunction, function);
        token.literal = true;
        token
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self.category,
            LexicalCategory::Verb | LexicalCategory::Modal
        ) && !self.literal
    }

    pub fn is_clitic_pronoun(&self) -> bool {
        self.category == LexicalCategory::Pronoun
            && self.case.is_some_and(PronounCase::is_clitic)
    }
}

/// The ordered sequence produced by the syntax stage.
#[derive(Clone, Debug, Default)]
pub struct TokenSeq {
    pub tokens: Vec<WordToken>,
}

impl TokenSeq {
    pub fn new(tokens: Vec<WordToken>) -> Self {
        TokenSeq { tokens }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordToken> {
        self.tokens.iter()
    }

    pub fn first_verb(&self) -> Option<usize> {
        self.tokens.iter().position(WordToken::is_verb)
    }
}

/// A final, immutable surface string with the discourse markers the
/// downstream orthography stage needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralText {
    pub text: String,
    pub function: DiscourseFunction,
    pub appositive: bool,
}
