//! Morphology engine: per-word inflection followed by the order-sensitive
//! cross-word pass (preposition contraction, possessive article insertion,
//! clitic placement and fusion, re-accentuation on enclisis).
//!
//! The sequence is processed as an indexable vector of token slots; each
//! cross-word rule computes a local rewrite (indices to blank, new text to
//! set) and applies it atomically. A rule whose table has no entry for the
//! pair at hand leaves the words separate — never an error.

pub(crate) mod accentuation;
mod nominal;
mod pronouns;
mod verbs;

use grammar_core::{
    LexicalCategory, LexicalUnit, Lexicon, LiteralText, PronounCase, TokenSeq, WordToken,
};

use accentuation::attach_enclitic;
use pronouns::fuse_clitics;

/// The global clitic-position decision, computed once per realisation by
/// the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliticPlacement {
    /// Clitics attach after the verb (the default).
    Enclitic,
    /// Clitics move to immediately precede the verb.
    Proclitic,
}

struct Slot {
    token: WordToken,
    text: String,
}

impl Slot {
    fn is_live_verb(&self) -> bool {
        self.token.is_verb() && !self.text.is_empty()
    }
}

/// Runs the morphology stage over a syntax-realised sequence.
pub(crate) fn realise_sequence(
    seq: TokenSeq,
    lexicon: &Lexicon,
    placement: CliticPlacement,
) -> Vec<LiteralText> {
    let mut slots: Vec<Slot> = seq
        .tokens
        .into_iter()
        .map(|token| {
            let text = inflect(&token, lexicon);
            Slot { token, text }
        })
        .collect();

    contract_prepositions(&mut slots);
    insert_possessive_article(&mut slots);
    place_clitics(&mut slots, placement);

    slots
        .into_iter()
        .filter(|s| !s.text.is_empty())
        .map(|s| LiteralText {
            text: s.text,
            function: s.token.function,
            appositive: s.token.features.appositive,
        })
        .collect()
}

/// Per-word inflection, dispatched by lexical category.
fn inflect(token: &WordToken, lexicon: &Lexicon) -> String {
    if token.literal || token.no_morphology {
        return token.lemma.clone();
    }
    let unit: Option<&LexicalUnit> = match token.category {
        // modals conjugate with their verb entry
        LexicalCategory::Modal => lexicon.lookup(&token.lemma, LexicalCategory::Verb),
        category => lexicon.lookup(&token.lemma, category),
    };
    match token.category {
        LexicalCategory::Noun => nominal::noun(token, unit),
        LexicalCategory::Verb | LexicalCategory::Modal => verbs::verb(token, unit),
        LexicalCategory::Adjective => nominal::adjective(token, unit),
        LexicalCategory::Adverb => nominal::adverb(token, unit),
        LexicalCategory::Determiner => nominal::determiner(token, unit),
        LexicalCategory::Pronoun => pronouns::pronoun(token),
        LexicalCategory::Preposition | LexicalCategory::Conjunction => token.lemma.clone(),
    }
}

const DEFINITE_ARTICLES: [&str; 4] = ["o", "a", "os", "as"];
const INDEFINITE_ARTICLES: [&str; 4] = ["un", "unha", "uns", "unhas"];
/// Prepositions that also fuse with indefinite articles.
const INDEFINITE_FUSING: [&str; 3] = ["con", "de", "en"];

fn contraction_prefix(preposition: &str) -> Option<&'static str> {
    match preposition {
        "a" => Some("a"),
        "con" => Some("c"),
        "de" => Some("d"),
        "en" => Some("n"),
        "por" => Some("pol"),
        "tras" => Some("tral"),
        _ => None,
    }
}

/// Preposition + article fusion: the preposition token is rewritten to the
/// fused form and the article loses its fused leading word, keeping any
/// trailing complement text.
fn contract_prepositions(slots: &mut [Slot]) {
    for i in 0..slots.len() {
        if slots[i].token.category != LexicalCategory::Preposition || slots[i].text.is_empty() {
            continue;
        }
        let Some(prefix) = contraction_prefix(&slots[i].text) else {
            continue;
        };
        let Some(j) = slots
            .iter()
            .enumerate()
            .skip(i + 1)
            .find(|(_, s)| !s.text.is_empty())
            .map(|(j, _)| j)
        else {
            continue;
        };
        let (article, rest) = match slots[j].text.split_once(' ') {
            Some((a, r)) => (a.to_owned(), r.to_owned()),
            None => (slots[j].text.clone(), String::new()),
        };
        let fuses = DEFINITE_ARTICLES.contains(&article.as_str())
            || (INDEFINITE_ARTICLES.contains(&article.as_str())
                && INDEFINITE_FUSING.contains(&slots[i].text.as_str()));
        if !fuses {
            continue;
        }
        let fused = if prefix == "a" && article.starts_with('a') {
            format!("á{}", &article[1..])
        } else {
            format!("{prefix}{article}")
        };
        log::trace!("contracting {} + {} -> {}", slots[i].text, article, fused);
        slots[i].text = fused;
        slots[j].text = rest;
    }
}

const MASCULINE_POSSESSIVES: [&str; 5] = ["meu", "teu", "seu", "noso", "voso"];
const FEMININE_POSSESSIVES: [&str; 5] = ["miña", "túa", "súa", "nosa", "vosa"];
const MASCULINE_POSSESSIVES_PLURAL: [&str; 5] = ["meus", "teus", "seus", "nosos", "vosos"];
const FEMININE_POSSESSIVES_PLURAL: [&str; 5] = ["miñas", "túas", "súas", "nosas", "vosas"];

/// A bare possessive opening the sequence takes the matching definite
/// article: "túa xirafa ..." -> "a túa xirafa ...".
fn insert_possessive_article(slots: &mut [Slot]) {
    let Some(first) = slots.iter_mut().find(|s| !s.text.is_empty()) else {
        return;
    };
    let word = first.text.split(' ').next().unwrap_or_default();
    let article = if MASCULINE_POSSESSIVES.contains(&word) {
        "o"
    } else if FEMININE_POSSESSIVES.contains(&word) {
        "a"
    } else if MASCULINE_POSSESSIVES_PLURAL.contains(&word) {
        "os"
    } else if FEMININE_POSSESSIVES_PLURAL.contains(&word) {
        "as"
    } else {
        return;
    };
    first.text = format!("{article} {}", first.text);
}

fn clitic_rank(case: PronounCase) -> usize {
    match case {
        PronounCase::Reflexive => 0,
        PronounCase::IndirectObject => 1,
        _ => 2,
    }
}

/// The case that drives clustering: che/lle/lles are dative by form.
fn effective_case(token: &WordToken) -> PronounCase {
    if matches!(token.lemma.as_str(), "che" | "lle" | "lles") {
        PronounCase::IndirectObject
    } else {
        token.case.unwrap_or(PronounCase::DirectObject)
    }
}

/// Applies the clitic-position decision: enclitics join the verb's text via
/// the re-accentuation rule; proclitics move to immediately precede the
/// first verb. Indirect-object + direct-object pairs fuse either way.
fn place_clitics(slots: &mut Vec<Slot>, placement: CliticPlacement) {
    let clitic_indices: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.token.is_clitic_pronoun() && !s.text.is_empty())
        .map(|(i, _)| i)
        .collect();
    if clitic_indices.is_empty() {
        return;
    }

    match placement {
        CliticPlacement::Proclitic => {
            let mut cluster: Vec<Slot> = Vec::new();
            for &i in clitic_indices.iter().rev() {
                cluster.push(slots.remove(i));
            }
            cluster.reverse();
            cluster.sort_by_key(|s| clitic_rank(effective_case(&s.token)));
            // fuse an adjacent dative + accusative pair
            for k in 0..cluster.len().saturating_sub(1) {
                if effective_case(&cluster[k].token) == PronounCase::IndirectObject
                    && effective_case(&cluster[k + 1].token) == PronounCase::DirectObject
                {
                    if let Some(fused) = fuse_clitics(&cluster[k].text, &cluster[k + 1].text) {
                        cluster[k].text = fused;
                        cluster[k + 1].text = String::new();
                    }
                }
            }
            let at = slots
                .iter()
                .position(Slot::is_live_verb)
                .unwrap_or(slots.len());
            for slot in cluster.into_iter().rev() {
                slots.insert(at, slot);
            }
        }
        CliticPlacement::Enclitic => {
            let first = clitic_indices[0];
            let Some(verb) = slots[..first]
                .iter()
                .rposition(Slot::is_live_verb)
                .or_else(|| slots.iter().position(Slot::is_live_verb))
            else {
                return;
            };
            let mut ordered = clitic_indices;
            ordered.sort_by_key(|&i| clitic_rank(effective_case(&slots[i].token)));

            let mut attachments: Vec<String> = Vec::new();
            let mut k = 0;
            while k < ordered.len() {
                let i = ordered[k];
                let fused_pair = ordered.get(k + 1).and_then(|&j| {
                    (effective_case(&slots[i].token) == PronounCase::IndirectObject
                        && effective_case(&slots[j].token) == PronounCase::DirectObject)
                        .then(|| fuse_clitics(&slots[i].text, &slots[j].text))
                        .flatten()
                });
                match fused_pair {
                    Some(fused) => {
                        attachments.push(fused);
                        slots[i].text = String::new();
                        slots[ordered[k + 1]].text = String::new();
                        k += 2;
                    }
                    None => {
                        attachments.push(slots[i].text.clone());
                        slots[i].text = String::new();
                        k += 1;
                    }
                }
            }
            for clitic in attachments {
                let attached = attach_enclitic(&slots[verb].text, &clitic);
                log::trace!("enclisis: {} + {} -> {}", slots[verb].text, clitic, attached);
                slots[verb].text = attached;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar_core::{DiscourseFunction, Person};

    fn word_slot(lemma: &str, category: LexicalCategory) -> WordToken {
        WordToken::word(lemma, category, DiscourseFunction::Complement)
    }

    fn run(tokens: Vec<WordToken>, placement: CliticPlacement) -> String {
        let lexicon = Lexicon::builtin();
        let out = realise_sequence(TokenSeq::new(tokens), &lexicon, placement);
        out.iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn clitic(lemma: &str, person: Person, case: PronounCase) -> WordToken {
        let mut t = word_slot(lemma, LexicalCategory::Pronoun);
        t.features.person = Some(person);
        t.case = Some(case);
        t
    }

    #[test]
    fn contraction_table_exactness() {
        for (prep, art, expected) in [
            ("a", "o", "ao"),
            ("a", "a", "á"),
            ("a", "os", "aos"),
            ("a", "as", "ás"),
            ("con", "unha", "cunha"),
            ("con", "o", "co"),
            ("de", "a", "da"),
            ("en", "o", "no"),
            ("en", "un", "nun"),
            ("por", "o", "polo"),
            ("tras", "o", "tralo"),
        ] {
            let prep = word_slot(prep, LexicalCategory::Preposition);
            let article = WordToken::canned(format!("{art} can"), DiscourseFunction::Complement);
            let text = run(vec![prep, article], CliticPlacement::Enclitic);
            assert_eq!(text, format!("{expected} can"));
        }
    }

    #[test]
    fn indefinite_articles_only_fuse_with_con_de_en() {
        let prep = word_slot("a", LexicalCategory::Preposition);
        let article = WordToken::canned("un amigo", DiscourseFunction::Complement);
        assert_eq!(
            run(vec![prep, article], CliticPlacement::Enclitic),
            "a un amigo"
        );
    }

    #[test]
    fn unknown_preposition_degrades_to_separate_words() {
        let prep = word_slot("sen", LexicalCategory::Preposition);
        let article = WordToken::canned("o can", DiscourseFunction::Complement);
        assert_eq!(
            run(vec![prep, article], CliticPlacement::Enclitic),
            "sen o can"
        );
    }

    #[test]
    fn sequence_initial_possessive_takes_an_article() {
        let possessive = WordToken::canned("túa xirafa", DiscourseFunction::Subject);
        assert_eq!(
            run(vec![possessive], CliticPlacement::Enclitic),
            "a túa xirafa"
        );
    }

    #[test]
    fn enclitic_cluster_fuses_and_attaches() {
        let mut verb = word_slot("dicir", LexicalCategory::Verb);
        verb.agreement.person = Some(Person::Third);
        let io = clitic("me", Person::First, PronounCase::IndirectObject);
        let direct = clitic("o", Person::Third, PronounCase::DirectObject);
        assert_eq!(
            run(vec![verb, io, direct], CliticPlacement::Enclitic),
            "dimo"
        );
    }

    #[test]
    fn proclitic_cluster_moves_before_the_verb() {
        let non = word_slot("non", LexicalCategory::Adverb);
        let mut verb = word_slot("dicir", LexicalCategory::Verb);
        verb.agreement.person = Some(Person::Third);
        let io = clitic("me", Person::First, PronounCase::IndirectObject);
        assert_eq!(
            run(vec![non, verb, io], CliticPlacement::Proclitic),
            "non me di"
        );
    }

    #[test]
    fn never_two_adjacent_unfused_object_clitics() {
        for (io_lemma, io_person) in [("me", Person::First), ("che", Person::Second)] {
            let mut verb = word_slot("dicir", LexicalCategory::Verb);
            verb.agreement.person = Some(Person::Third);
            let io = clitic(io_lemma, io_person, PronounCase::IndirectObject);
            let direct = clitic("o", Person::Third, PronounCase::DirectObject);
            let text = run(vec![verb, io, direct], CliticPlacement::Enclitic);
            assert_eq!(text.split(' ').count(), 1, "unfused clitics in {text:?}");
        }
    }
}
