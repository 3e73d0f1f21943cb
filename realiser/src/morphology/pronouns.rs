//! Personal pronoun realisation via the fixed
//! (number x case-role x person/gender) table.

use grammar_core::{Gender, Number, Person, PronounCase, WordToken};

/// Rows indexed by [`PronounCase::row`]: subject, direct object, reflexive,
/// indirect object, possessive (singular then plural possessed),
/// prepositional. Person index is 0/1 for first/second and 2 + gender
/// offset for third.
const PRONOUNS: [[&[&str]; 6]; 2] = [
    [
        &["eu", "ti", "el", "ela"],
        &["me", "te", "o", "a"],
        &["me", "te", "se", "se", "se"],
        &["me", "che", "lle", "lle", "lle"],
        &["meu", "teu", "seu", "súa", "seu", "meus", "teus", "seus", "súas", "seus"],
        &["min", "ti", "el", "ela"],
    ],
    [
        &["nós", "vós", "eles", "elas"],
        &["nos", "vos", "os", "as"],
        &["nos", "vos", "se", "se", "se"],
        &["nos", "vos", "lles", "lles", "lles"],
        &["noso", "voso", "seu", "súa", "seu", "nosos", "vosos", "seus", "súas"],
        &["nós", "vós", "eles", "elas"],
    ],
];

/// Interrogative and relative words realise as themselves.
pub(crate) const WH_WORDS: [&str; 13] = [
    "quen", "que", "cal", "cales", "onde", "porque", "porqué", "por que", "como", "canto",
    "canta", "cantos", "cantas",
];

pub(crate) fn is_wh_word(lemma: &str) -> bool {
    WH_WORDS.contains(&lemma)
}

/// Renders a personal pronoun from the table; anything the table does not
/// cover (wh words, lemmas without person) passes through unchanged.
pub(crate) fn pronoun(token: &WordToken) -> String {
    if is_wh_word(&token.lemma) {
        return token.lemma.clone();
    }
    let Some(person) = token.features.person else {
        return token.lemma.clone();
    };

    // che/lle/lles are dative by form regardless of the annotated function
    let case = if matches!(token.lemma.as_str(), "che" | "lle" | "lles") {
        PronounCase::IndirectObject
    } else {
        token.case.unwrap_or(PronounCase::Subject)
    };

    let number_index = usize::from(token.features.number == Some(Number::Plural));
    let mut person_index = match person {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => match token.features.gender.unwrap_or(Gender::Masculine) {
            Gender::Masculine => 2,
            Gender::Feminine => 3,
            Gender::Neuter => 4,
        },
    };
    if case == PronounCase::Possessive && token.agreement.number() == Number::Plural {
        // plural possessed noun selects the second half of the row
        person_index += 5;
    }

    PRONOUNS[number_index][case.row()]
        .get(person_index)
        .map(|s| (*s).to_owned())
        .unwrap_or_else(|| token.lemma.clone())
}

/// Fuses an adjacent indirect-object + direct-object clitic pair into the
/// single token Galician requires. Returns `None` for pairs outside the
/// table, which are then left unfused.
pub(crate) fn fuse_clitics(indirect: &str, direct: &str) -> Option<String> {
    match indirect {
        "me" | "che" | "lle" => Some(format!("{}{direct}", &indirect[..indirect.len() - 1])),
        "nos" | "vos" | "lles" => Some(format!("{}l{direct}", &indirect[..indirect.len() - 1])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar_core::{DiscourseFunction, LexicalCategory};

    fn pronoun_token(lemma: &str, person: Person, case: PronounCase) -> WordToken {
        let mut t = WordToken::word(lemma, LexicalCategory::Pronoun, DiscourseFunction::Object);
        t.features.person = Some(person);
        t.case = Some(case);
        t
    }

    #[test]
    fn subject_and_object_rows() {
        let t = pronoun_token("eu", Person::First, PronounCase::Subject);
        assert_eq!(pronoun(&t), "eu");
        let mut t = pronoun_token("o", Person::Third, PronounCase::DirectObject);
        t.features.gender = Some(Gender::Masculine);
        assert_eq!(pronoun(&t), "o");
        t.features.gender = Some(Gender::Feminine);
        t.features.number = Some(Number::Plural);
        assert_eq!(pronoun(&t), "as");
    }

    #[test]
    fn dative_by_form_wins_over_function() {
        let t = pronoun_token("che", Person::Second, PronounCase::DirectObject);
        assert_eq!(pronoun(&t), "che");
    }

    #[test]
    fn prepositional_first_person() {
        let t = pronoun_token("eu", Person::First, PronounCase::Prepositional);
        assert_eq!(pronoun(&t), "min");
    }

    #[test]
    fn wh_words_pass_through() {
        let t = pronoun_token("quen", Person::Third, PronounCase::Subject);
        assert_eq!(pronoun(&t), "quen");
    }

    #[test]
    fn fusion_table() {
        assert_eq!(fuse_clitics("me", "o").as_deref(), Some("mo"));
        assert_eq!(fuse_clitics("che", "o").as_deref(), Some("cho"));
        assert_eq!(fuse_clitics("lle", "a").as_deref(), Some("lla"));
        assert_eq!(fuse_clitics("nos", "o").as_deref(), Some("nolo"));
        assert_eq!(fuse_clitics("nos", "os").as_deref(), Some("nolos"));
        assert_eq!(fuse_clitics("lles", "o").as_deref(), Some("llelo"));
        assert_eq!(fuse_clitics("vos", "as").as_deref(), Some("volas"));
        assert_eq!(fuse_clitics("se", "o"), None);
    }

    #[test]
    fn every_table_pair_fuses_to_one_token() {
        for io in ["me", "che", "lle", "nos", "vos", "lles"] {
            for direct in ["o", "a", "os", "as"] {
                let fused = fuse_clitics(io, direct).unwrap();
                assert!(!fused.contains(' '));
                assert!(fused.ends_with(direct));
            }
        }
    }
}
