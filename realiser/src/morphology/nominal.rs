//! Noun, adjective, adverb and determiner inflection.

use grammar_core::{FormKey, Gender, LexicalUnit, Number, WordToken};
use syllable_splitter::is_vowel;

fn cell(token: &WordToken, unit: Option<&LexicalUnit>, key: FormKey) -> Option<String> {
    token
        .overrides
        .get(&key)
        .cloned()
        .or_else(|| unit.and_then(|u| u.form(key)).map(str::to_owned))
}

/// Noun inflection: gender drives the regular -o/-a stem swap, plural
/// appends -s unless the stem is already plural; proper nouns are invariant.
pub(crate) fn noun(token: &WordToken, unit: Option<&LexicalUnit>) -> String {
    let base = token.lemma.as_str();
    if token.features.proper || unit.is_some_and(|u| u.proper) {
        return base.to_owned();
    }
    let gender = token.features.gender.or(unit.and_then(|u| u.gender));
    let number = token
        .features
        .number
        .or(token.agreement.number)
        .unwrap_or(Number::Singular);

    let irregular = match (gender.unwrap_or(Gender::Masculine), number) {
        (Gender::Feminine, Number::Plural) => cell(token, unit, FormKey::FemininePlural)
            .or_else(|| cell(token, unit, FormKey::Plural)),
        (Gender::Feminine, _) => cell(token, unit, FormKey::FeminineSingular),
        (_, Number::Plural) => cell(token, unit, FormKey::Plural),
        _ => None,
    };
    if let Some(form) = irregular {
        return form;
    }
    if number == Number::Both {
        return base.to_owned();
    }
    regular_noun(base, gender.unwrap_or(Gender::Masculine), number).unwrap_or_else(|| base.to_owned())
}

fn regular_noun(base: &str, gender: Gender, number: Number) -> Option<String> {
    let mut out = if base.ends_with('o') || base.ends_with('a') {
        let stem = &base[..base.len() - 1];
        match gender {
            Gender::Feminine => format!("{stem}a"),
            _ => format!("{stem}o"),
        }
    } else if base.ends_with('s') {
        // stem-plural: invariant
        return Some(base.to_owned());
    } else {
        base.to_owned()
    };
    if number == Number::Plural {
        out.push('s');
    }
    Some(out)
}

/// Adjective inflection. Agreement comes from the governing node (the
/// modified noun phrase, or the clause subject when predicative), never
/// from the adjective's own instance features.
pub(crate) fn adjective(token: &WordToken, unit: Option<&LexicalUnit>) -> String {
    let base = token.lemma.as_str();
    let gender = token.agreement.gender();
    let number = token.agreement.number();
    let own_feminine = token.features.gender == Some(Gender::Feminine)
        || unit.is_some_and(|u| u.gender == Some(Gender::Feminine));

    if token.features.superlative {
        let key = match (gender, number) {
            (Gender::Feminine, Number::Plural) => FormKey::SuperlativeFemininePlural,
            (Gender::Feminine, _) => FormKey::SuperlativeFeminine,
            (_, Number::Plural) => FormKey::SuperlativePlural,
            _ => FormKey::Superlative,
        };
        return cell(token, unit, key)
            .or_else(|| regular_superlative(base, gender, number))
            .unwrap_or_else(|| base.to_owned());
    }
    if token.features.comparative {
        if let Some(form) = cell(token, unit, FormKey::Comparative) {
            return form;
        }
    }

    let irregular = match (gender, number) {
        (Gender::Feminine, Number::Plural) if own_feminine => cell(token, unit, FormKey::Plural),
        (Gender::Feminine, Number::Plural) => cell(token, unit, FormKey::FemininePlural),
        (Gender::Feminine, _) if own_feminine => Some(base.to_owned()),
        (Gender::Feminine, _) => cell(token, unit, FormKey::FeminineSingular),
        (_, Number::Plural) => cell(token, unit, FormKey::Plural),
        _ => Some(base.to_owned()),
    };
    irregular
        .or_else(|| regular_adjective(base, gender, number))
        .unwrap_or_else(|| base.to_owned())
}

fn regular_adjective(base: &str, gender: Gender, number: Number) -> Option<String> {
    let last = base.chars().last()?;
    let mut out = if last == 'a' || last == 'o' {
        let stem: String = {
            let mut cs: Vec<char> = base.chars().collect();
            cs.pop();
            cs.into_iter().collect()
        };
        match gender {
            Gender::Feminine => format!("{stem}a"),
            Gender::Masculine => format!("{stem}o"),
            Gender::Neuter => base.to_owned(),
        }
    } else if is_vowel(last) {
        base.to_owned()
    } else if last == 'l' && number == Number::Plural {
        // papel -> papeis
        let stem: String = base.chars().take(base.chars().count() - 1).collect();
        return Some(format!("{stem}is"));
    } else if number == Number::Plural {
        return Some(format!("{base}es"));
    } else {
        base.to_owned()
    };
    if number == Number::Plural {
        out.push('s');
    }
    Some(out)
}

/// The -ísimo/-ísima superlative family with the same agreement lookup.
fn regular_superlative(base: &str, gender: Gender, number: Number) -> Option<String> {
    let stem: String = {
        let mut cs: Vec<char> = base.chars().collect();
        cs.pop()?;
        cs.into_iter().collect()
    };
    let mut out = match gender {
        Gender::Feminine => format!("{stem}ísima"),
        _ => format!("{stem}ísimo"),
    };
    if number == Number::Plural {
        out.push('s');
    }
    Some(out)
}

/// Adverbs are invariant unless comparative/superlative features are set.
pub(crate) fn adverb(token: &WordToken, unit: Option<&LexicalUnit>) -> String {
    if token.features.comparative {
        if let Some(form) = cell(token, unit, FormKey::Comparative) {
            return form;
        }
    }
    if token.features.superlative {
        return cell(token, unit, FormKey::Superlative)
            .or_else(|| regular_superlative(&token.lemma, Gender::Masculine, Number::Singular))
            .unwrap_or_else(|| token.lemma.clone());
    }
    token.lemma.clone()
}

/// Determiner inflection: gender agreement comes from the governing noun
/// phrase, number from the determiner's own features.
pub(crate) fn determiner(token: &WordToken, unit: Option<&LexicalUnit>) -> String {
    let base = token.lemma.as_str();
    let gender = token.agreement.gender();
    let number = token
        .agreement
        .number
        .or(token.features.number)
        .unwrap_or(Number::Singular);
    let own_feminine = token.features.gender == Some(Gender::Feminine)
        || unit.is_some_and(|u| u.gender == Some(Gender::Feminine));

    let form = match (gender, number) {
        (Gender::Feminine, Number::Plural) if own_feminine => cell(token, unit, FormKey::Plural),
        (Gender::Feminine, Number::Plural) => cell(token, unit, FormKey::FemininePlural),
        (Gender::Feminine, _) if !own_feminine => cell(token, unit, FormKey::FeminineSingular),
        (_, Number::Plural) => cell(token, unit, FormKey::Plural),
        _ => None,
    };
    form.unwrap_or_else(|| base.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar_core::{DiscourseFunction, LexicalCategory, Lexicon};

    fn noun_token(lemma: &str) -> WordToken {
        WordToken::word(lemma, LexicalCategory::Noun, DiscourseFunction::Head)
    }

    #[test]
    fn regular_noun_gender_swap_and_plural() {
        let mut t = noun_token("amigo");
        t.features.gender = Some(Gender::Feminine);
        assert_eq!(noun(&t, None), "amiga");
        t.features.number = Some(Number::Plural);
        assert_eq!(noun(&t, None), "amigas");
    }

    #[test]
    fn stem_plural_noun_is_invariant() {
        let mut t = noun_token("luns");
        t.features.number = Some(Number::Plural);
        assert_eq!(noun(&t, None), "luns");
    }

    #[test]
    fn proper_noun_is_invariant() {
        let mut t = noun_token("María");
        t.features.proper = true;
        t.features.number = Some(Number::Plural);
        assert_eq!(noun(&t, None), "María");
    }

    #[test]
    fn adjective_agrees_with_its_governor_not_itself() {
        let mut t = WordToken::word("rápido", LexicalCategory::Adjective, DiscourseFunction::PreModifier);
        t.agreement.gender = Some(Gender::Feminine);
        assert_eq!(adjective(&t, None), "rápida");
        t.agreement.number = Some(Number::Plural);
        assert_eq!(adjective(&t, None), "rápidas");
    }

    #[test]
    fn adjective_consonant_plurals() {
        let lexicon = Lexicon::builtin();
        let unit = lexicon.lookup("feliz", LexicalCategory::Adjective);
        let mut t = WordToken::word("feliz", LexicalCategory::Adjective, DiscourseFunction::Object);
        t.agreement.number = Some(Number::Plural);
        assert_eq!(adjective(&t, unit), "felices");

        let mut t = WordToken::word("azul", LexicalCategory::Adjective, DiscourseFunction::Object);
        t.agreement.number = Some(Number::Plural);
        assert_eq!(adjective(&t, None), "azuis");
    }

    #[test]
    fn regular_superlative_family() {
        let mut t = WordToken::word("alto", LexicalCategory::Adjective, DiscourseFunction::Object);
        t.features.superlative = true;
        assert_eq!(adjective(&t, None), "altísimo");
        t.agreement.gender = Some(Gender::Feminine);
        assert_eq!(adjective(&t, None), "altísima");
    }

    #[test]
    fn determiner_takes_gender_from_its_noun_phrase() {
        let lexicon = Lexicon::builtin();
        let unit = lexicon.lookup("o", LexicalCategory::Determiner);
        let mut t = WordToken::word("o", LexicalCategory::Determiner, DiscourseFunction::Specifier);
        t.agreement.gender = Some(Gender::Feminine);
        assert_eq!(determiner(&t, unit), "a");
        t.agreement.number = Some(Number::Plural);
        assert_eq!(determiner(&t, unit), "as");
        t.agreement.gender = Some(Gender::Masculine);
        assert_eq!(determiner(&t, unit), "os");
    }

    #[test]
    fn adverb_is_invariant_by_default() {
        let t = WordToken::word("rápidamente", LexicalCategory::Adverb, DiscourseFunction::PreModifier);
        assert_eq!(adverb(&t, None), "rápidamente");
    }
}
