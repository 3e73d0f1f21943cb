//! Verb inflection: cell selection over (form x tense x number x person)
//! and the regular suffix rules for the -ar/-er/-ir classes.

use grammar_core::{
    FormKey, Gender, LexicalUnit, Number, Person, Tense, VerbForm, WordToken,
};

/// Inflects a verb token. The fallback chain per cell is: instance
/// override, lexicon irregular cell, regular synthesis from the infinitive.
pub(crate) fn verb(token: &WordToken, unit: Option<&LexicalUnit>) -> String {
    let base = token.lemma.as_str();
    let number = token
        .agreement
        .number
        .or(token.features.number)
        .unwrap_or(Number::Singular);
    let person = token
        .agreement
        .person
        .or(token.features.person)
        .unwrap_or(Person::Third);
    let gender = token
        .agreement
        .gender
        .or(token.features.gender)
        .unwrap_or(Gender::Masculine);
    let tense = token.features.tense();

    let cell = |key: FormKey| -> Option<String> {
        token
            .overrides
            .get(&key)
            .cloned()
            .or_else(|| unit.and_then(|u| u.form(key)).map(str::to_owned))
    };

    match token.features.form() {
        VerbForm::Infinitive | VerbForm::BareInfinitive => base.to_owned(),
        VerbForm::Gerund | VerbForm::PresentParticiple => cell(FormKey::Gerund)
            .or_else(|| regular_gerund(base))
            .unwrap_or_else(|| base.to_owned()),
        VerbForm::PastParticiple => {
            let key = match (gender, number) {
                (Gender::Feminine, Number::Plural) => FormKey::PastParticipleFemininePlural,
                (Gender::Feminine, _) => FormKey::PastParticipleFeminineSingular,
                (_, Number::Plural) => FormKey::PastParticiplePlural,
                _ => FormKey::PastParticiple,
            };
            cell(key)
                .or_else(|| {
                    // a bare lexicon participle still beats regular synthesis
                    cell(FormKey::PastParticiple)
                        .map(|p| agree_participle(&p, gender, number))
                })
                .or_else(|| regular_past_participle(base, gender, number))
                .unwrap_or_else(|| base.to_owned())
        }
        VerbForm::Subjunctive => cell(FormKey::subjunctive(tense, number, person))
            .or_else(|| regular_subjunctive(base, tense, number, person))
            .unwrap_or_else(|| base.to_owned()),
        VerbForm::Imperative => FormKey::imperative(number, person)
            .and_then(&cell)
            .or_else(|| regular_imperative(base, number, person))
            .unwrap_or_else(|| base.to_owned()),
        VerbForm::ConjugateInfinitive => {
            cell(FormKey::subjunctive(Tense::Future, number, person))
                .or_else(|| regular_future_subjunctive(base, number, person))
                .unwrap_or_else(|| base.to_owned())
        }
        VerbForm::Normal => {
            if token.features.impersonal && tense == Tense::Present {
                if let Some(form) = cell(FormKey::Impersonal) {
                    return form;
                }
            }
            cell(FormKey::indicative(tense, number, person))
                .or_else(|| regular_indicative(base, tense, number, person))
                .unwrap_or_else(|| base.to_owned())
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Ar,
    Er,
    Ir,
}

fn class_of(base: &str) -> Option<(&str, Class)> {
    base.strip_suffix("ar")
        .map(|r| (r, Class::Ar))
        .or_else(|| base.strip_suffix("er").map(|r| (r, Class::Er)))
        .or_else(|| base.strip_suffix("ir").map(|r| (r, Class::Ir)))
}

fn cell_index(number: Number, person: Person) -> usize {
    let p = match person {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    };
    if number == Number::Plural { 3 + p } else { p }
}

/// Radical + class/cell suffix for the radical-based tenses.
fn radical_suffix(base: &str, table: fn(Class) -> [&'static str; 6], i: usize) -> Option<String> {
    let (radical, class) = class_of(base)?;
    Some(format!("{radical}{}", table(class)[i]))
}

fn regular_indicative(
    base: &str,
    tense: Tense,
    number: Number,
    person: Person,
) -> Option<String> {
    let i = cell_index(number, person);
    match tense {
        Tense::Present => radical_suffix(
            base,
            |c| match c {
                Class::Ar => ["o", "as", "a", "amos", "ades", "an"],
                Class::Er => ["o", "es", "e", "emos", "edes", "en"],
                Class::Ir => ["o", "es", "e", "imos", "ides", "en"],
            },
            i,
        ),
        Tense::Past => radical_suffix(
            base,
            |c| match c {
                Class::Ar => ["ei", "aches", "ou", "amos", "astes", "aron"],
                Class::Er => ["ín", "iches", "eu", "emos", "estes", "eron"],
                Class::Ir => ["ín", "iches", "iu", "imos", "istes", "iron"],
            },
            i,
        ),
        Tense::Imperfect => radical_suffix(
            base,
            |c| match c {
                Class::Ar => ["aba", "abas", "aba", "abamos", "abades", "aban"],
                Class::Er | Class::Ir => ["ía", "ías", "ía", "iamos", "iades", "ían"],
            },
            i,
        ),
        Tense::Pluperfect => radical_suffix(
            base,
            |c| match c {
                Class::Ar => ["ara", "aras", "ara", "aramos", "arades", "aran"],
                Class::Er => ["era", "eras", "era", "eramos", "erades", "eran"],
                Class::Ir => ["ira", "iras", "ira", "iramos", "irades", "iran"],
            },
            i,
        ),
        // future and conditional inflect the whole infinitive
        Tense::Future => {
            let endings = ["ei", "ás", "á", "emos", "edes", "án"];
            Some(format!("{base}{}", endings[i]))
        }
        Tense::Conditional => {
            let endings = ["ía", "ías", "ía", "iamos", "iades", "ían"];
            Some(format!("{base}{}", endings[i]))
        }
    }
}

fn regular_subjunctive(
    base: &str,
    tense: Tense,
    number: Number,
    person: Person,
) -> Option<String> {
    let i = cell_index(number, person);
    match tense {
        Tense::Imperfect => radical_suffix(
            base,
            |c| match c {
                Class::Ar => ["ase", "ases", "ase", "ásemos", "ásedes", "asen"],
                Class::Er => ["ese", "eses", "ese", "ésemos", "ésedes", "esen"],
                Class::Ir => ["ise", "ises", "ise", "ísemos", "ísedes", "isen"],
            },
            i,
        ),
        Tense::Future => regular_future_subjunctive(base, number, person),
        _ => radical_suffix(
            base,
            |c| match c {
                Class::Ar => ["e", "es", "e", "emos", "edes", "en"],
                Class::Er | Class::Ir => ["a", "as", "a", "amos", "ades", "an"],
            },
            i,
        ),
    }
}

/// Future subjunctive, shared with the conjugated (personal) infinitive.
fn regular_future_subjunctive(base: &str, number: Number, person: Person) -> Option<String> {
    radical_suffix(
        base,
        |c| match c {
            Class::Ar => ["ar", "ares", "ar", "armos", "ardes", "aren"],
            Class::Er => ["er", "eres", "er", "ermos", "erdes", "eren"],
            Class::Ir => ["ir", "ires", "ir", "irmos", "irdes", "iren"],
        },
        cell_index(number, person),
    )
}

fn regular_imperative(base: &str, number: Number, person: Person) -> Option<String> {
    if number != Number::Plural && person == Person::First {
        return None;
    }
    radical_suffix(
        base,
        |c| match c {
            Class::Ar => ["", "a", "e", "emos", "ade", "en"],
            Class::Er | Class::Ir => ["", "e", "a", "amos", "ede", "an"],
        },
        cell_index(number, person),
    )
}

fn regular_gerund(base: &str) -> Option<String> {
    let (radical, class) = class_of(base)?;
    let suffix = match class {
        Class::Ar => "ando",
        Class::Er => "endo",
        Class::Ir => "indo",
    };
    Some(format!("{radical}{suffix}"))
}

fn regular_past_participle(base: &str, gender: Gender, number: Number) -> Option<String> {
    let (radical, class) = class_of(base)?;
    let stem = match class {
        Class::Ar => "ad",
        Class::Er | Class::Ir => "id",
    };
    Some(agree_participle(
        &format!("{radical}{stem}o"),
        gender,
        number,
    ))
}

/// Re-inflects a masculine-singular participle for gender and number.
fn agree_participle(participle: &str, gender: Gender, number: Number) -> String {
    let stem = participle
        .strip_suffix('o')
        .or_else(|| participle.strip_suffix('a'))
        .unwrap_or(participle);
    let mut out = match gender {
        Gender::Feminine => format!("{stem}a"),
        _ => format!("{stem}o"),
    };
    if number == Number::Plural {
        out.push('s');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar_core::{DiscourseFunction, LexicalCategory, Lexicon};

    fn token(lemma: &str) -> WordToken {
        WordToken::word(lemma, LexicalCategory::Verb, DiscourseFunction::Head)
    }

    fn conjugate(lemma: &str, tense: Tense, number: Number, person: Person) -> String {
        let mut t = token(lemma);
        t.features.tense = Some(tense);
        t.agreement.number = Some(number);
        t.agreement.person = Some(person);
        verb(&t, None)
    }

    #[test]
    fn ar_class_present_first_singular_appends_o() {
        for lemma in ["cantar", "pasear", "bicar", "falar"] {
            let expected = format!("{}o", &lemma[..lemma.len() - 2]);
            assert_eq!(
                conjugate(lemma, Tense::Present, Number::Singular, Person::First),
                expected
            );
        }
    }

    #[test]
    fn present_third_singular() {
        assert_eq!(
            conjugate("perseguir", Tense::Present, Number::Singular, Person::Third),
            "persegue"
        );
        assert_eq!(
            conjugate("cantar", Tense::Present, Number::Singular, Person::Third),
            "canta"
        );
    }

    #[test]
    fn past_third_singular_by_class() {
        assert_eq!(
            conjugate("perseguir", Tense::Past, Number::Singular, Person::Third),
            "perseguiu"
        );
        assert_eq!(
            conjugate("pasear", Tense::Past, Number::Singular, Person::Third),
            "paseou"
        );
        assert_eq!(
            conjugate("comer", Tense::Past, Number::Singular, Person::Third),
            "comeu"
        );
        assert_eq!(
            conjugate("comer", Tense::Past, Number::Singular, Person::First),
            "comín"
        );
    }

    #[test]
    fn future_appends_to_the_whole_infinitive() {
        assert_eq!(
            conjugate("perseguir", Tense::Future, Number::Singular, Person::Third),
            "perseguirá"
        );
        assert_eq!(
            conjugate("cantar", Tense::Future, Number::Plural, Person::First),
            "cantaremos"
        );
        assert_eq!(
            conjugate("comer", Tense::Conditional, Number::Singular, Person::First),
            "comería"
        );
    }

    #[test]
    fn lexicon_cell_beats_regular_rule() {
        let lexicon = Lexicon::builtin();
        let unit = lexicon.lookup("dicir", LexicalCategory::Verb);
        let mut t = token("dicir");
        t.agreement.person = Some(Person::Third);
        assert_eq!(verb(&t, unit), "di");
        t.features.tense = Some(Tense::Future);
        assert_eq!(verb(&t, unit), "dirá");
    }

    #[test]
    fn instance_override_beats_lexicon() {
        let lexicon = Lexicon::builtin();
        let unit = lexicon.lookup("dicir", LexicalCategory::Verb);
        let mut t = token("dicir");
        t.overrides.insert(FormKey::Present3s, "dixit".into());
        t.agreement.person = Some(Person::Third);
        assert_eq!(verb(&t, unit), "dixit");
    }

    #[test]
    fn participle_agrees_in_gender_and_number() {
        let mut t = token("bicar");
        t.features.form = Some(VerbForm::PastParticiple);
        t.agreement.gender = Some(Gender::Feminine);
        assert_eq!(verb(&t, None), "bicada");
        t.agreement.number = Some(Number::Plural);
        assert_eq!(verb(&t, None), "bicadas");
    }

    #[test]
    fn gerund_by_class() {
        for (lemma, expected) in [("cantar", "cantando"), ("comer", "comendo"), ("partir", "partindo")] {
            let mut t = token(lemma);
            t.features.form = Some(VerbForm::Gerund);
            assert_eq!(verb(&t, None), expected);
        }
    }

    #[test]
    fn subjunctive_swaps_the_theme_vowel() {
        let mut t = token("cantar");
        t.features.form = Some(VerbForm::Subjunctive);
        t.agreement.person = Some(Person::Third);
        assert_eq!(verb(&t, None), "cante");
        t.features.tense = Some(Tense::Imperfect);
        assert_eq!(verb(&t, None), "cantase");
        let mut t = token("comer");
        t.features.form = Some(VerbForm::Subjunctive);
        t.agreement.person = Some(Person::First);
        assert_eq!(verb(&t, None), "coma");
    }

    #[test]
    fn personal_infinitive_shares_future_subjunctive_cells() {
        let mut t = token("cantar");
        t.features.form = Some(VerbForm::ConjugateInfinitive);
        t.agreement.person = Some(Person::Second);
        assert_eq!(verb(&t, None), "cantares");
        t.agreement.number = Some(Number::Plural);
        assert_eq!(verb(&t, None), "cantardes");
    }

    #[test]
    fn imperative_cells() {
        let mut t = token("cantar");
        t.features.form = Some(VerbForm::Imperative);
        t.agreement.person = Some(Person::Second);
        assert_eq!(verb(&t, None), "canta");
        t.agreement.number = Some(Number::Plural);
        assert_eq!(verb(&t, None), "cantade");
    }

    #[test]
    fn impersonal_present_prefers_the_lexicon_cell() {
        let lexicon = Lexicon::builtin();
        let unit = lexicon.lookup("haber", LexicalCategory::Verb);
        let mut t = token("haber");
        t.features.impersonal = true;
        assert_eq!(verb(&t, unit), "hai");
    }

    #[test]
    fn unknown_class_degrades_to_the_base_form() {
        assert_eq!(
            conjugate("zas", Tense::Present, Number::Singular, Person::Third),
            "zas"
        );
    }
}
