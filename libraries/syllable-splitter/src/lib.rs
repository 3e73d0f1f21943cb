//! Galician syllabification as a pure left-to-right scan.
//!
//! Splits a word into its ordered syllables. Used to decide diacritic
//! placement when a clitic pronoun attaches after a verb, where the stressed
//! syllable of the conjugated form must keep its stress.
//!
//! # Example
//!
//! ```
//! use syllable_splitter::split_syllables;
//!
//! assert_eq!(split_syllables("dixo"), vec!["di", "xo"]);
//! assert_eq!(split_syllables("persegue"), vec!["per", "se", "gue"]);
//! ```
//!
//! Vowels split into three classes: strong (a, e, o), soft (i, u) and
//! accented (á, é, í, ó, ú — always stressed). A strong/soft pair in either
//! order forms a diphthong; two strong vowels, or any pair involving an
//! accented vowel, split as hiatus. The digraphs ch, ll and qu/gu before
//! e/i stay in the onset of their syllable, as do consonant+{r,l} clusters;
//! other consonant clusters split between syllables.

const STRONG_VOWELS: [char; 3] = ['a', 'e', 'o'];
const SOFT_VOWELS: [char; 2] = ['i', 'u'];
const ACCENTED_VOWELS: [char; 5] = ['á', 'é', 'í', 'ó', 'ú'];
const CONSONANTS_BEFORE_R: [char; 8] = ['b', 'c', 'd', 'f', 'g', 'p', 'r', 't'];

pub fn is_vowel(c: char) -> bool {
    is_strong(c) || is_soft(c) || is_accented(c)
}

pub fn is_strong(c: char) -> bool {
    STRONG_VOWELS.contains(&c)
}

pub fn is_soft(c: char) -> bool {
    SOFT_VOWELS.contains(&c)
}

pub fn is_accented(c: char) -> bool {
    ACCENTED_VOWELS.contains(&c)
}

fn is_digraph(a: char, b: char) -> bool {
    (a == 'l' && b == 'l') || (a == 'c' && b == 'h')
}

/// Splits `word` into its ordered syllables. Pure and total: any input made
/// of letters terminates; an empty input yields no syllables.
pub fn split_syllables(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut syllables = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let len = next_syllable_len(&chars[start..]);
        syllables.push(chars[start..start + len].iter().collect());
        start += len;
    }
    syllables
}

/// Length in chars of the first syllable of the non-empty remainder `w`.
fn next_syllable_len(w: &[char]) -> usize {
    let n = w.len();
    if n == 1 {
        return 1;
    }
    if is_vowel(w[0]) {
        return vowel_first_len(w);
    }
    if is_vowel(w[1]) {
        onset_vowel_len(w)
    } else {
        cluster_len(w)
    }
}

/// Syllable starting on a vowel.
fn vowel_first_len(w: &[char]) -> usize {
    if is_strong(w[0]) || is_accented(w[0]) {
        // strong vowel + soft vowel or consonant closes the syllable;
        // strong + strong is hiatus
        if !is_strong(w[1]) { 2 } else { 1 }
    } else if !is_vowel(w[1]) {
        // soft vowel + consonant: keep one coda consonant unless the
        // consonant opens the next syllable
        if w.len() > 2 && is_vowel(w[2]) { 1 } else { 2 }
    } else {
        // soft vowel opening a diphthong
        2
    }
}

/// Syllable starting consonant + vowel.
fn onset_vowel_len(w: &[char]) -> usize {
    let n = w.len();
    // qu/gu + e/i is a single onset unit
    if (w[0] == 'q' || w[0] == 'g') && w[1] == 'u' {
        return if n > 2 && (w[2] == 'e' || w[2] == 'i') {
            if n > 3 && (w[3] == 'n' || w[3] == 'r' || w[3] == 's') {
                if n > 4 && is_vowel(w[4]) { 3 } else { 4.min(n) }
            } else {
                3
            }
        } else {
            1
        };
    }
    match (w.get(2).copied(), w.get(3).copied()) {
        (None, _) => 2,
        (Some(c2), c3) if !is_vowel(c2) => match c3 {
            None => 3,
            Some(c3) if !is_vowel(c3) => {
                if is_digraph(c2, c3) {
                    2
                } else if CONSONANTS_BEFORE_R.contains(&c2) && c3 == 'r' {
                    2
                } else if c2 == 'n' && c3 == 's' {
                    4
                } else {
                    3
                }
            }
            Some(_) => 2,
        },
        (Some(c2), _) if is_soft(c2) => 3, // diphthong
        (Some(_), _) => 2,                 // hiatus
    }
}

/// Syllable starting on a consonant cluster.
fn cluster_len(w: &[char]) -> usize {
    let n = w.len();
    if w[1] == 'r' || w[1] == 'l' {
        if n >= 4
            && w[0] == 'l'
            && w[1] == 'l'
            && is_vowel(w[2])
            && (w[3] == 'n' || w[3] == 's' || w[3] == 'r')
        {
            4
        } else if n >= 4 && is_vowel(w[2]) && is_soft(w[3]) {
            // cluster + diphthong
            4
        } else {
            3.min(n)
        }
    } else if is_digraph(w[0], w[1]) && n > 2 && is_vowel(w[2]) {
        3
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(word: &str) -> Vec<String> {
        split_syllables(word)
    }

    #[test]
    fn single_vowel_words() {
        assert_eq!(split("a"), vec!["a"]);
        assert_eq!(split("é"), vec!["é"]);
    }

    #[test]
    fn consonant_vowel_alternation() {
        assert_eq!(split("dixo"), vec!["di", "xo"]);
        assert_eq!(split("nolo"), vec!["no", "lo"]);
        assert_eq!(split("canta"), vec!["can", "ta"]);
    }

    #[test]
    fn accented_finals() {
        assert_eq!(split("dirá"), vec!["di", "rá"]);
        assert_eq!(split("está"), vec!["es", "tá"]);
    }

    #[test]
    fn digraphs_stay_in_the_onset() {
        assert_eq!(split("cho"), vec!["cho"]);
        assert_eq!(split("llelo"), vec!["lle", "lo"]);
        assert_eq!(split("chama"), vec!["cha", "ma"]);
        assert_eq!(split("colleu"), vec!["co", "lleu"]);
    }

    #[test]
    fn gu_before_e_is_one_onset() {
        assert_eq!(split("persegue"), vec!["per", "se", "gue"]);
        assert_eq!(split("perseguen"), vec!["per", "se", "guen"]);
    }

    #[test]
    fn diphthongs_and_hiatus() {
        assert_eq!(split("bicou"), vec!["bi", "cou"]);
        assert_eq!(split("pasea"), vec!["pa", "se", "a"]);
        assert_eq!(split("praia"), vec!["prai", "a"]);
    }

    #[test]
    fn monosyllabic_clitics() {
        assert_eq!(split("mo"), vec!["mo"]);
        assert_eq!(split("se"), vec!["se"]);
        assert_eq!(split("di"), vec!["di"]);
    }

    #[test]
    fn longer_verb_forms() {
        assert_eq!(split("cantabamos"), vec!["can", "ta", "ba", "mos"]);
        assert_eq!(split("estivo"), vec!["es", "ti", "vo"]);
    }
}
