//! Turkish text normalizer and origin/destination suffix stripper
//! (spec.md §4.2).

/// Origin (ablative) suffixes, longest-match-first.
pub const ORIGIN_SUFFIXES: &[&str] = &["ndan", "nden", "dan", "den", "tan", "ten"];

/// Destination (dative) suffixes, longest-match-first.
pub const DESTINATION_SUFFIXES: &[&str] = &["ya", "ye", "na", "ne", "a", "e"];

/// Phrases that collide with a province/vehicle term and must be neutralized
/// before tokenization (spec.md §4.2 preprocessing).
const COLLISION_PHRASES: &[(&str, &str)] = &[
    ("panel van", "panelvan_vehicleterm"),
    ("sac kasa", "sackasa_bodyterm"),
    ("ne zaman", "nezaman_placeholder"),
];

/// Folds Turkish-specific characters to ASCII, lowercases, and unifies every
/// apostrophe variant (`'`, `’`, `‘`, `` ` ``) to a plain `'`.
pub fn normalize_to_ascii(input: &str) -> String {
    let mut lower = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            // Turkish dotted/dotless capital I both fold to plain ascii `i`;
            // handled before the generic lowercasing below because Unicode's
            // default lowercasing of U+0130 produces `i` + a combining dot.
            'İ' => lower.push('i'),
            'I' => lower.push('i'),
            other => lower.extend(other.to_lowercase()),
        }
    }

    let mut out = String::with_capacity(lower.len());
    for c in lower.chars() {
        let folded = match c {
            'ç' => 'c',
            'ğ' => 'g',
            'ı' => 'i',
            'ö' => 'o',
            'ş' => 's',
            'ü' => 'u',
            '\u{0307}' => continue, // stray combining dot above
            '\u{2018}' | '\u{2019}' | '\u{0060}' => '\'',
            other => other,
        };
        out.push(folded);
    }
    strip_apostrophes_before_suffix(&out)
}

/// Removes apostrophes that sit between two word characters, e.g.
/// `kayseri'den` → `kayseriden`. This is the "adjacent to a recognized
/// suffix" rule from spec.md §4.2: in practice every such apostrophe in
/// Turkish place-name text precedes a suffix, so unconditional removal
/// between word characters is equivalent and simpler.
fn strip_apostrophes_before_suffix(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '\'' {
            let prev_word = i > 0 && chars[i - 1].is_alphanumeric();
            let next_word = i + 1 < chars.len() && chars[i + 1].is_alphanumeric();
            if prev_word && next_word {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Replaces known collision phrases (`panel van`, `ne zaman`) with
/// placeholder tokens so a later per-token pass can't mis-resolve a part of
/// the phrase as a province/vehicle term.
pub fn replace_collision_phrases(s: &str) -> String {
    let mut out = s.to_string();
    for (phrase, placeholder) in COLLISION_PHRASES {
        out = out.replace(phrase, placeholder);
    }
    out
}

/// Collapses `<city> <suffix>` token pairs into one token (`ankara ya` →
/// `ankaraya`) when the second token is, on its own, exactly one of the
/// known suffixes.
pub fn collapse_city_suffix_pairs(s: &str) -> String {
    let words: Vec<&str> = s.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if i + 1 < words.len() && is_bare_suffix(words[i + 1]) {
            out.push(format!("{}{}", words[i], words[i + 1]));
            i += 2;
        } else {
            out.push(words[i].to_string());
            i += 1;
        }
    }
    out.join(" ")
}

fn is_bare_suffix(word: &str) -> bool {
    ORIGIN_SUFFIXES.contains(&word) || DESTINATION_SUFFIXES.contains(&word)
}

/// Full preprocessing pipeline: ascii-fold, collapse city/suffix pairs,
/// replace collision phrases.
pub fn preprocess(input: &str) -> String {
    let folded = normalize_to_ascii(input);
    let collapsed = collapse_city_suffix_pairs(&folded);
    replace_collision_phrases(&collapsed)
}

/// Result of stripping a recognized origin/destination suffix from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixStrip {
    pub stem: String,
    pub is_origin: bool,
    pub is_destination: bool,
}

fn strip_with(token: &str, suffixes: &[&str]) -> Option<&'static str> {
    suffixes
        .iter()
        .find(|suffix| token.len() > suffix.len() && token.ends_with(*suffix))
        .copied()
}

/// Strips the longest matching origin/destination suffix from `token`.
/// Origin suffixes are tried before destination suffixes. If nothing
/// matches, `stem == token` and both direction flags are false.
pub fn strip_suffix(token: &str) -> SuffixStrip {
    if let Some(suffix) = strip_with(token, ORIGIN_SUFFIXES) {
        return SuffixStrip {
            stem: token[..token.len() - suffix.len()].to_string(),
            is_origin: true,
            is_destination: false,
        };
    }
    if let Some(suffix) = strip_with(token, DESTINATION_SUFFIXES) {
        return SuffixStrip {
            stem: token[..token.len() - suffix.len()].to_string(),
            is_origin: false,
            is_destination: true,
        };
    }
    SuffixStrip {
        stem: token.to_string(),
        is_origin: false,
        is_destination: false,
    }
}

/// All other suffix-strip candidates for `token`, in shortest-suffix-first
/// order, skipping whichever suffix [`strip_suffix`] already tried. Used for
/// the second-pass retry (spec.md §4.2): `hataya` fails to resolve as
/// `hata` (long `ya` stripped) but resolves as `hatay` (short `a` stripped).
pub fn strip_suffix_retry_candidates(token: &str) -> Vec<SuffixStrip> {
    let primary = strip_suffix(token);
    let mut candidates = Vec::new();

    let mut origin_shortest: Vec<&&str> = ORIGIN_SUFFIXES.iter().collect();
    origin_shortest.sort_by_key(|s| s.len());
    for suffix in origin_shortest {
        if token.len() > suffix.len() && token.ends_with(*suffix) {
            let stem = token[..token.len() - suffix.len()].to_string();
            if stem != primary.stem {
                candidates.push(SuffixStrip { stem, is_origin: true, is_destination: false });
            }
        }
    }

    let mut dest_shortest: Vec<&&str> = DESTINATION_SUFFIXES.iter().collect();
    dest_shortest.sort_by_key(|s| s.len());
    for suffix in dest_shortest {
        if token.len() > suffix.len() && token.ends_with(*suffix) {
            let stem = token[..token.len() - suffix.len()].to_string();
            if stem != primary.stem && !candidates.iter().any(|c| c.stem == stem) {
                candidates.push(SuffixStrip { stem, is_origin: false, is_destination: true });
            }
        }
    }

    candidates
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn folds_turkish_characters() {
        assert_eq!(normalize_to_ascii("Şanlıurfa'dan İstanbul'a"), "sanliurfadan istanbula");
    }

    #[test]
    fn unifies_apostrophe_variants() {
        assert_eq!(normalize_to_ascii("kayseri\u{2019}den"), "kayseriden");
        assert_eq!(normalize_to_ascii("kayseri`den"), "kayseriden");
    }

    #[test]
    fn strips_longest_origin_suffix() {
        let s = strip_suffix("kayseriden");
        assert_eq!(s.stem, "kayseri");
        assert!(s.is_origin);
    }

    #[test]
    fn strips_longest_destination_suffix_first() {
        // "hataya": longest dest suffix "ya" -> "hata" (not retried here).
        let s = strip_suffix("hataya");
        assert_eq!(s.stem, "hata");
        assert!(s.is_destination);
    }

    #[test]
    fn retry_recovers_hatay() {
        let candidates = strip_suffix_retry_candidates("hataya");
        assert!(candidates.iter().any(|c| c.stem == "hatay" && c.is_destination));
    }

    #[test]
    fn no_suffix_match_keeps_token() {
        let s = strip_suffix("istanbul");
        assert_eq!(s.stem, "istanbul");
        assert!(!s.is_origin && !s.is_destination);
    }

    #[test]
    fn collapses_city_suffix_pair() {
        assert_eq!(collapse_city_suffix_pairs("ankara ya gidecek"), "ankaraya gidecek");
    }

    #[test]
    fn neutralizes_collision_phrase() {
        assert_eq!(
            replace_collision_phrases("panel van ariyorum"),
            "panelvan_vehicleterm ariyorum"
        );
    }
}
