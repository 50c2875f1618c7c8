use nom::{bytes::complete::take_while, IResult};

/// Whitespace/comma/hyphen-family separators between tokens (spec.md §4.3
/// step 1 tokenization).
pub fn query_sep(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == ',' || c == '-' || c == '–' || c == '—')(input)
}

/// A single whitespace/punctuation-delimited token.
pub fn query_term(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| !c.is_whitespace() && c != ',' && c != '-' && c != '–' && c != '—')(input)
}

/// Splits `text` into its separator-delimited tokens, dropping empties.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = text;
    loop {
        let (after_sep, _) = query_sep(rest).unwrap_or((rest, ""));
        let (after_term, term) = query_term(after_sep).unwrap_or((after_sep, ""));
        if term.is_empty() {
            break;
        }
        tokens.push(term);
        rest = after_term;
    }
    tokens
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokenizes_on_whitespace_and_commas() {
        assert_eq!(tokenize("antalya - istanbul, 20 ton"), vec!["antalya", "istanbul", "20", "ton"]);
    }
}
