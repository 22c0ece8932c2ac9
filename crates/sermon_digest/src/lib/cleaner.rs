//! # Transcript cleaner
//!
//! Heuristic noise removal for auto-generated sermon captions. The passes are
//! lossy on purpose: the two-token pass in particular drops some legitimate
//! short lines along with the noise.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static MUSIC_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(?:música|musica|music)\]").unwrap());

/// Two or more all-caps words opening a line, e.g. `AVISO IMPORTANTE`
static SHOUTED_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[A-Z]{2,}(?:[ \t]+[A-Z]{2,})+\b").unwrap());

static ANNOTATION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^PR.*$").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Strips music markers, shouted annotations, stutters and short noise lines
/// from raw transcript text and normalizes its whitespace.
///
/// The passes are re-applied until the text stops changing, so
/// `clean_text(&clean_text(x)) == clean_text(x)`.
pub fn clean_text(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        // every pass only deletes or shrinks whitespace, so this terminates
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let text = remove_music_markers(text);
    let text = remove_shouted(&text);
    let text = ANNOTATION_LINE_RE.replace_all(&text, "");
    let text = blank_lines_where(&text, is_repeated_word);
    let text = blank_lines_where(&text, is_two_tokens);
    let text = blank_lines_where(&text, is_punctuation_only);
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = BLANK_LINES_RE.replace_all(&text, "\n");

    text.trim().to_string()
}

/// Removing one marker can splice another together (`[Mus[music]ic]`), so
/// keep going until none are left.
fn remove_music_markers(text: &str) -> String {
    let mut text = text.to_string();
    while MUSIC_MARKER_RE.is_match(&text) {
        text = MUSIC_MARKER_RE.replace_all(&text, "").into_owned();
    }
    text
}

/// Drops lines made only of uppercase letters and whitespace, then any
/// run of all-caps words a line opens with. Capitals later in a line stay.
fn remove_shouted(text: &str) -> String {
    let text = blank_lines_where(text, |line| {
        !line.is_empty()
            && line
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
    });
    SHOUTED_PREFIX_RE.replace_all(&text, "").into_owned()
}

/// `amém amém`
fn is_repeated_word(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => {
            first == second && first.chars().all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_two_tokens(line: &str) -> bool {
    line.split_whitespace().count() == 2
}

fn is_punctuation_only(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?'))
}

/// Empties every line matching `predicate`, keeping the line breaks in place
fn blank_lines_where(text: &str, predicate: impl Fn(&str) -> bool) -> String {
    text.split('\n')
        .map(|line| if predicate(line) { "" } else { line })
        .join("\n")
}
