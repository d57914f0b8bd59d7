//! Trie construction and the fuzzy forward-scan matcher.

use std::collections::{HashMap, HashSet};

use super::node::Node;

/// Delimiter separating the head of a combo word from its required parts.
const COMBO_DELIMITER: char = '|';

/// A stored word together with its current hit counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStats {
    /// The word as inserted, combo parts rendered with the `|` delimiter.
    pub word: String,
    /// Hits recorded so far; zero when statistics are disabled.
    pub hit_count: u64,
}

/// The matching engine: a primary trie for top-level words and a secondary
/// trie used exclusively to resolve combo-word sub-parts.
///
/// Construction (`add_words`) happens before the tree is shared; every other
/// operation takes `&self` and is safe under arbitrary concurrency, the hit
/// counters being the only mutable state.
#[derive(Debug)]
pub struct TrieTree {
    root: Node,
    combo_root: Node,
    stats_enabled: bool,
    filter_chars: HashSet<char>,
}

impl Default for TrieTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieTree {
    /// Create an empty tree with the categorical noise rule and statistics
    /// disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            combo_root: Node::root(),
            stats_enabled: false,
            filter_chars: HashSet::new(),
        }
    }

    /// Replace the categorical noise rule with an explicit code-point set.
    #[must_use]
    pub fn with_filter_chars<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.filter_chars = chars.into_iter().collect();
        self
    }

    /// Enable per-terminal hit counters.
    #[must_use]
    pub fn with_stats(mut self) -> Self {
        self.stats_enabled = true;
        self
    }

    /// Insert a batch of word specifications.
    ///
    /// Each entry is either a plain word or a combo specification
    /// `head|part1|...|partN`. Empty entries and empty segments are no-ops.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(false, word.as_ref());
        }
    }

    fn add_word(&mut self, is_combo: bool, word: &str) {
        if word.is_empty() {
            return;
        }

        // Combo parts are inserted verbatim, without further splitting.
        let segments: Vec<&str> = if is_combo {
            vec![word]
        } else {
            word.split(COMBO_DELIMITER).collect()
        };
        let head: Vec<char> = segments[0]
            .chars()
            .filter(|&ch| !self.is_filter_char(ch))
            .collect();
        if head.is_empty() {
            return;
        }
        let parts: Vec<String> = segments[1..]
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(|segment| (*segment).to_string())
            .collect();

        let mut cur = if is_combo {
            &mut self.combo_root
        } else {
            &mut self.root
        };
        for ch in head {
            cur = cur.children.entry(ch).or_insert_with(|| Node::new(ch));
        }
        cur.is_end = true;

        if !parts.is_empty() {
            cur.combo_parts.clone_from(&parts);
            for part in &parts {
                self.add_word(true, part);
            }
        }
    }

    /// Scan `text` for stored words, stopping early once `min_hits` hits have
    /// been satisfied (a combo hit counts for `1 + number_of_parts`).
    ///
    /// Returns whether the requirement was satisfied together with the hit
    /// words in left-to-right detection order. Noise code points inside a
    /// matched span are stripped from the reported word.
    #[must_use]
    pub fn detect(&self, text: &str, min_hits: usize) -> (bool, Vec<String>) {
        let chars: Vec<char> = text.chars().collect();
        let length = chars.len();
        let mut parent = &self.root;
        let mut left = 0usize;
        let mut position = 0usize;
        let mut noise_indexes: HashSet<usize> = HashSet::new();
        let mut hit_words: Vec<String> = Vec::new();
        let mut is_hit = false;
        let mut times = min_hits as i64;

        while position < length {
            let ch = chars[position];
            if self.is_filter_char(ch) {
                noise_indexes.insert(position);
                position += 1;
                continue;
            }

            let found = parent.children.get(&ch);
            let Some(cur) = found else {
                // Restart one code point after the previous attempt.
                parent = &self.root;
                left += 1;
                position = left;
                continue;
            };
            if !cur.is_end && position == length - 1 {
                // Out of text mid-partial-match: same as a failed lookup.
                parent = &self.root;
                left += 1;
                position = left;
                continue;
            }

            if cur.is_end && left <= position {
                let word: String = (left..=position)
                    .filter(|index| !noise_indexes.contains(index))
                    .map(|index| chars[index])
                    .collect();
                if cur.combo_parts.is_empty() {
                    is_hit = true;
                    hit_words.push(word);
                    times -= 1;
                    cur.record_hit(self.stats_enabled);
                } else if self.detect_in_combo(&chars, &cur.combo_parts).1 {
                    is_hit = true;
                    times -= 1 + cur.combo_parts.len() as i64;
                    hit_words.push(format!(
                        "{word}{COMBO_DELIMITER}{}",
                        cur.combo_parts.join("|")
                    ));
                    cur.record_hit(self.stats_enabled);
                }
            }

            if times <= 0 {
                return (is_hit, hit_words);
            }

            parent = cur;
            position += 1;
        }

        (times <= 0, hit_words)
    }

    /// Scan the full text against the combo trie for every required sub-word.
    ///
    /// Succeeds as soon as all requirements are met, returning the code-point
    /// indexes of each resolved sub-word (used by replacement). The scan is
    /// independent of the primary one: it always starts from index zero and
    /// shares no detection state.
    fn detect_in_combo(&self, chars: &[char], parts: &[String]) -> (Vec<usize>, bool) {
        let length = chars.len();
        let mut parent = &self.combo_root;
        let mut left = 0usize;
        let mut position = 0usize;
        let mut noise_indexes: HashSet<usize> = HashSet::new();
        let mut required: HashSet<&str> = parts.iter().map(String::as_str).collect();
        let mut indexes: Vec<usize> = Vec::new();

        while position < length {
            let ch = chars[position];
            if self.is_filter_char(ch) {
                noise_indexes.insert(position);
                position += 1;
                continue;
            }

            let found = parent.children.get(&ch);
            let Some(cur) = found else {
                parent = &self.combo_root;
                left += 1;
                position = left;
                continue;
            };
            if !cur.is_end && position == length - 1 {
                parent = &self.combo_root;
                left += 1;
                position = left;
                continue;
            }

            if cur.is_end && left <= position {
                let mut word = String::new();
                let mut word_indexes: Vec<usize> = Vec::new();
                for index in left..=position {
                    if noise_indexes.contains(&index) {
                        continue;
                    }
                    word.push(chars[index]);
                    word_indexes.push(index);
                }
                if required.remove(word.as_str()) {
                    indexes.extend(word_indexes);
                    if required.is_empty() {
                        return (indexes, true);
                    }
                }
            }

            parent = cur;
            position += 1;
        }

        (Vec::new(), false)
    }

    /// Produce a masked copy of `text`, substituting `mask` for every
    /// non-noise code point of every confirmed hit.
    ///
    /// Noise code points inside a matched span are left untouched. For combo
    /// hits, the resolved sub-word positions elsewhere in the text are masked
    /// as well. Returns whether any replacement occurred together with the
    /// full text (unchanged when there was no hit).
    #[must_use]
    pub fn replace(&self, text: &str, mask: char) -> (bool, String) {
        let mut chars: Vec<char> = text.chars().collect();
        // Combo resolution always runs over the original text, not the
        // partially masked working copy.
        let original: Vec<char> = chars.clone();
        let length = chars.len();
        let mut parent = &self.root;
        let mut left = 0usize;
        let mut position = 0usize;
        let mut noise_indexes: HashSet<usize> = HashSet::new();
        let mut is_hit = false;

        while position < length {
            let ch = chars[position];
            if self.is_filter_char(ch) {
                noise_indexes.insert(position);
                position += 1;
                continue;
            }

            let found = parent.children.get(&ch);
            let Some(cur) = found else {
                parent = &self.root;
                left += 1;
                position = left;
                continue;
            };
            if !cur.is_end && position == length - 1 {
                parent = &self.root;
                left += 1;
                position = left;
                continue;
            }

            if cur.is_end && left <= position {
                let hit_here = if cur.combo_parts.is_empty() {
                    true
                } else {
                    let (combo_indexes, combo_hit) =
                        self.detect_in_combo(&original, &cur.combo_parts);
                    for index in combo_indexes {
                        chars[index] = mask;
                    }
                    combo_hit
                };
                if hit_here {
                    is_hit = true;
                    cur.record_hit(self.stats_enabled);
                    for index in left..=position {
                        if noise_indexes.contains(&index) {
                            continue;
                        }
                        chars[index] = mask;
                    }
                }
            }

            parent = cur;
            position += 1;
        }

        (is_hit, chars.into_iter().collect())
    }

    /// Reconstruct every stored word together with its current hit counter.
    ///
    /// Traversal order is unspecified, but every terminal is visited exactly
    /// once. Combo words are rendered as `head|part1|...`.
    #[must_use]
    pub fn debug_infos(&self) -> Vec<WordStats> {
        let mut results = Vec::new();
        Self::collect_words(&self.root.children, "", &mut results);
        results
    }

    fn collect_words(children: &HashMap<char, Node>, prefix: &str, results: &mut Vec<WordStats>) {
        for node in children.values() {
            let mut word = prefix.to_string();
            word.push(node.ch);
            Self::collect_words(&node.children, &word, results);
            if node.is_end {
                if !node.combo_parts.is_empty() {
                    word.push(COMBO_DELIMITER);
                    word.push_str(&node.combo_parts.join("|"));
                }
                results.push(WordStats {
                    word,
                    hit_count: node.hits(),
                });
            }
        }
    }

    /// Classify a code point as noise.
    ///
    /// With an explicit filter set, membership decides. Otherwise anything
    /// that is not a CJK ideograph, not a Unicode letter, and not a digit is
    /// noise.
    fn is_filter_char(&self, ch: char) -> bool {
        if !self.filter_chars.is_empty() {
            return self.filter_chars.contains(&ch);
        }
        !(is_cjk_ideograph(ch) || ch.is_alphabetic() || ch.is_numeric())
    }
}

/// CJK unified ideographs, including extension A and the compatibility block.
const fn is_cjk_ideograph(ch: char) -> bool {
    matches!(ch,
        '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}' | '\u{f900}'..='\u{fad9}')
}
