//! Sentence-bounded context windows.
//!
//! Sentence ends are found by a literal `.` inside a word. Abbreviations and
//! decimals are not special-cased, so "Dr." or "3.14" end a sentence too.

/// Clamps a signed word index into `[0, len]`.
pub fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len)
    }
}

fn ends_sentence(word: &str) -> bool {
    word.contains('.')
}

/// Expands the raw window `[start, end)` outward to sentence boundaries.
///
/// Leftward, the window grows one word at a time while the word currently at
/// its left edge has no period. Rightward, words are appended until one with
/// a period has been appended or the list runs out. Out-of-range bounds are
/// clamped, so a window past either end comes back empty or truncated.
pub fn expand_to_sentences(words: &[String], start: isize, end: isize) -> Vec<String> {
    let len = words.len();
    let mut start = clamp_index(start, len);
    let mut end = clamp_index(end, len);

    let mut window: Vec<String> = if start < end {
        words[start..end].to_vec()
    } else {
        Vec::new()
    };

    // An edge past the last word has nothing to inspect and stops the walk
    while start > 0 && words.get(start).is_some_and(|w| !ends_sentence(w)) {
        start -= 1;
        window.insert(0, words[start].clone());
    }

    while end < len {
        let word = &words[end];
        window.push(word.clone());
        end += 1;
        if ends_sentence(word) {
            break;
        }
    }

    window
}
