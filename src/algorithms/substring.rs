//! Longest substring without repeating characters

use std::collections::HashMap;

/// Keep the current window in a buffer; on a repeat, drop everything up to
/// and including the earlier occurrence.
pub fn longest_substring_array(s: &str) -> usize {
    let mut longest = 0;
    let mut window: Vec<char> = Vec::new();

    for c in s.chars() {
        if let Some(index) = window.iter().position(|&w| w == c) {
            longest = longest.max(window.len());
            window.drain(..=index);
        }
        window.push(c);
    }

    longest.max(window.len())
}

/// Sliding window over a map of each character's last-seen index.
pub fn longest_substring_map(s: &str) -> usize {
    let mut start = 0;
    let mut max_len = 0;
    let mut seen: HashMap<char, usize> = HashMap::new();

    for (end, c) in s.chars().enumerate() {
        if let Some(&last) = seen.get(&c) {
            if last >= start {
                start = last + 1;
            }
        }
        seen.insert(c, end);
        max_len = max_len.max(end - start + 1);
    }

    max_len
}
