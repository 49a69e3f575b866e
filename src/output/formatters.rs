//! Formatting utilities for terminal output

/// Interior width of the mask and guess boxes
pub const LABEL_WIDTH: usize = 15;

/// Interior width of a menu box
pub const MENU_WIDTH: usize = 20;

/// How text is placed inside a labeled box line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
}

/// Greedy word wrap on whitespace
///
/// Words longer than `width` are split, filling the rest of the current line first.
/// Returns no lines for blank text.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if word_len <= width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            continue;
        }

        // Long word: break it across lines
        let mut rest: Vec<char> = word.chars().collect();
        if !current.is_empty() {
            let room = width.saturating_sub(current_len + 1);
            if room > 0 {
                current.push(' ');
                current.extend(rest.drain(..room));
            }
            lines.push(std::mem::take(&mut current));
        }
        while rest.len() > width {
            lines.push(rest.drain(..width).collect());
        }
        current = rest.into_iter().collect();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` into `| ... |` box lines of interior width [`LABEL_WIDTH`]
///
/// Blank text still yields one empty line.
#[must_use]
pub fn label(text: &str, justify: Justify) -> String {
    let mut lines = wrap(text, LABEL_WIDTH);
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
        .iter()
        .map(|line| match justify {
            Justify::Left => format!("| {line:<LABEL_WIDTH$} |"),
            Justify::Center => format!("| {line:^LABEL_WIDTH$} |"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a menu box listing `(key, name)` options in order
///
/// ```text
/// [--------------------]
///
///  [1]         new game
///
/// [--------------------]
/// ```
#[must_use]
pub fn menu_box(options: &[(&str, &str)]) -> String {
    let border = format!("[{}]", "-".repeat(MENU_WIDTH));
    let mut menu = border.clone();
    for (key, name) in options {
        let space = MENU_WIDTH
            .saturating_sub(key.chars().count() + 2)
            .saturating_sub(name.chars().count());
        menu.push_str(&format!("\n\n [{key}]{}{name}", " ".repeat(space)));
    }
    menu.push_str("\n\n");
    menu.push_str(&border);
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_short_text_is_one_line() {
        assert_eq!(wrap("s _ s", 15), ["s _ s"]);
    }

    #[test]
    fn wrap_blank_text_is_empty() {
        assert!(wrap("", 15).is_empty());
        assert!(wrap("   ", 15).is_empty());
    }

    #[test]
    fn wrap_breaks_on_spaces() {
        assert_eq!(wrap("a b c d e f g h i j", 15), ["a b c d e f g h", "i j"]);
        assert_eq!(wrap("hangman abducts x", 15), ["hangman abducts", "x"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghijklmnopq", 15), ["abcdefghijklmno", "pq"]);
        assert_eq!(wrap("a abcdefghijklmnopq", 15), ["a abcdefghijklm", "nopq"]);
    }

    #[test]
    fn label_centers_and_left_aligns() {
        assert_eq!(label("_ _ _ _ _ _ _", Justify::Center), "|  _ _ _ _ _ _ _  |");
        assert_eq!(label("s _ s", Justify::Center), "|      s _ s      |");
        assert_eq!(label("s", Justify::Left), "| s               |");
        assert_eq!(label("", Justify::Left), "|                 |");
    }

    #[test]
    fn label_wraps_into_several_lines() {
        assert_eq!(
            label("a b c d e f g h i j", Justify::Left),
            "| a b c d e f g h |\n| i j             |"
        );
    }

    #[test]
    fn menu_box_single_option() {
        assert_eq!(
            menu_box(&[("1", "option")]),
            "[--------------------]\n\n [1]           option\n\n[--------------------]"
        );
    }

    #[test]
    fn menu_box_several_options() {
        assert_eq!(
            menu_box(&[("1", "option 1"), ("2", "option 2")]),
            "[--------------------]\n\n [1]         option 1\n\n [2]         option 2\n\n[--------------------]"
        );
    }
}
