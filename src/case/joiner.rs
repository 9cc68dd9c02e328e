//! Word joiners, one per case style.
//!
//! Every joiner takes words already lowercased by the splitter and returns
//! the key in its convention. No words produce an empty key.

use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first grapheme and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + &graphemes.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn lower_then_capitalized(words: &[String]) -> impl Iterator<Item = String> + '_ {
    words.iter().enumerate().map(|(i, word)| {
        if i == 0 {
            word.to_lowercase()
        } else {
            capitalize(word)
        }
    })
}

pub fn camel(words: &[String]) -> String {
    lower_then_capitalized(words).collect()
}

pub fn snake(words: &[String]) -> String {
    words.iter().map(|w| w.to_lowercase()).collect::<Vec<_>>().join("_")
}

pub fn kebab(words: &[String]) -> String {
    words.iter().map(|w| w.to_lowercase()).collect::<Vec<_>>().join("-")
}

pub fn pascal(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

pub fn flat(words: &[String]) -> String {
    words.iter().map(|w| w.to_lowercase()).collect()
}

pub fn upper_flat(words: &[String]) -> String {
    words.iter().map(|w| w.to_uppercase()).collect()
}

pub fn pascal_snake(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect::<Vec<_>>().join("_")
}

pub fn camel_snake(words: &[String]) -> String {
    lower_then_capitalized(words).collect::<Vec<_>>().join("_")
}

pub fn screaming_snake(words: &[String]) -> String {
    words.iter().map(|w| w.to_uppercase()).collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("u"), "U");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("ßtraße"), "SStraße");
    }

    #[test]
    fn test_every_joiner_on_three_words() {
        let w = words(&["user", "account", "id"]);
        assert_eq!(camel(&w), "userAccountId");
        assert_eq!(snake(&w), "user_account_id");
        assert_eq!(kebab(&w), "user-account-id");
        assert_eq!(pascal(&w), "UserAccountId");
        assert_eq!(flat(&w), "useraccountid");
        assert_eq!(upper_flat(&w), "USERACCOUNTID");
        assert_eq!(pascal_snake(&w), "User_Account_Id");
        assert_eq!(camel_snake(&w), "user_Account_Id");
        assert_eq!(screaming_snake(&w), "USER_ACCOUNT_ID");
    }

    #[test]
    fn test_single_word_has_no_separator() {
        let w = words(&["name"]);
        assert_eq!(camel(&w), "name");
        assert_eq!(snake(&w), "name");
        assert_eq!(kebab(&w), "name");
        assert_eq!(pascal(&w), "Name");
        assert_eq!(pascal_snake(&w), "Name");
        assert_eq!(camel_snake(&w), "name");
        assert_eq!(screaming_snake(&w), "NAME");
    }

    #[test]
    fn test_no_words_join_to_empty() {
        let w: Vec<String> = Vec::new();
        for join in [camel, snake, kebab, pascal, flat, upper_flat, pascal_snake, camel_snake, screaming_snake] {
            assert_eq!(join(&w), "");
        }
    }
}
