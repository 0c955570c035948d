use regex::Regex;

/// Makes a display name safe to use as a file name: strips emoji and related
/// pictograph blocks, and replaces path-separating `/` with a space.
///
/// Total and idempotent: a name without offending characters passes through
/// unchanged, and applying it twice equals applying it once.
pub fn normalize(name: &str) -> String {
    // Range list from https://gist.github.com/slowkow/7a7f61f495e3dbb7e3d767f97bd7304b
    let emoji = Regex::new(
        "[\
         \u{1F600}-\u{1F64F}\
         \u{1F300}-\u{1F5FF}\
         \u{1F680}-\u{1F6FF}\
         \u{1F1E0}-\u{1F1FF}\
         \u{2500}-\u{2BEF}\
         \u{2702}-\u{27B0}\
         \u{24C2}-\u{1F251}\
         \u{1F926}-\u{1F937}\
         \u{10000}-\u{10FFFF}\
         \u{2640}-\u{2642}\
         \u{2600}-\u{2B55}\
         \u{200D}\
         \u{23CF}\
         \u{23E9}\
         \u{231A}\
         \u{FE0F}\
         \u{3030}\
         ]+",
    )
    .expect("emoji range pattern is valid");

    emoji.replace_all(name, "").replace('/', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(normalize("Atraxa Superfriends"), "Atraxa Superfriends");
    }

    #[test]
    fn test_emoji_are_stripped() {
        assert_eq!(normalize("Dragons \u{1F409}\u{1F525}"), "Dragons ");
        assert_eq!(normalize("\u{2764}\u{FE0F} Group Hug"), " Group Hug");
    }

    #[test]
    fn test_slashes_become_spaces() {
        assert_eq!(normalize("Boros/Aggro"), "Boros Aggro");
        assert_eq!(normalize("a/b/c"), "a b c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Atraxa Superfriends",
            "Dragons \u{1F409}",
            "Boros/Aggro",
            "\u{1F3F4}mixed/name\u{2B50}",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
