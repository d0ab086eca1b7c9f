use std::sync::LazyLock;

use regex::Regex;

static NAME: LazyLock<Regex> = LazyLock::new(|| pragma("Alexa_Name"));
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| pragma("Alexa_Description"));
static EXTRA: LazyLock<Regex> = LazyLock::new(|| pragma("Alexa_extra"));

// Greedy prefix: the last occurrence of a key wins.
fn pragma(key: &str) -> Regex {
    Regex::new(&format!(r"(?is)^.*{key}:\s*([^\n]*)")).expect("pragma pattern must compile")
}

/// `Alexa_*:` annotations found in a device description.
#[derive(Debug, Default, PartialEq)]
pub struct Pragmas {
    pub name: Option<String>,
    pub description: Option<String>,
    pub extra: Option<String>,
}

impl Pragmas {
    pub fn parse(text: &str) -> Pragmas {
        let capture = |regex: &Regex| {
            regex
                .captures(text)
                .and_then(|captures| captures.get(1))
                .map(|value| value.as_str().trim_end_matches('\r').to_string())
        };

        Pragmas {
            name: capture(&NAME),
            description: capture(&DESCRIPTION),
            extra: capture(&EXTRA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pragmas() {
        assert_eq!(Pragmas::parse(""), Pragmas::default());
        assert_eq!(Pragmas::parse("kitchen ceiling"), Pragmas::default());
    }

    #[test]
    fn test_all_pragmas() {
        let pragmas = Pragmas::parse(
            "installed 2019\nalexa_name: Ceiling Light\nAlexa_Description:Main room\r\nALEXA_EXTRA: 1|2|3",
        );

        assert_eq!(pragmas.name.as_deref(), Some("Ceiling Light"));
        assert_eq!(pragmas.description.as_deref(), Some("Main room"));
        assert_eq!(pragmas.extra.as_deref(), Some("1|2|3"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let pragmas = Pragmas::parse("Alexa_Name: first\nAlexa_Name: second");
        assert_eq!(pragmas.name.as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_value() {
        let pragmas = Pragmas::parse("Alexa_extra:");
        assert_eq!(pragmas.extra.as_deref(), Some(""));
    }
}
