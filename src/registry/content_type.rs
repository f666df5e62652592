//! Content-type modifiers.
//!
//! uBlock Origin refuses redirect rules that do not say which kind of request
//! they apply to. The set of recognised kinds is closed and small, so it is a
//! bitflag set rather than a list of strings.

bitflags::bitflags! {
    /// Request kinds a redirect rule may declare through its `$` modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ContentTypes: u8 {
        const SCRIPT         = 1 << 0;
        const STYLESHEET     = 1 << 1;
        const SUBDOCUMENT    = 1 << 2;
        const IMAGE          = 1 << 3;
        const MEDIA          = 1 << 4;
        const XMLHTTPREQUEST = 1 << 5;
        const OTHER          = 1 << 6;
    }
}

/// Canonical spelling of each flag, in rendering order.
const TAGS: &[(ContentTypes, &str)] = &[
    (ContentTypes::SCRIPT, "script"),
    (ContentTypes::STYLESHEET, "stylesheet"),
    (ContentTypes::SUBDOCUMENT, "subdocument"),
    (ContentTypes::IMAGE, "image"),
    (ContentTypes::MEDIA, "media"),
    (ContentTypes::XMLHTTPREQUEST, "xmlhttprequest"),
    (ContentTypes::OTHER, "other"),
];

impl ContentTypes {
    /// Recognise a single modifier as a content type.
    ///
    /// Negated types (`~script`) and unrelated modifiers return `None`.
    pub fn from_modifier(modifier: &str) -> Option<ContentTypes> {
        match modifier.trim() {
            "script" => Some(ContentTypes::SCRIPT),
            "stylesheet" | "css" => Some(ContentTypes::STYLESHEET),
            "subdocument" | "frame" => Some(ContentTypes::SUBDOCUMENT),
            "image" => Some(ContentTypes::IMAGE),
            "media" => Some(ContentTypes::MEDIA),
            "xmlhttprequest" | "xhr" => Some(ContentTypes::XMLHTTPREQUEST),
            "other" => Some(ContentTypes::OTHER),
            _ => None,
        }
    }

    /// Union of every content type declared in `modifiers`.
    pub fn declared_in<S: AsRef<str>>(modifiers: &[S]) -> ContentTypes {
        modifiers
            .iter()
            .filter_map(|m| ContentTypes::from_modifier(m.as_ref()))
            .fold(ContentTypes::empty(), |acc, t| acc | t)
    }

    /// Modifier spellings for the flags in this set.
    pub fn tags(self) -> impl Iterator<Item = &'static str> {
        TAGS.iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, tag)| *tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_aliases_and_ignores_negations() {
        assert_eq!(ContentTypes::from_modifier("xhr"), Some(ContentTypes::XMLHTTPREQUEST));
        assert_eq!(ContentTypes::from_modifier("frame"), Some(ContentTypes::SUBDOCUMENT));
        assert_eq!(ContentTypes::from_modifier("~script"), None);
        assert_eq!(ContentTypes::from_modifier("redirect=noopjs"), None);
    }

    #[test]
    fn declared_in_collects_every_type() {
        let mods = ["third-party", "script", "image", "redirect=noopjs"];
        assert_eq!(ContentTypes::declared_in(&mods), ContentTypes::SCRIPT | ContentTypes::IMAGE);
    }

    #[test]
    fn tags_follow_rendering_order() {
        let tags: Vec<_> = (ContentTypes::MEDIA | ContentTypes::SCRIPT).tags().collect();
        assert_eq!(tags, vec!["script", "media"]);
    }
}
