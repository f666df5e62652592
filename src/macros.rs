/// Compile a literal pattern once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("built-in pattern must compile"));
        &*RE
    }};
}

/// Declare one entry of an embedded resource table.
///
/// ```text
/// resource!("set-constant", ubo: ["set-constant.js", "set.js"], abp: ["override-property-read"])
/// resource!("noopjs", ubo: ["noop.js"], types: ContentTypes::SCRIPT)
/// ```
macro_rules! resource {
    (
        $name:literal
        $(, adg: [ $($adg:literal),* $(,)? ])?
        $(, ubo: [ $($ubo:literal),* $(,)? ])?
        $(, abp: [ $($abp:literal),* $(,)? ])?
        $(, types: $types:expr)?
        $(,)?
    ) => {
        $crate::registry::StaticRecord {
            name: $name,
            adg: &[ $($($adg),*)? ],
            ubo: &[ $($($ubo),*)? ],
            abp: &[ $($($abp),*)? ],
            content_types: $crate::registry::ContentTypes::empty() $(.union($types))?,
        }
    };
}
