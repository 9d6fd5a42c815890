pub const NO_RESPONSE_FALLBACK: &str = "No response generated";

/// Content of a completion reply. Providers answer either with one string or
/// with a list of typed parts, some of which carry no text at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseContent {
    Text(String),
    Fragments(Vec<ContentFragment>),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFragment {
    Text(String),
    NonText,
}

impl ContentFragment {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::NonText => None,
        }
    }
}

impl ResponseContent {
    /// Collapses the reply into the single string handed back to the caller.
    /// Text fragments are joined with one space; an empty join falls back to
    /// [`NO_RESPONSE_FALLBACK`]. A plain string is returned untouched, even if empty.
    pub fn into_answer(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Fragments(fragments) => {
                let joined = fragments
                    .into_iter()
                    .filter_map(ContentFragment::into_text)
                    .collect::<Vec<_>>()
                    .join(" ");

                if joined.is_empty() {
                    NO_RESPONSE_FALLBACK.to_string()
                } else {
                    joined
                }
            }
            Self::Unrecognized => NO_RESPONSE_FALLBACK.to_string(),
        }
    }
}
