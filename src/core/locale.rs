use std::fmt;

/// A normalized locale tag such as `zh_CN` or `en`.
///
/// Hyphenated tags are normalized to underscores so `zh-CN` and `zh_CN`
/// select the same bundle. The empty tag is the root locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().replace('-', "_"))
    }

    /// The root locale, served by the base bundle.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Bundle suffixes probed on lookup, most specific first, ending with the root.
    ///
    /// `zh_CN` yields `["zh_CN", "zh", ""]`.
    pub fn fallback_chain(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut tag = self.0.as_str();
        while !tag.is_empty() {
            chain.push(tag);
            tag = match tag.rfind('_') {
                Some(idx) => &tag[..idx],
                None => "",
            };
        }
        chain.push("");
        chain
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

/// Supplies the locale active for the caller at the time of a call.
///
/// Pipelines read it once per invocation.
pub trait LocaleSource {
    fn current_locale(&self) -> Locale;
}

impl LocaleSource for Locale {
    fn current_locale(&self) -> Locale {
        self.clone()
    }
}

/// Caller-owned request context carrying the negotiated locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleContext {
    locale: Locale,
}

impl LocaleContext {
    pub fn new(locale: impl Into<Locale>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        self.locale = locale.into();
    }
}

impl LocaleSource for LocaleContext {
    fn current_locale(&self) -> Locale {
        self.locale.clone()
    }
}
