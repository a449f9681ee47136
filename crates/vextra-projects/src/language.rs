//! Language targets for new projects

/// Language a project is scaffolded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// C++ built with g++
    Cpp,
    /// C built with gcc
    C,
    /// Java built with javac
    Java,
    /// No language; placeholder entry point and empty Makefile
    #[default]
    Neutral,
}

impl Language {
    /// Get all languages
    pub fn all() -> Vec<Self> {
        vec![Self::Cpp, Self::C, Self::Java, Self::Neutral]
    }

    /// Template key in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Java => "java",
            Self::Neutral => "neutral",
        }
    }

    /// Command-line flag selecting this language, if any
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Self::Cpp => Some("-cpp"),
            Self::C => Some("-c"),
            Self::Java => Some("-java"),
            Self::Neutral => None,
        }
    }

    /// Parse a command-line flag. Unknown flags yield `None`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|language| language.flag() == Some(flag))
    }

    /// Resolve an optional flag, falling back to `Neutral`
    pub fn resolve(flag: Option<&str>) -> Self {
        flag.and_then(Self::from_flag).unwrap_or_default()
    }

    /// Whether the generated Makefile builds something
    pub fn is_compiled(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
