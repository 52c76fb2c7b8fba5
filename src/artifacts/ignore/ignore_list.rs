use crate::artifacts::ignore::IGNORE_FILE;
use anyhow::Context;
use regex::Regex;
use std::path::Path;

/// A single ignore rule
#[derive(Debug, Clone)]
enum Pattern {
    /// Pattern with `*` or `?`, checked against every path component and the whole path
    Glob(Regex),
    /// Literal path, matching itself and anything beneath it
    Prefix(String),
}

impl Pattern {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim_end_matches('/');

        if line.contains(['*', '?']) {
            Ok(Pattern::Glob(glob_to_regex(line)?))
        } else {
            Ok(Pattern::Prefix(line.to_string()))
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Glob(re) => re.is_match(path) || path.split('/').any(|c| re.is_match(c)),
            Pattern::Prefix(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

fn glob_to_regex(glob: &str) -> anyhow::Result<Regex> {
    let mut pattern = String::from("^");
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str("[^/]*"),
            '?' => pattern.push_str("[^/]"),
            other => pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    pattern.push('$');

    Regex::new(&pattern).with_context(|| format!("invalid ignore pattern '{glob}'"))
}

/// Parsed `.ignorefile`
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<Pattern>,
}

impl IgnoreList {
    /// Read the ignore file under `root`; a missing file ignores nothing
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let ignore_path = root.join(IGNORE_FILE);

        match std::fs::read_to_string(&ignore_path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Unable to read {}", ignore_path.display()))
            }
        }
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Pattern::parse)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(IgnoreList { patterns })
    }

    /// Whether a repository-relative, `/`-separated path is ignored
    pub fn is_ignored(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
