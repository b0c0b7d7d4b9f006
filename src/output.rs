//! Versioned file output: slug derivation, version scan, write.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::Result;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Filesystem-safe slug: strip punctuation, collapse whitespace/hyphen runs
/// to single hyphens, lowercase, trim. Falls back to "company" when nothing
/// survives.
pub fn slugify(company: &str) -> String {
    let cleaned = NON_WORD.replace_all(company, "");
    let hyphenated = SEPARATORS.replace_all(&cleaned, "-");
    let slug = hyphenated.trim_matches('-').to_lowercase();
    if slug.is_empty() {
        "company".to_string()
    } else {
        slug
    }
}

/// Next version for `<slug>-v<N>.md` files in `dir`: `max(N) + 1`, or 1 when
/// the directory is missing or holds no matching files. Concurrent runs may
/// race on this scan; versioning is not locked.
fn next_version(dir: &Path, slug: &str) -> Result<u32> {
    if !dir.exists() {
        return Ok(1);
    }

    let pattern =
        Regex::new(&format!(r"^{}-v(\d+)\.md$", regex::escape(slug))).expect("valid regex");
    let mut max_seen = 0u32;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(caps) = pattern.captures(name) {
            if let Ok(version) = caps[1].parse::<u32>() {
                max_seen = max_seen.max(version);
            }
        }
    }
    Ok(max_seen + 1)
}

/// Write the rendered brief under `root/<slug>/<slug>-v<N>.md`, creating
/// directories as needed. Returns the written path.
pub fn write_brief(root: &Path, company: &str, markdown: &str) -> Result<PathBuf> {
    let slug = slugify(company);
    let company_dir = root.join(&slug);
    fs::create_dir_all(&company_dir)?;

    let version = next_version(&company_dir, &slug)?;
    let path = company_dir.join(format!("{slug}-v{version}.md"));
    fs::write(&path, markdown)?;

    debug!(path = %path.display(), version, "brief written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slugify("Acme Corp"), "acme-corp");
        assert_eq!(slugify("TechStart Inc"), "techstart-inc");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("Acme, Inc."), "acme-inc");
        assert_eq!(slugify("  A  --  B  "), "a-b");
    }

    #[test]
    fn slug_falls_back_when_empty() {
        assert_eq!(slugify(""), "company");
        assert_eq!(slugify("!!!"), "company");
    }
}
