//! Persona and company research over a chat-completion client.
//!
//! One request per lookup, no retries. A failed lookup degrades to the
//! unresolved label (or empty context) and the run continues.

use tracing::{debug, warn};

use crate::llm::ChatClient;

/// Answers the model gives when it does not actually know a name.
const NAME_PLACEHOLDERS: &[&str] = &["not publicly available", "n/a", "unknown", "none"];

/// Labeled facts about a company, parsed from a single completion.
#[derive(Debug, Default, Clone)]
pub struct CompanyContext {
    pub description: Option<String>,
    pub employees: Option<String>,
    pub funding: Option<String>,
    pub headquarters: Option<String>,
    pub recent_news: Option<String>,
}

impl CompanyContext {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.employees.is_none()
            && self.funding.is_none()
            && self.headquarters.is_none()
            && self.recent_news.is_none()
    }
}

fn persona_prompt(company: &str, persona: &str) -> String {
    format!(
        "Research the {persona} at {company}. Provide the following information:\n\
         1. Name of the {persona} (if publicly available)\n\
         2. Key background relevant to this role\n\
         3. Their focus areas and priorities\n\n\
         Format your response as:\n\
         NAME: [name or \"Not publicly available\"]\n\
         BACKGROUND: [brief background]\n\
         FOCUS: [key focus areas]"
    )
}

fn company_prompt(company: &str) -> String {
    format!(
        "Research {company} and provide account intelligence. Every detail must be \
         specific to {company}; skip anything you cannot tie to this company.\n\n\
         Format your response as:\n\
         DESCRIPTION: [what they do, 1-2 sentences]\n\
         EMPLOYEES: [number or range]\n\
         FUNDING: [latest round details]\n\
         HEADQUARTERS: [location]\n\
         RECENT_NEWS: [key developments in the last 6-12 months]"
    )
}

/// Extract a usable name from a completion. Prefers an explicit `NAME:` line,
/// otherwise takes the first non-empty line; placeholder answers yield `None`.
pub fn parse_persona_name(content: &str) -> Option<String> {
    let candidate = content
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with("NAME:"))
        .or_else(|| content.lines().map(str::trim).find(|l| !l.is_empty()))?;

    let candidate = candidate.strip_prefix("NAME:").unwrap_or(candidate);
    let name = candidate.trim().trim_matches('*').trim();
    if name.is_empty() || NAME_PLACEHOLDERS.iter().any(|p| name.eq_ignore_ascii_case(p)) {
        return None;
    }
    Some(name.to_string())
}

/// Parse `LABEL: value` lines into a [`CompanyContext`]. Continuation lines
/// are folded into the preceding value; unknown labels are dropped.
pub fn parse_company_context(content: &str) -> CompanyContext {
    let mut ctx = CompanyContext::default();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((label, rest)) = split_label(line) {
            if let Some((label, parts)) = current.take() {
                assign(&mut ctx, &label, parts.join(" "));
            }
            let mut parts = Vec::new();
            if !rest.is_empty() {
                parts.push(rest.to_string());
            }
            current = Some((label, parts));
        } else if let Some((_, parts)) = current.as_mut() {
            parts.push(line.to_string());
        }
    }
    if let Some((label, parts)) = current.take() {
        assign(&mut ctx, &label, parts.join(" "));
    }
    ctx
}

fn split_label(line: &str) -> Option<(String, &str)> {
    let (head, rest) = line.split_once(':')?;
    let head = head.trim();
    // Labels are short ALL_CAPS tokens; anything else is prose with a colon in it.
    if head.is_empty()
        || head.len() > 24
        || !head.chars().all(|c| c.is_ascii_uppercase() || c == '_')
    {
        return None;
    }
    Some((head.to_string(), rest.trim()))
}

fn assign(ctx: &mut CompanyContext, label: &str, value: String) {
    if value.is_empty() {
        return;
    }
    let slot = match label {
        "DESCRIPTION" => &mut ctx.description,
        "EMPLOYEES" => &mut ctx.employees,
        "FUNDING" => &mut ctx.funding,
        "HEADQUARTERS" => &mut ctx.headquarters,
        "RECENT_NEWS" => &mut ctx.recent_news,
        _ => return,
    };
    *slot = Some(value);
}

/// Resolve the persona display string. Without a client the raw label is
/// returned; with one, a successful lookup yields `"{label}: {name}"`.
pub async fn resolve_persona(
    client: Option<&dyn ChatClient>,
    company: &str,
    persona: &str,
) -> String {
    let Some(client) = client else {
        return persona.to_string();
    };

    match client.complete(&persona_prompt(company, persona)).await {
        Ok(text) => match parse_persona_name(&text) {
            Some(name) => format!("{persona}: {name}"),
            None => {
                debug!(persona, "no usable name in completion, keeping raw label");
                persona.to_string()
            }
        },
        Err(e) => {
            warn!(
                provider = client.provider_name(),
                error = %e,
                "persona lookup failed, continuing with raw label"
            );
            persona.to_string()
        }
    }
}

/// Fetch labeled company facts. Returns `None` on API failure or when the
/// completion carried nothing usable.
pub async fn company_context(client: &dyn ChatClient, company: &str) -> Option<CompanyContext> {
    match client.complete(&company_prompt(company)).await {
        Ok(text) => {
            let ctx = parse_company_context(&text);
            if ctx.is_empty() {
                debug!(company, "no usable company facts in completion");
                None
            } else {
                Some(ctx)
            }
        }
        Err(e) => {
            warn!(
                provider = client.provider_name(),
                error = %e,
                "company lookup failed, continuing without context"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_name_from_name_line() {
        let text = "NAME: Jane Smith\nBACKGROUND: 10 years in infra\nFOCUS: platform";
        assert_eq!(parse_persona_name(text), Some("Jane Smith".to_string()));
    }

    #[test]
    fn persona_name_skips_preamble() {
        let text = "Here is what I found:\nNAME: **Jordan Lee**\nFOCUS: devex";
        assert_eq!(parse_persona_name(text), Some("Jordan Lee".to_string()));
    }

    #[test]
    fn persona_name_rejects_placeholders() {
        assert_eq!(parse_persona_name("NAME: Not publicly available"), None);
        assert_eq!(parse_persona_name("NAME: n/a"), None);
        assert_eq!(parse_persona_name("unknown"), None);
        assert_eq!(parse_persona_name("   \n\n"), None);
    }

    #[test]
    fn persona_name_falls_back_to_first_line() {
        assert_eq!(
            parse_persona_name("Sam Park\nCTO since 2021"),
            Some("Sam Park".to_string())
        );
    }

    #[test]
    fn company_context_multiline_values() {
        let text = "DESCRIPTION: Builds widgets\nfor industrial robots.\n\
                    EMPLOYEES: 200-500\nFUNDING: Series B, $40M (2025)\n\
                    HEADQUARTERS: Austin, TX\nRECENT_NEWS: Opened EU office.";
        let ctx = parse_company_context(text);
        assert_eq!(
            ctx.description.as_deref(),
            Some("Builds widgets for industrial robots.")
        );
        assert_eq!(ctx.employees.as_deref(), Some("200-500"));
        assert_eq!(ctx.recent_news.as_deref(), Some("Opened EU office."));
    }

    #[test]
    fn company_context_ignores_unknown_labels_and_prose_colons() {
        let text = "TECH_STACK: Rust, Postgres\nNote: this line is prose\nFUNDING: Seed";
        let ctx = parse_company_context(text);
        assert!(ctx.description.is_none());
        assert_eq!(ctx.funding.as_deref(), Some("Seed"));
    }

    #[test]
    fn empty_completion_is_empty_context() {
        assert!(parse_company_context("no labels here at all").is_empty());
    }
}
