//! Brief composition: pure rendering of the markdown document.
//!
//! Deterministic for a given input and date; no I/O. Research results come
//! in as the resolved persona display string and the optional company
//! context.

use std::fmt::Write as _;

use crate::research::CompanyContext;

/// Join competitors as a natural-language clause:
/// `"A"`, `"A and B"`, `"A, B, and C"`. Empty list yields `None`.
pub fn competitor_clause(competitors: &[String]) -> Option<String> {
    match competitors {
        [] => None,
        [one] => Some(one.clone()),
        [a, b] => Some(format!("{a} and {b}")),
        [rest @ .., last] => Some(format!("{}, and {last}", rest.join(", "))),
    }
}

/// Common pain points by persona, with a generic fallback for roles not in
/// the catalogue. Matching is a case-insensitive substring check.
fn pain_points(persona: &str) -> Vec<String> {
    let lower = persona.to_lowercase();

    if lower.contains("cto") {
        return vec![
            "Balancing technical debt with new feature development".to_string(),
            "Scaling infrastructure and teams while maintaining code quality".to_string(),
            "Keeping security and compliance from slowing delivery".to_string(),
            "Vendor sprawl across the engineering stack".to_string(),
            "Attracting and retaining senior engineering talent".to_string(),
        ];
    }
    if lower.contains("vp engineering") || lower.contains("head of engineering") {
        return vec![
            "Team productivity and delivery velocity".to_string(),
            "Technical debt and architectural decisions at scale".to_string(),
            "Balancing feature work with infrastructure investment".to_string(),
            "Cross-team collaboration and communication overhead".to_string(),
            "Tool and process standardization across teams".to_string(),
        ];
    }
    if lower.contains("vp sales") {
        return vec![
            "Accelerating the sales cycle and improving win rates".to_string(),
            "Forecast accuracy and pipeline management".to_string(),
            "Rep productivity and quota attainment".to_string(),
            "Competitive differentiation and positioning".to_string(),
            "Sales and marketing alignment".to_string(),
        ];
    }

    vec![
        format!("Strategic decision-making challenges common to the {persona} role"),
        format!("Team and resource management pressures on the {persona}"),
        format!("Budget and ROI scrutiny facing the {persona}"),
        format!("Frustrations with current tools and processes"),
    ]
}

fn discovery_questions(persona: &str, company: &str, clause: Option<&str>) -> Vec<String> {
    let evaluated = clause.unwrap_or("your current tooling");
    vec![
        format!(
            "What are the biggest challenges you're facing as {persona} at {company} right now?"
        ),
        "How does the team handle this today? What works and what doesn't?".to_string(),
        "What would need to happen for this to become a priority?".to_string(),
        format!("Have you evaluated {evaluated}? What were your impressions?"),
        "What's your timeline, and who else is involved in the decision?".to_string(),
    ]
}

/// Render the seven-section account brief.
///
/// `persona_display` is either the raw label or `"label: name"` after a
/// successful lookup. Competitor wording is omitted everywhere when the
/// list is empty.
pub fn render_brief(
    company: &str,
    persona_display: &str,
    competitors: &[String],
    context: Option<&CompanyContext>,
) -> String {
    let persona_label = persona_display
        .split(':')
        .next()
        .unwrap_or(persona_display)
        .trim();
    let persona_name = persona_display.split(':').nth(1).map(str::trim);
    let greeting = persona_name.unwrap_or("[First Name]");
    let clause = competitor_clause(competitors);

    let mut doc = String::new();
    let d = &mut doc;

    let _ = writeln!(d, "# Account Brief: {company}");
    let _ = writeln!(d);
    let _ = writeln!(d, "_Generated on {}_", chrono::Local::now().format("%Y-%m-%d"));

    // Overview
    let _ = writeln!(d, "\n## Overview\n");
    let _ = writeln!(d, "- **Company:** {company}");
    let _ = writeln!(d, "- **Persona:** {persona_display}");
    if let Some(clause) = &clause {
        let _ = writeln!(d, "- **Competitive landscape:** evaluating against {clause}");
    }
    if let Some(ctx) = context {
        if let Some(desc) = &ctx.description {
            let _ = writeln!(d, "- **What they do:** {desc}");
        }
        if let Some(employees) = &ctx.employees {
            let _ = writeln!(d, "- **Employees:** {employees}");
        }
        if let Some(hq) = &ctx.headquarters {
            let _ = writeln!(d, "- **Headquarters:** {hq}");
        }
        if let Some(funding) = &ctx.funding {
            let _ = writeln!(d, "- **Funding:** {funding}");
        }
    }

    // Why-now triggers
    let _ = writeln!(d, "\n## Why Now\n");
    let mut triggers: Vec<String> = Vec::new();
    if let Some(ctx) = context {
        if let Some(news) = &ctx.recent_news {
            triggers.push(format!("Recent developments: {news}"));
        }
        if let Some(funding) = &ctx.funding {
            triggers.push(format!("Funding signal: {funding}"));
        }
    }
    if triggers.is_empty() {
        triggers = vec![
            format!("Research {company}'s recent funding rounds, hiring activity, or expansion plans"),
            format!("Identify recent product launches, partnerships, or strategic initiatives at {company}"),
            format!("Review {company}'s growth trajectory and infrastructure scaling needs"),
        ];
    }
    for t in &triggers {
        let _ = writeln!(d, "- {t}");
    }

    // Pain points
    let _ = writeln!(d, "\n## Pain Points ({persona_label})\n");
    for p in pain_points(persona_label) {
        let _ = writeln!(d, "- {p}");
    }

    // Discovery questions
    let _ = writeln!(d, "\n## Discovery Questions\n");
    for (i, q) in discovery_questions(persona_label, company, clause.as_deref())
        .iter()
        .enumerate()
    {
        let _ = writeln!(d, "{}. {q}", i + 1);
    }

    // Email sequence
    let _ = writeln!(d, "\n## Email Sequence\n");
    let _ = writeln!(d, "### Email 1 — Opener\n");
    let _ = writeln!(d, "Subject: Quick question about {company}'s engineering workflow\n");
    let _ = writeln!(d, "Hi {greeting},\n");
    let _ = writeln!(
        d,
        "[Open with a specific, recent observation about {company}.] As {persona_label} you \
         likely own [relevant problem area]; teams in a similar position have cut [metric] \
         meaningfully once they addressed it."
    );
    if let Some(clause) = &clause {
        let _ = writeln!(
            d,
            "If you're already evaluating {clause}, it may be worth comparing the tradeoffs \
             that matter for your team before committing."
        );
    }
    let _ = writeln!(d, "Worth a short exchange?\n");

    let _ = writeln!(d, "### Email 2 — Follow-up\n");
    let _ = writeln!(d, "Subject: Re: {company}'s engineering workflow\n");
    let _ = writeln!(d, "Hi {greeting},\n");
    let _ = writeln!(
        d,
        "Following up with one concrete datapoint: [specific result from a comparable team]. \
         Happy to share how they approached the rollout if useful.\n"
    );

    let _ = writeln!(d, "### Email 3 — Break-up\n");
    let _ = writeln!(d, "Subject: Closing the loop\n");
    let _ = writeln!(d, "Hi {greeting},\n");
    let _ = writeln!(
        d,
        "I'll stop here unless this lands on your roadmap. If priorities shift at {company}, \
         [specific offer] stands.\n"
    );

    // LinkedIn message
    let _ = writeln!(d, "## LinkedIn Message\n");
    let _ = writeln!(
        d,
        "Hi {greeting} — saw [recent trigger] at {company}. I work with {persona_label}s on \
         [problem area] and can share what similar teams are doing. Open to connecting?\n"
    );

    // Objection handling
    let _ = writeln!(d, "## Objection Handling\n");
    let _ = writeln!(
        d,
        "- **\"We already have a solution.\"** Ask what's working and where the gaps are; \
         position against the incumbent's tradeoffs, not its feature list."
    );
    if let Some(clause) = &clause {
        let _ = writeln!(
            d,
            "- **\"How do you compare to {clause}?\"** Name the concrete tradeoffs the \
             {persona_label} cares about rather than a checkbox comparison."
        );
    }
    let _ = writeln!(
        d,
        "- **\"Not a priority right now.\"** Tie back to the why-now triggers above and \
         agree on a revisit date."
    );
    let _ = writeln!(
        d,
        "- **\"No budget.\"** Quantify the cost of the status quo before discussing price."
    );

    doc
}
