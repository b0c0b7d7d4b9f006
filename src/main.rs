use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use account_brief::brief::render_brief;
use account_brief::config::Config;
use account_brief::error::Result;
use account_brief::llm::{self, Provider};
use account_brief::{output, research};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a structured markdown account brief", long_about = None)]
struct Args {
    /// Company name
    #[arg(long, short = 'c')]
    company: String,

    /// Target persona (e.g., "CTO", "VP Engineering", "Platform Lead")
    #[arg(long, short = 'p')]
    persona: String,

    /// Competitor name(s), comma-separated
    #[arg(long, visible_alias = "co")]
    competitor: Option<String>,

    /// Research the persona and company with an LLM (requires the matching
    /// OPENAI_API_KEY / ANTHROPIC_API_KEY env var)
    #[arg(long, value_enum)]
    llm: Option<Provider>,

    /// Root directory for generated briefs (default: outputs, or BRIEF_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn parse_competitors(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

async fn run(args: Args) -> Result<PathBuf> {
    let config = Config::load();

    let competitors = parse_competitors(args.competitor.as_deref());
    let client = args
        .llm
        .map(|provider| llm::create_client(provider, &config))
        .transpose()?;

    let persona_display =
        research::resolve_persona(client.as_deref(), &args.company, &args.persona).await;
    let context = match client.as_deref() {
        Some(c) => research::company_context(c, &args.company).await,
        None => None,
    };

    let markdown = render_brief(&args.company, &persona_display, &competitors, context.as_ref());

    let root = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let path = output::write_brief(&root, &args.company, &markdown)?;
    info!(path = %path.display(), "account brief written");
    Ok(path)
}

#[tokio::main]
async fn main() {
    account_brief::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("account_brief=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        // stdout carries only the output path; logs go to stderr.
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Error generating account brief: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competitors_split_and_trimmed() {
        assert_eq!(
            parse_competitors(Some("VendorX, VendorY ,VendorZ")),
            vec!["VendorX", "VendorY", "VendorZ"]
        );
    }

    #[test]
    fn empty_and_missing_competitors_yield_empty_list() {
        assert!(parse_competitors(None).is_empty());
        assert!(parse_competitors(Some("")).is_empty());
        assert!(parse_competitors(Some(" , ,")).is_empty());
    }

    #[test]
    fn missing_company_or_persona_is_a_parse_error() {
        // A parse error surfaces before run(), so nothing is ever written.
        assert!(Args::try_parse_from(["account-brief"]).is_err());
        assert!(Args::try_parse_from(["account-brief", "--company", "Acme Corp"]).is_err());
        assert!(Args::try_parse_from(["account-brief", "--persona", "CTO"]).is_err());
    }

    #[test]
    fn required_args_parse_with_short_flags() {
        let args = Args::try_parse_from(["account-brief", "-c", "Acme Corp", "-p", "CTO"])
            .expect("both required args present");
        assert_eq!(args.company, "Acme Corp");
        assert_eq!(args.persona, "CTO");
        assert!(args.competitor.is_none());
        assert!(args.llm.is_none());
    }
}
