use anyhow::Result;
use clap::Parser;

use pwd_assess::{assess_password, input, report};

#[derive(Parser)]
#[command(name = "pwd-assess")]
#[command(
    about = "Assess password strength from the terminal\nScores length, character variety and entropy with actionable feedback"
)]
#[command(version)]
struct Cli {
    /// Password to assess (visible in shell history and process lists; prefer --interactive)
    #[arg(short, long)]
    password: Option<String>,

    /// Prompt for the password with hidden input
    #[arg(short, long, conflicts_with = "password")]
    interactive: bool,

    /// Emit the assessment as JSON instead of the formatted report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let password = input::resolve_password(cli.password, cli.interactive)?;
    let assessment = assess_password(&password);

    if cli.json {
        println!("{}", report::render_json(&assessment)?);
    } else {
        println!("{}", report::render(&assessment));
    }

    Ok(())
}
