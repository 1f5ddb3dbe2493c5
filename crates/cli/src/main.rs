//! jobcrew CLI, the main entry point.
//!
//! Commands:
//! - `serve`   Register the agent, then accept kickoff requests until Ctrl-C
//! - `run`     Run the crew once and print the curated guide
//! - `schema`  Print the advertised parameter schema
//! - `doctor`  Check config and credentials

use clap::{Args, Parser, Subcommand};
use jobcrew_core::SearchCriteria;

mod commands;

#[derive(Parser)]
#[command(
    name = "jobcrew",
    about = "jobcrew: market research, skills matching, and opportunity curation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Register with the discovery platform and serve kickoff requests
    Serve {
        /// Override the listening port
        #[arg(short, long)]
        port: Option<u16>,

        /// Skip platform registration
        #[arg(long)]
        no_register: bool,
    },

    /// Run the crew once for the given criteria
    Run(CriteriaArgs),

    /// Print the parameter schema as JSON
    Schema,

    /// Diagnose configuration and credentials
    Doctor,
}

#[derive(Args)]
struct CriteriaArgs {
    #[arg(long)]
    job_title: String,

    #[arg(long)]
    location: String,

    #[arg(long)]
    experience_level: String,

    /// Comma-separated skills, passed through as written
    #[arg(long)]
    skills: String,

    #[arg(long, default_value = "")]
    career_goals: String,

    #[arg(long, default_value = "")]
    preferred_industry: String,

    #[arg(long, default_value = "")]
    salary_range: String,

    #[arg(long, default_value = "")]
    user_preferences: String,
}

impl From<CriteriaArgs> for SearchCriteria {
    fn from(args: CriteriaArgs) -> Self {
        SearchCriteria::new(args.job_title, args.location, args.experience_level, args.skills)
            .with_career_goals(args.career_goals)
            .with_preferred_industry(args.preferred_industry)
            .with_salary_range(args.salary_range)
            .with_user_preferences(args.user_preferences)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port, no_register } => commands::serve::run(port, !no_register).await?,
        Commands::Run(args) => commands::run::run(args.into()).await?,
        Commands::Schema => commands::schema::run()?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_args_become_criteria() {
        let cli = Cli::try_parse_from([
            "jobcrew",
            "run",
            "--job-title",
            "Software Engineer",
            "--location",
            "San Francisco",
            "--experience-level",
            "Senior",
            "--skills",
            "Python, React, AWS",
            "--salary-range",
            "120k-180k",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        let criteria = SearchCriteria::from(args);
        assert_eq!(criteria.job_title, "Software Engineer");
        assert_eq!(criteria.skills, "Python, React, AWS");
        assert_eq!(criteria.salary_range, "120k-180k");
        assert_eq!(criteria.career_goals, "");
    }

    #[test]
    fn run_requires_the_four_core_fields() {
        let parsed = Cli::try_parse_from(["jobcrew", "run", "--job-title", "Nurse"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from(["jobcrew", "-v", "serve", "--port", "9000", "--no-register"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve { port, no_register } => {
                assert_eq!(port, Some(9000));
                assert!(no_register);
            }
            _ => panic!("expected serve"),
        }
    }
}
