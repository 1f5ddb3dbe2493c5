//! `jobcrew schema`: print the parameter schema the agent registers with.

use jobcrew_gateway::JobSearchCrew;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&JobSearchCrew::schema())?);
    Ok(())
}
