pub mod doctor;
pub(crate) mod progress;
pub mod run;
pub mod schema;
pub mod serve;

use std::future::Future;
use std::io::Write;

use jobcrew_config::{ConfigError, Credentials};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load the three API keys, reporting the first missing one on `out`.
///
/// `None` means the command must stop before building anything.
pub(crate) fn require_credentials(
    load: impl FnOnce() -> Result<Credentials, ConfigError>,
    out: &mut impl Write,
) -> Option<Credentials> {
    match load() {
        Ok(credentials) => Some(credentials),
        Err(e) => {
            let _ = writeln!(out, "Error: {e}");
            None
        }
    }
}

/// Run `body` only once every credential is present.
pub(crate) async fn with_credentials<F, Fut>(
    load: impl FnOnce() -> Result<Credentials, ConfigError>,
    out: &mut impl Write,
    body: F,
) -> CommandResult
where
    F: FnOnce(Credentials) -> Fut,
    Fut: Future<Output = CommandResult>,
{
    let Some(credentials) = require_credentials(load, out) else {
        return Ok(());
    };
    body(credentials).await
}
