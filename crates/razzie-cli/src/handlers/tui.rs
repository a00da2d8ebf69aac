use anyhow::Result;
use razzie_api::ApiClient;

/// Run the interactive shell. The draw loop owns the main thread; fetches
/// run on the tokio runtime and report back over a channel.
pub fn handle(runtime: &tokio::runtime::Runtime, client: ApiClient) -> Result<()> {
    crate::tui::run(runtime.handle(), client)
}
