use friendgraph::make_simple_friendship;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout is just the names.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let friends = make_simple_friendship(["Harry", "Ron", "Hermione"])?;
    tracing::debug!(?friends, "built friendship");
    friends.print_friends()?;
    Ok(())
}
