/// Checks whether an article link still resolves.
#[async_trait::async_trait]
pub trait LinkChecker: Send + Sync {
    /// False only when the link is known to be dead. Unreachable hosts and
    /// refused requests count as alive.
    async fn is_alive(&self, url: &str) -> bool;
}
