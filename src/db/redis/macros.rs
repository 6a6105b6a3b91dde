/// Read-through caching over a [`Cache`](crate::db::Cache).
///
/// Evaluates to the cached value when `$key` is present. Otherwise awaits
/// `$block`, propagates its error with `?`, queues the value for a background
/// write with `$ttl` seconds to live, and evaluates to it. A failed cache read
/// is logged and treated as a miss.
///
/// # Example
/// ```rust,ignore
/// let candidates: Vec<Candidate> = cached!(cache, key, 600, async {
///     load_candidates().await
/// });
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let hit = match $cache.get_from_cache(&$key).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(error = %e, key = %$key, "Cache read failed, falling back");
                None
            }
        };

        match hit {
            Some(cached) => {
                tracing::debug!(key = %$key, "Cache hit");
                cached
            }
            None => {
                tracing::debug!(key = %$key, "Cache miss");
                let value = $block.await?;
                $cache.set_in_background(&$key, &value, $ttl);
                value
            }
        }
    }};
}
