/// Returns a cached value, or computes, caches and returns it.
///
/// Looks `$key` up in `$cache` (an `Arc<dyn RecipeCache>` or anything that
/// derefs to one). On a miss the `$block` future is awaited, its error
/// propagated with `?`, and the value written back in the background with
/// `$ttl` seconds to live.
///
/// # Example
/// ```rust,ignore
/// async fn load(cache: Arc<dyn RecipeCache>, key: CacheKey) -> AppResult<RecipeDraft> {
///     cached!(cache, key, 3600, async move { build_draft().await })
/// }
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $crate::cache::get_json(&*$cache, &$key).await {
            Ok(cached)
        } else {
            let value = $block.await?;
            $crate::cache::set_json_in_background(&*$cache, &$key, &value, $ttl);
            Ok(value)
        }
    }};
}
