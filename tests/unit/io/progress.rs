//! Tests for indexing and composition progress display

#[cfg(test)]
mod tests {
    use mosaictile::io::progress::ProgressManager;

    // Tests the full bar lifecycle on a visible manager
    // Verified by updating a bar before it is started
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.start_indexing();
        pm.update_indexing(1, 3);
        pm.update_indexing(3, 3);
        pm.finish_indexing(2);

        pm.start_composing();
        for done in 1..=4 {
            pm.update_composing(done, 4);
        }
        pm.finish();
    }

    // Tests updates before any bar is started are ignored
    // Verified by unwrapping the missing bar
    #[test]
    fn test_updates_without_bars() {
        let pm = ProgressManager::default();

        pm.update_indexing(1, 1);
        pm.finish_indexing(0);
        pm.update_composing(1, 1);
        pm.finish();
    }

    // Tests a hidden manager accepts the same calls
    // Verified by drawing hidden bars to stderr
    #[test]
    fn test_hidden_manager() {
        let mut pm = ProgressManager::hidden();

        pm.start_indexing();
        pm.update_indexing(0, 0);
        pm.finish_indexing(0);
        pm.start_composing();
        pm.update_composing(10, 10);
        pm.finish();
    }
}
