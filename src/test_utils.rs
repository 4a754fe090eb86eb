//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::ImageItem;

#[cfg(test)]
/// What: Build a minimal `ImageItem` for tests.
///
/// Inputs:
/// - `id`: Identifier to assign
///
/// Output: Item with placeholder URLs derived from `id`
pub fn image(id: u64) -> ImageItem {
    ImageItem {
        id,
        page_url: format!("https://example.test/photos/{id}"),
        preview_url: format!("https://example.test/{id}_150.jpg"),
        web_format_url: format!("https://example.test/{id}_640.jpg"),
        large_image_url: format!("https://example.test/{id}_1280.jpg"),
        width: 640,
        height: 427,
        tags: "test".to_string(),
        user: "tester".to_string(),
    }
}

#[cfg(test)]
/// What: Build one `ImageItem` per id in `ids`.
///
/// Inputs:
/// - `ids`: Identifier range
///
/// Output: Items in range order
pub fn images(ids: std::ops::RangeInclusive<u64>) -> Vec<ImageItem> {
    ids.map(image).collect()
}
