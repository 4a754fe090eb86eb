//! Plain-text rendering of the gallery projection.

use std::fmt::Write;

use pixsea::state::{GalleryView, ImageItem, LoadStatus};

/// Help text listing console commands.
pub const HELP: &str = "\
Type a search term and press Enter.
  :more        load the next page
  :open N      view item N enlarged
  :close       close the viewer
  :clear       clear the search
  :show        print the current results
  :quit        exit";

/// What: Render the gallery projection as text.
///
/// Inputs:
/// - `view`: Current projection.
///
/// Output:
/// - Multi-line listing with a status header, numbered items, the viewer and hints.
#[must_use]
pub fn render_view(view: &GalleryView<'_>) -> String {
    let mut out = String::new();
    if view.term.is_empty() {
        out.push_str("No search term.\n");
    } else {
        let status = match view.status {
            LoadStatus::Idle => "idle".to_string(),
            LoadStatus::Loading => "loading...".to_string(),
            LoadStatus::Loaded => "loaded".to_string(),
            LoadStatus::Failed(reason) => format!("last page failed: {reason}"),
        };
        let _ = writeln!(
            out,
            "\"{}\": {} image(s), next page {} [{status}]",
            view.term,
            view.items.len(),
            view.page
        );
    }
    if view.show_loader() {
        out.push_str("  Loading...\n");
    }
    for (i, item) in view.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}. #{} {}x{} {}  {}",
            i + 1,
            item.id,
            item.width,
            item.height,
            item.tags,
            item.web_format_url
        );
    }
    if !view.has_results && !view.loading && !view.term.is_empty() {
        out.push_str("  No images found.\n");
    }
    if let Some(sel) = view.selection {
        let _ = writeln!(
            out,
            "Viewing #{} by {} ({}x{}): {}",
            sel.id,
            if sel.user.is_empty() { "unknown" } else { sel.user.as_str() },
            sel.width,
            sel.height,
            sel.large_image_url
        );
    }
    if view.can_load_more() {
        out.push_str("(:more for the next page)\n");
    }
    out
}

/// What: Render accumulated items as a pretty-printed JSON array.
///
/// Inputs:
/// - `items`: Items in display order.
///
/// Output:
/// - JSON text using the item field names.
///
/// # Errors
/// - Returns `Err` when serialization fails.
pub fn render_json(items: &[ImageItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}
