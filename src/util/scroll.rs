//! Smooth-scroll navigation helpers.
//!
//! All section navigation is in-page: anchors are element ids, and every
//! jump uses smooth scrolling. Browser-only; the native build compiles the
//! same signatures as no-ops.

/// Smooth-scroll the section with the given id into view.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Current vertical scroll offset, 0 outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
