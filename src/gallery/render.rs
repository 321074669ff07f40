use crate::gallery::{GalleryState, GalleryView};

/// Renders a view as a plain-text page. Pure: the same view always produces
/// the same page.
pub fn render_gallery(view: &GalleryView) -> String {
    let mut page = String::new();

    page.push_str("My Projects\n");
    page.push_str("===========\n");
    page.push_str(
        "Here are some of the projects I've worked on. \
         Each one represents a unique challenge and solution.\n",
    );

    if view.state == GalleryState::Loading {
        page.push_str("\nLoading projects...\n");
        return page;
    }

    if let Some(notice) = &view.notice {
        page.push_str(&format!("\n[!] {}\n", notice));
    }

    if view.projects.is_empty() {
        page.push_str("\nNo projects found.\n");
        return page;
    }

    for project in &view.projects {
        page.push('\n');
        page.push_str(&format!("{}\n", project.title));
        page.push_str(&format!("{}\n", project.description));

        // Every segment becomes a chip, empty ones included.
        let chips = project
            .technology_labels()
            .iter()
            .map(|label| format!("[{}]", label))
            .collect::<Vec<_>>()
            .join(" ");
        page.push_str(&format!("{}\n", chips));

        if let Some(demo_url) = &project.demo_url {
            page.push_str(&format!("Demo: {}\n", demo_url));
        }
        if let Some(source_url) = &project.source_url {
            page.push_str(&format!("Code: {}\n", source_url));
        }
    }

    page
}
