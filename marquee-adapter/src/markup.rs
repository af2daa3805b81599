use core::fmt::Write;

use crate::WorkItem;

/// Renders one slide per item for the gallery track.
///
/// Text and attribute values are HTML-escaped.
pub fn render_work_gallery(items: &[WorkItem]) -> String {
    let mut html = String::new();
    for item in items {
        let project = escape(&item.project);
        let client = escape(&item.client);
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            r#"
<div class="embla__slide">
  <article class="work-card" aria-label="{project} for {client}">
    <div class="work-picture">
      <img src="{image}" alt="{project}" width="340" height="190" />
    </div>
    <div class="work-copy">
      <h3 class="work-project">{project}</h3>
      <p class="work-client">{client}</p>
      <div class="work-details">
        <p class="work-services">{services}</p>
        <p class="work-stack">{stack}</p>
      </div>
    </div>
  </article>
</div>
"#,
            image = escape(&item.image),
            services = escape(&item.services),
            stack = escape(&item.stack),
        );
    }
    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
