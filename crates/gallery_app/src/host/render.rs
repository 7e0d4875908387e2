use gallery_core::{ContentKind, GalleryViewModel, ItemCard, PaginationView, Phase};

/// Text rendering of the view, one line per element.
pub fn render(view: &GalleryViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let status = view.message.as_ref().map(|message| {
        if message.is_error {
            format!("error: {}", message.text)
        } else {
            message.text.clone()
        }
    });
    // Outside Ready the status replaces the whole gallery.
    if view.phase != Phase::Ready {
        lines.extend(status.clone());
    }
    if let Some(source) = &view.source_label {
        lines.push(format!("Source: {source}"));
    }

    if !view.categories.is_empty() {
        lines.push("Categories:".to_string());
        for entry in &view.categories {
            let marker = if entry.active { '*' } else { ' ' };
            lines.push(format!(
                "  {marker} {} ({}) [{}]",
                entry.name, entry.item_count, entry.slug
            ));
        }
    }

    if let Some(meta) = &view.category_meta {
        lines.push(meta.clone());
    }
    if view.phase == Phase::Ready {
        lines.extend(status);
    }
    for card in &view.cards {
        lines.push(render_card(card));
    }

    if !view.categories.is_empty() {
        lines.push(render_pagination(&view.pagination));
    }
    lines
}

fn render_card(card: &ItemCard) -> String {
    let kind = match card.content {
        ContentKind::Iframe => "html",
        ContentKind::Image => "image",
    };
    let mut line = format!("  - {} <{kind}> {}", card.title, card.src);
    if !card.tags.is_empty() {
        let tags: Vec<String> = card
            .tags
            .iter()
            .map(|tag| format!("#{}", tag.label))
            .collect();
        line.push_str("  ");
        line.push_str(&tags.join(" "));
    }
    line
}

fn render_pagination(pagination: &PaginationView) -> String {
    let prev = if pagination.prev_disabled { "-" } else { "<" };
    let next = if pagination.next_disabled { "-" } else { ">" };
    format!("[{prev}] {} [{next}]", pagination.label)
}
