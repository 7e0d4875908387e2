use gallery_logging::{gallery_debug, gallery_error, gallery_info};

use crate::navigation::HistoryMode;
use crate::pagination::PageMove;
use crate::state::Gallery;
use crate::{AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ManifestLoaded { manifest, location } => {
            if state.phase() != Phase::Loading {
                gallery_debug!("ignoring manifest delivered in phase {:?}", state.phase());
                return (state, Vec::new());
            }
            let Some(mut gallery) = Gallery::new(manifest, location) else {
                gallery_error!("gallery load failed: no categories found in gallery data");
                state.fail("No categories found in gallery data");
                return (state, Vec::new());
            };
            let entry = gallery.select_initial();
            gallery_info!(
                "gallery ready with {} categories, showing {:?}",
                gallery.store().categories().len(),
                entry.state.category
            );
            state.start(gallery);
            vec![entry.into()]
        }
        Msg::LoadFailed { reason } => {
            if state.phase() == Phase::Loading {
                gallery_error!("gallery load failed: {reason}");
                state.fail(reason);
            }
            Vec::new()
        }
        Msg::CategoryClicked(slug) => match state.gallery_mut() {
            Some(gallery) if gallery.store().current_slug() != slug => {
                gallery.select(&slug);
                let entry = gallery.record_selection(HistoryMode::Push);
                state.mark_dirty();
                vec![entry.into()]
            }
            Some(_) => {
                gallery_debug!("category {slug:?} is already active");
                Vec::new()
            }
            None => Vec::new(),
        },
        Msg::PrevPageClicked => page_effects(&mut state, Gallery::prev_page),
        Msg::NextPageClicked => page_effects(&mut state, Gallery::next_page),
        Msg::HistoryPopped {
            state: history_state,
            location,
        } => {
            let mut changed = false;
            if let Some(gallery) = state.gallery_mut() {
                // Selection comes from history, so no new entry is pushed.
                match gallery.restore_location(history_state.as_ref(), location) {
                    Some(slug) if slug != gallery.store().current_slug() => {
                        gallery.select(&slug);
                        changed = true;
                    }
                    _ => {}
                }
            }
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn page_effects(state: &mut AppState, step: fn(&mut Gallery) -> PageMove) -> Vec<Effect> {
    let Some(gallery) = state.gallery_mut() else {
        return Vec::new();
    };
    match step(gallery) {
        PageMove::Moved => {
            state.mark_dirty();
            vec![Effect::ScrollToGalleryTop]
        }
        PageMove::Disabled => Vec::new(),
    }
}
