use gallery_core::Effect;
use gallery_logging::{gallery_debug, gallery_info};

use super::history::BrowserHistory;

/// Applies state machine effects to the host.
pub fn apply_effects(history: &mut BrowserHistory, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ReplaceHistory { state, url } => {
                gallery_info!("ReplaceHistory category={} url={}", state.category, url);
                history.replace(state, url);
            }
            Effect::PushHistory { state, url } => {
                gallery_info!("PushHistory category={} url={}", state.category, url);
                history.push(state, url);
                gallery_debug!("history depth {}", history.depth());
            }
            Effect::ScrollToGalleryTop => {
                // The terminal redraws the whole page, so the top is always in view.
                gallery_debug!("ScrollToGalleryTop");
            }
        }
    }
}
