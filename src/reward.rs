//! Reward reveal overlay and gift catalog
//!
//! Consumes "gift captured" notifications from the simulation and decides
//! which catalog entry to show. Nothing here feeds back into the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::SPECIAL_REWARD_INDEX;
use crate::sim::GameEvent;

/// Catalog shipped with the game
const DEFAULT_CATALOG_JSON: &str = include_str!("../assets/gifts.json");

/// Page behind the end-of-sequence link, copied next to `index.html` by trunk
pub const END_PAGE: &str = "end.html";

/// A single reward in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftEntry {
    pub name: String,
    /// Image URL relative to the page
    pub image: String,
    pub describe: String,
}

/// Ordered reward catalog, addressed by 1-based reveal index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GiftCatalog {
    pub entries: Vec<GiftEntry>,
}

impl GiftCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The embedded catalog
    pub fn builtin() -> Self {
        Self::from_json(DEFAULT_CATALOG_JSON).unwrap_or_else(|e| {
            log::error!("Embedded gift catalog is invalid: {}", e);
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a reveal index, clamped to the last entry past the end
    ///
    /// Reveal 1 is the first entry, so a catalog for the special reward at
    /// reveal 3 needs exactly three entries and no unused slot at the front.
    pub fn entry(&self, reveal_index: usize) -> Option<&GiftEntry> {
        let last = self.entries.len().checked_sub(1)?;
        let slot = reveal_index.saturating_sub(1).min(last);
        self.entries.get(slot)
    }
}

/// Text under the reward card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealFooter {
    /// This many more reveals until the special reward
    MoreToCome { remaining: usize },
    /// Special reward reached; show the end-of-sequence link
    Terminal,
}

/// Overlay state driven by capture notifications and player dismissals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardOverlay {
    pub visible: bool,
    /// Starts at 1, advances each time the player dismisses a reward
    pub reveal_index: usize,
}

impl Default for RewardOverlay {
    fn default() -> Self {
        Self {
            visible: false,
            reveal_index: 1,
        }
    }
}

impl RewardOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay; a capture while already shown keeps the same reward
    pub fn on_gift_captured(&mut self) {
        self.visible = true;
    }

    /// Feed simulation events; returns true if the overlay became visible
    pub fn handle_events(&mut self, events: &[GameEvent]) -> bool {
        let was_visible = self.visible;
        for event in events {
            if let GameEvent::GiftCaptured { .. } = event {
                self.on_gift_captured();
            }
        }
        self.visible && !was_visible
    }

    /// Close the shown reward and advance to the next one
    pub fn dismiss(&mut self) {
        if self.visible {
            self.visible = false;
            self.reveal_index += 1;
        }
    }

    /// Reward to show right now (None when hidden or the catalog is empty)
    pub fn current<'a>(&self, catalog: &'a GiftCatalog) -> Option<&'a GiftEntry> {
        if !self.visible {
            return None;
        }
        catalog.entry(self.reveal_index)
    }

    pub fn footer(&self) -> RevealFooter {
        if self.reveal_index < SPECIAL_REWARD_INDEX {
            RevealFooter::MoreToCome {
                remaining: SPECIAL_REWARD_INDEX - self.reveal_index,
            }
        } else {
            RevealFooter::Terminal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_special_reward() {
        let catalog = GiftCatalog::builtin();
        assert!(catalog.len() >= SPECIAL_REWARD_INDEX);
        assert!(catalog.entry(SPECIAL_REWARD_INDEX).is_some());
    }

    #[test]
    fn test_entry_clamps_past_end() {
        let catalog = GiftCatalog::builtin();
        let last = catalog.entries.last().unwrap();
        assert_eq!(catalog.entry(catalog.len() + 10), Some(last));
        assert_eq!(catalog.entry(0), catalog.entry(1));
        assert_eq!(GiftCatalog::default().entry(1), None);
    }

    #[test]
    fn test_capture_shows_and_dismiss_advances() {
        let catalog = GiftCatalog::builtin();
        let mut overlay = RewardOverlay::new();
        assert!(overlay.current(&catalog).is_none());

        let shown = overlay.handle_events(&[
            GameEvent::GrabStarted,
            GameEvent::GiftCaptured { gift: 4 },
        ]);
        assert!(shown);
        assert_eq!(overlay.current(&catalog), catalog.entry(1));
        assert_eq!(overlay.footer(), RevealFooter::MoreToCome { remaining: 2 });

        // A second capture before dismissing does not skip a reward
        overlay.on_gift_captured();
        assert_eq!(overlay.reveal_index, 1);

        overlay.dismiss();
        assert!(!overlay.visible);
        assert_eq!(overlay.reveal_index, 2);

        // Dismissing a hidden overlay is a no-op
        overlay.dismiss();
        assert_eq!(overlay.reveal_index, 2);
    }

    #[test]
    fn test_special_reward_is_terminal() {
        let catalog = GiftCatalog::builtin();
        let mut overlay = RewardOverlay::new();
        for _ in 0..10 {
            overlay.on_gift_captured();
            overlay.dismiss();
        }
        overlay.on_gift_captured();
        assert_eq!(overlay.footer(), RevealFooter::Terminal);
        assert_eq!(overlay.current(&catalog), catalog.entries.last());
    }

    #[test]
    fn test_reveal_index_maps_to_entry_in_order() {
        let catalog = GiftCatalog::from_json(
            r#"[{"name":"one","image":"1.png","describe":""},
                {"name":"two","image":"2.png","describe":""},
                {"name":"three","image":"3.png","describe":""}]"#,
        )
        .unwrap();
        let names: Vec<_> = (1..=SPECIAL_REWARD_INDEX)
            .map(|i| catalog.entry(i).unwrap().name.as_str())
            .collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn test_end_page_is_shipped_and_linked() {
        let page = include_str!("../end.html");
        assert!(page.contains("<html"));
        let index = include_str!("../index.html");
        assert!(index.contains(&format!(r#"rel="copy-file" href="{}""#, END_PAGE)));
        assert!(index.contains(&format!(r#"id="reward-end" class="hidden" href="{}""#, END_PAGE)));
    }

    #[test]
    fn test_bad_catalog_json() {
        assert!(GiftCatalog::from_json(r#"[{"name": "x"}]"#).is_err());
        let one = GiftCatalog::from_json(r#"[{"name":"a","image":"/a.png","describe":"d"}]"#)
            .unwrap();
        assert_eq!(one.len(), 1);
    }
}
