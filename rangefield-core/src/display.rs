//! Which auxiliary labels render beneath the slider.

use serde::{Deserialize, Serialize};

/// One of the three auxiliary label positions, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
    Min,
    Current,
    Max,
}

impl DisplaySlot {
    pub const ALL: [DisplaySlot; 3] = [DisplaySlot::Min, DisplaySlot::Current, DisplaySlot::Max];
}

/// Closed set of label-row modes.
///
/// | policy   | min | current | max |
/// |----------|-----|---------|-----|
/// | `All`    |  x  |    x    |  x  |
/// | `Current`|     |    x    |     |
/// | `MinMax` |  x  |         |  x  |
/// | `None`   |     |         |     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPolicy {
    #[default]
    All,
    Current,
    MinMax,
    None,
}

impl DisplayPolicy {
    pub fn shows(self, slot: DisplaySlot) -> bool {
        match slot {
            DisplaySlot::Min | DisplaySlot::Max => {
                !matches!(self, DisplayPolicy::None | DisplayPolicy::Current)
            }
            DisplaySlot::Current => !matches!(self, DisplayPolicy::None | DisplayPolicy::MinMax),
        }
    }

    /// Rendered slots in left-to-right order.
    pub fn slots(self) -> Vec<DisplaySlot> {
        DisplaySlot::ALL
            .into_iter()
            .filter(|slot| self.shows(*slot))
            .collect()
    }

    /// Next policy in declaration order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            DisplayPolicy::All => DisplayPolicy::Current,
            DisplayPolicy::Current => DisplayPolicy::MinMax,
            DisplayPolicy::MinMax => DisplayPolicy::None,
            DisplayPolicy::None => DisplayPolicy::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_table() {
        use DisplaySlot::*;
        assert_eq!(DisplayPolicy::All.slots(), vec![Min, Current, Max]);
        assert_eq!(DisplayPolicy::Current.slots(), vec![Current]);
        assert_eq!(DisplayPolicy::MinMax.slots(), vec![Min, Max]);
        assert!(DisplayPolicy::None.slots().is_empty());
    }

    #[test]
    fn test_min_max_never_shows_current() {
        assert!(!DisplayPolicy::MinMax.shows(DisplaySlot::Current));
    }

    #[test]
    fn test_cycle_visits_every_policy() {
        let mut p = DisplayPolicy::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(p);
            p = p.cycle();
        }
        assert_eq!(p, DisplayPolicy::All);
        assert_eq!(seen.len(), 4);
        assert!(seen.contains(&DisplayPolicy::None));
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrap {
            p: DisplayPolicy,
        }
        let w: Wrap = toml::from_str("p = \"min_max\"").unwrap();
        assert_eq!(w.p, DisplayPolicy::MinMax);
    }
}
