//! Range-slider semantics: clamping, divisions, thumb ordering, positions.

use std::cmp::Ordering;

use crate::config::SliderConfig;
use crate::value::RangeValue;

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thumb {
    #[default]
    Start,
    End,
}

impl Thumb {
    pub fn other(self) -> Self {
        match self {
            Thumb::Start => Thumb::End,
            Thumb::End => Thumb::Start,
        }
    }

    pub fn of(self, value: RangeValue) -> f64 {
        match self {
            Thumb::Start => value.start,
            Thumb::End => value.end,
        }
    }
}

/// Fraction of the range used as the keyboard step on a continuous slider.
const CONTINUOUS_STEP_FRACTION: f64 = 0.01;

impl SliderConfig {
    /// Both thumbs collapse onto `min` when there is no room to move.
    pub fn is_inert(&self) -> bool {
        self.max.partial_cmp(&self.min) != Some(Ordering::Greater)
    }

    /// `divisions` when it is a usable positive count.
    pub fn effective_divisions(&self) -> Option<u32> {
        self.divisions.filter(|d| *d > 0)
    }

    /// Log configuration the slider will silently tolerate.
    pub fn warn_if_malformed(&self, field: &str) {
        if self.min > self.max {
            log::warn!(
                "field {field:?}: min {} is greater than max {}; slider is inert",
                self.min,
                self.max
            );
        }
        if self.divisions == Some(0) {
            log::warn!("field {field:?}: divisions = 0 treated as continuous");
        }
    }

    /// Keyboard step: one division, or 1% of the range when continuous.
    pub fn step(&self) -> f64 {
        if self.is_inert() {
            return 0.0;
        }
        let range = self.max - self.min;
        match self.effective_divisions() {
            Some(d) => range / d as f64,
            None => range * CONTINUOUS_STEP_FRACTION,
        }
    }

    /// Clamp into `[min, max]` and snap to the nearest division.
    pub fn snap(&self, value: f64) -> f64 {
        if self.is_inert() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        match self.effective_divisions() {
            Some(d) => {
                let step = (self.max - self.min) / d as f64;
                let index = ((clamped - self.min) / step).round();
                (self.min + index * step).clamp(self.min, self.max)
            }
            None => clamped,
        }
    }

    /// Snap both ends and order them so `start <= end`.
    pub fn normalize(&self, value: RangeValue) -> RangeValue {
        RangeValue::new(self.snap(value.start), self.snap(value.end)).ordered()
    }

    /// Position of `value` along the track in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.is_inert() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Raw (unsnapped) value at a track position in `[0, 1]`.
    pub fn value_at(&self, fraction: f64) -> f64 {
        if self.is_inert() {
            return self.min;
        }
        self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Move one thumb toward `target` without letting it pass the other.
    pub fn move_thumb(&self, value: RangeValue, thumb: Thumb, target: f64) -> RangeValue {
        let snapped = self.snap(target);
        match thumb {
            Thumb::Start => RangeValue::new(snapped.min(value.end), value.end),
            Thumb::End => RangeValue::new(value.start, snapped.max(value.start)),
        }
    }

    /// Thumb a press at `target` should grab: the closer one, ties going
    /// to the end thumb when the press is past it and the start thumb otherwise.
    pub fn nearest_thumb(&self, value: RangeValue, target: f64) -> Thumb {
        let to_start = (target - value.start).abs();
        let to_end = (target - value.end).abs();
        if to_start < to_end {
            Thumb::Start
        } else if to_end < to_start || target > value.end {
            Thumb::End
        } else {
            Thumb::Start
        }
    }

    /// Rounded percentage position, the fallback accessibility description.
    pub fn percent_label(&self, value: f64) -> String {
        format!("{}%", (self.fraction(value) * 100.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_when_bounds_equal_or_reversed() {
        assert!(SliderConfig::new(5.0, 5.0).is_inert());
        assert!(SliderConfig::new(6.0, 5.0).is_inert());
        assert!(!SliderConfig::new(0.0, 1.0).is_inert());

        let cfg = SliderConfig::new(5.0, 5.0);
        assert_eq!(cfg.snap(100.0), 5.0);
        assert_eq!(cfg.normalize(RangeValue::new(1.0, 9.0)), RangeValue::collapsed(5.0));
        assert_eq!(cfg.step(), 0.0);
    }

    #[test]
    fn test_zero_divisions_is_continuous() {
        let cfg = SliderConfig::new(0.0, 1.0).with_divisions(0);
        assert_eq!(cfg.effective_divisions(), None);
        assert_eq!(cfg.snap(0.37), 0.37);
    }

    #[test]
    fn test_snap_to_divisions() {
        let cfg = SliderConfig::new(0.0, 100.0).with_divisions(4);
        assert_eq!(cfg.snap(10.0), 0.0);
        assert_eq!(cfg.snap(13.0), 25.0);
        assert_eq!(cfg.snap(62.4), 50.0);
        assert_eq!(cfg.snap(140.0), 100.0);
        assert_eq!(cfg.step(), 25.0);
    }

    #[test]
    fn test_continuous_step_is_one_percent() {
        let cfg = SliderConfig::new(0.0, 200.0);
        assert!((cfg.step() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_clamps_and_orders() {
        let cfg = SliderConfig::new(10.0, 100.0);
        assert_eq!(cfg.normalize(RangeValue::new(120.0, 0.0)), RangeValue::new(10.0, 100.0));
        assert_eq!(cfg.normalize(RangeValue::new(50.0, 20.0)), RangeValue::new(20.0, 50.0));
    }

    #[test]
    fn test_move_thumb_never_crosses() {
        let cfg = SliderConfig::new(0.0, 1.0);
        let v = RangeValue::new(0.4, 0.6);
        assert_eq!(cfg.move_thumb(v, Thumb::Start, 0.9), RangeValue::new(0.6, 0.6));
        assert_eq!(cfg.move_thumb(v, Thumb::End, 0.1), RangeValue::new(0.4, 0.4));
        assert_eq!(cfg.move_thumb(v, Thumb::End, 0.8), RangeValue::new(0.4, 0.8));
    }

    #[test]
    fn test_nearest_thumb() {
        let cfg = SliderConfig::new(0.0, 1.0);
        let v = RangeValue::new(0.2, 0.8);
        assert_eq!(cfg.nearest_thumb(v, 0.1), Thumb::Start);
        assert_eq!(cfg.nearest_thumb(v, 0.7), Thumb::End);

        let collapsed = RangeValue::collapsed(0.5);
        assert_eq!(cfg.nearest_thumb(collapsed, 0.9), Thumb::End);
        assert_eq!(cfg.nearest_thumb(collapsed, 0.1), Thumb::Start);
    }

    #[test]
    fn test_fraction_and_value_at() {
        let cfg = SliderConfig::new(10.0, 20.0);
        assert_eq!(cfg.fraction(15.0), 0.5);
        assert_eq!(cfg.fraction(30.0), 1.0);
        assert_eq!(cfg.value_at(0.25), 12.5);
        assert_eq!(cfg.percent_label(12.5), "25%");
    }
}
