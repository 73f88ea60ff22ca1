//! Boot banner
//!
//! The greeting the panel shows after both modules come up, written as a
//! declarative op list walked by [`play`]. Keeping it as data makes the
//! sequence readable at a glance and lets tests replay it against a
//! recording panel.
//!
//! The sequence paints the prompt on module one and the name tag on
//! module two, holds, then rearranges: module one keeps only the ellipsis
//! on its second row while the prompt moves across to module two.

use embedded_hal::delay::DelayNs;

use crate::traits::{Module, Panel, Row};

/// First banner line: asks for the button
pub const PROMPT: &str = "Press button";
/// Second banner line
pub const ELLIPSIS: &str = "...";
/// Module two, first row
pub const NAME_TAG: &str = "Marquee";
/// Module two, second row
pub const VERSION_TAG: &str = "dry run 0.1";

/// One step of a banner script
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BannerOp {
    /// Blank a module
    Clear(Module),
    /// Re-assert display on with a blinking cursor
    BlinkCursor(Module),
    /// Place the cursor
    Cursor(Module, Row, u8),
    /// Write text at the cursor
    Text(Module, &'static str),
    /// Leave the panel alone for a while (milliseconds)
    Hold(u32),
}

/// The power-on banner
pub const BOOT_BANNER: &[BannerOp] = &[
    BannerOp::Clear(Module::One),
    BannerOp::BlinkCursor(Module::One),
    BannerOp::Cursor(Module::One, Row::First, 0),
    BannerOp::Text(Module::One, PROMPT),
    BannerOp::Cursor(Module::One, Row::Second, 0),
    BannerOp::Text(Module::One, ELLIPSIS),
    BannerOp::Clear(Module::Two),
    BannerOp::Cursor(Module::Two, Row::First, 6),
    BannerOp::Text(Module::Two, NAME_TAG),
    BannerOp::Cursor(Module::Two, Row::Second, 0),
    BannerOp::Text(Module::Two, VERSION_TAG),
    BannerOp::Hold(500),
    // Rearrange: the prompt crosses over to module two
    BannerOp::Clear(Module::One),
    BannerOp::Cursor(Module::One, Row::Second, 0),
    BannerOp::Text(Module::One, ELLIPSIS),
    BannerOp::Cursor(Module::Two, Row::First, 6),
    BannerOp::Text(Module::Two, PROMPT),
];

/// Run a banner script against a panel
pub fn play<P, D>(panel: &mut P, delay: &mut D, script: &[BannerOp])
where
    P: Panel,
    D: DelayNs,
{
    for op in script {
        match *op {
            BannerOp::Clear(module) => panel.clear(module),
            BannerOp::BlinkCursor(module) => panel.blink_cursor(module),
            BannerOp::Cursor(module, row, col) => panel.cursor(module, row, col),
            BannerOp::Text(module, text) => panel.write_str(module, text),
            BannerOp::Hold(ms) => delay.delay_ms(ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockDelay, MockPanel, PanelCall};

    fn text_call(module: Module, text: &str) -> PanelCall {
        let mut copy = heapless::String::new();
        copy.push_str(text).unwrap();
        PanelCall::Text(module, copy)
    }

    #[test]
    fn test_boot_banner_paints_both_modules() {
        let mut panel = MockPanel::new();
        let mut delay = MockDelay::new();
        play(&mut panel, &mut delay, BOOT_BANNER);

        assert!(panel.calls.contains(&text_call(Module::One, PROMPT)));
        assert!(panel.calls.contains(&text_call(Module::Two, NAME_TAG)));
        assert!(panel.calls.contains(&text_call(Module::Two, VERSION_TAG)));
        // Both modules start from a clean slate
        assert!(panel.calls.contains(&PanelCall::Clear(Module::One)));
        assert!(panel.calls.contains(&PanelCall::Clear(Module::Two)));
    }

    #[test]
    fn test_boot_banner_ends_with_prompt_on_module_two() {
        let mut panel = MockPanel::new();
        let mut delay = MockDelay::new();
        play(&mut panel, &mut delay, BOOT_BANNER);

        // After the rearrange the prompt sits on module two and module
        // one was cleared a second time, keeping only the ellipsis
        assert_eq!(panel.calls.last(), Some(&text_call(Module::Two, PROMPT)));
        assert_eq!(panel.clear_count(Module::One), 2);
        assert_eq!(delay.total_ms(), 500);
    }

    #[test]
    fn test_hold_only_touches_the_delay() {
        let mut panel = MockPanel::new();
        let mut delay = MockDelay::new();
        play(&mut panel, &mut delay, &[BannerOp::Hold(100)]);
        assert!(panel.calls.is_empty());
        assert_eq!(delay.total_ms(), 100);
    }
}
