use crate::dom::{Dom, EventKind};
use crate::{Command, Effect};

/// Marker on `<body>` once touch input is detected.
pub const TOUCH_DEVICE_CLASS: &str = "touch-device";
/// Transient class while an element is being pressed.
pub const PRESSED_CLASS: &str = "touch-active";

/// Raw platform signals read at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchSignals {
    /// `ontouchstart` exists on the window.
    pub has_touch_start: bool,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: u32,
}

/// Whether the page runs on a touch-capable device. Fixed for the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchCapability {
    touch: bool,
}

impl TouchCapability {
    pub fn detect(signals: TouchSignals) -> Self {
        Self {
            touch: signals.has_touch_start || signals.max_touch_points > 0,
        }
    }

    pub fn is_touch(self) -> bool {
        self.touch
    }
}

/// Mark the document and bind press/release on every interactive element.
/// Does nothing at all on non-touch devices.
pub fn enhance<D: Dom>(
    dom: &mut D,
    capability: TouchCapability,
    interactive: &crate::Selector,
    effects: &mut Vec<Effect<D::Node>>,
) -> usize {
    if !capability.is_touch() {
        return 0;
    }
    let body = dom.body();
    dom.add_class(&body, TOUCH_DEVICE_CLASS);
    let targets = dom.select_all(None, interactive);
    for target in &targets {
        effects.push(Effect::Bind {
            target: target.clone(),
            event: EventKind::TouchStart,
            command: Command::Press {
                target: target.clone(),
            },
        });
        for event in [EventKind::TouchEnd, EventKind::TouchCancel] {
            effects.push(Effect::Bind {
                target: target.clone(),
                event,
                command: Command::Release {
                    target: target.clone(),
                },
            });
        }
    }
    targets.len()
}
