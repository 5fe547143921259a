use serde::{Deserialize, Serialize};

use crate::dom::Dom;

/// Discrete layout bucket derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub const ALL: [ViewportClass; 3] = [
        ViewportClass::Mobile,
        ViewportClass::Tablet,
        ViewportClass::Desktop,
    ];

    /// Marker class carried by `<body>` while this bucket is active.
    pub fn marker(self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Tablet => "tablet",
            ViewportClass::Desktop => "desktop",
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

/// Inclusive upper widths (CSS px) of the mobile and tablet buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile_max: u32,
    pub tablet_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 768,
            tablet_max: 1024,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, width: u32) -> ViewportClass {
        if width <= self.mobile_max {
            ViewportClass::Mobile
        } else if width <= self.tablet_max {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Classify with the default breakpoints (mobile <= 768, tablet <= 1024).
pub fn classify(width: u32) -> ViewportClass {
    Breakpoints::default().classify(width)
}

/// Put exactly one size marker on `<body>`, clearing the other two first.
pub fn apply_marker<D: Dom>(dom: &mut D, class: ViewportClass) {
    let body = dom.body();
    for other in ViewportClass::ALL {
        if other != class {
            dom.remove_class(&body, other.marker());
        }
    }
    dom.add_class(&body, class.marker());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDom;

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(0), ViewportClass::Mobile);
        assert_eq!(classify(768), ViewportClass::Mobile);
        assert_eq!(classify(769), ViewportClass::Tablet);
        assert_eq!(classify(1024), ViewportClass::Tablet);
        assert_eq!(classify(1025), ViewportClass::Desktop);
        assert_eq!(classify(u32::MAX), ViewportClass::Desktop);
    }

    #[test]
    fn custom_breakpoints() {
        let bp = Breakpoints {
            mobile_max: 600,
            tablet_max: 900,
        };
        assert_eq!(bp.classify(700), ViewportClass::Tablet);
        assert_eq!(bp.classify(901), ViewportClass::Desktop);
    }

    #[test]
    fn marker_never_accumulates() {
        let mut dom = MemoryDom::new(1280);
        let body = dom.body();
        for width in [320, 800, 1400, 500, 500, 1000] {
            apply_marker(&mut dom, classify(width));
            let markers: Vec<_> = ViewportClass::ALL
                .iter()
                .filter(|c| dom.has_class(&body, c.marker()))
                .collect();
            assert_eq!(markers, vec![&classify(width)]);
        }
    }
}
