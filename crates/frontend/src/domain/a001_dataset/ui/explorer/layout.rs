/// Regions of the explorer page, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSlot {
    FiltersPanel,
    DataSurface,
    Preview,
}

impl LayoutSlot {
    pub fn style(self) -> &'static str {
        match self {
            LayoutSlot::FiltersPanel => "flex: 0 0 350px; width: 350px;",
            LayoutSlot::DataSurface => "flex: 1; min-height: 600px; min-width: 0;",
            LayoutSlot::Preview => "flex: 0 0 auto; min-width: 400px;",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LayoutSlot::FiltersPanel => "explorer__filters",
            LayoutSlot::DataSurface => "explorer__data",
            LayoutSlot::Preview => "explorer__preview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub slots: Vec<LayoutSlot>,
}

impl PageLayout {
    pub fn has(&self, slot: LayoutSlot) -> bool {
        self.slots.contains(&slot)
    }
}

/// Slots to render; the data surface is always present.
pub fn compose_layout(show_filters_panel: bool, has_preview: bool) -> PageLayout {
    let mut slots = Vec::with_capacity(3);
    if show_filters_panel {
        slots.push(LayoutSlot::FiltersPanel);
    }
    slots.push(LayoutSlot::DataSurface);
    if has_preview {
        slots.push(LayoutSlot::Preview);
    }
    PageLayout { slots }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_presence() {
        for show in [false, true] {
            for preview in [false, true] {
                let layout = compose_layout(show, preview);
                assert_eq!(layout.has(LayoutSlot::FiltersPanel), show);
                assert_eq!(layout.has(LayoutSlot::Preview), preview);
                assert!(layout.has(LayoutSlot::DataSurface));
            }
        }
    }

    #[test]
    fn test_slot_order() {
        assert_eq!(
            compose_layout(true, true).slots,
            vec![
                LayoutSlot::FiltersPanel,
                LayoutSlot::DataSurface,
                LayoutSlot::Preview
            ]
        );
        assert_eq!(compose_layout(false, false).slots, vec![LayoutSlot::DataSurface]);
    }

    #[test]
    fn test_slot_sizing() {
        assert!(LayoutSlot::FiltersPanel.style().contains("350px"));
        assert!(LayoutSlot::DataSurface.style().contains("min-height: 600px"));
        assert!(LayoutSlot::DataSurface.style().contains("min-width: 0"));
        assert!(LayoutSlot::Preview.style().contains("min-width: 400px"));
    }
}
