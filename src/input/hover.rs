use super::event::HoverTarget;

/// Hover flags for the link container and each link.
///
/// The preview fades in while any flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverState {
    container: bool,
    links: Vec<bool>,
}

impl HoverState {
    /// Tracker for `link_count` links, nothing hovered.
    pub fn new(link_count: usize) -> Self {
        Self {
            container: false,
            links: vec![false; link_count],
        }
    }

    /// Set the hover flag of `target`. Unknown link indices are ignored
    /// and reported as `false`.
    pub fn set(&mut self, target: HoverTarget, hovered: bool) -> bool {
        match target {
            HoverTarget::Container => {
                self.container = hovered;
                true
            }
            HoverTarget::Link(index) => {
                let Some(flag) = self.links.get_mut(index) else {
                    return false;
                };
                *flag = hovered;
                true
            }
        }
    }

    /// Whether the container or any link is hovered.
    pub fn any(&self) -> bool {
        self.container || self.links.iter().any(|&h| h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_hovered_at_start() {
        let hover = HoverState::new(3);
        assert!(!hover.any());
        assert_eq!(hover.links.len(), 3);
    }

    #[test]
    fn any_link_or_container_counts() {
        let mut hover = HoverState::new(3);
        assert!(hover.set(HoverTarget::Link(1), true));
        assert!(hover.any());
        assert!(hover.set(HoverTarget::Link(1), false));
        assert!(!hover.any());
        assert!(hover.set(HoverTarget::Container, true));
        assert!(hover.any());
        assert!(hover.container);
    }

    #[test]
    fn leaving_one_link_keeps_others() {
        let mut hover = HoverState::new(2);
        let _ = hover.set(HoverTarget::Link(0), true);
        let _ = hover.set(HoverTarget::Link(1), true);
        let _ = hover.set(HoverTarget::Link(0), false);
        assert!(hover.any());
        assert_eq!(hover.links, [false, true]);
    }

    #[test]
    fn out_of_range_links_are_ignored() {
        let mut hover = HoverState::new(1);
        assert!(!hover.set(HoverTarget::Link(5), true));
        assert!(!hover.any());
        assert_eq!(hover.links, [false]);
    }
}
