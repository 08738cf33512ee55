//! Scene activity as an explicit value, recomputed from three independent
//! inputs. The generator never reads this; renderers use it to decide when a
//! scene should animate or defer work.

/// Observable activity inputs for one displayed scene.
///
/// Each field is owned by a different observer (viewport intersection,
/// tab visibility, scroll debounce); none of them is global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneActivity {
    /// Scene container intersects the viewport.
    pub in_view: bool,
    /// Owning tab/document is visible.
    pub tab_visible: bool,
    /// A scroll gesture is in flight (debounced by the observer).
    pub scrolling: bool,
}

impl SceneActivity {
    /// State of a freshly mounted, undisturbed scene.
    pub fn at_rest() -> Self {
        Self {
            in_view: true,
            tab_visible: true,
            scrolling: false,
        }
    }

    /// A scene is active exactly when it is on screen, its tab is visible,
    /// and the user is not mid-scroll.
    pub fn is_active(self) -> bool {
        self.in_view && self.tab_visible && !self.scrolling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest_is_active() {
        assert!(SceneActivity::at_rest().is_active());
    }

    #[test]
    fn test_default_is_inactive() {
        // Default is all-false: not yet observed means not active.
        assert!(!SceneActivity::default().is_active());
    }

    #[test]
    fn test_any_blocking_input_deactivates() {
        let mut a = SceneActivity::at_rest();
        a.in_view = false;
        assert!(!a.is_active());

        let mut b = SceneActivity::at_rest();
        b.tab_visible = false;
        assert!(!b.is_active());

        let mut c = SceneActivity::at_rest();
        c.scrolling = true;
        assert!(!c.is_active());
    }
}
