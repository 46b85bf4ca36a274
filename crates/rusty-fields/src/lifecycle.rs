// File: rusty-fields/src/lifecycle.rs
// Purpose: State derived from field props across mount and updates
//
// Each derived value is keyed on exactly the inputs it reads. `mount` runs
// every rule once; `update` reruns a rule only when its key changed.

use crate::char_count::count;
use crate::described_by::{described_by, DescriptorParams};
use crate::field::{field_id, FieldControl};

/// Last seen key of a derived value
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tracked<K> {
    last: K,
}

impl<K: PartialEq> Tracked<K> {
    fn new(key: K) -> Self {
        Self { last: key }
    }

    /// Store `next`; true if it differs from the previous key
    fn changed(&mut self, next: K) -> bool {
        if self.last == next {
            false
        } else {
            self.last = next;
            true
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DescriptorKey {
    id: String,
    error: bool,
    support_text: bool,
    tool_tip: bool,
}

#[derive(Debug, Clone)]
pub struct FieldState {
    id: String,
    identity: Tracked<(String, String)>,
    described_by: Option<String>,
    descriptors: Tracked<DescriptorKey>,
    char_count: usize,
    counted: Tracked<Option<String>>,
}

impl FieldState {
    pub fn mount<C: FieldControl + ?Sized>(control: &C) -> Self {
        let core = control.core();
        let id = field_id(&core.form_id, &core.name);

        if core.show_char_count && control.count_source().is_none() {
            tracing::warn!(
                field = %id,
                "character count requested for a field without a text value; counter disabled"
            );
        }

        let counted = counting_key(control);
        let char_count = counted.as_deref().map(count).unwrap_or(0);
        let described_by = describe(control, &id);
        tracing::trace!(field = %id, ?described_by, char_count, "field mounted");

        Self {
            identity: Tracked::new((core.form_id.clone(), core.name.clone())),
            descriptors: Tracked::new(descriptor_key(control, &id)),
            described_by,
            char_count,
            counted: Tracked::new(counted),
            id,
        }
    }

    /// Apply new props. Values derived from unchanged inputs are kept.
    pub fn update<C: FieldControl + ?Sized>(&mut self, control: &C) {
        let core = control.core();

        if self
            .identity
            .changed((core.form_id.clone(), core.name.clone()))
        {
            self.id = field_id(&core.form_id, &core.name);
            tracing::trace!(field = %self.id, "field id changed");
        }

        if self.descriptors.changed(descriptor_key(control, &self.id)) {
            self.described_by = describe(control, &self.id);
            tracing::trace!(field = %self.id, described_by = ?self.described_by, "descriptors recomputed");
        }

        let counted = counting_key(control);
        if self.counted.changed(counted) {
            if let Some(text) = self.counted.last.as_deref() {
                self.char_count = count(text);
                tracing::trace!(field = %self.id, char_count = self.char_count, "character count recomputed");
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn described_by(&self) -> Option<&str> {
        self.described_by.as_deref()
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

fn describe<C: FieldControl + ?Sized>(control: &C, id: &str) -> Option<String> {
    let core = control.core();
    described_by(&DescriptorParams {
        error: core.error_text(),
        support_text: core.support_text(),
        tool_tip: core.tool_tip(),
        id,
        name: &core.name,
    })
}

fn descriptor_key<C: FieldControl + ?Sized>(control: &C, id: &str) -> DescriptorKey {
    let core = control.core();
    DescriptorKey {
        id: id.to_string(),
        error: core.error_text().is_some(),
        support_text: core.support_text().is_some(),
        tool_tip: core.tool_tip().is_some(),
    }
}

/// The text being counted, or `None` while counting is off
fn counting_key<C: FieldControl + ?Sized>(control: &C) -> Option<String> {
    if control.core().show_char_count {
        control.count_source().map(str::to_string)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldCore;
    use maud::{html, Markup};
    use std::cell::Cell;

    /// Control that records how often its value is read for counting
    struct Probe {
        core: FieldCore,
        value: String,
        reads: Cell<usize>,
    }

    impl Probe {
        fn new(value: &str) -> Self {
            let mut core = FieldCore::new("Probe", "probe", "f");
            core.show_char_count = true;
            core.max_length = Some(10);
            Self {
                core,
                value: value.to_string(),
                reads: Cell::new(0),
            }
        }
    }

    impl FieldControl for Probe {
        fn core(&self) -> &FieldCore {
            &self.core
        }

        fn count_source(&self) -> Option<&str> {
            self.reads.set(self.reads.get() + 1);
            Some(&self.value)
        }

        fn render_control(&self, _state: &FieldState) -> Markup {
            html! {}
        }
    }

    #[test]
    fn test_tracked_reports_changes_only() {
        let mut tracked = Tracked::new(1);
        assert!(!tracked.changed(1));
        assert!(tracked.changed(2));
        assert!(!tracked.changed(2));
    }

    #[test]
    fn test_mount_derives_everything() {
        let probe = Probe::new("abc");
        let state = FieldState::mount(&probe);
        assert_eq!(state.id(), "f-probe");
        assert_eq!(state.described_by(), None);
        assert_eq!(state.char_count(), 3);
    }

    #[test]
    fn test_update_recounts_on_value_change() {
        let mut state = FieldState::mount(&Probe::new("abc"));
        state.update(&Probe::new("abcdef"));
        assert_eq!(state.char_count(), 6);
        state.update(&Probe::new(""));
        assert_eq!(state.char_count(), 0);
    }

    #[test]
    fn test_update_keeps_id_until_identity_changes() {
        let mut state = FieldState::mount(&Probe::new("a"));
        state.update(&Probe::new("b"));
        assert_eq!(state.id(), "f-probe");

        let mut renamed = Probe::new("b");
        renamed.core.form_id = "g".to_string();
        state.update(&renamed);
        assert_eq!(state.id(), "g-probe");
    }

    #[test]
    fn test_descriptors_follow_presence_and_id() {
        let mut state = FieldState::mount(&Probe::new("a"));

        let mut errored = Probe::new("a");
        errored.core.error = Some("Bad".to_string());
        state.update(&errored);
        assert_eq!(state.described_by(), Some("f-probe_probe-help"));

        errored.core.name = "other".to_string();
        state.update(&errored);
        assert_eq!(state.described_by(), Some("f-other_other-help"));

        state.update(&Probe::new("a"));
        assert_eq!(state.described_by(), None);
    }

    #[test]
    fn test_disabled_counting_keeps_last_count() {
        let mut state = FieldState::mount(&Probe::new("abcd"));

        let mut off = Probe::new("abcdefgh");
        off.core.show_char_count = false;
        state.update(&off);
        assert_eq!(state.char_count(), 4);
        assert_eq!(off.reads.get(), 0);

        // switching counting back on recounts the current value
        state.update(&Probe::new("abcdefgh"));
        assert_eq!(state.char_count(), 8);
    }
}
