//! Property tests for deriving the form layout from a snapshot

use feedback_form::config::{Appearance, Screenshot, Snapshot};
use feedback_form::layout::{
    CellKind, FeedbackFormLayout, LayoutError, Row, RowKind, ScreenshotObserver,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn snapshot(collector: bool, viewer: bool, user_enabled: bool, include: bool) -> Snapshot {
    Snapshot {
        appearance: Appearance::default(),
        screenshot: Rc::new(Screenshot::new("capture.png", 390, 844, vec![0xff; 8])),
        has_log_collector: collector,
        has_log_viewer: viewer,
        user_enabled_log_collection: user_enabled,
        include_screenshot: include,
    }
}

fn kinds(layout: &FeedbackFormLayout) -> Vec<RowKind> {
    layout
        .positions()
        .filter_map(|(s, r)| layout.row_at(s, r).ok().map(Row::kind))
        .collect()
}

proptest! {
    #[test]
    fn section_count_matches_included_blocks(
        collector in any::<bool>(),
        viewer in any::<bool>(),
        user_enabled in any::<bool>(),
        include in any::<bool>(),
    ) {
        let layout = FeedbackFormLayout::build(&snapshot(collector, viewer, user_enabled, include));
        let expected = 1 + usize::from(collector) + usize::from(include);

        prop_assert_eq!(layout.section_count(), expected);
        for section in 0..layout.section_count() {
            prop_assert_eq!(layout.row_count(section), Ok(1));
        }
        prop_assert_eq!(layout.total_row_count(), expected);
        prop_assert!(layout.row_count(expected).is_err());
    }

    #[test]
    fn collect_logs_first_when_available(
        viewer in any::<bool>(),
        user_enabled in any::<bool>(),
        include in any::<bool>(),
    ) {
        let layout = FeedbackFormLayout::build(&snapshot(true, viewer, user_enabled, include));
        prop_assert_eq!(kinds(&layout).first().copied(), Some(RowKind::CollectLogs));
    }

    #[test]
    fn screenshot_last_iff_included(
        collector in any::<bool>(),
        viewer in any::<bool>(),
        user_enabled in any::<bool>(),
        include in any::<bool>(),
    ) {
        let layout = FeedbackFormLayout::build(&snapshot(collector, viewer, user_enabled, include));
        let kinds = kinds(&layout);

        if include {
            prop_assert_eq!(kinds.last().copied(), Some(RowKind::Screenshot));
        } else {
            prop_assert!(!kinds.contains(&RowKind::Screenshot));
        }
    }

    #[test]
    fn can_view_follows_viewer_flag(
        viewer in any::<bool>(),
        user_enabled in any::<bool>(),
        include in any::<bool>(),
    ) {
        let layout = FeedbackFormLayout::build(&snapshot(true, viewer, user_enabled, include));
        match layout.row_at(0, 0) {
            Ok(Row::CollectLogs { enabled, can_view, .. }) => {
                prop_assert_eq!(*can_view, viewer);
                prop_assert_eq!(*enabled, user_enabled);
            }
            other => prop_assert!(false, "expected collect logs row, got {:?}", other),
        }
        let cell = layout.checkmark_cell(0, 0);
        prop_assert_eq!(cell.map(|c| c.show_disclosure), Ok(viewer));
    }

    #[test]
    fn build_is_deterministic(
        collector in any::<bool>(),
        viewer in any::<bool>(),
        user_enabled in any::<bool>(),
        include in any::<bool>(),
    ) {
        let snap = snapshot(collector, viewer, user_enabled, include);
        let first = FeedbackFormLayout::build(&snap);
        let second = FeedbackFormLayout::build(&snap);
        prop_assert_eq!(first.sections(), second.sections());
    }

    #[test]
    fn every_position_has_a_matching_cell(
        collector in any::<bool>(),
        viewer in any::<bool>(),
        user_enabled in any::<bool>(),
        include in any::<bool>(),
    ) {
        let layout = FeedbackFormLayout::build(&snapshot(collector, viewer, user_enabled, include));
        for (section, row) in layout.positions() {
            let kind = layout.row_at(section, row).map(Row::kind);
            prop_assert!(kind.is_ok());
            prop_assert!(layout.cell(section, row).is_ok());
            let wrong = match kind.map(RowKind::cell_kind) {
                Ok(CellKind::Checkmark) => layout.screenshot_cell(section, row).err(),
                Ok(CellKind::Screenshot) => layout.checkmark_cell(section, row).err(),
                Err(err) => Some(err),
            };
            let is_mismatch = matches!(wrong, Some(LayoutError::CellKindMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }
}

#[derive(Default)]
struct Recorder {
    taps: RefCell<Vec<(*const FeedbackFormLayout, Rc<Screenshot>)>>,
}

impl ScreenshotObserver for Recorder {
    fn on_screenshot_tapped(&self, layout: &FeedbackFormLayout, image: &Rc<Screenshot>) {
        self.taps
            .borrow_mut()
            .push((std::ptr::from_ref(layout), Rc::clone(image)));
    }
}

#[test]
fn tap_reports_original_image_and_layout() -> Result<(), LayoutError> {
    let snap = snapshot(true, true, false, true);
    let recorder = Rc::new(Recorder::default());
    let mut layout = FeedbackFormLayout::build(&snap);
    layout.set_observer(Rc::downgrade(&recorder));

    let cell = layout.screenshot_cell(2, 0)?;
    cell.tap();

    let taps = recorder.taps.borrow();
    assert_eq!(taps.len(), 1);
    assert!(std::ptr::eq(taps[0].0, std::ptr::from_ref(&layout)));
    assert!(Rc::ptr_eq(&taps[0].1, &snap.screenshot));
    Ok(())
}

#[test]
fn tap_with_released_observer_is_silent() -> Result<(), LayoutError> {
    let recorder = Rc::new(Recorder::default());
    let layout = FeedbackFormLayout::build(&snapshot(false, false, false, true))
        .with_observer(Rc::downgrade(&recorder));
    drop(recorder);

    layout.screenshot_cell(1, 0)?.tap();
    Ok(())
}
