use menu_core::input::{CancelPhase, PressEdge};

#[test]
fn press_edge_reports_start_once() {
    let mut edge = PressEdge::new();

    assert_eq!(edge.update(false), None);
    assert_eq!(edge.update(true), Some(CancelPhase::Started));
    assert_eq!(edge.update(true), Some(CancelPhase::Performed));
    assert!(edge.is_held());
    assert_eq!(edge.update(false), Some(CancelPhase::Canceled));
    assert_eq!(edge.update(false), None);
    assert_eq!(edge.update(true), Some(CancelPhase::Started));
}
