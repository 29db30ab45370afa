use super::*;
use crate::draw::Palette;
use crate::input::parse_drag;
use crate::paint::{PaintHandler, PaintPropagator, PaintSettings, StartupLayout};

fn paint_session() -> Session<PaintHandler> {
    let handler = PaintHandler::new(
        PaintPropagator::new(Palette::default(), PaintSettings::default()),
        StartupLayout::default(),
    );
    Session::new(Grid::default(), handler)
}

fn stage(session: &Session<PaintHandler>, x: u32, y: u32) -> (usize, u8) {
    let cell = session.grid().cell(x, y).unwrap();
    (cell.data.index, cell.opacity)
}

#[test]
fn startup_runs_on_registration() {
    let session = paint_session();
    assert_eq!(session.grid().dimension(), 10);
    assert_eq!(stage(&session, 0, 0), (0, 0));
    assert!(!session.pointer().is_drawing);
}

#[test]
fn enter_before_press_changes_nothing() {
    let mut session = paint_session();

    let outcome = session.dispatch(PointerEvent::Enter { x: 3, y: 3 });

    assert_eq!(outcome, Dispatch::Handled { dirty: Vec::new() });
    assert_eq!(stage(&session, 3, 3), (0, 0));
}

#[test]
fn press_then_enter_paints_and_reports_dirty_beads() {
    let mut session = paint_session();
    session.dispatch(PointerEvent::Press { x: 5, y: 5 });
    assert!(session.pointer().is_drawing);

    let Dispatch::Handled { dirty } = session.dispatch(PointerEvent::Enter { x: 5, y: 5 }) else {
        panic!("enter inside grid should be handled");
    };

    assert_eq!(dirty.len(), 9);
    assert_eq!(dirty[0], (4, 4));
    assert_eq!(stage(&session, 5, 5), (0, 75));
    assert_eq!(stage(&session, 6, 6), (0, 20));
}

#[test]
fn release_stops_painting() {
    let mut session = paint_session();
    session.run(parse_drag("2,2").unwrap());
    assert!(!session.pointer().is_drawing);

    session.dispatch(PointerEvent::Enter { x: 7, y: 7 });
    assert_eq!(stage(&session, 7, 7), (0, 0));
    assert_eq!(stage(&session, 2, 2), (0, 75));
}

#[test]
fn out_of_range_events_are_dropped() {
    let mut session = paint_session();
    session.dispatch(PointerEvent::Press { x: 0, y: 0 });

    assert_eq!(
        session.dispatch(PointerEvent::Enter { x: 10, y: 0 }),
        Dispatch::Dropped
    );
    assert_eq!(
        session.dispatch(PointerEvent::Release { x: -1, y: 4 }),
        Dispatch::Dropped
    );

    assert!(session.pointer().is_drawing);
    assert_eq!(stage(&session, 9, 0), (0, 0));
    assert_eq!(session.stats().dropped, 2);
}

#[test]
fn run_accumulates_stats() {
    let mut session = paint_session();
    let stats = session.run(parse_drag("1,1;2,1;3,1").unwrap());

    assert_eq!(stats.handled, 5);
    assert_eq!(stats.dropped, 0);
    assert_eq!(stats.repainted, 9 * 3);
}

#[test]
fn reset_restores_initial_grid() {
    let mut session = paint_session();
    session.dispatch(PointerEvent::Press { x: 4, y: 4 });
    session.dispatch(PointerEvent::Enter { x: 4, y: 4 });

    session.reset();

    assert!(!session.pointer().is_drawing);
    assert_eq!(stage(&session, 4, 4), (0, 0));
    assert_eq!(stage(&session, 5, 5), (0, 0));
}

#[test]
fn exit_events_are_accepted_without_effect() {
    let mut session = paint_session();
    session.dispatch(PointerEvent::Press { x: 4, y: 4 });

    let outcome = session.dispatch(PointerEvent::Exit { x: 4, y: 4 });

    assert_eq!(outcome, Dispatch::Handled { dirty: Vec::new() });
    assert!(session.pointer().is_drawing);
}
