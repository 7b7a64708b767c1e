//! Interface Segregation: small capabilities instead of one fat interface.
//! A robot works but never eats; a square figure moves but never rotates.

use crate::capability::{Capability, Subject};
use crate::console::{Console, Tee};
use crate::error::CapabilityError;

// =============================================================================
// Workers
// =============================================================================

pub trait Workable {
    fn work(&self, out: &mut dyn Console);
}

pub trait Eatable {
    fn eat(&self, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Workable for Human {
    fn work(&self, out: &mut dyn Console) {
        out.line("Human is working...".to_string());
    }
}

impl Eatable for Human {
    fn eat(&self, out: &mut dyn Console) {
        out.line("Human is eating lunch".to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Workable for Robot {
    fn work(&self, out: &mut dyn Console) {
        out.line("Robot is working...".to_string());
    }
}

pub fn run_shift(workers: &[&dyn Workable], out: &mut dyn Console) {
    for worker in workers {
        worker.work(out);
    }
}

pub fn lunch_break(eaters: &[&dyn Eatable], out: &mut dyn Console) {
    for eater in eaters {
        eater.eat(out);
    }
}

impl Subject for Human {
    fn label(&self) -> &str {
        "Human"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Workable, Capability::Eatable]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["work", "eat"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "work" => self.work(out),
            "eat" => self.eat(out),
            _ => return Err(CapabilityError::unimplemented(self.label(), operation)),
        }
        Ok(None)
    }
}

impl Subject for Robot {
    fn label(&self) -> &str {
        "Robot"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Workable]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["work"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "work" => self.work(out),
            _ => return Err(CapabilityError::unimplemented(self.label(), operation)),
        }
        Ok(None)
    }
}

// =============================================================================
// Tetris figures
// =============================================================================

pub trait Positioned {
    fn x(&self) -> i32;
    fn y(&self) -> i32;
}

pub trait Moveable: Positioned {
    fn move_left(&mut self, out: &mut dyn Console);
    fn move_right(&mut self, out: &mut dyn Console);
}

pub trait Rotatable: Positioned {
    fn rotate(&mut self, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn step_left(&mut self, name: &str, out: &mut dyn Console) {
        self.x -= 1;
        out.line(format!("{} moved left to x={}", name, self.x));
    }

    fn step_right(&mut self, name: &str, out: &mut dyn Console) {
        self.x += 1;
        out.line(format!("{} moved right to x={}", name, self.x));
    }
}

/// Moves but cannot rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareFigure {
    position: Position,
}

impl SquareFigure {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
        }
    }
}

impl Positioned for SquareFigure {
    fn x(&self) -> i32 {
        self.position.x
    }

    fn y(&self) -> i32 {
        self.position.y
    }
}

impl Moveable for SquareFigure {
    fn move_left(&mut self, out: &mut dyn Console) {
        self.position.step_left("Square", out);
    }

    fn move_right(&mut self, out: &mut dyn Console) {
        self.position.step_right("Square", out);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZigzagFigure {
    position: Position,
}

impl ZigzagFigure {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
        }
    }
}

impl Positioned for ZigzagFigure {
    fn x(&self) -> i32 {
        self.position.x
    }

    fn y(&self) -> i32 {
        self.position.y
    }
}

impl Moveable for ZigzagFigure {
    fn move_left(&mut self, out: &mut dyn Console) {
        self.position.step_left("Zigzag", out);
    }

    fn move_right(&mut self, out: &mut dyn Console) {
        self.position.step_right("Zigzag", out);
    }
}

impl Rotatable for ZigzagFigure {
    fn rotate(&mut self, out: &mut dyn Console) {
        out.line("Zigzag rotated".to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFigure {
    position: Position,
}

impl LineFigure {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
        }
    }
}

impl Positioned for LineFigure {
    fn x(&self) -> i32 {
        self.position.x
    }

    fn y(&self) -> i32 {
        self.position.y
    }
}

impl Moveable for LineFigure {
    fn move_left(&mut self, out: &mut dyn Console) {
        self.position.step_left("Line", out);
    }

    fn move_right(&mut self, out: &mut dyn Console) {
        self.position.step_right("Line", out);
    }
}

impl Rotatable for LineFigure {
    fn rotate(&mut self, out: &mut dyn Console) {
        out.line("Line rotated".to_string());
    }
}

// =============================================================================
// Figure clients: written once against the capability, never the figure
// =============================================================================

/// What one figure call actually did: how far it moved and how many lines
/// it printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    pub operation: &'static str,
    pub dx: i32,
    pub lines: usize,
}

fn observe<F: Positioned + ?Sized>(
    figure: &mut F,
    operation: &'static str,
    out: &mut dyn Console,
    call: impl FnOnce(&mut F, &mut dyn Console),
) -> Observed {
    let before = figure.x();
    let mut tee = Tee::new(out);
    call(&mut *figure, &mut tee);
    Observed {
        operation,
        dx: figure.x() - before,
        lines: tee.into_captured().len(),
    }
}

/// Left then right. Returns what each call did, in order.
pub fn wiggle<M: Moveable + ?Sized>(figure: &mut M, out: &mut dyn Console) -> Vec<Observed> {
    vec![
        observe(&mut *figure, "move_left", &mut *out, |f, o| f.move_left(o)),
        observe(&mut *figure, "move_right", &mut *out, |f, o| f.move_right(o)),
    ]
}

pub fn wiggle_and_spin<F: Moveable + Rotatable + ?Sized>(
    figure: &mut F,
    out: &mut dyn Console,
) -> Vec<Observed> {
    let mut trace = wiggle(&mut *figure, &mut *out);
    trace.push(observe(figure, "rotate", out, |f, o| f.rotate(o)));
    trace
}

fn perform_figure_op<F: Moveable + ?Sized>(
    figure: &mut F,
    label: &str,
    operation: &str,
    out: &mut dyn Console,
) -> Result<Option<String>, CapabilityError> {
    match operation {
        "position" => return Ok(Some(format!("({}, {})", figure.x(), figure.y()))),
        "move_left" => figure.move_left(out),
        "move_right" => figure.move_right(out),
        _ => return Err(CapabilityError::unimplemented(label, operation)),
    }
    Ok(None)
}

impl Subject for SquareFigure {
    fn label(&self) -> &str {
        "SquareFigure"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Moveable]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["position", "move_left", "move_right"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        perform_figure_op(self, "SquareFigure", operation, out)
    }
}

impl Subject for ZigzagFigure {
    fn label(&self) -> &str {
        "ZigzagFigure"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Moveable, Capability::Rotatable]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["position", "move_left", "move_right", "rotate"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        if operation == "rotate" {
            self.rotate(out);
            return Ok(None);
        }
        perform_figure_op(self, "ZigzagFigure", operation, out)
    }
}

impl Subject for LineFigure {
    fn label(&self) -> &str {
        "LineFigure"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Moveable, Capability::Rotatable]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["position", "move_left", "move_right", "rotate"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        if operation == "rotate" {
            self.rotate(out);
            return Ok(None);
        }
        perform_figure_op(self, "LineFigure", operation, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use proptest::prelude::*;

    #[test]
    fn test_workers_and_eaters() {
        let mut out = Transcript::new();
        run_shift(&[&Human, &Robot], &mut out);
        lunch_break(&[&Human], &mut out);

        assert_eq!(
            out.lines(),
            ["Human is working...", "Robot is working...", "Human is eating lunch"]
        );
    }

    #[test]
    fn test_robot_subject_cannot_eat() {
        let mut out = Transcript::new();
        let err = Robot.perform("eat", None, &mut out).unwrap_err();
        assert_eq!(err, CapabilityError::unimplemented("Robot", "eat"));
    }

    #[test]
    fn test_square_figure_moves() {
        let mut square = SquareFigure::new(0, 0);
        let mut out = Transcript::new();

        square.move_left(&mut out);
        assert_eq!(square.x(), -1);
        square.move_right(&mut out);
        assert_eq!(square.x(), 0);
        assert_eq!(square.y(), 0);

        assert_eq!(
            out.lines(),
            ["Square moved left to x=-1", "Square moved right to x=0"]
        );
    }

    fn observed(operation: &'static str, dx: i32) -> Observed {
        Observed {
            operation,
            dx,
            lines: 1,
        }
    }

    #[test]
    fn test_zigzag_and_line_follow_the_same_script() {
        let mut zigzag = ZigzagFigure::new(2, 0);
        let mut line = LineFigure::new(4, 0);
        let mut out = Transcript::new();

        let zigzag_trace = wiggle_and_spin(&mut zigzag, &mut out);
        let line_trace = wiggle_and_spin(&mut line, &mut out);

        assert_eq!(zigzag_trace, line_trace);
        assert_eq!(
            zigzag_trace,
            vec![
                observed("move_left", -1),
                observed("move_right", 1),
                observed("rotate", 0),
            ]
        );
        assert_eq!(
            out.lines(),
            [
                "Zigzag moved left to x=1",
                "Zigzag moved right to x=2",
                "Zigzag rotated",
                "Line moved left to x=3",
                "Line moved right to x=4",
                "Line rotated",
            ]
        );
    }

    #[test]
    fn test_square_subject_cannot_rotate() {
        let mut square = SquareFigure::new(0, 0);
        let mut out = Transcript::new();

        let err = square.perform("rotate", None, &mut out).unwrap_err();
        assert_eq!(err, CapabilityError::unimplemented("SquareFigure", "rotate"));

        let pos = square.perform("position", None, &mut out).unwrap();
        assert_eq!(pos.as_deref(), Some("(0, 0)"));
    }

    // Accepts the calls but neither moves nor prints.
    struct Frozen {
        position: Position,
    }

    impl Positioned for Frozen {
        fn x(&self) -> i32 {
            self.position.x
        }

        fn y(&self) -> i32 {
            self.position.y
        }
    }

    impl Moveable for Frozen {
        fn move_left(&mut self, _out: &mut dyn Console) {}
        fn move_right(&mut self, _out: &mut dyn Console) {}
    }

    #[test]
    fn test_figure_that_skips_its_moves_is_caught() {
        let mut out = Transcript::new();
        let reference = wiggle(&mut SquareFigure::new(0, 0), &mut out);
        let frozen = wiggle(
            &mut Frozen {
                position: Position::new(0, 0),
            },
            &mut out,
        );

        assert_ne!(reference, frozen);
        assert_eq!(frozen[0].dx, 0);
        assert_eq!(frozen[0].lines, 0);
        assert_eq!(out.lines().len(), 2);
    }

    fn moveables(x: i32, y: i32) -> Vec<Box<dyn Moveable>> {
        vec![
            Box::new(SquareFigure::new(x, y)),
            Box::new(ZigzagFigure::new(x, y)),
            Box::new(LineFigure::new(x, y)),
        ]
    }

    proptest! {
        #[test]
        fn test_left_then_right_restores_x(x in -10_000i32..10_000, y in -100i32..100) {
            for mut figure in moveables(x, y) {
                let mut out = Transcript::new();
                wiggle(figure.as_mut(), &mut out);
                prop_assert_eq!(figure.x(), x);
                prop_assert_eq!(figure.y(), y);
            }
        }

        #[test]
        fn test_moveables_share_control_flow(x in -10_000i32..10_000) {
            let traces: Vec<_> = moveables(x, 0)
                .into_iter()
                .map(|mut figure| wiggle(figure.as_mut(), &mut Transcript::new()))
                .collect();
            let expected = vec![observed("move_left", -1), observed("move_right", 1)];
            for trace in traces {
                prop_assert_eq!(&trace, &expected);
            }
        }
    }
}
